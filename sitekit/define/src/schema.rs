//! Model and enum schemas.
//!
//! Models describe the JSON payloads exchanged with the service. Each model
//! has an optional base type; the generator flattens inherited properties into
//! every derived model and emits a discriminated enum for polymorphic bases.

/// Whether a model is an addressable entity or a plain value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    Entity,
    Complex,
}

/// Scalar and composite property types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyType {
    String,
    Bool,
    Int32,
    Int64,
    Double,
    DateTime,
    Date,
    TimeOfDay,
    Duration,
    Guid,
    /// Untyped JSON value.
    Json,
    /// Reference to another model by name.
    Model(String),
    /// Reference to an enum by name.
    Enum(String),
    Collection(Box<PropertyType>),
}

impl PropertyType {
    pub fn model(name: &str) -> Self {
        Self::Model(name.to_string())
    }

    pub fn enumeration(name: &str) -> Self {
        Self::Enum(name.to_string())
    }

    pub fn collection_of(inner: PropertyType) -> Self {
        Self::Collection(Box::new(inner))
    }

    /// Model or enum name this type refers to, looking through collections.
    pub fn referenced_name(&self) -> Option<&str> {
        match self {
            Self::Model(name) | Self::Enum(name) => Some(name),
            Self::Collection(inner) => inner.referenced_name(),
            _ => None,
        }
    }
}

/// One property of a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Name on the wire (camelCase, or `@odata.*` annotations).
    pub name: String,
    pub ty: PropertyType,
    pub description: Option<String>,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: PropertyType) -> Self {
        Self {
            name: name.into(),
            ty,
            description: None,
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A model type.
///
/// ## Examples
///
/// ```
/// use sitekit_define::{ModelKind, ModelType, Property, PropertyType};
///
/// let site = ModelType::entity("Site")
///     .base("BaseItem")
///     .odata_type("#microsoft.graph.site")
///     .property(Property::new("displayName", PropertyType::String));
///
/// assert_eq!(site.kind, ModelKind::Entity);
/// assert_eq!(site.base.as_deref(), Some("BaseItem"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelType {
    pub name: String,
    pub description: Option<String>,
    pub kind: ModelKind,
    pub base: Option<String>,
    /// Discriminator value written to `@odata.type`.
    pub odata_type: Option<String>,
    pub properties: Vec<Property>,
}

impl ModelType {
    fn with_kind(name: impl Into<String>, kind: ModelKind) -> Self {
        Self {
            name: name.into(),
            description: None,
            kind,
            base: None,
            odata_type: None,
            properties: Vec::new(),
        }
    }

    pub fn entity(name: impl Into<String>) -> Self {
        Self::with_kind(name, ModelKind::Entity)
    }

    pub fn complex(name: impl Into<String>) -> Self {
        Self::with_kind(name, ModelKind::Complex)
    }

    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    pub fn odata_type(mut self, odata_type: impl Into<String>) -> Self {
        self.odata_type = Some(odata_type.into());
        self
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Adds several properties given as `(wire name, type)` pairs.
    pub fn properties(mut self, properties: impl IntoIterator<Item = (&'static str, PropertyType)>) -> Self {
        self.properties
            .extend(properties.into_iter().map(|(name, ty)| Property::new(name, ty)));
        self
    }
}

/// A string enumeration.
///
/// Generated enums always gain a catch-all variant for values added by the
/// service after generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumType {
    pub name: String,
    pub description: Option<String>,
    /// Wire values in declaration order.
    pub values: Vec<String>,
}

impl EnumType {
    pub fn new(name: impl Into<String>, values: &[&str]) -> Self {
        Self {
            name: name.into(),
            description: None,
            values: values.iter().map(|v| (*v).to_string()).collect(),
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn referenced_name_sees_through_collections() {
        let ty = PropertyType::collection_of(PropertyType::model("Site"));
        assert_eq!(ty.referenced_name(), Some("Site"));
        assert_eq!(PropertyType::String.referenced_name(), None);
    }
}

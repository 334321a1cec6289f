//! Decoded response bodies.

use serde::Deserialize;
use serde_json::Value;

use super::primitive::{Primitive, PrimitiveType, PrimitiveValue};
use super::{Parsable, discriminator_value};
use crate::error::SerializationError;

/// The root of a decoded response body.
///
/// Codecs turn raw bytes into a node; builders then read it as a model, a
/// collection of models, or a primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNode(Value);

impl ParseNode {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Returns the named child property.
    pub fn child(&self, name: &str) -> Option<ParseNode> {
        self.0.get(name).cloned().map(Self)
    }

    /// Returns the `@odata.type` discriminator of this node.
    pub fn discriminator(&self) -> Option<&str> {
        discriminator_value(&self.0)
    }

    /// Reads the node as a model.
    ///
    /// ## Errors
    ///
    /// Returns [`SerializationError::JsonParse`] when the node does not match
    /// the model's shape.
    pub fn get_object_value<T: Parsable>(&self) -> Result<T, SerializationError> {
        Ok(T::deserialize(&self.0)?)
    }

    /// Reads the node as a top-level array of models.
    pub fn get_collection_of_object_values<T: Parsable>(&self) -> Result<Vec<T>, SerializationError> {
        Ok(Vec::<T>::deserialize(&self.0)?)
    }

    /// Reads the node as a primitive of runtime-selected type.
    pub fn get_primitive_value(&self, ty: PrimitiveType) -> Result<PrimitiveValue, SerializationError> {
        PrimitiveValue::from_json(ty, &self.0)
    }

    /// Reads the node as a statically typed primitive.
    pub fn get_primitive<P: Primitive>(&self) -> Result<P, SerializationError> {
        let value = self.get_primitive_value(P::TYPE)?;
        P::from_value(value).ok_or_else(|| SerializationError::unexpected(P::TYPE, self.0.to_string()))
    }
}

impl From<Value> for ParseNode {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Item {
        id: String,
    }

    #[test]
    fn reads_object_and_collection() {
        let node = ParseNode::new(json!({"id": "a"}));
        assert_eq!(node.get_object_value::<Item>().unwrap(), Item { id: "a".into() });

        let list = ParseNode::new(json!([{"id": "a"}, {"id": "b"}]));
        let items = list.get_collection_of_object_values::<Item>().unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn shape_mismatch_is_json_error() {
        let node = ParseNode::new(json!({"name": "x"}));
        let err = node.get_object_value::<Item>().unwrap_err();
        assert!(matches!(err, SerializationError::JsonParse(_)));
    }

    #[test]
    fn child_and_discriminator() {
        let node = ParseNode::new(json!({"error": {"code": "badRequest"}, "@odata.type": "#x"}));
        assert_eq!(
            node.child("error").and_then(|c| c.child("code")).map(ParseNode::into_value),
            Some(json!("badRequest"))
        );
        assert_eq!(node.discriminator(), Some("#x"));
    }

    #[test]
    fn typed_primitive_from_text() {
        let node = ParseNode::new(json!("42"));
        assert_eq!(node.get_primitive::<i32>().unwrap(), 42);
    }
}

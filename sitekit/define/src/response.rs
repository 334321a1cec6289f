//! What an operation returns.

use crate::schema::PropertyType;

/// Response shape of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseKind {
    /// A JSON-decoded model.
    Model(String),
    /// A scalar read from a `text/plain` body (e.g., `$count`).
    Primitive(PropertyType),
    /// The raw body bytes.
    Bytes,
    /// No content is expected.
    Empty,
}

impl ResponseKind {
    pub fn model(name: impl Into<String>) -> Self {
        Self::Model(name.into())
    }

    /// The referenced model name, if any.
    pub fn model_name(&self) -> Option<&str> {
        match self {
            Self::Model(name) => Some(name),
            _ => None,
        }
    }
}

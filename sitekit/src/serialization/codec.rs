//! Content-type codecs.

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use serde_json::{Map, Value};
use url::form_urlencoded;

use super::ParseNode;
use crate::error::SerializationError;

/// Reads and writes one content type.
///
/// Codecs work on the JSON value model: request bodies are serialized to a
/// [`Value`] first, and response bodies are decoded into a [`ParseNode`].
pub trait Codec: Send + Sync + fmt::Debug {
    /// The primary content type handled, e.g. `application/json`.
    fn content_type(&self) -> &str;

    /// Decodes a response body.
    fn parse(&self, body: &[u8]) -> Result<ParseNode, SerializationError>;

    /// Encodes a request body.
    fn serialize(&self, value: &Value) -> Result<Bytes, SerializationError>;
}

/// `application/json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn content_type(&self) -> &str {
        "application/json"
    }

    fn parse(&self, body: &[u8]) -> Result<ParseNode, SerializationError> {
        Ok(ParseNode::new(serde_json::from_slice(body)?))
    }

    fn serialize(&self, value: &Value) -> Result<Bytes, SerializationError> {
        Ok(Bytes::from(serde_json::to_vec(value)?))
    }
}

/// `text/plain`: the body becomes a single string node.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextCodec;

impl Codec for TextCodec {
    fn content_type(&self) -> &str {
        "text/plain"
    }

    fn parse(&self, body: &[u8]) -> Result<ParseNode, SerializationError> {
        let text = std::str::from_utf8(body).map_err(|_| SerializationError::InvalidUtf8)?;
        Ok(ParseNode::new(Value::String(text.trim().to_string())))
    }

    fn serialize(&self, value: &Value) -> Result<Bytes, SerializationError> {
        match value {
            Value::String(s) => Ok(Bytes::from(s.clone())),
            Value::Number(n) => Ok(Bytes::from(n.to_string())),
            Value::Bool(b) => Ok(Bytes::from(b.to_string())),
            Value::Null => Ok(Bytes::new()),
            other => Err(unsupported(self.content_type(), other)),
        }
    }
}

/// `application/x-www-form-urlencoded` for flat objects.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormCodec;

impl Codec for FormCodec {
    fn content_type(&self) -> &str {
        "application/x-www-form-urlencoded"
    }

    fn parse(&self, body: &[u8]) -> Result<ParseNode, SerializationError> {
        let mut object = Map::new();
        for (key, value) in form_urlencoded::parse(body) {
            object.insert(key.into_owned(), Value::String(value.into_owned()));
        }
        Ok(ParseNode::new(Value::Object(object)))
    }

    fn serialize(&self, value: &Value) -> Result<Bytes, SerializationError> {
        let Value::Object(object) = value else {
            return Err(unsupported(self.content_type(), value));
        };
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in object {
            match value {
                Value::Null => {}
                Value::Array(items) => {
                    for item in items {
                        serializer.append_pair(key, &form_scalar(key, item)?);
                    }
                }
                scalar => {
                    serializer.append_pair(key, &form_scalar(key, scalar)?);
                }
            }
        }
        Ok(Bytes::from(serializer.finish()))
    }
}

fn form_scalar(key: &str, value: &Value) -> Result<String, SerializationError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(SerializationError::Form(format!(
            "property `{key}` is not a scalar"
        ))),
    }
}

fn unsupported(content_type: &str, value: &Value) -> SerializationError {
    let kind = match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };
    SerializationError::UnsupportedValue {
        content_type: content_type.to_string(),
        kind: kind.to_string(),
    }
}

/// Strips parameters and lowercases a content type.
///
/// `Application/JSON; charset=utf-8` becomes `application/json`.
pub fn normalize_content_type(raw: &str) -> String {
    raw.split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Vendor types such as `application/vnd.api+json` fall back to
/// `application/json`.
fn vendor_fallback(content_type: &str) -> Option<String> {
    let (kind, subtype) = content_type.split_once('/')?;
    let (_, suffix) = subtype.rsplit_once('+')?;
    Some(format!("{kind}/{suffix}"))
}

/// Codecs keyed by content type.
///
/// The default registry knows JSON, plain text and form encoding.
#[derive(Debug, Clone)]
pub struct CodecRegistry {
    codecs: Vec<Arc<dyn Codec>>,
}

impl Default for CodecRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(JsonCodec);
        registry.register(TextCodec);
        registry.register(FormCodec);
        registry
    }
}

impl CodecRegistry {
    /// A registry with no codecs.
    pub fn empty() -> Self {
        Self { codecs: Vec::new() }
    }

    /// Registers `codec`, replacing any codec for the same content type.
    pub fn register<C: Codec + 'static>(&mut self, codec: C) {
        let codec: Arc<dyn Codec> = Arc::new(codec);
        let key = normalize_content_type(codec.content_type());
        match self
            .codecs
            .iter_mut()
            .find(|c| normalize_content_type(c.content_type()) == key)
        {
            Some(slot) => *slot = codec,
            None => self.codecs.push(codec),
        }
    }

    /// Finds the codec for a (possibly parameterised) content type.
    ///
    /// ## Errors
    ///
    /// Returns [`SerializationError::UnsupportedContentType`] when neither the
    /// content type nor its vendor fallback is registered.
    pub fn get(&self, content_type: &str) -> Result<&dyn Codec, SerializationError> {
        let normalized = normalize_content_type(content_type);
        let found = self.find(&normalized).or_else(|| {
            vendor_fallback(&normalized).and_then(|fallback| self.find(&fallback))
        });
        found.ok_or(SerializationError::UnsupportedContentType {
            content_type: normalized,
        })
    }

    fn find(&self, key: &str) -> Option<&dyn Codec> {
        self.codecs
            .iter()
            .find(|c| normalize_content_type(c.content_type()) == key)
            .map(Arc::as_ref)
    }

    /// Serializes a model with the codec for `content_type`.
    pub fn serialize<T: serde::Serialize + ?Sized>(
        &self,
        content_type: &str,
        model: &T,
    ) -> Result<Bytes, SerializationError> {
        let value = serde_json::to_value(model)?;
        self.get(content_type)?.serialize(&value)
    }

    pub fn content_types(&self) -> impl Iterator<Item = &str> {
        self.codecs.iter().map(|c| c.content_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // =========================================================================
    // Registry lookup
    // =========================================================================

    #[test]
    fn lookup_ignores_parameters_and_case() {
        let registry = CodecRegistry::default();
        let codec = registry.get("Application/JSON; charset=utf-8").unwrap();
        assert_eq!(codec.content_type(), "application/json");
    }

    #[test]
    fn vendor_types_fall_back_to_suffix() {
        let registry = CodecRegistry::default();
        let codec = registry.get("application/vnd.contoso.site+json").unwrap();
        assert_eq!(codec.content_type(), "application/json");
    }

    #[test]
    fn unknown_type_is_rejected() {
        let registry = CodecRegistry::default();
        let err = registry.get("application/xml").unwrap_err();
        assert!(matches!(
            err,
            SerializationError::UnsupportedContentType { ref content_type } if content_type == "application/xml"
        ));
        assert!(CodecRegistry::empty().get("application/json").is_err());
    }

    #[test]
    fn serialize_accepts_unsized_values() {
        let registry = CodecRegistry::default();
        let ids: &[&str] = &["a", "b"];
        let body = registry.serialize("application/json", ids).unwrap();
        assert_eq!(&body[..], br#"["a","b"]"#);

        let text = registry.serialize("text/plain", "hello").unwrap();
        assert_eq!(&text[..], b"hello");
    }

    // =========================================================================
    // Codecs
    // =========================================================================

    #[test]
    fn text_codec_trims_body() {
        let node = TextCodec.parse(b"42\n").unwrap();
        assert_eq!(node.value(), &json!("42"));
        assert!(TextCodec.parse(&[0xff, 0xfe]).is_err());
    }

    #[test]
    fn text_codec_rejects_objects() {
        let err = TextCodec.serialize(&json!({"a": 1})).unwrap_err();
        assert!(matches!(err, SerializationError::UnsupportedValue { .. }));
    }

    #[test]
    fn form_codec_round_trip() {
        let body = FormCodec
            .serialize(&json!({"name": "a b", "tags": ["x", "y"], "skip": null}))
            .unwrap();
        assert_eq!(&body[..], b"name=a+b&tags=x&tags=y");

        let node = FormCodec.parse(b"name=a+b&n=1").unwrap();
        assert_eq!(node.value(), &json!({"name": "a b", "n": "1"}));
    }

    #[test]
    fn registry_serializes_models() {
        let registry = CodecRegistry::default();
        let bytes = registry
            .serialize("application/json", &json!({"displayName": "Team"}))
            .unwrap();
        assert_eq!(&bytes[..], br#"{"displayName":"Team"}"#);
    }
}

//! Model contract, parse nodes and codecs.
//!
//! Models are plain serde types: the derived `Deserialize` enumerates named
//! fields with a reader per field, and `Serialize` writes the model to any
//! serde sink. The [`Parsable`] marker ties those bounds together so builders
//! and adapters can be generic over "anything the codecs can read and write".

mod codec;
mod parse_node;
mod primitive;

pub use codec::{Codec, CodecRegistry, FormCodec, JsonCodec, TextCodec, normalize_content_type};
pub use parse_node::ParseNode;
pub use primitive::{Primitive, PrimitiveType, PrimitiveValue, parse_iso_duration};

use std::collections::BTreeMap;
use std::fmt::Debug;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Property carrying the polymorphic type discriminator.
pub const ODATA_TYPE_KEY: &str = "@odata.type";

/// Properties not declared by a model, preserved across a round trip.
pub type AdditionalData = BTreeMap<String, serde_json::Value>;

/// Marker trait for model types that codecs can read and write.
///
/// Automatically implemented for every type with the right serde bounds, so
/// generated models only need `#[derive(Serialize, Deserialize)]`.
///
/// ## Examples
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use sitekit::Parsable;
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// struct Site {
///     id: Option<String>,
/// }
///
/// fn assert_parsable<T: Parsable>() {}
/// assert_parsable::<Site>();
/// ```
pub trait Parsable: Serialize + DeserializeOwned + Debug + Clone + Send + Sync + 'static {}

impl<T> Parsable for T where T: Serialize + DeserializeOwned + Debug + Clone + Send + Sync + 'static {}

/// A model that keeps undeclared properties.
pub trait AdditionalDataHolder {
    fn additional_data(&self) -> &AdditionalData;
    fn additional_data_mut(&mut self) -> &mut AdditionalData;
}

/// Reads the `@odata.type` discriminator of a JSON object.
pub fn discriminator_value(value: &serde_json::Value) -> Option<&str> {
    value.get(ODATA_TYPE_KEY)?.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    struct Note {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(flatten)]
        additional_data: AdditionalData,
    }

    impl AdditionalDataHolder for Note {
        fn additional_data(&self) -> &AdditionalData {
            &self.additional_data
        }
        fn additional_data_mut(&mut self) -> &mut AdditionalData {
            &mut self.additional_data
        }
    }

    #[test]
    fn unknown_properties_survive_round_trip() {
        let input = json!({"id": "n1", "color": "blue", "count": 3});
        let note: Note = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(note.additional_data().get("color"), Some(&json!("blue")));
        assert_eq!(serde_json::to_value(&note).unwrap(), input);
    }

    #[test]
    fn discriminator_reads_odata_type() {
        let value = json!({"@odata.type": "#microsoft.graph.sitePage"});
        assert_eq!(discriminator_value(&value), Some("#microsoft.graph.sitePage"));
        assert_eq!(discriminator_value(&json!({"id": "x"})), None);
        assert_eq!(discriminator_value(&json!("text")), None);
    }
}

//! Normalized insert payloads.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::sanitize::coerce;
use crate::value_types::DataType;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InsertValueError {
    #[error("insert payload is {0}, expected a string or an embed object")]
    UnsupportedShape(&'static str),

    #[error("embed object has none of the keys image, video, mention, file, formula")]
    UnknownEmbed,

    #[error("{kind:?} embed value must be {expected}")]
    InvalidEmbedValue {
        kind: DataType,
        expected: &'static str,
    },
}

/// Structured payload of a mention or file embed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EmbedPayload(Map<String, Value>);

impl EmbedPayload {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// String form of a scalar sub-field such as `name` or `user`.
    pub fn field(&self, key: &str) -> Option<String> {
        self.0.get(key).and_then(coerce::scalar_string)
    }

    /// Attribute record embedded in the payload, if any.
    pub fn attributes(&self) -> Option<&Value> {
        self.0.get("attributes").filter(|v| !v.is_null())
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// A classified insert value. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum InsertValue {
    Text(String),
    Image(String),
    Video(String),
    Formula(String),
    Mention(EmbedPayload),
    File(EmbedPayload),
}

impl InsertValue {
    /// Classifies a raw `insert` payload by inspecting its shape once.
    ///
    /// Strings are text. Objects are embeds keyed by the first of
    /// `image`, `video`, `mention`, `file`, `formula` they contain.
    pub fn classify(raw: &Value) -> Result<Self, InsertValueError> {
        let obj = match raw {
            Value::String(s) => return Ok(InsertValue::Text(s.clone())),
            Value::Object(obj) => obj,
            Value::Null => return Err(InsertValueError::UnsupportedShape("null")),
            Value::Bool(_) => return Err(InsertValueError::UnsupportedShape("a boolean")),
            Value::Number(_) => return Err(InsertValueError::UnsupportedShape("a number")),
            Value::Array(_) => return Err(InsertValueError::UnsupportedShape("an array")),
        };

        let (kind, value) = DataType::EMBEDS
            .iter()
            .find_map(|kind| obj.get(kind.as_str()).map(|v| (*kind, v)))
            .ok_or(InsertValueError::UnknownEmbed)?;

        let text = || {
            coerce::scalar_string(value).ok_or(InsertValueError::InvalidEmbedValue {
                kind,
                expected: "a scalar",
            })
        };
        let payload = || match value {
            Value::Object(fields) => Ok(EmbedPayload::new(fields.clone())),
            _ => Err(InsertValueError::InvalidEmbedValue {
                kind,
                expected: "an object",
            }),
        };

        Ok(match kind {
            DataType::Image => InsertValue::Image(text()?),
            DataType::Video => InsertValue::Video(text()?),
            DataType::Formula => InsertValue::Formula(text()?),
            DataType::Mention => InsertValue::Mention(payload()?),
            DataType::File => InsertValue::File(payload()?),
            DataType::Text => return Err(InsertValueError::UnknownEmbed),
        })
    }

    pub fn data_type(&self) -> DataType {
        match self {
            InsertValue::Text(_) => DataType::Text,
            InsertValue::Image(_) => DataType::Image,
            InsertValue::Video(_) => DataType::Video,
            InsertValue::Formula(_) => DataType::Formula,
            InsertValue::Mention(_) => DataType::Mention,
            InsertValue::File(_) => DataType::File,
        }
    }

    /// The string value of text-like kinds; `None` for mentions and files.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            InsertValue::Text(s)
            | InsertValue::Image(s)
            | InsertValue::Video(s)
            | InsertValue::Formula(s) => Some(s),
            InsertValue::Mention(_) | InsertValue::File(_) => None,
        }
    }

    pub fn as_embed(&self) -> Option<&EmbedPayload> {
        match self {
            InsertValue::Mention(p) | InsertValue::File(p) => Some(p),
            _ => None,
        }
    }
}

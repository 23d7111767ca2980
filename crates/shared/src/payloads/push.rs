use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    config::{DEFAULT_BODY, DEFAULT_TITLE},
    error::PayloadError,
};

/// The json body the server sends with each push message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushPayload {
    pub title: Option<String>,
    pub message: Option<String>,
}

/// Only non-empty strings count as present
fn string_field(value: &Value, key: &str) -> Option<String> {
    match value.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

impl PushPayload {
    /// Decodes the text of a push message.
    ///
    /// Invalid json is an error. A json object yields whichever of `title` and
    /// `message` it holds as non-empty strings. Any other json value except
    /// `null` carries no fields and decodes to an empty payload.
    pub fn from_json(text: &str) -> Result<Self, PayloadError> {
        let value: Value = serde_json::from_str(text)?;

        match value {
            Value::Null => Err(PayloadError::Null),
            Value::Object(_) => Ok(Self {
                title: string_field(&value, "title"),
                message: string_field(&value, "message"),
            }),
            _ => Ok(Self::default()),
        }
    }

    /// Decodes the optional data of a push event, missing data is an empty payload
    pub fn from_event_data(text: Option<&str>) -> Result<Self, PayloadError> {
        text.map_or_else(|| Ok(Self::default()), Self::from_json)
    }

    pub fn title(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TITLE)
    }

    pub fn body(&self) -> &str {
        self.message
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_BODY)
    }
}

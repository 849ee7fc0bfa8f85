//! Contact - Address Book Entry

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single contact as carried on the `addContacts` topic
///
/// Fields missing from an incoming payload decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    /// Display name
    pub name: String,
    /// Phone number, kept as entered
    pub phone: String,
    /// Email address
    pub email: String,
}

impl Contact {
    /// Create a new contact
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Decode a contact from one JSON document
    ///
    /// Only JSON objects are accepted. Unknown keys are ignored, missing keys
    /// become empty strings, and non-string values are rejected.
    pub fn from_json(input: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(input)?;
        if !value.is_object() {
            return Err(Error::Payload {
                message: format!("expected a JSON object, got {}", json_kind(&value)),
            });
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Cell values in display order
    pub fn fields(&self) -> [&str; 3] {
        [&self.name, &self.phone, &self.email]
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

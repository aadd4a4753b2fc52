//! Plain claim structure embedded in signed tokens

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, Result};

/// Principal data carried by a token claim
///
/// JSON form: `{"username": "...", "mail": "..." | null, "roles": ["..."]}`.
/// Other claim members (`iss`, `exp`, ...) are ignored when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimData {
    pub username: String,
    #[serde(default)]
    pub mail: Option<String>,
    pub roles: Vec<String>,
}

impl ClaimData {
    /// Read claim data from a decoded claim object.
    ///
    /// A blank `username` is rejected like a missing one.
    pub fn from_value(value: &Value) -> Result<Self> {
        if !value.is_object() {
            return Err(malformed(format!("expected an object, found {}", type_name(value))));
        }

        let claim = ClaimData::deserialize(value).map_err(|e| malformed(e.to_string()))?;
        if claim.username.trim().is_empty() {
            return Err(malformed("empty `username`".to_string()));
        }

        Ok(claim)
    }

    /// Read claim data from the JSON text of a decoded claim
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json).map_err(|e| malformed(e.to_string()))?;
        Self::from_value(&value)
    }

    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

fn malformed(reason: String) -> Error {
    tracing::warn!(%reason, "Rejected malformed claim");
    Error::MalformedClaim(reason)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

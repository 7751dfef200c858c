// SlangDefinition - the JSON object returned by GET /api/slang
//
// The server may omit any of the three fields. Missing or non-string fields
// are read as empty strings; only a body that is not a JSON object at all is
// rejected.

use serde_json::{Map, Value};
use thiserror::Error;

/// A single dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlangDefinition {
    term: String,
    definition: String,
    origin: String,
}

/// Why a response body could not be turned into a [`SlangDefinition`].
#[derive(Debug, Error)]
pub enum DefinitionParseError {
    #[error("body is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),
}

impl SlangDefinition {
    pub fn new(
        term: impl Into<String>,
        definition: impl Into<String>,
        origin: impl Into<String>,
    ) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            origin: origin.into(),
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Parse a raw response body.
    pub fn from_body(body: &str) -> Result<Self, DefinitionParseError> {
        let value: Value = serde_json::from_str(body)?;
        Self::from_json(&value)
    }

    /// Build a definition from an already-parsed JSON value.
    pub fn from_json(value: &Value) -> Result<Self, DefinitionParseError> {
        let object = value
            .as_object()
            .ok_or_else(|| DefinitionParseError::NotAnObject(json_kind(value)))?;

        Ok(Self {
            term: string_field(object, "term"),
            definition: string_field(object, "definition"),
            origin: string_field(object, "origin"),
        })
    }

    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "term": self.term,
            "definition": self.definition,
            "origin": self.origin,
        })
    }
}

fn string_field(object: &Map<String, Value>, key: &str) -> String {
    object
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

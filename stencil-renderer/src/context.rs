//! Render context — the decoded variable payload handed to the engine.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::RenderError;

/// Variable mapping resolved against substitution tags during rendering.
///
/// Built once from the CLI's JSON payload string and never mutated. Keys are
/// unique variable names; values are arbitrary JSON (scalars, sequences,
/// nested objects).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RenderContext {
    vars: Map<String, Value>,
}

impl RenderContext {
    /// Decode `payload` as a JSON object.
    ///
    /// Fails with [`RenderError::MalformedPayload`] on invalid JSON and with
    /// [`RenderError::PayloadNotObject`] when the payload parses but its
    /// top-level value is an array or scalar.
    pub fn from_json(payload: &str) -> Result<Self, RenderError> {
        let value: Value = serde_json::from_str(payload)?;
        match value {
            Value::Object(vars) => Ok(RenderContext { vars }),
            other => Err(RenderError::PayloadNotObject {
                found: json_type_name(&other),
            }),
        }
    }

    /// Number of top-level variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Look up a top-level variable by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    /// Convert to an engine value for rendering.
    pub(crate) fn to_value(&self) -> minijinja::Value {
        minijinja::Value::from_serialize(&self.vars)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

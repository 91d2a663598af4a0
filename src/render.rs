//! Turning values into the strings shown in failure messages.

use serde_json::Value;

/// Renders a single value for display in a failure message.
///
/// The matcher never formats values itself; it hands them to a renderer so
/// that callers can match the conventions of the rest of their reporting.
pub trait ValueRenderer {
    fn render(&self, value: &Value) -> String;
}

/// Strings quoted, scalars as literals, containers as compact JSON.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultRenderer;

impl ValueRenderer for DefaultRenderer {
    fn render(&self, value: &Value) -> String {
        match value {
            Value::Null => "null".to_owned(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            // serde_json escapes quotes and control characters for us
            Value::String(_) | Value::Array(_) | Value::Object(_) => value.to_string(),
        }
    }
}

impl<F> ValueRenderer for F
where
    F: Fn(&Value) -> String,
{
    fn render(&self, value: &Value) -> String {
        self(value)
    }
}

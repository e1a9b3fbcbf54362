use rust_decimal::Decimal;
use std::fmt;

/// A value bound to a query placeholder.
///
/// Every caller-supplied literal (owner identifier, predicate keywords)
/// reaches the store as a `Value`, never as SQL text.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Integer(i64),
    Numeric(Decimal),
    Timestamp(jiff::Timestamp),
}

impl Value {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Renders the value for logs and command line output.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Text(value) => serde_json::Value::String(value.clone()),
            Value::Integer(value) => serde_json::Value::from(*value),
            Value::Numeric(value) => serde_json::Value::String(value.to_string()),
            Value::Timestamp(value) => serde_json::Value::String(value.to_string()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(value) => write!(f, "{value:?}"),
            Value::Integer(value) => write!(f, "{value}"),
            Value::Numeric(value) => write!(f, "{value}"),
            Value::Timestamp(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Value::Numeric(value)
    }
}

impl From<jiff::Timestamp> for Value {
    fn from(value: jiff::Timestamp) -> Self {
        Value::Timestamp(value)
    }
}

use serde::Deserialize;
use std::fmt;

/// A requested page, as sent by the caller.
///
/// Any JSON value is accepted here; pagination rejects anything that is not a
/// positive integer with an `InvalidPage` error instead of a decoding error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "serde_json::Value")]
pub enum PageNumber {
    Integer(i64),
    Other(serde_json::Value),
}

impl From<serde_json::Value> for PageNumber {
    fn from(value: serde_json::Value) -> Self {
        match value.as_i64() {
            Some(page) => PageNumber::Integer(page),
            None => PageNumber::Other(value),
        }
    }
}

impl From<i64> for PageNumber {
    fn from(page: i64) -> Self {
        PageNumber::Integer(page)
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageNumber::Integer(page) => write!(f, "{page}"),
            PageNumber::Other(value) => write!(f, "{value}"),
        }
    }
}

//! Keyword grammars: free-form search text, numbers with an optional unit,
//! and timestamps.

use regex::Regex;
use rust_decimal::Decimal;
use std::{str::FromStr, sync::LazyLock};

/// Longest accepted text keyword, in characters.
pub const MAX_TEXT_LEN: usize = 255;

static SAFE_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{M}\p{N}\p{P} ]+$").unwrap());

static QUANTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?<number>[0-9]+(?:\.[0-9]+)?) ?(?<unit>[A-Za-z]{1,16})?$").unwrap()
});

/// A number keyword, split into its magnitude and unit suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quantity<'a> {
    pub number: &'a str,
    pub unit: Option<&'a str>,
}

/// Checks a free-form search keyword: letters, marks, digits, punctuation,
/// and spaces only.
pub fn safe_text(keyword: &str) -> Result<(), String> {
    let len = keyword.chars().count();

    if len == 0 {
        return Err("keyword is empty".to_string());
    }

    if len > MAX_TEXT_LEN {
        return Err(format!("keyword is longer than {MAX_TEXT_LEN} characters"));
    }

    if !SAFE_TEXT.is_match(keyword) {
        return Err(format!("keyword {keyword:?} contains unsupported characters"));
    }

    Ok(())
}

/// The `ILIKE` pattern matching any value that contains `keyword`.
pub fn contains_pattern(keyword: &str) -> String {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');

    for c in keyword.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }

    pattern.push('%');
    pattern
}

/// Splits `keyword` into an unsigned number and an optional unit suffix.
pub fn quantity(keyword: &str) -> Result<Quantity<'_>, String> {
    let Some(captures) = QUANTITY.captures(keyword) else {
        return Err(format!(
            "keyword {keyword:?} is not a number with an optional unit"
        ));
    };

    // `number` always participates in a match
    let number = captures.name("number").map_or("", |m| m.as_str());
    let unit = captures.name("unit").map(|m| m.as_str());

    Ok(Quantity { number, unit })
}

pub fn integer(number: &str) -> Result<i64, String> {
    number
        .parse()
        .map_err(|_| format!("{number:?} is not a whole number in range"))
}

pub fn decimal(number: &str) -> Result<Decimal, String> {
    Decimal::from_str(number).map_err(|err| format!("{number:?} is not a valid number: {err}"))
}

/// Parses an RFC 3339 timestamp with an explicit offset that is not after
/// `now`.
pub fn timestamp(keyword: &str, now: jiff::Timestamp) -> Result<jiff::Timestamp, String> {
    let timestamp: jiff::Timestamp = keyword.parse().map_err(|err| {
        format!("keyword {keyword:?} is not an RFC 3339 timestamp with an offset: {err}")
    })?;

    if timestamp > now {
        return Err(format!("timestamp {keyword:?} is in the future"));
    }

    Ok(timestamp)
}

//! The identifier grammar shared by column names, aliases, and operator
//! names.

use regex::Regex;
use std::sync::LazyLock;

/// Longest accepted identifier, PostgreSQL's `NAMEDATALEN - 1`.
pub const MAX_LEN: usize = 63;

static IDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Checks `name` against the identifier grammar, returning the reason it
/// fails.
pub fn check(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("identifier is empty".to_string());
    }

    if name.len() > MAX_LEN {
        return Err(format!(
            "identifier is longer than {MAX_LEN} characters"
        ));
    }

    if !IDENT.is_match(name) {
        return Err(format!(
            "`{name}` may only contain letters, digits, and underscores and must not start with a digit"
        ));
    }

    Ok(())
}

pub fn is_valid(name: &str) -> bool {
    check(name).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_names() {
        for name in ["id", "full_name", "_hidden", "width2", "A"] {
            assert!(is_valid(name), "{name}");
        }
    }

    #[test]
    fn rejects_everything_else() {
        let long = "a".repeat(MAX_LEN + 1);
        for name in [
            "",
            "2fast",
            "full name",
            "name;drop",
            "\"quoted\"",
            "t.name",
            "naïve",
            long.as_str(),
        ] {
            assert!(!is_valid(name), "{name}");
        }
    }
}

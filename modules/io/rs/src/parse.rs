use std::fmt::Display;

use derive_more::Constructor;
use eyre::{eyre, Result, WrapErr};
use log::warn;

/// What to do with a coordinate column that is not an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParsePolicy {
    /// Reject the record with an error.
    #[default]
    Strict,
    /// Replace the value with 0 and log a warning. Coerced coordinates take part in overlap
    /// tests like any other value, so merge outcomes can change.
    Lenient,
}

/// Position of a line in an input, used in error and warning messages.
#[derive(Debug, Clone, Copy, Constructor)]
pub struct LineRef<'a> {
    pub source: &'a str,
    pub line: usize,
}

impl Display for LineRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.source, self.line)
    }
}

/// Next mandatory column of a record.
pub fn field<'a>(parts: &mut impl Iterator<Item = &'a str>, name: &str) -> Result<&'a str> {
    parts.next().ok_or_else(|| eyre!("Missing {} column", name))
}

/// Parse an integer coordinate according to the policy.
pub fn coordinate(value: &str, name: &str, policy: ParsePolicy, at: &LineRef) -> Result<i64> {
    match (value.parse::<i64>(), policy) {
        (Ok(value), _) => Ok(value),
        (Err(err), ParsePolicy::Strict) => {
            Err(err).wrap_err_with(|| format!("Invalid {}: '{}'", name, value))
        }
        (Err(_), ParsePolicy::Lenient) => {
            warn!("{}: invalid {} '{}' replaced with 0", at, name, value);
            Ok(0)
        }
    }
}

/// Split a comma-separated list of identifiers. A trailing comma is tolerated, other empty
/// entries are rejected.
pub fn identifiers(value: &str, name: &str) -> Result<Vec<String>> {
    let value = value.strip_suffix(',').unwrap_or(value);
    let ids: Vec<String> = value.split(',').map(str::to_owned).collect();
    if ids.iter().any(|x| x.is_empty()) {
        return Err(eyre!("Empty entry in {}: '{}'", name, value));
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate() -> Result<()> {
        let at = LineRef::new("test.bed", 3);
        assert_eq!(coordinate("1200", "start", ParsePolicy::Strict, &at)?, 1200);
        assert_eq!(coordinate("-5", "start", ParsePolicy::Strict, &at)?, -5);
        assert!(coordinate("12a", "start", ParsePolicy::Strict, &at).is_err());
        assert!(coordinate("", "start", ParsePolicy::Strict, &at).is_err());
        assert_eq!(coordinate("12a", "start", ParsePolicy::Lenient, &at)?, 0);
        assert_eq!(coordinate("7", "start", ParsePolicy::Lenient, &at)?, 7);
        Ok(())
    }

    #[test]
    fn test_identifiers() -> Result<()> {
        assert_eq!(identifiers("A", "TE ids")?, ["A"]);
        assert_eq!(identifiers("A,B,", "TE ids")?, ["A", "B"]);
        assert!(identifiers("", "TE ids").is_err());
        assert!(identifiers("A,,B", "TE ids").is_err());
        Ok(())
    }

    #[test]
    fn test_line_ref() {
        assert_eq!(LineRef::new("a.bed", 12).to_string(), "a.bed:12");
    }
}

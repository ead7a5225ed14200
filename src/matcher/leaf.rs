//! Leaf matchers for scalar, null, and wildcard patterns.

use crate::error::MatchError;
use crate::value::Value;

use super::ValueMatcher;

const NULL_TOKEN: &str = "@null@";
const WILDCARD_TOKENS: [&str; 2] = ["@*@", "@wildcard@"];

/// Any scalar pattern; the value must be strictly equal.
///
/// `1` and `1.0` are different values, as are `"1"` and `1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarMatcher;

impl ValueMatcher for ScalarMatcher {
    fn can_match(&self, pattern: &Value) -> bool {
        matches!(
            pattern,
            Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Text(_)
        )
    }

    fn match_value(&self, value: &Value, pattern: &Value) -> Result<(), MatchError> {
        if value == pattern {
            return Ok(());
        }
        Err(MatchError::mismatch(format!(
            "\"{value}\" does not match \"{pattern}\"."
        )))
    }
}

/// `null` or `@null@`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullMatcher;

impl ValueMatcher for NullMatcher {
    fn can_match(&self, pattern: &Value) -> bool {
        matches!(pattern, Value::Null) || pattern.as_text() == Some(NULL_TOKEN)
    }

    fn match_value(&self, value: &Value, _pattern: &Value) -> Result<(), MatchError> {
        if matches!(value, Value::Null) {
            return Ok(());
        }
        Err(MatchError::mismatch(format!(
            "{} \"{value}\" does not match null.",
            value.type_name()
        )))
    }
}

/// `@*@` and `@wildcard@` accept anything, containers included.
#[derive(Debug, Clone, Copy, Default)]
pub struct WildcardMatcher;

impl ValueMatcher for WildcardMatcher {
    fn can_match(&self, pattern: &Value) -> bool {
        pattern
            .as_text()
            .is_some_and(|token| WILDCARD_TOKENS.contains(&token))
    }

    fn match_value(&self, _value: &Value, _pattern: &Value) -> Result<(), MatchError> {
        Ok(())
    }
}

//! The assembled matcher stack.

use anyhow::{Context, Result};

use crate::error::MatchError;
use crate::matcher::{
    ArrayMatcher, ChainMatcher, NullMatcher, ScalarMatcher, TypeMatcher, ValueMatcher,
    WildcardMatcher,
};
use crate::value::{Value, parse_json};

/// The standard leaf matchers, queried as null, scalar, type, wildcard.
pub fn leaf_chain() -> ChainMatcher {
    ChainMatcher::default()
        .with(NullMatcher)
        .with(ScalarMatcher)
        .with(TypeMatcher)
        .with(WildcardMatcher)
}

/// Matches any value against any pattern using the standard matchers.
pub struct Matcher {
    chain: ChainMatcher,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Matcher {
    pub fn new() -> Self {
        Self {
            chain: ChainMatcher::default()
                .with(leaf_chain())
                .with(ArrayMatcher::new(leaf_chain())),
        }
    }

    pub fn match_values(&self, value: &Value, pattern: &Value) -> Result<(), MatchError> {
        self.chain.match_value(value, pattern)
    }

    pub fn matches(&self, value: &Value, pattern: &Value) -> bool {
        self.match_values(value, pattern).is_ok()
    }

    /// Match two JSON documents.
    ///
    /// Parse failures carry context naming the offending side; a mismatch is a
    /// [`MatchError`] that can be recovered with `downcast_ref`.
    pub fn match_json(&self, value: &str, pattern: &str) -> Result<()> {
        let value = parse_json(value).context("Invalid JSON value")?;
        let pattern = parse_json(pattern).context("Invalid JSON pattern")?;
        self.match_values(&value, &pattern)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_chain_order() {
        assert_eq!(leaf_chain().len(), 4);
    }

    #[test]
    fn scalars_at_top_level() {
        let m = Matcher::new();
        assert!(m.matches(&Value::from(1), &Value::from("@integer@")));
        assert!(m.matches(&Value::Null, &Value::Null));
        assert!(!m.matches(&Value::from(1), &Value::from(2)));
    }

    #[test]
    fn array_wildcard_reports_array_error_for_scalars() {
        let err = Matcher::new()
            .match_values(&Value::from(5), &Value::from("@array@"))
            .unwrap_err();
        assert_eq!(err.to_string(), "integer \"5\" is not a valid array.");
    }

    #[test]
    fn match_json_with_tokens() {
        let m = Matcher::new();
        m.match_json(
            r#"{"id": 7, "name": "Ann", "tags": ["a", "b"], "meta": null}"#,
            r#"{"id": "@integer@", "name": "@string@", "tags": "@array@", "meta": "@null@"}"#,
        )
        .unwrap();
    }

    #[test]
    fn match_json_reports_parse_side() {
        let err = Matcher::new().match_json("{", "{}").unwrap_err();
        assert_eq!(err.to_string(), "Invalid JSON value");
        let err = Matcher::new().match_json("{}", "[").unwrap_err();
        assert_eq!(err.to_string(), "Invalid JSON pattern");
    }

    #[test]
    fn match_json_mismatch_downcasts() {
        let err = Matcher::new()
            .match_json(r#"{"a": 1}"#, r#"{"a": 1, "b": 2}"#)
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MatchError>(),
            Some(MatchError::MissingInValue { .. })
        ));
    }
}

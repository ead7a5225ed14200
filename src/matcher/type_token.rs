//! Type tokens such as `@string@` and `@integer@`.

use phf::{Map, phf_map};

use crate::error::MatchError;
use crate::value::Value;

use super::ValueMatcher;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueType {
    String,
    Integer,
    Double,
    Number,
    Boolean,
    Array,
}

const TOKEN_TO_TYPE_MAP: Map<&'static str, ValueType> = phf_map! {
    "@string@" => ValueType::String,
    "@integer@" => ValueType::Integer,
    "@double@" => ValueType::Double,
    "@number@" => ValueType::Number,
    "@boolean@" => ValueType::Boolean,
    "@array@" => ValueType::Array,
};

impl ValueType {
    fn accepts(self, value: &Value) -> bool {
        match self {
            ValueType::String => matches!(value, Value::Text(_)),
            ValueType::Integer => matches!(value, Value::Int(_)),
            ValueType::Double => matches!(value, Value::Float(_)),
            ValueType::Number => match value {
                Value::Int(_) | Value::Float(_) => true,
                Value::Text(s) => is_numeric(s),
                _ => false,
            },
            ValueType::Boolean => matches!(value, Value::Bool(_)),
            ValueType::Array => value.is_container(),
        }
    }
}

/// Decimal or exponent notation, surrounding whitespace allowed.
fn is_numeric(s: &str) -> bool {
    let s = s.trim();
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        && s.parse::<f64>().is_ok_and(f64::is_finite)
}

fn lookup(pattern: &Value) -> Option<ValueType> {
    TOKEN_TO_TYPE_MAP.get(pattern.as_text()?).copied()
}

/// Checks the runtime type of a value against a type token.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeMatcher;

impl ValueMatcher for TypeMatcher {
    fn can_match(&self, pattern: &Value) -> bool {
        lookup(pattern).is_some()
    }

    fn match_value(&self, value: &Value, pattern: &Value) -> Result<(), MatchError> {
        match lookup(pattern) {
            Some(ty) if ty.accepts(value) => Ok(()),
            _ => Err(MatchError::mismatch(format!(
                "{} \"{value}\" does not match {pattern} pattern.",
                value.type_name()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(value: impl Into<Value>, token: &str) -> bool {
        TypeMatcher.matches(&value.into(), &Value::from(token))
    }

    #[test]
    fn recognises_only_known_tokens() {
        assert!(TypeMatcher.can_match(&Value::from("@string@")));
        assert!(TypeMatcher.can_match(&Value::from("@array@")));
        assert!(!TypeMatcher.can_match(&Value::from("@str@")));
        assert!(!TypeMatcher.can_match(&Value::from("string")));
        assert!(!TypeMatcher.can_match(&Value::from(1)));
    }

    #[test]
    fn basic_types() {
        assert!(ok("x", "@string@"));
        assert!(!ok(1, "@string@"));
        assert!(ok(1, "@integer@"));
        assert!(!ok(1.0, "@integer@"));
        assert!(ok(1.5, "@double@"));
        assert!(ok(false, "@boolean@"));
        assert!(ok(Value::list([1]), "@array@"));
        assert!(!ok(Value::Null, "@array@"));
    }

    #[test]
    fn number_accepts_numeric_text() {
        assert!(ok(3, "@number@"));
        assert!(ok(-0.25, "@number@"));
        assert!(ok("42", "@number@"));
        assert!(ok(" 1e3 ", "@number@"));
        assert!(!ok("abc", "@number@"));
        assert!(!ok("inf", "@number@"));
        assert!(!ok("", "@number@"));
        assert!(!ok(true, "@number@"));
    }

    #[test]
    fn error_message_names_type_and_token() {
        let err = TypeMatcher
            .match_value(&Value::from(5), &Value::from("@string@"))
            .unwrap_err();
        assert_eq!(err.to_string(), "integer \"5\" does not match @string@ pattern.");
    }
}

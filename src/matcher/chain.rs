//! An ordered list of matchers tried one after another.

use crate::error::MatchError;
use crate::value::Value;

use super::ValueMatcher;

/// Tries each capable matcher in insertion order; the first success wins.
///
/// When every capable matcher fails, the error of the last one is returned.
#[derive(Default)]
pub struct ChainMatcher {
    matchers: Vec<Box<dyn ValueMatcher>>,
}

impl ChainMatcher {
    pub fn new(matchers: Vec<Box<dyn ValueMatcher>>) -> Self {
        Self { matchers }
    }

    /// Append a matcher, queried after all existing ones.
    pub fn with(mut self, matcher: impl ValueMatcher + 'static) -> Self {
        self.matchers.push(Box::new(matcher));
        self
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

impl ValueMatcher for ChainMatcher {
    fn can_match(&self, pattern: &Value) -> bool {
        self.matchers.iter().any(|m| m.can_match(pattern))
    }

    fn match_value(&self, value: &Value, pattern: &Value) -> Result<(), MatchError> {
        let mut last_error = None;
        for matcher in self.matchers.iter().filter(|m| m.can_match(pattern)) {
            match matcher.match_value(value, pattern) {
                Ok(()) => return Ok(()),
                Err(err) => last_error = Some(err),
            }
        }
        Err(last_error.unwrap_or_else(|| {
            MatchError::mismatch(format!(
                "No matcher in the chain can match value \"{value}\" to pattern \"{pattern}\"."
            ))
        }))
    }
}

//! Matchers deciding whether a value conforms to a pattern.
//!
//! Patterns are plain [`Value`]s. Containers are matched structurally by
//! [`ArrayMatcher`]; every other pattern node is handed to a leaf matcher.
//!
//! # Pattern tokens
//!
//! | Token         | Meaning                                              |
//! |---------------|------------------------------------------------------|
//! | `@array@`     | Any container, contents not inspected                |
//! | `@...@`       | This key and every later key of the value are accepted |
//! | `@string@`    | Any string                                           |
//! | `@integer@`   | Any integer                                          |
//! | `@double@`    | Any floating point number                            |
//! | `@number@`    | Integer, float, or numeric string                    |
//! | `@boolean@`   | `true` or `false`                                    |
//! | `@null@`      | `null` (a literal `null` pattern means the same)     |
//! | `@*@`         | Anything (`@wildcard@` is an alias)                  |
//!
//! Any other scalar pattern must equal the value exactly.

pub mod array;
pub mod chain;
pub mod leaf;
pub mod type_token;

pub use array::{ARRAY_WILDCARD, ArrayMatcher, UNBOUNDED_TAIL};
pub use chain::ChainMatcher;
pub use leaf::{NullMatcher, ScalarMatcher, WildcardMatcher};
pub use type_token::TypeMatcher;

use crate::error::MatchError;
use crate::value::Value;

/// A capability that can compare values against some class of patterns.
///
/// Callers must only invoke [`match_value`](Self::match_value) for a pattern
/// that [`can_match`](Self::can_match) accepted.
pub trait ValueMatcher: Send + Sync {
    fn can_match(&self, pattern: &Value) -> bool;

    fn match_value(&self, value: &Value, pattern: &Value) -> Result<(), MatchError>;

    /// Shorthand for a capable match that succeeded.
    fn matches(&self, value: &Value, pattern: &Value) -> bool {
        self.can_match(pattern) && self.match_value(value, pattern).is_ok()
    }
}

impl<T: ValueMatcher + ?Sized> ValueMatcher for Box<T> {
    fn can_match(&self, pattern: &Value) -> bool {
        (**self).can_match(pattern)
    }

    fn match_value(&self, value: &Value, pattern: &Value) -> Result<(), MatchError> {
        (**self).match_value(value, pattern)
    }
}

//! Structural matching of nested values against patterns.
//!
//! A pattern has the same shape as the value it describes. Containers are
//! compared key by key, and leaves may hold tokens such as `@string@` or
//! `@array@` instead of literal values.
//!
//! # Example
//!
//! ```rust
//! use shapematch::{MatchError, Matcher, Path, Value};
//!
//! let matcher = Matcher::new();
//!
//! let value = Value::map([("id", Value::from(7)), ("tags", Value::list(["a", "b"]))]);
//! let pattern = Value::map([("id", "@integer@"), ("tags", "@array@")]);
//! assert!(matcher.matches(&value, &pattern));
//!
//! // Every pattern key must be present in the value.
//! let pattern = Value::map([("id", "@integer@"), ("tags", "@array@"), ("name", "@string@")]);
//! assert_eq!(
//!     matcher.match_values(&value, &pattern),
//!     Err(MatchError::MissingInValue { path: Path::parse("[name]").unwrap() })
//! );
//!
//! // `@...@` accepts its own key and everything after it.
//! let list = Value::list([1, 2, 3, 4]);
//! assert!(matcher.matches(&list, &Value::list([Value::from(1), Value::from("@...@")])));
//! ```

mod error;
mod factory;
pub mod matcher;
mod path;
mod value;

pub use error::MatchError;
pub use factory::{Matcher, leaf_chain};
pub use matcher::{
    ARRAY_WILDCARD, ArrayMatcher, ChainMatcher, NullMatcher, ScalarMatcher, TypeMatcher,
    UNBOUNDED_TAIL, ValueMatcher, WildcardMatcher,
};
pub use path::{BracketAccessor, Path, PathAccessor, PathError};
pub use value::{Container, Key, Value, parse_json};

//! Structural matching of nested containers.

use std::sync::OnceLock;

use tracing::{debug, trace};

use crate::error::MatchError;
use crate::path::{BracketAccessor, Path, PathAccessor};
use crate::value::{Container, Value};

use super::ValueMatcher;

/// Pattern token accepting any container without looking inside it.
pub const ARRAY_WILDCARD: &str = "@array@";

/// Pattern token accepting the entry at its key and all later entries.
pub const UNBOUNDED_TAIL: &str = "@...@";

/// Matches containers key by key, delegating leaves to `M`.
///
/// Every key of the value must exist in the pattern, and every key of the
/// pattern must exist in the value. The first failure aborts the whole match.
pub struct ArrayMatcher<M, A = BracketAccessor> {
    leaves: M,
    accessor: OnceLock<A>,
}

impl<M: ValueMatcher> ArrayMatcher<M> {
    pub fn new(leaves: M) -> Self {
        Self {
            leaves,
            accessor: OnceLock::new(),
        }
    }
}

impl<M, A> ArrayMatcher<M, A>
where
    M: ValueMatcher,
    A: PathAccessor + Default + Send + Sync,
{
    /// Use a custom accessor for pattern lookups.
    pub fn with_accessor(leaves: M, accessor: A) -> Self {
        Self {
            leaves,
            accessor: OnceLock::from(accessor),
        }
    }

    fn accessor(&self) -> &A {
        self.accessor.get_or_init(A::default)
    }

    /// Walk `values` in order, resolving each key against `patterns`.
    fn iterate_match(
        &self,
        values: &Container,
        patterns: &Container,
        parent: &Path,
    ) -> Result<(), MatchError> {
        let mut pattern: Option<&Value> = None;

        for (key, value) in values {
            // Once the tail token has been seen, nothing after it is compared.
            if pattern.is_some_and(is_unbounded_tail) {
                trace!(path = %parent, "unbounded tail, skipping remaining entries");
                break;
            }

            let path = parent.child(key.clone());
            let Some(current) = self.accessor().get(patterns, &Path::from(key.clone())) else {
                debug!(path = %path, "missing element in pattern");
                return Err(MatchError::MissingInPattern { path });
            };
            pattern = Some(current);

            if is_unbounded_tail(current) {
                continue;
            }

            let leaf_error = match self.match_leaf(value, current, &path) {
                Ok(()) => continue,
                Err(err) => err,
            };

            if !value.is_container() || !self.can_match(current) {
                debug!(path = %path, error = %leaf_error, "value does not match pattern");
                return Err(leaf_error);
            }

            if is_array_wildcard(current) {
                continue;
            }

            if let (Value::Container(child_values), Value::Container(child_patterns)) =
                (value, current)
            {
                trace!(path = %path, "descending into nested container");
                self.iterate_match(child_values, child_patterns, &path)?;
            }
        }

        if let Some(missing) = patterns.keys().find(|k| !values.contains_key(*k)) {
            let path = parent.child(missing.clone());
            debug!(path = %path, "missing element in value");
            return Err(MatchError::MissingInValue { path });
        }

        Ok(())
    }

    fn match_leaf(&self, value: &Value, pattern: &Value, path: &Path) -> Result<(), MatchError> {
        if !self.leaves.can_match(pattern) {
            return Err(MatchError::mismatch(format!(
                "{} \"{}\" under path {} does not match pattern \"{}\".",
                value.type_name(),
                value,
                path,
                pattern
            )));
        }
        self.leaves.match_value(value, pattern)
    }
}

impl<M, A> ValueMatcher for ArrayMatcher<M, A>
where
    M: ValueMatcher,
    A: PathAccessor + Default + Send + Sync,
{
    fn can_match(&self, pattern: &Value) -> bool {
        pattern.is_container() || is_array_wildcard(pattern)
    }

    fn match_value(&self, value: &Value, pattern: &Value) -> Result<(), MatchError> {
        let Value::Container(values) = value else {
            debug!(type_name = value.type_name(), "value is not a container");
            return Err(MatchError::NotAContainer {
                type_name: value.type_name(),
                value: value.to_string(),
            });
        };

        if is_array_wildcard(pattern) {
            return Ok(());
        }

        let Value::Container(patterns) = pattern else {
            return Err(MatchError::mismatch(format!(
                "{} \"{}\" is not a valid array pattern.",
                pattern.type_name(),
                pattern
            )));
        };

        self.iterate_match(values, patterns, &Path::root())
    }
}

fn is_array_wildcard(pattern: &Value) -> bool {
    pattern.as_text() == Some(ARRAY_WILDCARD)
}

fn is_unbounded_tail(pattern: &Value) -> bool {
    pattern.as_text() == Some(UNBOUNDED_TAIL)
}

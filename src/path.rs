//! Bracketed key paths and lookup of values by path.

use std::fmt;
use std::str::Chars;

use thiserror::Error;

use crate::value::{Container, Key, Value};

/// Errors that can occur while parsing a bracketed path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("Unexpected character in path: {0:?}")]
    UnexpectedChar(char),
    #[error("Unclosed '[' in path")]
    UnclosedBracket,
    #[error("Empty key '[]' in path")]
    EmptySegment,
}

/// A position inside a nested container, rendered as `[a][0]`.
///
/// The root path has no segments and renders as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<Key>,
}

impl Path {
    pub fn root() -> Self {
        Self::default()
    }

    /// The path one level below `self`.
    pub fn child(&self, key: Key) -> Self {
        let mut segments = self.segments.clone();
        segments.push(key);
        Self { segments }
    }

    pub fn segments(&self) -> &[Key] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Parse a bracketed path such as `[0][name]`.
    ///
    /// Segment text follows [`Key`] normalization, so `[0]` is an integer key.
    pub fn parse(input: &str) -> Result<Self, PathError> {
        let mut chars = input.chars();
        let mut segments = Vec::new();
        while let Some(c) = chars.next() {
            if c != '[' {
                return Err(PathError::UnexpectedChar(c));
            }
            segments.push(parse_segment(&mut chars)?);
        }
        Ok(Self { segments })
    }
}

/// Read a segment body up to and including the closing `]`.
fn parse_segment(chars: &mut Chars<'_>) -> Result<Key, PathError> {
    let mut text = String::new();
    loop {
        match chars.next() {
            Some(']') => break,
            Some('[') => return Err(PathError::UnexpectedChar('[')),
            Some(c) => text.push(c),
            None => return Err(PathError::UnclosedBracket),
        }
    }
    if text.is_empty() {
        return Err(PathError::EmptySegment);
    }
    Ok(Key::from(text))
}

impl From<Key> for Path {
    fn from(key: Key) -> Self {
        Self {
            segments: vec![key],
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for key in &self.segments {
            write!(f, "[{key}]")?;
        }
        Ok(())
    }
}

/// Read-only lookup of a value by path.
///
/// `None` means the path is absent. A present `null` is `Some(&Value::Null)`.
pub trait PathAccessor {
    fn get<'v>(&self, container: &'v Container, path: &Path) -> Option<&'v Value>;
}

/// Walks nested containers one segment at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct BracketAccessor;

impl PathAccessor for BracketAccessor {
    fn get<'v>(&self, container: &'v Container, path: &Path) -> Option<&'v Value> {
        let (first, rest) = path.segments().split_first()?;
        rest.iter().try_fold(container.get(first)?, |current, key| {
            current.as_container()?.get(key)
        })
    }
}

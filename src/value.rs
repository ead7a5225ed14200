//! The value model shared by values and patterns.
//!
//! A [`Value`] is either a scalar leaf or a [`Container`]: an insertion-ordered
//! mapping from [`Key`] to `Value`. Lists and maps are the same thing here; a
//! list is simply a container whose keys are `0..n` in order.

use std::fmt;

use indexmap::IndexMap;
use itertools::Itertools;

/// Ordered key/value storage for nested values.
pub type Container = IndexMap<Key, Value>;

/// A container key.
///
/// Keys built from text are normalized: a canonical decimal integer such as
/// `"0"` or `"-4"` becomes [`Key::Int`], so `"1"` and `1` address the same slot.
/// Non-canonical forms (`"007"`, `"+1"`, `"-0"`) stay text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Int(i64),
    Str(String),
}

impl Key {
    fn from_text(s: &str) -> Self {
        match s.parse::<i64>() {
            Ok(n) if n.to_string() == s => Key::Int(n),
            _ => Key::Str(s.to_string()),
        }
    }
}

impl From<i64> for Key {
    fn from(n: i64) -> Self {
        Key::Int(n)
    }
}

impl From<i32> for Key {
    fn from(n: i32) -> Self {
        Key::Int(n.into())
    }
}

impl From<usize> for Key {
    fn from(n: usize) -> Self {
        Key::Int(n as i64)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::from_text(s)
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::from_text(&s)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(n) => write!(f, "{n}"),
            Key::Str(s) => write!(f, "{s}"),
        }
    }
}

/// A value or pattern node.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Container(Container),
}

impl Value {
    /// Build a list-shaped container with keys `0..n`.
    pub fn list<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::Container(
            items
                .into_iter()
                .enumerate()
                .map(|(i, v)| (Key::from(i), v.into()))
                .collect(),
        )
    }

    /// Build a container from key/value pairs, preserving their order.
    ///
    /// A repeated key keeps its first position and takes the last value.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<Value>,
    {
        Value::Container(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Value::Container(_))
    }

    pub fn as_container(&self) -> Option<&Container> {
        match self {
            Value::Container(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The runtime type name used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "NULL",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Float(_) => "double",
            Value::Text(_) => "string",
            Value::Container(_) => "array",
        }
    }

    /// Render as an element of an enclosing container (text is quoted).
    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{s:?}"),
            other => write!(f, "{other}"),
        }
    }
}

fn is_list(c: &Container) -> bool {
    c.keys()
        .enumerate()
        .all(|(i, k)| *k == Key::Int(i as i64))
}

struct Nested<'a>(&'a Value);

impl fmt::Display for Nested<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_nested(f)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Container(c) if is_list(c) => {
                write!(f, "[{}]", c.values().map(Nested).join(", "))
            }
            Value::Container(c) => write!(
                f,
                "{{{}}}",
                c.iter()
                    .map(|(k, v)| format!("{k}: {}", Nested(v)))
                    .join(", ")
            ),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Container> for Value {
    fn from(c: Container) -> Self {
        Value::Container(c)
    }
}

impl<V: Into<Value>> From<Vec<V>> for Value {
    fn from(items: Vec<V>) -> Self {
        Value::list(items)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => Value::list(items),
            serde_json::Value::Object(entries) => Value::map(entries),
        }
    }
}

/// Parse JSON text into a [`Value`]. Object members keep document order.
pub fn parse_json(input: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str::<serde_json::Value>(input).map(Value::from)
}

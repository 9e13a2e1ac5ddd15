//! Parameter values supplied to URL generation
//!
//! `ParamValue` is an explicit tagged union: path rendering and query
//! flattening branch on the variant, never on runtime shape inspection.
//! `RouteParams` keeps insertion order, which decides the order of the
//! generated query string.

use serde::{Deserialize, Deserializer};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Zero-argument value producer, resolved lazily at generation time
pub type ValueFn = Arc<dyn Fn() -> ParamValue + Send + Sync>;

/// A single parameter value
///
/// # Examples
///
/// ```
/// use rhtmx_url::ParamValue;
///
/// let tags = ParamValue::from(vec!["a", "b"]);
/// assert!(tags.is_container());
///
/// let lazy = ParamValue::callable(|| ParamValue::from("computed"));
/// assert_eq!(lazy.resolve().to_param_string(), "computed");
/// ```
#[derive(Clone)]
pub enum ParamValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Sequence(Vec<ParamValue>),
    /// Ordered key/value pairs (keys keep their insertion order)
    Mapping(Vec<(String, ParamValue)>),
    Callable(ValueFn),
}

impl ParamValue {
    /// Wraps a closure as a lazily evaluated value
    pub fn callable<F>(f: F) -> Self
    where
        F: Fn() -> ParamValue + Send + Sync + 'static,
    {
        ParamValue::Callable(Arc::new(f))
    }

    /// Invokes a callable once; every other variant is returned borrowed
    pub fn resolve(&self) -> Cow<'_, ParamValue> {
        match self {
            ParamValue::Callable(f) => Cow::Owned(f()),
            other => Cow::Borrowed(other),
        }
    }

    /// True for sequences and mappings
    pub fn is_container(&self) -> bool {
        matches!(self, ParamValue::Sequence(_) | ParamValue::Mapping(_))
    }

    /// Values that are skipped when an optional path segment would render them
    pub fn is_empty_segment(&self) -> bool {
        match self {
            ParamValue::Bool(_) => true,
            ParamValue::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// String form used in paths, hosts and query values
    ///
    /// `Null` becomes the empty string. Containers reaching this point as
    /// leaves are stringified the way the exporting JavaScript router would:
    /// sequences are comma-joined and mappings become `[object Object]`.
    pub fn to_param_string(&self) -> String {
        match self {
            ParamValue::Null => String::new(),
            ParamValue::Bool(b) => b.to_string(),
            ParamValue::Number(n) => match n.as_f64() {
                // Integral floats print without `.0`, like JavaScript numbers
                Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => {
                    format!("{}", f as i64)
                }
                _ => n.to_string(),
            },
            ParamValue::String(s) => s.clone(),
            ParamValue::Sequence(items) => items
                .iter()
                .map(|item| item.to_param_string())
                .collect::<Vec<_>>()
                .join(","),
            ParamValue::Mapping(_) => "[object Object]".to_string(),
            ParamValue::Callable(f) => f().to_param_string(),
        }
    }

    /// Loose comparison used to decide whether a supplied value overrides a default
    ///
    /// Scalars compare by string form (so `"1"` equals `1`), `Null` only
    /// equals `Null`, and containers compare structurally.
    pub fn loosely_equals(&self, other: &ParamValue) -> bool {
        let left = self.resolve();
        let right = other.resolve();
        match (left.as_ref(), right.as_ref()) {
            (ParamValue::Null, ParamValue::Null) => true,
            (ParamValue::Null, _) | (_, ParamValue::Null) => false,
            (l, r) if l.is_container() || r.is_container() => l == r,
            (l, r) => l.to_param_string() == r.to_param_string(),
        }
    }
}

impl fmt::Debug for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Null => f.write_str("Null"),
            ParamValue::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            ParamValue::Number(n) => f.debug_tuple("Number").field(n).finish(),
            ParamValue::String(s) => f.debug_tuple("String").field(s).finish(),
            ParamValue::Sequence(items) => f.debug_tuple("Sequence").field(items).finish(),
            ParamValue::Mapping(entries) => f.debug_tuple("Mapping").field(entries).finish(),
            ParamValue::Callable(_) => f.write_str("Callable(..)"),
        }
    }
}

impl PartialEq for ParamValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ParamValue::Null, ParamValue::Null) => true,
            (ParamValue::Bool(a), ParamValue::Bool(b)) => a == b,
            (ParamValue::Number(a), ParamValue::Number(b)) => a == b,
            (ParamValue::String(a), ParamValue::String(b)) => a == b,
            (ParamValue::Sequence(a), ParamValue::Sequence(b)) => a == b,
            (ParamValue::Mapping(a), ParamValue::Mapping(b)) => a == b,
            (ParamValue::Callable(a), ParamValue::Callable(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::String(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    ParamValue::Number(serde_json::Number::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i32, i64, u32, u64, usize);

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value)
            .map(ParamValue::Number)
            .unwrap_or(ParamValue::Null)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(ParamValue::Null)
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(values: Vec<T>) -> Self {
        ParamValue::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for ParamValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => ParamValue::Null,
            serde_json::Value::Bool(b) => ParamValue::Bool(b),
            serde_json::Value::Number(n) => ParamValue::Number(n),
            serde_json::Value::String(s) => ParamValue::String(s),
            serde_json::Value::Array(items) => {
                ParamValue::Sequence(items.into_iter().map(ParamValue::from).collect())
            }
            serde_json::Value::Object(map) => ParamValue::Mapping(
                map.into_iter()
                    .map(|(k, v)| (k, ParamValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl<'de> Deserialize<'de> for ParamValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(ParamValue::from)
    }
}

// ============================================================================
// RouteParams
// ============================================================================

/// Ordered bag of caller-supplied parameters
///
/// Inserting an existing key replaces its value in place, so the key keeps
/// its original position.
///
/// # Examples
///
/// ```
/// use rhtmx_url::RouteParams;
///
/// let params = RouteParams::new()
///     .with("id", 42)
///     .with("page", "2");
///
/// assert_eq!(params.len(), 2);
/// assert!(params.contains("page"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteParams {
    entries: Vec<(String, ParamValue)>,
}

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter (functional builder)
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts or replaces a parameter
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == name)
    }

    /// Removes a parameter, keeping the order of the remaining entries
    pub fn remove(&mut self, name: &str) -> Option<ParamValue> {
        let pos = self.entries.iter().position(|(k, _)| k == name)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for RouteParams
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = RouteParams::new();
        params.extend(iter);
        params
    }
}

impl<K, V> Extend<(K, V)> for RouteParams
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl IntoIterator for RouteParams {
    type Item = (String, ParamValue);
    type IntoIter = std::vec::IntoIter<(String, ParamValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for RouteParams {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        map.into_iter().collect()
    }
}

impl<'de> Deserialize<'de> for RouteParams {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)
            .map(RouteParams::from)
    }
}

/// Route module for exported route tables
///
/// Contains the immutable route definition, its tokens and the
/// name → route table with prefix/locale aware lookup.
pub mod table;
pub mod token;

pub use table::RouteTable;
pub use token::Token;

use crate::ParamValue;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

/// A compiled route definition
///
/// `tokens` and `hosttokens` are stored in *reverse emission order*: the
/// last path segment comes first. Generation replays them in that order and
/// prepends each rendered piece.
///
/// # Examples
///
/// ```
/// use rhtmx_url::{Route, Token};
///
/// // /blog/{slug}
/// let route = Route::new(vec![
///     Token::variable("/", "[^/]++", "slug"),
///     Token::text("/blog"),
/// ])
/// .with_default("slug", "index");
///
/// assert!(route.has_default("slug"));
/// assert_eq!(route.canonical_scheme(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Route {
    /// Path tokens, last segment first
    pub tokens: Vec<Token>,
    /// Parameter defaults (param_name → value)
    #[serde(default, deserialize_with = "map_or_empty_list")]
    pub defaults: HashMap<String, ParamValue>,
    /// Requirements (param_name or `_scheme` → constraint)
    #[serde(default, deserialize_with = "map_or_empty_list")]
    pub requirements: HashMap<String, String>,
    /// Host tokens, last piece first
    #[serde(default)]
    pub hosttokens: Vec<Token>,
    /// Allowed schemes; the first one is canonical
    #[serde(default)]
    pub schemes: Vec<String>,
}

impl Route {
    /// Creates a route from its path tokens
    pub fn new(tokens: Vec<Token>) -> Self {
        Route {
            tokens,
            ..Default::default()
        }
    }

    /// Adds a default value (functional builder)
    pub fn with_default(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.defaults.insert(name.into(), value.into());
        self
    }

    /// Adds a requirement (functional builder)
    ///
    /// The special `_scheme` key forces the scheme of generated URLs.
    pub fn with_requirement(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.requirements.insert(name.into(), value.into());
        self
    }

    /// Sets the host tokens (functional builder)
    pub fn with_host_tokens(mut self, hosttokens: Vec<Token>) -> Self {
        self.hosttokens = hosttokens;
        self
    }

    /// Sets the allowed schemes (functional builder)
    pub fn with_schemes<I, S>(mut self, schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.schemes = schemes.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_default(&self, name: &str) -> bool {
        self.defaults.contains_key(name)
    }

    /// Scheme forced through the `_scheme` requirement
    pub fn required_scheme(&self) -> Option<&str> {
        self.requirements.get("_scheme").map(String::as_str)
    }

    /// First declared scheme, if non-empty
    pub fn canonical_scheme(&self) -> Option<&str> {
        self.schemes
            .first()
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }
}

/// Accepts a JSON object, or an (empty) array for routes exported without entries
///
/// PHP serializes an empty associative array as `[]`, so exported tables
/// carry `"defaults": []` for routes that have none.
fn map_or_empty_list<'de, D, V>(deserializer: D) -> Result<HashMap<String, V>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum MapOrList<V> {
        Map(HashMap<String, V>),
        List(Vec<IgnoredAny>),
    }

    Ok(match MapOrList::deserialize(deserializer)? {
        MapOrList::Map(map) => map,
        MapOrList::List(_) => HashMap::new(),
    })
}

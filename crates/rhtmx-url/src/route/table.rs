use super::Route;
use crate::error::{Result, UrlGenerationError};
use serde::Deserialize;
use std::collections::HashMap;

/// Frozen mapping of route names to route definitions
///
/// A table is installed wholesale on the generator; tables are never merged.
///
/// # Examples
///
/// ```
/// use rhtmx_url::{Route, RouteTable, Token};
///
/// let table = RouteTable::new()
///     .with_route("home", Route::new(vec![Token::text("/")]))
///     .with_route("admin_home", Route::new(vec![Token::text("/admin")]));
///
/// // Prefixed name wins over the bare name
/// let route = table.resolve("home", "admin_", "").unwrap();
/// assert_eq!(route.tokens, vec![Token::text("/admin")]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RouteTable {
    routes: HashMap<String, Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named route (functional builder)
    pub fn with_route(mut self, name: impl Into<String>, route: Route) -> Self {
        self.routes.insert(name.into(), route);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Route> {
        self.routes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Iterates over all route names (unordered)
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    /// Resolves a route name against the table
    ///
    /// Candidates are tried in order, first hit wins:
    ///
    /// 1. `prefix + name` (only when a prefix is set)
    /// 2. `name + "." + locale` (only when a locale is set)
    /// 3. `prefix + name + "." + locale` (only when both are set)
    /// 4. `name`
    ///
    /// # Errors
    ///
    /// [`UrlGenerationError::RouteNotFound`] naming the original `name`.
    pub fn resolve(&self, name: &str, prefix: &str, locale: &str) -> Result<&Route> {
        let mut candidates = Vec::with_capacity(4);
        if !prefix.is_empty() {
            candidates.push(format!("{}{}", prefix, name));
        }
        if !locale.is_empty() {
            candidates.push(format!("{}.{}", name, locale));
            if !prefix.is_empty() {
                candidates.push(format!("{}{}.{}", prefix, name, locale));
            }
        }
        candidates.push(name.to_string());

        candidates
            .iter()
            .find_map(|candidate| self.routes.get(candidate))
            .ok_or_else(|| {
                tracing::debug!(route = name, prefix, locale, "route lookup failed");
                UrlGenerationError::RouteNotFound {
                    name: name.to_string(),
                }
            })
    }
}

impl<S: Into<String>> FromIterator<(S, Route)> for RouteTable {
    fn from_iter<I: IntoIterator<Item = (S, Route)>>(iter: I) -> Self {
        RouteTable {
            routes: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl From<HashMap<String, Route>> for RouteTable {
    fn from(routes: HashMap<String, Route>) -> Self {
        RouteTable { routes }
    }
}

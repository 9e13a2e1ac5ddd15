//! Query string serialization for residual parameters
//!
//! Parameters not consumed by path or host tokens are flattened depth-first
//! into bracket notation:
//!
//! - `{tags: ["a", "b"]}` → `tags[]=a&tags[]=b`
//! - `{filter: {status: "open"}}` → `filter[status]=open`
//! - `{rows: [{id: 1}]}` → `rows[0][id]=1`
//!
//! Keys and values are percent-encoded, and encoded spaces become `+`.

use crate::{ParamValue, RouteParams};

/// Recursively flattens `value` under `prefix`, calling `add` for every leaf
///
/// Sequences under a prefix that already ends in `[]` hand their elements to
/// `add` verbatim. Otherwise container elements recurse into `prefix[i]` and
/// scalar elements into `prefix[]`. Mappings recurse into `prefix[key]`.
///
/// # Examples
///
/// ```
/// use rhtmx_url::query::build_query_params;
/// use rhtmx_url::ParamValue;
///
/// let mut keys = Vec::new();
/// build_query_params("tags", &ParamValue::from(vec!["a", "b"]), &mut |key, _| {
///     keys.push(key.to_string());
/// });
/// assert_eq!(keys, vec!["tags[]", "tags[]"]);
/// ```
pub fn build_query_params<F>(prefix: &str, value: &ParamValue, add: &mut F)
where
    F: FnMut(&str, &ParamValue),
{
    match value {
        ParamValue::Sequence(items) => {
            for (index, item) in items.iter().enumerate() {
                if prefix.ends_with("[]") {
                    add(prefix, item);
                } else if item.is_container() {
                    build_query_params(&format!("{}[{}]", prefix, index), item, add);
                } else {
                    build_query_params(&format!("{}[]", prefix), item, add);
                }
            }
        }
        ParamValue::Mapping(entries) => {
            for (key, item) in entries {
                build_query_params(&format!("{}[{}]", prefix, key), item, add);
            }
        }
        leaf => add(prefix, leaf),
    }
}

/// Collects `key=value` pairs and renders the final query string
///
/// # Examples
///
/// ```
/// use rhtmx_url::{QueryParamSerializer, RouteParams};
///
/// let params = RouteParams::new()
///     .with("q", "rust lang")
///     .with("tags", vec!["a", "b"]);
///
/// assert_eq!(
///     QueryParamSerializer::serialize(&params),
///     "q=rust+lang&tags%5B%5D=a&tags%5B%5D=b"
/// );
/// ```
#[derive(Debug, Default)]
pub struct QueryParamSerializer {
    pairs: Vec<String>,
}

impl QueryParamSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes every parameter in encounter order
    pub fn serialize(params: &RouteParams) -> String {
        let mut serializer = QueryParamSerializer::new();
        for (name, value) in params.iter() {
            serializer.push(name, value);
        }
        serializer.finish()
    }

    /// Flattens one top-level parameter into pairs
    pub fn push(&mut self, name: &str, value: &ParamValue) {
        build_query_params(name, value, &mut |key, leaf| self.add(key, leaf));
    }

    /// Appends a single encoded pair
    ///
    /// Callables are invoked and `Null` is sent as an empty value.
    pub fn add(&mut self, key: &str, value: &ParamValue) {
        let value = value.resolve().to_param_string();
        self.pairs.push(format!(
            "{}={}",
            urlencoding::encode(key),
            urlencoding::encode(&value)
        ));
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Joins pairs with `&` using form-style `+` for spaces
    pub fn finish(self) -> String {
        self.pairs.join("&").replace("%20", "+")
    }
}

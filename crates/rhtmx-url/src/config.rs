// File: src/config.rs
// Purpose: Routing data loading from the exported routes JSON document

use crate::RouteTable;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Routing data exported by the server
///
/// This is the context fields plus a route table; `prefix`, `port` and
/// `locale` are optional and leave the current context value untouched when
/// absent.
///
/// ```json
/// {
///   "base_url": "/app_dev.php",
///   "routes": { "homepage": { "tokens": [["text", "/"]], "defaults": [], "requirements": [], "hosttokens": [], "schemes": [] } },
///   "prefix": "",
///   "host": "localhost",
///   "port": "",
///   "scheme": "http",
///   "locale": "en"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RoutingData {
    pub base_url: String,

    pub routes: RouteTable,

    #[serde(default)]
    pub prefix: Option<String>,

    #[serde(default, deserialize_with = "string_or_number")]
    pub port: Option<String>,

    #[serde(default)]
    pub locale: Option<String>,

    pub host: String,

    pub scheme: String,
}

impl RoutingData {
    /// Parses routing data from an in-memory JSON document
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Loads routing data from an exported JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read routing data file: {:?}", path))?;

        let data = Self::from_json(&content)
            .with_context(|| format!("Failed to parse routing data file: {:?}", path))?;

        tracing::debug!(
            path = %path.display(),
            routes = data.routes.len(),
            "loaded routing data"
        );

        Ok(data)
    }
}

/// Exported ports may be JSON strings, numbers or null
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Token;

    const EXPORT: &str = r#"{
        "base_url": "/app.php",
        "routes": {
            "blog_show": {
                "tokens": [["variable", "/", "[^/]++", "slug", true], ["text", "/blog"]],
                "defaults": [],
                "requirements": {"_scheme": "https"},
                "hosttokens": [],
                "methods": ["GET"],
                "schemes": []
            }
        },
        "prefix": "",
        "host": "localhost",
        "port": 8080,
        "scheme": "http"
    }"#;

    #[test]
    fn test_parse_export() {
        let data = RoutingData::from_json(EXPORT).unwrap();
        assert_eq!(data.base_url, "/app.php");
        assert_eq!(data.host, "localhost");
        assert_eq!(data.scheme, "http");
        assert_eq!(data.prefix.as_deref(), Some(""));
        assert_eq!(data.port.as_deref(), Some("8080"));
        assert_eq!(data.locale, None);

        let route = data.routes.get("blog_show").unwrap();
        assert_eq!(
            route.tokens,
            vec![Token::variable("/", "[^/]++", "slug"), Token::text("/blog")]
        );
        assert!(route.defaults.is_empty());
        assert_eq!(route.required_scheme(), Some("https"));
    }

    #[test]
    fn test_optional_fields_absent() {
        let data = RoutingData::from_json(
            r#"{"base_url": "", "routes": {}, "host": "example.com", "scheme": "https"}"#,
        )
        .unwrap();
        assert_eq!(data.prefix, None);
        assert_eq!(data.port, None);
        assert!(data.routes.is_empty());
    }

    #[test]
    fn test_null_port() {
        let data = RoutingData::from_json(
            r#"{"base_url": "", "routes": {}, "host": "h", "scheme": "http", "port": null}"#,
        )
        .unwrap();
        assert_eq!(data.port, None);
    }

    #[test]
    fn test_missing_host_is_rejected() {
        let result = RoutingData::from_json(r#"{"base_url": "", "routes": {}, "scheme": "http"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = RoutingData::load("does/not/exist.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read routing data file"));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("rhtmx-url-{}.json", std::process::id()));
        fs::write(&path, EXPORT).unwrap();

        let data = RoutingData::load(&path).unwrap();
        assert_eq!(data.routes.len(), 1);

        fs::remove_file(&path).unwrap();
    }
}

//! Route pattern tokens as exported by the server-side router
//!
//! Tokens arrive as positional JSON arrays:
//!
//! - `["text", "/blog"]`
//! - `["variable", "/", "[^/]++", "slug"]` (trailing fields such as the
//!   utf8 flag are ignored)
//!
//! Unknown kinds are kept as [`Token::Unsupported`] so the route table still
//! loads and generation reports the malformed route precisely.

use serde::de::{self, Deserialize, Deserializer};
use serde_json::Value;

/// A single path or host token
///
/// # Examples
///
/// ```
/// use rhtmx_url::Token;
///
/// let token: Token = serde_json::from_str(r#"["variable", "/", "\\d+", "id"]"#).unwrap();
/// assert_eq!(token, Token::variable("/", "\\d+", "id"));
///
/// let token: Token = serde_json::from_str(r#"["text", "/users"]"#).unwrap();
/// assert_eq!(token, Token::text("/users"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Literal text, emitted as-is
    Text { literal: String },
    /// Named placeholder rendered as `separator + value`
    Variable {
        separator: String,
        pattern: String,
        name: String,
    },
    /// Any other token kind found in the table
    Unsupported { kind: String },
}

impl Token {
    pub fn text(literal: impl Into<String>) -> Self {
        Token::Text {
            literal: literal.into(),
        }
    }

    pub fn variable(
        separator: impl Into<String>,
        pattern: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Token::Variable {
            separator: separator.into(),
            pattern: pattern.into(),
            name: name.into(),
        }
    }

    /// Kind tag as it appears in the exported table
    pub fn kind(&self) -> &str {
        match self {
            Token::Text { .. } => "text",
            Token::Variable { .. } => "variable",
            Token::Unsupported { kind } => kind,
        }
    }
}

impl<'de> Deserialize<'de> for Token {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parts = Vec::<Value>::deserialize(deserializer)?;
        let field = |index: usize, what: &str| -> Result<String, D::Error> {
            parts
                .get(index)
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or_else(|| de::Error::custom(format!("token is missing its {}", what)))
        };

        match parts.first().and_then(Value::as_str) {
            Some("text") => Ok(Token::Text {
                literal: field(1, "literal")?,
            }),
            Some("variable") => Ok(Token::Variable {
                separator: field(1, "separator")?,
                pattern: field(2, "pattern")?,
                name: field(3, "parameter name")?,
            }),
            Some(kind) => Ok(Token::Unsupported {
                kind: kind.to_string(),
            }),
            None => Err(de::Error::custom("token must start with its kind")),
        }
    }
}

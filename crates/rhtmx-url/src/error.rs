/// Errors raised while generating a URL
///
/// Every variant is a hard failure of the `generate` call: no partial URL
/// is ever returned alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlGenerationError {
    /// Neither the prefixed, localized nor bare route name is in the table
    #[error("The route \"{name}\" does not exist.")]
    RouteNotFound { name: String },

    /// A path variable that must render has no supplied value and no default
    #[error("The route \"{route}\" requires the parameter \"{parameter}\".")]
    MissingRequiredParameter { route: String, parameter: String },

    /// The route table contains a token kind other than `text` or `variable`
    #[error("The token type \"{kind}\" is not supported (route \"{route}\").")]
    UnsupportedTokenType { route: String, kind: String },
}

/// Result alias for URL generation
pub type Result<T> = std::result::Result<T, UrlGenerationError>;

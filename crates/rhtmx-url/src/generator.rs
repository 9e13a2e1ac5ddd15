use crate::error::{Result, UrlGenerationError};
use crate::{
    ParamValue, QueryParamSerializer, Route, RouteParams, RouteTable, RoutingContext, RoutingData,
    Token,
};

/// Generates URLs for named routes of an exported route table
///
/// The generator owns its [`RoutingContext`] and [`RouteTable`]. Configure it
/// once, then call [`UrlGenerator::generate`] as often as needed; generation
/// only borrows the generator immutably.
///
/// # Examples
///
/// ```
/// use rhtmx_url::{Route, RouteParams, RouteTable, RoutingData, Token, UrlGenerator};
///
/// let routes = RouteTable::new().with_route(
///     "user_show",
///     Route::new(vec![Token::variable("/", "\\d+", "id"), Token::text("/users")]),
/// );
///
/// let generator = UrlGenerator::from_routing_data(RoutingData {
///     base_url: String::new(),
///     routes,
///     host: "example.com".to_string(),
///     scheme: "https".to_string(),
///     ..Default::default()
/// });
///
/// let params = RouteParams::new().with("id", 7).with("tab", "posts");
/// assert_eq!(generator.path("user_show", &params).unwrap(), "/users/7?tab=posts");
/// assert_eq!(
///     generator.url("user_show", &params).unwrap(),
///     "https://example.com/users/7?tab=posts"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct UrlGenerator {
    context: RoutingContext,
    routes: RouteTable,
}

impl UrlGenerator {
    /// Creates an unconfigured generator (empty context, no routes)
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator configured from exported routing data
    pub fn from_routing_data(data: RoutingData) -> Self {
        let mut generator = Self::new();
        generator.set_routing_data(data);
        generator
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Installs routing data
    ///
    /// Order matters: base URL, then routes, then prefix/port/locale only
    /// when present in `data`, then host and scheme unconditionally. Optional
    /// fields missing from `data` keep their current value.
    pub fn set_routing_data(&mut self, data: RoutingData) {
        self.context.set_base_url(data.base_url);
        self.set_routes(data.routes);

        if let Some(prefix) = data.prefix {
            self.context.set_prefix(prefix);
        }
        if let Some(port) = data.port {
            self.context.set_port(port);
        }
        if let Some(locale) = data.locale {
            self.context.set_locale(locale);
        }

        self.context.set_host(data.host);
        self.context.set_scheme(data.scheme);

        tracing::debug!(
            routes = self.routes.len(),
            host = self.context.host(),
            scheme = self.context.scheme(),
            "routing data installed"
        );
    }

    /// Replaces the route table wholesale
    pub fn set_routes(&mut self, routes: RouteTable) {
        self.routes = routes;
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn context(&self) -> &RoutingContext {
        &self.context
    }

    /// Mutable access for the individual context setters
    pub fn context_mut(&mut self) -> &mut RoutingContext {
        &mut self.context
    }

    /// Looks a route up, honoring the context prefix and locale
    pub fn get_route(&self, name: &str) -> Result<&Route> {
        self.routes
            .resolve(name, self.context.prefix(), self.context.locale())
    }

    // ========================================================================
    // URL Generation
    // ========================================================================

    /// Generates a URL for the named route
    ///
    /// The result is relative (`base_url + path`) unless the route forces a
    /// scheme, its host tokens produce a different host, or `absolute` is
    /// requested. Parameters not consumed by the path or host become the
    /// query string, in the order they were supplied.
    ///
    /// # Errors
    ///
    /// - [`UrlGenerationError::RouteNotFound`] for unknown names
    /// - [`UrlGenerationError::MissingRequiredParameter`] when a segment that
    ///   must render has neither a value nor a default
    /// - [`UrlGenerationError::UnsupportedTokenType`] for malformed tables
    pub fn generate(&self, name: &str, params: &RouteParams, absolute: bool) -> Result<String> {
        let route = self.get_route(name)?;
        let mut unused = params.clone();

        let path = build_path(name, route, params, &mut unused)?;
        let host = build_host(name, route, params, &mut unused);

        let url = format!("{}{}", self.context.base_url(), path);
        let mut url = self.with_authority(route, &host, url, absolute);

        if !unused.is_empty() {
            url.push('?');
            url.push_str(&QueryParamSerializer::serialize(&unused));
        }

        tracing::trace!(route = name, url = %url, "generated url");
        Ok(url)
    }

    /// Generates a relative URL
    pub fn path(&self, name: &str, params: &RouteParams) -> Result<String> {
        self.generate(name, params, false)
    }

    /// Generates an absolute URL
    pub fn url(&self, name: &str, params: &RouteParams) -> Result<String> {
        self.generate(name, params, true)
    }

    /// Convenience method for generating URLs with an array of parameter tuples
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_url::{Route, RouteTable, Token, UrlGenerator};
    ///
    /// let mut generator = UrlGenerator::new();
    /// generator.set_routes(RouteTable::new().with_route(
    ///     "post_show",
    ///     Route::new(vec![
    ///         Token::variable("/", "[^/]++", "slug"),
    ///         Token::variable("/", "\\d{4}", "year"),
    ///         Token::text("/posts"),
    ///     ]),
    /// ));
    ///
    /// let url = generator
    ///     .url_for_params("post_show", &[("year", "2024"), ("slug", "hello-world")])
    ///     .unwrap();
    /// assert_eq!(url, "/posts/2024/hello-world");
    /// ```
    pub fn url_for_params(&self, name: &str, params: &[(&str, &str)]) -> Result<String> {
        let params: RouteParams = params.iter().copied().collect();
        self.path(name, &params)
    }

    /// Decides whether the URL needs a scheme and authority
    ///
    /// First match wins: `_scheme` requirement, declared scheme, host-token
    /// host differing from the context host, explicit `absolute` request.
    fn with_authority(&self, route: &Route, host: &str, url: String, absolute: bool) -> String {
        let context = &self.context;
        let current_host = if host.is_empty() { context.host() } else { host };

        if let Some(scheme) = route.required_scheme().filter(|s| *s != context.scheme()) {
            return format!("{}://{}{}", scheme, current_host, url);
        }

        if let Some(scheme) = route.canonical_scheme().filter(|s| *s != context.scheme()) {
            return format!("{}://{}{}", scheme, current_host, url);
        }

        if !host.is_empty() {
            let authority = if context.port().is_empty() {
                host.to_string()
            } else {
                format!("{}:{}", host, context.port())
            };
            if authority != context.host() {
                return format!("{}://{}{}", context.scheme(), authority, url);
            }
        }

        if absolute {
            return format!("{}://{}{}", context.scheme(), context.host(), url);
        }

        url
    }
}

/// Replays path tokens right to left, prepending each rendered segment
///
/// Segments stay optional until a literal or a rendered variable is met;
/// optional variables whose value equals their default are elided.
fn build_path(
    route_name: &str,
    route: &Route,
    params: &RouteParams,
    unused: &mut RouteParams,
) -> Result<String> {
    let mut url = String::new();
    let mut optional = true;

    for token in &route.tokens {
        match token {
            Token::Text { literal } => {
                url.insert_str(0, literal);
                optional = false;
            }
            Token::Variable {
                separator, name, ..
            } => {
                // Callables are resolved once so comparison and rendering agree
                let supplied = params.get(name).map(|value| value.resolve());
                let default = route.defaults.get(name);
                let overrides_default = match (&supplied, default) {
                    (Some(value), Some(default)) => !value.loosely_equals(default),
                    _ => false,
                };

                if !optional || default.is_none() || overrides_default {
                    let value = match (supplied, default) {
                        (Some(value), _) => {
                            unused.remove(name);
                            value
                        }
                        (None, Some(default)) => default.resolve(),
                        (None, None) if optional => continue,
                        (None, None) => {
                            return Err(UrlGenerationError::MissingRequiredParameter {
                                route: route_name.to_string(),
                                parameter: name.clone(),
                            })
                        }
                    };

                    if !value.is_empty_segment() || !optional {
                        let segment = format!("{}{}", separator, encode_path_value(&value));
                        url.insert_str(0, &segment);
                    }
                    optional = false;
                } else {
                    // Matches its default: consumed without rendering
                    unused.remove(name);
                }
            }
            Token::Unsupported { kind } => {
                return Err(UrlGenerationError::UnsupportedTokenType {
                    route: route_name.to_string(),
                    kind: kind.clone(),
                })
            }
        }
    }

    if url.is_empty() {
        url.push('/');
    }

    Ok(url)
}

/// Replays host tokens; host values are never encoded or elided
///
/// A variable with neither a supplied value nor a default renders as an
/// empty string.
fn build_host(
    route_name: &str,
    route: &Route,
    params: &RouteParams,
    unused: &mut RouteParams,
) -> String {
    let mut host = String::new();

    for token in &route.hosttokens {
        match token {
            Token::Text { literal } => host.insert_str(0, literal),
            Token::Variable {
                separator, name, ..
            } => {
                let value = match params.get(name) {
                    Some(value) => {
                        unused.remove(name);
                        value.resolve().to_param_string()
                    }
                    None => route
                        .defaults
                        .get(name)
                        .map(|default| default.resolve().to_param_string())
                        .unwrap_or_default(),
                };
                host.insert_str(0, &format!("{}{}", separator, value));
            }
            Token::Unsupported { kind } => {
                tracing::warn!(route = route_name, kind = %kind, "ignoring unsupported host token");
            }
        }
    }

    host
}

/// Percent-encodes a path value, keeping `/` literal; `Null` renders empty
fn encode_path_value(value: &ParamValue) -> String {
    urlencoding::encode(&value.to_param_string()).replace("%2F", "/")
}

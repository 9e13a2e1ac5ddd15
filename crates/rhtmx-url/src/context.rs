/// Mutable request context used when generating URLs
///
/// Holds the values that turn a path into a full URL: base URL (script
/// prefix), route name prefix, scheme, host, port and locale. Populated once
/// through [`crate::UrlGenerator::set_routing_data`] and changed only through
/// the explicit setters.
///
/// # Examples
///
/// ```
/// use rhtmx_url::RoutingContext;
///
/// let mut context = RoutingContext::new();
/// context.set_scheme("https");
/// context.set_host("example.com");
///
/// assert_eq!(context.scheme(), "https");
/// assert_eq!(context.port(), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutingContext {
    base_url: String,
    prefix: String,
    host: String,
    scheme: String,
    port: String,
    locale: String,
}

impl RoutingContext {
    /// Creates an empty context
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sets the route name prefix tried before bare names
    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn set_host(&mut self, host: impl Into<String>) {
        self.host = host.into();
    }

    /// Host as seen by the client, including `:port` when non-standard
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn set_scheme(&mut self, scheme: impl Into<String>) {
        self.scheme = scheme.into();
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn set_port(&mut self, port: impl Into<String>) {
        self.port = port.into();
    }

    /// Port as a string; empty when the default port is in use
    pub fn port(&self) -> &str {
        &self.port
    }

    /// Sets the locale used for `name.locale` route lookups
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }
}

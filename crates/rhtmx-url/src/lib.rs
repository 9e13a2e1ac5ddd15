//! # RHTMX URL
//!
//! Client-side URL generation from a route table exported by the server.
//! The server compiles its routes once (tokens, defaults, requirements, host
//! pattern, schemes); this crate turns a route name plus parameters back into
//! a concrete URL, with no network access.
//!
//! - Reverse token replay with optional-segment elision (`/blog/{page}`
//!   with `page = 1` by default generates `/blog`)
//! - Host tokens for per-route hosts (`{subdomain}.example.com`)
//! - Scheme requirements forcing absolute URLs (`_scheme: https`)
//! - Residual parameters as a bracket-notation query string
//!   (`tags[]=a&filter[status]=open`)
//! - Prefix- and locale-qualified route names
//!
//! ## Example
//!
//! ```
//! use rhtmx_url::{RoutingData, RouteParams, UrlGenerator};
//!
//! let data = RoutingData::from_json(r#"{
//!     "base_url": "",
//!     "routes": {
//!         "blog_index": {
//!             "tokens": [["variable", "/", "\\d+", "page"], ["text", "/blog"]],
//!             "defaults": {"page": 1},
//!             "requirements": [],
//!             "hosttokens": [],
//!             "schemes": []
//!         }
//!     },
//!     "host": "example.com",
//!     "scheme": "https"
//! }"#).unwrap();
//!
//! let generator = UrlGenerator::from_routing_data(data);
//!
//! assert_eq!(generator.path("blog_index", &RouteParams::new()).unwrap(), "/blog");
//!
//! let params = RouteParams::new().with("page", 2).with("sort", "date");
//! assert_eq!(generator.path("blog_index", &params).unwrap(), "/blog/2?sort=date");
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod config;
mod context;
mod error;
mod generator;
mod params;
pub mod query;
pub mod route;

pub use config::RoutingData;
pub use context::RoutingContext;
pub use error::UrlGenerationError;
pub use generator::UrlGenerator;
pub use params::{ParamValue, RouteParams, ValueFn};
pub use query::QueryParamSerializer;
pub use route::{Route, RouteTable, Token};

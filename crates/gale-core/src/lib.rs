//! gale-core: the request-handling core of the gale toy HTTP server
//!
//! One GET request per connection: the request line is parsed by hand,
//! headers are discarded, and the target is matched against a fixed route
//! list by plain substring/equality checks. Responses are close-delimited
//! (no `Content-Length`), exactly as the historic wire contract demands.

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod catalog;
pub mod dispatch;
pub mod error;
pub mod fetch;
pub mod handlers;
pub mod query;
pub mod request;
pub mod response;
pub mod server;
pub mod site;

// Re-exports
pub use catalog::ImageCatalog;
pub use dispatch::{Dispatcher, ILLEGAL_REQUEST_BODY};
pub use error::{Error, Result};
pub use fetch::{Fetch, HttpFetcher, FETCH_TIMEOUT};
pub use query::QueryParams;
pub use request::{read_request, Method, Request};
pub use response::{Response, ResponseBuilder, StatusCode};
pub use server::{bind_listener, serve_connection, ServerConfig};
pub use site::SiteDir;

//! Endpoint dispatch
//!
//! One decision per request: the target is matched against the fixed route
//! list in priority order, first match wins. Matching is deliberately plain
//! substring/equality checking, not a structured router, so quirks like
//! `file/` matching anywhere in the target are kept intact.

use crate::handlers::{dice, github, images, math, pages, temperature};
use crate::request::read_request;
use crate::{Error, Fetch, ImageCatalog, Response, ResponseBuilder, SiteDir, StatusCode};
use bytes::Bytes;
use rand::Rng;
use tokio::io::AsyncBufRead;
use tracing::info;

/// Body written when no GET request line arrives. Historic quirk: this goes
/// out as-is, without any status line.
pub const ILLEGAL_REQUEST_BODY: &str = "<html>Illegal request: no GET</html>";

/// Routes requests to the fixed set of endpoint handlers.
///
/// Holds every piece of cross-request state: the read-only image catalog,
/// the site directory, and the outbound HTTP client. All of it is safe to
/// share between connections; nothing is mutated after construction.
pub struct Dispatcher<F> {
    catalog: ImageCatalog,
    site: SiteDir,
    fetcher: F,
}

impl<F: Fetch> Dispatcher<F> {
    /// Create a dispatcher around its collaborators
    pub fn new(catalog: ImageCatalog, site: SiteDir, fetcher: F) -> Self {
        Self {
            catalog,
            site,
            fetcher,
        }
    }

    /// Handle one connection's worth of input and produce the bytes to
    /// write back.
    ///
    /// Every outcome, including an illegal request, becomes response bytes;
    /// nothing propagates out of here.
    pub async fn respond<R, G>(&self, reader: &mut R, rng: &mut G) -> Bytes
    where
        R: AsyncBufRead + Unpin,
        G: Rng,
    {
        match read_request(reader).await {
            Ok(request) => self.dispatch(&request.target, rng).await.to_bytes(),
            Err(Error::NoRequest) => Bytes::from_static(ILLEGAL_REQUEST_BODY.as_bytes()),
            Err(e) => Bytes::from(format!("<html>ERROR: {}</html>", e)),
        }
    }

    /// Match the target against the route list and run the winning handler
    pub async fn dispatch<G: Rng>(&self, target: &str, rng: &mut G) -> Response {
        info!(target, "dispatching");

        if target.is_empty() {
            pages::root_page(&self.site).unwrap_or_else(handler_error)
        } else if target.eq_ignore_ascii_case("json") {
            images::random_image(&self.catalog, rng)
        } else if target.eq_ignore_ascii_case("random") {
            pages::random_page(&self.site).unwrap_or_else(handler_error)
        } else if target.contains("file/") {
            pages::file_probe(&target.replace("file/", ""))
        } else if target.contains("multiply?") {
            math::multiply(&target.replace("multiply?", ""))
        } else if target.contains("github?") {
            github::lookup(&target.replace("github?", ""), &self.fetcher).await
        } else if target.contains("temperature?") {
            temperature::convert(&target.replace("temperature?", ""))
        } else if target.contains("roll?") {
            dice::roll(&target.replace("roll?", ""), rng)
        } else {
            ResponseBuilder::new(StatusCode::BAD_REQUEST)
                .header("Content-Type", "text/html; charset=utf-8")
                .body("I am not sure what you want me to do...")
                .build()
        }
    }
}

/// Map a handler-internal failure to a 400 with an explanatory body
fn handler_error(e: Error) -> Response {
    Response::bad_request(format!("Error: {}", e))
}

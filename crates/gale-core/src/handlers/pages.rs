//! Site-backed endpoints: the root listing page, the random-image page,
//! and the `file/` existence probe.

use crate::site::{self, SiteDir, LINKS_PLACEHOLDER};
use crate::{Response, ResponseBuilder, Result, StatusCode};

/// Body served by the `file/` route when the probed path exists.
///
/// Raw file contents are deliberately not sent back.
const FILE_STUB_BODY: &str = "The file is there, but raw file serving is switched off.";

/// The root page: `root.html` with its links placeholder replaced by the
/// site directory listing
pub fn root_page(site: &SiteDir) -> Result<Response> {
    let page = String::from_utf8_lossy(&site.read("root.html")?).into_owned();
    let page = page.replace(LINKS_PLACEHOLDER, &site.render_links()?);
    Ok(Response::html(page))
}

/// The fixed random-image page, served verbatim from `index.html`
pub fn random_page(site: &SiteDir) -> Result<Response> {
    Ok(Response::html(site.read("index.html")?))
}

/// Probe whether `path` exists; the body is a stub either way
pub fn file_probe(path: &str) -> Response {
    if site::path_exists(path) {
        ResponseBuilder::new(StatusCode::OK)
            .header("Content-Type", "text/html; charset=utf-8")
            .body(FILE_STUB_BODY)
            .build()
    } else {
        ResponseBuilder::new(StatusCode::NOT_FOUND)
            .header("Content-Type", "text/html; charset=utf-8")
            .body(format!("File not found: {}", path))
            .build()
    }
}

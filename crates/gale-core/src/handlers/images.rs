//! Random image endpoint (JSON flavor)

use crate::{ImageCatalog, Response};
use rand::Rng;

/// Pick one catalog entry at random and describe it as JSON
pub fn random_image<R: Rng>(catalog: &ImageCatalog, rng: &mut R) -> Response {
    let Some((label, url)) = catalog.pick(rng) else {
        return Response::internal_error("Error: The image catalog is empty.");
    };

    let body = serde_json::json!({
        "header": label,
        "image": url,
    });
    Response::json(body.to_string())
}

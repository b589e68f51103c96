//! GitHub repository listing endpoint
//!
//! Proxies a query to the GitHub REST API and renders the repositories it
//! returns as an HTML list.

use crate::{Fetch, QueryParams, Response};
use serde::Deserialize;
use tracing::info;

/// Base URL the `query` parameter is appended to
pub const API_BASE: &str = "https://api.github.com/";

/// One repository object, as returned by the GitHub API
#[derive(Debug, Deserialize)]
struct Repo {
    full_name: String,
    id: i64,
    owner: Owner,
}

#[derive(Debug, Deserialize)]
struct Owner {
    login: String,
}

/// Fetch `https://api.github.com/<query>` and render the repositories.
///
/// An empty or failed fetch is a 404; a body that does not parse as an
/// array of repository objects is a 500.
pub async fn lookup<F: Fetch>(raw: &str, fetcher: &F) -> Response {
    let params = match QueryParams::parse(raw) {
        Ok(params) => params,
        Err(_) => return invalid_query(),
    };
    let Some(query) = params.get("query") else {
        return invalid_query();
    };

    let url = format!("{API_BASE}{query}");
    info!(url = url.as_str(), "fetching upstream");

    let body = match fetcher.fetch(&url).await {
        Ok(body) => body,
        Err(_) => String::new(),
    };
    if body.is_empty() {
        return Response::not_found("Error: No data found for the given query.");
    }

    let repos: Vec<Repo> = match serde_json::from_str(&body) {
        Ok(repos) => repos,
        Err(_) => return Response::internal_error("Error: Failed to parse GitHub API response."),
    };

    Response::html(render(&repos))
}

fn invalid_query() -> Response {
    Response::bad_request(
        "Error: Invalid query format. Please provide a valid query parameter for GitHub API.",
    )
}

fn render(repos: &[Repo]) -> String {
    let mut html =
        String::from("<html><head><title>GitHub Repositories</title></head><body><ul>");
    for repo in repos {
        html.push_str(&format!("<li>Full Name: {}</li>", repo.full_name));
        html.push_str(&format!("<li>ID: {}</li>", repo.id));
        html.push_str(&format!("<li>Owner's Login: {}</li><br>", repo.owner.login));
    }
    html.push_str("</ul></body></html>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Result, StatusCode};
    use std::sync::Mutex;

    /// Test double: records the requested URL, replays a canned outcome
    struct StubFetch {
        outcome: Result<String>,
        seen: Mutex<Option<String>>,
    }

    impl StubFetch {
        fn returning(body: &str) -> Self {
            Self {
                outcome: Ok(body.to_string()),
                seen: Mutex::new(None),
            }
        }

        fn failing() -> Self {
            Self {
                outcome: Err(Error::Fetch("connect timeout".into())),
                seen: Mutex::new(None),
            }
        }

        fn seen_url(&self) -> Option<String> {
            self.seen.lock().unwrap().clone()
        }
    }

    impl Fetch for StubFetch {
        async fn fetch(&self, url: &str) -> Result<String> {
            *self.seen.lock().unwrap() = Some(url.to_string());
            match &self.outcome {
                Ok(body) => Ok(body.clone()),
                Err(_) => Err(Error::Fetch("connect timeout".into())),
            }
        }
    }

    const SAMPLE: &str = r#"[
        {"full_name": "octocat/hello-world", "id": 1296269, "owner": {"login": "octocat"}},
        {"full_name": "octocat/spoon-knife", "id": 1300192, "owner": {"login": "octocat"}}
    ]"#;

    #[tokio::test]
    async fn test_lookup_renders_repositories() {
        let fetcher = StubFetch::returning(SAMPLE);
        let res = lookup("query=users/octocat/repos", &fetcher).await;

        assert_eq!(res.status, StatusCode::OK);
        let body = res.body_string().unwrap();
        assert!(body.contains("<li>Full Name: octocat/hello-world</li>"));
        assert!(body.contains("<li>ID: 1296269</li>"));
        assert!(body.contains("<li>Owner's Login: octocat</li>"));
        assert_eq!(
            fetcher.seen_url().unwrap(),
            "https://api.github.com/users/octocat/repos"
        );
    }

    #[tokio::test]
    async fn test_empty_body_is_not_found() {
        let fetcher = StubFetch::returning("");
        let res = lookup("query=users/nobody/repos", &fetcher).await;
        assert_eq!(res.status, StatusCode::NOT_FOUND);
        assert!(res.body_string().unwrap().contains("No data found"));
    }

    #[tokio::test]
    async fn test_failed_fetch_is_not_found() {
        let fetcher = StubFetch::failing();
        let res = lookup("query=users/octocat/repos", &fetcher).await;
        assert_eq!(res.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unparseable_body_is_server_error() {
        let fetcher = StubFetch::returning(r#"{"message": "API rate limit exceeded"}"#);
        let res = lookup("query=users/octocat/repos", &fetcher).await;
        assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(res.body_string().unwrap().contains("Failed to parse"));
    }

    #[tokio::test]
    async fn test_array_with_missing_fields_is_server_error() {
        let fetcher = StubFetch::returning(r#"[{"full_name": "x/y"}]"#);
        let res = lookup("query=users/x/repos", &fetcher).await;
        assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_missing_query_parameter() {
        let fetcher = StubFetch::returning(SAMPLE);
        let res = lookup("q=users/octocat/repos", &fetcher).await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert!(fetcher.seen_url().is_none());
    }

    #[tokio::test]
    async fn test_malformed_query() {
        let fetcher = StubFetch::returning(SAMPLE);
        let res = lookup("query", &fetcher).await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST);
    }
}

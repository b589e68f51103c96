//! Outbound HTTP collaborator
//!
//! One endpoint fetches a third-party API; everything it needs is behind
//! the [`Fetch`] trait so tests can stub the network.

use crate::{Error, Result};
use std::future::Future;
use std::time::Duration;

/// How long an outbound request may block before it is abandoned
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(20);

/// A client able to GET a URL and hand back the body text
pub trait Fetch: Send + Sync {
    /// Fetch the body of `url`, failing on transport errors or timeout
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}

/// Production [`Fetch`] implementation backed by reqwest.
///
/// The timeout is fixed; there is no retry and no cancellation beyond it.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a client with the fixed timeout applied
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(concat!("gale/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Fetch(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Fetch(e.to_string()))?;
        response
            .text()
            .await
            .map_err(|e| Error::Fetch(e.to_string()))
    }
}

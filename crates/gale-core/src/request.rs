//! HTTP request line parsing
//!
//! Reads the head of an incoming connection line by line. Only the request
//! line is consulted; header lines are read and discarded until the blank
//! line that terminates the head (or end-of-stream).

use crate::{Error, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

/// HTTP Methods recognized by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
}

impl Method {
    /// Parse from a request-line token
    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::Get),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A parsed request: one per connection, immutable once built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// HTTP method
    pub method: Method,
    /// Path plus optional query, with the leading `/` stripped
    pub target: String,
}

/// Read the head of a request and extract the target.
///
/// Lines are consumed until a blank line or end-of-stream. Any line of the
/// form `GET <target> <version>` captures the target (a later qualifying
/// line overwrites an earlier one); everything else is discarded. If no
/// line qualifies, the request is illegal and [`Error::NoRequest`] is
/// returned.
pub async fn read_request<R>(reader: &mut R) -> Result<Request>
where
    R: AsyncBufRead + Unpin,
{
    let mut target = None;
    let mut line = String::new();

    loop {
        line.clear();
        let n = reader.read_line(&mut line).await?;
        if n == 0 {
            break;
        }
        let trimmed = line.trim_end_matches(['\r', '\n']);
        if trimmed.is_empty() {
            break;
        }
        debug!(line = trimmed, "received");
        if let Some(t) = parse_request_line(trimmed) {
            target = Some(t);
        }
    }

    target
        .map(|target| Request {
            method: Method::Get,
            target,
        })
        .ok_or(Error::NoRequest)
}

/// Extract the target from a single `GET <target> <version>` line.
///
/// Returns `None` when the method token is not `GET` or the line does not
/// carry both a target and a following token.
fn parse_request_line(line: &str) -> Option<String> {
    let mut parts = line.splitn(3, ' ');
    let method = parts.next()?;
    let target = parts.next()?;
    let rest = parts.next()?;

    Method::from_token(method)?;
    if rest.is_empty() {
        return None;
    }
    Some(target.strip_prefix('/').unwrap_or(target).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::BufReader;

    async fn read(head: &str) -> Result<Request> {
        let mut reader = BufReader::new(head.as_bytes());
        read_request(&mut reader).await
    }

    #[tokio::test]
    async fn test_simple_get() {
        let req = read("GET /multiply?num1=3&num2=4 HTTP/1.1\r\n\r\n")
            .await
            .unwrap();
        assert_eq!(req.method, Method::Get);
        assert_eq!(req.target, "multiply?num1=3&num2=4");
    }

    #[tokio::test]
    async fn test_root_target_is_empty() {
        let req = read("GET / HTTP/1.1\r\n\r\n").await.unwrap();
        assert_eq!(req.target, "");
    }

    #[tokio::test]
    async fn test_headers_are_discarded() {
        let req = read("GET /json HTTP/1.1\r\nHost: localhost\r\nAccept: */*\r\n\r\n")
            .await
            .unwrap();
        assert_eq!(req.target, "json");
    }

    #[tokio::test]
    async fn test_non_get_is_illegal() {
        assert!(matches!(
            read("POST /json HTTP/1.1\r\n\r\n").await,
            Err(Error::NoRequest)
        ));
    }

    #[tokio::test]
    async fn test_missing_version_token_is_illegal() {
        assert!(matches!(read("GET /json\r\n\r\n").await, Err(Error::NoRequest)));
    }

    #[tokio::test]
    async fn test_garbage_is_illegal() {
        assert!(matches!(read("ramblings\r\n\r\n").await, Err(Error::NoRequest)));
        assert!(matches!(read("\r\n").await, Err(Error::NoRequest)));
    }

    #[tokio::test]
    async fn test_end_of_stream_without_blank_line() {
        let req = read("GET /random HTTP/1.1\r\nHost: x\r\n").await.unwrap();
        assert_eq!(req.target, "random");
    }

    #[tokio::test]
    async fn test_later_request_line_wins() {
        let req = read("GET /first HTTP/1.1\r\nGET /second HTTP/1.1\r\n\r\n")
            .await
            .unwrap();
        assert_eq!(req.target, "second");
    }
}

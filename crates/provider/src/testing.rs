//! A single-shot mock webhook endpoint for tests.
//!
//! The server accepts one connection, captures the request, and answers
//! with the chosen status. Tests typically spawn
//! [`MockWebhookServer::respond_once`] and await the captured request after
//! the sender returns.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// A request captured by [`MockWebhookServer`].
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    /// Look up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// The body as UTF-8 text.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// The body parsed as JSON.
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body is not valid JSON")
    }
}

/// A mock webhook server bound to an ephemeral localhost port.
pub struct MockWebhookServer {
    listener: TcpListener,
    base_url: String,
}

impl MockWebhookServer {
    /// Bind to `127.0.0.1:0`.
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind mock server");
        let port = listener.local_addr().expect("no local address").port();
        let base_url = format!("http://127.0.0.1:{port}");
        Self { listener, base_url }
    }

    /// `http://127.0.0.1:<port>`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The base URL joined with `path`, which should start with `/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Accept one request, answer it with `status_code` and `body`, and
    /// return what was received.
    pub async fn respond_once(self, status_code: u16, body: &str) -> CapturedRequest {
        let (mut stream, _) = self.listener.accept().await.expect("accept failed");

        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        let header_end = loop {
            let n = stream.read(&mut chunk).await.expect("read failed");
            assert!(n > 0, "connection closed before headers were complete");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = find_subslice(&buf, b"\r\n\r\n") {
                break pos;
            }
        };

        let head = String::from_utf8_lossy(&buf[..header_end]).into_owned();
        let mut lines = head.split("\r\n");
        let request_line = lines.next().unwrap_or_default();
        let mut parts = request_line.split_whitespace();
        let method = parts.next().unwrap_or_default().to_owned();
        let path = parts.next().unwrap_or_default().to_owned();
        let headers: Vec<(String, String)> = lines
            .filter_map(|line| line.split_once(':'))
            .map(|(k, v)| (k.trim().to_owned(), v.trim().to_owned()))
            .collect();

        let content_length = headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, v)| v.parse::<usize>().ok())
            .unwrap_or(0);

        let mut request_body = buf[header_end + 4..].to_vec();
        while request_body.len() < content_length {
            let n = stream.read(&mut chunk).await.expect("read failed");
            if n == 0 {
                break;
            }
            request_body.extend_from_slice(&chunk[..n]);
        }

        let response = format!(
            "HTTP/1.1 {status_code} Mock\r\n\
             Content-Type: text/plain\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n\
             \r\n\
             {body}",
            body.len()
        );
        stream
            .write_all(response.as_bytes())
            .await
            .expect("write failed");
        stream.shutdown().await.expect("shutdown failed");

        CapturedRequest {
            method,
            path,
            headers,
            body: request_body,
        }
    }
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// A URL on a port nothing listens on, for connection-failure tests.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind");
    let port = listener.local_addr().expect("no local address").port();
    drop(listener);
    format!("http://127.0.0.1:{port}/hooks/closed")
}

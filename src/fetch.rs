//! One-shot HTTP fetch of the price snapshot.

use anyhow::{Context, Result};
use reqwest::Client;

/// GET the configured endpoint and return the full response body.
///
/// The HTTP status is intentionally not inspected: the upstream API reports
/// its errors in the body, and a non-2xx response whose body still matches
/// the schema is ingested as if it had succeeded. Only transport failures
/// (resolution, connection, an unreadable body) are errors.
pub async fn fetch_snapshot(url: &str) -> Result<Vec<u8>> {
    let client = Client::new();

    let resp = client
        .get(url)
        .header("accept", "application/json")
        .send()
        .await
        .context("Failed to fetch the price snapshot")?;

    let bytes = resp
        .bytes()
        .await
        .context("Failed to read the snapshot body")?;

    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::fetch_snapshot;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one canned HTTP response on a loopback port.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut sock, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = sock.read(&mut buf).await;
            let resp = format!(
                "{status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            sock.write_all(resp.as_bytes()).await.unwrap();
            let _ = sock.shutdown().await;
        });

        format!("http://{addr}/data/pricemultifull")
    }

    #[tokio::test]
    async fn returns_the_full_body() {
        let url = serve_once("HTTP/1.1 200 OK", r#"{"RAW":{},"DISPLAY":{}}"#).await;
        let body = fetch_snapshot(&url).await.unwrap();
        assert_eq!(body, br#"{"RAW":{},"DISPLAY":{}}"#);
    }

    #[tokio::test]
    async fn error_status_with_a_body_is_not_an_error() {
        let url = serve_once("HTTP/1.1 503 Service Unavailable", r#"{"RAW":{}}"#).await;
        let body = fetch_snapshot(&url).await.unwrap();
        assert_eq!(body, br#"{"RAW":{}}"#);
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_an_error() {
        // Bind then drop to get a loopback port nothing listens on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = fetch_snapshot(&format!("http://{addr}/")).await.unwrap_err();
        assert!(err.to_string().contains("Failed to fetch"));
    }
}

//! HTTP item source backed by `reqwest`.

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};

use super::{ItemSource, SourceError};
use crate::state::RawItem;

/// Public demo product API used when no URL is configured.
pub const DEFAULT_SOURCE_URL: &str = "https://fakestoreapi.com/products";

/// Item source performing a single GET against a JSON list endpoint.
#[derive(Clone, Debug)]
pub struct HttpItemSource {
    /// Endpoint returning a JSON array of items.
    url: String,
    /// Shared client; connection settings fixed at construction.
    client: reqwest::Client,
}

impl HttpItemSource {
    /// What: Build a source for `url`.
    ///
    /// Inputs:
    /// - `url`: Endpoint returning a JSON array.
    /// - `timeout`: Optional overall request timeout; `None` waits indefinitely.
    ///
    /// Output:
    /// - The source, or `SourceError` when the HTTP client cannot be constructed.
    ///
    /// # Errors
    /// - Returns `Err` when the TLS backend fails to initialize.
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, SourceError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let mut builder = reqwest::Client::builder()
            .user_agent(format!("watchdeck/{}", env!("CARGO_PKG_VERSION")))
            .default_headers(headers);
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        Ok(Self {
            url: url.into(),
            client: builder.build()?,
        })
    }
}

impl ItemSource for HttpItemSource {
    async fn fetch(&self) -> Result<Vec<RawItem>, SourceError> {
        let resp = self.client.get(&self.url).send().await?;
        let status = resp.status();
        let body = resp.bytes().await?;
        tracing::debug!(
            status = status.as_u16(),
            bytes = body.len(),
            "fetched catalog payload"
        );
        if !status.is_success() {
            let preview: String = String::from_utf8_lossy(&body).chars().take(200).collect();
            tracing::warn!(
                status = status.as_u16(),
                preview = %preview,
                "catalog source returned non-success status"
            );
            return Err(SourceError::Unavailable(format!("status {status}")));
        }
        Ok(serde_json::from_slice::<Vec<RawItem>>(&body)?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{LoadOutcome, load_catalog};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// What: Serve `response` verbatim to every connection on a loopback port.
    ///
    /// Output:
    /// - URL of the `/products` endpoint on the bound port.
    async fn serve_canned(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        tokio::spawn(async move {
            while let Ok((mut sock, _)) = listener.accept().await {
                let mut req = Vec::new();
                let mut buf = [0u8; 1024];
                while !req.windows(4).any(|w| w == b"\r\n\r\n") {
                    match sock.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => req.extend_from_slice(&buf[..n]),
                    }
                }
                let _ = sock.write_all(response.as_bytes()).await;
                let _ = sock.shutdown().await;
            }
        });
        format!("http://{addr}/products")
    }

    #[test]
    /// What: The bundled payload shape decodes, ignoring extra fields.
    fn decodes_product_payload() {
        let body = br#"[
            {"id": 1, "title": "Fjallraven Backpack", "price": 109.95,
             "description": "x", "category": "men's clothing",
             "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
             "rating": {"rate": 3.9, "count": 120}},
            {"title": "No category", "price": 3}
        ]"#;
        let items: Vec<RawItem> = serde_json::from_slice(body).expect("valid payload");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].category.as_deref(), Some("men's clothing"));
        assert!((items[1].price - 3.0).abs() < f64::EPSILON);
        assert!(items[1].image.is_empty());
    }

    #[tokio::test]
    /// What: An unreachable endpoint surfaces as `SourceError::Unavailable`.
    ///
    /// Details:
    /// - Port 9 (discard) on loopback is expected to refuse connections.
    async fn unreachable_endpoint_is_unavailable() {
        let src = HttpItemSource::new(
            "http://127.0.0.1:9/products",
            Some(Duration::from_secs(2)),
        )
        .expect("client");
        assert!(matches!(src.fetch().await, Err(SourceError::Unavailable(_))));
    }

    #[tokio::test]
    /// What: Non-2xx statuses and malformed bodies both surface as `Unavailable`.
    ///
    /// - Input: a canned `500` response and a `200` whose body is `{`
    /// - Output: `Err(SourceError::Unavailable(_))` from `fetch`, `LoadOutcome::Failed` from
    ///   `load_catalog`
    async fn bad_status_and_bad_body_are_unavailable() {
        let server_error = serve_canned(
            "HTTP/1.1 500 Internal Server Error\r\ncontent-type: text/plain\r\ncontent-length: 4\r\nconnection: close\r\n\r\noops",
        )
        .await;
        let truncated = serve_canned(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 1\r\nconnection: close\r\n\r\n{",
        )
        .await;

        let status_src =
            HttpItemSource::new(server_error, Some(Duration::from_secs(5))).expect("client");
        match status_src.fetch().await {
            Err(SourceError::Unavailable(msg)) => assert!(msg.contains("500"), "{msg}"),
            Ok(items) => panic!("expected failure, got {} items", items.len()),
        }
        assert!(matches!(
            load_catalog(&status_src).await,
            LoadOutcome::Failed(_)
        ));

        let body_src =
            HttpItemSource::new(truncated, Some(Duration::from_secs(5))).expect("client");
        match body_src.fetch().await {
            Err(SourceError::Unavailable(msg)) => {
                assert!(msg.starts_with("malformed payload"), "{msg}");
            }
            Ok(items) => panic!("expected failure, got {} items", items.len()),
        }
        assert!(matches!(
            load_catalog(&body_src).await,
            LoadOutcome::Failed(_)
        ));
    }
}

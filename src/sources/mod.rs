//! Catalog retrieval: the item source seam, the HTTP implementation and the
//! raw-item mapping.

use std::future::Future;

mod http;
mod mapping;

pub use http::{DEFAULT_SOURCE_URL, HttpItemSource};
pub use mapping::{map_raw_item, map_raw_items};

use crate::state::{RawItem, Watch};

/// Failure to obtain the catalog from its source.
///
/// Transport, status and decode failures all collapse into one kind; callers
/// only ever degrade to an empty catalog.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The source could not be reached or returned something unusable.
    #[error("item source unavailable: {0}")]
    Unavailable(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(e: reqwest::Error) -> Self {
        Self::Unavailable(e.to_string())
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(e: serde_json::Error) -> Self {
        Self::Unavailable(format!("malformed payload: {e}"))
    }
}

/// Result of the one-shot catalog load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Items mapped from the source, in source order.
    Loaded(Vec<Watch>),
    /// The source failed; the reason was already logged.
    Failed(String),
}

/// Provider of raw catalog items.
pub trait ItemSource {
    /// Fetch the full item list in one request.
    fn fetch(&self) -> impl Future<Output = Result<Vec<RawItem>, SourceError>> + Send;

    /// Short description for logs (usually the URL).
    fn describe(&self) -> String;
}

/// What: Fetch from `source` once and map the result into catalog records.
///
/// Inputs:
/// - `source`: Any [`ItemSource`].
///
/// Output:
/// - [`LoadOutcome::Loaded`] with mapped items, or [`LoadOutcome::Failed`] with the reason.
///
/// Details:
/// - Errors are logged and suppressed here; there is no retry and no partial catalog.
pub async fn load_catalog<S: ItemSource>(source: &S) -> LoadOutcome {
    let origin = source.describe();
    tracing::info!(source = %origin, "fetching catalog");
    match source.fetch().await {
        Ok(raw) => {
            let items = map_raw_items(raw);
            tracing::info!(source = %origin, count = items.len(), "catalog loaded");
            LoadOutcome::Loaded(items)
        }
        Err(e) => {
            tracing::error!(source = %origin, error = %e, "catalog fetch failed");
            LoadOutcome::Failed(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSource(Result<Vec<RawItem>, String>);

    impl ItemSource for FixedSource {
        async fn fetch(&self) -> Result<Vec<RawItem>, SourceError> {
            self.0.clone().map_err(SourceError::Unavailable)
        }

        fn describe(&self) -> String {
            "fixed".into()
        }
    }

    #[tokio::test]
    /// What: A successful fetch is mapped in source order with 1-based ids.
    async fn load_catalog_maps_items() {
        let src = FixedSource(Ok(vec![
            RawItem {
                title: "First".into(),
                category: Some("jewelery".into()),
                price: 1.5,
                image: "a.png".into(),
            },
            RawItem {
                title: "Second".into(),
                category: None,
                price: 2.0,
                image: String::new(),
            },
        ]));
        let LoadOutcome::Loaded(items) = load_catalog(&src).await else {
            panic!("expected loaded outcome");
        };
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, 1);
        assert_eq!(items[1].id, 2);
        assert_eq!(items[1].brand, "Unknown");
    }

    #[tokio::test]
    /// What: A failing source yields `Failed` carrying the reason instead of an error.
    async fn load_catalog_suppresses_errors() {
        let src = FixedSource(Err("connection refused".into()));
        match load_catalog(&src).await {
            LoadOutcome::Failed(reason) => assert!(reason.contains("connection refused")),
            LoadOutcome::Loaded(_) => panic!("expected failure"),
        }
    }

    #[test]
    /// What: Decode errors convert into the single unavailable kind.
    fn decode_error_converts() {
        let err = serde_json::from_str::<Vec<RawItem>>("{").map_err(SourceError::from);
        let Err(SourceError::Unavailable(msg)) = err else {
            panic!("expected decode failure");
        };
        assert!(msg.starts_with("malformed payload"));
    }
}

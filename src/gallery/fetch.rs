// Fetch worker - one HTTP GET per submission, normalized at the boundary
//
// The worker owns the HTTP client and runs in its own tokio task. The TUI
// sends FetchRequest over mpsc and receives FetchOutcome back; the request
// sequence number travels with both so the application state can discard
// outcomes that were superseded by a newer submission.

use super::providers::{self, CatImage, DogBatch, SeaSearch};
use super::{Category, GalleryItem};
use crate::config::Config;
use crate::events::{FetchOutcome, FetchRequest};
use anyhow::{Context, Result};
use std::fmt;
use tokio::sync::mpsc;

const DOG_API: &str = "https://dog.ceo";
const CAT_API: &str = "https://api.thecatapi.com";
const SEA_API: &str = "https://api.unsplash.com";

/// Errors that can occur while fetching a batch
///
/// All four kinds are caught at this boundary and reduced to one
/// human-readable message for the error banner; none are fatal to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Provider-reported failure (dog status != success, sea empty results,
    /// non-2xx responses)
    Provider(String),
    /// Network/transport failure
    Network(String),
    /// JSON body did not match the provider schema
    Parse(String),
    /// Sea search requires an Unsplash access key and none is configured
    MissingCredential,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Provider(msg) => write!(f, "{}", msg),
            Self::Network(msg) => write!(f, "Connection error: {}", msg),
            Self::Parse(msg) => write!(f, "Unexpected response from provider: {}", msg),
            Self::MissingCredential => write!(
                f,
                "Sea search needs an Unsplash access key \
                 (set PETGAL_UNSPLASH_KEY or unsplash_access_key in the config file)"
            ),
        }
    }
}

impl std::error::Error for FetchError {}

/// HTTP fetcher for the three image providers
pub struct GalleryFetcher {
    client: reqwest::Client,
    batch_size: usize,
    unsplash_access_key: Option<String>,
}

impl GalleryFetcher {
    /// Build the fetcher and its HTTP client from config
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            batch_size: config.batch_size,
            unsplash_access_key: config.unsplash_access_key.clone(),
        })
    }

    /// Fetch and normalize one batch for the given category.
    ///
    /// `raw_query` is the user's text as typed; it only matters for Sea and
    /// is normalized (trimmed, lowercased, "sea" fallback) before the
    /// request is built.
    pub async fn fetch(
        &self,
        category: Category,
        raw_query: &str,
    ) -> Result<Vec<GalleryItem>, FetchError> {
        match category {
            Category::Dog => self.fetch_dogs().await,
            Category::Cat => self.fetch_cats().await,
            Category::Sea => self.fetch_sea(raw_query).await,
        }
    }

    async fn fetch_dogs(&self) -> Result<Vec<GalleryItem>, FetchError> {
        let url = format!("{}/api/breeds/image/random/{}", DOG_API, self.batch_size);
        let batch: DogBatch = self.get_json(&url, "dog").await?;
        dog_outcome(batch)
    }

    async fn fetch_cats(&self) -> Result<Vec<GalleryItem>, FetchError> {
        let url = format!("{}/v1/images/search?limit={}", CAT_API, self.batch_size);
        // No failure predicate here: an empty array is a valid empty batch.
        let images: Vec<CatImage> = self.get_json(&url, "cat").await?;
        Ok(providers::normalize_cat(images))
    }

    async fn fetch_sea(&self, raw_query: &str) -> Result<Vec<GalleryItem>, FetchError> {
        // Checked before any request goes out: a missing key should read as
        // a configuration problem, not a cryptic 401.
        let key = self
            .unsplash_access_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(FetchError::MissingCredential)?;

        let query = providers::normalize_query(raw_query);
        let url = format!("{}/search/photos", SEA_API);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("query", query.as_str()),
                ("per_page", &self.batch_size.to_string()),
                ("client_id", key),
            ])
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let search: SeaSearch = Self::decode(response, "sea").await?;
        sea_outcome(search)
    }

    /// GET a URL and decode its JSON body into T
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        provider: &str,
    ) -> Result<T, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Self::decode(response, provider).await
    }

    /// Check the HTTP status, then decode the JSON body
    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
        provider: &str,
    ) -> Result<T, FetchError> {
        let status = response.status();
        if !status.is_success() {
            // Unsplash signals a bad/missing key with 401/403; surface that
            // as a configuration hint rather than a bare status code.
            if provider == "sea" && (status.as_u16() == 401 || status.as_u16() == 403) {
                return Err(FetchError::Provider(
                    "Unsplash rejected the access key (check your configuration)".to_string(),
                ));
            }
            return Err(FetchError::Provider(format!(
                "{} provider returned HTTP {}",
                provider, status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))
    }
}

/// Apply the dog provider's in-band failure signal: anything other than
/// `status == "success"` is a provider error with no items.
fn dog_outcome(batch: DogBatch) -> Result<Vec<GalleryItem>, FetchError> {
    if !batch.is_success() {
        return Err(FetchError::Provider(
            "Could not fetch dog pictures".to_string(),
        ));
    }
    Ok(providers::normalize_dog(batch))
}

/// Unsplash reports "nothing matched" as an empty results array; unlike the
/// cat provider, that counts as a failure here.
fn sea_outcome(search: SeaSearch) -> Result<Vec<GalleryItem>, FetchError> {
    if search.results.is_empty() {
        return Err(FetchError::Provider("No sea photos found".to_string()));
    }
    Ok(providers::normalize_sea(search))
}

/// Run the fetch worker until the request channel closes.
///
/// One request is serviced at a time; overlapping submissions queue up here
/// and are resolved by the sequence guard on the receiving side.
pub async fn run_worker(
    fetcher: GalleryFetcher,
    mut request_rx: mpsc::Receiver<FetchRequest>,
    outcome_tx: mpsc::Sender<FetchOutcome>,
) {
    while let Some(request) = request_rx.recv().await {
        tracing::debug!(
            seq = request.seq,
            category = request.category.name(),
            "fetching batch"
        );

        let result = fetcher.fetch(request.category, &request.query).await;

        match &result {
            Ok(items) => {
                tracing::info!(
                    seq = request.seq,
                    count = items.len(),
                    category = request.category.name(),
                    "batch fetched"
                );
            }
            Err(e) => {
                tracing::warn!(seq = request.seq, error = %e, "fetch failed");
            }
        }

        if outcome_tx
            .send(FetchOutcome {
                seq: request.seq,
                result,
            })
            .await
            .is_err()
        {
            // TUI is gone; nothing left to report to
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn fetcher_with_key(key: Option<&str>) -> GalleryFetcher {
        let config = Config {
            unsplash_access_key: key.map(String::from),
            ..Config::default()
        };
        GalleryFetcher::new(&config).unwrap()
    }

    #[tokio::test]
    async fn sea_without_key_fails_fast() {
        let fetcher = fetcher_with_key(None);
        let err = fetcher.fetch(Category::Sea, "ocean").await.unwrap_err();
        assert_eq!(err, FetchError::MissingCredential);
    }

    #[tokio::test]
    async fn sea_with_empty_key_fails_fast() {
        let fetcher = fetcher_with_key(Some(""));
        let err = fetcher.fetch(Category::Sea, "ocean").await.unwrap_err();
        assert_eq!(err, FetchError::MissingCredential);
    }

    #[test]
    fn dog_error_status_maps_to_provider_error() {
        let batch: DogBatch =
            serde_json::from_str(r#"{"status":"error","message":[]}"#).unwrap();
        let err = dog_outcome(batch).unwrap_err();
        assert_eq!(
            err,
            FetchError::Provider("Could not fetch dog pictures".to_string())
        );
    }

    #[test]
    fn dog_success_status_yields_items() {
        let batch: DogBatch =
            serde_json::from_str(r#"{"status":"success","message":["u1","u2"]}"#).unwrap();
        let items = dog_outcome(batch).unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn sea_empty_results_maps_to_provider_error() {
        let search: SeaSearch = serde_json::from_str(r#"{"results":[]}"#).unwrap();
        let err = sea_outcome(search).unwrap_err();
        assert_eq!(
            err,
            FetchError::Provider("No sea photos found".to_string())
        );
    }

    #[test]
    fn sea_nonempty_results_yield_items() {
        let search: SeaSearch = serde_json::from_str(
            r#"{"results":[{"id":"p1","urls":{"regular":"https://img/p1"},"alt_description":null}]}"#,
        )
        .unwrap();
        let items = sea_outcome(search).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].url, "https://img/p1");
    }

    #[test]
    fn missing_credential_message_names_the_setting() {
        let msg = FetchError::MissingCredential.to_string();
        assert!(msg.contains("PETGAL_UNSPLASH_KEY"));
        assert!(msg.contains("unsplash_access_key"));
    }

    #[test]
    fn network_error_display_is_prefixed() {
        let msg = FetchError::Network("timed out".to_string()).to_string();
        assert_eq!(msg, "Connection error: timed out");
    }
}

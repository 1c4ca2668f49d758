// Demo mode: serve canned batches to showcase the TUI offline
//
// Stands in for the real fetch worker on the same channels, so the rest of
// the application cannot tell the difference. Every UI state is reachable
// without network access:
// - dog/sea fail on every fifth submission (error banner)
// - cat returns an empty batch on every fifth submission (the cat
//   provider's empty-is-not-an-error behavior)
//
// Run with: petgal --demo  (or PETGAL_DEMO=1)

use crate::events::{FetchOutcome, FetchRequest};
use crate::gallery::fetch::FetchError;
use crate::gallery::providers::{self, CAT_LABEL, DOG_LABEL, SEA_LABEL};
use crate::gallery::{Category, GalleryItem};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::sleep;

/// Simulated network latency so the loading state is visible
const DEMO_LATENCY: Duration = Duration::from_millis(600);

/// Service fetch requests with canned batches until the channel closes
pub async fn run_demo_worker(
    mut request_rx: mpsc::Receiver<FetchRequest>,
    outcome_tx: mpsc::Sender<FetchOutcome>,
) {
    let mut submissions: u64 = 0;

    while let Some(request) = request_rx.recv().await {
        submissions += 1;
        sleep(DEMO_LATENCY).await;

        let misbehave = submissions % 5 == 0;
        let result = match (request.category, misbehave) {
            (Category::Dog, true) => Err(FetchError::Provider(
                "Could not fetch dog pictures".to_string(),
            )),
            (Category::Sea, true) => {
                Err(FetchError::Provider("No sea photos found".to_string()))
            }
            (Category::Cat, true) => Ok(Vec::new()),
            (category, false) => Ok(demo_batch(category, &request.query, submissions)),
        };

        tracing::debug!(seq = request.seq, "demo batch served");

        if outcome_tx
            .send(FetchOutcome {
                seq: request.seq,
                result,
            })
            .await
            .is_err()
        {
            break;
        }
    }
}

/// Build a six-item batch with the same id/label conventions as the real
/// providers
fn demo_batch(category: Category, raw_query: &str, round: u64) -> Vec<GalleryItem> {
    match category {
        Category::Dog => {
            let stamp = chrono::Utc::now().timestamp_millis();
            (0..6)
                .map(|i| GalleryItem {
                    id: format!("dog-{}-{}", i, stamp),
                    url: format!("https://images.example.com/dogs/{}-{}.jpg", round, i),
                    label: DOG_LABEL.to_string(),
                })
                .collect()
        }
        Category::Cat => (0..6)
            .map(|i| GalleryItem {
                id: format!("cat{}{}", round, i),
                url: format!("https://images.example.com/cats/{}-{}.jpg", round, i),
                label: CAT_LABEL.to_string(),
            })
            .collect(),
        Category::Sea => {
            let query = providers::normalize_query(raw_query);
            (0..6)
                .map(|i| GalleryItem {
                    id: format!("sea{}{}", round, i),
                    url: format!("https://images.example.com/sea/{}-{}.jpg", query, i),
                    // Alternate provider alt text with the fallback caption
                    label: if i % 2 == 0 {
                        format!("{} at golden hour", query)
                    } else {
                        SEA_LABEL.to_string()
                    },
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_batches_follow_provider_conventions() {
        let dogs = demo_batch(Category::Dog, "", 1);
        assert_eq!(dogs.len(), 6);
        assert!(dogs[0].id.starts_with("dog-0-"));
        assert_eq!(dogs[0].label, DOG_LABEL);

        let sea = demo_batch(Category::Sea, "  Ocean  ", 2);
        assert!(sea[0].label.contains("ocean"));
        assert_eq!(sea[1].label, SEA_LABEL);
    }
}

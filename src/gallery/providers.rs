// Provider response schemas and normalization
//
// Each of the three APIs returns a different JSON shape. The shapes are
// validated here with serde and converted into Vec<GalleryItem> at the
// boundary; nothing downstream branches on provider identity again.
//
// Success predicates differ per provider and are preserved as-is:
// - Dog wraps its URLs in a {status, message} envelope and signals failure
//   in-band via status.
// - Cat returns a bare array; an empty array is a valid empty result set
//   (no failure predicate at all - deliberate, see the state tests).
// - Sea (Unsplash) nests results and treats an empty result list as "not
//   found", which surfaces as an error.

use super::GalleryItem;
use serde::Deserialize;

/// Fixed caption for dog images (the dog API returns bare URLs, no metadata)
pub const DOG_LABEL: &str = "Happy Dog 🐶";

/// Fixed caption for cat images
pub const CAT_LABEL: &str = "Cute Cat 🐱";

/// Fallback caption for sea photos without alt text
pub const SEA_LABEL: &str = "Beautiful Sea 🌊";

/// Fallback query when the user submits an empty sea search
pub const SEA_FALLBACK_QUERY: &str = "sea";

/// dog.ceo batch envelope: {"status": "success", "message": ["url", ...]}
#[derive(Debug, Deserialize)]
pub struct DogBatch {
    pub status: String,
    #[serde(default)]
    pub message: Vec<String>,
}

impl DogBatch {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// thecatapi element: {"id": "...", "url": "...", ...}
#[derive(Debug, Deserialize)]
pub struct CatImage {
    pub id: String,
    pub url: String,
}

/// Unsplash search envelope: {"results": [{...}], ...}
#[derive(Debug, Deserialize)]
pub struct SeaSearch {
    #[serde(default)]
    pub results: Vec<SeaPhoto>,
}

#[derive(Debug, Deserialize)]
pub struct SeaPhoto {
    pub id: String,
    pub urls: SeaRenditions,
    pub alt_description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SeaRenditions {
    pub regular: String,
}

/// Normalize the sea search term: trimmed and lowercased, falling back to
/// the literal "sea" when nothing remains. The query is category-scoped;
/// callers reset it on category switch so it never leaks into another
/// category's request.
pub fn normalize_query(raw: &str) -> String {
    let q = raw.trim().to_lowercase();
    if q.is_empty() {
        SEA_FALLBACK_QUERY.to_string()
    } else {
        q
    }
}

/// Convert a dog batch into gallery items.
///
/// The dog API returns bare URLs, so ids are synthesized from the index and
/// a millisecond timestamp to stay unique within (and across) batches.
pub fn normalize_dog(batch: DogBatch) -> Vec<GalleryItem> {
    let stamp = chrono::Utc::now().timestamp_millis();
    batch
        .message
        .into_iter()
        .enumerate()
        .map(|(index, url)| GalleryItem {
            id: format!("dog-{}-{}", index, stamp),
            url,
            label: DOG_LABEL.to_string(),
        })
        .collect()
}

/// Convert cat images into gallery items. Empty input yields an empty
/// (but successful) batch.
pub fn normalize_cat(images: Vec<CatImage>) -> Vec<GalleryItem> {
    images
        .into_iter()
        .map(|img| GalleryItem {
            id: img.id,
            url: img.url,
            label: CAT_LABEL.to_string(),
        })
        .collect()
}

/// Convert an Unsplash search result into gallery items, using the
/// "regular" rendition and the provider alt text when present.
pub fn normalize_sea(search: SeaSearch) -> Vec<GalleryItem> {
    search
        .results
        .into_iter()
        .map(|photo| GalleryItem {
            id: photo.id,
            url: photo.urls.regular,
            label: photo
                .alt_description
                .unwrap_or_else(|| SEA_LABEL.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_trimmed_and_lowercased() {
        assert_eq!(normalize_query("  Ocean  "), "ocean");
        assert_eq!(normalize_query("WAVES"), "waves");
    }

    #[test]
    fn empty_query_falls_back_to_sea() {
        assert_eq!(normalize_query(""), "sea");
        assert_eq!(normalize_query("   "), "sea");
    }

    #[test]
    fn dog_batch_parses_and_normalizes() {
        let batch: DogBatch =
            serde_json::from_str(r#"{"status":"success","message":["u1","u2"]}"#).unwrap();
        assert!(batch.is_success());

        let items = normalize_dog(batch);
        assert_eq!(items.len(), 2);
        assert!(items[0].id.starts_with("dog-0-"));
        assert!(items[1].id.starts_with("dog-1-"));
        assert_eq!(items[0].url, "u1");
        assert_eq!(items[1].url, "u2");
        assert_eq!(items[0].label, DOG_LABEL);
    }

    #[test]
    fn dog_error_envelope_is_not_success() {
        let batch: DogBatch =
            serde_json::from_str(r#"{"status":"error","message":[]}"#).unwrap();
        assert!(!batch.is_success());
    }

    #[test]
    fn cat_array_parses_and_normalizes() {
        let images: Vec<CatImage> = serde_json::from_str(
            r#"[{"id":"abc","url":"https://cdn.example/abc.jpg","width":500,"height":400}]"#,
        )
        .unwrap();

        let items = normalize_cat(images);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "abc");
        assert_eq!(items[0].url, "https://cdn.example/abc.jpg");
        assert_eq!(items[0].label, CAT_LABEL);
    }

    #[test]
    fn cat_empty_array_is_a_valid_empty_batch() {
        let images: Vec<CatImage> = serde_json::from_str("[]").unwrap();
        assert!(normalize_cat(images).is_empty());
    }

    #[test]
    fn sea_search_uses_regular_rendition_and_alt_text() {
        let search: SeaSearch = serde_json::from_str(
            r#"{"total":1,"results":[
                {"id":"p1","urls":{"regular":"https://img/p1","small":"https://img/p1-s"},
                 "alt_description":"waves at dusk"},
                {"id":"p2","urls":{"regular":"https://img/p2"},"alt_description":null}
            ]}"#,
        )
        .unwrap();

        let items = normalize_sea(search);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].url, "https://img/p1");
        assert_eq!(items[0].label, "waves at dusk");
        assert_eq!(items[1].label, SEA_LABEL);
    }

    #[test]
    fn sea_missing_results_field_parses_as_empty() {
        let search: SeaSearch = serde_json::from_str(r#"{"errors":["bad key"]}"#).unwrap();
        assert!(search.results.is_empty());
    }
}

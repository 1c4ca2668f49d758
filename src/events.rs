// Messages that flow between the TUI task and the fetch worker
//
// The TUI sends FetchRequest when the user submits; the worker answers with
// FetchOutcome. Both carry the submission's sequence number so the state
// machine can drop outcomes that a newer submission has superseded.

use crate::gallery::fetch::FetchError;
use crate::gallery::{Category, GalleryItem};

/// One submission, as handed to the fetch worker
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// Request generation from GalleryState::begin_fetch
    pub seq: u64,
    pub category: Category,
    /// Raw query text as typed; normalization happens in the worker
    pub query: String,
}

/// The settled result of one submission
#[derive(Debug)]
pub struct FetchOutcome {
    /// Echoes the seq of the request this settles
    pub seq: u64,
    pub result: Result<Vec<GalleryItem>, FetchError>,
}

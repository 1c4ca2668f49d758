// Gallery selection state
//
// One explicit state record with a single mutation entry point per logical
// transition (category change, submit start, submit settle). The atomicity
// invariants live here so the render layer can stay a pure projection:
// - switching category clears items, query, and any error together
// - a failed fetch always empties items (items and error are exclusive)
// - only the latest submission's outcome is applied; stale outcomes are
//   discarded wholesale, including their loading-flag side effects

use super::fetch::FetchError;
use super::{Category, GalleryItem};

/// UI status for the current submission cycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Error(String),
}

/// The view's entire mutable selection state
#[derive(Debug, Default)]
pub struct GalleryState {
    category: Category,
    query: String,
    status: Status,
    items: Vec<GalleryItem>,
    /// Monotonic request generation counter; outcomes carrying an older
    /// seq lost the race to a newer submission and are dropped
    latest_seq: u64,
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.status == Status::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            Status::Error(msg) => Some(msg),
            _ => None,
        }
    }

    /// Select a category, atomically resetting results and query.
    ///
    /// The query is scoped to a category and must never leak into another
    /// category's request, so both resets happen in the same transition.
    /// Re-selecting the active category resets too; selection is a reset
    /// action, not a no-op.
    pub fn set_category(&mut self, category: Category) {
        self.category = category;
        self.items.clear();
        self.query.clear();
        // A stale error banner under a new category label would be just as
        // misleading as stale results.
        if matches!(self.status, Status::Error(_)) {
            self.status = Status::Idle;
        }
    }

    /// Cycle to the next category (Tab key)
    pub fn next_category(&mut self) {
        self.set_category(self.category.next());
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn pop_query_char(&mut self) {
        self.query.pop();
    }

    /// Start a new submission: bump the generation counter and enter
    /// Loading. Returns the seq the caller must attach to its request.
    pub fn begin_fetch(&mut self) -> u64 {
        self.latest_seq += 1;
        self.status = Status::Loading;
        self.latest_seq
    }

    /// Apply a settled fetch outcome.
    ///
    /// Returns false (and changes nothing) when the outcome is stale - a
    /// newer submission was issued after this one, and its own settlement
    /// is the one that will clear the loading flag.
    pub fn apply_outcome(
        &mut self,
        seq: u64,
        result: Result<Vec<GalleryItem>, FetchError>,
    ) -> bool {
        if seq != self.latest_seq {
            return false;
        }

        match result {
            Ok(items) => {
                self.items = items;
                self.status = Status::Idle;
            }
            Err(e) => {
                self.items.clear();
                self.status = Status::Error(e.to_string());
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> GalleryItem {
        GalleryItem {
            id: id.to_string(),
            url: format!("https://img.example/{}", id),
            label: "x".to_string(),
        }
    }

    #[test]
    fn defaults_match_view_mount() {
        let state = GalleryState::new();
        assert_eq!(state.category(), Category::Dog);
        assert_eq!(state.query(), "");
        assert_eq!(*state.status(), Status::Idle);
        assert!(state.items().is_empty());
    }

    #[test]
    fn successful_fetch_replaces_items_wholesale() {
        let mut state = GalleryState::new();
        let seq = state.begin_fetch();
        assert!(state.is_loading());

        assert!(state.apply_outcome(seq, Ok(vec![item("a"), item("b")])));
        assert_eq!(state.items().len(), 2);
        assert_eq!(*state.status(), Status::Idle);

        let seq = state.begin_fetch();
        assert!(state.apply_outcome(seq, Ok(vec![item("c")])));
        assert_eq!(state.items().len(), 1);
        assert_eq!(state.items()[0].id, "c");
    }

    #[test]
    fn failed_fetch_empties_items_and_sets_error() {
        let mut state = GalleryState::new();
        let seq = state.begin_fetch();
        state.apply_outcome(seq, Ok(vec![item("a")]));

        let seq = state.begin_fetch();
        assert!(state.apply_outcome(
            seq,
            Err(FetchError::Provider("Could not fetch dog pictures".into()))
        ));

        // items and error are mutually exclusive
        assert!(state.items().is_empty());
        assert_eq!(state.error(), Some("Could not fetch dog pictures"));
        assert!(!state.is_loading());
    }

    #[test]
    fn empty_success_is_not_an_error() {
        // The cat provider has no failure predicate: an empty array yields
        // an empty but non-error result set.
        let mut state = GalleryState::new();
        state.set_category(Category::Cat);
        let seq = state.begin_fetch();
        assert!(state.apply_outcome(seq, Ok(Vec::new())));
        assert!(state.items().is_empty());
        assert_eq!(*state.status(), Status::Idle);
    }

    #[test]
    fn category_switch_resets_query_and_items() {
        let mut state = GalleryState::new();
        state.set_category(Category::Sea);
        state.set_query("ocean");
        let seq = state.begin_fetch();
        state.apply_outcome(seq, Ok(vec![item("a")]));

        state.set_category(Category::Cat);
        assert_eq!(state.query(), "");
        assert!(state.items().is_empty());
    }

    #[test]
    fn category_switch_clears_error_banner() {
        let mut state = GalleryState::new();
        let seq = state.begin_fetch();
        state.apply_outcome(seq, Err(FetchError::Provider("boom".into())));
        assert!(state.error().is_some());

        state.set_category(Category::Sea);
        assert!(state.error().is_none());
        assert_eq!(*state.status(), Status::Idle);
    }

    #[test]
    fn reselecting_active_category_resets_like_any_switch() {
        let mut state = GalleryState::new();
        state.set_query("husky");
        let seq = state.begin_fetch();
        state.apply_outcome(seq, Ok(vec![item("a")]));

        state.set_category(Category::Dog);
        assert!(state.items().is_empty());
        assert_eq!(state.query(), "");
    }

    #[test]
    fn stale_outcome_is_discarded() {
        let mut state = GalleryState::new();
        let old_seq = state.begin_fetch();
        let new_seq = state.begin_fetch();

        // The slow old response arrives after a newer submission: dropped,
        // and the loading flag stays set for the outstanding request.
        assert!(!state.apply_outcome(old_seq, Ok(vec![item("stale")])));
        assert!(state.items().is_empty());
        assert!(state.is_loading());

        assert!(state.apply_outcome(new_seq, Ok(vec![item("fresh")])));
        assert_eq!(state.items()[0].id, "fresh");
        assert!(!state.is_loading());
    }

    #[test]
    fn stale_error_does_not_clear_loading() {
        let mut state = GalleryState::new();
        let old_seq = state.begin_fetch();
        let _new_seq = state.begin_fetch();

        assert!(!state.apply_outcome(old_seq, Err(FetchError::Network("late".into()))));
        assert!(state.is_loading());
        assert!(state.error().is_none());
    }

    #[test]
    fn settlement_always_clears_loading_for_latest() {
        let mut state = GalleryState::new();

        let seq = state.begin_fetch();
        state.apply_outcome(seq, Err(FetchError::Network("down".into())));
        assert!(!state.is_loading());

        let seq = state.begin_fetch();
        state.apply_outcome(seq, Ok(Vec::new()));
        assert!(!state.is_loading());
    }

    #[test]
    fn query_editing() {
        let mut state = GalleryState::new();
        state.set_category(Category::Sea);
        state.push_query_char('o');
        state.push_query_char('c');
        state.pop_query_char();
        assert_eq!(state.query(), "o");
    }
}

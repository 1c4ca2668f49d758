// TUI application state
//
// Owns the gallery selection state plus everything that is purely
// presentational: query edit mode, card selection, spinner frame, toast,
// theme, help overlay. The render layer reads from here and never mutates.

use super::components::Toast;
use super::input::InputHandler;
use super::theme::{Theme, ThemeKind};
use crate::config::Config;
use crate::events::{FetchOutcome, FetchRequest};
use crate::gallery::state::GalleryState;
use crate::gallery::Category;
use crate::logging::LogBuffer;
use std::time::Instant;

/// Spinner animation frames, advanced on each tick
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Cards per grid row
pub const GRID_COLUMNS: usize = 3;

/// Main application state for the TUI
pub struct App {
    /// The gallery selection state machine
    pub gallery: GalleryState,

    /// Whether keystrokes currently edit the sea search query
    pub editing_query: bool,

    /// Index of the selected card in the grid
    pub selected_card: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Whether the help overlay is open
    pub show_help: bool,

    /// Current theme
    pub theme_kind: ThemeKind,
    pub theme: Theme,

    /// Toast notification, if one is showing
    pub toast: Option<Toast>,

    /// Captured tracing output for the status bar and help overlay
    pub log_buffer: LogBuffer,

    /// When the app started (for uptime display)
    pub start_time: Instant,

    /// Settled batches this session
    pub batches_ok: usize,
    pub batches_failed: usize,

    spinner_frame: usize,
    input_handler: InputHandler,
}

impl App {
    pub fn with_config(config: &Config, log_buffer: LogBuffer) -> Self {
        let theme_kind = ThemeKind::from_name(&config.theme);
        Self {
            gallery: GalleryState::new(),
            editing_query: false,
            selected_card: 0,
            should_quit: false,
            show_help: false,
            theme_kind,
            theme: theme_kind.theme(),
            toast: None,
            log_buffer,
            start_time: Instant::now(),
            batches_ok: 0,
            batches_failed: 0,
            spinner_frame: 0,
            input_handler: InputHandler::default(),
        }
    }

    /// Handle a key press - returns true if the action should trigger
    pub fn handle_key_press(&mut self, key: crossterm::event::KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    /// Handle a key release
    pub fn handle_key_release(&mut self, key: crossterm::event::KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    /// Advance the spinner and expire the toast; called on every tick
    pub fn tick_animation(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    pub fn spinner_char(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame]
    }

    /// Switch category; leaves query edit mode and resets the card cursor
    /// along with the state machine's own query/result reset
    pub fn set_category(&mut self, category: Category) {
        self.gallery.set_category(category);
        self.editing_query = false;
        self.selected_card = 0;
    }

    pub fn next_category(&mut self) {
        self.set_category(self.gallery.category().next());
    }

    /// Build the fetch request for the current selection and enter Loading
    pub fn submit(&mut self) -> FetchRequest {
        self.editing_query = false;
        FetchRequest {
            seq: self.gallery.begin_fetch(),
            category: self.gallery.category(),
            query: self.gallery.query().to_string(),
        }
    }

    /// Apply a settled outcome from the fetch worker
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) {
        let failed = outcome.result.is_err();
        if !self.gallery.apply_outcome(outcome.seq, outcome.result) {
            tracing::debug!(seq = outcome.seq, "stale fetch outcome discarded");
            return;
        }

        if failed {
            self.batches_failed += 1;
        } else {
            self.batches_ok += 1;
        }

        // Keep the cursor inside the new batch
        self.selected_card = self
            .selected_card
            .min(self.gallery.items().len().saturating_sub(1));
    }

    /// Move the card selection by one step in the grid
    pub fn move_selection(&mut self, dx: isize, dy: isize) {
        let count = self.gallery.items().len();
        if count == 0 {
            return;
        }

        let step = dx + dy * GRID_COLUMNS as isize;
        let target = self.selected_card as isize + step;
        if target >= 0 && (target as usize) < count {
            self.selected_card = target as usize;
        }
    }

    /// URL of the selected card, if the grid is non-empty
    pub fn selected_url(&self) -> Option<&str> {
        self.gallery
            .items()
            .get(self.selected_card)
            .map(|item| item.url.as_str())
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    pub fn cycle_theme(&mut self) {
        self.theme_kind = self.theme_kind.next();
        self.theme = self.theme_kind.theme();
    }

    /// Uptime as HH:MM:SS
    pub fn uptime(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs();
        format!(
            "{:02}:{:02}:{:02}",
            seconds / 3600,
            (seconds % 3600) / 60,
            seconds % 60
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::fetch::FetchError;
    use crate::gallery::GalleryItem;

    fn app() -> App {
        App::with_config(&Config::default(), LogBuffer::new())
    }

    fn batch(n: usize) -> Vec<GalleryItem> {
        (0..n)
            .map(|i| GalleryItem {
                id: format!("i{}", i),
                url: format!("https://img.example/{}", i),
                label: "x".to_string(),
            })
            .collect()
    }

    #[test]
    fn submit_carries_current_selection() {
        let mut app = app();
        app.set_category(Category::Sea);
        app.gallery.set_query("  Ocean  ");

        let request = app.submit();
        assert_eq!(request.seq, 1);
        assert_eq!(request.category, Category::Sea);
        // Raw text travels as typed; the worker normalizes it
        assert_eq!(request.query, "  Ocean  ");
        assert!(app.gallery.is_loading());
    }

    #[test]
    fn outcome_updates_session_counters() {
        let mut app = app();

        let request = app.submit();
        app.apply_outcome(FetchOutcome {
            seq: request.seq,
            result: Ok(batch(6)),
        });
        assert_eq!(app.batches_ok, 1);

        let request = app.submit();
        app.apply_outcome(FetchOutcome {
            seq: request.seq,
            result: Err(FetchError::Network("down".into())),
        });
        assert_eq!(app.batches_failed, 1);
    }

    #[test]
    fn stale_outcome_counts_nothing() {
        let mut app = app();
        let old = app.submit();
        let _new = app.submit();

        app.apply_outcome(FetchOutcome {
            seq: old.seq,
            result: Ok(batch(6)),
        });
        assert_eq!(app.batches_ok, 0);
        assert!(app.gallery.is_loading());
    }

    #[test]
    fn selection_stays_inside_grid() {
        let mut app = app();
        let request = app.submit();
        app.apply_outcome(FetchOutcome {
            seq: request.seq,
            result: Ok(batch(6)),
        });

        // Right along the first row, then down a row
        app.move_selection(1, 0);
        app.move_selection(1, 0);
        app.move_selection(0, 1);
        assert_eq!(app.selected_card, 5);

        // Past the end: stays put
        app.move_selection(1, 0);
        assert_eq!(app.selected_card, 5);

        app.move_selection(0, -1);
        assert_eq!(app.selected_card, 2);
    }

    #[test]
    fn smaller_batch_clamps_selection() {
        let mut app = app();
        let request = app.submit();
        app.apply_outcome(FetchOutcome {
            seq: request.seq,
            result: Ok(batch(6)),
        });
        app.selected_card = 5;

        let request = app.submit();
        app.apply_outcome(FetchOutcome {
            seq: request.seq,
            result: Ok(batch(2)),
        });
        assert_eq!(app.selected_card, 1);
    }
}

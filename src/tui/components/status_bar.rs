// Status bar component
//
// Bottom line: uptime, batch counters, current category/status, and the
// most recent captured log line.

use super::truncate_to_width;
use crate::gallery::state::Status;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn render_status(f: &mut Frame, area: Rect, app: &App) {
    let state = match app.gallery.status() {
        Status::Loading => format!("{} fetching", app.spinner_char()),
        Status::Error(_) => "error".to_string(),
        Status::Idle => "ready".to_string(),
    };

    let mut text = format!(
        " {} │ ✅ {} ✗ {} │ {} │ {}",
        app.uptime(),
        app.batches_ok,
        app.batches_failed,
        app.gallery.category().name(),
        state,
    );

    // Tack on the newest log line if there is room for something readable.
    // Budget in display cells, not bytes: the separators and emoji are
    // multi-byte and the emoji is two cells wide.
    if let Some(entry) = app.log_buffer.last() {
        let used = text.width() + 3;
        if area.width as usize > used + 12 {
            let budget = area.width as usize - used;
            text.push_str(" │ ");
            text.push_str(&truncate_to_width(
                &format!("{} {}", entry.level.as_str(), entry.message),
                budget,
            ));
        }
    }

    let status = Paragraph::new(text)
        .style(app.theme.status_style())
        .block(Block::default().borders(Borders::TOP).border_style(app.theme.border_style()));

    f.render_widget(status, area);
}

// Title bar component
//
// One line: app name on the left, theme and version on the right.

use crate::config::VERSION;
use crate::tui::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_title(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(app.theme.border_style());

    let title = Paragraph::new(Line::from(" 🖼  petgal · multi-search gallery"))
        .style(app.theme.title_style())
        .block(block);
    f.render_widget(title, area);

    let right = Paragraph::new(format!("{} · v{} ", app.theme_kind.name(), VERSION))
        .alignment(Alignment::Right)
        .style(app.theme.muted_style());
    f.render_widget(right, area);
}

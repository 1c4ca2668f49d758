// Help overlay
//
// Centered modal with key bindings and the tail of the captured log.
// Dismissed with ?, Esc, or q.

use super::centered_rect;
use crate::tui::app::App;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const RECENT_LOG_LINES: usize = 6;

pub fn render(f: &mut Frame, app: &App) {
    let area = centered_rect(70, 75, f.area());
    f.render_widget(Clear, area);

    let key_style = Style::default()
        .fg(app.theme.accent)
        .add_modifier(Modifier::BOLD);
    let text_style = app.theme.base_style();
    let heading_style = app.theme.title_style();

    let binding = |keys: &str, action: &str| {
        Line::from(vec![
            Span::styled(format!("  {:<12}", keys), key_style),
            Span::styled(action.to_string(), text_style),
        ])
    };

    let mut lines = vec![
        Line::from(Span::styled("Keys", heading_style)),
        binding("1/d 2/c 3/s", "switch to dogs / cats / sea"),
        binding("Tab", "next category"),
        binding("Enter", "fetch a batch (or submit the search)"),
        binding("/", "edit the sea search query"),
        binding("←↑↓→", "move the card selection"),
        binding("y", "show the selected image url"),
        binding("t", "cycle theme"),
        binding("?", "toggle this help"),
        binding("q", "quit"),
        Line::from(""),
        Line::from(Span::styled("Recent logs", heading_style)),
    ];

    let entries = app.log_buffer.recent(RECENT_LOG_LINES);
    if entries.is_empty() {
        lines.push(Line::from(Span::styled(
            "  (nothing captured yet)",
            app.theme.muted_style(),
        )));
    }
    for entry in entries {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<5} ", entry.level.as_str()),
                app.theme.log_level_style(entry.level),
            ),
            Span::styled(entry.message.clone(), text_style),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.border_focused_style())
        .title(" help ")
        .style(Style::default().bg(app.theme.bg));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

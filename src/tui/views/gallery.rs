// Gallery view
//
// Category tabs, the search/submit box, and the result area. The result
// area shows exactly one of: loading spinner, error banner, card grid, or
// the idle placeholder.

use crate::gallery::state::Status;
use crate::gallery::Category;
use crate::tui::app::{App, GRID_COLUMNS};
use crate::tui::components::truncate_to_width;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // category tabs
            Constraint::Length(1), // mode hint
            Constraint::Length(3), // search / submit box
            Constraint::Min(4),    // results
        ])
        .split(area);

    render_tabs(f, chunks[0], app);
    render_hint(f, chunks[1], app);
    render_search_box(f, chunks[2], app);
    render_results(f, chunks[3], app);
}

fn render_tabs(f: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = Category::all()
        .iter()
        .map(|c| Line::from(c.tab_label()))
        .collect();
    let selected = Category::all()
        .iter()
        .position(|&c| c == app.gallery.category())
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(app.theme.muted_style())
        .highlight_style(app.theme.tab_active_style())
        .divider(" │ ");
    f.render_widget(tabs, area);
}

fn render_hint(f: &mut Frame, area: Rect, app: &App) {
    let hint = Paragraph::new(format!(" {}", app.gallery.category().mode_hint()))
        .style(app.theme.muted_style());
    f.render_widget(hint, area);
}

fn render_search_box(f: &mut Frame, area: Rect, app: &App) {
    let category = app.gallery.category();
    let border_style = if app.editing_query {
        app.theme.border_focused_style()
    } else {
        app.theme.border_style()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ", category.submit_label()));

    let content = if category.uses_query() {
        let query = app.gallery.query();
        if query.is_empty() && !app.editing_query {
            Line::from(Span::styled(category.placeholder(), app.theme.muted_style()))
        } else {
            let mut spans = vec![Span::styled(query.to_string(), app.theme.base_style())];
            if app.editing_query {
                spans.push(Span::styled(
                    "█",
                    Style::default().fg(app.theme.accent),
                ));
            }
            Line::from(spans)
        }
    } else {
        Line::from(Span::styled(
            "press Enter to fetch a new batch",
            app.theme.muted_style(),
        ))
    };

    f.render_widget(Paragraph::new(content).block(block), area);
}

fn render_results(f: &mut Frame, area: Rect, app: &App) {
    match app.gallery.status() {
        Status::Loading => {
            let loading = Paragraph::new(format!(
                "{} Loading beautiful pictures...",
                app.spinner_char()
            ))
            .alignment(Alignment::Center)
            .style(Style::default().fg(app.theme.accent));
            f.render_widget(loading, centered_line(area));
        }
        Status::Error(message) => render_error(f, area, app, message),
        Status::Idle => {
            if app.gallery.items().is_empty() {
                let placeholder = Paragraph::new(app.gallery.category().placeholder())
                    .alignment(Alignment::Center)
                    .style(app.theme.muted_style());
                f.render_widget(placeholder, centered_line(area));
            } else {
                render_grid(f, area, app);
            }
        }
    }
}

fn render_error(f: &mut Frame, area: Rect, app: &App, message: &str) {
    let banner_height = 4.min(area.height);
    let banner_area = Rect::new(area.x + 1, area.y, area.width.saturating_sub(2), banner_height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.error_style())
        .title(" fetch failed ");

    let body = Paragraph::new(message.to_string())
        .style(app.theme.error_style())
        .block(block)
        .wrap(ratatui::widgets::Wrap { trim: true });
    f.render_widget(body, banner_area);
}

fn render_grid(f: &mut Frame, area: Rect, app: &App) {
    let items = app.gallery.items();
    let rows = items.len().div_ceil(GRID_COLUMNS);

    let row_constraints: Vec<Constraint> =
        (0..rows).map(|_| Constraint::Length(4)).collect();
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(area);

    for (row, row_area) in row_areas.iter().enumerate() {
        let col_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(*row_area);

        for (col, col_area) in col_areas.iter().enumerate() {
            let index = row * GRID_COLUMNS + col;
            let Some(item) = items.get(index) else {
                continue;
            };
            render_card(f, *col_area, app, index, item);
        }
    }
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    app: &App,
    index: usize,
    item: &crate::gallery::GalleryItem,
) {
    let selected = index == app.selected_card;
    let border_style = if selected {
        app.theme.border_focused_style()
    } else {
        app.theme.border_style()
    };

    let inner_width = area.width.saturating_sub(4) as usize;
    let label_style = if selected {
        Style::default()
            .fg(app.theme.selected_fg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.card_label)
    };

    let lines = vec![
        Line::from(Span::styled(
            truncate_to_width(&item.label, inner_width),
            label_style,
        )),
        Line::from(Span::styled(
            truncate_to_width(&item.url, inner_width),
            Style::default().fg(app.theme.card_url),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ", index + 1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// A one-line area vertically centered inside `area`
fn centered_line(area: Rect) -> Rect {
    let y = area.y + area.height / 2;
    Rect::new(area.x, y.min(area.bottom().saturating_sub(1)), area.width, 1)
}

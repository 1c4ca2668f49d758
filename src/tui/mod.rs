// TUI module - terminal lifecycle and event loop
//
// Crossterm events are read on a dedicated thread and forwarded over a
// channel so the main loop can select across input, fetch outcomes, and
// the animation tick without blocking.

pub mod app;
pub mod components;
pub mod input;
pub mod theme;
pub mod views;

use crate::config::Config;
use crate::events::{FetchOutcome, FetchRequest};
use crate::gallery::Category;
use crate::logging::LogBuffer;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

use app::App;

/// How often the animation tick fires (spinner, toast expiry)
const TICK_INTERVAL: Duration = Duration::from_millis(120);

/// Run the TUI until the user quits
pub async fn run_tui(
    config: &Config,
    log_buffer: LogBuffer,
    request_tx: mpsc::Sender<FetchRequest>,
    outcome_rx: mpsc::Receiver<FetchOutcome>,
) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::with_config(config, log_buffer);
    let result = run_event_loop(&mut terminal, &mut app, request_tx, outcome_rx).await;

    // Restore the terminal even if the loop errored
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Read crossterm events on a plain thread and forward them to the loop
fn spawn_input_reader() -> mpsc::Receiver<Event> {
    let (tx, rx) = mpsc::channel(64);
    std::thread::spawn(move || loop {
        match event::poll(Duration::from_millis(100)) {
            Ok(true) => {
                let Ok(ev) = event::read() else { break };
                if tx.blocking_send(ev).is_err() {
                    break;
                }
            }
            Ok(false) => {
                if tx.is_closed() {
                    break;
                }
            }
            Err(_) => break,
        }
    });
    rx
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    request_tx: mpsc::Sender<FetchRequest>,
    mut outcome_rx: mpsc::Receiver<FetchOutcome>,
) -> Result<()> {
    let mut input_rx = spawn_input_reader();
    let mut tick = tokio::time::interval(TICK_INTERVAL);

    loop {
        terminal.draw(|f| views::draw(f, app))?;

        tokio::select! {
            _ = tick.tick() => {
                app.tick_animation();
            }
            Some(outcome) = outcome_rx.recv() => {
                app.apply_outcome(outcome);
            }
            Some(ev) = input_rx.recv() => {
                if let Event::Key(key) = ev {
                    handle_key(app, key, &request_tx);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Layered key dispatch: query editing, then the help overlay, then the
/// global and gallery bindings.
fn handle_key(app: &mut App, key: KeyEvent, request_tx: &mpsc::Sender<FetchRequest>) {
    if key.kind == KeyEventKind::Release {
        app.handle_key_release(key.code);
        return;
    }

    // Text entry bypasses the press/repeat machinery entirely
    if app.editing_query {
        match key.code {
            KeyCode::Esc => app.editing_query = false,
            KeyCode::Enter => submit(app, request_tx),
            KeyCode::Backspace => app.gallery.pop_query_char(),
            KeyCode::Char(c) => app.gallery.push_query_char(c),
            _ => {}
        }
        return;
    }

    if !app.handle_key_press(key.code) {
        return;
    }

    // Help overlay absorbs everything; a few keys close it
    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')
        ) {
            app.show_help = false;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('t') => {
            app.cycle_theme();
            let name = app.theme_kind.name();
            app.show_toast(format!("theme: {}", name));
        }

        KeyCode::Char('1') | KeyCode::Char('d') => app.set_category(Category::Dog),
        KeyCode::Char('2') | KeyCode::Char('c') => app.set_category(Category::Cat),
        KeyCode::Char('3') | KeyCode::Char('s') => app.set_category(Category::Sea),
        KeyCode::Tab => app.next_category(),

        KeyCode::Char('/') if app.gallery.category().uses_query() => {
            app.editing_query = true;
        }
        KeyCode::Enter => submit(app, request_tx),

        KeyCode::Left => app.move_selection(-1, 0),
        KeyCode::Right => app.move_selection(1, 0),
        KeyCode::Up => app.move_selection(0, -1),
        KeyCode::Down => app.move_selection(0, 1),

        KeyCode::Char('y') => {
            if let Some(url) = app.selected_url() {
                let url = url.to_string();
                app.show_toast(url);
            }
        }

        _ => {}
    }
}

fn submit(app: &mut App, request_tx: &mpsc::Sender<FetchRequest>) {
    let request = app.submit();
    tracing::info!(
        category = request.category.name(),
        seq = request.seq,
        "fetch requested"
    );
    if request_tx.try_send(request).is_err() {
        tracing::warn!("fetch worker backed up, request dropped");
    }
}

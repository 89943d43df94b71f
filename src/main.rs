mod app;
use app::App;

mod logging;
mod ui;

use std::error::Error;
use std::io::{self, Stderr};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use ratatui::Terminal;
use ratatui::crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
    MouseButton, MouseEventKind,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::CrosstermBackend;
use ratatui_image::picker::Picker;
use tracing::{debug, error, info};

use crate::app::config::{config_path, load_config};
use crate::app::tmdb::TmdbClient;

fn main() -> ExitCode {
    // A missing token is reported before the terminal is touched
    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("movie_search: {err}");
            return ExitCode::FAILURE;
        }
    };

    logging::init_logging(&config);
    info!(base_url = %config.base_url, language = %config.language, "starting");
    match &config.file {
        Some(path) => info!("Loaded config from {}", path.display()),
        None => info!("No {} found; using defaults", config_path().display()),
    }
    if let Some(path) = &config.dotenv {
        debug!("Loaded environment overrides from {}", path.display());
    }

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("terminal error: {err}");
            eprintln!("movie_search: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: app::config::Config) -> Result<(), Box<dyn Error>> {
    // setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr(); // This is a special case. Normally using stdout is fine
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    // Must happen after entering the alternate screen
    let picker = Picker::from_query_stdio().unwrap_or_else(|_| Picker::halfblocks());

    // create app and run it
    let mut app = App::new(Arc::new(TmdbClient::new(config)), picker);
    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    app: &mut App,
) -> Result<(), Box<dyn Error>> {
    loop {
        // Apply results from the worker threads before drawing
        app.drain_messages();
        app.tick();

        terminal.draw(|f| ui::ui(f, app))?;

        // Poll for events with a timeout to allow UI updates
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == event::KeyEventKind::Release {
                        // Skip events that are not KeyEventKind::Press
                        continue;
                    }
                    if handle_key(app, key) == KeyOutcome::Quit {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => {
                    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                        app.click(mouse.column, mouse.row);
                    }
                }
                _ => {}
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyOutcome {
    Continue,
    Quit,
}

fn handle_key(app: &mut App, key: KeyEvent) -> KeyOutcome {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyOutcome::Quit;
    }

    // Handle search input when searching is active
    if app.searching {
        match key.code {
            KeyCode::Char(c) => {
                app.search_term.push(c);
            }
            KeyCode::Backspace => {
                app.search_term.pop();
            }
            KeyCode::Enter => {
                app.submit_search();
            }
            KeyCode::Esc => {
                app.cancel_search_input();
            }
            _ => {}
        }
        return KeyOutcome::Continue;
    }

    // Modal is open
    if app.session.selected().is_some() {
        match key.code {
            KeyCode::Char('q') => return KeyOutcome::Quit,
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('x') => {
                app.close_modal();
            }
            _ => {}
        }
        return KeyOutcome::Continue;
    }

    match key.code {
        KeyCode::Char('q') => return KeyOutcome::Quit,
        KeyCode::Char('/') | KeyCode::Char('s') => {
            app.start_search_input();
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.next_tile();
        }
        KeyCode::Left | KeyCode::Char('h') => {
            app.previous_tile();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.tile_down();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.tile_up();
        }
        KeyCode::Enter => {
            app.open_selected();
        }
        KeyCode::Char('n') | KeyCode::Char(']') | KeyCode::PageDown => {
            app.next_page();
        }
        KeyCode::Char('p') | KeyCode::Char('[') | KeyCode::PageUp => {
            app.previous_page();
        }
        KeyCode::Char('g') | KeyCode::Home => {
            app.first_page();
        }
        KeyCode::Char('G') | KeyCode::End => {
            app.last_page();
        }
        _ => {}
    }

    KeyOutcome::Continue
}

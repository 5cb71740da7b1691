// Terminal dashboard for the Harborview gateway.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, time::Duration};

mod api;
mod app;
mod config;
mod model;
mod ui;

use api::ApiClient;
use app::{App, AppEvent, EventHandler};
use config::ConsoleConfig;

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();
    setup_panic_handler();

    let config = ConsoleConfig::load();
    tracing::info!("Gateway API: {}", config.api_base_url);

    let mut app = App::new(ApiClient::new(config.api_base_url));
    // Initial load, like opening the dashboard.
    app.refresh().await;

    run_tui(&mut app).await
}

async fn run_tui(app: &mut App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(250);

    loop {
        terminal.draw(|frame| ui::render(frame, &app.state))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind != KeyEventKind::Release {
                    if let Some(app_event) =
                        EventHandler::handle_key_event(key_event, &app.state)
                    {
                        process_event(app, app_event).await;
                    }
                }
            }
        }

        if app.state.should_quit {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Apply one user-triggered event. Fetches are awaited here, so at most
/// one list fetch and one log fetch are ever in flight.
async fn process_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Quit => app.state.should_quit = true,
        AppEvent::Refresh => app.refresh().await,
        AppEvent::NextContainer => app.state.select_next(),
        AppEvent::PreviousContainer => app.state.select_previous(),
        AppEvent::OpenLogs => app.open_selected_logs().await,
        AppEvent::CloseLogs => app.state.close_log_view(),
    }
}

fn setup_logging() {
    use std::fs::OpenOptions;
    use std::path::PathBuf;
    use tracing_subscriber::prelude::*;

    // The TUI owns stdout, so tracing goes to a file.
    let log_dir = std::env::var("HOME")
        .map(|home| PathBuf::from(home).join(".harborview").join("logs"))
        .unwrap_or_else(|_| PathBuf::from(".harborview/logs"));

    let _ = std::fs::create_dir_all(&log_dir);

    let log_file = log_dir.join(format!(
        "console-{}.log",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_file) else {
        // No log file is not fatal; run without tracing output.
        return;
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(file)
                .with_ansi(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "console=info".into()),
        )
        .init();
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        // Restore the terminal before reporting the panic.
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stderr(), LeaveAlternateScreen);

        tracing::error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
    }));
}

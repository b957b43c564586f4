use std::time::Duration;

use ratatui::{Terminal, backend::CrosstermBackend};

use crate::logic::send_query;
use crate::state::AppState;
use crate::theme::Settings;

use super::terminal::{restore_terminal, setup_terminal};

mod channels;
mod cleanup;
mod event_loop;
mod workers;

use channels::Channels;
use cleanup::cleanup_on_exit;
use event_loop::run_event_loop;
use workers::spawn_event_thread;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the filingsview TUI end-to-end.
///
/// Inputs:
/// - `settings`: Effective settings (file values with command-line overrides applied).
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal errors.
///
/// Details:
/// - Prefills the identifier from `default_cik` and fetches page 1 immediately.
/// - `FILINGSVIEW_TEST_HEADLESS=1` skips terminal setup, drawing, and the reader thread.
pub async fn run(settings: Settings) -> Result<()> {
    let headless = std::env::var("FILINGSVIEW_TEST_HEADLESS").ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut app = AppState::from_settings(&settings);
    tracing::info!(
        service_url = %settings.service_url,
        cik = %app.cik_input,
        headless,
        "[Runtime] starting"
    );

    let client = crate::sources::build_client(Duration::from_secs(settings.connect_timeout_secs));
    let mut channels = Channels::new(client, settings.service_url.clone());
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    send_query(&mut app, &channels.query_tx);

    run_event_loop(&mut terminal, &mut app, &mut channels).await;

    cleanup_on_exit(&app, &channels);
    if !headless {
        restore_terminal()?;
    }
    Ok(())
}

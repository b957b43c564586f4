use ratatui::Terminal;
use tokio::select;

use crate::logic::apply_page_response;
use crate::state::AppState;
use crate::ui::ui;

use super::channels::Channels;

/// What: Drive the UI until the user quits.
///
/// Inputs:
/// - `terminal`: Terminal to draw into, or `None` when headless.
/// - `app`: Application state; this loop is its only writer.
/// - `channels`: Runtime channels.
///
/// Details:
/// - Redraws before waiting for the next terminal event or fetch response.
pub async fn run_event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Option<Terminal<B>>,
    app: &mut AppState,
    channels: &mut Channels,
) {
    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, app));
        }
        select! {
            Some(ev) = channels.event_rx.recv() => {
                if crate::events::handle_event(&ev, app, &channels.query_tx) {
                    break;
                }
            }
            Some(response) = channels.response_rx.recv() => {
                let outcome = apply_page_response(app, response, &channels.query_tx);
                tracing::debug!(?outcome, in_flight = app.in_flight, "[Runtime] response handled");
            }
            else => break,
        }
    }
}

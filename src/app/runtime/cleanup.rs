use std::sync::atomic::Ordering;

use crate::state::AppState;

use super::channels::Channels;

/// What: Release runtime resources on exit.
///
/// Details:
/// - Signals the terminal reader thread to stop.
/// - Fetches still in flight are abandoned; their responses have nowhere to go.
pub fn cleanup_on_exit(app: &AppState, channels: &Channels) {
    tracing::debug!(
        in_flight = app.in_flight,
        latest = app.latest_request_id,
        "[Runtime] main loop exited"
    );
    channels.event_thread_cancelled.store(true, Ordering::Relaxed);
}

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::sources;
use crate::state::{PageRequest, PageResponse};

/// What: Spawn the background worker that turns requests into responses.
///
/// Inputs:
/// - `query_rx`: Requests queued by the event loop.
/// - `response_tx`: Where every finished fetch is reported.
/// - `client`: Shared HTTP client.
/// - `service_url`: Root URL of the Filings Service.
///
/// Details:
/// - Each request runs as its own task; nothing is debounced or cancelled.
/// - Every request yields exactly one `PageResponse`, success or failure.
pub fn spawn_fetch_worker(
    mut query_rx: mpsc::UnboundedReceiver<PageRequest>,
    response_tx: mpsc::UnboundedSender<PageResponse>,
    client: reqwest::Client,
    service_url: String,
) {
    tokio::spawn(async move {
        while let Some(request) = query_rx.recv().await {
            let tx = response_tx.clone();
            let client = client.clone();
            let base = service_url.clone();
            tokio::spawn(async move {
                let id = request.id;
                let result = sources::fetch_filings(&client, &base, &request).await;
                if let Err(e) = &result {
                    tracing::debug!(id, error = %e, "filings fetch failed");
                }
                if tx.send(PageResponse { id, result }).is_err() {
                    tracing::debug!(id, "event loop gone; response dropped");
                }
            });
        }
        tracing::debug!("fetch worker stopped");
    });
}

/// What: Spawn the blocking terminal reader thread.
///
/// Inputs:
/// - `headless`: When `true`, no thread is started.
/// - `event_tx`: Destination for terminal events.
/// - `cancelled`: Flag checked between polls so the thread exits promptly.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        loop {
            if cancelled.load(Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => {
                    // ignore transient read errors
                    if let Ok(ev) = crossterm::event::read()
                        && (cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err())
                    {
                        break;
                    }
                }
                Ok(false) | Err(_) => {}
            }
        }
    });
}

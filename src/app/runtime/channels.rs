use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::state::{PageRequest, PageResponse};

use super::workers::spawn_fetch_worker;

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Terminal events arrive from the reader thread on `event_rx`.
/// - Requests go to the fetch worker on `query_tx`; each comes back once on `response_rx`.
pub struct Channels {
    /// Sender handed to the terminal reader thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Terminal events for the event loop.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on exit so the reader thread stops polling.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Outgoing filings requests.
    pub query_tx: mpsc::UnboundedSender<PageRequest>,
    /// Fetch results, one per request.
    pub response_rx: mpsc::UnboundedReceiver<PageResponse>,
}

impl Channels {
    /// What: Create all channels and start the fetch worker.
    ///
    /// Inputs:
    /// - `client`: HTTP client shared by all fetches.
    /// - `service_url`: Root URL of the Filings Service.
    pub fn new(client: reqwest::Client, service_url: String) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (query_tx, query_rx) = mpsc::unbounded_channel();
        let (response_tx, response_rx) = mpsc::unbounded_channel();
        spawn_fetch_worker(query_rx, response_tx, client, service_url);
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            query_tx,
            response_rx,
        }
    }
}

use tokio::sync::mpsc;

use crate::state::{AppState, FilterSelection, FilterState, PageRequest};

/// What: Build the outgoing request for a selection and filter state.
///
/// Inputs:
/// - `id`: Sequence number allocated for this request.
/// - `selection`: Identifier and filter choices.
/// - `state`: Page and page size.
///
/// Output:
/// - `PageRequest` whose `group`/`year` are `None` for the "All" sentinel.
#[must_use]
pub fn build_request(id: u64, selection: &FilterSelection, state: &FilterState) -> PageRequest {
    PageRequest {
        id,
        cik: selection.cik.clone(),
        page: state.page(),
        per_page: state.per_page(),
        group: selection.group.as_param().map(ToString::to_string),
        year: selection.year.as_param().map(ToString::to_string),
    }
}

/// What: Queue a fetch for the current inputs and page.
///
/// Inputs:
/// - `app`: Application state; its sequence counters and busy count are updated.
/// - `query_tx`: Channel to the fetch worker.
///
/// Details:
/// - Allocates the next request id and marks it as the only one whose response
///   may be applied; earlier in-flight requests become stale.
/// - The busy count goes up here and back down when the response is applied.
pub fn send_query(app: &mut AppState, query_tx: &mpsc::UnboundedSender<PageRequest>) {
    let id = app.next_request_id;
    app.next_request_id += 1;
    app.latest_request_id = id;
    let request = build_request(id, &app.selection(), &app.filter);
    tracing::debug!(
        id,
        cik = %request.cik,
        page = request.page,
        group = ?request.group,
        year = ?request.year,
        "queueing filings request"
    );
    if query_tx.send(request).is_ok() {
        app.in_flight += 1;
    } else {
        tracing::warn!(id, "fetch worker is gone; request dropped");
    }
}

/// What: Run a new search from the first page.
///
/// Details:
/// - Changing filters always returns to page 1 before fetching.
pub fn search(app: &mut AppState, query_tx: &mpsc::UnboundedSender<PageRequest>) {
    app.close_dropdowns();
    app.filter.reset();
    send_query(app, query_tx);
}

//! Page navigation actions and the transition they cause.

use tokio::sync::mpsc;

use crate::state::{AppState, FilterState, PageRequest};

/// Closed set of actions a pagination control can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageAction {
    /// Jump to page 1.
    First,
    /// One page back.
    Prev,
    /// One page forward.
    Next,
    /// Jump to the last page.
    Last,
    /// Jump to an explicit page number.
    Goto(u32),
}

/// What: Compute the state an action leads to.
///
/// Inputs:
/// - `state`: Current filter state (total already recorded).
/// - `action`: Action carried by the activated control.
///
/// Output:
/// - `Some(new_state)` when the action applies, `None` when it is a no-op (the
///   matching control would be disabled or the target page is out of range).
///
/// Details:
/// - `Next`/`Last` use the page count derived from the current total.
/// - `Goto` on the current page still applies so the page can be reloaded.
#[must_use]
pub fn next_state(state: &FilterState, action: PageAction) -> Option<FilterState> {
    let page = state.page();
    let total_pages = state.total_pages();
    let target = match action {
        PageAction::First => (page != 1).then_some(1),
        PageAction::Prev => (page > 1).then(|| page - 1),
        PageAction::Next => (page < total_pages).then(|| page + 1),
        PageAction::Last => (page != total_pages).then_some(total_pages),
        PageAction::Goto(n) => (1..=total_pages).contains(&n).then_some(n),
    }?;
    Some(state.with_page(target))
}

/// What: Apply a pagination action and re-fetch when the page changes.
///
/// Inputs:
/// - `app`: Application state whose filter state is updated.
/// - `action`: Action carried by the activated control.
/// - `query_tx`: Channel to the fetch worker.
///
/// Output:
/// - `true` if a fetch was issued.
///
/// Details:
/// - Exactly one request per applied action; ignored actions send nothing.
pub fn dispatch(
    app: &mut AppState,
    action: PageAction,
    query_tx: &mpsc::UnboundedSender<PageRequest>,
) -> bool {
    let Some(new_state) = next_state(&app.filter, action) else {
        tracing::debug!(?action, page = app.filter.page(), "pagination action ignored");
        return false;
    };
    tracing::debug!(?action, from = app.filter.page(), to = new_state.page(), "page change");
    app.filter = new_state;
    crate::logic::query::send_query(app, query_tx);
    true
}

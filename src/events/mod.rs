//! Event handling layer: routes keyboard and mouse input to state transitions.
//!
//! Modal dialogs capture input first; otherwise global keys apply, then the
//! handler for the focused widget.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::{PageAction, dispatch};
use crate::state::{AppState, Focus, Modal, PageRequest};

mod filters;
mod modals;
mod mouse;
mod results;


pub use mouse::is_point_in_rect;

/// What: Dispatch a single terminal event and mutate the [`AppState`].
///
/// Inputs:
/// - `ev`: Terminal event from the reader thread.
/// - `app`: Application state.
/// - `query_tx`: Channel to the fetch worker.
///
/// Output:
/// - `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(
    ev: &CEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<PageRequest>,
) -> bool {
    match ev {
        CEvent::Key(ke) if ke.kind == KeyEventKind::Press => handle_key(*ke, app, query_tx),
        CEvent::Mouse(m) => mouse::handle_mouse_event(*m, app, query_tx),
        _ => false,
    }
}

/// What: Handle one key press.
///
/// Details:
/// - `Ctrl+C` always quits, even over a modal.
/// - Typed characters go to the identifier input while it has focus, so `q` and `?`
///   only act as shortcuts elsewhere.
fn handle_key(ke: KeyEvent, app: &mut AppState, query_tx: &mpsc::UnboundedSender<PageRequest>) -> bool {
    if ke.modifiers.contains(KeyModifiers::CONTROL) && ke.code == KeyCode::Char('c') {
        return true;
    }
    if !matches!(app.modal, Modal::None) {
        modals::handle_modal_key(ke, app);
        return false;
    }

    let in_input = app.focus == Focus::Cik;
    // no paging while an option list is open
    let menu_open = app.group.open || app.year.open;
    match ke.code {
        KeyCode::Tab => {
            app.close_dropdowns();
            app.focus = app.focus.next();
            return false;
        }
        KeyCode::BackTab => {
            app.close_dropdowns();
            app.focus = app.focus.prev();
            return false;
        }
        KeyCode::F(1) => {
            app.modal = Modal::Help;
            return false;
        }
        KeyCode::Char('?') if !in_input => {
            app.modal = Modal::Help;
            return false;
        }
        KeyCode::Char('q') if !in_input => return true,
        KeyCode::Left | KeyCode::PageUp if !menu_open => {
            dispatch(app, PageAction::Prev, query_tx);
            return false;
        }
        KeyCode::Right | KeyCode::PageDown if !menu_open => {
            dispatch(app, PageAction::Next, query_tx);
            return false;
        }
        KeyCode::Home if !in_input && !menu_open => {
            dispatch(app, PageAction::First, query_tx);
            return false;
        }
        KeyCode::End if !in_input && !menu_open => {
            dispatch(app, PageAction::Last, query_tx);
            return false;
        }
        _ => {}
    }

    match app.focus {
        Focus::Cik => filters::handle_input_key(ke, app, query_tx),
        Focus::Group | Focus::Year => filters::handle_dropdown_key(ke, app, query_tx),
        Focus::Results => results::handle_results_key(ke, app),
    }
    false
}

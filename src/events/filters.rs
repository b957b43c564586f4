//! Keys for the identifier input and the two filter dropdowns.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::search;
use crate::state::{AppState, DropdownId, Focus, PageRequest};

/// What: Edit the identifier input.
///
/// Details:
/// - Characters append, Backspace deletes, `Ctrl+U` clears, Enter searches.
/// - Editing does not fetch; only Enter (or the Search button) does.
pub fn handle_input_key(
    ke: KeyEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<PageRequest>,
) {
    match ke.code {
        KeyCode::Enter => search(app, query_tx),
        KeyCode::Backspace => {
            app.cik_input.pop();
        }
        KeyCode::Char('u') if ke.modifiers.contains(KeyModifiers::CONTROL) => {
            app.cik_input.clear();
        }
        KeyCode::Char(ch) if !ke.modifiers.contains(KeyModifiers::CONTROL) => {
            app.cik_input.push(ch);
        }
        KeyCode::Esc => app.close_dropdowns(),
        _ => {}
    }
}

/// What: Operate the focused filter dropdown.
///
/// Details:
/// - Closed: Up/Down cycle the selection in place, Space opens the overlay, Enter searches.
/// - Open: Up/Down move the highlight, Enter picks it and closes, Esc closes.
/// - A new choice takes effect on the next search.
pub fn handle_dropdown_key(
    ke: KeyEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<PageRequest>,
) {
    let id = match app.focus {
        Focus::Group => DropdownId::Group,
        Focus::Year => DropdownId::Year,
        Focus::Cik | Focus::Results => return,
    };
    let dd = app.dropdown_mut(id);
    if dd.open {
        let last = dd.options.len().saturating_sub(1);
        match ke.code {
            KeyCode::Up => dd.highlighted = dd.highlighted.saturating_sub(1),
            KeyCode::Down => dd.highlighted = (dd.highlighted + 1).min(last),
            KeyCode::Enter => {
                let idx = dd.highlighted;
                dd.choose(idx);
            }
            KeyCode::Esc | KeyCode::Char(' ') => dd.open = false,
            _ => {}
        }
        return;
    }
    match ke.code {
        KeyCode::Up => dd.cycle(false),
        KeyCode::Down => dd.cycle(true),
        KeyCode::Char(' ') => {
            dd.highlighted = dd.selected_index();
            dd.open = true;
        }
        KeyCode::Enter => search(app, query_tx),
        _ => {}
    }
}

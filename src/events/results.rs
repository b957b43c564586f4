//! Keys for the results table.

use crossterm::event::{KeyCode, KeyEvent};

use crate::logic::rows::LinkKind;
use crate::state::AppState;

/// What: Move the highlighted row or open one of its links.
///
/// Details:
/// - `o` opens the primary document, `p` the PDF link, `d` the filing index page.
/// - Nothing happens on the "No filings found" placeholder.
pub fn handle_results_key(ke: KeyEvent, app: &mut AppState) {
    let kind = match ke.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_row_selection(-1);
            return;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_row_selection(1);
            return;
        }
        KeyCode::Char('o') | KeyCode::Enter => LinkKind::Document,
        KeyCode::Char('p') => LinkKind::Pdf,
        KeyCode::Char('d') => LinkKind::Details,
        _ => return,
    };
    let url = app
        .table_state
        .selected()
        .and_then(|i| app.rows.rows().get(i))
        .and_then(|row| row.url_for(kind));
    if let Some(url) = url {
        crate::util::open_url(url);
    }
}

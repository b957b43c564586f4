//! Key handling while a modal dialog is open.

use crossterm::event::{KeyCode, KeyEvent};

use crate::state::{AppState, Modal};

/// What: Route a key to the open modal.
///
/// Details:
/// - Alerts close on Enter or Esc; help also closes on `?`, `q`, and F1.
/// - All other keys are swallowed so nothing behind the modal reacts.
pub fn handle_modal_key(ke: KeyEvent, app: &mut AppState) {
    let close = match &app.modal {
        Modal::Alert { .. } => matches!(ke.code, KeyCode::Enter | KeyCode::Esc),
        Modal::Help => matches!(
            ke.code,
            KeyCode::Enter | KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?' | 'q')
        ),
        Modal::None => false,
    };
    if close {
        app.modal = Modal::None;
    }
}

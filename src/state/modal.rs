//! Modal dialog state for the UI.

/// What: Overlay dialog currently covering the main view.
///
/// - Input: Raised by fetch failures (alerts) or the help key.
/// - Output: Tells the renderer which overlay to draw and the event layer which keys to capture.
/// - Details: While a modal is open, key and mouse input goes to the modal only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Modal {
    /// No overlay.
    #[default]
    None,
    /// Blocking message, dismissed with Enter/Esc or a click.
    Alert {
        /// Text shown to the user.
        message: String,
    },
    /// Key binding reference.
    Help,
}

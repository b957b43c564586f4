//! Central `AppState` container.

use ratatui::widgets::TableState;

use crate::logic::dispatch::PageAction;
use crate::logic::rows::RowsView;
use crate::state::filter::FilterState;
use crate::state::modal::Modal;
use crate::state::types::{Dropdown, Focus};

mod default_impl;
mod methods;

#[cfg(test)]
mod tests;

/// Hit-test rectangle recorded during rendering: `(x, y, width, height)`.
pub type Rect4 = (u16, u16, u16, u16);

/// Global application state shared by the event, fetch, and UI layers.
///
/// Owned by the event loop; background fetch tasks never touch it directly
/// and only report back through the response channel. Nothing here is
/// persisted: the whole struct is dropped on exit.
#[derive(Debug)]
pub struct AppState {
    /// Identifier (CIK) text input.
    pub cik_input: String,
    /// Which widget receives keyboard input.
    pub focus: Focus,
    /// Group filter dropdown.
    pub group: Dropdown,
    /// Year filter dropdown.
    pub year: Dropdown,
    /// Current page, page size, and last-known total.
    pub filter: FilterState,
    /// Rows built from the last successful response.
    pub rows: RowsView,
    /// Company name from the last successful response.
    pub company_name: Option<String>,
    /// Highlight state for the results table.
    pub table_state: TableState,
    /// Active modal dialog, if any.
    pub modal: Modal,
    /// Show the key-hint footer line.
    pub show_help_footer: bool,

    // Fetch coordination
    /// Identifier of the request whose response may be applied.
    pub latest_request_id: u64,
    /// Next request identifier to allocate.
    pub next_request_id: u64,
    /// Requests sent and not yet answered; drives the busy indicator.
    pub in_flight: usize,
    /// Whether at least one response has been applied.
    pub loaded_once: bool,

    // Hit-test rectangles recorded by the renderer for the current frame
    /// Identifier input box.
    pub cik_rect: Option<Rect4>,
    /// Group dropdown button.
    pub group_rect: Option<Rect4>,
    /// Year dropdown button.
    pub year_rect: Option<Rect4>,
    /// Search button.
    pub search_button_rect: Option<Rect4>,
    /// Inner list area of the open group overlay.
    pub group_menu_rect: Option<Rect4>,
    /// Inner list area of the open year overlay.
    pub year_menu_rect: Option<Rect4>,
    /// Index of the first option visible in the open overlay.
    pub menu_scroll: usize,
    /// Inner body area of the results table (rows only).
    pub results_rect: Option<Rect4>,
    /// Enabled pagination controls and the action each carries.
    pub pagination_rects: Vec<(Rect4, PageAction)>,
    /// Clickable row links and the URL each opens.
    pub link_rects: Vec<(Rect4, String)>,
    /// Area of the open modal.
    pub modal_rect: Option<Rect4>,
}

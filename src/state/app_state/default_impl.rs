//! Default implementation for `AppState`.

use ratatui::widgets::TableState;

use super::AppState;
use crate::logic::rows::RowsView;
use crate::state::filter::FilterState;
use crate::state::modal::Modal;
use crate::state::types::{Dropdown, Focus};

impl Default for AppState {
    /// What: Construct an empty [`AppState`] on page 1 with no identifier.
    ///
    /// Details:
    /// - Does not read settings; see [`AppState::from_settings`] for the startup path.
    /// - Rows start as an empty placeholder; both dropdowns hold only "All".
    fn default() -> Self {
        Self {
            cik_input: String::new(),
            focus: Focus::default(),
            group: Dropdown::default(),
            year: Dropdown::default(),
            filter: FilterState::new(),
            rows: RowsView::Empty,
            company_name: None,
            table_state: TableState::default(),
            modal: Modal::None,
            show_help_footer: true,
            latest_request_id: 0,
            next_request_id: 1,
            in_flight: 0,
            loaded_once: false,
            cik_rect: None,
            group_rect: None,
            year_rect: None,
            search_button_rect: None,
            group_menu_rect: None,
            year_menu_rect: None,
            menu_scroll: 0,
            results_rect: None,
            pagination_rects: Vec::new(),
            link_rects: Vec::new(),
            modal_rect: None,
        }
    }
}

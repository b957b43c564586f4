//! Accessors and small state transitions on `AppState`.

use super::AppState;
use crate::state::types::{Dropdown, DropdownId, FilterSelection};
use crate::theme::Settings;

impl AppState {
    /// What: Build the startup state from user settings.
    ///
    /// Inputs:
    /// - `settings`: Parsed `settings.conf` (CLI overrides already applied).
    ///
    /// Output:
    /// - `AppState` with the identifier input prefilled and footer visibility applied.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            cik_input: settings.default_cik.clone(),
            show_help_footer: settings.show_help_footer,
            ..Self::default()
        }
    }

    /// Snapshot of the user-editable query inputs.
    #[must_use]
    pub fn selection(&self) -> FilterSelection {
        FilterSelection {
            cik: self.cik_input.trim().to_string(),
            group: self.group.selected.clone(),
            year: self.year.selected.clone(),
        }
    }

    /// `true` while any fetch is outstanding.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    /// Borrow a dropdown by id.
    #[must_use]
    pub const fn dropdown(&self, id: DropdownId) -> &Dropdown {
        match id {
            DropdownId::Group => &self.group,
            DropdownId::Year => &self.year,
        }
    }

    /// Mutably borrow a dropdown by id.
    pub const fn dropdown_mut(&mut self, id: DropdownId) -> &mut Dropdown {
        match id {
            DropdownId::Group => &mut self.group,
            DropdownId::Year => &mut self.year,
        }
    }

    /// Close both dropdown overlays.
    pub const fn close_dropdowns(&mut self) {
        self.group.open = false;
        self.year.open = false;
    }

    /// Number of filing rows currently shown (0 for the placeholder).
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// What: Move the highlighted results row by `delta`, clamped to the row range.
    ///
    /// Details:
    /// - Clears the highlight when there are no rows.
    pub fn move_row_selection(&mut self, delta: isize) {
        let len = self.row_count();
        if len == 0 {
            self.table_state.select(None);
            return;
        }
        let cur = self.table_state.selected().unwrap_or(0);
        let next = cur.saturating_add_signed(delta).min(len - 1);
        self.table_state.select(Some(next));
    }

    /// Forget every hit-test rectangle; the renderer records fresh ones each frame.
    pub fn clear_hit_rects(&mut self) {
        self.cik_rect = None;
        self.group_rect = None;
        self.year_rect = None;
        self.search_button_rect = None;
        self.group_menu_rect = None;
        self.year_menu_rect = None;
        self.menu_scroll = 0;
        self.results_rect = None;
        self.pagination_rects.clear();
        self.link_rects.clear();
        self.modal_rect = None;
    }
}

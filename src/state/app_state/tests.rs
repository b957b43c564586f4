//! Tests for `AppState`.

use crate::state::app_state::AppState;
use crate::state::types::{DropdownId, FilterChoice};
use crate::theme::Settings;

#[test]
/// What: Verify `AppState::default` starts on page 1, idle, with only "All" in both dropdowns.
fn app_state_default_is_idle_on_first_page() {
    let app = AppState::default();
    assert_eq!(app.filter.page(), 1);
    assert_eq!(app.filter.total(), 0);
    assert!(!app.is_busy());
    assert_eq!(app.group.options, vec![FilterChoice::All]);
    assert_eq!(app.year.options, vec![FilterChoice::All]);
    assert_eq!(app.latest_request_id, 0);
    assert_eq!(app.next_request_id, 1);
    assert_eq!(app.row_count(), 0);
}

#[test]
/// What: `from_settings` prefills the identifier and honours the footer flag.
fn app_state_from_settings_prefills_cik() {
    let settings = Settings {
        default_cik: "0000320193".into(),
        show_help_footer: false,
        ..Settings::default()
    };
    let app = AppState::from_settings(&settings);
    assert_eq!(app.cik_input, "0000320193");
    assert!(!app.show_help_footer);
}

#[test]
/// What: `selection` trims the identifier and reports the selected dropdown values.
fn selection_snapshot_reflects_inputs() {
    let mut app = AppState {
        cik_input: "  0001601830 ".into(),
        ..AppState::default()
    };
    app.dropdown_mut(DropdownId::Group).selected = FilterChoice::Value("FY2021".into());
    let sel = app.selection();
    assert_eq!(sel.cik, "0001601830");
    assert_eq!(sel.group, FilterChoice::Value("FY2021".into()));
    assert_eq!(sel.year, FilterChoice::All);
}

#[test]
/// What: Row highlight stays within bounds and clears when the table is empty.
fn move_row_selection_clamps() {
    use crate::logic::rows::render_rows;
    use crate::state::FilingRecord;

    let rec = FilingRecord {
        date: "2023-01-02".into(),
        form: "10-K".into(),
        description: None,
        primary_document: "a.htm".into(),
        group: "Annual Filings".into(),
        link: "https://example.test/a.htm".into(),
        details_link: "https://example.test/a-index.html".into(),
    };
    let mut app = AppState {
        rows: render_rows(&[rec.clone(), rec]),
        ..AppState::default()
    };
    app.move_row_selection(5);
    assert_eq!(app.table_state.selected(), Some(1));
    app.move_row_selection(-9);
    assert_eq!(app.table_state.selected(), Some(0));

    app.rows = render_rows(&[]);
    app.move_row_selection(1);
    assert_eq!(app.table_state.selected(), None);
}

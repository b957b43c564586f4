//! Core value types used by filingsview state.

use std::fmt;

/// Label shown for the "no filter" choice in both dropdowns.
pub const ALL_LABEL: &str = "All";

/// A single filter value for the group or year dropdown.
///
/// `All` is the sentinel meaning "apply no constraint for this field". It is
/// distinct from an empty value: `Value(String::new())` is a real (if odd)
/// filter the service would receive verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum FilterChoice {
    /// No constraint for this field.
    #[default]
    All,
    /// Constrain the field to this exact value.
    Value(String),
}

impl FilterChoice {
    /// What: Return the value to send to the Filings Service, if any.
    ///
    /// Output:
    /// - `None` for [`FilterChoice::All`]; `Some(value)` otherwise.
    #[must_use]
    pub fn as_param(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Value(v) => Some(v.as_str()),
        }
    }

    /// Display label used in the dropdown and footer.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_LABEL,
            Self::Value(v) => v.as_str(),
        }
    }
}

impl fmt::Display for FilterChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// User-editable query inputs captured at the moment a fetch is issued.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FilterSelection {
    /// Company identifier (CIK) as typed.
    pub cik: String,
    /// Group filter (form family such as "Annual Filings").
    pub group: FilterChoice,
    /// Year filter ("2023").
    pub year: FilterChoice,
}

/// One filing row as served by the Filings Service.
///
/// Fields the table does not show (such as `accessionNumber`) are ignored on decode.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct FilingRecord {
    /// Filing date, `YYYY-MM-DD`.
    pub date: String,
    /// Form code ("10-K", "8-K", ...).
    pub form: String,
    /// Primary document description; the service sends `""` when unknown.
    #[serde(default)]
    pub description: Option<String>,
    /// File name of the primary document.
    #[serde(rename = "primaryDocument", default)]
    pub primary_document: String,
    /// Group label assigned by the service.
    #[serde(default)]
    pub group: String,
    /// URL of the primary document.
    #[serde(default)]
    pub link: String,
    /// URL of the filing index page.
    #[serde(default)]
    pub details_link: String,
}

impl FilingRecord {
    /// What: Return the label shown in the description column.
    ///
    /// Details:
    /// - Falls back to `primary_document` when the description is missing or blank.
    #[must_use]
    pub fn display_label(&self) -> &str {
        match self.description.as_deref() {
            Some(d) if !d.trim().is_empty() => d,
            _ => &self.primary_document,
        }
    }
}

/// One page of results as returned by `GET /api/filings`.
///
/// The echoed `page`/`per_page`/`pages_total` are ignored; paging is computed locally.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
pub struct FilingsPage {
    /// Records on this page, in server order.
    #[serde(default)]
    pub data: Vec<FilingRecord>,
    /// Total number of records matching the filter.
    #[serde(default)]
    pub total: u64,
    /// Distinct groups for the identifier, independent of the applied filter.
    #[serde(default)]
    pub available_groups: Vec<String>,
    /// Distinct years for the identifier, independent of the applied filter.
    #[serde(default)]
    pub available_years: Vec<String>,
    /// Service-side failure message.
    #[serde(default)]
    pub error: Option<String>,
    /// Company display name.
    #[serde(default)]
    pub company_name: Option<String>,
}

/// Outgoing fetch tagged with a monotonic sequence number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    /// Sequence id; only the response matching the latest id is applied.
    pub id: u64,
    /// Company identifier.
    pub cik: String,
    /// Requested page (1-based).
    pub page: u32,
    /// Page size.
    pub per_page: u32,
    /// Group filter, omitted for "All".
    pub group: Option<String>,
    /// Year filter, omitted for "All".
    pub year: Option<String>,
}

/// Result of one fetch, routed back to the event loop.
#[derive(Debug)]
pub struct PageResponse {
    /// Sequence id of the request that produced this response.
    pub id: u64,
    /// Decoded page or the failure that prevented it.
    pub result: Result<FilingsPage, crate::sources::FetchError>,
}

/// Which widget receives keyboard input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Focus {
    /// Identifier text input.
    #[default]
    Cik,
    /// Group dropdown.
    Group,
    /// Year dropdown.
    Year,
    /// Results table.
    Results,
}

impl Focus {
    /// Next focus target in Tab order.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Cik => Self::Group,
            Self::Group => Self::Year,
            Self::Year => Self::Results,
            Self::Results => Self::Cik,
        }
    }

    /// Previous focus target (Shift+Tab).
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Cik => Self::Results,
            Self::Group => Self::Cik,
            Self::Year => Self::Group,
            Self::Results => Self::Year,
        }
    }
}

/// Identifies one of the two filter dropdowns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropdownId {
    /// Form group dropdown.
    Group,
    /// Filing year dropdown.
    Year,
}

/// Option list and selection of a filter dropdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dropdown {
    /// Options in display order; `All` is always first.
    pub options: Vec<FilterChoice>,
    /// Currently selected value.
    pub selected: FilterChoice,
    /// Whether the option overlay is showing.
    pub open: bool,
    /// Highlighted index while the overlay is open.
    pub highlighted: usize,
}

impl Default for Dropdown {
    fn default() -> Self {
        Self {
            options: vec![FilterChoice::All],
            selected: FilterChoice::All,
            open: false,
            highlighted: 0,
        }
    }
}

impl Dropdown {
    /// Index of the selected option, falling back to `0` (`All`).
    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.options
            .iter()
            .position(|o| *o == self.selected)
            .unwrap_or(0)
    }

    /// What: Step the selection forward or backward through the options.
    ///
    /// Inputs:
    /// - `forward`: `true` for the next option, `false` for the previous one.
    ///
    /// Details:
    /// - Wraps around at both ends.
    pub fn cycle(&mut self, forward: bool) {
        if self.options.is_empty() {
            return;
        }
        let len = self.options.len();
        let cur = self.selected_index();
        let next = if forward {
            (cur + 1) % len
        } else {
            (cur + len - 1) % len
        };
        self.selected = self.options[next].clone();
        self.highlighted = next;
    }

    /// Select the option at `index` and close the overlay.
    pub fn choose(&mut self, index: usize) {
        if let Some(choice) = self.options.get(index) {
            self.selected = choice.clone();
            self.highlighted = index;
        }
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filing_record_deserializes_service_shape() {
        let json = r#"{
            "date": "2023-11-15",
            "form": "8-K",
            "group": "Current Reports",
            "accessionNumber": "0001601830-23-000101",
            "primaryDocument": "rxrx-20231115.htm",
            "description": "",
            "link": "https://example.test/doc.htm",
            "details_link": "https://example.test/index.html"
        }"#;
        let rec: FilingRecord = serde_json::from_str(json).expect("valid record");
        assert_eq!(rec.form, "8-K");
        assert_eq!(rec.primary_document, "rxrx-20231115.htm");
        assert_eq!(rec.display_label(), "rxrx-20231115.htm");
    }

    #[test]
    /// What: Paging fields echoed by the service are accepted and ignored.
    fn filings_page_ignores_echoed_paging_fields() {
        let page: FilingsPage = serde_json::from_str(
            r#"{"data": [], "total": 31, "page": 4, "per_page": 10, "pages_total": 4,
                "company_name": "Recursion Pharmaceuticals, Inc."}"#,
        )
        .expect("valid page");
        assert_eq!(
            page,
            FilingsPage {
                total: 31,
                company_name: Some("Recursion Pharmaceuticals, Inc.".into()),
                ..FilingsPage::default()
            }
        );
    }

    #[test]
    fn filings_page_tolerates_missing_collections() {
        let page: FilingsPage =
            serde_json::from_str(r#"{"data": [], "total": 0, "page": 1, "per_page": 10}"#)
                .expect("valid page");
        assert!(page.available_groups.is_empty());
        assert!(page.available_years.is_empty());
        assert!(page.error.is_none());
    }

    #[test]
    fn filter_choice_all_has_no_param() {
        assert_eq!(FilterChoice::All.as_param(), None);
        assert_eq!(
            FilterChoice::Value("FY2021".into()).as_param(),
            Some("FY2021")
        );
        assert_eq!(FilterChoice::All.to_string(), "All");
    }

    #[test]
    fn dropdown_cycle_wraps() {
        let mut dd = Dropdown {
            options: vec![
                FilterChoice::All,
                FilterChoice::Value("2024".into()),
                FilterChoice::Value("2023".into()),
            ],
            ..Dropdown::default()
        };
        dd.cycle(false);
        assert_eq!(dd.selected, FilterChoice::Value("2023".into()));
        dd.cycle(true);
        assert_eq!(dd.selected, FilterChoice::All);
    }

    #[test]
    fn focus_tab_order_round_trips() {
        let mut f = Focus::Cik;
        for _ in 0..4 {
            f = f.next();
        }
        assert_eq!(f, Focus::Cik);
        assert_eq!(Focus::Cik.prev(), Focus::Results);
    }
}

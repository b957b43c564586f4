//! Filing records to display rows.

use chrono::NaiveDate;

use crate::state::FilingRecord;

/// Text of the single row shown when a page has no filings.
pub const EMPTY_PLACEHOLDER: &str = "No filings found";

/// Columns in the results table: date, form, description, group, links.
pub const COLUMN_COUNT: usize = 5;

/// The four per-row actions, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    /// Primary document.
    Document,
    /// Same URL as the primary document, offered as "PDF".
    Pdf,
    /// Filing index page.
    Details,
    /// Placeholder with no target.
    Xbrl,
}

impl LinkKind {
    /// Short glyph shown in the links column.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Document => "DOC",
            Self::Pdf => "PDF",
            Self::Details => "IDX",
            Self::Xbrl => "XBRL",
        }
    }

    /// Tooltip-style title used by the help overlay and logs.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Document => "Primary Document",
            Self::Pdf => "PDF (Simulator)",
            Self::Details => "Details",
            Self::Xbrl => "XBRL (Simulator)",
        }
    }
}

/// One action link in a row; `url` is `None` for the non-functional placeholder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowLink {
    /// Which action this is.
    pub kind: LinkKind,
    /// Target opened in a new browser context.
    pub url: Option<String>,
}

/// Display-ready filing row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayRow {
    /// Date formatted as "Nov 15, 2023".
    pub date: String,
    /// Form code.
    pub form: String,
    /// Description, or the primary document name.
    pub label: String,
    /// Group label.
    pub group: String,
    /// Document, PDF, details, and placeholder links.
    pub links: [RowLink; 4],
}

impl DisplayRow {
    /// URL for `kind`, if that link has a target.
    #[must_use]
    pub fn url_for(&self, kind: LinkKind) -> Option<&str> {
        self.links
            .iter()
            .find(|l| l.kind == kind)
            .and_then(|l| l.url.as_deref())
    }
}

/// What the results table should show.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum RowsView {
    /// Single centered placeholder row spanning all columns.
    #[default]
    Empty,
    /// Filing rows in server order.
    Rows(Vec<DisplayRow>),
}

impl RowsView {
    /// Filing rows (empty slice for the placeholder).
    #[must_use]
    pub fn rows(&self) -> &[DisplayRow] {
        match self {
            Self::Empty => &[],
            Self::Rows(r) => r,
        }
    }

    /// Number of filing rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows().len()
    }

    /// `true` for the placeholder view.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }
}

/// What: Format a `YYYY-MM-DD` filing date as `"Nov 15, 2023"`.
///
/// Details:
/// - Unparsable input is shown unchanged rather than dropped.
#[must_use]
pub fn format_filing_date(raw: &str) -> String {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_or_else(|_| raw.to_string(), |d| d.format("%b %d, %Y").to_string())
}

/// What: Convert one page of records into table rows.
///
/// Inputs:
/// - `records`: Filings in the order the service returned them.
///
/// Output:
/// - [`RowsView::Empty`] for an empty page, else one [`DisplayRow`] per record.
///
/// Details:
/// - No re-sorting; the whole view is rebuilt each time so repeated renders never
///   accumulate rows.
/// - Empty URLs become `None` so the UI never offers a dead link.
#[must_use]
pub fn render_rows(records: &[FilingRecord]) -> RowsView {
    if records.is_empty() {
        return RowsView::Empty;
    }
    let non_empty = |s: &str| (!s.trim().is_empty()).then(|| s.to_string());
    RowsView::Rows(
        records
            .iter()
            .map(|r| DisplayRow {
                date: format_filing_date(&r.date),
                form: r.form.clone(),
                label: r.display_label().to_string(),
                group: r.group.clone(),
                links: [
                    RowLink {
                        kind: LinkKind::Document,
                        url: non_empty(&r.link),
                    },
                    RowLink {
                        kind: LinkKind::Pdf,
                        url: non_empty(&r.link),
                    },
                    RowLink {
                        kind: LinkKind::Details,
                        url: non_empty(&r.details_link),
                    },
                    RowLink {
                        kind: LinkKind::Xbrl,
                        url: None,
                    },
                ],
            })
            .collect(),
    )
}

//! Pagination bar model: page-number window, navigation controls, and summary.
//!
//! Everything here is a pure function of [`FilterState`]; painting the bar
//! and recording click targets lives in `ui::pagination`.

use crate::logic::dispatch::PageAction;
use crate::state::FilterState;

/// Pages shown on each side of the current page.
pub const WINDOW_HALF_WIDTH: u32 = 2;

/// Widest window produced near either end of the range.
pub const WINDOW_SPAN: u32 = 2 * WINDOW_HALF_WIDTH + 1;

/// Visual role of a pagination control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlKind {
    /// First/prev/next/last arrow.
    Nav,
    /// Numbered page button.
    Number,
    /// Non-interactive gap marker.
    Ellipsis,
}

/// One control in the pagination bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageControl {
    /// Visual role.
    pub kind: ControlKind,
    /// Text painted for the control.
    pub label: String,
    /// Action dispatched on click; `None` for ellipses.
    pub action: Option<PageAction>,
    /// Disabled controls are painted dimmed and ignore clicks.
    pub enabled: bool,
    /// Marks the current page number.
    pub active: bool,
}

impl PageControl {
    fn nav(label: &str, action: PageAction, enabled: bool) -> Self {
        Self {
            kind: ControlKind::Nav,
            label: label.to_string(),
            action: Some(action),
            enabled,
            active: false,
        }
    }

    fn number(page: u32, current: u32) -> Self {
        Self {
            kind: ControlKind::Number,
            label: page.to_string(),
            action: Some(PageAction::Goto(page)),
            enabled: true,
            active: page == current,
        }
    }

    fn ellipsis() -> Self {
        Self {
            kind: ControlKind::Ellipsis,
            label: "...".to_string(),
            action: None,
            enabled: false,
            active: false,
        }
    }

    /// Action to dispatch when clicked, or `None` if the control is inert.
    #[must_use]
    pub const fn click_action(&self) -> Option<PageAction> {
        if self.enabled { self.action } else { None }
    }
}

/// Everything the pagination bar needs to paint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaginationView {
    /// Controls in left-to-right order.
    pub controls: Vec<PageControl>,
    /// "Displaying a - b of n results".
    pub summary: String,
    /// First page number in the window.
    pub window_start: u32,
    /// Last page number in the window.
    pub window_end: u32,
    /// Page count the view was computed against.
    pub total_pages: u32,
}

impl PaginationView {
    /// Page numbers present in the window.
    #[must_use]
    pub fn page_numbers(&self) -> Vec<u32> {
        (self.window_start..=self.window_end).collect()
    }

    /// `true` if an ellipsis precedes the numbered buttons.
    #[must_use]
    pub const fn has_leading_ellipsis(&self) -> bool {
        self.window_start > 1
    }

    /// `true` if an ellipsis follows the numbered buttons.
    #[must_use]
    pub const fn has_trailing_ellipsis(&self) -> bool {
        self.window_end < self.total_pages
    }

    /// Enabled state of the navigation control carrying `action`.
    #[must_use]
    pub fn nav_enabled(&self, action: PageAction) -> bool {
        self.controls
            .iter()
            .any(|c| c.kind == ControlKind::Nav && c.action == Some(action) && c.enabled)
    }
}

/// What: Compute the inclusive range of page numbers to show.
///
/// Inputs:
/// - `current`: Current page (assumed already in range; nothing is clamped here).
/// - `total_pages`: Page count, at least 1.
///
/// Output:
/// - `(start, end)` with `1 <= start <= end <= total_pages` for in-range input.
///
/// Details:
/// - Starts with `current ± 2` clipped to the range.
/// - Near the start (`current <= 3`) the end widens to page 5.
/// - Near the end (`current >= total_pages - 2`) the start widens to `total_pages - 4`.
/// - Both widenings run unconditionally in that order, so for short ranges the
///   window collapses to `[1, total_pages]` and the end widening has the last word.
#[must_use]
pub fn page_window(current: u32, total_pages: u32) -> (u32, u32) {
    let total_pages = total_pages.max(1);
    let mut start = current.saturating_sub(WINDOW_HALF_WIDTH).max(1);
    let mut end = current.saturating_add(WINDOW_HALF_WIDTH).min(total_pages);

    if current <= WINDOW_HALF_WIDTH + 1 {
        end = total_pages.min(WINDOW_SPAN);
    }
    if current >= total_pages.saturating_sub(WINDOW_HALF_WIDTH) {
        start = total_pages.saturating_sub(WINDOW_SPAN - 1).max(1);
    }
    (start, end)
}

/// What: Build the "Displaying a - b of n results" line.
///
/// Details:
/// - `a` is `(page - 1) * per_page + 1`, or `0` when there are no results.
/// - `b` is `min(page * per_page, total)`.
#[must_use]
pub fn summary_text(state: &FilterState) -> String {
    let per = u64::from(state.per_page());
    let page = u64::from(state.page());
    let total = state.total();
    let start = if total > 0 {
        page.saturating_sub(1).saturating_mul(per).saturating_add(1)
    } else {
        0
    };
    let end = page.saturating_mul(per).min(total);
    format!("Displaying {start} - {end} of {total} results")
}

/// What: Produce the full pagination bar for the given state.
///
/// Inputs:
/// - `state`: Current page, page size, and total.
///
/// Output:
/// - Controls in order: first, prev, optional leading ellipsis, the numbered window,
///   optional trailing ellipsis, next, last; plus the summary text.
///
/// Details:
/// - First/prev are disabled on page 1; next/last are disabled on the last page.
/// - The current page is flagged `active` but stays clickable (re-fetches the page).
#[must_use]
pub fn render_pagination(state: &FilterState) -> PaginationView {
    let total_pages = state.total_pages();
    let current = state.page();
    let (start, end) = page_window(current, total_pages);
    let at_first = current == 1;
    let at_last = current == total_pages;

    let mut controls = Vec::with_capacity(WINDOW_SPAN as usize + 6);
    controls.push(PageControl::nav("«", PageAction::First, !at_first));
    controls.push(PageControl::nav("‹", PageAction::Prev, !at_first));
    if start > 1 {
        controls.push(PageControl::ellipsis());
    }
    for page in start..=end {
        controls.push(PageControl::number(page, current));
    }
    if end < total_pages {
        controls.push(PageControl::ellipsis());
    }
    controls.push(PageControl::nav("›", PageAction::Next, !at_last));
    controls.push(PageControl::nav("»", PageAction::Last, !at_last));

    PaginationView {
        controls,
        summary: summary_text(state),
        window_start: start,
        window_end: end,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PER_PAGE;

    fn state(total: u64, page: u32) -> FilterState {
        let mut st = FilterState::new();
        st.record_total(total);
        st.set_page(page);
        st
    }

    #[test]
    /// What: For every total and in-range page, the window stays inside `[1, total_pages]`,
    /// spans at most five pages, and contains the current page.
    fn window_bounds_hold_for_all_small_ranges() {
        for total in 0..=250_u64 {
            let tp = state(total, 1).total_pages();
            assert_eq!(
                u64::from(tp),
                total.div_ceil(u64::from(PER_PAGE)).max(1),
                "total_pages for {total}"
            );
            for current in 1..=tp {
                let (start, end) = page_window(current, tp);
                assert!(start >= 1 && end <= tp, "out of range: {start}..{end} / {tp}");
                assert!(start <= current && current <= end, "missing current {current}");
                assert!(end - start < WINDOW_SPAN, "too wide: {start}..{end}");
            }
        }
    }

    #[test]
    fn three_pages_middle_shows_all_without_ellipses() {
        let view = render_pagination(&state(30, 2));
        assert_eq!(view.page_numbers(), vec![1, 2, 3]);
        assert!(!view.has_leading_ellipsis());
        assert!(!view.has_trailing_ellipsis());
        assert!(view.nav_enabled(PageAction::First));
        assert!(view.nav_enabled(PageAction::Prev));
        assert!(view.nav_enabled(PageAction::Next));
        assert!(view.nav_enabled(PageAction::Last));
    }

    #[test]
    fn zero_total_summary_and_single_page() {
        let view = render_pagination(&state(0, 1));
        assert_eq!(view.summary, "Displaying 0 - 0 of 0 results");
        assert_eq!(view.page_numbers(), vec![1]);
        assert!(!view.nav_enabled(PageAction::First));
        assert!(!view.nav_enabled(PageAction::Next));
        assert!(!view.nav_enabled(PageAction::Last));
    }

    #[test]
    fn last_partial_page_summary_disables_forward_nav() {
        let view = render_pagination(&state(25, 3));
        assert_eq!(view.summary, "Displaying 21 - 25 of 25 results");
        assert!(!view.nav_enabled(PageAction::Next));
        assert!(!view.nav_enabled(PageAction::Last));
        assert!(view.nav_enabled(PageAction::Prev));
    }

    #[test]
    /// What: Near the start the window is pinned to pages 1..=5 with a trailing ellipsis.
    fn window_near_start_is_pinned() {
        assert_eq!(page_window(1, 20), (1, 5));
        assert_eq!(page_window(3, 20), (1, 5));
        let view = render_pagination(&state(200, 2));
        assert!(!view.has_leading_ellipsis());
        assert!(view.has_trailing_ellipsis());
    }

    #[test]
    /// What: In the middle the window is centered with ellipses on both sides.
    fn window_in_middle_is_centered() {
        assert_eq!(page_window(10, 20), (8, 12));
        let view = render_pagination(&state(200, 10));
        assert!(view.has_leading_ellipsis());
        assert!(view.has_trailing_ellipsis());
        let active: Vec<_> = view.controls.iter().filter(|c| c.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].label, "10");
    }

    #[test]
    /// What: Near the end the window shows the last five pages.
    fn window_near_end_is_pinned() {
        assert_eq!(page_window(20, 20), (16, 20));
        assert_eq!(page_window(18, 20), (16, 20));
        assert_eq!(page_window(17, 20), (15, 19));
    }

    #[test]
    /// What: When both widenings fire on a short range the window collapses to the full range.
    fn overlapping_widenings_collapse_to_full_range() {
        assert_eq!(page_window(3, 5), (1, 5));
        assert_eq!(page_window(2, 4), (1, 4));
        assert_eq!(page_window(4, 6), (2, 6));
        assert_eq!(page_window(3, 6), (1, 5));
    }

    #[test]
    fn control_order_is_first_prev_numbers_next_last() {
        let view = render_pagination(&state(200, 10));
        let labels: Vec<&str> = view.controls.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["«", "‹", "...", "8", "9", "10", "11", "12", "...", "›", "»"]
        );
        assert_eq!(view.controls[0].click_action(), Some(PageAction::First));
        assert_eq!(view.controls[2].click_action(), None);
    }

    #[test]
    fn disabled_controls_have_no_click_action() {
        let view = render_pagination(&state(5, 1));
        assert_eq!(view.controls[0].click_action(), None);
        assert_eq!(view.controls[1].click_action(), None);
    }
}

//! Paging state shared by the fetcher, the dispatcher, and the pagination bar.

/// Number of filings requested per page.
pub const PER_PAGE: u32 = 10;

/// Current page, page size, and last-known total.
///
/// Values are plain data: range checks against [`FilterState::total_pages`]
/// belong to the dispatcher, not to the setters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterState {
    /// Current page (1-based).
    page: u32,
    /// Fixed page size.
    per_page: u32,
    /// Total matching records from the last successful fetch.
    total: u64,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterState {
    /// Fresh state on page 1 with an unknown (zero) total.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            page: 1,
            per_page: PER_PAGE,
            total: 0,
        }
    }

    /// Current page.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Page size.
    #[must_use]
    pub const fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Last recorded total.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Set the current page; `0` is raised to `1`.
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Back to page 1.
    pub const fn reset(&mut self) {
        self.page = 1;
    }

    /// Store the total reported by the service.
    pub const fn record_total(&mut self, total: u64) {
        self.total = total;
    }

    /// What: Number of pages for the recorded total.
    ///
    /// Output:
    /// - `max(1, ceil(total / per_page))`, saturating at `u32::MAX`.
    #[must_use]
    pub fn total_pages(&self) -> u32 {
        let per = u64::from(self.per_page.max(1));
        let pages = self.total.div_ceil(per).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Copy of this state moved to `page`.
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.set_page(page);
        self
    }
}

//! Applying a fetch response to application state.

use tokio::sync::mpsc;

use crate::logic::{options, query, rows};
use crate::state::{AppState, FilingsPage, Modal, PageRequest, PageResponse};

/// What happened to a response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseOutcome {
    /// Superseded by a newer request; discarded.
    Stale,
    /// Service or transport failure shown to the user; state untouched.
    Failed,
    /// Page applied.
    Applied,
    /// Page applied, but the current page fell past the end and a re-fetch was issued.
    Repaired,
}

/// What: Apply one fetch response.
///
/// Inputs:
/// - `app`: Application state.
/// - `response`: Response from the fetch worker.
/// - `query_tx`: Channel for the repair re-fetch.
///
/// Output:
/// - What was done with the response.
///
/// Details:
/// - The busy count drops for every response, including stale and failed ones.
/// - Only the response matching `latest_request_id` may change state.
/// - Failures raise an alert and leave total, dropdowns, rows, and company name as they were.
/// - When the recorded total leaves the current page past the last page, the page is
///   moved to the last page and exactly one re-fetch is issued.
pub fn apply_page_response(
    app: &mut AppState,
    response: PageResponse,
    query_tx: &mpsc::UnboundedSender<PageRequest>,
) -> ResponseOutcome {
    app.in_flight = app.in_flight.saturating_sub(1);
    if response.id != app.latest_request_id {
        tracing::debug!(
            id = response.id,
            latest = app.latest_request_id,
            "discarding stale filings response"
        );
        return ResponseOutcome::Stale;
    }
    match response.result {
        Err(err) => {
            tracing::warn!(id = response.id, error = %err, "filings request failed");
            app.modal = Modal::Alert {
                message: err.user_message(),
            };
            ResponseOutcome::Failed
        }
        Ok(page) => {
            apply_page(app, page);
            let total_pages = app.filter.total_pages();
            if app.filter.page() > total_pages {
                tracing::info!(
                    page = app.filter.page(),
                    total_pages,
                    "current page past the end; moving to last page"
                );
                app.filter.set_page(total_pages);
                query::send_query(app, query_tx);
                ResponseOutcome::Repaired
            } else {
                ResponseOutcome::Applied
            }
        }
    }
}

/// Record the total, rebuild both dropdowns, and replace the rows.
fn apply_page(app: &mut AppState, page: FilingsPage) {
    tracing::debug!(
        total = page.total,
        rows = page.data.len(),
        groups = page.available_groups.len(),
        years = page.available_years.len(),
        "applying filings page"
    );
    app.filter.record_total(page.total);
    app.group = options::reconcile(&app.group, &page.available_groups);
    app.year = options::reconcile(&app.year, &page.available_years);
    app.rows = rows::render_rows(&page.data);
    app.company_name = page.company_name.filter(|n| !n.trim().is_empty());
    app.table_state
        .select(if app.rows.is_empty() { None } else { Some(0) });
    app.loaded_once = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::FetchError;
    use crate::state::{FilingRecord, FilterChoice};

    fn record(form: &str) -> FilingRecord {
        FilingRecord {
            date: "2023-11-15".into(),
            form: form.into(),
            description: Some("Report".into()),
            primary_document: "doc.htm".into(),
            group: "Current Reports".into(),
            link: "https://example.test/doc.htm".into(),
            details_link: "https://example.test/index.html".into(),
        }
    }

    fn page(total: u64, forms: &[&str]) -> FilingsPage {
        FilingsPage {
            data: forms.iter().map(|f| record(f)).collect(),
            total,
            available_groups: vec!["Current Reports".into(), "Other".into()],
            available_years: vec!["2023".into(), "2022".into()],
            company_name: Some("Recursion Pharmaceuticals, Inc.".into()),
            ..FilingsPage::default()
        }
    }

    fn app_with_request(
        tx: &mpsc::UnboundedSender<PageRequest>,
    ) -> AppState {
        let mut app = AppState {
            cik_input: "0001601830".into(),
            ..AppState::default()
        };
        query::send_query(&mut app, tx);
        app
    }

    #[test]
    fn success_updates_total_options_and_rows() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = app_with_request(&tx);
        let outcome = apply_page_response(
            &mut app,
            PageResponse {
                id: 1,
                result: Ok(page(25, &["8-K", "10-Q"])),
            },
            &tx,
        );
        assert_eq!(outcome, ResponseOutcome::Applied);
        assert!(!app.is_busy());
        assert_eq!(app.filter.total(), 25);
        assert_eq!(app.row_count(), 2);
        assert_eq!(app.group.options.len(), 3);
        assert_eq!(app.year.options[0], FilterChoice::All);
        assert_eq!(
            app.company_name.as_deref(),
            Some("Recursion Pharmaceuticals, Inc.")
        );
        assert_eq!(app.table_state.selected(), Some(0));
    }

    #[test]
    /// What: A response for a superseded request is dropped but still clears its busy count.
    fn stale_response_is_discarded() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = app_with_request(&tx);
        query::send_query(&mut app, &tx);
        assert_eq!(app.in_flight, 2);

        let outcome = apply_page_response(
            &mut app,
            PageResponse {
                id: 1,
                result: Ok(page(99, &["8-K"])),
            },
            &tx,
        );
        assert_eq!(outcome, ResponseOutcome::Stale);
        assert_eq!(app.filter.total(), 0);
        assert_eq!(app.row_count(), 0);
        assert_eq!(app.in_flight, 1);
        assert!(app.is_busy());
    }

    #[test]
    /// What: Service and transport failures alert the user and change nothing else.
    fn failures_leave_state_untouched() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = app_with_request(&tx);
        apply_page_response(
            &mut app,
            PageResponse {
                id: 1,
                result: Ok(page(25, &["8-K"])),
            },
            &tx,
        );
        let before_rows = app.rows.clone();
        let before_group = app.group.clone();

        query::send_query(&mut app, &tx);
        let outcome = apply_page_response(
            &mut app,
            PageResponse {
                id: 2,
                result: Err(FetchError::Service("Failed to retrieve data. Status Code: 404".into())),
            },
            &tx,
        );
        assert_eq!(outcome, ResponseOutcome::Failed);
        assert_eq!(
            app.modal,
            Modal::Alert {
                message: "Error: Failed to retrieve data. Status Code: 404".into()
            }
        );
        assert_eq!(app.filter.total(), 25);
        assert_eq!(app.rows, before_rows);
        assert_eq!(app.group, before_group);
        assert!(!app.is_busy());

        query::send_query(&mut app, &tx);
        let outcome = apply_page_response(
            &mut app,
            PageResponse {
                id: 3,
                result: Err(FetchError::Transport("connection refused".into())),
            },
            &tx,
        );
        assert_eq!(outcome, ResponseOutcome::Failed);
        assert!(matches!(&app.modal, Modal::Alert { message } if message.contains("Ensure backend is running")));
        assert_eq!(app.filter.total(), 25);
        assert!(!app.is_busy());
    }

    #[test]
    /// What: A shrunken result set moves the page back to the last page with one re-fetch.
    fn page_past_end_is_repaired_once() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = app_with_request(&tx);
        let _ = rx.try_recv();
        app.filter.set_page(6);
        let outcome = apply_page_response(
            &mut app,
            PageResponse {
                id: 1,
                result: Ok(page(12, &[])),
            },
            &tx,
        );
        assert_eq!(outcome, ResponseOutcome::Repaired);
        assert_eq!(app.filter.page(), 2);
        let req = rx.try_recv().expect("repair request");
        assert_eq!(req.page, 2);
        assert!(rx.try_recv().is_err());
        assert!(app.is_busy());
    }

    #[test]
    /// What: Applying the same page twice yields identical rows (no accumulation).
    fn reapplying_same_page_is_idempotent() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = app_with_request(&tx);
        apply_page_response(
            &mut app,
            PageResponse {
                id: 1,
                result: Ok(page(2, &["8-K", "10-K"])),
            },
            &tx,
        );
        let first = app.rows.clone();
        query::send_query(&mut app, &tx);
        apply_page_response(
            &mut app,
            PageResponse {
                id: 2,
                result: Ok(page(2, &["8-K", "10-K"])),
            },
            &tx,
        );
        assert_eq!(app.rows, first);
        assert_eq!(app.row_count(), 2);
    }
}

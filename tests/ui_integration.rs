//! Integration tests for UI rendering using ratatui's `TestBackend`.
//!
//! These drive the public state and logic API the way the runtime does
//! (queue a request, apply its response, draw) and check what lands on screen.

use ratatui::{Terminal, backend::TestBackend};
use tokio::sync::mpsc;

use filingsview::events::handle_event;
use filingsview::logic::{PageAction, apply_page_response, dispatch, send_query};
use filingsview::sources::FetchError;
use filingsview::state::{AppState, FilingRecord, FilingsPage, Modal, PageResponse};
use filingsview::ui;

fn record(n: u32) -> FilingRecord {
    FilingRecord {
        date: "2024-02-27".into(),
        form: if n % 2 == 0 { "10-K" } else { "8-K" }.into(),
        description: Some(format!("Filing number {n}")),
        primary_document: format!("doc-{n}.htm"),
        group: "Annual & Quarterly Reports".into(),
        link: format!("https://example.test/{n}.htm"),
        details_link: format!("https://example.test/{n}-index.html"),
    }
}

fn page(total: u64, first: u32, count: u32) -> FilingsPage {
    FilingsPage {
        data: (first..first + count).map(record).collect(),
        total,
        available_groups: vec!["Annual & Quarterly Reports".into()],
        available_years: vec!["2024".into(), "2023".into()],
        company_name: Some("Recursion Pharmaceuticals, Inc.".into()),
        ..FilingsPage::default()
    }
}

fn screen(app: &mut AppState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(140, 32)).expect("terminal");
    terminal.draw(|f| ui::ui(f, app)).expect("draw");
    let buf = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
/// What: Fetch, apply, and page forward; the screen follows each step.
fn fetch_apply_and_paginate() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = AppState {
        cik_input: "0001601830".into(),
        ..AppState::default()
    };
    send_query(&mut app, &tx);
    let req = rx.try_recv().expect("initial request");
    assert!(screen(&mut app).contains("Loading filings..."));

    apply_page_response(
        &mut app,
        PageResponse {
            id: req.id,
            result: Ok(page(31, 1, 10)),
        },
        &tx,
    );
    let text = screen(&mut app);
    assert!(text.contains("Recursion Pharmaceuticals, Inc."));
    assert!(text.contains("Filing number 1"));
    assert!(text.contains("Feb 27, 2024"));
    assert!(text.contains("Displaying 1 - 10 of 31 results"));

    assert!(dispatch(&mut app, PageAction::Last, &tx));
    let req = rx.try_recv().expect("last page request");
    assert_eq!(req.page, 4);
    apply_page_response(
        &mut app,
        PageResponse {
            id: req.id,
            result: Ok(page(31, 31, 1)),
        },
        &tx,
    );
    let text = screen(&mut app);
    assert!(text.contains("Displaying 31 - 31 of 31 results"));
    assert!(text.contains("Filing number 31"));
    assert!(!text.contains("Filing number 1 "));
}

#[test]
/// What: A failed fetch shows the alert over the previous rows; a click dismisses it.
fn failure_alert_then_click_dismisses() {
    use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

    let (tx, _rx) = mpsc::unbounded_channel();
    let mut app = AppState::default();
    send_query(&mut app, &tx);
    apply_page_response(
        &mut app,
        PageResponse {
            id: 1,
            result: Ok(page(3, 1, 3)),
        },
        &tx,
    );
    send_query(&mut app, &tx);
    apply_page_response(
        &mut app,
        PageResponse {
            id: 2,
            result: Err(FetchError::Transport("connection refused".into())),
        },
        &tx,
    );
    let text = screen(&mut app);
    assert!(text.contains("Failed to fetch data. Ensure backend is running."));
    assert!(text.contains("Filing number 2"));

    let click = Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 1,
        row: 1,
        modifiers: KeyModifiers::empty(),
    });
    assert!(!handle_event(&click, &mut app, &tx));
    assert_eq!(app.modal, Modal::None);
    assert!(!screen(&mut app).contains("Ensure backend is running"));
}

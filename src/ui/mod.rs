//! TUI rendering for filingsview.
//!
//! `ui` draws one frame from `AppState` and records the hit-test rectangles
//! the mouse handler uses for that frame. Everything shown is derived from
//! the pure view models in `logic`; nothing here changes query state.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::state::AppState;
use crate::theme::theme;

mod filters;
mod modals;
mod pagination;
mod table;

/// What: Render one full frame.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: Application state; hit-test rectangles and table offset are updated.
///
/// Details:
/// - Layout top to bottom: filter bar, results table, pagination bar, optional key hints.
/// - Dropdown overlays and modals are drawn last so they sit on top.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    app.clear_hit_rects();

    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let footer_h = u16::from(app.show_help_footer);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(3),
            Constraint::Length(footer_h),
        ])
        .split(area);

    filters::render_filter_bar(f, app, chunks[0]);
    table::render_results(f, app, chunks[1]);
    pagination::render_pagination_bar(f, app, chunks[2]);
    if app.show_help_footer {
        render_footer(f, chunks[3]);
    }
    filters::render_dropdown_overlay(f, app, area);
    modals::render_modal(f, app, area);
}

/// Key hints along the bottom edge.
fn render_footer(f: &mut Frame, area: ratatui::layout::Rect) {
    let th = theme();
    let hints = [
        ("Tab", "focus"),
        ("Enter", "search"),
        ("←/→", "page"),
        ("Home/End", "first/last"),
        ("o/p/d", "open link"),
        ("?", "help"),
        ("q", "quit"),
    ];
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (k, v) in hints {
        spans.push(Span::styled(format!(" {k}"), Style::default().fg(th.sapphire)));
        spans.push(Span::styled(format!(" {v} "), Style::default().fg(th.subtext0)));
        spans.push(Span::styled("│", Style::default().fg(th.surface1)));
    }
    spans.pop();
    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(th.crust)),
        area,
    );
}

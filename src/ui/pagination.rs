use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::logic::pagination::{ControlKind, PageControl, render_pagination};
use crate::state::AppState;
use crate::theme::{Theme, theme};

/// Style for one control given its role and state.
fn control_style(c: &PageControl, th: &Theme) -> Style {
    if c.active {
        Style::default()
            .fg(th.crust)
            .bg(th.sapphire)
            .add_modifier(Modifier::BOLD)
    } else if !c.enabled || c.kind == ControlKind::Ellipsis {
        Style::default().fg(th.overlay2)
    } else {
        Style::default().fg(th.text).bg(th.surface1)
    }
}

/// What: Paint the pagination controls and summary, recording a click area per live control.
///
/// Inputs:
/// - `f`: Frame to render into.
/// - `app`: Application state; `pagination_rects` is filled.
/// - `area`: Three-row strip below the results table.
///
/// Details:
/// - Each control is drawn as ` label ` with one column between controls.
/// - Disabled controls and ellipses are painted but get no click area.
pub fn render_pagination_bar(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let view = render_pagination(&app.filter);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface1));
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let mut spans = Vec::with_capacity(view.controls.len() * 2);
    let mut rects = Vec::new();
    let mut x = inner.x;
    for (i, c) in view.controls.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
            x = x.saturating_add(1);
        }
        let text = format!(" {} ", c.label);
        let w = u16::try_from(text.width()).unwrap_or(u16::MAX);
        if let Some(action) = c.click_action()
            && x.saturating_add(w) <= inner.right()
        {
            rects.push(((x, inner.y, w, 1), action));
        }
        spans.push(Span::styled(text, control_style(c, &th)));
        x = x.saturating_add(w);
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(th.base)),
        Rect { height: 1, ..inner },
    );
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            view.summary,
            Style::default().fg(th.subtext0),
        )))
        .alignment(Alignment::Right),
        Rect {
            x: x.saturating_add(2).min(inner.right()),
            y: inner.y,
            width: inner.right().saturating_sub(x.saturating_add(2)),
            height: 1,
        },
    );
    app.pagination_rects = rects;
}

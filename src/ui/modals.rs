use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::logic::rows::LinkKind;
use crate::state::{AppState, Modal};
use crate::theme::{Theme, theme};

/// Center a `w` x `h` box inside `area`, clamped to fit.
fn centered(area: Rect, w: u16, h: u16) -> Rect {
    let w = w.min(area.width);
    let h = h.min(area.height);
    Rect {
        x: area.x + area.width.saturating_sub(w) / 2,
        y: area.y + area.height.saturating_sub(h) / 2,
        width: w,
        height: h,
    }
}

/// What: Draw the open modal, if any, and record its area.
///
/// Inputs:
/// - `f`: Frame to render into.
/// - `app`: Application state; `modal_rect` is recorded.
/// - `area`: Full screen area used for centering.
pub fn render_modal(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let rect = match &app.modal {
        Modal::None => return,
        Modal::Alert { message } => render_alert(f, area, message, &th),
        Modal::Help => render_help(f, area, &th),
    };
    app.modal_rect = Some((rect.x, rect.y, rect.width, rect.height));
}

/// What: Render a blocking error message.
///
/// Output:
/// - The rect the alert occupies.
///
/// Details:
/// - Height grows with the wrapped message; the last line tells how to dismiss.
fn render_alert(f: &mut Frame, area: Rect, message: &str, th: &Theme) -> Rect {
    let w = area.width.saturating_sub(10).clamp(20, 72);
    let text_w = usize::from(w.saturating_sub(4)).max(1);
    let wrapped = message
        .lines()
        .map(|l| l.chars().count().div_ceil(text_w).max(1))
        .sum::<usize>();
    let h = u16::try_from(wrapped).unwrap_or(u16::MAX).saturating_add(5);
    let rect = centered(area, w, h);
    f.render_widget(Clear, rect);

    let mut lines: Vec<Line> = message
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(th.text))))
        .collect();
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Press Enter or Esc to close",
        Style::default().fg(th.subtext1),
    )));
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(th.text).bg(th.mantle))
            .block(
                Block::default()
                    .title(Span::styled(
                        " Error ",
                        Style::default().fg(th.red).add_modifier(Modifier::BOLD),
                    ))
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(th.red))
                    .style(Style::default().bg(th.mantle)),
            ),
        rect,
    );
    rect
}

/// Render the key binding reference.
fn render_help(f: &mut Frame, area: Rect, th: &Theme) -> Rect {
    let bindings: Vec<(String, String)> = [
        ("Tab / Shift+Tab", "Move focus"),
        ("Enter", "Search from page 1"),
        ("Up / Down", "Change filter or move row"),
        ("Space", "Open or close a filter list"),
        ("Ctrl+U", "Clear the CIK input"),
        ("Left / PgUp", "Previous page"),
        ("Right / PgDn", "Next page"),
        ("Home / End", "First / last page"),
        ("?  F1", "Toggle this help"),
        ("q  Ctrl+C", "Quit"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .chain(
        [
            ("o", LinkKind::Document),
            ("p", LinkKind::Pdf),
            ("d", LinkKind::Details),
        ]
        .into_iter()
        .map(|(k, kind)| (k.to_string(), format!("Open {}", kind.title()))),
    )
    .collect();

    let h = u16::try_from(bindings.len())
        .unwrap_or(u16::MAX)
        .saturating_add(4);
    let rect = centered(area, 56, h);
    f.render_widget(Clear, rect);

    let mut lines = Vec::with_capacity(bindings.len() + 2);
    for (k, v) in bindings {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{k:<18}"),
                Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
            ),
            Span::styled(v, Style::default().fg(th.text)),
        ]));
    }
    lines.push(Line::default());
    lines.push(
        Line::from(Span::styled(
            "Mouse: click buttons, pages, and row links",
            Style::default().fg(th.subtext0),
        ))
        .alignment(Alignment::Center),
    );
    f.render_widget(
        Paragraph::new(lines)
            .style(Style::default().bg(th.mantle))
            .block(
                Block::default()
                    .title(Span::styled(
                        " Help ",
                        Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
                    ))
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(th.mauve)),
            ),
        rect,
    );
    rect
}

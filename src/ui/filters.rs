use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, Dropdown, DropdownId, Focus, Rect4};
use crate::theme::{Theme, theme};

/// Narrowest a dropdown button gets, borders included.
const MIN_DROPDOWN_W: u16 = 12;
/// Widest a dropdown button gets, borders included.
const MAX_DROPDOWN_W: u16 = 40;

/// Convert a layout rect into the tuple form used for hit-testing.
const fn rect4(r: Rect) -> Rect4 {
    (r.x, r.y, r.width, r.height)
}

/// Display width of the longest option label in a dropdown.
fn widest_option(dd: &Dropdown) -> u16 {
    dd.options
        .iter()
        .map(|o| u16::try_from(o.label().width()).unwrap_or(u16::MAX))
        .max()
        .unwrap_or(0)
}

/// Button width that fits the longest option plus the arrow.
fn dropdown_width(dd: &Dropdown) -> u16 {
    widest_option(dd)
        .saturating_add(6)
        .clamp(MIN_DROPDOWN_W, MAX_DROPDOWN_W)
}

/// Bordered block whose colors follow focus.
fn control_block<'a>(title: &'a str, focused: bool, th: &Theme) -> Block<'a> {
    Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { th.lavender } else { th.surface1 }))
}

/// What: Render the identifier input, both filter buttons, the Search button, and the busy indicator.
///
/// Inputs:
/// - `f`: Frame to render into.
/// - `app`: Application state; records `cik_rect`, `group_rect`, `year_rect`, `search_button_rect`.
/// - `area`: Three-row strip at the top of the screen.
pub fn render_filter_bar(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let group_w = dropdown_width(&app.group);
    let year_w = dropdown_width(&app.year);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(24),
            Constraint::Length(group_w),
            Constraint::Length(year_w),
            Constraint::Length(10),
            Constraint::Min(0),
        ])
        .split(area);

    // Identifier input
    let cik_focused = app.focus == Focus::Cik;
    let mut input = vec![
        Span::styled("> ", Style::default().fg(if cik_focused { th.sapphire } else { th.overlay1 })),
        Span::styled(
            app.cik_input.clone(),
            Style::default().fg(if cik_focused { th.text } else { th.subtext0 }),
        ),
    ];
    if cik_focused {
        input.push(Span::styled("▏", Style::default().fg(th.sapphire)));
    }
    f.render_widget(
        Paragraph::new(Line::from(input))
            .style(Style::default().bg(th.base))
            .block(control_block("CIK", cik_focused, &th)),
        cols[0],
    );
    app.cik_rect = Some(rect4(cols[0]));

    render_dropdown_button(f, app, DropdownId::Group, cols[1], &th);
    render_dropdown_button(f, app, DropdownId::Year, cols[2], &th);

    // Search button
    let button = Paragraph::new(Line::from(Span::styled(
        "Search",
        Style::default().fg(th.crust).bg(th.sapphire).add_modifier(Modifier::BOLD),
    )))
    .centered()
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.sapphire)),
    );
    f.render_widget(button, cols[3]);
    app.search_button_rect = Some(rect4(cols[3]));

    // Busy indicator
    if app.is_busy() {
        let busy = Paragraph::new(Line::from(Span::styled(
            " Loading…",
            Style::default().fg(th.yellow).add_modifier(Modifier::BOLD),
        )));
        let status_area = Rect {
            y: cols[4].y.saturating_add(1),
            height: cols[4].height.min(1),
            ..cols[4]
        };
        f.render_widget(busy, status_area);
    }
}

/// Draw one dropdown button showing its current selection.
fn render_dropdown_button(f: &mut Frame, app: &mut AppState, id: DropdownId, area: Rect, th: &Theme) {
    let (title, focus) = match id {
        DropdownId::Group => ("Group", Focus::Group),
        DropdownId::Year => ("Year", Focus::Year),
    };
    let focused = app.focus == focus;
    let dd = app.dropdown(id);
    let arrow = if dd.open { "▴" } else { "▾" };
    let label = dd.selected.label().to_string();
    let inner_w = usize::from(area.width.saturating_sub(4));
    let label = truncate_to_width(&label, inner_w);
    let pad = inner_w.saturating_sub(label.width());
    let line = Line::from(vec![
        Span::styled(
            format!("{label}{}", " ".repeat(pad)),
            Style::default().fg(if focused { th.text } else { th.subtext0 }),
        ),
        Span::styled(format!(" {arrow}"), Style::default().fg(th.overlay1)),
    ]);
    f.render_widget(
        Paragraph::new(line)
            .style(Style::default().bg(if focused { th.surface1 } else { th.base }))
            .block(control_block(title, focused, th)),
        area,
    );
    let r = Some(rect4(area));
    match id {
        DropdownId::Group => app.group_rect = r,
        DropdownId::Year => app.year_rect = r,
    }
}

/// Cut `s` so its display width fits `max`, marking the cut with `…`.
fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    let mut w = 0;
    for ch in s.chars() {
        let cw = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if w + cw + 1 > max {
            break;
        }
        out.push(ch);
        w += cw;
    }
    out.push('…');
    out
}

/// What: Draw the option list of whichever dropdown is open, below its button.
///
/// Inputs:
/// - `f`: Frame to render into.
/// - `app`: Application state; records the inner list rect and `menu_scroll`.
/// - `screen`: Full frame area used for clamping.
///
/// Details:
/// - Only one overlay is open at a time; the list scrolls to keep the highlight visible.
pub fn render_dropdown_overlay(f: &mut Frame, app: &mut AppState, screen: Rect) {
    let th = theme();
    let (id, button) = if app.group.open {
        (DropdownId::Group, app.group_rect)
    } else if app.year.open {
        (DropdownId::Year, app.year_rect)
    } else {
        return;
    };
    let Some((bx, by, bw, bh)) = button else {
        return;
    };
    let dd = app.dropdown(id).clone();
    let menu_y = by.saturating_add(bh);
    let room = screen.bottom().saturating_sub(menu_y).saturating_sub(2);
    let visible = u16::try_from(dd.options.len()).unwrap_or(u16::MAX).min(room);
    if visible == 0 {
        return;
    }
    let w = bw.max(widest_option(&dd).saturating_add(4)).min(screen.width);
    let x = bx.min(screen.right().saturating_sub(w));
    let rect = Rect {
        x,
        y: menu_y,
        width: w,
        height: visible + 2,
    };
    let visible_n = usize::from(visible);
    let scroll = dd.highlighted.saturating_sub(visible_n - 1);

    let lines: Vec<Line> = dd
        .options
        .iter()
        .enumerate()
        .skip(scroll)
        .take(visible_n)
        .map(|(i, opt)| {
            let mark = if *opt == dd.selected { "✔ " } else { "  " };
            let style = if i == dd.highlighted {
                Style::default().fg(th.crust).bg(th.lavender)
            } else {
                Style::default().fg(th.text)
            };
            Line::from(Span::styled(format!("{mark}{}", opt.label()), style))
        })
        .collect();

    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(lines).style(Style::default().bg(th.mantle)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.lavender)),
        ),
        rect,
    );

    let inner = Some((rect.x + 1, rect.y + 1, w.saturating_sub(2), visible));
    match id {
        DropdownId::Group => app.group_menu_rect = inner,
        DropdownId::Year => app.year_menu_rect = inner,
    }
    app.menu_scroll = scroll;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_respects_display_width() {
        assert_eq!(truncate_to_width("All", 10), "All");
        assert_eq!(truncate_to_width("Annual & Quarterly Reports", 8), "Annual …");
    }

    #[test]
    fn dropdown_width_is_clamped() {
        assert_eq!(dropdown_width(&Dropdown::default()), MIN_DROPDOWN_W);
        let wide = crate::logic::options::reconcile(
            &Dropdown::default(),
            &["x".repeat(80)],
        );
        assert_eq!(dropdown_width(&wide), MAX_DROPDOWN_W);
    }
}

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, HighlightSpacing, Paragraph, Row, Table},
};

use crate::logic::rows::{COLUMN_COUNT, DisplayRow, EMPTY_PLACEHOLDER};
use crate::state::{AppState, Focus};
use crate::theme::{Theme, theme};

/// Width of the links column; fits `DOC PDF IDX XBRL`.
const LINKS_W: u16 = 16;

/// Column headings, left to right.
const HEADERS: [&str; COLUMN_COUNT] = ["Date", "Form", "Description", "Group", "Links"];

/// Column widths; the description absorbs the slack so links sit flush right.
const fn column_widths() -> [Constraint; COLUMN_COUNT] {
    [
        Constraint::Length(12),
        Constraint::Length(8),
        Constraint::Fill(1),
        Constraint::Length(22),
        Constraint::Length(LINKS_W),
    ]
}

/// Text shown before the first response arrives.
const LOADING_PLACEHOLDER: &str = "Loading filings...";

/// Block title: company name (when known) and the match count.
fn title_text(app: &AppState) -> String {
    let total = app.filter.total();
    match app.company_name.as_deref() {
        Some(name) => format!(" {name} · {total} filings "),
        None if app.loaded_once => format!(" Filings · {total} "),
        None => " Filings ".to_string(),
    }
}

/// Links cell: one span per action, separated by single spaces.
fn links_line<'a>(row: &DisplayRow, th: &Theme) -> Line<'a> {
    let mut spans = Vec::with_capacity(row.links.len() * 2);
    for (i, link) in row.links.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if link.url.is_some() {
            Style::default().fg(th.sapphire).add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(th.overlay2)
        };
        spans.push(Span::styled(link.kind.icon(), style));
    }
    Line::from(spans)
}

/// What: Render the results table, or its placeholder, and record row and link hit areas.
///
/// Inputs:
/// - `f`: Frame to render into.
/// - `app`: Application state; `table_state` offset is updated and `results_rect`/`link_rects` recorded.
/// - `area`: Region between the filter bar and the pagination bar.
///
/// Details:
/// - Rows appear in the order the service returned them.
/// - Only links with a target get a hit area.
pub fn render_results(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let focused = app.focus == Focus::Results;
    let block = Block::default()
        .title(Span::styled(
            title_text(app),
            Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { th.lavender } else { th.surface1 }));
    let inner = block.inner(area);

    if app.rows.is_empty() {
        let text = if app.loaded_once {
            EMPTY_PLACEHOLDER
        } else {
            LOADING_PLACEHOLDER
        };
        let top_pad = inner.height.saturating_sub(1) / 2;
        let mut lines: Vec<Line> = (0..top_pad).map(|_| Line::default()).collect();
        lines.push(Line::from(Span::styled(text, Style::default().fg(th.subtext0))));
        f.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .style(Style::default().bg(th.base))
                .block(block),
            area,
        );
        return;
    }

    let header = Row::new(HEADERS.map(|h| {
        Cell::from(Span::styled(
            h,
            Style::default().fg(th.overlay1).add_modifier(Modifier::BOLD),
        ))
    }));
    let rows: Vec<Row> = app
        .rows
        .rows()
        .iter()
        .map(|r| {
            let cells: [Cell; COLUMN_COUNT] = [
                Cell::from(Span::styled(r.date.clone(), Style::default().fg(th.subtext1))),
                Cell::from(Span::styled(
                    r.form.clone(),
                    Style::default().fg(th.green).add_modifier(Modifier::BOLD),
                )),
                Cell::from(Span::styled(r.label.clone(), Style::default().fg(th.text))),
                Cell::from(Span::styled(r.group.clone(), Style::default().fg(th.subtext0))),
                Cell::from(links_line(r, &th)),
            ];
            Row::new(cells)
        })
        .collect();

    let table = Table::new(rows, column_widths())
        .header(header)
        .block(block)
        .style(Style::default().bg(th.base))
        .row_highlight_style(Style::default().bg(th.surface1))
        .highlight_symbol("> ")
        .highlight_spacing(HighlightSpacing::Always);
    f.render_stateful_widget(table, area, &mut app.table_state);

    let body_h = inner.height.saturating_sub(1);
    app.results_rect = Some((inner.x, inner.y.saturating_add(1), inner.width, body_h));
    record_link_rects(app, inner, body_h);
}

/// Record one hit area per visible link with a target.
fn record_link_rects(app: &mut AppState, inner: Rect, body_h: u16) {
    if inner.width < LINKS_W {
        return;
    }
    let links_x = inner.right().saturating_sub(LINKS_W);
    let offset = app.table_state.offset();
    let mut rects = Vec::new();
    for (line, row) in app
        .rows
        .rows()
        .iter()
        .skip(offset)
        .take(usize::from(body_h))
        .enumerate()
    {
        let y = inner.y + 1 + u16::try_from(line).unwrap_or(u16::MAX);
        let mut x = links_x;
        for link in &row.links {
            let w = u16::try_from(link.kind.icon().len()).unwrap_or(0);
            if let Some(url) = &link.url {
                rects.push(((x, y, w, 1), url.clone()));
            }
            x = x.saturating_add(w + 1);
        }
    }
    app.link_rects = rects;
}

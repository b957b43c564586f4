//! Mouse handling: hit-tests the rectangles recorded by the last render.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use tokio::sync::mpsc;

use crate::logic::{dispatch, search};
use crate::state::{AppState, DropdownId, Focus, Modal, PageRequest, Rect4};

/// What: Check whether a point lies inside a rectangle.
///
/// Inputs:
/// - `mx`, `my`: Mouse column and row.
/// - `rect`: Rectangle `(x, y, width, height)`, or `None`.
///
/// Output:
/// - `true` when inside; `false` for `None`.
///
/// Details:
/// - Start bounds are inclusive, end bounds exclusive.
#[must_use]
pub const fn is_point_in_rect(mx: u16, my: u16, rect: Option<Rect4>) -> bool {
    if let Some((x, y, w, h)) = rect {
        mx >= x && mx < x.saturating_add(w) && my >= y && my < y.saturating_add(h)
    } else {
        false
    }
}

/// What: Handle a single mouse event.
///
/// Inputs:
/// - `m`: Mouse event including position and button.
/// - `app`: Application state with this frame's hit-test rectangles.
/// - `query_tx`: Channel to the fetch worker.
///
/// Output:
/// - Always `false`; the mouse never quits the application.
///
/// Details:
/// - Modal first: any left click closes an alert or the help overlay.
/// - An open dropdown overlay takes the click next; a click outside it just closes it.
/// - Pagination rectangles carry their `PageAction`, so routing is a lookup.
/// - The wheel moves the highlighted row while over the results table.
pub fn handle_mouse_event(
    m: MouseEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<PageRequest>,
) -> bool {
    let (mx, my) = (m.column, m.row);
    match m.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_left_click(mx, my, app, query_tx),
        MouseEventKind::ScrollUp if modal_closed(app) && is_point_in_rect(mx, my, app.results_rect) => {
            app.move_row_selection(-1);
        }
        MouseEventKind::ScrollDown
            if modal_closed(app) && is_point_in_rect(mx, my, app.results_rect) =>
        {
            app.move_row_selection(1);
        }
        _ => {}
    }
    false
}

/// `true` when no modal covers the main view.
const fn modal_closed(app: &AppState) -> bool {
    matches!(app.modal, Modal::None)
}

/// Route a left click to the first control under the pointer.
fn handle_left_click(
    mx: u16,
    my: u16,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<PageRequest>,
) {
    if !modal_closed(app) {
        app.modal = Modal::None;
        return;
    }

    if handle_open_menu_click(mx, my, app) == Some(true) {
        return;
    }

    if let Some(action) = app
        .pagination_rects
        .iter()
        .find(|(rect, _)| is_point_in_rect(mx, my, Some(*rect)))
        .map(|(_, action)| *action)
    {
        dispatch(app, action, query_tx);
        return;
    }

    if is_point_in_rect(mx, my, app.search_button_rect) {
        search(app, query_tx);
        return;
    }

    for (id, rect, focus) in [
        (DropdownId::Group, app.group_rect, Focus::Group),
        (DropdownId::Year, app.year_rect, Focus::Year),
    ] {
        if is_point_in_rect(mx, my, rect) {
            app.focus = focus;
            let other = match id {
                DropdownId::Group => DropdownId::Year,
                DropdownId::Year => DropdownId::Group,
            };
            app.dropdown_mut(other).open = false;
            let dd = app.dropdown_mut(id);
            dd.highlighted = dd.selected_index();
            dd.open = !dd.open;
            return;
        }
    }

    if is_point_in_rect(mx, my, app.cik_rect) {
        app.focus = Focus::Cik;
        return;
    }

    if let Some(url) = app
        .link_rects
        .iter()
        .find(|(rect, _)| is_point_in_rect(mx, my, Some(*rect)))
        .map(|(_, url)| url.clone())
    {
        crate::util::open_url(&url);
        return;
    }

    if let Some((_, y, _, _)) = app.results_rect
        && is_point_in_rect(mx, my, app.results_rect)
    {
        app.focus = Focus::Results;
        let idx = usize::from(my - y) + app.table_state.offset();
        if idx < app.row_count() {
            app.table_state.select(Some(idx));
        }
    }
}

/// What: Handle a click while a dropdown overlay is open.
///
/// Output:
/// - `None` when no overlay is open.
/// - `Some(true)` when the click chose an option and is consumed.
/// - `Some(false)` when the click fell outside; the overlay is closed and the click
///   continues to the controls underneath.
fn handle_open_menu_click(mx: u16, my: u16, app: &mut AppState) -> Option<bool> {
    let (id, rect) = if app.group.open {
        (DropdownId::Group, app.group_menu_rect)
    } else if app.year.open {
        (DropdownId::Year, app.year_menu_rect)
    } else {
        return None;
    };
    if let Some((_, y, _, _)) = rect
        && is_point_in_rect(mx, my, rect)
    {
        let idx = usize::from(my - y) + app.menu_scroll;
        app.dropdown_mut(id).choose(idx);
        return Some(true);
    }
    let own_button = match id {
        DropdownId::Group => app.group_rect,
        DropdownId::Year => app.year_rect,
    };
    if is_point_in_rect(mx, my, own_button) {
        // own button toggles it closed
        app.dropdown_mut(id).open = false;
        return Some(true);
    }
    app.close_dropdowns();
    Some(false)
}

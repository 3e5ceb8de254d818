use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Block;

use crate::core::content::SectionKind;
use crate::core::host::ElementId;
use crate::core::state::Page;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::projects::filter_spans;
use crate::tui::components::{Navbar, PageView, StatusBar};
use crate::tui::layout::{PageLayout, Piece, SIDE_MARGIN};
use crate::tui::palette::Palette;

/// Typewriter cursor blink period, half on and half off.
const BLINK_MS: u128 = 1000;

/// What a mouse click landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    NavLink(SectionKind),
    FilterButton(ElementId),
}

/// Page area on top, status line below.
pub fn split(area: Rect) -> [Rect; 2] {
    use Constraint::{Length, Min};
    Layout::vertical([Min(0), Length(1)]).areas(area)
}

pub fn draw_ui(frame: &mut Frame, page: &Page, tui: &mut TuiState, layout: &PageLayout, now: Instant) {
    let palette = Palette::for_theme(page.theme);
    frame.render_widget(Block::default().style(palette.base()), frame.area());

    let [page_area, status_area] = split(frame.area());
    let cursor_on = now.saturating_duration_since(tui.started_at).as_millis() % BLINK_MS < BLINK_MS / 2;

    PageView {
        state: &mut tui.page_view,
        page,
        layout,
        now,
        cursor_on,
    }
    .render(frame, page_area);

    let navbar_area = Rect {
        height: page_area.height.min(1),
        ..page_area
    };
    Navbar::new(page).render(frame, navbar_area);

    StatusBar::new(page.status_message.clone(), palette).render(frame, status_area);
}

/// Hit test: given a screen position, find the nav link or filter button under it.
pub fn hit_test(
    column: u16,
    row: u16,
    frame_area: Rect,
    page: &Page,
    layout: &PageLayout,
    scroll_offset: u16,
) -> Option<Hit> {
    let [page_area, _status_area] = split(frame_area);
    if row < page_area.y || row >= page_area.y + page_area.height {
        return None;
    }

    // The navbar sits over the first page row while it is shown.
    if row == page_area.y && !Navbar::is_hidden(page) {
        return Navbar::link_spans(&page.content.name)
            .into_iter()
            .find(|(_, start, width)| column >= *start && column < start + width)
            .map(|(kind, _, _)| Hit::NavLink(kind));
    }

    // Convert screen Y to content Y (accounting for scroll)
    let content_y = (row - page_area.y) + scroll_offset;
    let bar = layout.piece(Piece::FilterBar)?;
    if content_y != bar.top {
        return None;
    }
    let x = column.checked_sub(page_area.x + SIDE_MARGIN)?;
    filter_spans(page.filter.buttons())
        .into_iter()
        .find(|(_, start, width)| x >= *start && x < start + width)
        .map(|(id, _, _)| Hit::FilterButton(id))
}

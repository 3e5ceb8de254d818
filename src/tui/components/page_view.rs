//! # PageView Component
//!
//! The scrollable page. Draws every piece of the [`PageLayout`] that falls
//! inside the window into a `ScrollView` canvas.
//!
//! ## Architecture
//!
//! `PageView` is a transient component (created each frame) that wraps
//! `&'a mut PageViewState` (persistent scroll state) plus the page and its
//! layout as props.
//!
//! What a piece looks like comes from the element store:
//! - reveal targets stay blank until they carry `revealed`
//! - the hero art is pushed down by its parallax transform
//! - project cards are dimmed until their stagger delay has passed
//!
//! Section jumps scroll smoothly: [`PageViewState::scroll_to`] sets a target
//! and [`PageViewState::advance`] closes a quarter of the distance per frame.

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::widgets::Block;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::content::{SectionKind, ids};
use crate::core::scroll::{CLASS_ACTIVE, CLASS_REVEALED};
use crate::core::state::Page;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::about::{AboutText, StatsRow};
use crate::tui::components::hero::{HeroArt, HeroLine};
use crate::tui::components::projects::{FilterBar, ProjectCardView};
use crate::tui::components::sections::{ContactCard, Footer, SectionTitle, SkillCard};
use crate::tui::event::TuiEvent;
use crate::tui::layout::{NAVBAR_ROWS, PageLayout, Piece, Placed, ROW_PX, SIDE_MARGIN, content_width};
use crate::tui::palette::Palette;

/// Scroll state for the page. Must be persisted in the parent TuiState.
pub struct PageViewState {
    pub scroll_state: ScrollViewState,
    /// Rows in the visible window, as of the last `set_metrics`.
    pub viewport_rows: u16,
    /// Rows in the whole page, as of the last `set_metrics`.
    pub total_rows: u16,
    scroll_target: Option<u16>,
}

impl Default for PageViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl PageViewState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            viewport_rows: 0,
            total_rows: 0,
            scroll_target: None,
        }
    }

    pub fn offset(&self) -> u16 {
        self.scroll_state.offset().y
    }

    pub fn max_offset(&self) -> u16 {
        self.total_rows.saturating_sub(self.viewport_rows)
    }

    /// Record the page and window size, clamping the offset to fit.
    pub fn set_metrics(&mut self, total_rows: u16, viewport_rows: u16) {
        self.total_rows = total_rows;
        self.viewport_rows = viewport_rows;
        self.set_offset(self.offset());
        if let Some(target) = self.scroll_target {
            self.scroll_target = Some(target.min(self.max_offset()));
        }
    }

    fn set_offset(&mut self, y: u16) {
        self.scroll_state.set_offset(Position {
            x: 0,
            y: y.min(self.max_offset()),
        });
    }

    /// Start a smooth scroll towards row `y`.
    pub fn scroll_to(&mut self, y: u16) {
        let target = y.min(self.max_offset());
        self.scroll_target = (target != self.offset()).then_some(target);
    }

    pub fn is_animating(&self) -> bool {
        self.scroll_target.is_some()
    }

    /// One frame of smooth scrolling. Returns true if the offset moved.
    pub fn advance(&mut self) -> bool {
        let Some(target) = self.scroll_target else {
            return false;
        };
        let current = self.offset();
        let next = if target > current {
            current + ((target - current) / 4).max(1)
        } else {
            current - ((current - target) / 4).max(1)
        };
        self.set_offset(next);
        if self.offset() == target {
            self.scroll_target = None;
        }
        self.offset() != current
    }

    fn page_rows(&self) -> u16 {
        self.viewport_rows.saturating_sub(NAVBAR_ROWS + 1).max(1)
    }
}

/// Scrolling emits `Some(())` when the offset actually changed, which the
/// host treats as a scroll notification for the core.
impl EventHandler for PageViewState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        let before = self.offset();
        let target = match event {
            TuiEvent::ScrollUp => before.saturating_sub(1),
            TuiEvent::ScrollDown => before.saturating_add(1),
            TuiEvent::ScrollPageUp => before.saturating_sub(self.page_rows()),
            TuiEvent::ScrollPageDown => before.saturating_add(self.page_rows()),
            TuiEvent::ScrollToTop => 0,
            TuiEvent::ScrollToBottom => self.max_offset(),
            _ => return None,
        };
        self.scroll_target = None;
        self.set_offset(target);
        (self.offset() != before).then_some(())
    }
}

pub struct PageView<'a> {
    pub state: &'a mut PageViewState,
    pub page: &'a Page,
    pub layout: &'a PageLayout,
    pub now: Instant,
    pub cursor_on: bool,
}

impl Component for PageView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let palette = Palette::for_theme(self.page.theme);
        self.state.set_metrics(self.layout.total_height, area.height);

        let canvas_height = self.layout.total_height.max(area.height);
        let mut scroll_view = ScrollView::new(Size::new(self.layout.width, canvas_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(
            Block::default().style(palette.base()),
            Rect::new(0, 0, self.layout.width, canvas_height),
        );

        let offset = self.state.offset();
        for placed in self.layout.visible(offset, area.height) {
            self.render_piece(&mut scroll_view, placed, &palette);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

impl PageView<'_> {
    fn render_piece(&self, view: &mut ScrollView, placed: &Placed, palette: &Palette) {
        let page = self.page;
        let content = &page.content;
        let element = placed.piece.element();

        if reveals(placed.piece)
            && !element
                .as_ref()
                .is_some_and(|id| page.elements.has_class(id, CLASS_REVEALED))
        {
            return;
        }

        let mut rect = Rect::new(
            SIDE_MARGIN,
            placed.top,
            content_width(self.layout.width),
            placed.height,
        );

        match placed.piece {
            Piece::Greeting => view.render_widget(HeroLine::greeting(&content.greeting, palette), rect),
            Piece::Name => view.render_widget(HeroLine::name(&content.name, palette), rect),
            Piece::Typewriter => {
                let text = element
                    .as_ref()
                    .and_then(|id| page.elements.text(id))
                    .unwrap_or("");
                view.render_widget(HeroLine::typewriter(text, palette, self.cursor_on), rect);
            }
            Piece::HeroVisual => {
                let shift_px = element
                    .as_ref()
                    .map_or(0.0, |id| page.elements.transform_y(id));
                let shift = (shift_px / ROW_PX).round().max(0.0) as u16;
                // The hero clips its art like `overflow: hidden`.
                let limit = self
                    .layout
                    .section(SectionKind::Home)
                    .map_or(rect.bottom(), |s| s.top + s.height);
                rect.y = rect.y.saturating_add(shift);
                rect.height = rect.height.min(limit.saturating_sub(rect.y));
                if rect.height > 0 {
                    view.render_widget(HeroArt { palette }, rect);
                }
            }
            Piece::Title(kind) => view.render_widget(SectionTitle { kind, palette }, rect),
            Piece::About => view.render_widget(
                AboutText {
                    paragraphs: &content.about,
                    palette,
                },
                rect,
            ),
            Piece::Stats => {
                let values = (0..content.stats.len())
                    .map(|i| page.elements.text(&ids::stat(i)).unwrap_or("0"))
                    .collect();
                view.render_widget(
                    StatsRow {
                        stats: &content.stats,
                        values,
                        palette,
                    },
                    rect,
                );
            }
            Piece::FilterBar => {
                let buttons = page.filter.buttons();
                let active = buttons
                    .iter()
                    .map(|b| page.elements.has_class(&b.id, CLASS_ACTIVE))
                    .collect();
                view.render_widget(
                    FilterBar {
                        buttons,
                        active,
                        palette,
                    },
                    rect,
                );
            }
            Piece::Project(i) => {
                if let (Some(project), Some(id)) = (content.projects.get(i), element.as_ref()) {
                    view.render_widget(
                        ProjectCardView {
                            project,
                            faded_in: page.card_faded_in(id, self.now),
                            palette,
                        },
                        rect,
                    );
                }
            }
            Piece::Skill(i) => {
                if let Some(skill) = content.skills.get(i) {
                    view.render_widget(SkillCard { skill, palette }, rect);
                }
            }
            Piece::Contact => view.render_widget(
                ContactCard {
                    lines: &content.contact,
                    palette,
                },
                rect,
            ),
            Piece::Footer => view.render_widget(
                Footer {
                    name: &content.name,
                    palette,
                },
                rect,
            ),
        }
    }
}

/// Pieces that stay blank until the reveal latch trips.
fn reveals(piece: Piece) -> bool {
    matches!(
        piece,
        Piece::Title(_)
            | Piece::About
            | Piece::Stats
            | Piece::Project(_)
            | Piece::Skill(_)
            | Piece::Contact
    )
}

//! # Page Layout
//!
//! Lays the whole page out as one tall column of terminal rows, then answers
//! the core's geometry questions ([`Viewport`]) from that column.
//!
//! One row stands for [`ROW_PX`] CSS pixels, so the pixel thresholds the
//! scroll synchronizer works with (50px, 200px, ...) keep their meaning.
//!
//! ```text
//! row 0     ┌ home ──────────────┐  fills the viewport
//!           │ greeting / name    │
//!           │ typewriter         │
//!           │ hero art (parallax)│
//! row vh    ├ about ─────────────┤  pad, title, body..., pad
//!           ├ projects ──────────┤  filter bar, visible cards only
//!           ├ skills ────────────┤
//!           ├ contact ───────────┤
//!           └ footer + tail ─────┘  lets contact rise past the reveal line
//! ```
//!
//! The layout is rebuilt each frame: filtered-out cards take no rows, so
//! everything below them moves up.

use std::collections::HashMap;

use crate::core::content::{SectionKind, ids};
use crate::core::host::{ElementId, Viewport};
use crate::core::state::Page;
use crate::tui::components::{about, hero, projects, sections};

/// CSS pixels per terminal row.
pub const ROW_PX: f64 = 16.0;
/// Rows covered by the fixed navbar.
pub const NAVBAR_ROWS: u16 = 1;
/// Columns left empty on each side of the content column.
pub const SIDE_MARGIN: u16 = 2;

const SECTION_PAD: u16 = 2;
const HERO_MIN_ROWS: u16 = 16;

/// One laid-out block of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece {
    Greeting,
    Name,
    Typewriter,
    HeroVisual,
    Title(SectionKind),
    About,
    Stats,
    FilterBar,
    Project(usize),
    Skill(usize),
    Contact,
    Footer,
}

impl Piece {
    /// The element this piece renders, if the core knows it by id.
    pub fn element(self) -> Option<ElementId> {
        match self {
            Piece::Typewriter => Some(ids::element(ids::TYPEWRITER)),
            Piece::HeroVisual => Some(ids::element(ids::HERO_VISUAL)),
            Piece::Title(kind) => Some(ids::section_title(kind.id())),
            Piece::About => Some(ids::element(ids::ABOUT_TEXT)),
            Piece::Stats => Some(ids::element(ids::ABOUT_STATS)),
            Piece::Project(i) => Some(ids::project(i)),
            Piece::Skill(i) => Some(ids::skill(i)),
            Piece::Contact => Some(ids::element(ids::CONTACT_CONTENT)),
            Piece::Greeting | Piece::Name | Piece::FilterBar | Piece::Footer => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placed {
    pub piece: Piece,
    pub top: u16,
    pub height: u16,
}

impl Placed {
    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub kind: SectionKind,
    pub top: u16,
    pub height: u16,
}

#[derive(Debug, Default)]
pub struct PageLayout {
    /// Width of the scrollable canvas.
    pub width: u16,
    pub total_height: u16,
    /// In document order.
    pub pieces: Vec<Placed>,
    pub sections: Vec<SectionSpan>,
    index: HashMap<ElementId, (u16, u16)>,
}

#[derive(Default)]
struct Builder {
    cursor: u16,
    pieces: Vec<Placed>,
}

impl Builder {
    fn place(&mut self, piece: Piece, height: u16) {
        self.place_at(piece, self.cursor, height);
        self.cursor = self.cursor.saturating_add(height);
    }

    fn place_at(&mut self, piece: Piece, top: u16, height: u16) {
        self.pieces.push(Placed { piece, top, height });
    }

    fn skip(&mut self, rows: u16) {
        self.cursor = self.cursor.saturating_add(rows);
    }
}

impl PageLayout {
    /// Lay `page` out for a canvas `width` columns wide and a viewport
    /// `viewport_rows` tall.
    pub fn measure(page: &Page, width: u16, viewport_rows: u16) -> Self {
        let inner = content_width(width);
        let content = &page.content;
        let mut b = Builder::default();
        let mut sections = Vec::with_capacity(SectionKind::ALL.len());

        for kind in SectionKind::ALL {
            let top = b.cursor;
            if kind == SectionKind::Home {
                let height = viewport_rows.max(HERO_MIN_ROWS);
                // greeting, name, gap, typewriter, gap, art
                let block = 5 + hero::ART_HEIGHT;
                let mut row = top + height.saturating_sub(block) / 2;
                for piece in [Piece::Greeting, Piece::Name] {
                    b.place_at(piece, row, 1);
                    row += 1;
                }
                b.place_at(Piece::Typewriter, row + 1, 1);
                b.place_at(Piece::HeroVisual, row + 3, hero::ART_HEIGHT);
                b.cursor = top + height;
            } else {
                b.skip(SECTION_PAD);
                b.place(Piece::Title(kind), 1);
                b.skip(1);
                match kind {
                    SectionKind::About => {
                        b.place(Piece::About, about::text_height(&content.about, inner));
                        b.skip(1);
                        b.place(Piece::Stats, about::STATS_HEIGHT);
                    }
                    SectionKind::Projects => {
                        b.place(Piece::FilterBar, 1);
                        b.skip(1);
                        for (i, project) in content.projects.iter().enumerate() {
                            if !page.elements.is_displayed(&ids::project(i)) {
                                continue;
                            }
                            b.place(Piece::Project(i), projects::card_height(project, inner));
                            b.skip(1);
                        }
                    }
                    SectionKind::Skills => {
                        for (i, skill) in content.skills.iter().enumerate() {
                            b.place(Piece::Skill(i), sections::skill_height(skill, inner));
                            b.skip(1);
                        }
                    }
                    SectionKind::Contact => {
                        b.place(Piece::Contact, sections::contact_height(&content.contact, inner));
                    }
                    SectionKind::Home => {}
                }
                b.skip(SECTION_PAD);
            }
            sections.push(SectionSpan {
                kind,
                top,
                height: b.cursor - top,
            });
        }

        // Room under the last section so it can scroll past the reveal line.
        let reveal_rows = (page.synchronizer.thresholds().reveal_margin / ROW_PX).ceil() as u16;
        b.place(Piece::Footer, 1);
        b.skip(reveal_rows.saturating_add(SECTION_PAD));

        let mut index = HashMap::new();
        for span in &sections {
            index.insert(span.kind.element(), (span.top, span.height));
        }
        for placed in &b.pieces {
            if let Some(id) = placed.piece.element() {
                index.insert(id, (placed.top, placed.height));
            }
        }

        Self {
            width,
            total_height: b.cursor,
            pieces: b.pieces,
            sections,
            index,
        }
    }

    pub fn section(&self, kind: SectionKind) -> Option<&SectionSpan> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    pub fn piece(&self, piece: Piece) -> Option<&Placed> {
        self.pieces.iter().find(|p| p.piece == piece)
    }

    /// `(top, height)` in rows.
    pub fn rows_of(&self, id: &ElementId) -> Option<(u16, u16)> {
        self.index.get(id).copied()
    }

    /// Pieces that intersect rows `[offset, offset + rows)`.
    pub fn visible(&self, offset: u16, rows: u16) -> impl Iterator<Item = &Placed> {
        let end = offset.saturating_add(rows);
        self.pieces
            .iter()
            .filter(move |p| p.bottom() > offset && p.top < end)
    }
}

/// Width of the content column inside the side margins.
pub fn content_width(width: u16) -> u16 {
    width.saturating_sub(SIDE_MARGIN * 2).max(1)
}

/// The page as the core sees it: a layout seen through a scrolled window.
pub struct TerminalViewport<'a> {
    layout: &'a PageLayout,
    offset_rows: u16,
    viewport_rows: u16,
}

impl<'a> TerminalViewport<'a> {
    pub fn new(layout: &'a PageLayout, offset_rows: u16, viewport_rows: u16) -> Self {
        Self {
            layout,
            offset_rows,
            viewport_rows,
        }
    }
}

impl Viewport for TerminalViewport<'_> {
    fn scroll_y(&self) -> f64 {
        f64::from(self.offset_rows) * ROW_PX
    }

    fn viewport_height(&self) -> f64 {
        f64::from(self.viewport_rows) * ROW_PX
    }

    fn element_top_offset(&self, id: &ElementId) -> Option<f64> {
        self.layout
            .rows_of(id)
            .map(|(top, _)| f64::from(top) * ROW_PX)
    }

    fn element_height(&self, id: &ElementId) -> Option<f64> {
        self.layout
            .rows_of(id)
            .map(|(_, height)| f64::from(height) * ROW_PX)
    }
}

//! # Navbar Component
//!
//! Fixed bar over the top row of the page. Its look follows the classes the
//! scroll synchronizer maintains:
//!
//! - `scrolled` on the navbar: solid surface background instead of the page's
//! - `hidden` on the navbar: not drawn at all, the page shows through
//! - `active` on a nav link: that link is highlighted
//!
//! Link positions are exposed through [`Navbar::link_spans`] so the host can
//! hit-test mouse clicks against the same geometry it draws.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::content::{SectionKind, ids};
use crate::core::scroll::{CLASS_ACTIVE, CLASS_HIDDEN, CLASS_SCROLLED};
use crate::core::state::Page;
use crate::tui::component::Component;
use crate::tui::palette::Palette;

const LINK_GAP: u16 = 1;

pub struct Navbar<'a> {
    pub page: &'a Page,
    pub palette: Palette,
}

impl<'a> Navbar<'a> {
    pub fn new(page: &'a Page) -> Self {
        Self {
            page,
            palette: Palette::for_theme(page.theme),
        }
    }

    pub fn is_hidden(page: &Page) -> bool {
        page.elements
            .has_class(&ids::element(ids::NAVBAR), CLASS_HIDDEN)
    }

    fn brand(name: &str) -> String {
        format!(" {name} ")
    }

    fn link_label(index: usize, kind: SectionKind) -> String {
        format!(" {} {} ", index + 1, kind.label())
    }

    /// Column span of each nav link: `(section, start, width)`.
    pub fn link_spans(name: &str) -> Vec<(SectionKind, u16, u16)> {
        let mut x = Self::brand(name).width() as u16 + 2;
        SectionKind::ALL
            .iter()
            .enumerate()
            .map(|(i, kind)| {
                let width = Self::link_label(i, *kind).width() as u16;
                let span = (*kind, x, width);
                x = x.saturating_add(width + LINK_GAP);
                span
            })
            .collect()
    }
}

impl Component for Navbar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if Self::is_hidden(self.page) {
            return;
        }
        let navbar = ids::element(ids::NAVBAR);
        let scrolled = self.page.elements.has_class(&navbar, CLASS_SCROLLED);
        let base = if scrolled {
            self.palette.base().bg(self.palette.surface)
        } else {
            self.palette.base()
        };
        let bg = base.bg.unwrap_or(self.palette.bg);

        let mut spans = vec![
            Span::styled(Self::brand(&self.page.content.name), self.palette.accent().bg(bg)),
            Span::styled("  ", base),
        ];
        for (i, kind) in SectionKind::ALL.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" ", base));
            }
            let active = self
                .page
                .elements
                .has_class(&ids::nav_link(kind.id()), CLASS_ACTIVE);
            let style = if active { self.palette.selected() } else { base };
            spans.push(Span::styled(Self::link_label(i, *kind), style));
        }

        frame.render_widget(Block::default().style(base), area);
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("[t] {} ", self.page.theme.label()),
                self.palette.muted().bg(bg),
            ))
            .alignment(Alignment::Right),
            area,
        );
    }
}

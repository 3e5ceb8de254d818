//! # Hero
//!
//! The first screen: greeting, name, the typewriter line and a small piece
//! of code art that drifts down with the parallax transform.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::tui::palette::Palette;

pub const ART: [&str; 5] = [
    "┌─ ● ● ● ──────────────┐",
    "│ fn main() {          │",
    "│     build(\"things\"); │",
    "│ }                    │",
    "└──────────────────────┘",
];
pub const ART_HEIGHT: u16 = ART.len() as u16;

/// One centred line of the hero block.
pub struct HeroLine<'a> {
    line: Line<'a>,
}

impl<'a> HeroLine<'a> {
    pub fn greeting(text: &'a str, palette: &Palette) -> Self {
        Self {
            line: Line::from(Span::styled(text, palette.muted())),
        }
    }

    pub fn name(text: &'a str, palette: &Palette) -> Self {
        Self {
            line: Line::from(Span::styled(
                text,
                palette.accent().add_modifier(Modifier::UNDERLINED),
            )),
        }
    }

    /// The typewriter text followed by a blinking bar cursor.
    pub fn typewriter(text: &'a str, palette: &Palette, cursor_on: bool) -> Self {
        let cursor = if cursor_on { "▏" } else { " " };
        Self {
            line: Line::from(vec![
                Span::styled(text, palette.base().add_modifier(Modifier::BOLD)),
                Span::styled(cursor, palette.accent()),
            ]),
        }
    }
}

impl Widget for HeroLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

pub struct HeroArt<'a> {
    pub palette: &'a Palette,
}

impl Widget for HeroArt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = ART
            .iter()
            .map(|l| Line::from(Span::styled(*l, self.palette.accent())))
            .collect();
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

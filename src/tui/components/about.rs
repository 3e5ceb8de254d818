//! # About
//!
//! Bio paragraphs and the row of stat counters. Counter values come from the
//! element store, so whatever the counter animation last rendered is shown.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::core::content::Stat;
use crate::tui::components::wrap_lines;
use crate::tui::palette::Palette;

/// Border, number, label, border.
pub const STATS_HEIGHT: u16 = 4;

/// Rows for `paragraphs` wrapped to `width`, one blank row between each.
pub fn text_height(paragraphs: &[String], width: u16) -> u16 {
    let lines: usize = paragraphs.iter().map(|p| wrap_lines(p, width).len()).sum();
    let gaps = paragraphs.len().saturating_sub(1);
    (lines + gaps).max(1) as u16
}

pub struct AboutText<'a> {
    pub paragraphs: &'a [String],
    pub palette: &'a Palette,
}

impl Widget for AboutText<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = Vec::new();
        for (i, paragraph) in self.paragraphs.iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            lines.extend(
                wrap_lines(paragraph, area.width)
                    .into_iter()
                    .map(|l| Line::from(Span::styled(l, self.palette.base()))),
            );
        }
        Paragraph::new(lines).render(area, buf);
    }
}

/// One box per stat, side by side.
pub struct StatsRow<'a> {
    pub stats: &'a [Stat],
    /// Current counter text per stat, same order as `stats`.
    pub values: Vec<&'a str>,
    pub palette: &'a Palette,
}

impl Widget for StatsRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.stats.is_empty() {
            return;
        }
        let columns = Layout::horizontal(
            self.stats
                .iter()
                .map(|_| Constraint::Ratio(1, self.stats.len() as u32)),
        )
        .split(area);

        for ((stat, value), column) in self.stats.iter().zip(&self.values).zip(columns.iter()) {
            let block = Block::bordered().border_style(self.palette.border());
            let lines = vec![
                Line::from(Span::styled(*value, self.palette.accent())),
                Line::from(Span::styled(stat.label.as_str(), self.palette.muted())),
            ];
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(block)
                .render(*column, buf);
        }
    }
}

//! # Projects
//!
//! The filter bar and one card per project. Cards that are still waiting
//! out their stagger delay after a filter change are drawn dimmed.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::core::content::Project;
use crate::core::filter::FilterButton;
use crate::core::host::ElementId;
use crate::tui::components::wrap_lines;
use crate::tui::palette::Palette;

/// Borders plus one column of padding per side.
const CARD_H_OVERHEAD: u16 = 4;
/// Borders plus the category line.
const CARD_V_OVERHEAD: u16 = 3;
const BUTTON_GAP: u16 = 1;

pub fn card_height(project: &Project, width: u16) -> u16 {
    let inner = width.saturating_sub(CARD_H_OVERHEAD);
    CARD_V_OVERHEAD + wrap_lines(&project.description, inner).len() as u16
}

/// Column span of each button on the filter bar: `(id, start, width)`.
pub fn filter_spans(buttons: &[FilterButton]) -> Vec<(ElementId, u16, u16)> {
    let mut x = 0u16;
    buttons
        .iter()
        .map(|b| {
            let width = b.filter.width() as u16 + 2;
            let span = (b.id.clone(), x, width);
            x = x.saturating_add(width + BUTTON_GAP);
            span
        })
        .collect()
}

pub struct FilterBar<'a> {
    pub buttons: &'a [FilterButton],
    /// Whether each button carries the `active` class.
    pub active: Vec<bool>,
    pub palette: &'a Palette,
}

impl Widget for FilterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (i, (button, active)) in self.buttons.iter().zip(&self.active).enumerate() {
            if i > 0 {
                spans.push(Span::styled(" ", self.palette.base()));
            }
            let style = if *active {
                self.palette.selected()
            } else {
                self.palette.muted()
            };
            spans.push(Span::styled(format!(" {} ", button.filter), style));
        }
        Line::from(spans).render(area, buf);
    }
}

pub struct ProjectCardView<'a> {
    pub project: &'a Project,
    pub faded_in: bool,
    pub palette: &'a Palette,
}

impl Widget for ProjectCardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dim = |style: ratatui::style::Style| {
            if self.faded_in {
                style
            } else {
                style.add_modifier(Modifier::DIM)
            }
        };

        let block = Block::bordered()
            .title(Span::styled(
                format!(" {} ", self.project.title),
                dim(self.palette.accent()),
            ))
            .border_style(dim(self.palette.border()))
            .padding(Padding::horizontal(1));
        let inner_width = area.width.saturating_sub(CARD_H_OVERHEAD);

        let mut lines = vec![Line::from(Span::styled(
            format!("#{}", self.project.category),
            dim(self.palette.muted()),
        ))];
        lines.extend(
            wrap_lines(&self.project.description, inner_width)
                .into_iter()
                .map(|l| Line::from(Span::styled(l, dim(self.palette.base())))),
        );
        Paragraph::new(lines).block(block).render(area, buf);
    }
}

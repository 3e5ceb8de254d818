//! # StatusBar Component
//!
//! Bottom line: key hints on the left, the latest status message (filter
//! result, theme switch) after them.
//!
//! Stateless: all props are fields, so it renders through the fixed
//! `Component::render` signature like every other frame component.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use crate::tui::component::Component;
use crate::tui::palette::Palette;

pub const HINTS: &str = "↑↓ scroll · 1-5 jump · ←→ filter · t theme · q quit";

pub struct StatusBar {
    pub status_message: String,
    pub palette: Palette,
}

impl StatusBar {
    pub fn new(status_message: String, palette: Palette) -> Self {
        Self {
            status_message,
            palette,
        }
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = self.palette.muted().bg(self.palette.surface);
        let mut spans = vec![Span::styled(format!(" {HINTS}"), style)];
        if !self.status_message.is_empty() {
            spans.push(Span::styled(" | ", style));
            spans.push(Span::styled(
                self.status_message.as_str(),
                self.palette.base().bg(self.palette.surface),
            ));
        }
        frame.render_widget(Line::from(spans).style(style), area);
    }
}

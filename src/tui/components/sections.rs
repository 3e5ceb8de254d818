use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Widget};

use crate::core::content::{SectionKind, SkillCategory};
use crate::tui::components::wrap_lines;
use crate::tui::palette::Palette;

const BOX_H_OVERHEAD: u16 = 4;
const BOX_V_OVERHEAD: u16 = 2;

pub fn skill_height(skill: &SkillCategory, width: u16) -> u16 {
    let lines = wrap_lines(&skill.items.join(" · "), width.saturating_sub(BOX_H_OVERHEAD));
    BOX_V_OVERHEAD + (lines.len() as u16).max(1)
}

pub fn contact_height(lines: &[String], width: u16) -> u16 {
    let inner = width.saturating_sub(BOX_H_OVERHEAD);
    let rows: usize = lines.iter().map(|l| wrap_lines(l, inner).len()).sum();
    BOX_V_OVERHEAD + (rows as u16).max(1)
}

/// `02. About`, numbered in document order.
pub struct SectionTitle<'a> {
    pub kind: SectionKind,
    pub palette: &'a Palette,
}

impl Widget for SectionTitle<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let number = SectionKind::ALL
            .iter()
            .position(|k| *k == self.kind)
            .unwrap_or(0)
            + 1;
        Line::from(vec![
            Span::styled(format!("{number:02}. "), self.palette.muted()),
            Span::styled(self.kind.label(), self.palette.accent()),
        ])
        .render(area, buf);
    }
}

pub struct SkillCard<'a> {
    pub skill: &'a SkillCategory,
    pub palette: &'a Palette,
}

impl Widget for SkillCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(Span::styled(
                format!(" {} ", self.skill.name),
                self.palette.accent(),
            ))
            .border_style(self.palette.border())
            .padding(Padding::horizontal(1));
        let lines: Vec<Line> = wrap_lines(
            &self.skill.items.join(" · "),
            area.width.saturating_sub(BOX_H_OVERHEAD),
        )
        .into_iter()
        .map(|l| Line::from(Span::styled(l, self.palette.base())))
        .collect();
        Paragraph::new(lines).block(block).render(area, buf);
    }
}

pub struct ContactCard<'a> {
    pub lines: &'a [String],
    pub palette: &'a Palette,
}

impl Widget for ContactCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(Span::styled(" Get in touch ", self.palette.accent()))
            .border_style(self.palette.border())
            .padding(Padding::horizontal(1));
        let inner = area.width.saturating_sub(BOX_H_OVERHEAD);
        let lines: Vec<Line> = self
            .lines
            .iter()
            .flat_map(|l| wrap_lines(l, inner))
            .map(|l| Line::from(Span::styled(l, self.palette.base())))
            .collect();
        Paragraph::new(lines).block(block).render(area, buf);
    }
}

/// Closing line under the last section.
pub struct Footer<'a> {
    pub name: &'a str,
    pub palette: &'a Palette,
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Line::from(Span::styled(
            format!("© {} · built for the terminal", self.name),
            self.palette.muted(),
        ))
        .centered()
        .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::theme::Theme;
    use crate::test_support::buffer_text;

    #[test]
    fn test_heights() {
        let skill = SkillCategory {
            name: "Backend".to_string(),
            items: vec!["Rust".to_string(), "Go".to_string()],
        };
        assert_eq!(skill_height(&skill, 40), 3);
        assert_eq!(contact_height(&[], 40), 3);
        assert_eq!(
            contact_height(&["a@b.dev".to_string(), "github.com/a".to_string()], 40),
            4
        );
    }

    #[test]
    fn test_title_is_numbered() {
        let palette = Palette::for_theme(Theme::Dark);
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        SectionTitle {
            kind: SectionKind::Projects,
            palette: &palette,
        }
        .render(area, &mut buf);
        assert!(buffer_text(&buf).starts_with("03. Projects"));
    }

    #[test]
    fn test_skill_card_joins_items() {
        let palette = Palette::for_theme(Theme::Light);
        let skill = SkillCategory {
            name: "Backend".to_string(),
            items: vec!["Rust".to_string(), "Go".to_string()],
        };
        let area = Rect::new(0, 0, 30, skill_height(&skill, 30));
        let mut buf = Buffer::empty(area);
        SkillCard {
            skill: &skill,
            palette: &palette,
        }
        .render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("Backend"));
        assert!(text.contains("Rust · Go"));
    }

    #[test]
    fn test_footer_names_owner() {
        let palette = Palette::for_theme(Theme::Dark);
        let area = Rect::new(0, 0, 50, 1);
        let mut buf = Buffer::empty(area);
        Footer {
            name: "Alex Morgan",
            palette: &palette,
        }
        .render(area, &mut buf);
        assert!(buffer_text(&buf).contains("© Alex Morgan"));
    }
}

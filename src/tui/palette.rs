use ratatui::style::{Color, Modifier, Style};

use crate::core::theme::Theme;

/// Colours for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub surface: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                bg: Color::Rgb(15, 23, 42),
                fg: Color::Rgb(226, 232, 240),
                muted: Color::Rgb(100, 116, 139),
                accent: Color::Rgb(129, 140, 248),
                surface: Color::Rgb(30, 41, 59),
            },
            Theme::Light => Self {
                bg: Color::Rgb(248, 250, 252),
                fg: Color::Rgb(30, 41, 59),
                muted: Color::Rgb(100, 116, 139),
                accent: Color::Rgb(79, 70, 229),
                surface: Color::Rgb(226, 232, 240),
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn muted(&self) -> Style {
        self.base().fg(self.muted)
    }

    pub fn accent(&self) -> Style {
        self.base().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Highlighted chip: active nav link, active filter button.
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.bg)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        self.base().fg(self.muted)
    }
}

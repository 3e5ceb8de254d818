//! # Actions
//!
//! Everything that can happen to the page becomes an `Action`.
//! The typewriter renders a frame? That's `Action::TypewriterFrame(text)`.
//! User presses `t`? That's `Action::ToggleTheme`.
//!
//! The `update()` function applies an action to the page and returns the
//! side effect the host must carry out. No I/O here.
//!
//! ```text
//! Page + Action  →  update()  →  Page' + Effect
//! ```
//!
//! Scroll, resize and load notifications are not actions: they need a live
//! [`Viewport`](crate::core::host::Viewport) and go through
//! [`Page::sync_viewport`] instead.

use std::time::Instant;

use log::{debug, info};

use crate::core::content::ids;
use crate::core::host::{ElementId, Surface};
use crate::core::state::Page;
use crate::core::theme::Theme;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// New text for the typewriter element.
    TypewriterFrame(String),
    /// New text for one stat counter.
    CounterFrame { id: ElementId, text: String },
    SelectFilter(ElementId),
    /// Move the active filter by `n` buttons, wrapping.
    CycleFilter(isize),
    ToggleTheme,
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    /// The theme changed and should be saved.
    PersistTheme(Theme),
}

pub fn update(page: &mut Page, action: Action) -> Effect {
    match action {
        Action::TypewriterFrame(text) => {
            page.elements.set_text(&ids::element(ids::TYPEWRITER), &text);
            Effect::None
        }
        Action::CounterFrame { id, text } => {
            page.elements.set_text(&id, &text);
            Effect::None
        }
        Action::SelectFilter(button) => {
            if let Some(outcome) = page.filter.select(&button, &mut page.elements) {
                page.apply_filter(outcome, Instant::now());
            }
            Effect::None
        }
        Action::CycleFilter(step) => {
            if let Some(outcome) = page.filter.cycle(step, &mut page.elements) {
                page.apply_filter(outcome, Instant::now());
            }
            Effect::None
        }
        Action::ToggleTheme => {
            page.theme = page.theme.toggled();
            page.status_message = format!("Theme: {}", page.theme.label());
            info!("Theme switched to {}", page.theme.label());
            Effect::PersistTheme(page.theme)
        }
        Action::Quit => {
            debug!("Quit requested");
            Effect::Quit
        }
    }
}

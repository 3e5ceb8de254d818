//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Page Widgets (Props-Based Rendering)
//!
//! Transient widgets created each frame and drawn into the page's scroll
//! canvas. Each one has a matching height function that [`layout`] uses to
//! place it without rendering:
//! - `hero`: greeting, name, typewriter line, hero art
//! - `about`: bio paragraphs and the stat counters
//! - `projects`: filter bar and project cards
//! - `sections`: section titles, skill cards, contact card
//!
//! ### Frame Components
//!
//! Rendered straight into the frame:
//! - `Navbar`: fixed top bar, reacts to the `scrolled`/`hidden`/`active` classes
//! - `StatusBar`: key hints and transient status
//! - `PageView`: the scrollable page, owns no state beyond `PageViewState`
//!
//! ## Props-Based Data Flow
//!
//! Components receive the `Page` (or a piece of it) and a `Palette` as
//! props. They never reach into global state.
//!
//! ```text
//! components/
//! ├── mod.rs        (this file)
//! ├── navbar.rs
//! ├── status_bar.rs
//! ├── page_view.rs  (scroll container)
//! ├── hero.rs
//! ├── about.rs
//! ├── projects.rs
//! └── sections.rs
//! ```
//!
//! [`layout`]: crate::tui::layout

pub mod about;
pub mod hero;
pub mod navbar;
pub mod page_view;
pub mod projects;
pub mod sections;
pub mod status_bar;

pub use navbar::Navbar;
pub use page_view::{PageView, PageViewState};
pub use status_bar::StatusBar;

/// Wrap `text` the same way for measuring and rendering.
pub(crate) fn wrap_lines(text: &str, width: u16) -> Vec<String> {
    if width == 0 || text.trim().is_empty() {
        return Vec::new();
    }
    let options = textwrap::Options::new(width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace);
    textwrap::wrap(text.trim(), options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

//! # Host Collaborators
//!
//! The core never touches a terminal, a browser or a clock directly. Everything
//! it reads or writes goes through the small traits in this module, which the
//! host (the TUI adapter, or a test fake) implements.
//!
//! ```text
//!   Viewport  ──reads──▶  core  ──writes──▶  Surface
//!   (scroll, layout)              (classes, text, transforms)
//! ```
//!
//! Reads are taken at the start of an event and treated as a consistent
//! snapshot. Writes are fire-and-forget and never fail.

use std::fmt;

/// Opaque handle to an element on the page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read-only view of the current layout.
///
/// All values are CSS-style pixels measured from the top of the document.
/// `None` means the host cannot answer for that element (detached, not laid
/// out yet); callers treat it as "not visible".
pub trait Viewport {
    fn scroll_y(&self) -> f64;
    fn viewport_height(&self) -> f64;
    fn element_top_offset(&self, id: &ElementId) -> Option<f64>;
    fn element_height(&self, id: &ElementId) -> Option<f64>;

    /// Top edge relative to the visible area (a bounding-rect `top`).
    fn element_viewport_top(&self, id: &ElementId) -> Option<f64> {
        self.element_top_offset(id).map(|top| top - self.scroll_y())
    }
}

/// Visual mutations the core may request.
pub trait Surface {
    fn set_class(&mut self, id: &ElementId, class: &str, on: bool);
    fn set_text(&mut self, id: &ElementId, text: &str);
    fn set_transform_y(&mut self, id: &ElementId, offset: f64);
    fn set_display(&mut self, id: &ElementId, visible: bool);
}

/// Key-value store for the single user preference the page keeps.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Render target for the typewriter driver.
///
/// Returns `false` once the host is gone, which ends the animation loop.
pub trait TextSink: Send + 'static {
    fn render(&mut self, text: &str) -> bool;
}

impl<F> TextSink for F
where
    F: FnMut(&str) -> bool + Send + 'static,
{
    fn render(&mut self, text: &str) -> bool {
        self(text)
    }
}

/// Render target for stat counters. Cloned once per counter task.
pub trait CounterSink: Clone + Send + 'static {
    fn render(&mut self, id: &ElementId, text: &str) -> bool;
}

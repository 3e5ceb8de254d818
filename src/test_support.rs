//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::{HashMap, HashSet};

use ratatui::buffer::Buffer;

use crate::core::content::PortfolioContent;
use crate::core::counter::{COUNTER_DURATION, FRAME_INTERVAL};
use crate::core::host::{ElementId, PreferenceStore, Surface, Viewport};
use crate::core::scroll::ScrollThresholds;
use crate::core::state::Page;
use crate::core::theme::Theme;

/// Creates a `Page` with the built-in sample content and default tuning.
pub fn test_page() -> Page {
    Page::new(
        PortfolioContent::default(),
        ScrollThresholds::default(),
        COUNTER_DURATION,
        FRAME_INTERVAL,
        Theme::Dark,
    )
}

/// All cell symbols of a buffer, row after row.
pub fn buffer_text(buf: &Buffer) -> String {
    buf.content().iter().map(|c| c.symbol()).collect()
}

/// A viewport with a fixed scroll position and hand-placed elements.
#[derive(Debug, Clone, Default)]
pub struct FixedViewport {
    pub scroll_y: f64,
    pub viewport_height: f64,
    elements: HashMap<ElementId, (f64, f64)>,
}

impl FixedViewport {
    pub fn new(scroll_y: f64, viewport_height: f64) -> Self {
        Self {
            scroll_y,
            viewport_height,
            elements: HashMap::new(),
        }
    }

    /// Place an element at `top` (document offset) with the given height.
    pub fn with_element(mut self, id: &str, top: f64, height: f64) -> Self {
        self.elements.insert(id.into(), (top, height));
        self
    }
}

impl Viewport for FixedViewport {
    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn element_top_offset(&self, id: &ElementId) -> Option<f64> {
        self.elements.get(id).map(|(top, _)| *top)
    }

    fn element_height(&self, id: &ElementId) -> Option<f64> {
        self.elements.get(id).map(|(_, height)| *height)
    }
}

/// A surface that remembers every write.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    classes: HashMap<ElementId, HashSet<String>>,
    class_writes: HashMap<ElementId, usize>,
    texts: HashMap<ElementId, String>,
    transforms: HashMap<ElementId, f64>,
    hidden: HashSet<ElementId>,
}

impl RecordingSurface {
    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.classes
            .get(&ElementId::from(id))
            .is_some_and(|set| set.contains(class))
    }

    pub fn class_writes(&self, id: &str) -> usize {
        self.class_writes.get(&ElementId::from(id)).copied().unwrap_or(0)
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.texts.get(&ElementId::from(id)).map(String::as_str)
    }

    pub fn transform_y(&self, id: &str) -> Option<f64> {
        self.transforms.get(&ElementId::from(id)).copied()
    }

    pub fn is_displayed(&self, id: &str) -> bool {
        !self.hidden.contains(&ElementId::from(id))
    }
}

impl Surface for RecordingSurface {
    fn set_class(&mut self, id: &ElementId, class: &str, on: bool) {
        *self.class_writes.entry(id.clone()).or_default() += 1;
        let set = self.classes.entry(id.clone()).or_default();
        if on {
            set.insert(class.to_string());
        } else {
            set.remove(class);
        }
    }

    fn set_text(&mut self, id: &ElementId, text: &str) {
        self.texts.insert(id.clone(), text.to_string());
    }

    fn set_transform_y(&mut self, id: &ElementId, offset: f64) {
        self.transforms.insert(id.clone(), offset);
    }

    fn set_display(&mut self, id: &ElementId, visible: bool) {
        if visible {
            self.hidden.remove(id);
        } else {
            self.hidden.insert(id.clone());
        }
    }
}

/// In-memory preference store.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    pub values: HashMap<String, String>,
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

//! # Element Store
//!
//! The visual state of every element the core has touched: classes, text,
//! vertical transform and display. Renderers read from it; the core writes
//! to it through [`Surface`].

use std::collections::{BTreeSet, HashMap};

use crate::core::host::{ElementId, Surface};

#[derive(Debug, Clone, PartialEq)]
pub struct ElementState {
    pub classes: BTreeSet<String>,
    pub text: Option<String>,
    pub transform_y: f64,
    pub displayed: bool,
}

impl Default for ElementState {
    fn default() -> Self {
        Self {
            classes: BTreeSet::new(),
            text: None,
            transform_y: 0.0,
            displayed: true,
        }
    }
}

#[derive(Debug, Default)]
pub struct ElementStore {
    elements: HashMap<ElementId, ElementState>,
    /// Bumped on every effective change; the terminal host skips redraws
    /// for background frames that leave it unchanged.
    revision: u64,
}

impl ElementStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &ElementId) -> Option<&ElementState> {
        self.elements.get(id)
    }

    pub fn has_class(&self, id: &ElementId, class: &str) -> bool {
        self.elements
            .get(id)
            .is_some_and(|e| e.classes.contains(class))
    }

    pub fn text(&self, id: &ElementId) -> Option<&str> {
        self.elements.get(id).and_then(|e| e.text.as_deref())
    }

    pub fn transform_y(&self, id: &ElementId) -> f64 {
        self.elements.get(id).map_or(0.0, |e| e.transform_y)
    }

    /// Elements are displayed unless something hid them.
    pub fn is_displayed(&self, id: &ElementId) -> bool {
        self.elements.get(id).is_none_or(|e| e.displayed)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn entry(&mut self, id: &ElementId) -> &mut ElementState {
        self.elements.entry(id.clone()).or_default()
    }
}

impl Surface for ElementStore {
    fn set_class(&mut self, id: &ElementId, class: &str, on: bool) {
        let element = self.entry(id);
        let changed = if on {
            element.classes.insert(class.to_string())
        } else {
            element.classes.remove(class)
        };
        if changed {
            self.revision += 1;
        }
    }

    fn set_text(&mut self, id: &ElementId, text: &str) {
        let element = self.entry(id);
        if element.text.as_deref() != Some(text) {
            element.text = Some(text.to_string());
            self.revision += 1;
        }
    }

    fn set_transform_y(&mut self, id: &ElementId, offset: f64) {
        let element = self.entry(id);
        if element.transform_y != offset {
            element.transform_y = offset;
            self.revision += 1;
        }
    }

    fn set_display(&mut self, id: &ElementId, visible: bool) {
        let element = self.entry(id);
        if element.displayed != visible {
            element.displayed = visible;
            self.revision += 1;
        }
    }
}

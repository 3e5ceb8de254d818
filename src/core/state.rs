//! # Page State
//!
//! Everything one page view knows, independent of how it is drawn.
//!
//! ```text
//! Page
//! ├── content: PortfolioContent           // what the page says
//! ├── elements: ElementStore              // classes/text/transform per element
//! ├── synchronizer: ScrollStateSynchronizer
//! ├── filter: ProjectFilter               // project grid buttons
//! ├── card_fades: Vec<(ElementId, Duration)>  // stagger from the last filter change
//! ├── filter_applied_at: Option<Instant>
//! ├── theme: Theme
//! └── status_message: String
//! ```
//!
//! State changes only happen through `update(page, action)` in action.rs
//! and `sync_viewport()` for scroll, resize and load notifications.

use std::time::{Duration, Instant};

use log::debug;

use crate::core::content::{PortfolioContent, ids};
use crate::core::elements::ElementStore;
use crate::core::filter::{FilterOutcome, ProjectFilter};
use crate::core::host::{ElementId, Surface, Viewport};
use crate::core::scroll::{CLASS_ACTIVE, ScrollStateSynchronizer, ScrollThresholds, ViewportReport};
use crate::core::theme::Theme;

pub struct Page {
    pub content: PortfolioContent,
    pub elements: ElementStore,
    pub synchronizer: ScrollStateSynchronizer,
    pub filter: ProjectFilter,
    pub card_fades: Vec<(ElementId, Duration)>,
    pub filter_applied_at: Option<Instant>,
    pub theme: Theme,
    pub status_message: String,
}

impl Page {
    pub fn new(
        content: PortfolioContent,
        thresholds: ScrollThresholds,
        counter_duration: Duration,
        counter_frame: Duration,
        theme: Theme,
    ) -> Self {
        let synchronizer = ScrollStateSynchronizer::new(content.bindings(), thresholds)
            .with_counter_timing(counter_duration, counter_frame);
        let filter = ProjectFilter::new(content.filter_buttons(), content.project_cards());

        let mut elements = ElementStore::new();
        if let Some(first) = filter.active_button() {
            elements.set_class(&first.id, CLASS_ACTIVE, true);
        }
        for i in 0..content.stats.len() {
            elements.set_text(&ids::stat(i), "0");
        }
        elements.set_text(&ids::element(ids::TYPEWRITER), "");

        Self {
            content,
            elements,
            synchronizer,
            filter,
            card_fades: Vec::new(),
            filter_applied_at: None,
            theme,
            status_message: String::new(),
        }
    }

    /// Run the scroll behaviours against the current viewport.
    pub fn sync_viewport<V: Viewport + ?Sized>(&mut self, viewport: &V) -> ViewportReport {
        let report = self.synchronizer.on_viewport_event(viewport, &mut self.elements);
        if !report.newly_revealed.is_empty() {
            debug!("Revealed {} elements", report.newly_revealed.len());
        }
        report
    }

    pub(crate) fn apply_filter(&mut self, outcome: FilterOutcome, now: Instant) {
        self.status_message = format!(
            "Showing {} project{} ({})",
            outcome.shown.len(),
            if outcome.shown.len() == 1 { "" } else { "s" },
            self.filter.active_filter()
        );
        self.card_fades = outcome.shown;
        self.filter_applied_at = Some(now);
    }

    /// Whether a shown card has finished waiting for its stagger delay.
    pub fn card_faded_in(&self, card: &ElementId, now: Instant) -> bool {
        let Some(applied) = self.filter_applied_at else {
            return true;
        };
        self.card_fades
            .iter()
            .find(|(id, _)| id == card)
            .is_none_or(|(_, delay)| now.saturating_duration_since(applied) >= *delay)
    }

    /// True while some card is still waiting to fade in.
    pub fn fades_pending(&self, now: Instant) -> bool {
        self.card_fades
            .iter()
            .any(|(id, _)| !self.card_faded_in(id, now))
    }

    pub fn teardown(&mut self) {
        self.synchronizer.teardown();
    }
}

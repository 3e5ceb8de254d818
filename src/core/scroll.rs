//! # Scroll State Synchronizer
//!
//! Recomputes every scroll-driven piece of page state from a fresh viewport
//! reading, then pushes the changes to the [`Surface`].
//!
//! ```text
//! on_viewport_event()
//!   A  navbar      scrolled / hidden classes       (uses last_scroll_y)
//!   B  sections    `active` class on one nav link  (last match wins)
//!   C  reveal      `revealed` class, one-way latch per element
//!   D  stats       hands back counters, once per synchronizer
//!   E  parallax    hero transform while the hero is on screen
//! ```
//!
//! All state that outlives one event (`last_scroll_y`, the latches, the
//! current active section) is owned by the synchronizer instance, so every
//! page view gets its own.

use std::time::Duration;

use log::{debug, info, trace};

use crate::core::counter::{COUNTER_DURATION, FRAME_INTERVAL, StatCounter};
use crate::core::host::{ElementId, Surface, Viewport};

pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_REVEALED: &str = "revealed";

/// Pixel thresholds for the scroll behaviours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollThresholds {
    /// Navbar turns opaque past this scroll offset.
    pub scrolled_after: f64,
    /// Navbar may hide only past this scroll offset.
    pub hide_after: f64,
    /// Sections count as current this far before their top edge.
    pub section_offset: f64,
    /// Elements reveal once their top is this far above the viewport bottom.
    pub reveal_margin: f64,
    /// Counters start once the stats block is this far above the viewport bottom.
    pub stats_margin: f64,
    /// Hero moves at this fraction of the scroll speed.
    pub parallax_rate: f64,
}

impl Default for ScrollThresholds {
    fn default() -> Self {
        Self {
            scrolled_after: 50.0,
            hide_after: 200.0,
            section_offset: 100.0,
            reveal_margin: 150.0,
            stats_margin: 100.0,
            parallax_rate: 0.3,
        }
    }
}

/// Per-event measurements. Built at the start of each event, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSnapshot {
    pub scroll_y: f64,
    pub last_scroll_y: f64,
    pub viewport_height: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavbarState {
    pub scrolled: bool,
    pub hidden: bool,
}

impl NavbarState {
    pub fn evaluate(snapshot: &ScrollSnapshot, thresholds: &ScrollThresholds) -> Self {
        let y = snapshot.scroll_y;
        Self {
            scrolled: y > thresholds.scrolled_after,
            hidden: y > snapshot.last_scroll_y && y > thresholds.hide_after,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionBinding {
    pub section: ElementId,
    /// Nav link pointing at this section, if the page has one.
    pub link: Option<ElementId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatBinding {
    pub id: ElementId,
    pub target: u64,
}

/// Which elements on the page take part in scroll behaviour.
#[derive(Debug, Clone, Default)]
pub struct PageBindings {
    pub navbar: Option<ElementId>,
    /// In document order.
    pub sections: Vec<SectionBinding>,
    pub nav_links: Vec<ElementId>,
    pub reveal: Vec<ElementId>,
    pub stats_container: Option<ElementId>,
    pub stats: Vec<StatBinding>,
    pub parallax: Option<ElementId>,
}

#[derive(Debug, Clone)]
struct RevealEntry {
    id: ElementId,
    revealed: bool,
}

/// What one `on_viewport_event` call decided.
#[derive(Debug, Default)]
pub struct ViewportReport {
    pub navbar: NavbarState,
    pub active_section: Option<ElementId>,
    pub newly_revealed: Vec<ElementId>,
    /// Present only on the single event that trips the stats latch.
    pub counters: Option<Vec<StatCounter>>,
}

pub struct ScrollStateSynchronizer {
    thresholds: ScrollThresholds,
    navbar: Option<ElementId>,
    sections: Vec<SectionBinding>,
    nav_links: Vec<ElementId>,
    reveal: Vec<RevealEntry>,
    stats_container: Option<ElementId>,
    stats: Vec<StatBinding>,
    parallax: Option<ElementId>,
    counter_duration: Duration,
    counter_frame: Duration,
    last_scroll_y: f64,
    applied_navbar: Option<NavbarState>,
    active_section: Option<ElementId>,
    stats_animated: bool,
    torn_down: bool,
}

impl ScrollStateSynchronizer {
    pub fn new(bindings: PageBindings, thresholds: ScrollThresholds) -> Self {
        debug!(
            "Scroll synchronizer created: {} sections, {} reveal targets, {} stats",
            bindings.sections.len(),
            bindings.reveal.len(),
            bindings.stats.len()
        );
        Self {
            thresholds,
            navbar: bindings.navbar,
            sections: bindings.sections,
            nav_links: bindings.nav_links,
            reveal: bindings
                .reveal
                .into_iter()
                .map(|id| RevealEntry {
                    id,
                    revealed: false,
                })
                .collect(),
            stats_container: bindings.stats_container,
            stats: bindings.stats,
            parallax: bindings.parallax,
            counter_duration: COUNTER_DURATION,
            counter_frame: FRAME_INTERVAL,
            last_scroll_y: 0.0,
            applied_navbar: None,
            active_section: None,
            stats_animated: false,
            torn_down: false,
        }
    }

    /// Counters handed out by this synchronizer reach their target after
    /// `duration` when stepped once per `frame`.
    pub fn with_counter_timing(mut self, duration: Duration, frame: Duration) -> Self {
        self.counter_duration = duration;
        self.counter_frame = frame;
        self
    }

    pub fn thresholds(&self) -> &ScrollThresholds {
        &self.thresholds
    }

    pub fn last_scroll_y(&self) -> f64 {
        self.last_scroll_y
    }

    pub fn active_section(&self) -> Option<&ElementId> {
        self.active_section.as_ref()
    }

    pub fn is_revealed(&self, id: &ElementId) -> bool {
        self.reveal.iter().any(|e| &e.id == id && e.revealed)
    }

    pub fn stats_animated(&self) -> bool {
        self.stats_animated
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// End of this page view. Later events do nothing.
    pub fn teardown(&mut self) {
        if !self.torn_down {
            debug!("Scroll synchronizer torn down");
        }
        self.torn_down = true;
    }

    /// Handle a scroll, resize or load notification.
    pub fn on_viewport_event<V, S>(&mut self, viewport: &V, surface: &mut S) -> ViewportReport
    where
        V: Viewport + ?Sized,
        S: Surface + ?Sized,
    {
        if self.torn_down {
            return ViewportReport::default();
        }

        let snapshot = ScrollSnapshot {
            scroll_y: viewport.scroll_y(),
            last_scroll_y: self.last_scroll_y,
            viewport_height: viewport.viewport_height(),
        };
        trace!("Viewport event: {:?}", snapshot);

        let navbar = self.sync_navbar(&snapshot, surface);
        self.sync_active_section(&snapshot, viewport, surface);
        let newly_revealed = self.sync_reveal(&snapshot, viewport, surface);
        let counters = self.sync_stats(&snapshot, viewport);
        self.sync_parallax(&snapshot, surface);

        ViewportReport {
            navbar,
            active_section: self.active_section.clone(),
            newly_revealed,
            counters,
        }
    }

    fn sync_navbar<S: Surface + ?Sized>(
        &mut self,
        snapshot: &ScrollSnapshot,
        surface: &mut S,
    ) -> NavbarState {
        let state = NavbarState::evaluate(snapshot, &self.thresholds);
        self.last_scroll_y = snapshot.scroll_y;

        if let Some(navbar) = &self.navbar {
            let previous = self.applied_navbar;
            if previous.map(|p| p.scrolled) != Some(state.scrolled) {
                surface.set_class(navbar, CLASS_SCROLLED, state.scrolled);
            }
            if previous.map(|p| p.hidden) != Some(state.hidden) {
                surface.set_class(navbar, CLASS_HIDDEN, state.hidden);
            }
            self.applied_navbar = Some(state);
        }
        state
    }

    fn sync_active_section<V, S>(&mut self, snapshot: &ScrollSnapshot, viewport: &V, surface: &mut S)
    where
        V: Viewport + ?Sized,
        S: Surface + ?Sized,
    {
        // Overlapping ranges resolve to the last match in document order.
        let current = self
            .sections
            .iter()
            .filter(|binding| {
                let (Some(top), Some(height)) = (
                    viewport.element_top_offset(&binding.section),
                    viewport.element_height(&binding.section),
                ) else {
                    return false;
                };
                let start = top - self.thresholds.section_offset;
                snapshot.scroll_y > start && snapshot.scroll_y <= start + height
            })
            .last();

        let Some(current) = current else {
            return;
        };
        if self.active_section.as_ref() == Some(&current.section) {
            return;
        }

        for link in &self.nav_links {
            surface.set_class(link, CLASS_ACTIVE, false);
        }
        if let Some(link) = &current.link {
            surface.set_class(link, CLASS_ACTIVE, true);
        }
        debug!("Active section: {}", current.section);
        self.active_section = Some(current.section.clone());
    }

    fn sync_reveal<V, S>(
        &mut self,
        snapshot: &ScrollSnapshot,
        viewport: &V,
        surface: &mut S,
    ) -> Vec<ElementId>
    where
        V: Viewport + ?Sized,
        S: Surface + ?Sized,
    {
        let reveal_point = snapshot.viewport_height - self.thresholds.reveal_margin;
        let mut newly_revealed = Vec::new();

        for entry in self.reveal.iter_mut().filter(|e| !e.revealed) {
            let visible = viewport
                .element_viewport_top(&entry.id)
                .is_some_and(|top| top < reveal_point);
            if visible {
                entry.revealed = true;
                surface.set_class(&entry.id, CLASS_REVEALED, true);
                newly_revealed.push(entry.id.clone());
            }
        }

        if !newly_revealed.is_empty() {
            trace!("Revealed {} elements", newly_revealed.len());
        }
        newly_revealed
    }

    fn sync_stats<V: Viewport + ?Sized>(
        &mut self,
        snapshot: &ScrollSnapshot,
        viewport: &V,
    ) -> Option<Vec<StatCounter>> {
        if self.stats_animated {
            return None;
        }
        let container = self.stats_container.as_ref()?;
        let top = viewport.element_viewport_top(container)?;
        if top >= snapshot.viewport_height - self.thresholds.stats_margin {
            return None;
        }

        self.stats_animated = true;
        info!("Stats in view, starting {} counters", self.stats.len());
        Some(
            self.stats
                .iter()
                .map(|stat| {
                    StatCounter::with_timing(
                        stat.id.clone(),
                        stat.target,
                        self.counter_duration,
                        self.counter_frame,
                    )
                })
                .collect(),
        )
    }

    fn sync_parallax<S: Surface + ?Sized>(&self, snapshot: &ScrollSnapshot, surface: &mut S) {
        let Some(hero) = &self.parallax else {
            return;
        };
        if snapshot.scroll_y < snapshot.viewport_height {
            surface.set_transform_y(hero, snapshot.scroll_y * self.thresholds.parallax_rate);
        }
    }
}

//! # Project Filter
//!
//! Category buttons above the project grid. Picking one marks it `active`,
//! shows the cards in that category (or every card for `all`) and hides the
//! rest. Shown cards fade in one after another, `index × 100ms` apart, where
//! `index` is the card's position in the full grid.

use std::time::Duration;

use log::debug;

use crate::core::host::{ElementId, Surface};
use crate::core::scroll::CLASS_ACTIVE;

pub const FILTER_ALL: &str = "all";
pub const CARD_STAGGER: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButton {
    pub id: ElementId,
    /// Category this button selects, or [`FILTER_ALL`].
    pub filter: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub id: ElementId,
    pub category: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Cards to show, with the delay before each one fades in.
    pub shown: Vec<(ElementId, Duration)>,
    pub hidden: Vec<ElementId>,
}

#[derive(Debug, Clone)]
pub struct ProjectFilter {
    buttons: Vec<FilterButton>,
    cards: Vec<ProjectCard>,
    active: usize,
}

impl ProjectFilter {
    /// The first button starts out active.
    pub fn new(buttons: Vec<FilterButton>, cards: Vec<ProjectCard>) -> Self {
        Self {
            buttons,
            cards,
            active: 0,
        }
    }

    pub fn buttons(&self) -> &[FilterButton] {
        &self.buttons
    }

    pub fn cards(&self) -> &[ProjectCard] {
        &self.cards
    }

    pub fn active_button(&self) -> Option<&FilterButton> {
        self.buttons.get(self.active)
    }

    pub fn active_filter(&self) -> &str {
        self.active_button()
            .map(|b| b.filter.as_str())
            .unwrap_or(FILTER_ALL)
    }

    pub fn is_shown(&self, card: &ElementId) -> bool {
        let filter = self.active_filter();
        self.cards
            .iter()
            .find(|c| &c.id == card)
            .is_some_and(|c| matches(filter, &c.category))
    }

    /// Activate `button`. Unknown buttons change nothing.
    pub fn select<S: Surface + ?Sized>(
        &mut self,
        button: &ElementId,
        surface: &mut S,
    ) -> Option<FilterOutcome> {
        let Some(index) = self.buttons.iter().position(|b| &b.id == button) else {
            debug!("Ignoring unknown filter button {}", button);
            return None;
        };
        self.active = index;

        for b in &self.buttons {
            surface.set_class(&b.id, CLASS_ACTIVE, false);
        }
        surface.set_class(button, CLASS_ACTIVE, true);

        let filter = self.buttons[index].filter.as_str();
        let mut outcome = FilterOutcome::default();
        for (position, card) in self.cards.iter().enumerate() {
            if matches(filter, &card.category) {
                surface.set_display(&card.id, true);
                outcome
                    .shown
                    .push((card.id.clone(), CARD_STAGGER * position as u32));
            } else {
                surface.set_display(&card.id, false);
                outcome.hidden.push(card.id.clone());
            }
        }

        debug!(
            "Filter '{}': {} shown, {} hidden",
            filter,
            outcome.shown.len(),
            outcome.hidden.len()
        );
        Some(outcome)
    }

    /// Activate the button after (or before, for negative `step`) the current one.
    pub fn cycle<S: Surface + ?Sized>(&mut self, step: isize, surface: &mut S) -> Option<FilterOutcome> {
        if self.buttons.is_empty() {
            return None;
        }
        let len = self.buttons.len() as isize;
        let next = (self.active as isize + step).rem_euclid(len) as usize;
        let id = self.buttons[next].id.clone();
        self.select(&id, surface)
    }
}

fn matches(filter: &str, category: &str) -> bool {
    filter == FILTER_ALL || filter == category
}

//! # Typewriter State Machine
//!
//! Types a phrase one character at a time, pauses, deletes it, pauses again,
//! then moves on to the next phrase. Forever.
//!
//! The machine owns no timer. Each [`Typewriter::tick`] returns the text to
//! show and how long to wait before the next tick; the driver in
//! [`crate::core::animator`] does the waiting.
//!
//! ```text
//!            visible == len                 visible == 0
//!   Typing ──────────────────▶ (END_PAUSE) ──▶ Deleting ──────────────▶ Typing, next phrase
//!     ▲  100ms per char                         50ms per char            (NEXT_PAUSE)
//!     └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Counts are in Unicode scalar values, so a prefix never splits a character.

use std::fmt;
use std::time::Duration;

pub const TYPE_DELAY: Duration = Duration::from_millis(100);
pub const DELETE_DELAY: Duration = Duration::from_millis(50);
pub const END_PAUSE: Duration = Duration::from_millis(2000);
pub const NEXT_PAUSE: Duration = Duration::from_millis(500);
/// Delay before the very first tick after start.
pub const INITIAL_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Typing,
    Deleting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTimings {
    pub type_delay: Duration,
    pub delete_delay: Duration,
    pub end_pause: Duration,
    pub next_pause: Duration,
}

impl Default for TypewriterTimings {
    fn default() -> Self {
        Self {
            type_delay: TYPE_DELAY,
            delete_delay: DELETE_DELAY,
            end_pause: END_PAUSE,
            next_pause: NEXT_PAUSE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypewriterError {
    /// The phrase list was empty; there is nothing to cycle through.
    EmptyPhrases,
}

impl fmt::Display for TypewriterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypewriterError::EmptyPhrases => write!(f, "typewriter needs at least one phrase"),
        }
    }
}

impl std::error::Error for TypewriterError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypewriterState {
    pub phrase_index: usize,
    pub visible_chars: usize,
    pub mode: Mode,
    /// Delay returned by the most recent tick.
    pub pending_delay: Duration,
}

/// Output of one tick: what to render and when to tick again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    pub text: String,
    pub delay: Duration,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    timings: TypewriterTimings,
    state: TypewriterState,
}

impl Typewriter {
    pub fn new(phrases: Vec<String>) -> Result<Self, TypewriterError> {
        if phrases.is_empty() {
            return Err(TypewriterError::EmptyPhrases);
        }
        Ok(Self {
            phrases,
            timings: TypewriterTimings::default(),
            state: TypewriterState {
                phrase_index: 0,
                visible_chars: 0,
                mode: Mode::Typing,
                pending_delay: INITIAL_DELAY,
            },
        })
    }

    pub fn with_timings(mut self, timings: TypewriterTimings) -> Self {
        self.timings = timings;
        self
    }

    pub fn state(&self) -> &TypewriterState {
        &self.state
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Advance the machine by one step.
    pub fn tick(&mut self) -> Tick {
        let phrase = &self.phrases[self.state.phrase_index];
        let len = phrase.chars().count();

        // The end-of-phrase pause has elapsed; start deleting. A zero-length
        // phrase lands here on its first tick.
        if self.state.mode == Mode::Typing && self.state.visible_chars >= len {
            self.state.mode = Mode::Deleting;
        }

        let delay = match self.state.mode {
            Mode::Typing => {
                self.state.visible_chars += 1;
                if self.state.visible_chars == len {
                    self.timings.end_pause
                } else {
                    self.timings.type_delay
                }
            }
            Mode::Deleting => {
                self.state.visible_chars = self.state.visible_chars.saturating_sub(1);
                self.timings.delete_delay
            }
        };

        let text = char_prefix(phrase, self.state.visible_chars).to_string();

        let delay = if self.state.mode == Mode::Deleting && self.state.visible_chars == 0 {
            self.state.mode = Mode::Typing;
            self.state.phrase_index = (self.state.phrase_index + 1) % self.phrases.len();
            self.timings.next_pause
        } else {
            delay
        };

        self.state.pending_delay = delay;
        Tick { text, delay }
    }
}

/// The first `count` characters of `s`.
fn char_prefix(s: &str, count: usize) -> &str {
    match s.char_indices().nth(count) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrases(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_phrase_list_rejected() {
        let err = Typewriter::new(Vec::new()).unwrap_err();
        assert_eq!(err, TypewriterError::EmptyPhrases);
        assert_eq!(err.to_string(), "typewriter needs at least one phrase");
    }

    #[test]
    fn test_types_one_char_per_tick() {
        let mut tw = Typewriter::new(phrases(&["Go", "Rust"])).unwrap();

        let first = tw.tick();
        assert_eq!(first.text, "G");
        assert_eq!(first.delay, TYPE_DELAY);

        let second = tw.tick();
        assert_eq!(second.text, "Go");
        assert_eq!(second.delay, END_PAUSE);
        assert_eq!(tw.state().visible_chars, 2);
        assert_eq!(tw.state().mode, Mode::Typing);
        assert_eq!(tw.state().pending_delay, END_PAUSE);
    }

    #[test]
    fn test_round_trip_advances_to_next_phrase() {
        let mut tw = Typewriter::new(phrases(&["Go", "Rust"])).unwrap();
        tw.tick();
        tw.tick();

        let delete = tw.tick();
        assert_eq!(delete.text, "G");
        assert_eq!(delete.delay, DELETE_DELAY);
        assert_eq!(tw.state().mode, Mode::Deleting);

        let cleared = tw.tick();
        assert_eq!(cleared.text, "");
        assert_eq!(cleared.delay, NEXT_PAUSE);
        assert_eq!(tw.state().mode, Mode::Typing);
        assert_eq!(tw.state().phrase_index, 1);
        assert_eq!(tw.state().visible_chars, 0);

        assert_eq!(tw.tick().text, "R");
    }

    #[test]
    fn test_index_wraps_around() {
        let mut tw = Typewriter::new(phrases(&["a", "b"])).unwrap();
        // "a": type, delete. "b": type, delete.
        for _ in 0..4 {
            tw.tick();
        }
        assert_eq!(tw.state().phrase_index, 0);
        assert_eq!(tw.tick().text, "a");
    }

    #[test]
    fn test_single_phrase_cycles_in_place() {
        let mut tw = Typewriter::new(phrases(&["Hi"])).unwrap();
        let delays: Vec<Duration> = (0..10).map(|_| tw.tick().delay).collect();
        assert_eq!(
            delays,
            vec![
                TYPE_DELAY,
                END_PAUSE,
                DELETE_DELAY,
                NEXT_PAUSE,
                TYPE_DELAY,
                END_PAUSE,
                DELETE_DELAY,
                NEXT_PAUSE,
                TYPE_DELAY,
                END_PAUSE,
            ]
        );
        assert_eq!(tw.state().phrase_index, 0);
    }

    #[test]
    fn test_empty_phrase_does_not_stick() {
        let mut tw = Typewriter::new(phrases(&["", "ok"])).unwrap();

        let tick = tw.tick();
        assert_eq!(tick.text, "");
        assert_eq!(tick.delay, NEXT_PAUSE);
        assert_eq!(tw.state().phrase_index, 1);
        assert_eq!(tw.state().visible_chars, 0);

        assert_eq!(tw.tick().text, "o");
    }

    #[test]
    fn test_only_empty_phrases_keeps_cycling() {
        let mut tw = Typewriter::new(phrases(&[""])).unwrap();
        for _ in 0..5 {
            let tick = tw.tick();
            assert_eq!(tick.text, "");
            assert_eq!(tick.delay, NEXT_PAUSE);
            assert_eq!(tw.state().phrase_index, 0);
        }
    }

    #[test]
    fn test_visible_chars_never_exceed_phrase_length() {
        let mut tw = Typewriter::new(phrases(&["abc", "", "de"])).unwrap();
        for _ in 0..50 {
            tw.tick();
            let state = tw.state();
            let len = tw.phrases()[state.phrase_index].chars().count();
            assert!(state.visible_chars <= len);
        }
    }

    #[test]
    fn test_multibyte_prefix() {
        let mut tw = Typewriter::new(phrases(&["héllo"])).unwrap();
        tw.tick();
        assert_eq!(tw.tick().text, "hé");
    }

    #[test]
    fn test_custom_timings() {
        let timings = TypewriterTimings {
            type_delay: Duration::from_millis(1),
            delete_delay: Duration::from_millis(2),
            end_pause: Duration::from_millis(3),
            next_pause: Duration::from_millis(4),
        };
        let mut tw = Typewriter::new(phrases(&["ab"])).unwrap().with_timings(timings);
        let delays: Vec<u128> = (0..4).map(|_| tw.tick().delay.as_millis()).collect();
        assert_eq!(delays, vec![1, 3, 2, 4]);
    }
}

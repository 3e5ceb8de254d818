//! # Core Page Logic
//!
//! This module contains Folio's behaviour.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Typewriter / Counter │
//!                    │  • Scroll synchronizer  │
//!                    │  • Filter, Theme        │
//!                    │  • update() (reducer)   │
//!                    └───────────┬─────────────┘
//!                                │  host traits
//!                                │  (Viewport, Surface, PreferenceStore, sinks)
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │   Tests    │
//!     │  Adapter   │                          │  (fakes)   │
//!     │ (ratatui)  │                          │            │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`host`]: The traits a host implements to drive the core
//! - [`typewriter`] / [`animator`]: Phrase state machine and its timer loop
//! - [`counter`]: Stat count-up animation
//! - [`scroll`]: The scroll-driven state synchronizer
//! - [`filter`], [`theme`]: Project filter and dark/light preference
//! - [`content`], [`elements`]: Page content and element visual state
//! - [`state`], [`action`]: The `Page` and its reducer
//! - [`config`]: Layered configuration

pub mod action;
pub mod animator;
pub mod config;
pub mod content;
pub mod counter;
pub mod elements;
pub mod filter;
pub mod host;
pub mod scroll;
pub mod state;
pub mod theme;
pub mod typewriter;

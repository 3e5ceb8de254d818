//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, lays out and renders
//! the page, and translates keyboard and mouse events into core actions and
//! viewport notifications.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! ```text
//! crossterm ──► TuiEvent ──► update(page, Action) ──► Effect
//!                   │
//!                   └─► PageViewState (scroll) ──► page.sync_viewport()
//!
//! typewriter task ─┐
//! counter tasks  ──┴─► mpsc::Sender<Action> ──► update(page, Action)
//! ```
//!
//! ## Redraw Strategy
//!
//! - **Animating** (smooth scroll, counters, card fades): polls every ~16ms.
//! - **Idle**: polls every 50ms, which is still finer than the typewriter's
//!   fastest step, and only redraws when an event or action arrived.
//!
//! Scroll, resize and load notifications are coalesced: however many arrive
//! between two frames, the core sees one `sync_viewport` call.

mod component;
mod components;
mod event;
pub mod layout;
mod palette;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::animator::TypewriterAnimator;
use crate::core::config::ResolvedConfig;
use crate::core::counter::CounterAnimation;
use crate::core::host::{CounterSink, ElementId, PreferenceStore};
use crate::core::state::Page;
use crate::core::theme::{FilePreferenceStore, Theme};
use crate::tui::component::EventHandler;
use crate::tui::components::PageViewState;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::layout::{NAVBAR_ROWS, PageLayout, TerminalViewport};

const ANIMATING_POLL: Duration = Duration::from_millis(16);
const IDLE_POLL: Duration = Duration::from_millis(50);

/// TUI-specific presentation state (not part of core page logic)
pub struct TuiState {
    pub page_view: PageViewState,
    /// Drives the typewriter cursor blink.
    pub started_at: Instant,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            page_view: PageViewState::new(),
            started_at: Instant::now(),
        }
    }
}

/// Forwards counter frames into the event loop's action channel.
#[derive(Clone)]
struct CounterChannel {
    tx: mpsc::Sender<Action>,
}

impl CounterSink for CounterChannel {
    fn render(&mut self, id: &ElementId, text: &str) -> bool {
        self.tx
            .send(Action::CounterFrame {
                id: id.clone(),
                text: text.to_string(),
            })
            .is_ok()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

/// Whether the terminal background looks dark, from `COLORFGBG` ("fg;bg").
///
/// Unknown or missing means dark, the common terminal default.
pub fn terminal_prefers_dark() -> bool {
    prefers_dark_from(std::env::var("COLORFGBG").ok().as_deref())
}

fn prefers_dark_from(colorfgbg: Option<&str>) -> bool {
    let Some(bg) = colorfgbg.and_then(|v| v.rsplit(';').next()) else {
        return true;
    };
    // Palette indices 7 and 15 are the light greys/white.
    !matches!(bg.trim().parse::<u8>(), Ok(7) | Ok(15))
}

/// Carry out what `update()` asked for. Returns true to quit.
fn apply_effect<P: PreferenceStore + ?Sized>(effect: Effect, prefs: &mut P) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::PersistTheme(theme) => {
            theme.persist(prefs);
            debug!("Theme preference saved: {}", theme.label());
            false
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Drained {
    /// Some element actually changed, so the page needs a redraw.
    changed: bool,
    quit: bool,
}

/// Apply every queued background action.
///
/// Frames that repeat what is already shown (a counter holding its value
/// for a few frames) leave the element revision alone and cause no redraw.
fn drain_actions<P: PreferenceStore + ?Sized>(
    page: &mut Page,
    rx: &mpsc::Receiver<Action>,
    prefs: &mut P,
) -> Drained {
    let revision = page.elements.revision();
    let mut drained = Drained::default();
    while let Ok(action) = rx.try_recv() {
        debug!("Event loop received: {:?}", action);
        if apply_effect(update(page, action), prefs) {
            drained.quit = true;
        }
    }
    drained.changed = page.elements.revision() != revision;
    drained
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut prefs = FilePreferenceStore::open_default();
    let theme = config
        .theme
        .unwrap_or_else(|| Theme::resolve(&prefs, terminal_prefers_dark()));
    info!("Starting with {} theme", theme.label());

    let mut page = Page::new(
        config.content.clone(),
        config.thresholds,
        config.counter_duration,
        config.counter_frame,
        theme,
    );
    let mut tui = TuiState::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let mut typewriter = TypewriterAnimator::new();
    let typewriter_tx = tx.clone();
    if let Err(e) = typewriter.start(
        page.content.phrases.clone(),
        config.initial_delay,
        config.timings,
        move |text: &str| {
            typewriter_tx
                .send(Action::TypewriterFrame(text.to_string()))
                .is_ok()
        },
    ) {
        warn!("Typewriter disabled: {}", e);
    }
    let mut counters = CounterAnimation::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame
    let mut viewport_dirty = true; // The initial load counts as a viewport event

    loop {
        let now = Instant::now();
        let size = terminal.size()?;
        let frame_area = Rect::new(0, 0, size.width, size.height);
        let [page_area, _] = ui::split(frame_area);

        // -1 for the scrollbar column
        let layout = PageLayout::measure(&page, page_area.width.saturating_sub(1), page_area.height);
        tui.page_view.set_metrics(layout.total_height, page_area.height);
        if tui.page_view.advance() {
            viewport_dirty = true;
        }

        if viewport_dirty {
            let viewport = TerminalViewport::new(&layout, tui.page_view.offset(), page_area.height);
            let report = page.sync_viewport(&viewport);
            if let Some(started) = report.counters {
                counters.start(started, config.counter_frame, CounterChannel { tx: tx.clone() });
            }
            viewport_dirty = false;
            needs_redraw = true;
        }

        let animating =
            tui.page_view.is_animating() || counters.is_running() || page.fades_pending(now);
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &page, &mut tui, &layout, now))?;
            needs_redraw = false;
        }

        let timeout = if animating { ANIMATING_POLL } else { IDLE_POLL };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            needs_redraw = true;
            let action = match event {
                TuiEvent::Resize => {
                    viewport_dirty = true;
                    None
                }
                TuiEvent::Quit => Some(Action::Quit),
                TuiEvent::ToggleTheme => Some(Action::ToggleTheme),
                TuiEvent::FilterPrev => Some(Action::CycleFilter(-1)),
                TuiEvent::FilterNext => Some(Action::CycleFilter(1)),
                TuiEvent::JumpToSection(index) => {
                    if let Some(span) = layout.sections.get(index) {
                        tui.page_view.scroll_to(span.top.saturating_sub(NAVBAR_ROWS));
                    }
                    None
                }
                TuiEvent::Click(column, row) => {
                    match ui::hit_test(column, row, frame_area, &page, &layout, tui.page_view.offset()) {
                        Some(ui::Hit::NavLink(kind)) => {
                            if let Some(span) = layout.section(kind) {
                                tui.page_view.scroll_to(span.top.saturating_sub(NAVBAR_ROWS));
                            }
                            None
                        }
                        Some(ui::Hit::FilterButton(id)) => Some(Action::SelectFilter(id)),
                        None => None,
                    }
                }
                // Scroll events; offset changes become viewport notifications
                _ => {
                    if tui.page_view.handle_event(&event).is_some() {
                        viewport_dirty = true;
                    }
                    None
                }
            };

            if let Some(action) = action {
                // Filter changes move cards, which is a layout change the core must see
                if matches!(action, Action::SelectFilter(_) | Action::CycleFilter(_)) {
                    viewport_dirty = true;
                }
                if apply_effect(update(&mut page, action), &mut prefs) {
                    should_quit = true;
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (typewriter and counter frames)
        let drained = drain_actions(&mut page, &rx, &mut prefs);
        needs_redraw |= drained.changed;
        should_quit |= drained.quit;

        if should_quit {
            break;
        }
    }

    typewriter.stop();
    counters.cancel();
    page.teardown();
    info!("Folio shutting down");

    ratatui::restore();
    Ok(())
}

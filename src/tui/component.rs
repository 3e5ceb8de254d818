use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component rendered straight into the frame.
///
/// Components receive data via props (struct fields) and may hold a
/// `&mut` to persistent state, which they are free to update while
/// rendering (e.g. clamping a scroll offset). This mirrors Ratatui's
/// `StatefulWidget` pattern.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}

//! # Stat Counters
//!
//! Count a number up from zero to its target over a fixed duration, one
//! animation frame at a time. Each counter adds `target / (duration / frame)`
//! per frame, shows the floor of the running value, and snaps to exactly the
//! target once it gets there.
//!
//! [`CounterAnimation`] runs every counter on its own tokio task with a frame
//! interval. Counters are independent; nothing orders their frames relative to
//! each other.

use std::time::{Duration, Instant};

use log::{debug, trace};
use tokio::task::AbortHandle;
use tokio::time::MissedTickBehavior;

use crate::core::host::{CounterSink, ElementId};

pub const COUNTER_DURATION: Duration = Duration::from_millis(2000);
/// Nominal animation frame (~60fps).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CounterFrame {
    Running(u64),
    Done(u64),
}

impl CounterFrame {
    pub fn value(self) -> u64 {
        match self {
            CounterFrame::Running(v) | CounterFrame::Done(v) => v,
        }
    }

    pub fn is_done(self) -> bool {
        matches!(self, CounterFrame::Done(_))
    }
}

#[derive(Debug, Clone)]
pub struct StatCounter {
    pub id: ElementId,
    pub target: u64,
    pub current: f64,
    increment: f64,
    pub started_at: Instant,
}

impl StatCounter {
    pub fn new(id: ElementId, target: u64) -> Self {
        Self::with_timing(id, target, COUNTER_DURATION, FRAME_INTERVAL)
    }

    pub fn with_timing(id: ElementId, target: u64, duration: Duration, frame: Duration) -> Self {
        let frames = duration.as_secs_f64() / frame.as_secs_f64().max(f64::EPSILON);
        let increment = if frames > 0.0 {
            target as f64 / frames
        } else {
            target as f64
        };
        Self {
            id,
            target,
            current: 0.0,
            increment,
            started_at: Instant::now(),
        }
    }

    pub fn increment(&self) -> f64 {
        self.increment
    }

    /// Advance by one frame.
    pub fn step(&mut self) -> CounterFrame {
        self.current += self.increment;
        let target = self.target as f64;
        if self.current < target {
            CounterFrame::Running(self.current.floor() as u64)
        } else {
            self.current = target;
            CounterFrame::Done(self.target)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.current >= self.target as f64
    }
}

/// Owns the per-counter tasks. Dropping it aborts anything still running.
#[derive(Default)]
pub struct CounterAnimation {
    handles: Vec<AbortHandle>,
}

impl CounterAnimation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn one task per counter. The first frame renders immediately.
    pub fn start<S: CounterSink>(&mut self, counters: Vec<StatCounter>, frame: Duration, sink: S) {
        debug!("Starting {} stat counters", counters.len());
        for mut counter in counters {
            let mut sink = sink.clone();
            let task = tokio::spawn(async move {
                let mut interval = tokio::time::interval(frame);
                interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                loop {
                    interval.tick().await;
                    let step = counter.step();
                    if !sink.render(&counter.id, &step.value().to_string()) {
                        debug!("Counter sink closed for {}", counter.id);
                        return;
                    }
                    if step.is_done() {
                        trace!(
                            "Counter {} reached {} after {:?}",
                            counter.id,
                            counter.target,
                            counter.started_at.elapsed()
                        );
                        return;
                    }
                }
            });
            self.handles.push(task.abort_handle());
        }
    }

    pub fn cancel(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.handles.iter().any(|h| !h.is_finished())
    }
}

impl Drop for CounterAnimation {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Recorder {
        frames: Arc<Mutex<Vec<(String, String)>>>,
    }

    impl CounterSink for Recorder {
        fn render(&mut self, id: &ElementId, text: &str) -> bool {
            self.frames
                .lock()
                .unwrap()
                .push((id.to_string(), text.to_string()));
            true
        }
    }

    impl Recorder {
        fn last_for(&self, id: &str) -> Option<String> {
            self.frames
                .lock()
                .unwrap()
                .iter()
                .rev()
                .find(|(i, _)| i == id)
                .map(|(_, t)| t.clone())
        }

        fn count_for(&self, id: &str) -> usize {
            self.frames.lock().unwrap().iter().filter(|(i, _)| i == id).count()
        }
    }

    #[test]
    fn test_increment_spreads_target_over_frames() {
        let counter = StatCounter::new("stat:0".into(), 250);
        // 2000ms / 16ms = 125 frames
        assert!((counter.increment() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_step_floors_then_snaps_to_target() {
        let mut counter = StatCounter::new("stat:0".into(), 50);
        assert_eq!(counter.step(), CounterFrame::Running(0)); // 0.4
        assert_eq!(counter.step(), CounterFrame::Running(0)); // 0.8
        assert_eq!(counter.step(), CounterFrame::Running(1)); // 1.2

        let mut last = CounterFrame::Running(0);
        for _ in 0..200 {
            last = counter.step();
            if last.is_done() {
                break;
            }
        }
        assert_eq!(last, CounterFrame::Done(50));
        assert_eq!(counter.current, 50.0);
        assert!(counter.is_finished());
    }

    #[test]
    fn test_counter_finishes_in_nominal_frame_count() {
        let mut counter = StatCounter::new("stat:0".into(), 1000);
        let frames = std::iter::from_fn(|| {
            let f = counter.step();
            (!f.is_done()).then_some(f)
        })
        .count();
        // 125 frames nominal; float rounding may need one more
        assert!((124..=125).contains(&frames), "took {frames} frames");
    }

    #[test]
    fn test_zero_target_is_done_immediately() {
        let mut counter = StatCounter::new("stat:0".into(), 0);
        assert_eq!(counter.step(), CounterFrame::Done(0));
    }

    #[test]
    fn test_values_never_decrease() {
        let mut counter = StatCounter::new("stat:0".into(), 37);
        let mut previous = 0;
        loop {
            let frame = counter.step();
            assert!(frame.value() >= previous);
            previous = frame.value();
            if frame.is_done() {
                break;
            }
        }
        assert_eq!(previous, 37);
    }

    #[tokio::test(start_paused = true)]
    async fn test_counters_run_independently_to_target() {
        let recorder = Recorder::default();
        let mut animation = CounterAnimation::new();
        animation.start(
            vec![
                StatCounter::new("stat:0".into(), 50),
                StatCounter::new("stat:1".into(), 1200),
            ],
            FRAME_INTERVAL,
            recorder.clone(),
        );

        tokio::time::sleep(Duration::from_millis(1000)).await;
        let mid: u64 = recorder.last_for("stat:1").unwrap().parse().unwrap();
        assert!(mid > 0 && mid < 1200);

        tokio::time::sleep(Duration::from_millis(2000)).await;
        assert_eq!(recorder.last_for("stat:0").as_deref(), Some("50"));
        assert_eq!(recorder.last_for("stat:1").as_deref(), Some("1200"));
        assert!(!animation.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_frames() {
        let recorder = Recorder::default();
        let mut animation = CounterAnimation::new();
        animation.start(
            vec![StatCounter::new("stat:0".into(), 500)],
            FRAME_INTERVAL,
            recorder.clone(),
        );

        tokio::time::sleep(Duration::from_millis(100)).await;
        animation.cancel();
        let frozen = recorder.count_for("stat:0");
        tokio::time::sleep(Duration::from_millis(3000)).await;

        assert_eq!(recorder.count_for("stat:0"), frozen);
        assert_ne!(recorder.last_for("stat:0").as_deref(), Some("500"));
    }
}

//! # Typewriter Animator
//!
//! Drives a [`Typewriter`] on the tokio timer: sleep, tick, render, repeat.
//! The loop lives in a single spawned task; [`TypewriterAnimator::stop`]
//! aborts it, so a tick that is waiting on its delay never fires.
//!
//! Must be started from inside a tokio runtime.

use std::time::Duration;

use log::{debug, info};
use tokio::task::AbortHandle;

use crate::core::host::TextSink;
use crate::core::typewriter::{Typewriter, TypewriterError, TypewriterTimings};

#[derive(Default)]
pub struct TypewriterAnimator {
    handle: Option<AbortHandle>,
}

impl TypewriterAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start cycling `phrases`, first tick after `initial_delay`.
    ///
    /// Fails before anything is scheduled if `phrases` is empty. A running
    /// animation is stopped first, so this doubles as a restart.
    pub fn start<S: TextSink>(
        &mut self,
        phrases: Vec<String>,
        initial_delay: Duration,
        timings: TypewriterTimings,
        mut sink: S,
    ) -> Result<(), TypewriterError> {
        let mut typewriter = Typewriter::new(phrases)?.with_timings(timings);
        self.stop();

        info!(
            "Typewriter starting with {} phrases (initial delay {}ms)",
            typewriter.phrases().len(),
            initial_delay.as_millis()
        );

        let task = tokio::spawn(async move {
            let mut delay = initial_delay;
            loop {
                tokio::time::sleep(delay).await;
                let tick = typewriter.tick();
                if !sink.render(&tick.text) {
                    debug!("Typewriter sink closed, ending animation");
                    return;
                }
                delay = tick.delay;
            }
        });
        self.handle = Some(task.abort_handle());
        Ok(())
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!("Typewriter stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for TypewriterAnimator {
    fn drop(&mut self) {
        self.stop();
    }
}

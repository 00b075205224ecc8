//! Timer-driven slideshow advance on the tokio runtime

use super::SlideshowState;
use crate::config::SlideshowConfig;
use crate::CoreResult;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};

/// Handle to a recurring task that calls `next()` once per period.
///
/// The task lives exactly as long as the handle: dropping it aborts the
/// task, so no tick can land after teardown.
#[derive(Debug)]
pub struct AutoAdvance {
    task: JoinHandle<()>,
}

impl AutoAdvance {
    /// Spawn the ticker. The first tick fires one full period after start.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero or if called outside a tokio runtime.
    pub fn start(state: Arc<Mutex<SlideshowState>>, period: Duration) -> Self {
        assert!(!period.is_zero(), "slideshow period must be non-zero");

        let task = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            loop {
                ticker.tick().await;
                let mut cursor = state.lock();
                cursor.next();
                tracing::trace!(current = cursor.current(), "slideshow advanced");
            }
        });

        tracing::debug!(?period, "slideshow auto-advance started");
        Self { task }
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for AutoAdvance {
    fn drop(&mut self) {
        self.task.abort();
        tracing::debug!("slideshow auto-advance stopped");
    }
}

/// Slideshow cursor plus the timer that drives it
#[derive(Debug)]
pub struct SlideshowController {
    state: Arc<Mutex<SlideshowState>>,
    timer: Option<AutoAdvance>,
}

impl SlideshowController {
    pub fn new(len: usize) -> CoreResult<Self> {
        Ok(Self {
            state: Arc::new(Mutex::new(SlideshowState::new(len)?)),
            timer: None,
        })
    }

    /// Start auto-advance, replacing any timer already running.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub fn activate(&mut self, period: Duration) {
        self.timer = Some(AutoAdvance::start(Arc::clone(&self.state), period));
    }

    /// Start auto-advance with the configured period.
    pub fn activate_with(&mut self, config: &SlideshowConfig) -> CoreResult<()> {
        self.activate(config.interval()?);
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.timer = None;
    }

    pub fn is_active(&self) -> bool {
        self.timer.as_ref().is_some_and(AutoAdvance::is_running)
    }

    pub fn state(&self) -> SlideshowState {
        *self.state.lock()
    }

    pub fn current(&self) -> usize {
        self.state.lock().current()
    }

    // Manual navigation leaves the timer alone; the next scheduled tick
    // still fires on its original cadence.

    pub fn next(&self) {
        self.state.lock().next();
    }

    pub fn previous(&self) {
        self.state.lock().previous();
    }

    pub fn jump_to(&self, index: usize) {
        self.state.lock().jump_to(index);
    }
}

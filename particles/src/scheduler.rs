//! Animation-frame loop bookkeeping.
//!
//! The browser hands back an integer handle for every `requestAnimationFrame`
//! call. [`FrameLoop`] remembers the pending handle so `stop` can cancel it,
//! and stamps each run with a generation so a callback that was already queued
//! when the loop stopped (or restarted) does nothing when it finally fires.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

/// Handle returned by `requestAnimationFrame`.
pub type FrameHandle = i32;

#[derive(Debug, Default)]
pub struct FrameLoop {
    generation: u64,
    running: bool,
    pending: Option<FrameHandle>,
}

impl FrameLoop {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new run. Returns the run's generation, or `None` if already running.
    pub fn start(&mut self) -> Option<u64> {
        if self.running {
            return None;
        }
        self.running = true;
        self.generation += 1;
        Some(self.generation)
    }

    /// Record the handle of the frame request just issued.
    pub fn scheduled(&mut self, handle: FrameHandle) {
        self.pending = Some(handle);
    }

    /// Called at the top of a frame callback stamped with `generation`.
    ///
    /// Clears the pending handle and returns whether the frame should run.
    pub fn begin_frame(&mut self, generation: u64) -> bool {
        if !self.running || generation != self.generation {
            return false;
        }
        self.pending = None;
        true
    }

    /// End the current run. Returns the pending handle the caller must cancel.
    pub fn stop(&mut self) -> Option<FrameHandle> {
        self.running = false;
        self.pending.take()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }
}

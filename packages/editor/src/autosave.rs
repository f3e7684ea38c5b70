//! Debounced autosave timer.
//!
//! Each mutation re-arms the timer; only the most recent deadline can
//! fire, so rapid consecutive edits coalesce into a single persistence
//! write. The timer holds no thread — the host event loop drives it by
//! polling [`Autosave::take_due`] (the session does this in `tick`).
//! Dropping the owner discards any pending deadline, so teardown can
//! never produce a stale write.

use std::time::{Duration, Instant};

/// Default quiet period after the last edit.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug)]
pub struct Autosave {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Autosave {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Cancel-and-reschedule: the previous pending deadline is replaced.
    pub fn schedule(&mut self) {
        self.deadline = Some(Instant::now() + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// True once the quiet period has elapsed; clears the deadline so the
    /// save fires exactly once per schedule.
    pub fn take_due(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for Autosave {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_due_before_quiet_period() {
        let mut autosave = Autosave::new(Duration::from_secs(60));
        autosave.schedule();
        assert!(autosave.pending());
        assert!(!autosave.take_due());
        // The miss must not consume the deadline.
        assert!(autosave.pending());
    }

    #[test]
    fn test_due_fires_once() {
        let mut autosave = Autosave::new(Duration::ZERO);
        autosave.schedule();
        assert!(autosave.take_due());
        assert!(!autosave.take_due());
        assert!(!autosave.pending());
    }

    #[test]
    fn test_reschedule_replaces_deadline() {
        let mut autosave = Autosave::new(Duration::from_secs(60));
        autosave.schedule();
        let mut fast = Autosave::new(Duration::ZERO);
        fast.schedule();

        // A later schedule pushes the deadline out.
        autosave.schedule();
        assert!(!autosave.take_due());
        assert!(fast.take_due());
    }

    #[test]
    fn test_cancel_discards_pending() {
        let mut autosave = Autosave::new(Duration::ZERO);
        autosave.schedule();
        autosave.cancel();
        assert!(!autosave.take_due());
    }
}

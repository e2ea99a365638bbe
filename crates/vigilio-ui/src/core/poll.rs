//! Circuit breaker for interval polling.
//!
//! # Design
//! - Count consecutive failures; any success resets the count.
//! - Once tripped the breaker stays open so the owner can drop its timer for good.
//! - [`PollHandle`] owns the timer; a stop verdict drops it and no later start revives it.

/// Outcome of recording a poll result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollVerdict {
    /// Keep the interval running.
    Continue,
    /// Stop polling permanently.
    Stop,
}

/// Consecutive-failure counter guarding a polling loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PollBreaker {
    threshold: u32,
    failures: u32,
    tripped: bool,
}

impl PollBreaker {
    /// Breaker that trips after `threshold` consecutive failures.
    #[must_use]
    pub const fn new(threshold: u32) -> Self {
        Self {
            threshold,
            failures: 0,
            tripped: false,
        }
    }

    /// Record a successful poll.
    pub const fn record_success(&mut self) -> PollVerdict {
        if self.tripped {
            return PollVerdict::Stop;
        }
        self.failures = 0;
        PollVerdict::Continue
    }

    /// Record a failed poll.
    pub const fn record_failure(&mut self) -> PollVerdict {
        if !self.tripped {
            self.failures = self.failures.saturating_add(1);
            self.tripped = self.failures >= self.threshold;
        }
        if self.tripped {
            PollVerdict::Stop
        } else {
            PollVerdict::Continue
        }
    }

    /// Whether polling has been stopped.
    #[must_use]
    pub const fn is_tripped(&self) -> bool {
        self.tripped
    }

    /// Failures recorded since the last success.
    #[must_use]
    pub const fn failures(&self) -> u32 {
        self.failures
    }
}

/// Owner of a polling timer such as a `gloo` interval.
#[derive(Debug)]
pub struct PollHandle<T> {
    timer: Option<T>,
    stopped: bool,
}

impl<T> Default for PollHandle<T> {
    fn default() -> Self {
        Self::idle()
    }
}

impl<T> PollHandle<T> {
    /// Handle with no timer yet.
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            timer: None,
            stopped: false,
        }
    }

    /// Install the timer; refused once polling has stopped.
    pub fn start(&mut self, timer: T) -> bool {
        if self.stopped {
            return false;
        }
        self.timer = Some(timer);
        true
    }

    /// Apply a poll verdict. Returns true when a stop dropped a running timer.
    pub fn settle(&mut self, verdict: PollVerdict) -> bool {
        if verdict == PollVerdict::Continue {
            return false;
        }
        self.stopped = true;
        self.timer.take().is_some()
    }

    /// Drop the timer on unmount.
    pub fn release(&mut self) {
        self.timer = None;
    }

    /// Whether a timer is installed.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.timer.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn trips_on_third_consecutive_failure() {
        let mut breaker = PollBreaker::new(3);
        assert_eq!(breaker.record_failure(), PollVerdict::Continue);
        assert_eq!(breaker.record_failure(), PollVerdict::Continue);
        assert_eq!(breaker.record_failure(), PollVerdict::Stop);
        assert!(breaker.is_tripped());
    }

    #[test]
    fn success_resets_the_count() {
        let mut breaker = PollBreaker::new(3);
        breaker.record_failure();
        breaker.record_failure();
        assert_eq!(breaker.record_success(), PollVerdict::Continue);
        assert_eq!(breaker.failures(), 0);
        assert_eq!(breaker.record_failure(), PollVerdict::Continue);
        assert!(!breaker.is_tripped());
    }

    struct Timer(Rc<Cell<bool>>);

    impl Drop for Timer {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    #[test]
    fn stop_drops_the_timer_for_good() {
        let dropped = Rc::new(Cell::new(false));
        let mut handle = PollHandle::idle();
        assert!(handle.start(Timer(dropped.clone())));
        assert!(!handle.settle(PollVerdict::Continue));
        assert!(!dropped.get());

        assert!(handle.settle(PollVerdict::Stop));
        assert!(dropped.get());
        assert!(!handle.is_running());
        assert!(!handle.settle(PollVerdict::Stop));
        assert!(!handle.start(Timer(Rc::new(Cell::new(false)))));
    }

    #[test]
    fn tripped_breaker_stays_open() {
        let mut breaker = PollBreaker::new(1);
        assert_eq!(breaker.record_failure(), PollVerdict::Stop);
        assert_eq!(breaker.record_success(), PollVerdict::Stop);
        assert!(breaker.is_tripped());
    }
}

//! Timer-driven debouncing.
//!
//! The plugin host owns the clock: it can schedule a one-shot timer but cannot
//! cancel one. [`Debouncer`] therefore counts outstanding timers instead of
//! cancelling them. Every [`call`](Debouncer::call) schedules a fresh timer of
//! the same delay; only the tick that drains the last outstanding timer
//! releases the most recent arguments. Earlier ticks are swallowed, which is
//! what makes a newer call supersede an older one.

use std::time::Duration;

/// Default quiet period before a query is submitted.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Collapses bursts of calls into a single delivery of the last arguments.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    latest: Option<T>,
    outstanding: usize,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            latest: None,
            outstanding: 0,
        }
    }

    /// Records `args` as the latest call and returns the timer to schedule.
    pub fn call(&mut self, args: T) -> Duration {
        self.latest = Some(args);
        self.outstanding += 1;
        self.delay
    }

    /// Reports one elapsed timer.
    ///
    /// Returns the latest arguments once no newer call is still waiting on its
    /// own timer; `None` otherwise.
    pub fn tick(&mut self) -> Option<T> {
        if self.outstanding == 0 {
            return None;
        }
        self.outstanding -= 1;
        if self.outstanding == 0 {
            self.latest.take()
        } else {
            None
        }
    }

    /// Whether a delivery is still pending.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.outstanding > 0
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_collapses_to_last_arguments() {
        let mut debouncer = Debouncer::new(Duration::from_millis(10));
        debouncer.call("b");
        debouncer.call("ba");
        debouncer.call("bat");

        assert_eq!(debouncer.tick(), None);
        assert_eq!(debouncer.tick(), None);
        assert_eq!(debouncer.tick(), Some("bat"));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn separate_bursts_each_deliver_once() {
        let mut debouncer = Debouncer::default();
        assert_eq!(debouncer.call(1), DEFAULT_DEBOUNCE);
        assert_eq!(debouncer.tick(), Some(1));

        debouncer.call(2);
        assert_eq!(debouncer.tick(), Some(2));
    }

    #[test]
    fn stray_tick_delivers_nothing() {
        let mut debouncer: Debouncer<&str> = Debouncer::default();
        assert_eq!(debouncer.tick(), None);

        debouncer.call("x");
        assert_eq!(debouncer.tick(), Some("x"));
        assert_eq!(debouncer.tick(), None);
    }
}

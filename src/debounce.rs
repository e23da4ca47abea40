//! Quiet-period stabilization for rapidly-changing values.
//!
//! A [`Debouncer`] mirrors an input value but only settles a change after
//! the input has been stable for the full quiet period. Intermediate values
//! are never observable: every update replaces the staged value and restarts
//! the timer.

use std::time::Duration;

use tokio::time::Instant;

pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(300);

pub struct Debouncer<T> {
    quiet_period: Duration,
    settled: T,
    pending: Option<(T, Instant)>,
}

impl<T: PartialEq> Debouncer<T> {
    pub fn new(initial: T, quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            settled: initial,
            pending: None,
        }
    }

    /// Stages `value` and restarts the quiet-period timer. A call before the
    /// previous timer elapsed discards the previously staged value.
    pub fn update(&mut self, value: T) {
        let deadline = Instant::now() + self.quiet_period;
        self.pending = Some((value, deadline));
    }

    /// Promotes the staged value once its deadline has passed.
    ///
    /// Returns the settled value only when it actually changed; settling the
    /// value that was already current produces no signal.
    pub fn poll(&mut self) -> Option<&T> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|(_, deadline)| *deadline <= Instant::now());
        if !due {
            return None;
        }

        let (value, _) = self.pending.take()?;
        if value == self.settled {
            return None;
        }

        self.settled = value;
        Some(&self.settled)
    }

    pub fn value(&self) -> &T {
        &self.settled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tokio::time::advance;

    #[tokio::test(start_paused = true)]
    async fn test_every_update_restarts_the_timer() {
        let mut debouncer = Debouncer::new("a".to_string(), Duration::from_millis(300));

        debouncer.update("b".to_string());
        advance(Duration::from_millis(100)).await;
        debouncer.update("c".to_string());
        advance(Duration::from_millis(50)).await;
        debouncer.update("d".to_string());

        // 299ms after the last update nothing has settled
        advance(Duration::from_millis(299)).await;
        assert!(debouncer.poll().is_none());
        assert_eq!(debouncer.value(), "a");

        // The full quiet period settles the final value, not the
        // intermediate ones
        advance(Duration::from_millis(1)).await;
        assert_eq!(debouncer.poll(), Some(&"d".to_string()));
        assert_eq!(debouncer.value(), "d");
    }

    #[tokio::test(start_paused = true)]
    async fn test_poll_signals_once() {
        let mut debouncer = Debouncer::new(0u32, Duration::from_millis(300));

        debouncer.update(1);
        advance(Duration::from_millis(300)).await;
        assert_eq!(debouncer.poll(), Some(&1));
        assert!(debouncer.poll().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_settling_the_current_value_is_silent() {
        let mut debouncer = Debouncer::new(7u32, Duration::from_millis(300));

        debouncer.update(7);
        advance(Duration::from_millis(300)).await;
        assert!(debouncer.poll().is_none());
        assert_eq!(*debouncer.value(), 7);
    }

    #[tokio::test(start_paused = true)]
    async fn test_poll_without_updates_is_silent() {
        let mut debouncer: Debouncer<u32> = Debouncer::new(0, DEFAULT_QUIET_PERIOD);
        advance(Duration::from_secs(10)).await;
        assert!(debouncer.poll().is_none());
    }
}

use std::time::{Duration, Instant};

pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(500);

/// Holds the most recent value until no newer one has arrived for the quiet period.
///
/// Time is supplied by the caller, so the debouncer never sleeps and stays
/// deterministic. A push replaces any pending value and restarts the timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer<T> {
    quiet_period: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending<T> {
    value: T,
    due: Instant,
}

impl<T> Debouncer<T> {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    pub fn push(&mut self, value: T, at: Instant) {
        self.pending = Some(Pending {
            value,
            due: at + self.quiet_period,
        });
    }

    /// Emits the pending value once `now` has reached its deadline.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(pending) if now >= pending.due => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.due)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drops the pending value without emitting it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_is_emitted_before_the_deadline() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(500));
        debouncer.push("re", start);

        assert_eq!(debouncer.poll(start + Duration::from_millis(499)), None);
        assert_eq!(debouncer.poll(start + Duration::from_millis(500)), Some("re"));
        assert_eq!(debouncer.poll(start + Duration::from_secs(5)), None);
    }

    #[test]
    fn each_push_restarts_the_timer_and_drops_older_values() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(500));
        debouncer.push("re", start);
        debouncer.push("rea", start + Duration::from_millis(100));
        debouncer.push("react", start + Duration::from_millis(200));

        assert_eq!(debouncer.poll(start + Duration::from_millis(600)), None);
        assert_eq!(
            debouncer.deadline(),
            Some(start + Duration::from_millis(700))
        );
        assert_eq!(
            debouncer.poll(start + Duration::from_millis(700)),
            Some("react")
        );
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn cancel_discards_pending_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::default();
        debouncer.push(1, start);
        debouncer.cancel();
        assert_eq!(debouncer.poll(start + Duration::from_secs(1)), None);
    }
}

use std::time::{Duration, Instant};

/// Quiet period before a typed search query is applied
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Holds back a changing value until it has been stable for `delay`.
///
/// Time is passed in by the caller so the event loop can drive it from its
/// tick and tests can drive it deterministically.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    settled: T,
    pending: Option<(T, Instant)>,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    pub fn new(initial: T, delay: Duration) -> Self {
        Self {
            delay,
            settled: initial,
            pending: None,
        }
    }

    /// Record a new raw value; restarts the quiet period
    pub fn set(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Promote the pending value once it has been quiet long enough.
    ///
    /// Returns the newly settled value when it differs from the previous one.
    pub fn poll(&mut self, now: Instant) -> Option<&T> {
        let ready = matches!(
            &self.pending,
            Some((_, since)) if now.saturating_duration_since(*since) >= self.delay
        );
        if !ready {
            return None;
        }

        let (value, _) = self.pending.take()?;
        if value == self.settled {
            return None;
        }
        self.settled = value;
        Some(&self.settled)
    }

    pub fn settled(&self) -> &T {
        &self.settled
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_settles_after_quiet_period() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(String::new(), SEARCH_DEBOUNCE);

        debouncer.set("a".to_string(), start);
        assert!(debouncer.poll(start + Duration::from_millis(100)).is_none());

        debouncer.set("ag".to_string(), start + Duration::from_millis(200));
        assert!(debouncer.poll(start + Duration::from_millis(400)).is_none());
        assert_eq!(debouncer.settled(), "");

        let settled = debouncer.poll(start + Duration::from_millis(500)).cloned();
        assert_eq!(settled.as_deref(), Some("ag"));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_unchanged_value_is_not_reported() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new("x".to_string(), SEARCH_DEBOUNCE);

        debouncer.set("x".to_string(), start);
        assert!(debouncer.poll(start + SEARCH_DEBOUNCE).is_none());
        assert!(!debouncer.is_pending());
    }
}

//! Fixed-delay ticker
//!
//! The next deadline is armed only after the previous tick has finished, so
//! slow ticks push later ones back instead of piling up. Disarming is the only
//! way to stop; there is no separate cancel handle.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    deadline: Option<Instant>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            deadline: None,
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Schedule the next tick one period after `now`.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.period);
    }

    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.map(|d| now >= d).unwrap_or(false)
    }

    /// Time left until the deadline; `None` when disarmed.
    pub fn timeout(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }

    /// Fire if due. Disarms, so the caller must [`arm`](Self::arm) again once
    /// the tick's work is done.
    pub fn fire(&mut self, now: Instant) -> bool {
        if self.is_due(now) {
            self.deadline = None;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disarmed_ticker_never_fires() {
        let mut t = Ticker::from_millis(500);
        let now = Instant::now();
        assert!(!t.is_armed());
        assert_eq!(t.timeout(now), None);
        assert!(!t.fire(now + Duration::from_secs(10)));
    }

    #[test]
    fn test_fires_once_after_period() {
        let mut t = Ticker::from_millis(500);
        let start = Instant::now();
        t.arm(start);

        assert!(!t.fire(start + Duration::from_millis(499)));
        assert_eq!(
            t.timeout(start + Duration::from_millis(200)),
            Some(Duration::from_millis(300))
        );
        assert!(t.fire(start + Duration::from_millis(500)));
        assert!(!t.is_armed());
        assert!(!t.fire(start + Duration::from_millis(1000)));
    }

    #[test]
    fn test_fixed_delay_accumulates_jitter() {
        let mut t = Ticker::from_millis(500);
        let start = Instant::now();
        t.arm(start);

        // Tick observed late, work finishes later still: next deadline is
        // measured from the re-arm point, not from the first deadline.
        let late = start + Duration::from_millis(650);
        assert!(t.fire(late));
        let done = late + Duration::from_millis(20);
        t.arm(done);

        assert!(!t.is_due(start + Duration::from_millis(1000)));
        assert!(t.is_due(done + Duration::from_millis(500)));
    }

    #[test]
    fn test_timeout_saturates_when_overdue() {
        let mut t = Ticker::from_millis(10);
        let start = Instant::now();
        t.arm(start);
        assert_eq!(t.timeout(start + Duration::from_secs(1)), Some(Duration::ZERO));
    }
}

//! Scroll-end detection by position stability.
//!
//! A settle is only declared when no scroll event has arrived for the quiet
//! window *and* the offset has not moved since the previous sample. A smooth
//! scroll still animating keeps producing events, so compensation can never
//! land mid-animation.

/// Quiet window after the last scroll event.
pub const SETTLE_QUIET_MS: f64 = 100.0;

/// Re-check interval while the strip is still moving.
pub const SETTLE_POLL_MS: u64 = 50;

const STABLE_EPSILON_PX: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleState {
    /// Nothing recorded since the last settle.
    Idle,
    /// Still moving (or too recent); poll again.
    Moving,
    /// Position has been stable for the quiet window.
    Settled,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SettleDetector {
    quiet_ms: f64,
    last_event_at: Option<f64>,
    last_offset: f64,
}

impl Default for SettleDetector {
    fn default() -> Self {
        Self::new(SETTLE_QUIET_MS)
    }
}

impl SettleDetector {
    pub fn new(quiet_ms: f64) -> Self {
        Self {
            quiet_ms,
            last_event_at: None,
            last_offset: 0.0,
        }
    }

    /// Record a scroll event observed at `now_ms` with the current offset.
    pub fn record(&mut self, now_ms: f64, offset: f64) {
        self.last_event_at = Some(now_ms);
        self.last_offset = offset;
    }

    pub fn is_pending(&self) -> bool {
        self.last_event_at.is_some()
    }

    pub fn poll(&mut self, now_ms: f64, offset: f64) -> SettleState {
        let Some(last_event_at) = self.last_event_at else {
            return SettleState::Idle;
        };
        if (offset - self.last_offset).abs() > STABLE_EPSILON_PX {
            // Moved without us seeing an event (e.g. momentum); restart the window.
            self.record(now_ms, offset);
            return SettleState::Moving;
        }
        if now_ms - last_event_at < self.quiet_ms {
            return SettleState::Moving;
        }
        self.last_event_at = None;
        SettleState::Settled
    }

    pub fn reset(&mut self) {
        self.last_event_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_until_something_scrolls() {
        let mut settle = SettleDetector::default();
        assert_eq!(settle.poll(1_000.0, 0.0), SettleState::Idle);
    }

    #[test]
    fn settles_after_quiet_window() {
        let mut settle = SettleDetector::default();
        settle.record(0.0, 400.0);
        assert_eq!(settle.poll(60.0, 400.0), SettleState::Moving);
        assert_eq!(settle.poll(100.0, 400.0), SettleState::Settled);
        assert_eq!(settle.poll(200.0, 400.0), SettleState::Idle);
    }

    #[test]
    fn continued_motion_postpones_settle() {
        let mut settle = SettleDetector::default();
        settle.record(0.0, 400.0);
        // Offset drifted with no event: window restarts at 150.
        assert_eq!(settle.poll(150.0, 430.0), SettleState::Moving);
        assert_eq!(settle.poll(200.0, 430.0), SettleState::Moving);
        assert_eq!(settle.poll(250.0, 430.0), SettleState::Settled);
    }

    #[test]
    fn each_event_extends_the_window() {
        let mut settle = SettleDetector::default();
        settle.record(0.0, 100.0);
        settle.record(90.0, 180.0);
        assert_eq!(settle.poll(120.0, 180.0), SettleState::Moving);
        assert_eq!(settle.poll(190.0, 180.0), SettleState::Settled);
    }

    #[test]
    fn reset_drops_pending_settle() {
        let mut settle = SettleDetector::default();
        settle.record(0.0, 100.0);
        settle.reset();
        assert!(!settle.is_pending());
        assert_eq!(settle.poll(500.0, 100.0), SettleState::Idle);
    }
}

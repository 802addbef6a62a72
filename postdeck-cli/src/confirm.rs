//! Two-step confirmation for destructive actions
//!
//! The first step arms the gate; the second only counts if it lands within
//! the window. After that the arm lapses and the action must start over.

use std::time::{Duration, Instant};

/// How long an armed delete waits for confirmation.
pub const CONFIRM_WINDOW: Duration = Duration::from_secs(3);

/// Result of a confirmation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// Confirmed within the window; go ahead
    Confirmed,
    /// Armed, but the window lapsed
    Expired,
    /// Never armed
    Idle,
}

/// Arm-then-confirm gate with an expiry window
#[derive(Debug, Clone)]
pub struct ConfirmGate {
    window: Duration,
    armed_at: Option<Instant>,
}

impl ConfirmGate {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            armed_at: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// First step. Re-arming restarts the window.
    pub fn arm(&mut self, now: Instant) {
        self.armed_at = Some(now);
    }

    /// Second step. Always disarms.
    pub fn confirm(&mut self, now: Instant) -> Confirmation {
        match self.armed_at.take() {
            None => Confirmation::Idle,
            Some(at) if now.saturating_duration_since(at) <= self.window => {
                Confirmation::Confirmed
            }
            Some(_) => Confirmation::Expired,
        }
    }
}

impl Default for ConfirmGate {
    fn default() -> Self {
        Self::new(CONFIRM_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_within_window() {
        let start = Instant::now();
        let mut gate = ConfirmGate::default();
        gate.arm(start);
        assert_eq!(
            gate.confirm(start + Duration::from_secs(2)),
            Confirmation::Confirmed
        );
    }

    #[test]
    fn confirm_after_window_expires() {
        let start = Instant::now();
        let mut gate = ConfirmGate::default();
        gate.arm(start);
        let late = start + CONFIRM_WINDOW + Duration::from_millis(1);
        assert_eq!(gate.confirm(late), Confirmation::Expired);
    }

    #[test]
    fn confirm_without_arm() {
        let mut gate = ConfirmGate::default();
        assert_eq!(gate.confirm(Instant::now()), Confirmation::Idle);
    }

    #[test]
    fn confirm_disarms() {
        let start = Instant::now();
        let mut gate = ConfirmGate::default();
        gate.arm(start);
        assert_eq!(gate.confirm(start), Confirmation::Confirmed);
        assert_eq!(gate.confirm(start), Confirmation::Idle);
    }

    #[test]
    fn rearm_restarts_window() {
        let start = Instant::now();
        let mut gate = ConfirmGate::new(Duration::from_secs(3));
        gate.arm(start);
        gate.arm(start + Duration::from_secs(2));
        assert_eq!(
            gate.confirm(start + Duration::from_secs(4)),
            Confirmation::Confirmed
        );
    }
}

use std::time::{Duration, Instant};

/// Single-slot debounce timer.
///
/// Arming replaces any pending deadline, so a burst of events fires once,
/// `delay` after the last of them.
#[derive(Debug, Clone, Copy)]
pub struct Debounce {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Schedule (or reschedule) the timer `delay` after `now`.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true once when the deadline has passed, clearing the slot.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_after_quiet_period() {
        let t0 = Instant::now();
        let mut timer = Debounce::new(Duration::from_millis(150));
        timer.arm(t0);
        assert!(!timer.fire(t0 + Duration::from_millis(149)));
        assert!(timer.fire(t0 + Duration::from_millis(150)));
        assert!(!timer.is_pending());
        assert!(!timer.fire(t0 + Duration::from_millis(400)));
    }

    #[test]
    fn test_rearm_replaces_deadline() {
        let t0 = Instant::now();
        let mut timer = Debounce::new(Duration::from_millis(150));
        timer.arm(t0);
        timer.arm(t0 + Duration::from_millis(100));
        assert!(!timer.fire(t0 + Duration::from_millis(200)));
        assert!(timer.fire(t0 + Duration::from_millis(250)));
    }

    #[test]
    fn test_cancel() {
        let t0 = Instant::now();
        let mut timer = Debounce::new(Duration::from_millis(10));
        timer.arm(t0);
        timer.cancel();
        assert!(!timer.fire(t0 + Duration::from_secs(1)));
    }
}

//! One-shot timer used for roll windows, elevator rides, and damage gating.
//!
//! Timers are plain accumulators ticked by the owning system against the
//! frame clock. They never run on their own thread; a deadline fires on
//! whichever tick advances past it.

/// One-shot countdown. Inactive until [`OneShotTimer::start`] is called;
/// fires exactly once per start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OneShotTimer {
    duration: f32,
    elapsed: f32,
    active: bool,
}

impl OneShotTimer {
    /// Create an inactive timer with the given duration in seconds.
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            elapsed: 0.0,
            active: false,
        }
    }

    /// Arm the timer, restarting it if it was already running.
    pub fn start(&mut self) {
        self.elapsed = 0.0;
        self.active = true;
    }

    /// Disarm without firing.
    pub fn cancel(&mut self) {
        self.elapsed = 0.0;
        self.active = false;
    }

    /// Advance by `dt` seconds. Returns `true` on the tick that crosses the
    /// deadline; the timer disarms itself when it fires.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.active {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed >= self.duration {
            self.elapsed = self.duration;
            self.active = false;
            return true;
        }
        false
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Seconds accumulated since the last start. An inactive timer reports
    /// zero rather than a stale value.
    pub fn elapsed(&self) -> f32 {
        if self.active { self.elapsed } else { 0.0 }
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_timer_reports_zero_elapsed() {
        let timer = OneShotTimer::new(1.0);
        assert!(!timer.is_active());
        assert_eq!(timer.elapsed(), 0.0);
    }

    #[test]
    fn tick_without_start_never_fires() {
        let mut timer = OneShotTimer::new(0.5);
        assert!(!timer.tick(10.0));
        assert_eq!(timer.elapsed(), 0.0);
    }

    #[test]
    fn fires_once_at_or_after_deadline() {
        let mut timer = OneShotTimer::new(0.2);
        timer.start();
        assert!(!timer.tick(0.1));
        assert!(timer.tick(0.15));
        assert!(!timer.tick(0.15));
        assert!(!timer.is_active());
    }

    #[test]
    fn restart_preempts_previous_schedule() {
        let mut timer = OneShotTimer::new(1.0);
        timer.start();
        timer.tick(0.9);
        timer.start();
        assert!(!timer.tick(0.5));
        assert!(timer.is_active());
        assert!(timer.tick(0.5));
    }

    #[test]
    fn cancel_disarms() {
        let mut timer = OneShotTimer::new(1.0);
        timer.start();
        timer.cancel();
        assert!(!timer.tick(2.0));
    }
}

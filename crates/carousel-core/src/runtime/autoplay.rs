use std::time::Duration;

use tokio::time::Instant;

/// Periodic advance signal.
///
/// Pure deadline bookkeeping: the runtime sleeps until [`deadline`] and calls
/// [`fire`]. Pausing drops the pending deadline; resuming restarts a full
/// interval.
///
/// [`deadline`]: AutoplayTimer::deadline
/// [`fire`]: AutoplayTimer::fire
#[derive(Debug, Clone)]
pub struct AutoplayTimer {
    interval: Duration,
    active: bool,
    paused: bool,
    next_fire: Option<Instant>,
}

impl AutoplayTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            active: false,
            paused: false,
            next_fire: None,
        }
    }

    /// Start firing every `interval` from `now`
    pub fn start(&mut self, interval: Duration, now: Instant) {
        self.interval = interval;
        self.active = !interval.is_zero();
        self.schedule(now);
    }

    pub fn stop(&mut self) {
        self.active = false;
        self.next_fire = None;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Suspend firing (drag in progress)
    pub fn pause(&mut self) {
        self.paused = true;
        self.next_fire = None;
    }

    /// Resume with a full interval from `now`
    pub fn resume(&mut self, now: Instant) {
        self.paused = false;
        self.schedule(now);
    }

    /// When the next advance is due
    pub fn deadline(&self) -> Option<Instant> {
        if self.active && !self.paused {
            self.next_fire
        } else {
            None
        }
    }

    /// Consume a due deadline, returns whether an advance should happen
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline() {
            Some(due) if due <= now => {
                let next = due + self.interval;
                self.next_fire = Some(if next <= now { now + self.interval } else { next });
                true
            }
            _ => false,
        }
    }

    fn schedule(&mut self, now: Instant) {
        self.next_fire = if self.active && !self.paused {
            Some(now + self.interval)
        } else {
            None
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_millis(1000);

    #[test]
    fn test_inactive_until_started() {
        let timer = AutoplayTimer::new(SECOND);
        assert_eq!(timer.deadline(), None);
    }

    #[test]
    fn test_fires_on_interval() {
        let t0 = Instant::now();
        let mut timer = AutoplayTimer::new(SECOND);
        timer.start(SECOND, t0);
        assert_eq!(timer.deadline(), Some(t0 + SECOND));
        assert!(!timer.fire(t0 + Duration::from_millis(999)));
        assert!(timer.fire(t0 + SECOND));
        assert_eq!(timer.deadline(), Some(t0 + SECOND * 2));
    }

    #[test]
    fn test_pause_and_resume_restart_interval() {
        let t0 = Instant::now();
        let mut timer = AutoplayTimer::new(SECOND);
        timer.start(SECOND, t0);

        timer.pause();
        assert_eq!(timer.deadline(), None);
        assert!(!timer.fire(t0 + SECOND));

        let resumed = t0 + Duration::from_millis(700);
        timer.resume(resumed);
        assert_eq!(timer.deadline(), Some(resumed + SECOND));
    }

    #[test]
    fn test_stop_disables() {
        let t0 = Instant::now();
        let mut timer = AutoplayTimer::new(SECOND);
        timer.start(SECOND, t0);
        timer.stop();
        timer.resume(t0);
        assert_eq!(timer.deadline(), None);
    }

    #[test]
    fn test_zero_interval_never_fires() {
        let t0 = Instant::now();
        let mut timer = AutoplayTimer::new(Duration::ZERO);
        timer.start(Duration::ZERO, t0);
        assert!(!timer.is_active());
    }

    #[test]
    fn test_late_fire_does_not_burst() {
        let t0 = Instant::now();
        let mut timer = AutoplayTimer::new(SECOND);
        timer.start(SECOND, t0);
        let late = t0 + SECOND * 5;
        assert!(timer.fire(late));
        assert_eq!(timer.deadline(), Some(late + SECOND));
    }
}

use std::time::Duration;

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// A periodic callback slot on the game's event loop.
///
/// Owners call [`Interval::elapse`] as time passes and fire their own
/// callback whenever [`Interval::is_due`] reports true, then [`Interval::rearm`].
/// Stopping cancels the pending fire; starting again schedules a fresh full
/// period, so paused time is simply not counted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interval {
    period: Duration,
    until_next: Duration,
    running: bool,
}

impl Interval {
    pub fn new(period: Duration) -> Self {
        // A zero period would fire forever within a single instant
        let period = period.max(MIN_PERIOD);
        Interval {
            period,
            until_next: period,
            running: false,
        }
    }

    #[cfg(test)]
    pub fn started(period: Duration) -> Self {
        let mut interval = Self::new(period);
        interval.start();
        interval
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        self.until_next = self.period;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn restart(&mut self, period: Duration) {
        self.period = period.max(MIN_PERIOD);
        self.start();
    }

    pub fn set_running(&mut self, running: bool) {
        match (self.running, running) {
            (false, true) => self.start(),
            (true, false) => self.stop(),
            _ => {}
        }
    }

    pub fn toggle(&mut self) {
        self.set_running(!self.running);
    }

    pub fn until_next(&self) -> Option<Duration> {
        self.running.then_some(self.until_next)
    }

    pub fn elapse(&mut self, dt: Duration) {
        if self.running {
            self.until_next = self.until_next.saturating_sub(dt);
        }
    }

    pub fn is_due(&self) -> bool {
        self.running && self.until_next.is_zero()
    }

    pub fn rearm(&mut self) {
        self.until_next += self.period;
    }
}

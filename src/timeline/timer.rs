use std::time::Duration;

/// A repeating timer on the controller's logical clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RepeatingTimer {
    period: Duration,
    next_due: Duration,
}

impl RepeatingTimer {
    /// First firing is one full period after `now`.
    pub fn start(now: Duration, period: Duration) -> Self {
        Self {
            period,
            next_due: now + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn next_due(&self) -> Duration {
        self.next_due
    }

    fn reschedule(&mut self) {
        self.next_due += self.period;
    }
}

/// Single-slot holder for the playback timer. At most one timer is ever armed.
#[derive(Clone, Debug, Default)]
pub struct TimerSlot {
    active: Option<RepeatingTimer>,
}

impl TimerSlot {
    /// Arm a new timer. Returns `false` and leaves the existing timer untouched when the slot is
    /// already occupied.
    pub fn arm(&mut self, now: Duration, period: Duration) -> bool {
        if self.active.is_some() {
            return false;
        }
        self.active = Some(RepeatingTimer::start(now, period));
        true
    }

    /// Cancel the armed timer. Returns `true` if one was active.
    pub fn cancel(&mut self) -> bool {
        self.active.take().is_some()
    }

    pub fn is_armed(&self) -> bool {
        self.active.is_some()
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.active.map(|t| t.next_due())
    }

    /// If the armed timer is due at or before `until`, consume that firing and return its
    /// deadline.
    pub fn pop_due(&mut self, until: Duration) -> Option<Duration> {
        let timer = self.active.as_mut()?;
        let due = timer.next_due();
        if due > until {
            return None;
        }
        timer.reschedule();
        Some(due)
    }
}

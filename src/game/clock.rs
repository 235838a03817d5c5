use std::time::{Duration, Instant};

/// Deadline-based repeating tick for the turn countdown.
///
/// The clock never spawns anything and never calls back; the owner polls it
/// with the current `Instant` and reacts to however many periods have
/// elapsed. Arming replaces the deadline wholesale, so a deadline from a
/// previous turn cannot fire after a move or a reset: it no longer exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnClock {
    period: Duration,
    next_tick: Option<Instant>,
}

impl TurnClock {
    /// Create a disarmed clock that ticks once per `period` when armed.
    pub fn new(period: Duration) -> Self {
        TurnClock {
            period,
            next_tick: None,
        }
    }

    /// Start (or restart) ticking, with the first tick one period from `now`.
    pub fn arm(&mut self, now: Instant) {
        self.next_tick = Some(now + self.period);
    }

    /// Stop ticking. Polling a cancelled clock reports nothing.
    pub fn cancel(&mut self) {
        self.next_tick = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next_tick.is_some()
    }

    /// Number of ticks elapsed by `now`, advancing the deadline past it.
    ///
    /// A caller that polls late gets every missed tick at once, so a slow
    /// frame slows the display but never the countdown.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let mut ticks = 0;
        while let Some(deadline) = self.next_tick {
            if now < deadline {
                break;
            }
            self.next_tick = Some(deadline + self.period);
            ticks += 1;
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn second() -> Duration {
        Duration::from_secs(1)
    }

    #[test]
    fn test_new_clock_is_disarmed() {
        let mut clock = TurnClock::new(second());
        assert!(!clock.is_armed());
        assert_eq!(clock.poll(Instant::now()), 0);
    }

    #[test]
    fn test_no_tick_before_deadline() {
        let t0 = Instant::now();
        let mut clock = TurnClock::new(second());
        clock.arm(t0);

        assert_eq!(clock.poll(t0 + Duration::from_millis(999)), 0);
        assert!(clock.is_armed());
    }

    #[test]
    fn test_tick_at_deadline() {
        let t0 = Instant::now();
        let mut clock = TurnClock::new(second());
        clock.arm(t0);

        assert_eq!(clock.poll(t0 + second()), 1);
        // The deadline moved; the same instant yields nothing more.
        assert_eq!(clock.poll(t0 + second()), 0);
    }

    #[test]
    fn test_late_poll_catches_up() {
        let t0 = Instant::now();
        let mut clock = TurnClock::new(second());
        clock.arm(t0);

        assert_eq!(clock.poll(t0 + Duration::from_millis(3500)), 3);
        assert_eq!(clock.poll(t0 + Duration::from_secs(4)), 1);
    }

    #[test]
    fn test_cancel_stops_ticking() {
        let t0 = Instant::now();
        let mut clock = TurnClock::new(second());
        clock.arm(t0);
        clock.cancel();

        assert!(!clock.is_armed());
        assert_eq!(clock.poll(t0 + Duration::from_secs(10)), 0);
    }

    #[test]
    fn test_rearm_discards_previous_deadline() {
        let t0 = Instant::now();
        let mut clock = TurnClock::new(second());
        clock.arm(t0);
        // Re-arm just before the first deadline would have fired.
        clock.arm(t0 + Duration::from_millis(900));

        assert_eq!(clock.poll(t0 + Duration::from_millis(1000)), 0);
        assert_eq!(clock.poll(t0 + Duration::from_millis(1900)), 1);
    }
}

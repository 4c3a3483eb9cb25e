//! Clock-driven front end to the timing functions.

use ballot_types::{Clock, ElectionStatus, ElectionWindow, SystemClock};

use crate::summary::{summarize, ElectionSummary};
use crate::timing::{days_remaining, time_progress};

/// Evaluates election windows against a clock.
///
/// Holds no election state of its own; each call reads the clock once.
pub struct ElectionTimer<C = SystemClock> {
    clock: C,
}

impl ElectionTimer<SystemClock> {
    /// A timer reading the wall clock.
    pub fn system() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> ElectionTimer<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn days_remaining(&self, window: &ElectionWindow) -> String {
        days_remaining(window, self.clock.now())
    }

    pub fn time_progress(&self, window: &ElectionWindow) -> u8 {
        time_progress(window, self.clock.now())
    }

    pub fn status(&self, window: &ElectionWindow) -> ElectionStatus {
        window.status(self.clock.now())
    }

    pub fn summarize(&self, window: &ElectionWindow) -> ElectionSummary {
        summarize(window, self.clock.now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ballot_nullables::NullClock;
    use ballot_types::Timestamp;

    #[test]
    fn follows_the_clock() {
        let clock = NullClock::new(0);
        let timer = ElectionTimer::new(&clock);
        let window = ElectionWindow::new(Timestamp::from_millis(1_000), Timestamp::from_millis(2_000));

        assert_eq!(timer.status(&window), ElectionStatus::Upcoming);
        assert_eq!(timer.time_progress(&window), 0);

        clock.set(1_250);
        assert_eq!(timer.status(&window), ElectionStatus::Active);
        assert_eq!(timer.time_progress(&window), 25);

        clock.advance(10_000);
        assert_eq!(timer.days_remaining(&window), "Completed");
        assert_eq!(timer.summarize(&window).progress, 100);
    }
}

use std::time::{Duration, Instant};

/// Keeps a steady frame cadence by sleeping off whatever is left of each frame.
pub struct Sleeper {
    pub target_delta_time: Duration,
    pub last_instant: Option<Instant>,
}

impl Sleeper {
    pub fn new(target_delta_time: Duration) -> Self {
        Self {
            target_delta_time,
            last_instant: None,
        }
    }

    /// Returns whether any sleeping happened, which is false when the frame ran over.
    pub fn sleep(&mut self) -> bool {
        let remaining = self.remaining();

        let slept = if remaining.is_zero() {
            false
        } else {
            spin_sleep::sleep(remaining);
            true
        };

        self.last_instant = Some(Instant::now());
        slept
    }

    pub fn in_time(&self) -> bool {
        !self.remaining().is_zero()
    }

    fn remaining(&self) -> Duration {
        match self.last_instant {
            Some(last_instant) => self.target_delta_time.saturating_sub(last_instant.elapsed()),
            // The first frame has nothing to be measured against, so it waits a full frame.
            None => self.target_delta_time,
        }
    }
}

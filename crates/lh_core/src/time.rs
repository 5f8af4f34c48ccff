//! Wall-clock frame timing.
//!
//! One tick is one millisecond of real time. [`FrameClock::begin_frame`]
//! measures the delta since the previous frame and publishes it as
//! `elapsed_ticks` (the physics time base) while accumulating into
//! `clock_ticks` (the monotonic animation time base). Deltas are capped so a
//! suspended host (backgrounded tab, debugger pause) resumes with one bounded
//! step instead of tunneling entities through the room sensors.

use std::time::Instant;

/// Largest single-frame delta fed to the simulation, in ticks.
const DEFAULT_MAX_ELAPSED_TICKS: f64 = 100.0;

#[derive(Debug)]
pub struct FrameClock {
    last_instant: Instant,
    pub max_elapsed_ticks: f64,
    /// Capped delta of the current frame, in ticks.
    pub elapsed_ticks: f64,
    /// Sum of all capped deltas since startup, in ticks.
    pub clock_ticks: f64,
    pub frame_count: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_instant: Instant::now(),
            max_elapsed_ticks: DEFAULT_MAX_ELAPSED_TICKS,
            elapsed_ticks: 0.0,
            clock_ticks: 0.0,
            frame_count: 0,
        }
    }

    /// Measure the real delta since the last call and start a new frame.
    pub fn begin_frame(&mut self) {
        let now = Instant::now();
        let raw_ticks = now.duration_since(self.last_instant).as_secs_f64() * 1000.0;
        self.last_instant = now;
        self.apply_delta(raw_ticks);
    }

    /// Cap and account one frame delta. Split out from [`begin_frame`] so the
    /// capping policy is testable without real sleeps.
    pub fn apply_delta(&mut self, raw_ticks: f64) {
        let capped = if raw_ticks > self.max_elapsed_ticks {
            log::warn!(
                "frame delta {:.1} ticks exceeds cap, clamping to {:.1}",
                raw_ticks,
                self.max_elapsed_ticks
            );
            self.max_elapsed_ticks
        } else {
            raw_ticks
        };

        self.elapsed_ticks = capped;
        self.clock_ticks += capped;
        self.frame_count += 1;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas_accumulate_into_clock_ticks() {
        let mut clock = FrameClock::new();
        clock.apply_delta(16.0);
        clock.apply_delta(17.0);
        assert_eq!(clock.elapsed_ticks, 17.0);
        assert_eq!(clock.clock_ticks, 33.0);
        assert_eq!(clock.frame_count, 2);
    }

    #[test]
    fn oversized_delta_is_capped() {
        let mut clock = FrameClock::new();
        clock.apply_delta(5_000.0);
        assert_eq!(clock.elapsed_ticks, DEFAULT_MAX_ELAPSED_TICKS);
        assert_eq!(clock.clock_ticks, DEFAULT_MAX_ELAPSED_TICKS);
    }

    #[test]
    fn delta_at_cap_passes_through() {
        let mut clock = FrameClock::new();
        clock.apply_delta(DEFAULT_MAX_ELAPSED_TICKS);
        assert_eq!(clock.elapsed_ticks, DEFAULT_MAX_ELAPSED_TICKS);
    }
}

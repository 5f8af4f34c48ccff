//! Shared entity pieces: the clock-gated animation cursor and the closed
//! set of environment entity variants a room can hold.

use crate::cat::Cat;
use crate::clips::ClipTable;
use crate::events::Action;
use lh_core::surface::Surface;

/// Animation playback position: current frame index plus the clock tick at
/// which the cursor next advances.
///
/// Advancement is wall-clock gated at a fixed rate, independent of frame
/// rate. A slow frame is caught up with a single step, never a catch-up
/// loop: if more than one interval elapses between frames, exactly one
/// cursor step occurs.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimCursor {
    pub frame: usize,
    pub deadline: f64,
}

impl AnimCursor {
    /// Rewind to frame zero and force the gate open on the next check.
    /// Called on every state or facing change.
    pub fn reset(&mut self) {
        self.frame = 0;
        self.deadline = 0.0;
    }

    /// Check the clock gate. When it fires, the deadline is pushed one
    /// interval ahead and the caller advances (or redirects) the frame.
    pub fn gate(&mut self, clock_ticks: f64, interval: f64) -> bool {
        if clock_ticks > self.deadline {
            self.deadline = clock_ticks + interval;
            true
        } else {
            false
        }
    }

    /// Gate plus the default wrapping advance.
    pub fn step(&mut self, clock_ticks: f64, interval: f64, clip_len: usize) {
        if self.gate(clock_ticks, interval) {
            self.frame = (self.frame + 1) % clip_len;
        }
    }
}

/// Closed variant set of the entities a room owns besides its player.
/// Rooms iterate these homogeneously for advance/render and match on the
/// concrete variant for couplings like the cat proximity trigger.
#[derive(Debug)]
pub enum EnvEntity {
    Cat(Cat),
}

impl EnvEntity {
    pub fn advance(
        &mut self,
        elapsed_ticks: f64,
        clock_ticks: f64,
        actions: &[Action],
        clips: &ClipTable,
        surface: &mut dyn Surface,
    ) {
        match self {
            Self::Cat(cat) => cat.advance(elapsed_ticks, clock_ticks, actions, clips, surface),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_is_gated_by_deadline() {
        let mut cursor = AnimCursor::default();
        cursor.step(10.0, 60.0, 4);
        assert_eq!(cursor.frame, 1);
        assert_eq!(cursor.deadline, 70.0);

        // Before the deadline nothing moves.
        cursor.step(50.0, 60.0, 4);
        assert_eq!(cursor.frame, 1);
    }

    #[test]
    fn step_wraps_at_clip_length() {
        let mut cursor = AnimCursor::default();
        let mut clock = 0.0;
        for expected in [1, 2, 0, 1] {
            clock += 100.0;
            cursor.step(clock, 60.0, 3);
            assert_eq!(cursor.frame, expected);
        }
    }

    #[test]
    fn long_gap_advances_a_single_step() {
        let mut cursor = AnimCursor::default();
        cursor.step(10.0, 60.0, 8);
        // Ten intervals pass; the cursor still moves by exactly one frame.
        cursor.step(610.0, 60.0, 8);
        assert_eq!(cursor.frame, 2);
    }

    #[test]
    fn reset_forces_gate_open() {
        let mut cursor = AnimCursor::default();
        cursor.step(10.0, 60.0, 4);
        cursor.reset();
        assert_eq!(cursor.frame, 0);
        assert!(cursor.gate(10.0, 60.0));
    }

    #[test]
    fn cursor_returns_to_start_after_len_advances() {
        let len = 9;
        let mut cursor = AnimCursor::default();
        let mut clock = 0.0;
        for _ in 0..len {
            clock += 100.0;
            cursor.step(clock, 60.0, len);
        }
        assert_eq!(cursor.frame, 0);
    }
}

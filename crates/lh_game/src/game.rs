//! Top-level orchestration: the ordered room list, the raw input queue, and
//! the per-frame cycle of drain -> translate -> advance -> transition.

use crate::clips::ClipTable;
use crate::events;
use crate::room::{Room, RoomExit};
use lh_core::input::{KeyboardState, RawInput};
use lh_core::surface::Surface;
use lh_core::time::FrameClock;
use std::collections::VecDeque;

#[derive(Debug)]
pub struct Game {
    rooms: Vec<Room>,
    current_room: usize,
    pending: VecDeque<RawInput>,
    keyboard: KeyboardState,
    clock: FrameClock,
    clips: ClipTable,
}

impl Game {
    pub fn new(clips: ClipTable, rooms: Vec<Room>) -> Result<Self, String> {
        if rooms.is_empty() {
            return Err("Game construction failed: room list is empty".to_string());
        }
        Ok(Self {
            rooms,
            current_room: 0,
            pending: VecDeque::new(),
            keyboard: KeyboardState::new(),
            clock: FrameClock::new(),
            clips,
        })
    }

    pub fn current_room(&self) -> usize {
        self.current_room
    }

    #[allow(dead_code)]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Host enqueue. Records arrive at arbitrary times between frames and
    /// are drained wholesale, in order, at the start of the next step.
    pub fn push_input(&mut self, input: RawInput) {
        self.pending.push_back(input);
    }

    /// One host-driven frame: measure the wall clock, then step. Entry point
    /// for hosts without their own time base; fixed-step hosts call [`step`].
    ///
    /// [`step`]: Game::step
    #[allow(dead_code)]
    pub fn frame(&mut self, surface: &mut dyn Surface) {
        self.clock.begin_frame();
        let elapsed = self.clock.elapsed_ticks;
        let clock_ticks = self.clock.clock_ticks;
        self.step(elapsed, clock_ticks, surface);
    }

    /// One simulation step with an explicit time base.
    pub fn step(&mut self, elapsed_ticks: f64, clock_ticks: f64, surface: &mut dyn Surface) {
        while let Some(input) = self.pending.pop_front() {
            self.keyboard.apply(input);
        }
        let batch = events::translate(&self.keyboard);

        let exit = self.rooms[self.current_room].advance(
            elapsed_ticks,
            clock_ticks,
            &batch,
            &self.clips,
            surface,
        );
        self.apply_exit(exit);
    }

    fn apply_exit(&mut self, exit: Option<RoomExit>) {
        match exit {
            Some(RoomExit::GoLeft) => {
                if self.current_room > 0 {
                    self.current_room -= 1;
                    log::info!("entered room {}", self.current_room);
                } else {
                    // Clamp: the first room's outer side should be configured
                    // as non-connecting, so this only fires on a bad layout.
                    log::warn!("go_left from room 0 ignored");
                }
            }
            Some(RoomExit::GoRight) => {
                if self.current_room + 1 < self.rooms.len() {
                    self.current_room += 1;
                    log::info!("entered room {}", self.current_room);
                } else {
                    log::warn!("go_right from last room ignored");
                }
            }
            Some(RoomExit::LoopLeft) | Some(RoomExit::LoopRight) | None => {}
        }
    }
}

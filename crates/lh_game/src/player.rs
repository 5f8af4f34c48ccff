//! The controllable character: input-driven walk/idle state plus vertical
//! jump/gravity physics.

use crate::clips::{ClipTable, EntityKind, Facing};
use crate::entity::AnimCursor;
use crate::events::Action;
use glam::Vec2;
use lh_core::surface::Surface;

/// Horizontal displacement per tick while walking.
pub const WALK_SPEED: f32 = 0.9;
/// Downward acceleration per tick while airborne (y grows downward).
const GRAVITY_PER_TICK: f32 = 0.05;
/// Initial vertical velocity of a jump.
const JUMP_VELOCITY: f32 = -10.0;
/// Idle snaps x to this grid so the character settles on a sprite square.
const SNAP_GRID: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Idle,
    Walk,
}

impl PlayerState {
    fn clip_name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Walk => "walk",
        }
    }
}

#[derive(Debug)]
pub struct Player {
    pub position: Vec2,
    /// Resting y coordinate. `position.y < floor` is the airborne condition.
    pub floor: f32,
    pub facing: Facing,
    pub state: PlayerState,
    pub anim: AnimCursor,
    vertical_velocity: f32,
    /// Nonzero while a jump is in flight; cleared on landing. Gates the
    /// jump action so it is single-shot per ground contact.
    jump_count: u8,
    pub walk_speed: f32,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            floor: y,
            facing: Facing::Right,
            state: PlayerState::Idle,
            anim: AnimCursor::default(),
            vertical_velocity: 0.0,
            jump_count: 0,
            walk_speed: WALK_SPEED,
        }
    }

    #[allow(dead_code)]
    pub fn is_airborne(&self) -> bool {
        self.jump_count != 0
    }

    /// One frame step: consume the action batch, run physics, advance the
    /// animation cursor, render. Order is load-bearing -- the batch is fully
    /// consumed before physics runs.
    pub fn advance(
        &mut self,
        elapsed_ticks: f64,
        clock_ticks: f64,
        actions: &[Action],
        clips: &ClipTable,
        surface: &mut dyn Surface,
    ) {
        self.consume(actions);
        self.step_physics(elapsed_ticks as f32);

        let clip = clips.clip(EntityKind::Player, self.facing, self.state.clip_name());
        self.anim.step(
            clock_ticks,
            clips.frame_interval(EntityKind::Player),
            clip.len(),
        );
        surface.draw_image(&clip.frames[self.anim.frame], self.position.x, self.position.y);
    }

    fn consume(&mut self, actions: &[Action]) {
        for &action in actions {
            match action {
                Action::Right => {
                    if !(self.facing == Facing::Right && self.state == PlayerState::Walk) {
                        self.state = PlayerState::Walk;
                        self.facing = Facing::Right;
                        self.anim.reset();
                    }
                }
                Action::Left => {
                    if !(self.facing == Facing::Left && self.state == PlayerState::Walk) {
                        self.state = PlayerState::Walk;
                        self.facing = Facing::Left;
                        self.anim.reset();
                    }
                }
                Action::Idle => {
                    if self.state != PlayerState::Idle {
                        self.position.x = snap_to_grid(self.position.x);
                        self.state = PlayerState::Idle;
                        self.anim.reset();
                    }
                }
                Action::Jump => {
                    if self.jump_count == 0 {
                        self.jump_count = 1;
                        self.vertical_velocity = JUMP_VELOCITY;
                    }
                }
            }
        }
    }

    fn step_physics(&mut self, elapsed: f32) {
        // Grounded unless a fresh jump is carrying upward velocity.
        if self.position.y >= self.floor && self.vertical_velocity >= 0.0 {
            self.position.y = self.floor;
            self.vertical_velocity = 0.0;
            self.jump_count = 0;
        } else {
            self.vertical_velocity += GRAVITY_PER_TICK;
            let projected = self.position.y + self.vertical_velocity * elapsed;
            if projected >= self.floor {
                // Never overshoot below the floor; land exactly on it.
                self.position.y = self.floor;
                self.vertical_velocity = 0.0;
                self.jump_count = 0;
            } else {
                self.position.y = projected;
            }
        }

        if self.state == PlayerState::Walk {
            self.position.x += self.walk_speed * self.facing.sign() * elapsed;
        }
    }
}

/// Round x to the nearest multiple of the snap grid, half rounding up.
fn snap_to_grid(x: f32) -> f32 {
    let rem = x.rem_euclid(SNAP_GRID);
    if rem < SNAP_GRID / 2.0 {
        x - rem
    } else {
        x + (SNAP_GRID - rem)
    }
}

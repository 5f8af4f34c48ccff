//! The hallway cat. It consumes no input actions; the room nudges it into
//! its `look` state when the player stops nearby, and the look clip plays
//! through exactly once before falling back to idle.

use crate::clips::{ClipTable, EntityKind, Facing};
use crate::entity::AnimCursor;
use crate::events::Action;
use glam::Vec2;
use lh_core::surface::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatState {
    Idle,
    Look,
    // Clips load and validate, but nothing triggers these yet.
    #[allow(dead_code)]
    Wake,
    #[allow(dead_code)]
    Walk,
}

impl CatState {
    fn clip_name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Look => "look",
            Self::Wake => "wake",
            Self::Walk => "walk",
        }
    }
}

#[derive(Debug)]
pub struct Cat {
    pub position: Vec2,
    pub facing: Facing,
    pub state: CatState,
    pub anim: AnimCursor,
    /// Set when the look clip is two frames from wrapping; the next gated
    /// advance falls back to idle instead of looping.
    loop_pending: bool,
}

impl Cat {
    pub fn new(x: f32, y: f32, facing: Facing) -> Self {
        Self {
            position: Vec2::new(x, y),
            facing,
            state: CatState::Idle,
            anim: AnimCursor::default(),
            loop_pending: false,
        }
    }

    /// Room trigger: start the look animation. Only honored from idle so an
    /// in-flight look completes instead of restarting every frame the player
    /// stands on the trigger column.
    pub fn begin_look(&mut self) {
        if self.state == CatState::Idle {
            self.state = CatState::Look;
            self.anim.reset();
            self.loop_pending = false;
        }
    }

    /// One frame step. The action batch is accepted for signature parity with
    /// the player but deliberately ignored; cats react to position, not keys.
    pub fn advance(
        &mut self,
        _elapsed_ticks: f64,
        clock_ticks: f64,
        _actions: &[Action],
        clips: &ClipTable,
        surface: &mut dyn Surface,
    ) {
        let interval = clips.frame_interval(EntityKind::Cat);
        let clip_len = clips
            .clip(EntityKind::Cat, self.facing, self.state.clip_name())
            .len();

        if self.anim.gate(clock_ticks, interval) {
            if self.loop_pending && self.state == CatState::Look {
                self.state = CatState::Idle;
                self.anim.frame = 0;
                self.loop_pending = false;
            } else {
                self.anim.frame = (self.anim.frame + 1) % clip_len;
            }
        }
        if self.state == CatState::Look {
            let look_len = clips.clip(EntityKind::Cat, self.facing, "look").len();
            if self.anim.frame + 2 == look_len {
                self.loop_pending = true;
            }
        }

        let clip = clips.clip(EntityKind::Cat, self.facing, self.state.clip_name());
        surface.draw_image(&clip.frames[self.anim.frame], self.position.x, self.position.y);
    }
}

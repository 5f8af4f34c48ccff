//! One room of the hallway: an owned player, zero or more environment
//! entities, wall rendering, and the edge sensors that produce exit signals.
//!
//! Each room keeps its own player state between visits. The sensor nudges
//! below reposition a room's player as it leaves, so re-entering the room
//! later finds the character just inside the edge it last exited through.

use crate::cat::Cat;
use crate::clips::ClipTable;
use crate::entity::EnvEntity;
use crate::events::Action;
use crate::player::Player;
use lh_core::surface::{Color, Surface};

pub const SURFACE_WIDTH: f32 = 1280.0;
pub const SURFACE_HEIGHT: f32 = 720.0;
pub const WALL_LEFT: f32 = 100.0;
pub const WALL_RIGHT: f32 = SURFACE_WIDTH - 100.0;
pub const WALL_TOP: f32 = 100.0;
pub const WALL_BOTTOM: f32 = SURFACE_HEIGHT - 100.0;
/// Exit sensors sit this far outside the visible walls, so a character is
/// fully off-screen before a transition fires.
pub const SENSOR_MARGIN: f32 = 100.0;

const LEFT_SENSOR: f32 = WALL_LEFT - SENSOR_MARGIN;
const RIGHT_SENSOR: f32 = WALL_RIGHT + SENSOR_MARGIN;

const WALL_COLOR: Color = [0.173, 0.059, 0.133, 1.0]; // #2c0f22
const BACKDROP_COLOR: Color = [0.373, 0.475, 0.573, 1.0]; // #5f7992

/// Signal returned from a room's frame step. `Loop*` are cosmetic wraps
/// within the same room; `Go*` request an actual room change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomExit {
    GoLeft,
    GoRight,
    LoopLeft,
    LoopRight,
}

#[derive(Debug)]
pub struct Room {
    pub player: Player,
    pub environment: Vec<EnvEntity>,
    pub connects_left: bool,
    pub connects_right: bool,
    pub renders_walls: bool,
}

impl Room {
    pub fn new(player: Player) -> Self {
        Self {
            player,
            environment: Vec::new(),
            connects_left: false,
            connects_right: false,
            renders_walls: true,
        }
    }

    /// One frame step. Draw order is significant: backdrop and horizontal
    /// strips first, then entities, then the vertical strips so walls occlude
    /// anything that wandered past them.
    pub fn advance(
        &mut self,
        elapsed_ticks: f64,
        clock_ticks: f64,
        actions: &[Action],
        clips: &ClipTable,
        surface: &mut dyn Surface,
    ) -> Option<RoomExit> {
        if self.renders_walls {
            surface.fill_rect(0.0, 0.0, SURFACE_WIDTH, SURFACE_HEIGHT, BACKDROP_COLOR);
            surface.fill_rect(0.0, 0.0, SURFACE_WIDTH, WALL_TOP, WALL_COLOR);
            surface.fill_rect(
                0.0,
                WALL_BOTTOM,
                SURFACE_WIDTH,
                SURFACE_HEIGHT - WALL_BOTTOM,
                WALL_COLOR,
            );
        }

        for entity in &mut self.environment {
            entity.advance(elapsed_ticks, clock_ticks, actions, clips, surface);
        }
        self.player
            .advance(elapsed_ticks, clock_ticks, actions, clips, surface);

        if self.renders_walls {
            surface.fill_rect(0.0, 0.0, WALL_LEFT, SURFACE_HEIGHT, WALL_COLOR);
            surface.fill_rect(
                WALL_RIGHT,
                0.0,
                SURFACE_WIDTH - WALL_RIGHT,
                SURFACE_HEIGHT,
                WALL_COLOR,
            );
        }

        self.check_cat_triggers();
        self.check_sensors()
    }

    /// A cat starts looking when the player settles on its column.
    fn check_cat_triggers(&mut self) {
        let player_column = self.player.position.x.round();
        for entity in &mut self.environment {
            match entity {
                EnvEntity::Cat(cat) => {
                    if cat.position.x.round() == player_column {
                        cat.begin_look();
                    }
                }
            }
        }
    }

    fn check_sensors(&mut self) -> Option<RoomExit> {
        let x = self.player.position.x;
        if x < LEFT_SENSOR {
            if self.connects_left {
                // Park this room's player just inside its left edge for the
                // next visit, then hand off.
                self.player.position.x += SENSOR_MARGIN;
                Some(RoomExit::GoLeft)
            } else {
                self.player.position.x = WALL_RIGHT;
                Some(RoomExit::LoopLeft)
            }
        } else if x > RIGHT_SENSOR {
            if self.connects_right {
                self.player.position.x -= SENSOR_MARGIN;
                Some(RoomExit::GoRight)
            } else {
                self.player.position.x = WALL_LEFT;
                Some(RoomExit::LoopRight)
            }
        } else {
            None
        }
    }

    #[allow(dead_code)]
    pub fn cats(&self) -> impl Iterator<Item = &Cat> {
        self.environment.iter().map(|entity| match entity {
            EnvEntity::Cat(cat) => cat,
        })
    }
}

//! Player entity and state.

use glam::Vec2;
use hopper_physics::{JumpPhase, MovementConfig, MovementState, Rect};
use serde::{Deserialize, Serialize};

/// Unique identifier for entities.
pub type EntityId = u32;

/// A player in the game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Unique player ID.
    pub id: EntityId,

    /// Movement physics state.
    pub movement: MovementState,
}

impl Player {
    /// Create a new player with its visual box's top-left corner at `spawn`.
    pub fn new(id: EntityId, spawn: Vec2, config: &MovementConfig) -> Self {
        Self {
            id,
            movement: MovementState::new(spawn, config),
        }
    }

    /// The player's visual bounding box.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.movement.rect
    }

    /// The collision hitbox for the current squash factor.
    pub fn hitbox(&self, config: &MovementConfig) -> Rect {
        self.movement.hitbox(config)
    }

    /// Current velocity in pixels per tick.
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.movement.velocity
    }

    /// Whether the player is standing on terrain.
    #[inline]
    pub fn on_floor(&self) -> bool {
        self.movement.on_floor
    }

    /// Cumulative squash factor, for host-side sprite scaling.
    #[inline]
    pub fn scaling(&self) -> f32 {
        self.movement.scaling
    }

    /// Current vertical phase.
    #[inline]
    pub fn phase(&self) -> JumpPhase {
        self.movement.jump.phase()
    }

    /// One-line numeric status for debug display.
    pub fn status_line(&self) -> String {
        let rect = self.movement.rect;
        let v = self.movement.velocity;
        format!(
            "pos: ({:3.0},{:3.0}) v: ({:4.1},{:4.1}) floor: {} scale: {:.2}",
            rect.min.x, rect.min.y, v.x, v.y, self.movement.on_floor, self.movement.scaling
        )
    }
}

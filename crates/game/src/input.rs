//! Player input handling.
//!
//! This module converts the host's raw per-tick input snapshot into a
//! command for the physics system.

use hopper_physics::PlayerCommand;
use serde::{Deserialize, Serialize};

/// Raw player input for a single tick.
///
/// This is the level state of the host's controls, sampled once per tick.
/// It gets resolved to a [`PlayerCommand`] for the physics step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerInput {
    /// Move-left control is down.
    pub move_left: bool,

    /// Move-right control is down.
    pub move_right: bool,

    /// Jump control is down.
    pub jump_held: bool,
}

impl PlayerInput {
    /// Resolve to a physics command.
    ///
    /// Right wins when both directions are held at once.
    pub fn to_command(&self) -> PlayerCommand {
        let move_x = if self.move_right {
            1.0
        } else if self.move_left {
            -1.0
        } else {
            0.0
        };

        PlayerCommand {
            move_x,
            jump_held: self.jump_held,
        }
    }

    /// Check if any horizontal control is down.
    pub fn has_movement(&self) -> bool {
        self.move_left || self.move_right
    }
}

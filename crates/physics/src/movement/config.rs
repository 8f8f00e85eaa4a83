//! Movement configuration constants.
//!
//! All movement parameters are grouped here for easy tuning. The simulation
//! has no delta time: distances are pixels, velocities are pixels per tick,
//! and accelerations are pixels per tick squared.
//!
//! Values are plain numbers with no validation; out-of-range settings (say,
//! a negative friction) produce strange but well-defined motion.

use serde::{Deserialize, Serialize};

/// Configuration for the platformer movement step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementConfig {
    // ========================================================================
    // Integration
    // ========================================================================
    /// Downward acceleration applied every airborne tick.
    pub gravity: f32,

    /// Fraction of horizontal speed shed per tick while not accelerating in
    /// the direction of travel.
    pub friction: f32,

    /// Horizontal acceleration while a direction is held.
    pub acceleration: f32,

    /// Horizontal speed cap, both directions.
    pub max_vx: f32,

    /// Falling speed cap. Rising speed is not capped.
    pub terminal_velocity_y: f32,

    // ========================================================================
    // Jumping
    // ========================================================================
    /// Upward speed granted at jump initiation.
    pub jump_speed: f32,

    /// Ascent speed cap applied once the jump input is released.
    pub jump_hover_speed: f32,

    // ========================================================================
    // Squash
    // ========================================================================
    /// Factor multiplied into the player's scale on each ceiling contact.
    pub scaling_factor_on_hit: f32,

    // ========================================================================
    // Body
    // ========================================================================
    /// Width of the visual box.
    pub player_width: f32,

    /// Height of the visual box.
    pub player_height: f32,

    /// Hitbox inset from the visual box's top edge, before scaling.
    pub margin_top: f32,

    /// Hitbox inset from the left edge, before scaling.
    pub margin_left: f32,

    /// Hitbox inset from the right edge, before scaling.
    pub margin_right: f32,

    /// Hitbox inset from the bottom edge, before scaling.
    pub margin_bottom: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            gravity: 0.8,
            friction: 0.08,
            acceleration: 0.3,
            max_vx: 5.0,
            terminal_velocity_y: 9.0,

            jump_speed: 12.0,
            jump_hover_speed: 3.0,

            scaling_factor_on_hit: 0.9,

            player_width: 32.0,
            player_height: 32.0,
            // Feet flush with the visual box so the sprite stands on terrain.
            margin_top: 6.0,
            margin_left: 6.0,
            margin_right: 6.0,
            margin_bottom: 0.0,
        }
    }
}

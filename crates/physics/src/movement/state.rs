//! Movement state and input commands.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::collision::Rect;

use super::config::MovementConfig;
use super::jump::JumpState;

/// Complete physics state for one player.
///
/// The rect is the visual box, the thing a host would draw a sprite into.
/// Collision and floor tests never use it directly; they use the hitbox, the
/// visual box inset by the configured margins scaled by the current squash
/// factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementState {
    /// Visual bounding box.
    pub rect: Rect,

    /// Velocity in pixels per tick. Negative y is up.
    pub velocity: Vec2,

    /// Floor contact, recomputed from geometry at the start of every tick.
    pub on_floor: bool,

    /// Jump phase machine.
    pub jump: JumpState,

    /// Cumulative squash factor. Starts at 1.0 and shrinks with each ceiling
    /// contact; hosts also use it to scale the sprite.
    pub scaling: f32,
}

impl MovementState {
    /// Create a state at rest with the configured body size, visual top-left
    /// corner at `pos`.
    pub fn new(pos: Vec2, config: &MovementConfig) -> Self {
        Self {
            rect: Rect::new(
                pos.x,
                pos.y,
                pos.x + config.player_width,
                pos.y + config.player_height,
            ),
            velocity: Vec2::ZERO,
            on_floor: false,
            jump: JumpState::new(),
            scaling: 1.0,
        }
    }

    /// Effective inset for one margin at the current squash factor.
    ///
    /// Rounded up so a squashed hitbox keeps integer-aligned edges; floor
    /// detection compares edge positions exactly.
    #[inline]
    fn inset(&self, margin: f32) -> f32 {
        (margin * self.scaling).ceil()
    }

    /// The collision hitbox: the visual rect inset by the scaled margins.
    pub fn hitbox(&self, config: &MovementConfig) -> Rect {
        Rect::new(
            self.rect.min.x + self.inset(config.margin_left),
            self.rect.min.y + self.inset(config.margin_top),
            self.rect.max.x - self.inset(config.margin_right),
            self.rect.max.y - self.inset(config.margin_bottom),
        )
    }

    /// Place the hitbox's left edge at `x`.
    pub fn set_left(&mut self, x: f32, config: &MovementConfig) {
        self.rect.set_left(x - self.inset(config.margin_left));
    }

    /// Place the hitbox's right edge at `x`.
    pub fn set_right(&mut self, x: f32, config: &MovementConfig) {
        self.rect.set_right(x + self.inset(config.margin_right));
    }

    /// Place the hitbox's top edge at `y`.
    pub fn set_top(&mut self, y: f32, config: &MovementConfig) {
        self.rect.set_top(y - self.inset(config.margin_top));
    }

    /// Place the hitbox's bottom edge at `y`.
    pub fn set_bottom(&mut self, y: f32, config: &MovementConfig) {
        self.rect.set_bottom(y + self.inset(config.margin_bottom));
    }

    /// Apply one squash step: shrink the visual box and accumulate the
    /// factor.
    pub fn apply_squash(&mut self, config: &MovementConfig) {
        self.rect.scale(config.scaling_factor_on_hit);
        self.scaling *= config.scaling_factor_on_hit;
    }
}

/// One tick of resolved player intent.
///
/// `move_x` is the horizontal axis resolved to -1, 0, or +1; `jump_held` is
/// the raw level of the jump input. Edge detection happens inside the jump
/// machine, not here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerCommand {
    /// Horizontal input axis.
    pub move_x: f32,
    /// Jump input level.
    pub jump_held: bool,
}

impl PlayerCommand {
    /// True when some horizontal input is active.
    #[inline]
    pub fn has_movement(&self) -> bool {
        self.move_x != 0.0
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_uses_configured_body() {
        let config = MovementConfig::default();
        let state = MovementState::new(Vec2::new(10.0, -40.0), &config);

        assert_eq!(state.rect, Rect::new(10.0, -40.0, 42.0, -8.0));
        assert_eq!(state.velocity, Vec2::ZERO);
        assert_eq!(state.scaling, 1.0);
        assert!(!state.on_floor);
    }

    #[test]
    fn test_hitbox_insets() {
        let config = MovementConfig::default();
        let state = MovementState::new(Vec2::ZERO, &config);

        // Margins 6/6/6/0 on a 32x32 body.
        assert_eq!(state.hitbox(&config), Rect::new(6.0, 6.0, 26.0, 32.0));
    }

    #[test]
    fn test_edge_setters_place_hitbox_edges() {
        let config = MovementConfig::default();
        let mut state = MovementState::new(Vec2::ZERO, &config);

        state.set_left(100.0, &config);
        assert_eq!(state.hitbox(&config).min.x, 100.0);

        state.set_right(90.0, &config);
        assert_eq!(state.hitbox(&config).max.x, 90.0);

        state.set_top(50.0, &config);
        assert_eq!(state.hitbox(&config).min.y, 50.0);

        state.set_bottom(75.0, &config);
        assert_eq!(state.hitbox(&config).max.y, 75.0);
    }

    #[test]
    fn test_squash_shrinks_and_accumulates() {
        let config = MovementConfig::default();
        let mut state = MovementState::new(Vec2::ZERO, &config);

        state.apply_squash(&config);
        assert!((state.scaling - 0.9).abs() < 1e-6);
        assert!((state.rect.width() - 28.8).abs() < 1e-4);

        state.apply_squash(&config);
        assert!((state.scaling - 0.81).abs() < 1e-6);
    }

    #[test]
    fn test_squashed_margins_round_up() {
        let config = MovementConfig::default();
        let mut state = MovementState::new(Vec2::ZERO, &config);
        state.apply_squash(&config);

        // 6 * 0.9 = 5.4, rounded up to 6 so edges stay integer aligned.
        let hb = state.hitbox(&config);
        assert_eq!(hb.min.x, state.rect.min.x + 6.0);
        assert_eq!(hb.max.y, state.rect.max.y);
    }
}

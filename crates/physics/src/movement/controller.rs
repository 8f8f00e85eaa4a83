//! The per-tick movement step.
//!
//! This is the main entry point for platformer movement. One `update` call
//! advances a player by one tick against the static tile grid.
//!
//! The phase order inside a tick is load-bearing:
//!
//! 1. Floor detection runs on the previous tick's resting position, before
//!    anything moves.
//! 2. The X axis is moved and resolved before the Y axis, so a diagonal
//!    approach into a corner settles against the wall first instead of
//!    tunneling or snapping to the wrong face.
//! 3. Gravity lands between the Y move and the Y resolution, so the snap
//!    sees the velocity the player actually carried into the tile.

use serde::{Deserialize, Serialize};

use crate::collision::TileGrid;

use super::config::MovementConfig;
use super::state::{MovementState, PlayerCommand};

/// Residual speed kept after a leftward wall snap.
///
/// Keeps the next tick's overlap and floor scans off the freshly shared
/// edge. The exact value is part of the movement contract.
const LEFT_WALL_RESIDUAL_VX: f32 = -0.01;

/// Horizontal world edges for the optional boundary clamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    /// Left edge.
    pub left: f32,
    /// Right edge.
    pub right: f32,
}

/// Platformer movement controller.
///
/// Holds the tuning configuration and advances [`MovementState`]s through a
/// tile grid. Stateless apart from the config, so one controller can serve
/// any number of players.
///
/// # Example
///
/// ```ignore
/// let controller = PlayerController::new(MovementConfig::default());
/// let mut state = MovementState::new(spawn, &controller.config);
///
/// // Each tick:
/// controller.update(&mut state, &command, &grid, None);
/// ```
#[derive(Debug, Clone)]
pub struct PlayerController {
    /// Movement configuration.
    pub config: MovementConfig,
}

impl PlayerController {
    /// Create a controller with the given configuration.
    pub fn new(config: MovementConfig) -> Self {
        Self { config }
    }

    /// Create a controller with default configuration.
    pub fn with_default_config() -> Self {
        Self::new(MovementConfig::default())
    }

    /// Advance one player by one tick.
    ///
    /// # Arguments
    ///
    /// * `state` - the player's movement state (will be modified)
    /// * `command` - resolved input for this tick
    /// * `grid` - static terrain
    /// * `bounds` - optional horizontal world edges to clamp against
    pub fn update(
        &self,
        state: &mut MovementState,
        command: &PlayerCommand,
        grid: &TileGrid,
        bounds: Option<WorldBounds>,
    ) {
        self.check_floor(state, grid);
        self.apply_horizontal_input(state, command);
        state.velocity.y =
            state
                .jump
                .update(command.jump_held, state.on_floor, state.velocity.y, &self.config);

        state.rect.move_x(state.velocity.x);
        self.resolve_x(state, grid, bounds);

        state.rect.move_y(state.velocity.y);
        self.apply_gravity(state);
        self.resolve_y(state, grid);
    }

    // ========================================================================
    // Floor Detection
    // ========================================================================

    /// A player is on the floor iff some tile's horizontal span touches the
    /// hitbox's span and the hitbox bottom sits exactly on the tile top.
    ///
    /// The y comparison is exact, not a tolerance band: a resting bottom edge
    /// only ever comes from a prior Y resolution snapping it onto a tile top,
    /// so the equality is reachable and stable. The scan stops at the first
    /// matching tile.
    fn check_floor(&self, state: &mut MovementState, grid: &TileGrid) {
        let hb = state.hitbox(&self.config);
        state.on_floor = grid.iter().any(|t| {
            hb.max.x >= t.x && hb.min.x <= t.x + grid.tile_width() && hb.max.y == t.y
        });
    }

    // ========================================================================
    // Horizontal Integration
    // ========================================================================

    fn apply_horizontal_input(&self, state: &mut MovementState, command: &PlayerCommand) {
        let dvx = command.move_x * self.config.acceleration;

        // Friction applies unless accelerating in the direction of travel,
        // so a reversal gets both friction and acceleration in one tick.
        if dvx * state.velocity.x <= 0.0 {
            state.velocity.x *= 1.0 - self.config.friction;
        }
        state.velocity.x += dvx;

        state.velocity.x = state
            .velocity
            .x
            .clamp(-self.config.max_vx, self.config.max_vx);
    }

    // ========================================================================
    // X Collision Resolution
    // ========================================================================

    /// Snap out of any tile the horizontal move drove the hitbox into.
    ///
    /// The hitbox is sampled once, before the scan: every tile the moved
    /// hitbox landed in gets its snap applied, in grid order, so the last
    /// overlapping tile decides the final edge. A rightward snap zeroes the
    /// velocity, which also stops the scan from re-snapping; a leftward snap
    /// keeps the small residual instead.
    fn resolve_x(&self, state: &mut MovementState, grid: &TileGrid, bounds: Option<WorldBounds>) {
        let hb = state.hitbox(&self.config);
        for tile in grid.iter() {
            let tile_rect = grid.tile_rect(tile);
            if !hb.overlaps(&tile_rect) {
                continue;
            }
            if state.velocity.x > 0.0 {
                state.set_right(tile_rect.min.x, &self.config);
                state.velocity.x = 0.0;
            } else if state.velocity.x < 0.0 {
                state.set_left(tile_rect.max.x, &self.config);
                state.velocity.x = LEFT_WALL_RESIDUAL_VX;
            }
        }

        // World edges clamp the visual box, not the hitbox, and bounce.
        if let Some(bounds) = bounds {
            if state.rect.max.x > bounds.right {
                state.rect.set_right(bounds.right);
                state.velocity.x = -state.velocity.x;
            } else if state.rect.min.x < bounds.left {
                state.rect.set_left(bounds.left);
                state.velocity.x = -state.velocity.x;
            }
        }
    }

    // ========================================================================
    // Gravity
    // ========================================================================

    fn apply_gravity(&self, state: &mut MovementState) {
        if state.on_floor {
            return;
        }
        state.velocity.y += self.config.gravity;
        if state.velocity.y > self.config.terminal_velocity_y {
            state.velocity.y = self.config.terminal_velocity_y;
        }
    }

    // ========================================================================
    // Y Collision Resolution
    // ========================================================================

    /// Snap out of any tile the vertical move drove the hitbox into.
    ///
    /// Falling contact lands the hitbox bottom exactly on the tile top, which
    /// is what the next tick's floor scan keys on. Rising contact snaps the
    /// head under the tile and squashes the player. The hitbox is re-read per
    /// tile here because the squash reshapes it.
    fn resolve_y(&self, state: &mut MovementState, grid: &TileGrid) {
        for tile in grid.iter() {
            let tile_rect = grid.tile_rect(tile);
            if !state.hitbox(&self.config).overlaps(&tile_rect) {
                continue;
            }
            if state.velocity.y > 0.0 {
                state.set_bottom(tile_rect.min.y, &self.config);
            } else {
                state.set_top(tile_rect.max.y, &self.config);
                state.apply_squash(&self.config);
                log::debug!("ceiling contact, scaling now {:.3}", state.scaling);
            }
            state.velocity.y = 0.0;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

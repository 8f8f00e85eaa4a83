//! Hopper Physics Engine
//!
//! A deterministic 2D platformer physics core. All motion is integrated in
//! fixed ticks with no delta time, so the same inputs always produce the same
//! trajectory.
//!
//! # Architecture
//!
//! The engine is split into two systems:
//!
//! - **Collision**: axis-aligned rectangles and the static tile grid they are
//!   tested against
//! - **Movement**: per-tick integration (friction, gravity, velocity caps),
//!   the jump state machine, and two-axis collision response
//!
//! # Design Principles
//!
//! 1. **Determinism**: one tick is one update, no wall-clock anywhere
//! 2. **Explicit state**: everything a player is lives in [`MovementState`];
//!    the controller itself holds only configuration
//! 3. **Axis separation**: X is moved and resolved before Y, which keeps
//!    corner contacts unambiguous

pub mod collision;
pub mod movement;

// Re-export commonly used types
pub use collision::{Rect, Tile, TileGrid};
pub use movement::{
    JumpPhase, JumpState, MovementConfig, MovementState, PlayerCommand, PlayerController,
    WorldBounds,
};

//! Hopper Game Logic
//!
//! This crate assembles the physics core into a runnable game simulation:
//!
//! - Per-tick input snapshots and their conversion to physics commands
//! - Level loading from character tile maps
//! - The player entity
//! - The deterministic fixed-step simulation
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                      Game Simulation                       │
//! │  ┌─────────┐    ┌───────────┐    ┌──────────────────────┐  │
//! │  │ Input   │───►│ Physics   │───►│ Game State           │  │
//! │  │ Snapshot│    │ (movement,│    │ (players, level,     │  │
//! │  └─────────┘    │ collision)│    │  tile grid)          │  │
//! │                 └───────────┘    └──────────────────────┘  │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! The simulation performs no drawing and reads no devices; a host feeds it
//! input snapshots and renders from the numeric state it exposes.

pub mod input;
pub mod level;
pub mod player;
pub mod simulation;

// Re-export main types
pub use input::PlayerInput;
pub use level::Level;
pub use player::{EntityId, Player};
pub use simulation::{Simulation, SimulationConfig};

// Re-export physics types for convenience
pub use hopper_physics::{
    JumpPhase, MovementConfig, MovementState, PlayerCommand, PlayerController, Rect, Tile,
    TileGrid, WorldBounds,
};

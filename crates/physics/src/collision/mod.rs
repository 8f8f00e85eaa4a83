//! Collision primitives for tile-based platformer movement.
//!
//! # Key Types
//!
//! - [`Rect`]: axis-aligned rectangle with edge setters and a strict overlap
//!   test
//! - [`Tile`] / [`TileGrid`]: static solid terrain loaded from a character
//!   map
//!
//! Terrain never moves. A grid is built once at load time and then shared
//! read-only by every movement update, so tile queries are plain ordered
//! scans with no broad phase.

mod grid;
mod rect;

pub use grid::{Tile, TileGrid};
pub use rect::Rect;

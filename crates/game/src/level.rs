//! Level loading and management.

use glam::Vec2;
use hopper_physics::{TileGrid, WorldBounds};
use serde::{Deserialize, Serialize};

/// Tile size of the bundled course, in pixels.
const COURSE_TILE_SIZE: f32 = 30.0;

/// World width of the bundled course, in pixels.
const COURSE_WIDTH: f32 = 320.0;

/// A game level: static terrain plus world metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    /// Level identifier.
    pub id: String,

    /// Static solid-tile terrain.
    pub grid: TileGrid,

    /// Optional horizontal world edges; the movement step clamps against
    /// them and bounces.
    pub bounds: Option<WorldBounds>,

    /// Player spawn position (top-left corner of the visual box).
    pub spawn: Vec2,
}

impl Level {
    /// Create an empty level with the given tile dimensions.
    pub fn new(id: &str, tile_width: f32, tile_height: f32) -> Self {
        Self {
            id: id.to_string(),
            grid: TileGrid::new(tile_width, tile_height),
            bounds: None,
            spawn: Vec2::ZERO,
        }
    }

    /// Build a level from rows of characters (`'x'` = solid).
    pub fn from_rows<S: AsRef<str>>(
        id: &str,
        rows: &[S],
        tile_width: f32,
        tile_height: f32,
    ) -> Self {
        Self {
            id: id.to_string(),
            grid: TileGrid::from_rows(rows, tile_width, tile_height),
            bounds: None,
            spawn: Vec2::ZERO,
        }
    }

    /// The bundled development course: scattered platforms, a staircase, and
    /// a full floor row, fenced by world bounds.
    pub fn test_course() -> Self {
        let rows = [
            "..........",
            "..........",
            "..xxxx....",
            "..........",
            ".x.......x",
            "..x.....xx",
            "...x...xxx",
            "......xxxx",
            "xxxxxxxxxx",
        ];

        let mut level = Self::from_rows("test_course", &rows, COURSE_TILE_SIZE, COURSE_TILE_SIZE);
        level.bounds = Some(WorldBounds {
            left: 0.0,
            right: COURSE_WIDTH,
        });
        level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_level() {
        let level = Level::new("empty", 30.0, 30.0);
        assert_eq!(level.id, "empty");
        assert!(level.grid.is_empty());
        assert!(level.bounds.is_none());
    }

    #[test]
    fn test_from_rows() {
        let level = Level::from_rows("tiny", &["x.", ".x"], 10.0, 10.0);
        assert_eq!(level.grid.len(), 2);
    }

    #[test]
    fn test_test_course() {
        let level = Level::test_course();
        // 4 + 2 + 3 + 4 + 4 cells in the platform rows, 10 in the floor row.
        assert_eq!(level.grid.len(), 27);
        assert!(level.bounds.is_some());
        assert_eq!(level.spawn, Vec2::ZERO);
    }
}

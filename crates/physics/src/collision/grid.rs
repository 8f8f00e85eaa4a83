//! Static tile terrain.
//!
//! Terrain is a flat set of fixed-size solid tiles. A grid is built once at
//! load time, usually from a row-major character map, and never mutated
//! afterwards: the whole simulation tick reads it as shared immutable state.

use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// Character marking a solid cell in a tile map row.
const SOLID_MARKER: char = 'x';

/// A single solid tile, identified by its top-left corner.
///
/// Tiles carry no size of their own; the owning [`TileGrid`] derives each
/// tile's rectangle from its shared tile dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    /// World x of the tile's left edge.
    pub x: f32,
    /// World y of the tile's top edge.
    pub y: f32,
}

/// The static tile terrain.
///
/// Tiles are stored in insertion order, which is row-major when the grid is
/// built from a character map. The order is part of the movement contract:
/// floor detection takes the first matching tile and a collision snap is
/// applied per tile in sequence, so the last overlapping tile decides the
/// final edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileGrid {
    tiles: Vec<Tile>,
    tile_width: f32,
    tile_height: f32,
}

impl TileGrid {
    /// Create an empty grid with the given tile dimensions.
    pub fn new(tile_width: f32, tile_height: f32) -> Self {
        Self {
            tiles: Vec::new(),
            tile_width,
            tile_height,
        }
    }

    /// Build a grid from rows of characters.
    ///
    /// Each `'x'` becomes a solid tile at `(col * tile_width, row *
    /// tile_height)`. Every other character is empty space; there is no such
    /// thing as a malformed row.
    pub fn from_rows<S: AsRef<str>>(rows: &[S], tile_width: f32, tile_height: f32) -> Self {
        let mut grid = Self::new(tile_width, tile_height);
        for (row, line) in rows.iter().enumerate() {
            for (col, c) in line.as_ref().chars().enumerate() {
                if c == SOLID_MARKER {
                    grid.push(Tile {
                        x: col as f32 * tile_width,
                        y: row as f32 * tile_height,
                    });
                }
            }
        }
        grid
    }

    /// Append a tile. Terrain is append-only; tiles are never removed.
    pub fn push(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// Width of a single tile.
    #[inline]
    pub fn tile_width(&self) -> f32 {
        self.tile_width
    }

    /// Height of a single tile.
    #[inline]
    pub fn tile_height(&self) -> f32 {
        self.tile_height
    }

    /// Number of solid tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the grid has no tiles at all.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterate tiles in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    /// The world-space rectangle covered by `tile`.
    pub fn tile_rect(&self, tile: &Tile) -> Rect {
        Rect::new(
            tile.x,
            tile.y,
            tile.x + self.tile_width,
            tile.y + self.tile_height,
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

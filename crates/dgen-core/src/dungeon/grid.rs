//! Tile grid
//!
//! Row-major `height × width` matrix of tile codes. Coordinates are signed so
//! that callers can hand in anything; reads outside the grid return `None`
//! and writes outside it are dropped.

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

use crate::tile::{Tile, TileCategory};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Create a grid with every cell set to `fill`
    pub fn filled(width: usize, height: usize, fill: Tile) -> Self {
        Self {
            width,
            height,
            tiles: vec![fill; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.in_bounds(x, y).then(|| y as usize * self.width + x as usize)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Tile> {
        self.index(x, y).map(|i| self.tiles[i])
    }

    /// Write a tile; returns false (and does nothing) when out of bounds
    pub fn set(&mut self, x: i32, y: i32, tile: Tile) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.tiles[i] = tile;
                true
            }
            None => false,
        }
    }

    /// Check a cell against a code; out-of-bounds never matches
    pub fn is(&self, x: i32, y: i32, tile: Tile) -> bool {
        self.get(x, y) == Some(tile)
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        // chunks() panics on 0
        self.tiles.chunks(self.width.max(1))
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    pub fn count_category(&self, category: TileCategory) -> usize {
        self.tiles
            .iter()
            .filter(|t| t.category() == category)
            .count()
    }

    /// ASCII picture, one line per row
    pub fn render(&self, reveal_secrets: bool) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.rows() {
            for &tile in row {
                out.push(if reveal_secrets && tile == Tile::Secret {
                    'S'
                } else {
                    tile.symbol()
                });
            }
            out.push('\n');
        }
        out
    }
}

// Rows of integer codes, which is what renderers consume.
impl Serialize for TileGrid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.height))?;
        for row in self.rows() {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled() {
        let grid = TileGrid::filled(5, 3, Tile::Wall);
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.count(Tile::Wall), 15);
        assert_eq!(grid.rows().count(), 3);
    }

    #[test]
    fn test_set_clips() {
        let mut grid = TileGrid::filled(4, 4, Tile::Wall);
        assert!(grid.set(3, 3, Tile::Floor));
        assert!(!grid.set(4, 0, Tile::Floor));
        assert!(!grid.set(0, -1, Tile::Floor));
        assert!(!grid.set(i32::MIN, i32::MAX, Tile::Floor));
        assert_eq!(grid.count(Tile::Floor), 1);
        assert_eq!(grid.get(3, 3), Some(Tile::Floor));
        assert_eq!(grid.get(-1, 0), None);
    }

    #[test]
    fn test_row_major_layout() {
        let mut grid = TileGrid::filled(3, 2, Tile::Wall);
        grid.set(2, 0, Tile::Door);
        grid.set(0, 1, Tile::Floor);
        assert_eq!(grid.tiles()[2], Tile::Door);
        assert_eq!(grid.tiles()[3], Tile::Floor);
    }

    #[test]
    fn test_render() {
        let mut grid = TileGrid::filled(3, 2, Tile::Wall);
        grid.set(1, 0, Tile::Floor);
        grid.set(2, 1, Tile::Secret);
        assert_eq!(grid.render(false), "#.#\n###\n");
        assert_eq!(grid.render(true), "#.#\n##S\n");
    }

    #[test]
    fn test_zero_sized() {
        let grid = TileGrid::filled(0, 0, Tile::Wall);
        assert!(grid.is_empty());
        assert_eq!(grid.rows().count(), 0);
        assert_eq!(grid.render(false), "");
        assert_eq!(grid.get(0, 0), None);
    }

    #[test]
    fn test_serializes_rows_of_codes() {
        let mut grid = TileGrid::filled(2, 2, Tile::HullWall);
        grid.set(0, 1, Tile::HullFloor);
        assert_eq!(serde_json::to_string(&grid).unwrap(), "[[20,20],[21,20]]");
    }

    #[test]
    fn test_count_category() {
        let mut grid = TileGrid::filled(3, 3, Tile::StoneWall);
        grid.set(1, 1, Tile::StoneFloor);
        grid.set(0, 0, Tile::Secret);
        assert_eq!(grid.count_category(TileCategory::Wall), 7);
        assert_eq!(grid.count_category(TileCategory::Floor), 1);
        assert_eq!(grid.count_category(TileCategory::Secret), 1);
    }
}

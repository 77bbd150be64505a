//! Tile codes
//!
//! Every grid cell holds one [`Tile`]. The discriminant is the integer code
//! handed to renderers, and each genre contributes its own wall/floor pair.
//! Door and secret codes are shared by all genres.

use serde_repr::{Deserialize_repr, Serialize_repr};
use strum::{Display, EnumIter, IntoEnumIterator};

/// Integer tile code
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize_repr,
    Deserialize_repr,
    Display,
    EnumIter,
)]
#[repr(u8)]
pub enum Tile {
    #[default]
    Empty = 0,
    Wall = 1,
    Floor = 2,
    Door = 3,
    Secret = 4,
    // Fantasy
    StoneWall = 10,
    StoneFloor = 11,
    // Sci-fi
    HullWall = 20,
    HullFloor = 21,
    // Horror
    CryptWall = 30,
    CryptFloor = 31,
    // Cyberpunk
    NeonWall = 40,
    GridFloor = 41,
    // Post-apocalyptic
    RubbleWall = 50,
    AshFloor = 51,
}

/// Generic category a tile code belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum TileCategory {
    Empty,
    Wall,
    Floor,
    Door,
    Secret,
}

impl Tile {
    /// Integer code of this tile
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Look up a tile by its integer code
    pub fn from_code(code: u8) -> Option<Tile> {
        Tile::iter().find(|tile| tile.code() == code)
    }

    pub const fn category(self) -> TileCategory {
        match self {
            Tile::Empty => TileCategory::Empty,
            Tile::Wall
            | Tile::StoneWall
            | Tile::HullWall
            | Tile::CryptWall
            | Tile::NeonWall
            | Tile::RubbleWall => TileCategory::Wall,
            Tile::Floor
            | Tile::StoneFloor
            | Tile::HullFloor
            | Tile::CryptFloor
            | Tile::GridFloor
            | Tile::AshFloor => TileCategory::Floor,
            Tile::Door => TileCategory::Door,
            Tile::Secret => TileCategory::Secret,
        }
    }

    pub const fn is_wall(self) -> bool {
        matches!(self.category(), TileCategory::Wall)
    }

    pub const fn is_floor(self) -> bool {
        matches!(self.category(), TileCategory::Floor)
    }

    /// Floor or door (what a walker can cross without searching)
    pub const fn is_passable(self) -> bool {
        matches!(self.category(), TileCategory::Floor | TileCategory::Door)
    }

    /// True for the genre-independent codes
    pub const fn is_generic(self) -> bool {
        (self as u8) < 10
    }

    /// ASCII glyph. Secrets look like walls.
    pub const fn symbol(self) -> char {
        match self.category() {
            TileCategory::Empty => ' ',
            TileCategory::Wall | TileCategory::Secret => '#',
            TileCategory::Floor => '.',
            TileCategory::Door => '+',
        }
    }
}

impl From<Tile> for u8 {
    fn from(tile: Tile) -> u8 {
        tile.code()
    }
}

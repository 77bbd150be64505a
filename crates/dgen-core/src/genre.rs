//! Genre themes
//!
//! A genre only picks which wall/floor codes the generator stamps. It never
//! changes generation logic or RNG consumption.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::tile::Tile;

/// Cosmetic theme selector
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Genre {
    #[default]
    Generic,
    Fantasy,
    Scifi,
    Horror,
    Cyberpunk,
    Postapoc,
}

/// Wall/floor codes active for one generation call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileTheme {
    pub wall: Tile,
    pub floor: Tile,
}

impl TileTheme {
    pub const GENERIC: TileTheme = TileTheme {
        wall: Tile::Wall,
        floor: Tile::Floor,
    };
}

impl Default for TileTheme {
    fn default() -> Self {
        Self::GENERIC
    }
}

impl Genre {
    /// Resolve a genre id, falling back to [`Genre::Generic`] for anything unknown.
    pub fn from_id(id: &str) -> Genre {
        Genre::from_str(id.trim()).unwrap_or_else(|_| {
            log::trace!("unknown genre id {id:?}, using generic tiles");
            Genre::Generic
        })
    }

    pub const fn theme(self) -> TileTheme {
        match self {
            Genre::Generic => TileTheme::GENERIC,
            Genre::Fantasy => TileTheme {
                wall: Tile::StoneWall,
                floor: Tile::StoneFloor,
            },
            Genre::Scifi => TileTheme {
                wall: Tile::HullWall,
                floor: Tile::HullFloor,
            },
            Genre::Horror => TileTheme {
                wall: Tile::CryptWall,
                floor: Tile::CryptFloor,
            },
            Genre::Cyberpunk => TileTheme {
                wall: Tile::NeonWall,
                floor: Tile::GridFloor,
            },
            Genre::Postapoc => TileTheme {
                wall: Tile::RubbleWall,
                floor: Tile::AshFloor,
            },
        }
    }
}

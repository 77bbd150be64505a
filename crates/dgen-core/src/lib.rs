//! dgen-core: BSP dungeon layout generator
//!
//! Builds a binary-space-partition tree over a rectangular map, carves a room
//! into each leaf, links sibling subtrees with L-shaped corridors, then marks
//! chokepoints as doors and hides secret walls beside dead ends.
//!
//! Pure computation with no I/O. Randomness comes from an injected
//! [`dgen_rng::DungeonRng`]; the same seed and configuration always yield the
//! same grid.
//!
//! ```
//! use dgen_core::{DungeonStats, Generator};
//! use dgen_rng::Isaac64;
//!
//! let mut generator = Generator::new(64, 64, Isaac64::new(12345));
//! generator.set_genre("scifi");
//! let (root, grid) = generator.generate();
//! let stats = DungeonStats::collect(&root, &grid);
//! assert!(stats.rooms >= 2);
//! ```

pub mod config;
pub mod consts;
pub mod dungeon;
mod error;
mod generator;
mod genre;
mod tile;

pub use config::{GeneratorConfig, Passes};
pub use dungeon::{get_rooms, DungeonStats, Node, Room, TileGrid};
pub use error::ConfigError;
pub use generator::Generator;
pub use genre::{Genre, TileTheme};
pub use tile::{Tile, TileCategory};

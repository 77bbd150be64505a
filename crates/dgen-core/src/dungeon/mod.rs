//! Dungeon layout
//!
//! Partition tree, rooms, corridors, doors and secrets over a tile grid.
//! Each stage mutates the grid in place; see [`crate::Generator`] for the
//! order they run in.

mod analysis;
mod corridor;
mod doors;
mod grid;
mod node;
mod partition;
mod room;
mod secrets;

pub use analysis::{connectivity, DungeonStats};
pub use corridor::{carve_line, create_corridors, get_random_room};
pub use doors::{is_chokepoint, place_doors};
pub use grid::TileGrid;
pub use node::{get_rooms, Node, Room};
pub use partition::split;
pub use room::{create_leaf_room, create_rooms, RoomBounds};
pub use secrets::{place_secrets, wall_neighbours};

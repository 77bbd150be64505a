//! Generator tuning constants

/// Default minimum splittable-region size (each BSP child is at least this wide/tall).
pub const DEFAULT_MIN_SIZE: i32 = 6;

/// Default cap on a room's width and height.
pub const DEFAULT_MAX_SIZE: i32 = 12;

/// Nodes deeper than this are never split.
pub const MAX_SPLIT_DEPTH: u32 = 10;

/// Absolute minimum room width/height.
pub const MIN_ROOM_SIZE: i32 = 3;

/// Wall margin reserved around a room inside its leaf (one tile per side).
pub const ROOM_MARGIN: i32 = 2;

/// A region whose width/height (or height/width) ratio reaches this is split
/// across its long axis regardless of the coin flip.
pub const SPLIT_ASPECT_RATIO: f64 = 1.25;

/// Percent chance that a chokepoint becomes a door.
pub const DOOR_CHANCE: u32 = 30;

/// Percent chance that a dead end gets a secret wall.
pub const SECRET_CHANCE: u32 = 15;

/// Largest accepted grid side for validated configurations.
pub const MAX_DIMENSION: usize = 4096;

/// Default map width.
pub const DEFAULT_WIDTH: usize = 64;

/// Default map height.
pub const DEFAULT_HEIGHT: usize = 64;

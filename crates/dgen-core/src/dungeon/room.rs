//! Room carving
//!
//! Every leaf of the partition tree gets at most one room, drawn inside the
//! leaf with a wall margin, and its floor is stamped into the grid.

use dgen_rng::DungeonRng;

use crate::consts::{MIN_ROOM_SIZE, ROOM_MARGIN};
use crate::tile::Tile;

use super::grid::TileGrid;
use super::node::{Node, Room};

/// Room size limits taken from the generator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomBounds {
    /// Nominal minimum width/height (the BSP min size)
    pub min_size: i32,
    /// Cap on width/height
    pub max_size: i32,
}

/// Carve a room into every leaf under `node`, left subtree first.
pub fn create_rooms(
    node: &mut Node,
    grid: &mut TileGrid,
    bounds: RoomBounds,
    floor: Tile,
    rng: &mut impl DungeonRng,
) {
    match &mut node.children {
        Some((left, right)) => {
            create_rooms(left, grid, bounds, floor, rng);
            create_rooms(right, grid, bounds, floor, rng);
        }
        None => create_leaf_room(node, grid, bounds, floor, rng),
    }
}

/// Pick a room for one leaf and stamp it. Leaves too small for a
/// [`MIN_ROOM_SIZE`] room stay roomless.
///
/// Draw order: width, height, x offset, y offset. Draws whose range collapses
/// to a single value are skipped.
pub fn create_leaf_room(
    node: &mut Node,
    grid: &mut TileGrid,
    bounds: RoomBounds,
    floor: Tile,
    rng: &mut impl DungeonRng,
) {
    if !node.is_leaf() {
        return;
    }

    let max_w = (node.width - ROOM_MARGIN).min(bounds.max_size);
    let max_h = (node.height - ROOM_MARGIN).min(bounds.max_size);
    if max_w < MIN_ROOM_SIZE || max_h < MIN_ROOM_SIZE {
        log::trace!(
            "leaf {}x{} at ({}, {}) too small for a room",
            node.width,
            node.height,
            node.x,
            node.y
        );
        return;
    }

    let width = pick_extent(bounds.min_size, max_w, rng);
    let height = pick_extent(bounds.min_size, max_h, rng);
    let x = node.x + pick_offset(node.width, width, rng);
    let y = node.y + pick_offset(node.height, height, rng);

    let room = Room::new(x, y, width, height);
    stamp_room(grid, &room, floor);
    node.room = Some(room);
}

/// Uniform in `[min(nominal_min, max), max]`.
fn pick_extent(nominal_min: i32, max: i32, rng: &mut impl DungeonRng) -> i32 {
    let min = nominal_min.min(max);
    if max == min {
        min
    } else {
        min + rng.intn((max - min + 1) as u32) as i32
    }
}

/// Offset from the node origin that keeps a 1-tile border on both sides.
/// Valid offsets are `1..=extent - size - 1`.
fn pick_offset(extent: i32, size: i32, rng: &mut impl DungeonRng) -> i32 {
    let slots = extent - size - 1;
    if slots > 1 {
        1 + rng.intn(slots as u32) as i32
    } else {
        1
    }
}

fn stamp_room(grid: &mut TileGrid, room: &Room, floor: Tile) {
    for y in room.y..room.y + room.height {
        for x in room.x..room.x + room.width {
            grid.set(x, y, floor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dgen_rng::{Isaac64, SequenceRng};

    const BOUNDS: RoomBounds = RoomBounds {
        min_size: 6,
        max_size: 12,
    };

    #[test]
    fn test_tiny_leaf_stays_roomless() {
        let mut grid = TileGrid::filled(10, 10, Tile::Wall);
        let mut node = Node::new(0, 0, 4, 10);
        let mut rng = SequenceRng::new([0]);
        create_leaf_room(&mut node, &mut grid, BOUNDS, Tile::Floor, &mut rng);
        assert!(node.room.is_none());
        assert_eq!(grid.count(Tile::Floor), 0);
        assert!(rng.calls().is_empty());
    }

    #[test]
    fn test_small_leaf_gets_clamped_room() {
        // 6x6 leaf: interior 4x4, below the nominal min of 6.
        let mut grid = TileGrid::filled(10, 10, Tile::Wall);
        let mut node = Node::new(2, 2, 6, 6);
        let mut rng = SequenceRng::new([0]);
        create_leaf_room(&mut node, &mut grid, BOUNDS, Tile::Floor, &mut rng);
        assert_eq!(node.room, Some(Room::new(3, 3, 4, 4)));
        assert!(rng.calls().is_empty(), "every range collapsed");
        assert_eq!(grid.count(Tile::Floor), 16);
    }

    #[test]
    fn test_draw_order_and_ranges() {
        let mut grid = TileGrid::filled(40, 40, Tile::Wall);
        let mut node = Node::new(0, 0, 20, 16);
        // width: 6 + 3 = 9, height: 6 + 1 = 7, x: 1 + 4, y: 1 + 2
        let mut rng = SequenceRng::new([3, 1, 4, 2]);
        create_leaf_room(&mut node, &mut grid, BOUNDS, Tile::HullFloor, &mut rng);
        assert_eq!(node.room, Some(Room::new(5, 3, 9, 7)));
        // max_w = min(18, 12) = 12 -> 7 choices; max_h = 14 -> 12 -> 7 choices
        // x slots = 20 - 9 - 1 = 10; y slots = 16 - 7 - 1 = 8
        assert_eq!(rng.calls(), &[7, 7, 10, 8]);
        assert_eq!(grid.count(Tile::HullFloor), 63);
    }

    #[test]
    fn test_rooms_stay_inside_leaves() {
        for seed in 0..20u64 {
            let mut rng = Isaac64::new(seed);
            let mut grid = TileGrid::filled(64, 64, Tile::Wall);
            let mut root = Node::new(0, 0, 64, 64);
            crate::dungeon::split(&mut root, 0, 6, &mut rng);
            create_rooms(&mut root, &mut grid, BOUNDS, Tile::Floor, &mut rng);

            fn check(node: &Node) {
                if let (Some(l), Some(r)) = (node.left(), node.right()) {
                    assert!(node.room.is_none());
                    check(l);
                    check(r);
                } else if let Some(room) = node.room {
                    assert!(room.width >= MIN_ROOM_SIZE && room.height >= MIN_ROOM_SIZE);
                    assert!(room.width <= 12 && room.height <= 12);
                    assert!(room.x > node.x && room.y > node.y);
                    assert!(room.x + room.width < node.x + node.width);
                    assert!(room.y + room.height < node.y + node.height);
                }
            }
            check(&root);
        }
    }

    #[test]
    fn test_room_clipped_to_grid() {
        // Node hangs off the grid edge; stamping must not panic.
        let mut grid = TileGrid::filled(8, 8, Tile::Wall);
        let mut node = Node::new(4, 4, 10, 10);
        create_leaf_room(&mut node, &mut grid, BOUNDS, Tile::Floor, &mut Isaac64::new(1));
        assert!(node.room.is_some());
        assert!(grid.count(Tile::Floor) <= 9);
    }
}

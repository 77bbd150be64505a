//! Corridor routing
//!
//! Each internal node links one room from its left subtree to one room from
//! its right subtree with an L-shaped, axis-aligned corridor between the two
//! room centers. Since every internal node is linked, the rooms form a single
//! connected network unless a whole subtree came out roomless.

use dgen_rng::DungeonRng;

use crate::tile::Tile;

use super::grid::TileGrid;
use super::node::{Node, Room};

/// Carve this node's connector, then recurse into left and right.
pub fn create_corridors(node: &Node, grid: &mut TileGrid, floor: Tile, rng: &mut impl DungeonRng) {
    let Some((left, right)) = &node.children else {
        return;
    };

    match (get_random_room(left, rng), get_random_room(right, rng)) {
        (Some(a), Some(b)) => {
            let (x1, y1) = a.center();
            let (x2, y2) = b.center();
            if rng.coin() {
                carve_line(grid, (x1, y1), (x2, y1), floor);
                carve_line(grid, (x2, y1), (x2, y2), floor);
            } else {
                carve_line(grid, (x1, y1), (x1, y2), floor);
                carve_line(grid, (x1, y2), (x2, y2), floor);
            }
        }
        _ => log::trace!(
            "no corridor for {}x{} node at ({}, {}): a subtree has no rooms",
            node.width,
            node.height,
            node.x,
            node.y
        ),
    }

    create_corridors(left, grid, floor, rng);
    create_corridors(right, grid, floor, rng);
}

/// A room representing `node`'s subtree.
///
/// A leaf answers with its own room without touching the RNG; otherwise all
/// rooms are collected pre-order and one is drawn uniformly.
pub fn get_random_room(node: &Node, rng: &mut impl DungeonRng) -> Option<Room> {
    if node.is_leaf() && node.room.is_some() {
        return node.room;
    }
    let rooms = node.rooms();
    if rooms.is_empty() {
        return None;
    }
    let pick = rng.intn(rooms.len() as u32) as usize;
    Some(rooms[pick])
}

/// Stamp floor along a horizontal or vertical segment, endpoints included.
/// Cells outside the grid are skipped; diagonal requests are ignored.
pub fn carve_line(grid: &mut TileGrid, from: (i32, i32), to: (i32, i32), floor: Tile) {
    let ((x1, y1), (x2, y2)) = (from, to);
    if y1 == y2 {
        for x in x1.min(x2)..=x1.max(x2) {
            grid.set(x, y1, floor);
        }
    } else if x1 == x2 {
        for y in y1.min(y2)..=y1.max(y2) {
            grid.set(x1, y, floor);
        }
    } else {
        log::trace!("ignoring diagonal carve {from:?} -> {to:?}");
    }
}

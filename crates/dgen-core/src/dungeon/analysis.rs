//! Post-generation measurements
//!
//! Nothing here touches the RNG or mutates the map.

use std::collections::VecDeque;

use serde::Serialize;

use crate::tile::TileCategory;

use super::grid::TileGrid;
use super::node::Node;

/// Summary counts for one generated map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DungeonStats {
    pub rooms: usize,
    pub leaves: usize,
    pub floor: usize,
    pub doors: usize,
    pub secrets: usize,
    pub walls: usize,
    /// Share of floor+door tiles reachable from the first one, in `[0, 1]`
    pub connectivity: f64,
}

impl DungeonStats {
    pub fn collect(root: &Node, grid: &TileGrid) -> Self {
        Self {
            rooms: root.rooms().len(),
            leaves: root.leaf_count(),
            floor: grid.count_category(TileCategory::Floor),
            doors: grid.count_category(TileCategory::Door),
            secrets: grid.count_category(TileCategory::Secret),
            walls: grid.count_category(TileCategory::Wall),
            connectivity: connectivity(grid),
        }
    }

    /// Floor tiles plus doors
    pub fn walkable(&self) -> usize {
        self.floor + self.doors
    }
}

/// Flood-fill 4-connected floor/door tiles from the first one in row-major
/// order and return the reached share. 0.0 when there is nothing to walk on.
pub fn connectivity(grid: &TileGrid) -> f64 {
    let total = grid.tiles().iter().filter(|t| t.is_passable()).count();
    let Some(start) = grid.tiles().iter().position(|t| t.is_passable()) else {
        return 0.0;
    };
    reachable_from(grid, start) as f64 / total as f64
}

fn reachable_from(grid: &TileGrid, start: usize) -> usize {
    let width = grid.width();
    let mut seen = vec![false; grid.tiles().len()];
    let mut queue = VecDeque::from([start]);
    seen[start] = true;
    let mut reached = 0;

    while let Some(i) = queue.pop_front() {
        reached += 1;
        let (x, y) = ((i % width) as i32, (i / width) as i32);
        for (dx, dy) in [(0, -1), (0, 1), (-1, 0), (1, 0)] {
            let (nx, ny) = (x + dx, y + dy);
            if !grid.get(nx, ny).is_some_and(|t| t.is_passable()) {
                continue;
            }
            let j = ny as usize * width + nx as usize;
            if !seen[j] {
                seen[j] = true;
                queue.push_back(j);
            }
        }
    }

    reached
}

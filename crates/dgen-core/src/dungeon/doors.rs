//! Door placement
//!
//! A chokepoint is a floor tile walled on one axis with floor on the other:
//! a one-tile-wide passage. Each one becomes a door with [`DOOR_CHANCE`]%.

use dgen_rng::DungeonRng;

use crate::consts::DOOR_CHANCE;
use crate::genre::TileTheme;
use crate::tile::Tile;

use super::grid::TileGrid;

/// Check if the interior tile at (x, y) is a chokepoint under `theme`
pub fn is_chokepoint(grid: &TileGrid, x: i32, y: i32, theme: TileTheme) -> bool {
    if !grid.is(x, y, theme.floor) {
        return false;
    }
    let wall = |dx: i32, dy: i32| grid.is(x + dx, y + dy, theme.wall);
    let floor = |dx: i32, dy: i32| grid.is(x + dx, y + dy, theme.floor);

    let north_south_walled = wall(0, -1) && wall(0, 1) && floor(1, 0) && floor(-1, 0);
    let east_west_walled = wall(1, 0) && wall(-1, 0) && floor(0, -1) && floor(0, 1);
    north_south_walled || east_west_walled
}

/// Scan interior cells row by row and roll for a door at each chokepoint.
///
/// Doors placed earlier in the scan are visible to later checks, so the
/// row-major order is part of the seeded output.
pub fn place_doors(grid: &mut TileGrid, theme: TileTheme, rng: &mut impl DungeonRng) -> usize {
    let (width, height) = (grid.width() as i32, grid.height() as i32);
    let mut placed = 0;

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            if is_chokepoint(grid, x, y, theme) && rng.percent(DOOR_CHANCE) {
                grid.set(x, y, Tile::Door);
                placed += 1;
            }
        }
    }

    placed
}

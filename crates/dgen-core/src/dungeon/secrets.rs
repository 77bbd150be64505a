//! Secret walls at dead ends
//!
//! A dead end is a floor tile with walls on exactly three sides. With
//! [`SECRET_CHANCE`]% one of those walls is swapped for a secret tile.

use dgen_rng::DungeonRng;

use crate::consts::SECRET_CHANCE;
use crate::genre::TileTheme;
use crate::tile::Tile;

use super::grid::TileGrid;

/// North, south, west, east
const NEIGHBOURS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Number of orthogonal neighbours of (x, y) that are `theme.wall`
pub fn wall_neighbours(grid: &TileGrid, x: i32, y: i32, theme: TileTheme) -> usize {
    NEIGHBOURS
        .iter()
        .filter(|(dx, dy)| grid.is(x + dx, y + dy, theme.wall))
        .count()
}

/// Scan interior floor tiles row by row and maybe hide a secret beside each
/// dead end. Returns the number of secrets placed.
///
/// Skipped entirely when the grid is smaller than `expected` (width, height).
///
/// Candidate walls are tried north, south, west, east. Each of the first three
/// is taken on a coin flip and passed over otherwise; east, if it is a wall and
/// reached, is taken without a flip. Seeded output depends on this order.
pub fn place_secrets(
    grid: &mut TileGrid,
    theme: TileTheme,
    expected: (usize, usize),
    rng: &mut impl DungeonRng,
) -> usize {
    if grid.is_empty() || grid.width() < expected.0 || grid.height() < expected.1 {
        log::trace!(
            "skipping secrets: grid {}x{} smaller than {}x{}",
            grid.width(),
            grid.height(),
            expected.0,
            expected.1
        );
        return 0;
    }

    let (width, height) = (grid.width() as i32, grid.height() as i32);
    let mut placed = 0;

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            if !grid.is(x, y, theme.floor) || wall_neighbours(grid, x, y, theme) != 3 {
                continue;
            }
            if !rng.percent(SECRET_CHANCE) {
                continue;
            }
            if let Some((sx, sy)) = pick_secret_wall(grid, x, y, theme, rng) {
                grid.set(sx, sy, Tile::Secret);
                placed += 1;
            }
        }
    }

    placed
}

fn pick_secret_wall(
    grid: &TileGrid,
    x: i32,
    y: i32,
    theme: TileTheme,
    rng: &mut impl DungeonRng,
) -> Option<(i32, i32)> {
    let (last, coin_flipped) = NEIGHBOURS.split_last()?;
    for (dx, dy) in coin_flipped {
        let (cx, cy) = (x + dx, y + dy);
        if grid.is(cx, cy, theme.wall) && rng.coin() {
            return Some((cx, cy));
        }
    }
    let (cx, cy) = (x + last.0, y + last.1);
    grid.is(cx, cy, theme.wall).then_some((cx, cy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dgen_rng::SequenceRng;

    const THEME: TileTheme = TileTheme::GENERIC;

    fn grid_from(rows: &[&str]) -> TileGrid {
        let mut grid = TileGrid::filled(rows[0].len(), rows.len(), Tile::Wall);
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                if c == '.' {
                    grid.set(x as i32, y as i32, Tile::Floor);
                }
            }
        }
        grid
    }

    /// Dead end at (2, 2) open to the south.
    fn dead_end_open_south() -> TileGrid {
        grid_from(&["#####", "#####", "##.##", "##.##", "#####"])
    }

    /// Dead end at (2, 2) open to the east.
    fn dead_end_open_east() -> TileGrid {
        grid_from(&["#####", "#####", "##...", "#####", "#####"])
    }

    #[test]
    fn test_wall_neighbours() {
        let grid = dead_end_open_south();
        assert_eq!(wall_neighbours(&grid, 2, 2, THEME), 3);
        assert_eq!(wall_neighbours(&grid, 2, 3, THEME), 3);
        // Out of bounds is not a wall.
        assert_eq!(wall_neighbours(&grid, 0, 0, THEME), 2);
    }

    #[test]
    fn test_no_roll_fails_chance() {
        let mut grid = dead_end_open_south();
        let mut rng = SequenceRng::new([15]);
        assert_eq!(place_secrets(&mut grid, THEME, (5, 5), &mut rng), 0);
        assert_eq!(grid.count(Tile::Secret), 0);
    }

    #[test]
    fn test_north_taken_on_first_coin() {
        let mut grid = dead_end_open_south();
        // chance 0 (<15), north coin 0 (take)
        let mut rng = SequenceRng::new([0, 0, 99]);
        assert_eq!(place_secrets(&mut grid, THEME, (5, 5), &mut rng), 1);
        assert!(grid.is(2, 1, Tile::Secret));
    }

    #[test]
    fn test_open_side_skips_coin() {
        let mut grid = dead_end_open_south();
        // chance ok, north declined, south is floor (no flip), west taken
        let mut rng = SequenceRng::new([0, 1, 0, 99, 99]);
        place_secrets(&mut grid, THEME, (5, 5), &mut rng);
        assert!(grid.is(1, 2, Tile::Secret));
        assert_eq!(&rng.calls()[..3], &[100, 2, 2]);
    }

    #[test]
    fn test_east_is_unconditional() {
        let mut grid = dead_end_open_south();
        // chance ok, north/south(skip)/west all declined -> east without a flip
        let mut rng = SequenceRng::new([0, 1, 1, 99, 99, 99]);
        place_secrets(&mut grid, THEME, (5, 5), &mut rng);
        assert!(grid.is(3, 2, Tile::Secret));
        assert_eq!(&rng.calls()[..3], &[100, 2, 2]);
    }

    #[test]
    fn test_open_east_can_place_nothing() {
        let mut grid = dead_end_open_east();
        // chance ok, north/south/west all declined, east is floor
        let mut rng = SequenceRng::new([0, 1, 1, 1, 99]);
        assert_eq!(place_secrets(&mut grid, THEME, (5, 5), &mut rng), 0);
        assert_eq!(&rng.calls()[..4], &[100, 2, 2, 2]);
    }

    #[test]
    fn test_skips_undersized_grid() {
        let mut grid = dead_end_open_south();
        let mut rng = SequenceRng::new([0]);
        assert_eq!(place_secrets(&mut grid, THEME, (6, 5), &mut rng), 0);
        assert!(rng.calls().is_empty());

        let mut empty = TileGrid::filled(0, 0, Tile::Wall);
        assert_eq!(place_secrets(&mut empty, THEME, (0, 0), &mut rng), 0);
    }
}

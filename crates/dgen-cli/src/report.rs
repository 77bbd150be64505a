//! Output formats for one generated map

use std::fmt::Write as _;

use dgen_core::{DungeonStats, GeneratorConfig, Node, Room, TileGrid};
use serde::Serialize;

use crate::RngKind;

/// Everything printed for `--format json`
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub seed: u64,
    pub rng: RngKind,
    pub config: &'a GeneratorConfig,
    pub stats: DungeonStats,
    pub rooms: Vec<Room>,
    pub grid: &'a TileGrid,
}

impl<'a> Report<'a> {
    pub fn new(
        seed: u64,
        rng: RngKind,
        config: &'a GeneratorConfig,
        root: &Node,
        grid: &'a TileGrid,
    ) -> Self {
        Self {
            seed,
            rng,
            config,
            stats: DungeonStats::collect(root, grid),
            rooms: root.rooms(),
            grid,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// ASCII picture, optionally followed by a stats block
    pub fn to_ascii(&self, reveal_secrets: bool, with_stats: bool) -> String {
        let mut out = self.grid.render(reveal_secrets);
        if with_stats {
            out.push('\n');
            out.push_str(&self.stats_block());
        }
        out
    }

    fn stats_block(&self) -> String {
        let stats = &self.stats;
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "seed {} ({}), {}x{} {}",
            self.seed, self.rng, self.config.width, self.config.height, self.config.genre
        );
        let _ = writeln!(
            out,
            "rooms: {}  leaves: {}  floor: {}  doors: {}  secrets: {}  walls: {}",
            stats.rooms, stats.leaves, stats.floor, stats.doors, stats.secrets, stats.walls
        );
        let _ = writeln!(out, "connectivity: {:.1}%", stats.connectivity * 100.0);
        out
    }
}

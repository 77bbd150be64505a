//! Generation pipeline
//!
//! partition -> rooms -> corridors -> doors -> secrets

use dgen_rng::DungeonRng;

use crate::config::{validate_room_sizes, GeneratorConfig, Passes};
use crate::consts::{DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE};
use crate::dungeon::{
    create_corridors, create_rooms, place_doors, place_secrets, split, Node, RoomBounds, TileGrid,
};
use crate::error::ConfigError;
use crate::genre::{Genre, TileTheme};

/// Dungeon generator bound to one random source.
///
/// Pass `&mut rng` to keep ownership of the stream outside the generator.
#[derive(Debug, Clone)]
pub struct Generator<R> {
    width: usize,
    height: usize,
    min_size: i32,
    max_size: i32,
    genre: Genre,
    theme: TileTheme,
    passes: Passes,
    rng: R,
}

impl<R: DungeonRng> Generator<R> {
    /// Generator with default sizes (min 6, max 12), generic tiles and all passes.
    pub fn new(width: usize, height: usize, rng: R) -> Self {
        Self {
            width,
            height,
            min_size: DEFAULT_MIN_SIZE,
            max_size: DEFAULT_MAX_SIZE,
            genre: Genre::Generic,
            theme: TileTheme::GENERIC,
            passes: Passes::all(),
            rng,
        }
    }

    pub fn with_config(config: &GeneratorConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            width: config.width,
            height: config.height,
            min_size: config.min_size,
            max_size: config.max_size,
            genre: config.genre,
            theme: config.genre.theme(),
            passes: config.passes,
            rng,
        })
    }

    pub fn config(&self) -> GeneratorConfig {
        GeneratorConfig {
            width: self.width,
            height: self.height,
            min_size: self.min_size,
            max_size: self.max_size,
            genre: self.genre,
            passes: self.passes,
        }
    }

    /// Switch genre by id. Unknown ids select the generic tiles.
    pub fn set_genre(&mut self, id: &str) -> Genre {
        self.genre = Genre::from_id(id);
        self.theme = self.genre.theme();
        self.genre
    }

    /// Stamp custom wall/floor codes. The genre is left as it was; the next
    /// `set_genre` replaces the theme again.
    pub fn set_theme(&mut self, theme: TileTheme) {
        self.theme = theme;
    }

    pub fn genre(&self) -> Genre {
        self.genre
    }

    pub fn theme(&self) -> TileTheme {
        self.theme
    }

    pub fn set_room_sizes(&mut self, min_size: i32, max_size: i32) -> Result<(), ConfigError> {
        validate_room_sizes(min_size, max_size)?;
        self.min_size = min_size;
        self.max_size = max_size;
        Ok(())
    }

    pub fn set_passes(&mut self, passes: Passes) {
        self.passes = passes;
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn into_rng(self) -> R {
        self.rng
    }

    /// Build one map. Returns the partition tree root and the finished grid,
    /// both owned by the caller.
    pub fn generate(&mut self) -> (Node, TileGrid) {
        let theme = self.theme;
        let bounds = RoomBounds {
            min_size: self.min_size,
            max_size: self.max_size,
        };
        let mut grid = TileGrid::filled(self.width, self.height, theme.wall);
        let mut root = Node::new(0, 0, self.width as i32, self.height as i32);

        split(&mut root, 0, self.min_size, &mut self.rng);
        create_rooms(&mut root, &mut grid, bounds, theme.floor, &mut self.rng);
        create_corridors(&root, &mut grid, theme.floor, &mut self.rng);

        let doors = if self.passes.contains(Passes::DOORS) {
            place_doors(&mut grid, theme, &mut self.rng)
        } else {
            0
        };
        let secrets = if self.passes.contains(Passes::SECRETS) {
            place_secrets(&mut grid, theme, (self.width, self.height), &mut self.rng)
        } else {
            0
        };

        log::debug!(
            "generated {}x{} {} dungeon: {} leaves, {} rooms, {} doors, {} secrets",
            self.width,
            self.height,
            self.genre,
            root.leaf_count(),
            root.rooms().len(),
            doors,
            secrets
        );

        (root, grid)
    }
}

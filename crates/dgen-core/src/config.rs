//! Generator configuration

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_HEIGHT, DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE, DEFAULT_WIDTH, MAX_DIMENSION, MIN_ROOM_SIZE,
};
use crate::error::ConfigError;
use crate::genre::Genre;

bitflags! {
    /// Optional post-passes run after rooms and corridors exist
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Passes: u8 {
        const DOORS = 0x01;
        const SECRETS = 0x02;
    }
}

impl Default for Passes {
    fn default() -> Self {
        Passes::all()
    }
}

// Manual serde impl for Passes (raw bits)
impl Serialize for Passes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Passes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(Passes::from_bits_truncate(bits))
    }
}

/// Everything that determines a map besides the RNG seed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub width: usize,
    pub height: usize,
    /// Minimum splittable-region size
    pub min_size: i32,
    /// Cap on room width/height
    pub max_size: i32,
    pub genre: Genre,
    pub passes: Passes,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            min_size: DEFAULT_MIN_SIZE,
            max_size: DEFAULT_MAX_SIZE,
            genre: Genre::Generic,
            passes: Passes::all(),
        }
    }
}

impl GeneratorConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        if self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            return Err(ConfigError::GridTooLarge {
                width: self.width,
                height: self.height,
                max: MAX_DIMENSION,
            });
        }
        validate_room_sizes(self.min_size, self.max_size)
    }
}

pub(crate) fn validate_room_sizes(min_size: i32, max_size: i32) -> Result<(), ConfigError> {
    if min_size < 1 {
        return Err(ConfigError::InvalidMinSize(min_size));
    }
    if max_size < MIN_ROOM_SIZE {
        return Err(ConfigError::InvalidMaxSize {
            max_size,
            min_room: MIN_ROOM_SIZE,
        });
    }
    Ok(())
}

//! Configuration errors
//!
//! Generation itself never fails; only building a configuration can.

use thiserror::Error;

/// Rejected generator configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    #[error("grid {width}x{height} exceeds the {max}x{max} limit")]
    GridTooLarge {
        width: usize,
        height: usize,
        max: usize,
    },

    #[error("minimum region size must be positive, got {0}")]
    InvalidMinSize(i32),

    #[error("maximum room size {max_size} is below the absolute room minimum {min_room}")]
    InvalidMaxSize { max_size: i32, min_room: i32 },
}

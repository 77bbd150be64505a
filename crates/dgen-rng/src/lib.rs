//! dgen-rng: Random sources for the dungeon generator
//!
//! The generator never owns or seeds its randomness. It consumes anything
//! implementing [`DungeonRng`], and the exact sequence of `intn` results is
//! part of its observable contract: two engines seeded identically must
//! produce identical maps.
//!
//! Two engines are provided:
//! - [`Isaac64`]: ISAAC64 ported bit-for-bit, used for golden-master tests.
//! - [`GameRng`]: a ChaCha8 wrapper for everyday use.

mod game_rng;
mod isaac64;
mod sequence;

pub use game_rng::GameRng;
pub use isaac64::{Isaac64, RngTraceEntry};
pub use sequence::SequenceRng;

/// A deterministic, re-seedable integer source.
pub trait DungeonRng {
    /// Returns a value in `[0, n)`.
    ///
    /// Returns 0 if `n` is 0.
    fn intn(&mut self, n: u32) -> u32;

    /// Reset the stream so that it replays from `seed`.
    fn reseed(&mut self, seed: u64);

    /// Fair coin. `true` when the draw is 0.
    fn coin(&mut self) -> bool {
        self.intn(2) == 0
    }

    /// Returns true with probability `percent`/100 (one draw in `[0, 100)`).
    fn percent(&mut self, percent: u32) -> bool {
        self.intn(100) < percent
    }
}

impl<R: DungeonRng + ?Sized> DungeonRng for &mut R {
    fn intn(&mut self, n: u32) -> u32 {
        (**self).intn(n)
    }

    fn reseed(&mut self, seed: u64) {
        (**self).reseed(seed)
    }
}

impl<R: DungeonRng + ?Sized> DungeonRng for Box<R> {
    fn intn(&mut self, n: u32) -> u32 {
        (**self).intn(n)
    }

    fn reseed(&mut self, seed: u64) {
        (**self).reseed(seed)
    }
}

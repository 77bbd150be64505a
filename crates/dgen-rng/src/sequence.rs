//! Scripted random source
//!
//! Replays a fixed list of values so that tests can pin exactly which
//! branch a generation step takes.

use crate::DungeonRng;

/// Replays `values` in order, each reduced modulo the requested bound.
/// Wraps around when exhausted; an empty script always yields 0.
#[derive(Debug, Clone, Default)]
pub struct SequenceRng {
    values: Vec<u32>,
    pos: usize,
    calls: Vec<u32>,
}

impl SequenceRng {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            pos: 0,
            calls: Vec::new(),
        }
    }

    /// Bounds passed to `intn`, in call order.
    pub fn calls(&self) -> &[u32] {
        &self.calls
    }
}

impl DungeonRng for SequenceRng {
    fn intn(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.calls.push(n);
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.pos % self.values.len()];
        self.pos += 1;
        value % n
    }

    fn reseed(&mut self, _seed: u64) {
        self.pos = 0;
        self.calls.clear();
    }
}

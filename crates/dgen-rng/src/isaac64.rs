//! ISAAC64 generator
//!
//! Bit-exact with Bob Jenkins' reference ISAAC64 (and the 3.6-era NetHack
//! port of it) for 8-byte little-endian seeds. Golden-master map tests are
//! recorded against this engine, so the output sequence must never change.

use serde::{Deserialize, Serialize};

use crate::DungeonRng;

const STATE_LOG: usize = 8;
const STATE_WORDS: usize = 1 << STATE_LOG;
const GOLDEN_RATIO: u64 = 0x9E37_79B9_7F4A_7C13;

/// One recorded draw, for diffing two runs that should have matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngTraceEntry {
    /// Index of the raw word consumed (0-based)
    pub seq: u64,
    /// Which entry point produced the value
    pub func: String,
    /// Modulus passed in
    pub arg: u64,
    /// Value handed back to the caller
    pub result: u64,
    /// Raw word the result was reduced from
    pub raw: u64,
}

/// ISAAC64 state
#[derive(Clone, Serialize, Deserialize)]
pub struct Isaac64 {
    /// Output buffer, consumed from the top down
    results: Vec<u64>,
    /// Internal memory
    mem: Vec<u64>,
    a: u64,
    b: u64,
    c: u64,
    /// Unread words left in `results`
    remaining: usize,
    /// Raw words consumed since the last (re)seed
    call_count: u64,
    #[serde(skip)]
    tracing: bool,
    #[serde(skip)]
    trace: Vec<RngTraceEntry>,
}

impl core::fmt::Debug for Isaac64 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Isaac64")
            .field("a", &self.a)
            .field("b", &self.b)
            .field("c", &self.c)
            .field("remaining", &self.remaining)
            .field("call_count", &self.call_count)
            .finish()
    }
}

impl Isaac64 {
    /// Create a generator seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        let mut rng = Self {
            results: vec![0; STATE_WORDS],
            mem: vec![0; STATE_WORDS],
            a: 0,
            b: 0,
            c: 0,
            remaining: 0,
            call_count: 0,
            tracing: false,
            trace: Vec::new(),
        };
        rng.seed_state(seed);
        rng
    }

    fn seed_state(&mut self, seed: u64) {
        self.a = 0;
        self.b = 0;
        self.c = 0;
        self.call_count = 0;
        self.trace.clear();
        self.results.fill(0);
        // An 8-byte little-endian seed lands entirely in the first word.
        self.results[0] ^= seed;

        let mut x = [GOLDEN_RATIO; 8];
        for _ in 0..4 {
            Self::mix(&mut x);
        }

        for pass in 0..2 {
            for chunk in (0..STATE_WORDS).step_by(8) {
                for (j, word) in x.iter_mut().enumerate() {
                    let source = if pass == 0 {
                        self.results[chunk + j]
                    } else {
                        self.mem[chunk + j]
                    };
                    *word = word.wrapping_add(source);
                }
                Self::mix(&mut x);
                self.mem[chunk..chunk + 8].copy_from_slice(&x);
            }
        }

        self.refill();
    }

    fn mix(x: &mut [u64; 8]) {
        const SHIFT: [u32; 8] = [9, 9, 23, 15, 14, 20, 17, 14];

        for i in 0..8 {
            x[i] = x[i].wrapping_sub(x[(i + 4) & 7]);
            let carry = x[(i + 7) & 7];
            x[(i + 5) & 7] ^= if i % 2 == 0 {
                carry >> SHIFT[i]
            } else {
                carry << SHIFT[i]
            };
            x[(i + 7) & 7] = x[(i + 7) & 7].wrapping_add(x[i]);
        }
    }

    #[inline]
    fn lower_index(x: u64) -> usize {
        ((x >> 3) & (STATE_WORDS as u64 - 1)) as usize
    }

    #[inline]
    fn upper_index(y: u64) -> usize {
        ((y >> (STATE_LOG + 3)) & (STATE_WORDS as u64 - 1)) as usize
    }

    /// Produce the next block of 256 words.
    fn refill(&mut self) {
        const HALF: usize = STATE_WORDS / 2;

        self.c = self.c.wrapping_add(1);
        let mut a = self.a;
        let mut b = self.b.wrapping_add(self.c);

        for i in 0..STATE_WORDS {
            let shifted = match i % 4 {
                0 => !a ^ (a << 21),
                1 => a ^ (a >> 5),
                2 => a ^ (a << 12),
                _ => a ^ (a >> 33),
            };
            a = shifted.wrapping_add(self.mem[(i + HALF) % STATE_WORDS]);
            let x = self.mem[i];
            let y = self.mem[Self::lower_index(x)].wrapping_add(a).wrapping_add(b);
            self.mem[i] = y;
            b = self.mem[Self::upper_index(y)].wrapping_add(x);
            self.results[i] = b;
        }

        self.a = a;
        self.b = b;
        self.remaining = STATE_WORDS;
    }

    /// Next raw 64-bit word.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        if self.remaining == 0 {
            self.refill();
        }
        self.remaining -= 1;
        self.call_count += 1;
        self.results[self.remaining]
    }

    /// Start recording every `intn` draw.
    pub fn enable_tracing(&mut self) {
        self.tracing = true;
        self.trace.clear();
    }

    pub fn disable_tracing(&mut self) {
        self.tracing = false;
    }

    /// Draws recorded since tracing was enabled.
    pub fn trace(&self) -> &[RngTraceEntry] {
        &self.trace
    }

    /// Raw words consumed since the last seed.
    pub fn call_count(&self) -> u64 {
        self.call_count
    }
}

impl DungeonRng for Isaac64 {
    fn intn(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        let raw = self.next_u64();
        let result = (raw % u64::from(n)) as u32;
        if self.tracing {
            self.trace.push(RngTraceEntry {
                seq: self.call_count - 1,
                func: "intn".to_string(),
                arg: u64::from(n),
                result: u64::from(result),
                raw,
            });
        }
        result
    }

    fn reseed(&mut self, seed: u64) {
        self.seed_state(seed);
    }
}

impl Default for Isaac64 {
    fn default() -> Self {
        Self::new(0)
    }
}

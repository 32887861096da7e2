//! RNG oracle for deterministic random number generation.
//!
//! Every random roll in the simulation (dodge checks, damage variance, enemy
//! action selection, loot and encounter picks) draws from a single
//! [`RngOracle`] owned by the controller. Nothing reaches for an ambient
//! generator, so a fixed seed or a scripted sequence replays a playthrough
//! exactly.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic: the same seed (or script) yields
/// the same sequence of values.
pub trait RngOracle: Send {
    /// Generate the next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / (u32::MAX as f64 + 1.0)
    }

    /// Returns true with the given probability.
    ///
    /// Probabilities at or below 0 never succeed, at or above 1 always do.
    fn chance(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }

    /// Uniform integer in `[min, max]` inclusive.
    fn range(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let span = (max as i64 - min as i64 + 1) as f64;
        min + (self.next_f64() * span) as i32
    }

    /// Uniform index in `[0, len)`. Returns 0 for an empty range.
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        ((self.next_f64() * len as f64) as usize).min(len - 1)
    }
}

impl<R: RngOracle + ?Sized> RngOracle for Box<R> {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG is a family of simple, fast, space-efficient RNGs with excellent
/// statistical quality. This implementation uses PCG-XSH-RR, which produces
/// 32-bit output from 64-bit state.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator from a seed.
    pub fn seeded(seed: u64) -> Self {
        let mut rng = Self { state: 0 };
        rng.state = Self::pcg_step(rng.state.wrapping_add(seed));
        rng
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = Self::pcg_step(old);
        Self::pcg_output(old)
    }
}

/// Replays a fixed list of raw values, cycling when exhausted.
///
/// `ScriptedRng::constant(u32::MAX)` makes every `chance` fail and every
/// `range` land on its maximum; `ScriptedRng::constant(0)` does the opposite.
/// An empty script behaves like `constant(0)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptedRng {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(mut values: Vec<u32>) -> Self {
        if values.is_empty() {
            values.push(0);
        }
        Self { values, cursor: 0 }
    }

    pub fn constant(value: u32) -> Self {
        Self::new(vec![value])
    }

    /// Raw value whose `next_f64` lands at `fraction` of the unit interval.
    pub fn raw_for(fraction: f64) -> u32 {
        (fraction.clamp(0.0, 1.0) * u32::MAX as f64) as u32
    }
}

impl RngOracle for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor = self.cursor.wrapping_add(1);
        value
    }
}

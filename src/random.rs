//! Sources of randomness for maze generation.
//!
//! Generators only ever ask for uniformly distributed integers in `[0, n)`, through the
//! `RandomSource` trait. Any `rand::Rng` is a `RandomSource`, and `ScriptedRandom` replays a fixed
//! sequence of draws so a test can pin every decision a generator makes.

use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

pub trait RandomSource {
    /// A uniformly distributed integer in `[0, n)`. `n` is always at least 1.
    fn uniform_below(&mut self, n: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    #[inline]
    fn uniform_below(&mut self, n: usize) -> usize {
        self.gen_range(0..n)
    }
}

/// A fast, reproducible generator for a given seed.
pub fn seeded_rng(seed: u64) -> XorShiftRng {
    XorShiftRng::seed_from_u64(seed)
}

/// A fresh seed from the thread local generator, for runs that were not given one.
pub fn random_seed() -> u64 {
    rand::thread_rng().gen()
}

/// Shuffle `items` in place with Fisher-Yates: for `i` from the last index down to 1,
/// swap item `i` with the item at a uniformly drawn index in `[0, i]`.
///
/// Consumes exactly `items.len() - 1` draws (none for fewer than two items).
pub fn shuffle<T, S>(items: &mut [T], rng: &mut S)
    where S: RandomSource + ?Sized
{
    for i in (1..items.len()).rev() {
        let j = rng.uniform_below(i + 1);
        items.swap(i, j);
    }
}

/// Replays a fixed script of draws, cycling back to the start when it runs out.
///
/// Each scripted value is reduced modulo the requested range so any script is usable with any
/// grid size.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    script: Vec<usize>,
    position: usize,
}

impl ScriptedRandom {
    /// None for an empty script.
    pub fn new(script: Vec<usize>) -> Option<ScriptedRandom> {
        if script.is_empty() {
            None
        } else {
            Some(ScriptedRandom {
                script,
                position: 0,
            })
        }
    }

    /// Always draws the lowest value in the range.
    pub fn zeros() -> ScriptedRandom {
        ScriptedRandom {
            script: vec![0],
            position: 0,
        }
    }

    /// Count of draws made so far.
    pub fn draws(&self) -> usize {
        self.position
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform_below(&mut self, n: usize) -> usize {
        let value = self.script[self.position % self.script.len()];
        self.position += 1;
        value % n
    }
}

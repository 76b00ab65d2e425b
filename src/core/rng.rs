//! Secret-number selection behind a pluggable source.
//!
//! The engine never calls a global RNG. It draws targets through the
//! [`TargetSource`] trait, so production play uses a seeded [`GameRng`]
//! (ChaCha8, deterministic for a given seed) while tests can script exact
//! target sequences with [`ScriptedTargets`].

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Supplies the secret target for each round.
pub trait TargetSource {
    /// Draw the next target, uniform over `[1, max]`.
    fn next_target(&mut self, max: u32) -> u32;
}

/// Deterministic RNG for target draws.
///
/// Uses ChaCha8: fast, and the same seed always reproduces the same game.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy (production play).
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = rand::thread_rng().gen();
        Self::new(seed)
    }

    /// The seed this RNG was created with, for logging and replay.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl TargetSource for GameRng {
    fn next_target(&mut self, max: u32) -> u32 {
        debug_assert!(max >= 1);
        self.inner.gen_range(1..=max)
    }
}

/// Scripted target sequence for tests.
///
/// Hands out the provided values in order. Panics when the script runs
/// dry, which in a test means the scenario drew more rounds than planned.
#[derive(Clone, Debug)]
pub struct ScriptedTargets {
    targets: Vec<u32>,
    next: usize,
}

impl ScriptedTargets {
    /// Script the given target sequence.
    #[must_use]
    pub fn new(targets: impl Into<Vec<u32>>) -> Self {
        Self {
            targets: targets.into(),
            next: 0,
        }
    }
}

impl TargetSource for ScriptedTargets {
    fn next_target(&mut self, max: u32) -> u32 {
        let target = *self
            .targets
            .get(self.next)
            .expect("scripted target sequence exhausted");
        self.next += 1;
        assert!(
            (1..=max).contains(&target),
            "scripted target {target} outside [1, {max}]"
        );
        target
    }
}

//! Draw policies: how one word is chosen from the unused ones.
//!
//! The pool hands a picker the number of available words and takes back an
//! index. `UniformPicker` is the real policy; tests plug in fixed pickers
//! to pin the draw order.

use crate::core::GameRng;

/// Policy for choosing which available word to draw.
pub trait WordPicker {
    /// Choose an index in `0..available`. `available` is never zero.
    ///
    /// Returning an index outside that range is treated as an internal fault.
    fn pick(&mut self, available: usize) -> usize;
}

/// Uniform random choice over the available words.
#[derive(Clone, Debug)]
pub struct UniformPicker {
    rng: GameRng,
}

impl UniformPicker {
    /// Create a picker drawing from the given RNG.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Seed the picker, or draw a fresh seed when `seed` is `None`.
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(GameRng::new(seed)),
            None => Self::new(GameRng::from_entropy()),
        }
    }

    /// Seed of the underlying RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl WordPicker for UniformPicker {
    fn pick(&mut self, available: usize) -> usize {
        self.rng.gen_index(available)
    }
}

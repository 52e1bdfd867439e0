//! Uniform random fill from a caller-supplied generator.
//!
//! The generator is passed explicitly so that experiments are
//! reproducible under a fixed seed; nothing here touches thread-local
//! RNG state.

use crate::primitives::Matrix;
use rand::distributions::uniform::SampleUniform;
use rand::Rng;

impl<T: SampleUniform + PartialOrd + Copy> Matrix<T> {
    /// Overwrites every element with an independent uniform draw from
    /// `[min, max]`.
    ///
    /// Uniform over the reals for floating element types, uniform over
    /// the integers for integral ones; both come from `rand`'s uniform
    /// sampler.
    pub fn fill_random<R: Rng + ?Sized>(&mut self, rng: &mut R, min: T, max: T) {
        for v in self.as_mut_slice() {
            *v = rng.gen_range(min..=max);
        }
    }

    /// Creates a rows x cols matrix of independent uniform draws from
    /// `[min, max]`.
    #[must_use]
    pub fn random<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        rng: &mut R,
        min: T,
        max: T,
    ) -> Self {
        let mut out = Self::from_elem(rows, cols, min);
        out.fill_random(rng, min, max);
        out
    }
}

#[cfg(test)]
#[path = "random_tests.rs"]
mod tests;

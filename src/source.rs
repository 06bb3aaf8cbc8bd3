//! The random-source seam used by the generator.
//!
//! The generator never touches process-wide random state; every draw goes
//! through a caller-owned [`RandomSource`]. Any `rand::Rng` is one, and so
//! is [`MersenneTwister`](crate::MersenneTwister), which gives the
//! canonical seeded instances.

use rand::Rng;

/// Uniform integer draws over inclusive ranges.
pub trait RandomSource {
    /// Uniform integer in `low..=high`.
    ///
    /// Panics if `low > high`, like [`Rng::gen_range`] on an empty range.
    fn randint(&mut self, low: usize, high: usize) -> usize;
}

impl<R> RandomSource for R
where
    R: Rng + ?Sized,
{
    #[inline]
    fn randint(&mut self, low: usize, high: usize) -> usize {
        self.gen_range(low..=high)
    }
}

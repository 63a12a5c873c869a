use std::fmt::Debug;
use std::ops::Range;

use rand::Rng;
use rand::SeedableRng;

/// Abstraction for randomness, in order to swap out different sources of randomness.
///
/// Randomised branching ([`crate::branching::variable_selection::RandomSelector`],
/// [`crate::branching::value_selection::InDomainRandom`]) draws from the solver's [`Random`], so
/// a fixed seed reproduces a search exactly.
///
/// # Example
/// ```rust
/// # use rand::rngs::SmallRng;
/// # use rand::SeedableRng;
/// # use bramble_core::Random;
/// let mut rng = SmallRng::seed_from_u64(42);
/// let elements = vec!["a", "b", "c"];
/// let selected_index = rng.generate_usize_in_range(0..elements.len());
/// assert!(selected_index < elements.len());
/// ```
pub trait Random: Debug {
    /// Generates a bool with probability `probability` of being true; `probability ∈ [0, 1]`.
    fn generate_bool(&mut self, probability: f64) -> bool;

    /// Generates a random usize in `[range.start, range.end)` with equal probability.
    fn generate_usize_in_range(&mut self, range: Range<usize>) -> usize;

    /// Generates a random i32 in `[lb, ub]` with equal probability.
    fn generate_i32_in_range(&mut self, lb: i32, ub: i32) -> i32;
}

// Any "regular" seedable generator can be used where a [`Random`] is expected.
impl<T> Random for T
where
    T: SeedableRng + Rng + Debug,
{
    fn generate_bool(&mut self, probability: f64) -> bool {
        self.gen_bool(probability)
    }

    fn generate_usize_in_range(&mut self, range: Range<usize>) -> usize {
        self.gen_range(range)
    }

    fn generate_i32_in_range(&mut self, lb: i32, ub: i32) -> i32 {
        self.gen_range(lb..=ub)
    }
}

mod propagation_status;
mod random;
pub(crate) mod sequence_generators;
mod solution;
mod solver_error;
mod trail;

pub use propagation_status::*;
pub use random::Random;
#[cfg(test)]
pub(crate) use random::tests::TestRandom;
pub use solution::Solution;
pub use solver_error::*;
pub(crate) use trail::Trail;

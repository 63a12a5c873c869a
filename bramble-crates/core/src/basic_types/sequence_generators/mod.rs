//! Infinite integer sequences used to space out restarts.
mod constant_sequence;
mod geometric_sequence;
mod luby_sequence;
mod sequence_generator_type;

use std::fmt::Debug;

pub(crate) use constant_sequence::ConstantSequence;
pub(crate) use geometric_sequence::GeometricSequence;
pub(crate) use luby_sequence::LubySequence;
pub use sequence_generator_type::SequenceGeneratorType;

pub(crate) trait SequenceGenerator: Debug {
    fn next(&mut self) -> i64;
}

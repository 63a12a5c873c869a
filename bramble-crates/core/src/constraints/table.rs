use super::Constraint;
use crate::propagators::BinaryTablePropagator;
use crate::variables::DomainId;

/// Creates the [`Constraint`] that `(x, y)` is one of `tuples`.
///
/// The propagator enforces arc consistency: every value left in the domain of `x` has a partner
/// in the domain of `y` and vice versa.
pub fn binary_table(x: DomainId, y: DomainId, tuples: &[(i32, i32)]) -> impl Constraint {
    BinaryTablePropagator::new(x, y, tuples)
}

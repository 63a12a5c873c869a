use super::binary_not_equals;
use super::Constraint;
use crate::variables::DomainId;

/// Creates the [`Constraint`] that enforces that all the given `variables` are distinct.
///
/// The constraint is decomposed into a not-equals propagator for every pair of variables.
pub fn all_different(variables: impl Into<Box<[DomainId]>>) -> impl Constraint {
    let variables: Box<[DomainId]> = variables.into();
    let mut constraints = Vec::new();

    for i in 0..variables.len() {
        for j in i + 1..variables.len() {
            constraints.push(binary_not_equals(variables[i], variables[j]));
        }
    }

    constraints
}

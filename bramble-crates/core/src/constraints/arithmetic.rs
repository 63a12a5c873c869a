use super::Constraint;
use crate::propagators::EqualsPropagator;
use crate::propagators::LinearLessOrEqualPropagator;
use crate::propagators::NotEqualsPropagator;
use crate::propagators::PlusPropagator;
use crate::variables::DomainId;

/// Creates the [`Constraint`] `x = y + offset`.
pub fn equals(x: DomainId, y: DomainId, offset: i32) -> impl Constraint {
    EqualsPropagator::new(x, y, offset)
}

/// Creates the [`Constraint`] `lhs = rhs`.
pub fn binary_equals(lhs: DomainId, rhs: DomainId) -> impl Constraint {
    equals(lhs, rhs, 0)
}

/// Creates the [`Constraint`] `x != y + offset`.
pub fn not_equals(x: DomainId, y: DomainId, offset: i32) -> impl Constraint {
    NotEqualsPropagator::new(x, y, offset)
}

/// Creates the [`Constraint`] `lhs != rhs`.
pub fn binary_not_equals(lhs: DomainId, rhs: DomainId) -> impl Constraint {
    not_equals(lhs, rhs, 0)
}

/// Creates the [`Constraint`] `\sum weights_i * variables_i <= rhs`.
pub fn less_than_or_equals(
    weights: impl Into<Box<[i32]>>,
    variables: impl Into<Box<[DomainId]>>,
    rhs: i32,
) -> impl Constraint {
    LinearLessOrEqualPropagator::new(weights.into(), variables.into(), rhs)
}

/// Creates the [`Constraint`] `\sum weights_i * variables_i = rhs`, as a pair of inequalities.
pub fn linear_equals(
    weights: impl Into<Box<[i32]>>,
    variables: impl Into<Box<[DomainId]>>,
    rhs: i32,
) -> impl Constraint {
    let weights: Box<[i32]> = weights.into();
    let variables: Box<[DomainId]> = variables.into();
    let negated_weights = weights.iter().map(|weight| -weight).collect::<Box<[i32]>>();

    vec![
        LinearLessOrEqualPropagator::new(weights, variables.clone(), rhs),
        LinearLessOrEqualPropagator::new(negated_weights, variables, -rhs),
    ]
}

/// Creates the [`Constraint`] `lhs <= rhs`.
pub fn binary_less_than_or_equals(lhs: DomainId, rhs: DomainId) -> impl Constraint {
    less_than_or_equals([1, -1], [lhs, rhs], 0)
}

/// Creates the [`Constraint`] `lhs < rhs`.
pub fn binary_less_than(lhs: DomainId, rhs: DomainId) -> impl Constraint {
    less_than_or_equals([1, -1], [lhs, rhs], -1)
}

/// Creates the [`Constraint`] `x + y = z`.
pub fn plus(x: DomainId, y: DomainId, z: DomainId) -> impl Constraint {
    PlusPropagator::new(x, y, z)
}

use log::warn;

use super::Constraint;
use crate::ConstraintOperationError;
use crate::Solver;

/// A temporary structure which is responsible for actually adding created constraints to the
/// solver. For an example on how to use this, see [`Solver::add_constraint`].
#[derive(Debug)]
pub struct ConstraintPoster<'solver, ConstraintImpl> {
    solver: &'solver mut Solver,
    constraint: Option<ConstraintImpl>,
}

impl<'a, ConstraintImpl> ConstraintPoster<'a, ConstraintImpl> {
    pub(crate) fn new(solver: &'a mut Solver, constraint: ConstraintImpl) -> Self {
        ConstraintPoster {
            solver,
            constraint: Some(constraint),
        }
    }
}

impl<ConstraintImpl: Constraint> ConstraintPoster<'_, ConstraintImpl> {
    /// Add the constraint to the solver.
    ///
    /// All propagators the constraint consists of end up in one group, which is considered
    /// satisfied once every one of them is.
    pub fn post(mut self) -> Result<(), ConstraintOperationError> {
        match self.constraint.take() {
            Some(constraint) => self.solver.post_constraint(constraint),
            None => Ok(()),
        }
    }
}

impl<ConstraintImpl> Drop for ConstraintPoster<'_, ConstraintImpl> {
    fn drop(&mut self) {
        if self.constraint.is_some() {
            warn!("A constraint poster is never used, this is likely a mistake.");
        }
    }
}

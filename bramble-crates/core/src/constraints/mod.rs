//! A constraint is a relation over variables. In the solver, a constraint is enforced by a group
//! of propagators which are posted together; the constraint is satisfied when all of them are.
//!
//! The functions in this module create the constraints the library ships with. They are added to
//! a [`Solver`] through [`Solver::add_constraint`]:
//!
//! ```rust
//! # use bramble_core::constraints;
//! # use bramble_core::Solver;
//! let mut solver = Solver::default();
//!
//! let a = solver.new_bounded_variable(0, 3);
//! let b = solver.new_bounded_variable(0, 3);
//!
//! solver
//!     .add_constraint(constraints::binary_less_than(a, b))
//!     .post()
//!     .expect("the constraint is satisfiable");
//!
//! assert_eq!(solver.upper_bound(a), 2);
//! assert_eq!(solver.lower_bound(b), 1);
//! ```
mod all_different;
mod arithmetic;
mod constraint_poster;
mod domain;
mod table;

pub use all_different::*;
pub use arithmetic::*;
pub use constraint_poster::ConstraintPoster;
pub use domain::*;
pub use table::*;

use crate::engine::propagation::PropagatorConstructor;
use crate::ConstraintOperationError;
use crate::Solver;

/// A [`Constraint`] is a relation over variables.
pub trait Constraint {
    /// Post the constraint to the solver.
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError>;
}

impl<Constructor> Constraint for Constructor
where
    Constructor: PropagatorConstructor,
    Constructor::PropagatorImpl: 'static,
{
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        solver.add_propagator(self)
    }
}

impl<C: Constraint> Constraint for Vec<C> {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        self.into_iter().try_for_each(|c| c.post(solver))
    }
}

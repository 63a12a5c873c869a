//! # Bramble
//! Bramble is a constraint-programming kernel: integer variables with backtrackable domains,
//! propagators which shrink those domains, and a depth-first search which branches on them.
//!
//! A model is built on a [`Solver`] by creating variables and posting
//! [`constraints`]; it is then solved with one of the solve calls:
//! - [`Solver::find_solution`], optionally followed by [`Solver::next_solution`]
//! - [`Solver::find_all_solutions`]
//! - [`Solver::find_optimal_solution`]
//!
//! ```rust
//! # use bramble_core::constraints;
//! # use bramble_core::results::EnumerationResult;
//! # use bramble_core::termination::Indefinite;
//! # use bramble_core::Solver;
//! let mut solver = Solver::default();
//! let queens = (0..4)
//!     .map(|_| solver.new_bounded_variable(0, 3))
//!     .collect::<Vec<_>>();
//!
//! for (i, &q1) in queens.iter().enumerate() {
//!     for (j, &q2) in queens.iter().enumerate().skip(i + 1) {
//!         let distance = (j - i) as i32;
//!         let posted = [
//!             solver.add_constraint(constraints::not_equals(q1, q2, 0)).post(),
//!             solver.add_constraint(constraints::not_equals(q1, q2, distance)).post(),
//!             solver.add_constraint(constraints::not_equals(q1, q2, -distance)).post(),
//!         ];
//!         assert!(posted.iter().all(Result::is_ok));
//!     }
//! }
//!
//! let mut brancher = solver.default_brancher();
//! let result = solver
//!     .find_all_solutions(&mut brancher, &mut Indefinite)
//!     .expect("the first solve call is legal");
//!
//! assert_eq!(
//!     result,
//!     EnumerationResult {
//!         num_solutions: 2,
//!         complete: true
//!     }
//! );
//! ```
//!
//! The branching is controlled by a [`branching::Brancher`] and the search can be cut short by
//! a [`termination::TerminationCondition`].
#[doc(hidden)]
pub mod asserts;
pub(crate) mod basic_types;
pub mod containers;
pub(crate) mod engine;

pub mod branching;
pub mod constraints;
pub mod optimisation;
pub mod propagators;
pub mod statistics;

pub use convert_case;
pub use rand;

// The API lives in a private module whose items are exported from the crate root, so users
// write `bramble_core::Solver` rather than `bramble_core::api::Solver`.
mod api;

pub use api::*;

pub use crate::api::solver::DefaultBrancher;
pub use crate::api::solver::Solver;
pub use crate::basic_types::ConstraintOperationError;
pub use crate::basic_types::Contradiction;
pub use crate::basic_types::PropagationStatus;
pub use crate::basic_types::Random;
pub use crate::basic_types::Solution;
pub use crate::basic_types::SolveCall;
pub use crate::basic_types::SolverError;
pub use crate::engine::domains::DomainKind;

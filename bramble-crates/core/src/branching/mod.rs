//! Branching decides how the search tree is shaped.
//!
//! At every node the search asks its [`Brancher`] for a [`Decision`]; the left branch applies
//! the decision and the right branch its negation. The usual brancher is the
//! [`IndependentVariableValueBrancher`], which combines a [`VariableSelector`] (which variable to
//! branch on) with a [`ValueSelector`] (how to split its domain):
//!
//! ```rust
//! # use bramble_core::branching::value_selection::InDomainMin;
//! # use bramble_core::branching::variable_selection::FirstFail;
//! # use bramble_core::branching::IndependentVariableValueBrancher;
//! # use bramble_core::Solver;
//! let mut solver = Solver::default();
//! let variables = vec![
//!     solver.new_bounded_variable(0, 10),
//!     solver.new_bounded_variable(3, 5),
//! ];
//!
//! let brancher = IndependentVariableValueBrancher::new(FirstFail::new(&variables), InDomainMin);
//! ```
mod brancher;
pub mod branchers;
mod decision;
mod search_strategy;
mod selection_context;
pub mod tie_breaking;
pub mod value_selection;
pub mod variable_selection;

pub use brancher::Brancher;
pub use branchers::IndependentVariableValueBrancher;
pub use decision::Branch;
pub use decision::Decision;
pub use search_strategy::create_brancher;
pub use search_strategy::ValueOrdering;
pub use search_strategy::VariableOrdering;
pub use selection_context::SelectionContext;
pub use value_selection::ValueSelector;
pub use variable_selection::VariableSelector;

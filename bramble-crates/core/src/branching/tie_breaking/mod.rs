//! Tie-breakers decide between variables which a [`crate::branching::VariableSelector`] rates
//! equally.
mod in_order_tie_breaker;
mod tie_breaker;

pub use in_order_tie_breaker::InOrderTieBreaker;
pub use tie_breaker::Direction;
pub use tie_breaker::TieBreaker;

//! Elementary propagators over integer variables.
//!
//! Each propagator doubles as its own [`PropagatorConstructor`], so it can be handed to the
//! solver directly; most users go through the functions in [`crate::constraints`] instead.
#[cfg(doc)]
use crate::engine::propagation::PropagatorConstructor;

mod arithmetic;
mod binary_table;

pub use arithmetic::*;
pub use binary_table::BinaryTablePropagator;

//! The propagator authoring interface.
//!
//! A propagator is created by a [`PropagatorConstructor`], which subscribes it to the variables
//! it depends on through the [`PropagatorConstructorContext`]. When one of those variables
//! changes, the engine wakes the propagator up and hands it a [`PropagationContext`] through
//! which it may shrink domains. Implementations must be idempotent in effect: calling
//! [`Propagator::propagate`] twice in a row on unchanged domains must not prune anything the
//! first call did not.
mod constructor;
mod contexts;
mod duplication;
mod local_id;
mod propagator;
mod propagator_id;
mod propagator_store;

pub use constructor::PropagatorConstructor;
pub use constructor::PropagatorConstructorContext;
pub use contexts::PropagationContext;
pub use duplication::DuplicationContext;
pub use local_id::LocalId;
pub use propagator::Entailment;
pub use propagator::Priority;
pub use propagator::Propagator;
pub use propagator_id::PropagatorId;
pub(crate) use propagator_store::PropagatorStore;

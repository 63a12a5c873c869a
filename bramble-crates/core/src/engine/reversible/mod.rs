//! The reversible memory underlying every piece of backtrackable solver state.
//!
//! Mutable search state (domain bounds, range endpoints, bitset words, constraint cursors and the
//! counters kept by propagators) lives in a single arena of `i64` cells owned by the
//! [`ReversibleStore`]; components only hold [`ReversibleInt`] handles into it. Opening a world
//! remembers where the undo log ends, and closing it replays the log backwards to that point.
mod reversible_int;
mod store;

pub use reversible_int::ReversibleInt;
pub use store::ReversibleStore;

//! The Bramble constraint programming kernel, re-exported for use as a library alongside the
//! `bramble-solver` command-line front end.
pub use bramble_core::*;

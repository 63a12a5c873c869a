//! Variable selectors choose the variable the next decision is made on.
//!
//! Every selector is constructed with the variables it may choose from, and only considers the
//! ones which are not yet fixed. When all of them are fixed it returns [`None`].
mod anti_first_fail;
mod first_fail;
mod input_order;
mod largest;
mod random;
mod smallest;
mod variable_selector;

pub use anti_first_fail::AntiFirstFail;
pub use first_fail::FirstFail;
pub use input_order::InputOrder;
pub use largest::Largest;
pub use random::RandomSelector;
pub use smallest::Smallest;
pub use variable_selector::VariableSelector;

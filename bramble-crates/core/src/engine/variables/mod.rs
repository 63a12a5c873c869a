//! Integer variables are referred to by a [`DomainId`]; the domain itself lives in the solver's
//! assignments.
mod domain_id;
mod variable_names;

pub use domain_id::DomainId;
pub(crate) use variable_names::VariableNames;

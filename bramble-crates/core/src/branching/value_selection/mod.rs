//! Value selectors turn the variable chosen by a
//! [`VariableSelector`](crate::branching::VariableSelector) into a [`Decision`].
//!
//! An assignment decision on a variable without holes (see [`crate::DomainKind::Interval`])
//! must use one of its bounds, since removing an inner value would not change the domain. The
//! selectors below respect this by falling back to a bound for such variables.
#[cfg(doc)]
use crate::branching::Decision;

mod in_domain_max;
mod in_domain_median;
mod in_domain_min;
mod in_domain_random;
mod in_domain_split;
mod reverse_in_domain_split;
mod value_selector;

pub use in_domain_max::InDomainMax;
pub use in_domain_median::InDomainMedian;
pub use in_domain_min::InDomainMin;
pub use in_domain_random::InDomainRandom;
pub use in_domain_split::InDomainSplit;
pub use reverse_in_domain_split::ReverseInDomainSplit;
pub use value_selector::ValueSelector;

/// The midpoint of the bounds, rounded towards negative infinity.
fn midpoint(lower: i32, upper: i32) -> i32 {
    (lower as i64 + upper as i64).div_euclid(2) as i32
}

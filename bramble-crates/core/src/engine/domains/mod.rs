//! Backtrackable integer domains.
//!
//! A domain is stored in one of three representations (see [`DomainKind`]); all of them keep
//! their state in the [`crate::reversible::ReversibleStore`]. The non-reversible [`IntRangeSet`]
//! and the functions in [`set_algebra`] are used to describe sets of values when building
//! variables and in propagators.
mod bitset_domain;
mod int_range_set;
mod integer_domain;
mod interval_domain;
mod iterators;
mod range_algorithms;
mod range_list_domain;
mod reversible_domain;
pub mod set_algebra;

pub(crate) use bitset_domain::BitsetDomain;
pub use int_range_set::IntRangeSet;
pub use integer_domain::DomainKind;
pub(crate) use integer_domain::IntegerDomain;
pub(crate) use interval_domain::IntervalDomain;
pub use iterators::DomainRanges;
pub use iterators::DomainValues;
pub(crate) use range_list_domain::RangeListDomain;
pub(crate) use reversible_domain::ReversibleDomain;

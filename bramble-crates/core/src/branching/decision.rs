use std::fmt::Display;

use crate::basic_types::Contradiction;
use crate::engine::variables::DomainId;
use crate::engine::ReadDomains;
use crate::engine::State;

/// A binary branching choice. The left branch is explored first; the right branch is its
/// negation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// `variable = value`, then `variable != value`.
    Assign { variable: DomainId, value: i32 },
    /// `variable <= value`, then `variable > value`.
    Split { variable: DomainId, value: i32 },
    /// `variable >= value`, then `variable < value`.
    ReverseSplit { variable: DomainId, value: i32 },
}

/// Which side of a [`Decision`] is being explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Left,
    Right,
}

impl Decision {
    pub fn variable(&self) -> DomainId {
        match *self {
            Decision::Assign { variable, .. }
            | Decision::Split { variable, .. }
            | Decision::ReverseSplit { variable, .. } => variable,
        }
    }

    pub fn value(&self) -> i32 {
        match *self {
            Decision::Assign { value, .. }
            | Decision::Split { value, .. }
            | Decision::ReverseSplit { value, .. } => value,
        }
    }

    /// Whether both branches remove at least one value from the domain of the variable.
    pub fn splits(&self, domains: &impl ReadDomains) -> bool {
        let variable = self.variable();
        let (lower, upper) = (domains.lower_bound(variable), domains.upper_bound(variable));
        if lower == upper {
            return false;
        }
        match *self {
            Decision::Assign { value, .. } => {
                domains.contains(variable, value)
                    && (domains.is_enumerated(variable) || value == lower || value == upper)
            }
            Decision::Split { value, .. } => lower <= value && value < upper,
            Decision::ReverseSplit { value, .. } => lower < value && value <= upper,
        }
    }

    pub(crate) fn apply(&self, branch: Branch, state: &mut State) -> Result<bool, Contradiction> {
        let assignments = &mut state.assignments;
        let store = &mut state.store;
        match (*self, branch) {
            (Decision::Assign { variable, value }, Branch::Left) => {
                assignments.instantiate(store, variable, value)
            }
            (Decision::Assign { variable, value }, Branch::Right) => {
                assignments.remove_value(store, variable, value)
            }
            (Decision::Split { variable, value }, Branch::Left) => {
                assignments.update_upper_bound(store, variable, value)
            }
            (Decision::Split { variable, value }, Branch::Right) => {
                assignments.update_lower_bound(store, variable, value + 1)
            }
            (Decision::ReverseSplit { variable, value }, Branch::Left) => {
                assignments.update_lower_bound(store, variable, value)
            }
            (Decision::ReverseSplit { variable, value }, Branch::Right) => {
                assignments.update_upper_bound(store, variable, value - 1)
            }
        }
    }
}

impl Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Assign { variable, value } => write!(f, "{variable} = {value}"),
            Decision::Split { variable, value } => write!(f, "{variable} <= {value}"),
            Decision::ReverseSplit { variable, value } => write!(f, "{variable} >= {value}"),
        }
    }
}

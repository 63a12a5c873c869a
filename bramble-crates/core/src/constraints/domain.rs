use super::Constraint;
use crate::domains::IntRangeSet;
use crate::variables::DomainId;
use crate::ConstraintOperationError;
use crate::Solver;

/// Creates the [`Constraint`] that `variable` takes one of `values`.
///
/// No propagator is created; the domain of `variable` is restricted at the root when the
/// constraint is posted.
pub fn member(variable: DomainId, values: impl IntoIterator<Item = i32>) -> impl Constraint {
    Membership {
        variable,
        values: IntRangeSet::from_values(values),
        member: true,
    }
}

/// Creates the [`Constraint`] that `variable` takes none of `values`.
///
/// Like [`member`], this only changes the domain of `variable` at the root.
pub fn not_member(variable: DomainId, values: impl IntoIterator<Item = i32>) -> impl Constraint {
    Membership {
        variable,
        values: IntRangeSet::from_values(values),
        member: false,
    }
}

struct Membership {
    variable: DomainId,
    values: IntRangeSet,
    member: bool,
}

impl Constraint for Membership {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        if self.member {
            solver.retain_root_values(self.variable, &self.values)
        } else {
            solver.remove_root_values(self.variable, &self.values)
        }
    }
}

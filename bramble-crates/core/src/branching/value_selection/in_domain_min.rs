use super::ValueSelector;
use crate::branching::Decision;
use crate::branching::SelectionContext;
use crate::engine::variables::DomainId;
use crate::engine::ReadDomains;

/// Assigns the variable to its lower bound.
#[derive(Debug, Copy, Clone, Default)]
pub struct InDomainMin;

impl ValueSelector<DomainId> for InDomainMin {
    fn select_value(
        &mut self,
        context: &mut SelectionContext,
        decision_variable: DomainId,
    ) -> Decision {
        Decision::Assign {
            variable: decision_variable,
            value: context.lower_bound(decision_variable),
        }
    }
}

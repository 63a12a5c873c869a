use super::midpoint;
use super::ValueSelector;
use crate::branching::Decision;
use crate::branching::SelectionContext;
use crate::engine::variables::DomainId;
use crate::engine::ReadDomains;

/// Splits the domain in half, exploring the upper half first: `x > mid`, then `x <= mid`.
#[derive(Debug, Copy, Clone, Default)]
pub struct ReverseInDomainSplit;

impl ValueSelector<DomainId> for ReverseInDomainSplit {
    fn select_value(
        &mut self,
        context: &mut SelectionContext,
        decision_variable: DomainId,
    ) -> Decision {
        let mid = midpoint(
            context.lower_bound(decision_variable),
            context.upper_bound(decision_variable),
        );
        Decision::ReverseSplit {
            variable: decision_variable,
            value: mid + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::TestRandom;
    use crate::engine::test_solver::TestSolver;

    #[test]
    fn the_upper_half_is_explored_first() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 9);
        let mut rng = TestRandom::default();
        let mut context = SelectionContext::new(solver.state.domains(), &mut rng);

        let decision = ReverseInDomainSplit.select_value(&mut context, x);
        assert_eq!(
            decision,
            Decision::ReverseSplit {
                variable: x,
                value: 5
            }
        );
        assert!(decision.splits(&context));
    }
}

use super::midpoint;
use super::ValueSelector;
use crate::branching::Decision;
use crate::branching::SelectionContext;
use crate::engine::variables::DomainId;
use crate::engine::ReadDomains;

/// Splits the domain in half, exploring the lower half first: `x <= mid`, then `x > mid`.
#[derive(Debug, Copy, Clone, Default)]
pub struct InDomainSplit;

impl ValueSelector<DomainId> for InDomainSplit {
    fn select_value(
        &mut self,
        context: &mut SelectionContext,
        decision_variable: DomainId,
    ) -> Decision {
        Decision::Split {
            variable: decision_variable,
            value: midpoint(
                context.lower_bound(decision_variable),
                context.upper_bound(decision_variable),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::TestRandom;
    use crate::engine::test_solver::TestSolver;

    #[test]
    fn the_midpoint_is_rounded_down() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 9);
        let y = solver.new_variable(-5, -2);
        let mut rng = TestRandom::default();
        let mut context = SelectionContext::new(solver.state.domains(), &mut rng);

        assert_eq!(
            InDomainSplit.select_value(&mut context, x),
            Decision::Split {
                variable: x,
                value: 4
            }
        );
        assert_eq!(InDomainSplit.select_value(&mut context, y).value(), -4);
    }

    #[test]
    fn both_branches_of_a_two_value_domain_are_non_empty() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(6, 7);
        let mut rng = TestRandom::default();
        let mut context = SelectionContext::new(solver.state.domains(), &mut rng);

        let decision = InDomainSplit.select_value(&mut context, x);
        assert!(decision.splits(&context));
    }
}

use super::ValueSelector;
use crate::branching::Decision;
use crate::branching::SelectionContext;
use crate::engine::variables::DomainId;
use crate::engine::ReadDomains;

/// Assigns the variable to its upper bound.
#[derive(Debug, Copy, Clone, Default)]
pub struct InDomainMax;

impl ValueSelector<DomainId> for InDomainMax {
    fn select_value(
        &mut self,
        context: &mut SelectionContext,
        decision_variable: DomainId,
    ) -> Decision {
        Decision::Assign {
            variable: decision_variable,
            value: context.upper_bound(decision_variable),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::TestRandom;
    use crate::engine::test_solver::TestSolver;

    #[test]
    fn the_upper_bound_is_assigned() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(-3, 10);
        let _ = solver.remove(x, 10).expect("non-empty");
        let mut rng = TestRandom::default();
        let mut context = SelectionContext::new(solver.state.domains(), &mut rng);

        assert_eq!(
            InDomainMax.select_value(&mut context, x),
            Decision::Assign {
                variable: x,
                value: 9
            }
        );
    }
}

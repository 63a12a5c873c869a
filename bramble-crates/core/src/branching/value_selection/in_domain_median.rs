use super::ValueSelector;
use crate::branching::Decision;
use crate::branching::SelectionContext;
use crate::engine::variables::DomainId;
use crate::engine::ReadDomains;

/// Assigns the variable to the median of its values; with an even number of values, the lower
/// of the two middle ones.
///
/// A variable without holes is assigned its lower bound instead.
#[derive(Debug, Copy, Clone, Default)]
pub struct InDomainMedian;

impl ValueSelector<DomainId> for InDomainMedian {
    fn select_value(
        &mut self,
        context: &mut SelectionContext,
        decision_variable: DomainId,
    ) -> Decision {
        let value = if context.is_enumerated(decision_variable) {
            let size = context.size(decision_variable) as usize;
            context
                .values(decision_variable)
                .nth((size - 1) / 2)
                .unwrap_or_else(|| context.lower_bound(decision_variable))
        } else {
            context.lower_bound(decision_variable)
        };

        Decision::Assign {
            variable: decision_variable,
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::TestRandom;
    use crate::engine::test_solver::TestSolver;

    #[test]
    fn the_median_value_is_assigned() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 10);
        let mut rng = TestRandom::default();
        let mut context = SelectionContext::new(solver.state.domains(), &mut rng);

        assert_eq!(InDomainMedian.select_value(&mut context, x).value(), 5);
    }

    #[test]
    fn holes_are_skipped() {
        let mut solver = TestSolver::default();
        let x = solver.new_sparse_variable(&[1, 2, 8, 9, 10]);
        let _ = solver.remove(x, 8).expect("non-empty");
        let mut rng = TestRandom::default();
        let mut context = SelectionContext::new(solver.state.domains(), &mut rng);

        assert_eq!(InDomainMedian.select_value(&mut context, x).value(), 2);
    }

    #[test]
    fn interval_domains_use_their_lower_bound() {
        let mut solver = TestSolver::default();
        let x = solver.new_interval_variable(4, 20);
        let mut rng = TestRandom::default();
        let mut context = SelectionContext::new(solver.state.domains(), &mut rng);

        assert_eq!(InDomainMedian.select_value(&mut context, x).value(), 4);
    }
}

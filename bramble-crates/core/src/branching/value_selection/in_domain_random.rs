use super::ValueSelector;
use crate::branching::Decision;
use crate::branching::SelectionContext;
use crate::engine::variables::DomainId;
use crate::engine::ReadDomains;

/// Assigns the variable to a value drawn uniformly from its domain.
///
/// A variable without holes is assigned one of its two bounds, each with probability one half.
#[derive(Debug, Copy, Clone, Default)]
pub struct InDomainRandom;

impl ValueSelector<DomainId> for InDomainRandom {
    fn select_value(
        &mut self,
        context: &mut SelectionContext,
        decision_variable: DomainId,
    ) -> Decision {
        let lower_bound = context.lower_bound(decision_variable);
        let value = if context.is_enumerated(decision_variable) {
            let size = context.size(decision_variable) as usize;
            let index = context.random().generate_usize_in_range(0..size);
            context
                .values(decision_variable)
                .nth(index)
                .unwrap_or(lower_bound)
        } else if context.random().generate_bool(0.5) {
            lower_bound
        } else {
            context.upper_bound(decision_variable)
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
    fn the_drawn_value_is_assigned() {
        let mut solver = TestSolver::default();
        let x = solver.new_sparse_variable(&[3, 7, 11, 12]);
        let mut rng = TestRandom {
            usizes: vec![2],
            ..Default::default()
        };
        let mut context = SelectionContext::new(solver.state.domains(), &mut rng);

        assert_eq!(InDomainRandom.select_value(&mut context, x).value(), 11);
    }

    #[test]
    fn interval_domains_draw_a_bound() {
        let mut solver = TestSolver::default();
        let x = solver.new_interval_variable(0, 9);
        let mut rng = TestRandom {
            bools: vec![false, true],
            ..Default::default()
        };
        let mut context = SelectionContext::new(solver.state.domains(), &mut rng);

        assert_eq!(InDomainRandom.select_value(&mut context, x).value(), 9);
        assert_eq!(InDomainRandom.select_value(&mut context, x).value(), 0);
    }
}

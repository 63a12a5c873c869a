use log::warn;

use super::VariableSelector;
use crate::branching::SelectionContext;
use crate::engine::variables::DomainId;
use crate::engine::ReadDomains;

/// Selects an unfixed variable uniformly at random, using the random generator of the solver.
#[derive(Debug, Clone)]
pub struct RandomSelector {
    variables: Vec<DomainId>,
}

impl RandomSelector {
    pub fn new(variables: &[DomainId]) -> Self {
        if variables.is_empty() {
            warn!("The RandomSelector variable selector was not provided with any variables");
        }
        RandomSelector {
            variables: variables.to_vec(),
        }
    }
}

impl VariableSelector<DomainId> for RandomSelector {
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<DomainId> {
        let unfixed = self
            .variables
            .iter()
            .copied()
            .filter(|&variable| !context.is_fixed(variable))
            .collect::<Vec<_>>();
        if unfixed.is_empty() {
            return None;
        }

        let index = context.random().generate_usize_in_range(0..unfixed.len());
        Some(unfixed[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::TestRandom;
    use crate::engine::test_solver::TestSolver;

    #[test]
    fn the_random_index_is_taken_among_unfixed_variables() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 5);
        let y = solver.new_variable(2, 2);
        let z = solver.new_variable(0, 5);
        let mut rng = TestRandom {
            usizes: vec![1],
            ..Default::default()
        };
        let mut context = SelectionContext::new(solver.state.domains(), &mut rng);

        assert_eq!(
            RandomSelector::new(&[x, y, z]).select_variable(&mut context),
            Some(z)
        );
    }
}

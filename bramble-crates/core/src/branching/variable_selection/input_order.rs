use log::warn;

use super::VariableSelector;
use crate::branching::SelectionContext;
use crate::engine::variables::DomainId;
use crate::engine::ReadDomains;

/// Selects the first unfixed variable, in the order the variables were provided.
#[derive(Debug, Clone)]
pub struct InputOrder {
    variables: Vec<DomainId>,
}

impl InputOrder {
    pub fn new(variables: &[DomainId]) -> Self {
        if variables.is_empty() {
            warn!("The InputOrder variable selector was not provided with any variables");
        }
        InputOrder {
            variables: variables.to_vec(),
        }
    }
}

impl VariableSelector<DomainId> for InputOrder {
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<DomainId> {
        self.variables
            .iter()
            .find(|&&variable| !context.is_fixed(variable))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::TestRandom;
    use crate::engine::test_solver::TestSolver;

    #[test]
    fn the_first_unfixed_variable_is_selected() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(3, 3);
        let y = solver.new_variable(0, 10);
        let z = solver.new_variable(0, 1);
        let mut rng = TestRandom::default();
        let mut selector = InputOrder::new(&[x, y, z]);

        let mut context = SelectionContext::new(solver.state.domains(), &mut rng);
        assert_eq!(selector.select_variable(&mut context), Some(y));

        let _ = solver.instantiate(y, 4).expect("4 is in the domain");
        let mut context = SelectionContext::new(solver.state.domains(), &mut rng);
        assert_eq!(selector.select_variable(&mut context), Some(z));
    }

    #[test]
    fn nothing_is_selected_when_all_variables_are_fixed() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(1, 1);
        let mut rng = TestRandom::default();
        let mut context = SelectionContext::new(solver.state.domains(), &mut rng);

        assert_eq!(InputOrder::new(&[x]).select_variable(&mut context), None);
    }
}

use crate::basic_types::PropagationStatus;
use crate::basic_types::SolverError;
use crate::engine::domains::set_algebra;
use crate::engine::propagation::DuplicationContext;
use crate::engine::propagation::Entailment;
use crate::engine::propagation::LocalId;
use crate::engine::propagation::PropagationContext;
use crate::engine::propagation::Propagator;
use crate::engine::propagation::PropagatorConstructor;
use crate::engine::propagation::PropagatorConstructorContext;
use crate::engine::variables::DomainId;
use crate::engine::Domains;
use crate::engine::ReadDomains;

/// Propagator for `z = x + y`.
///
/// Each variable is restricted to the Minkowski sum or difference of the other two domains.
/// This removes every value without support when one of the three variables is fixed, and
/// otherwise at least every value outside the reachable ranges.
#[derive(Clone, Debug)]
pub struct PlusPropagator {
    x: DomainId,
    y: DomainId,
    z: DomainId,
}

impl PlusPropagator {
    pub fn new(x: DomainId, y: DomainId, z: DomainId) -> Self {
        PlusPropagator { x, y, z }
    }
}

impl PropagatorConstructor for PlusPropagator {
    type PropagatorImpl = Self;

    fn create(self, mut context: PropagatorConstructorContext<'_>) -> Self {
        context.register(self.x, LocalId::from(0));
        context.register(self.y, LocalId::from(1));
        context.register(self.z, LocalId::from(2));
        self
    }
}

impl Propagator for PlusPropagator {
    fn name(&self) -> &str {
        "Plus"
    }

    fn propagate(&mut self, mut context: PropagationContext) -> PropagationStatus {
        let sums = set_algebra::plus(&context.snapshot(self.x), &context.snapshot(self.y));
        let _ = context.remove_all_values_but(self.z, &sums)?;

        let x_values = set_algebra::minus(&context.snapshot(self.z), &context.snapshot(self.y));
        let _ = context.remove_all_values_but(self.x, &x_values)?;

        let y_values = set_algebra::minus(&context.snapshot(self.z), &context.snapshot(self.x));
        let _ = context.remove_all_values_but(self.y, &y_values)?;

        if context.is_fixed(self.x) && context.is_fixed(self.y) {
            context.set_passive();
        }
        Ok(())
    }

    fn is_entailed(&self, domains: Domains<'_>) -> Entailment {
        match (
            domains.value(self.x),
            domains.value(self.y),
            domains.value(self.z),
        ) {
            (Some(x), Some(y), Some(z)) if x as i64 + y as i64 == z as i64 => Entailment::True,
            (Some(_), Some(_), Some(_)) => Entailment::False,
            _ => {
                let sums = set_algebra::plus(&domains.snapshot(self.x), &domains.snapshot(self.y));
                if set_algebra::intersection(&sums, &domains.snapshot(self.z)).is_empty() {
                    Entailment::False
                } else {
                    Entailment::Undefined
                }
            }
        }
    }

    fn duplicate(
        &self,
        context: &mut DuplicationContext<'_>,
    ) -> Result<Box<dyn Propagator>, SolverError> {
        Ok(Box::new(PlusPropagator {
            x: context.domain(self.x),
            y: context.domain(self.y),
            z: context.domain(self.z),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_solver::TestSolver;

    #[test]
    fn the_sum_is_restricted_to_reachable_values() {
        let mut solver = TestSolver::default();
        let x = solver.new_sparse_variable(&[0, 10]);
        let y = solver.new_sparse_variable(&[1, 2]);
        let z = solver.new_variable(0, 20);
        let _ = solver
            .new_propagator(PlusPropagator::new(x, y, z))
            .expect("no empty domains");

        assert_eq!(solver.values(z), vec![1, 2, 11, 12]);
    }

    #[test]
    fn the_operands_follow_the_sum() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 10);
        let y = solver.new_variable(3, 3);
        let z = solver.new_variable(0, 20);
        let _ = solver
            .new_propagator(PlusPropagator::new(x, y, z))
            .expect("no empty domains");

        let _ = solver.remove(z, 8).expect("non-empty");
        let _ = solver.set_upper_bound(z, 10).expect("non-empty");
        solver.propagate().expect("non-empty domains");

        assert_eq!(solver.values(x), vec![0, 1, 2, 3, 4, 6, 7]);
    }

    #[test]
    fn a_fixed_sum_with_fixed_operand_fixes_the_other() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 10);
        let y = solver.new_variable(-5, 5);
        let z = solver.new_variable(4, 4);
        let propagator = solver
            .new_propagator(PlusPropagator::new(x, y, z))
            .expect("no empty domains");

        let _ = solver.instantiate(x, 6).expect("6 is in the domain");
        solver.propagate().expect("non-empty domains");

        assert_eq!(solver.values(y), vec![-2]);
        assert_eq!(solver.is_entailed(propagator), Entailment::True);
    }
}

use crate::basic_types::PropagationStatus;
use crate::basic_types::SolverError;
use crate::engine::domains::set_algebra;
use crate::engine::propagation::DuplicationContext;
use crate::engine::propagation::Entailment;
use crate::engine::propagation::LocalId;
use crate::engine::propagation::Priority;
use crate::engine::propagation::PropagationContext;
use crate::engine::propagation::Propagator;
use crate::engine::propagation::PropagatorConstructor;
use crate::engine::propagation::PropagatorConstructorContext;
use crate::engine::variables::DomainId;
use crate::engine::Domains;
use crate::engine::ReadDomains;

/// Domain-consistent propagator for `x = y + c`.
#[derive(Clone, Debug)]
pub struct EqualsPropagator {
    x: DomainId,
    y: DomainId,
    offset: i32,
}

impl EqualsPropagator {
    pub fn new(x: DomainId, y: DomainId, offset: i32) -> Self {
        EqualsPropagator { x, y, offset }
    }
}

impl PropagatorConstructor for EqualsPropagator {
    type PropagatorImpl = Self;

    fn create(self, mut context: PropagatorConstructorContext<'_>) -> Self {
        context.register(self.x, LocalId::from(0));
        context.register(self.y, LocalId::from(1));
        self
    }
}

impl Propagator for EqualsPropagator {
    fn name(&self) -> &str {
        "Equals"
    }

    fn priority(&self) -> Priority {
        Priority::Medium
    }

    fn propagate(&mut self, mut context: PropagationContext) -> PropagationStatus {
        let shifted_y =
            set_algebra::plus_range(&context.snapshot(self.y), self.offset, self.offset);
        let _ = context.remove_all_values_but(self.x, &shifted_y)?;

        let shifted_x =
            set_algebra::minus_range(&context.snapshot(self.x), self.offset, self.offset);
        let _ = context.remove_all_values_but(self.y, &shifted_x)?;

        if context.is_fixed(self.x) {
            context.set_passive();
        }
        Ok(())
    }

    fn is_entailed(&self, domains: Domains<'_>) -> Entailment {
        let shifted_y = set_algebra::plus_range(&domains.snapshot(self.y), self.offset, self.offset);
        let common = set_algebra::intersection(&domains.snapshot(self.x), &shifted_y);
        if common.is_empty() {
            Entailment::False
        } else if domains.is_fixed(self.x) && domains.is_fixed(self.y) {
            Entailment::True
        } else {
            Entailment::Undefined
        }
    }

    fn duplicate(
        &self,
        context: &mut DuplicationContext<'_>,
    ) -> Result<Box<dyn Propagator>, SolverError> {
        Ok(Box::new(EqualsPropagator {
            x: context.domain(self.x),
            y: context.domain(self.y),
            offset: self.offset,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::Contradiction;
    use crate::engine::test_solver::TestSolver;

    #[test]
    fn domains_are_made_equal_up_to_the_offset() {
        let mut solver = TestSolver::default();
        let x = solver.new_sparse_variable(&[0, 2, 4, 6, 8]);
        let y = solver.new_variable(0, 5);
        let _ = solver
            .new_propagator(EqualsPropagator::new(x, y, 1))
            .expect("no empty domains");

        assert_eq!(solver.values(x), vec![2, 4, 6]);
        assert_eq!(solver.values(y), vec![1, 3, 5]);
    }

    #[test]
    fn removals_are_mirrored() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 5);
        let y = solver.new_variable(0, 5);
        let _ = solver
            .new_propagator(EqualsPropagator::new(x, y, 0))
            .expect("no empty domains");

        let _ = solver.remove(y, 3).expect("non-empty");
        solver.propagate().expect("non-empty domains");

        assert!(!solver.contains(x, 3));
    }

    #[test]
    fn disjoint_domains_fail() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 3);
        let y = solver.new_variable(10, 12);

        let result = solver.new_propagator(EqualsPropagator::new(x, y, 0));
        assert_eq!(result, Err(Contradiction::EmptyDomain(x)));
    }
}

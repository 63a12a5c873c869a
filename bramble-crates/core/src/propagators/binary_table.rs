use crate::basic_types::Contradiction;
use crate::basic_types::PropagationStatus;
use crate::basic_types::SolverError;
use crate::create_statistics_struct;
use crate::engine::notifications::DomainEvents;
use crate::engine::propagation::DuplicationContext;
use crate::engine::propagation::Entailment;
use crate::engine::propagation::LocalId;
use crate::engine::propagation::PropagationContext;
use crate::engine::propagation::Propagator;
use crate::engine::propagation::PropagatorConstructor;
use crate::engine::propagation::PropagatorConstructorContext;
use crate::engine::reversible::ReversibleInt;
use crate::engine::variables::DomainId;
use crate::engine::Domains;
use crate::engine::ReadDomains;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;

create_statistics_struct!(
    /// Work done by a [`BinaryTablePropagator`].
    BinaryTableStatistics {
        /// The number of times the values of one variable were checked for support.
        num_revisions: u64,
        /// The number of intervals removed from the domains.
        num_removed_runs: u64,
    }
);

/// For every value of one variable, the values of the other variable it appears with.
#[derive(Clone, Debug, Default)]
struct Supports {
    /// Sorted, without duplicates.
    values: Vec<i32>,
    partners: Vec<Box<[i32]>>,
    /// The index into `partners` of the last support found for each value. Only a hint; it is
    /// checked before it is used, so it need not be restored on backtracking.
    residues: Vec<usize>,
}

impl Supports {
    fn new(mut pairs: Vec<(i32, i32)>) -> Supports {
        pairs.sort_unstable();
        pairs.dedup();

        let mut values = vec![];
        let mut partners: Vec<Vec<i32>> = vec![];
        for (value, partner) in pairs {
            if values.last() != Some(&value) {
                values.push(value);
                partners.push(vec![]);
            }
            if let Some(last) = partners.last_mut() {
                last.push(partner);
            }
        }

        Supports {
            residues: vec![0; values.len()],
            values,
            partners: partners.into_iter().map(Vec::into_boxed_slice).collect(),
        }
    }

    /// Whether `value` has a partner for which `is_present` holds.
    fn is_supported(&mut self, value: i32, is_present: impl Fn(i32) -> bool) -> bool {
        let Ok(index) = self.values.binary_search(&value) else {
            return false;
        };
        let partners = &self.partners[index];
        if is_present(partners[self.residues[index]]) {
            return true;
        }
        match partners.iter().position(|&partner| is_present(partner)) {
            Some(position) => {
                self.residues[index] = position;
                true
            }
            None => false,
        }
    }

    fn contains(&self, value: i32, partner: i32) -> bool {
        self.values
            .binary_search(&value)
            .is_ok_and(|index| self.partners[index].contains(&partner))
    }
}

/// Arc-consistent propagator for `(x, y) ∈ tuples`.
///
/// Every value keeps a residual support: the partner which supported it the last time it was
/// checked. A variable is only revised when the domain of the other variable shrank since its
/// last revision, and unsupported values are removed as maximal runs of consecutive domain
/// values.
#[derive(Clone, Debug)]
pub struct BinaryTablePropagator {
    x: DomainId,
    y: DomainId,
    x_supports: Supports,
    y_supports: Supports,
    /// The size of the domain of `y` when `x` was last revised; -1 before the first revision.
    y_size_at_revision: Option<ReversibleInt>,
    x_size_at_revision: Option<ReversibleInt>,
    statistics: BinaryTableStatistics,
}

impl BinaryTablePropagator {
    pub fn new(x: DomainId, y: DomainId, tuples: &[(i32, i32)]) -> Self {
        BinaryTablePropagator {
            x,
            y,
            x_supports: Supports::new(tuples.to_vec()),
            y_supports: Supports::new(tuples.iter().map(|&(a, b)| (b, a)).collect()),
            y_size_at_revision: None,
            x_size_at_revision: None,
            statistics: BinaryTableStatistics::default(),
        }
    }
}

impl PropagatorConstructor for BinaryTablePropagator {
    type PropagatorImpl = Self;

    fn create(mut self, mut context: PropagatorConstructorContext<'_>) -> Self {
        context.register(self.x, LocalId::from(0));
        context.register(self.y, LocalId::from(1));
        self.y_size_at_revision = Some(context.new_reversible(-1));
        self.x_size_at_revision = Some(context.new_reversible(-1));
        self
    }
}

/// Remove the values of `variable` without a partner in the domain of `other`. Returns whether
/// the domain of `variable` changed.
fn revise(
    context: &mut PropagationContext,
    variable: DomainId,
    other: DomainId,
    supports: &mut Supports,
    other_size_at_revision: Option<ReversibleInt>,
    statistics: &mut BinaryTableStatistics,
) -> Result<bool, Contradiction> {
    let other_size = context.size(other) as i64;
    if let Some(cell) = other_size_at_revision {
        if context.reversible_value(cell) == other_size {
            return Ok(false);
        }
    }
    statistics.num_revisions += 1;

    let mut runs = vec![];
    let mut current_run: Option<(i32, i32)> = None;
    for value in context.values(variable) {
        if supports.is_supported(value, |partner| context.contains(other, partner)) {
            runs.extend(current_run.take());
        } else {
            current_run = Some(current_run.map_or((value, value), |(start, _)| (start, value)));
        }
    }
    runs.extend(current_run);

    let mut changed = false;
    for (start, end) in runs {
        statistics.num_removed_runs += 1;
        changed |= context.remove_interval(variable, start, end)?;
    }
    if let Some(cell) = other_size_at_revision {
        context.set_reversible_value(cell, other_size);
    }
    Ok(changed)
}

/// The entailment of the table once one variable is fixed to `value`: it holds when every
/// remaining partner is in the relation and fails when none is.
fn partner_entailment(
    supports: &Supports,
    value: i32,
    partners: impl IntoIterator<Item = i32>,
) -> Entailment {
    let (mut supported, mut unsupported) = (false, false);
    for partner in partners {
        if supports.contains(value, partner) {
            supported = true;
        } else {
            unsupported = true;
        }
        if supported && unsupported {
            return Entailment::Undefined;
        }
    }
    if unsupported {
        Entailment::False
    } else {
        Entailment::True
    }
}

impl BinaryTablePropagator {
    /// Unsupported values inside the bounds of an interval domain cannot be removed, so a fixed
    /// variable alone does not make the table hold.
    fn set_passive_if_entailed(&self, context: &mut PropagationContext) {
        if self.is_entailed(context.domains()) == Entailment::True {
            context.set_passive();
        }
    }
}

impl Propagator for BinaryTablePropagator {
    fn name(&self) -> &str {
        "BinaryTable"
    }

    fn propagate(&mut self, mut context: PropagationContext) -> PropagationStatus {
        loop {
            let x_changed = revise(
                &mut context,
                self.x,
                self.y,
                &mut self.x_supports,
                self.y_size_at_revision,
                &mut self.statistics,
            )?;
            let y_changed = revise(
                &mut context,
                self.y,
                self.x,
                &mut self.y_supports,
                self.x_size_at_revision,
                &mut self.statistics,
            )?;
            if !x_changed && !y_changed {
                break;
            }
        }

        self.set_passive_if_entailed(&mut context);
        Ok(())
    }

    fn propagate_event(
        &mut self,
        mut context: PropagationContext,
        local_id: LocalId,
        _events: DomainEvents,
    ) -> PropagationStatus {
        // A change to one variable can only cost values of the other their support; if that
        // revision removes anything, the engine wakes this propagator up again for it.
        let _ = if local_id.unpack() == 0 {
            revise(
                &mut context,
                self.y,
                self.x,
                &mut self.y_supports,
                self.x_size_at_revision,
                &mut self.statistics,
            )?
        } else {
            revise(
                &mut context,
                self.x,
                self.y,
                &mut self.x_supports,
                self.y_size_at_revision,
                &mut self.statistics,
            )?
        };
        self.set_passive_if_entailed(&mut context);
        Ok(())
    }

    fn is_entailed(&self, domains: Domains<'_>) -> Entailment {
        if let Some(x) = domains.value(self.x) {
            partner_entailment(&self.x_supports, x, domains.values(self.y))
        } else if let Some(y) = domains.value(self.y) {
            partner_entailment(&self.y_supports, y, domains.values(self.x))
        } else {
            Entailment::Undefined
        }
    }

    fn duplicate(
        &self,
        context: &mut DuplicationContext<'_>,
    ) -> Result<Box<dyn Propagator>, SolverError> {
        Ok(Box::new(BinaryTablePropagator {
            x: context.domain(self.x),
            y: context.domain(self.y),
            x_supports: self.x_supports.clone(),
            y_supports: self.y_supports.clone(),
            y_size_at_revision: self.y_size_at_revision.map(|cell| context.reversible(cell)),
            x_size_at_revision: self.x_size_at_revision.map(|cell| context.reversible(cell)),
            statistics: BinaryTableStatistics::default(),
        }))
    }

    fn log_statistics(&self, statistic_logger: StatisticLogger) {
        self.statistics.log(statistic_logger);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_solver::TestSolver;

    const TUPLES: [(i32, i32); 3] = [(0, -2), (0, 1), (1, 2)];

    #[test]
    fn unsupported_values_are_removed() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 2);
        let y = solver.new_variable(-1, 3);
        let _ = solver
            .new_propagator(BinaryTablePropagator::new(x, y, &TUPLES))
            .expect("no empty domains");

        assert_eq!(solver.values(x), vec![0, 1]);
        assert_eq!(solver.values(y), vec![1, 2]);
    }

    #[test]
    fn losing_a_support_removes_the_partner() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 2);
        let y = solver.new_variable(-1, 3);
        let _ = solver
            .new_propagator(BinaryTablePropagator::new(x, y, &TUPLES))
            .expect("no empty domains");

        solver.push_world();
        let _ = solver.remove(y, 2).expect("non-empty");
        solver.propagate().expect("non-empty domains");
        assert_eq!(solver.values(x), vec![0]);

        solver.pop_world_to(0);
        assert_eq!(solver.values(x), vec![0, 1]);

        let _ = solver.remove(x, 0).expect("non-empty");
        solver.propagate().expect("non-empty domains");
        assert_eq!(solver.values(y), vec![2]);
    }

    #[test]
    fn runs_of_unsupported_values_are_removed_at_once() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 9);
        let y = solver.new_variable(0, 0);
        let _ = solver
            .new_propagator(BinaryTablePropagator::new(x, y, &[(0, 0), (9, 0)]))
            .expect("no empty domains");

        assert_eq!(solver.values(x), vec![0, 9]);
    }

    #[test]
    fn an_interval_partner_keeps_the_propagator_active() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 0);
        let y = solver.new_interval_variable(-2, 1);
        let propagator = solver
            .new_propagator(BinaryTablePropagator::new(x, y, &[(0, -2), (0, 1)]))
            .expect("no empty domains");

        assert_eq!((solver.lower_bound(y), solver.upper_bound(y)), (-2, 1));
        assert_eq!(solver.is_entailed(propagator), Entailment::Undefined);

        let _ = solver.set_lower_bound(y, 0).expect("non-empty");
        let _ = solver.set_upper_bound(y, 0).expect("non-empty");
        assert!(solver.propagate().is_err());
    }

    #[test]
    fn single_events_prune_like_a_full_run() {
        let changes: [fn(&mut TestSolver, DomainId, DomainId); 3] = [
            |solver, x, _| {
                let _ = solver.remove(x, 1).expect("non-empty");
            },
            |solver, _, y| {
                let _ = solver.remove(y, 1).expect("non-empty");
            },
            |solver, _, y| {
                let _ = solver.set_lower_bound(y, 2).expect("non-empty");
            },
        ];

        for change in changes {
            let mut incremental = TestSolver::default();
            let mut full = TestSolver::default();
            let mut variables = vec![];
            for solver in [&mut incremental, &mut full] {
                let x = solver.new_variable(0, 3);
                let y = solver.new_variable(0, 3);
                let tuples = [(0, 0), (1, 1), (1, 2), (2, 2), (3, 0), (3, 3)];
                let _ = solver
                    .new_propagator(BinaryTablePropagator::new(x, y, &tuples))
                    .expect("no empty domains");
                variables.push((x, y));
            }

            let (x, y) = variables[0];
            change(&mut incremental, x, y);
            incremental.propagate().expect("non-empty domains");

            let (x, y) = variables[1];
            change(&mut full, x, y);
            full.propagate_from_scratch().expect("non-empty domains");

            assert_eq!(incremental.values(x), full.values(x));
            assert_eq!(incremental.values(y), full.values(y));
        }
    }

    #[test]
    fn an_empty_relation_fails() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 2);
        let y = solver.new_variable(0, 2);

        let result = solver.new_propagator(BinaryTablePropagator::new(x, y, &[(5, 5)]));
        assert_eq!(result, Err(Contradiction::EmptyDomain(x)));
    }
}

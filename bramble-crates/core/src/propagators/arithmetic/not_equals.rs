use crate::basic_types::PropagationStatus;
use crate::basic_types::SolverError;
use crate::engine::notifications::DomainEvents;
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

/// Propagator for `x != y + c`.
///
/// Only wakes up when one of the two variables is fixed, and then removes the single value the
/// other variable may not take.
#[derive(Clone, Debug)]
pub struct NotEqualsPropagator {
    x: DomainId,
    y: DomainId,
    offset: i32,
}

impl NotEqualsPropagator {
    pub fn new(x: DomainId, y: DomainId, offset: i32) -> Self {
        NotEqualsPropagator { x, y, offset }
    }
}

impl NotEqualsPropagator {
    /// A removal inside the bounds of an interval domain is a no-op, so the forbidden value may
    /// still be present after the other variable is fixed.
    fn set_passive_if_entailed(&self, context: &mut PropagationContext) {
        if self.is_entailed(context.domains()) == Entailment::True {
            context.set_passive();
        }
    }
}

impl PropagatorConstructor for NotEqualsPropagator {
    type PropagatorImpl = Self;

    fn create(self, mut context: PropagatorConstructorContext<'_>) -> Self {
        context.register(self.x, LocalId::from(0));
        context.register(self.y, LocalId::from(1));
        self
    }
}

impl Propagator for NotEqualsPropagator {
    fn name(&self) -> &str {
        "NotEquals"
    }

    fn propagation_mask(&self, _local_id: LocalId) -> DomainEvents {
        DomainEvents::ASSIGN
    }

    fn priority(&self) -> Priority {
        Priority::High
    }

    fn propagate(&mut self, mut context: PropagationContext) -> PropagationStatus {
        if let Some(x) = context.value(self.x) {
            let _ = context.remove_value(self.y, x.wrapping_sub(self.offset))?;
        } else if let Some(y) = context.value(self.y) {
            let _ = context.remove_value(self.x, y.wrapping_add(self.offset))?;
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
        // Only assignments wake this propagator, so the variable behind `local_id` is fixed.
        if local_id.unpack() == 0 {
            if let Some(x) = context.value(self.x) {
                let _ = context.remove_value(self.y, x.wrapping_sub(self.offset))?;
            }
        } else if let Some(y) = context.value(self.y) {
            let _ = context.remove_value(self.x, y.wrapping_add(self.offset))?;
        }
        self.set_passive_if_entailed(&mut context);
        Ok(())
    }

    fn is_entailed(&self, domains: Domains<'_>) -> Entailment {
        match (domains.value(self.x), domains.value(self.y)) {
            (Some(x), Some(y)) if x as i64 == y as i64 + self.offset as i64 => Entailment::False,
            (Some(x), _) if !domains.contains(self.y, x.wrapping_sub(self.offset)) => {
                Entailment::True
            }
            (_, Some(y)) if !domains.contains(self.x, y.wrapping_add(self.offset)) => {
                Entailment::True
            }
            _ => Entailment::Undefined,
        }
    }

    fn duplicate(
        &self,
        context: &mut DuplicationContext<'_>,
    ) -> Result<Box<dyn Propagator>, SolverError> {
        Ok(Box::new(NotEqualsPropagator {
            x: context.domain(self.x),
            y: context.domain(self.y),
            offset: self.offset,
        }))
    }
}

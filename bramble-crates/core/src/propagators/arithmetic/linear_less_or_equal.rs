use crate::basic_types::PropagationStatus;
use crate::basic_types::SolverError;
use crate::bramble_assert_simple;
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

/// Bounds propagator for `sum(w_i * x_i) <= c`.
///
/// Sums are computed in `i64`, so no overflow occurs for `i32` weights and domains.
#[derive(Clone, Debug)]
pub struct LinearLessOrEqualPropagator {
    weights: Box<[i32]>,
    x: Box<[DomainId]>,
    c: i32,
}

impl LinearLessOrEqualPropagator {
    pub fn new(weights: Box<[i32]>, x: Box<[DomainId]>, c: i32) -> Self {
        bramble_assert_simple!(
            weights.len() == x.len(),
            "every variable of a linear constraint needs a weight"
        );
        LinearLessOrEqualPropagator { weights, x, c }
    }

    /// The smallest value of `w * x`.
    fn min_term(domains: &impl ReadDomains, weight: i32, variable: DomainId) -> i64 {
        if weight >= 0 {
            weight as i64 * domains.lower_bound(variable) as i64
        } else {
            weight as i64 * domains.upper_bound(variable) as i64
        }
    }

    fn max_term(domains: &impl ReadDomains, weight: i32, variable: DomainId) -> i64 {
        if weight >= 0 {
            weight as i64 * domains.upper_bound(variable) as i64
        } else {
            weight as i64 * domains.lower_bound(variable) as i64
        }
    }

    fn terms(&self) -> impl Iterator<Item = (i32, DomainId)> + '_ {
        self.weights.iter().copied().zip(self.x.iter().copied())
    }
}

impl PropagatorConstructor for LinearLessOrEqualPropagator {
    type PropagatorImpl = Self;

    fn create(self, mut context: PropagatorConstructorContext<'_>) -> Self {
        for (index, &variable) in self.x.iter().enumerate() {
            context.register(variable, LocalId::from(index as u32));
        }
        self
    }
}

impl Propagator for LinearLessOrEqualPropagator {
    fn name(&self) -> &str {
        "LinearLeq"
    }

    /// Only the bound which makes the term larger can invalidate the sum.
    fn propagation_mask(&self, local_id: LocalId) -> DomainEvents {
        if self.weights[local_id.unpack() as usize] >= 0 {
            DomainEvents::LOWER_BOUND
        } else {
            DomainEvents::UPPER_BOUND
        }
    }

    fn priority(&self) -> Priority {
        Priority::Low
    }

    fn propagate(&mut self, mut context: PropagationContext) -> PropagationStatus {
        let lower_bound_lhs = self
            .terms()
            .map(|(weight, variable)| Self::min_term(&context, weight, variable))
            .sum::<i64>();
        let c = self.c as i64;
        context.check(lower_bound_lhs <= c)?;

        for (weight, variable) in self.terms() {
            if weight == 0 {
                continue;
            }
            let slack = c - (lower_bound_lhs - Self::min_term(&context, weight, variable));
            if weight > 0 {
                let bound = slack.div_euclid(weight as i64);
                if bound < context.upper_bound(variable) as i64 {
                    let _ = context.update_upper_bound(variable, bound as i32)?;
                }
            } else {
                let bound = -slack.div_euclid(-(weight as i64));
                if bound > context.lower_bound(variable) as i64 {
                    let _ = context.update_lower_bound(variable, bound as i32)?;
                }
            }
        }

        let upper_bound_lhs = self
            .terms()
            .map(|(weight, variable)| Self::max_term(&context, weight, variable))
            .sum::<i64>();
        if upper_bound_lhs <= c {
            context.set_passive();
        }
        Ok(())
    }

    fn is_entailed(&self, domains: Domains<'_>) -> Entailment {
        let c = self.c as i64;
        let lower_bound_lhs = self
            .terms()
            .map(|(weight, variable)| Self::min_term(&domains, weight, variable))
            .sum::<i64>();
        let upper_bound_lhs = self
            .terms()
            .map(|(weight, variable)| Self::max_term(&domains, weight, variable))
            .sum::<i64>();

        if upper_bound_lhs <= c {
            Entailment::True
        } else if lower_bound_lhs > c {
            Entailment::False
        } else {
            Entailment::Undefined
        }
    }

    fn duplicate(
        &self,
        context: &mut DuplicationContext<'_>,
    ) -> Result<Box<dyn Propagator>, SolverError> {
        Ok(Box::new(LinearLessOrEqualPropagator {
            weights: self.weights.clone(),
            x: context.domains(&self.x),
            c: self.c,
        }))
    }
}

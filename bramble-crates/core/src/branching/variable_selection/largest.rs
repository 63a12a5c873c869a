use log::warn;

use super::variable_selector::select_by_score;
use super::VariableSelector;
use crate::bramble_assert_eq_simple;
use crate::branching::tie_breaking::Direction;
use crate::branching::tie_breaking::InOrderTieBreaker;
use crate::branching::tie_breaking::TieBreaker;
use crate::branching::SelectionContext;
use crate::engine::variables::DomainId;
use crate::engine::ReadDomains;

/// Selects the variable with the largest upper bound.
///
/// Ties are broken by a [`TieBreaker`], by default the [`InOrderTieBreaker`]; use
/// [`Largest::with_tie_breaker`] to provide another one.
#[derive(Debug, Clone)]
pub struct Largest<TieBreaking = InOrderTieBreaker<DomainId, i32>> {
    variables: Vec<DomainId>,
    tie_breaker: TieBreaking,
}

impl Largest {
    pub fn new(variables: &[DomainId]) -> Self {
        Self::with_tie_breaker(variables, InOrderTieBreaker::new(Direction::Maximum))
    }
}

impl<TieBreaking: TieBreaker<DomainId, i32>> Largest<TieBreaking> {
    pub fn with_tie_breaker(variables: &[DomainId], tie_breaker: TieBreaking) -> Self {
        bramble_assert_eq_simple!(
            tie_breaker.direction(),
            Direction::Maximum,
            "Largest needs a tie-breaker looking for the maximum"
        );
        if variables.is_empty() {
            warn!("The Largest variable selector was not provided with any variables");
        }
        Largest {
            variables: variables.to_vec(),
            tie_breaker,
        }
    }
}

impl<TieBreaking> VariableSelector<DomainId> for Largest<TieBreaking>
where
    TieBreaking: TieBreaker<DomainId, i32>,
{
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<DomainId> {
        select_by_score(
            &self.variables,
            context,
            &mut self.tie_breaker,
            |context, variable| context.upper_bound(variable),
        )
    }
}

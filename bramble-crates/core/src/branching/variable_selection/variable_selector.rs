use crate::branching::tie_breaking::TieBreaker;
use crate::branching::SelectionContext;
use crate::engine::variables::DomainId;
use crate::engine::ReadDomains;

/// Chooses the variable to branch on next; see the [module documentation](super).
pub trait VariableSelector<Var> {
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<Var>;

    /// Called when the search restarts from the root.
    fn on_restart(&mut self) {}
}

impl<Var, Selector: VariableSelector<Var> + ?Sized> VariableSelector<Var> for Box<Selector> {
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<Var> {
        (**self).select_variable(context)
    }

    fn on_restart(&mut self) {
        (**self).on_restart()
    }
}

/// Offer every unfixed variable with its score to the tie-breaker, and return its choice.
pub(crate) fn select_by_score<Value, TieBreaking: TieBreaker<DomainId, Value>>(
    variables: &[DomainId],
    context: &SelectionContext,
    tie_breaker: &mut TieBreaking,
    score: impl Fn(&SelectionContext, DomainId) -> Value,
) -> Option<DomainId> {
    variables
        .iter()
        .filter(|&&variable| !context.is_fixed(variable))
        .for_each(|&variable| tie_breaker.consider(variable, score(context, variable)));
    tie_breaker.select()
}

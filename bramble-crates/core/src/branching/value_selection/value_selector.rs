use crate::branching::Decision;
use crate::branching::SelectionContext;

/// Chooses the decision to make on a variable which is not fixed.
pub trait ValueSelector<Var> {
    fn select_value(&mut self, context: &mut SelectionContext, decision_variable: Var) -> Decision;
}

impl<Var, Selector: ValueSelector<Var> + ?Sized> ValueSelector<Var> for Box<Selector> {
    fn select_value(&mut self, context: &mut SelectionContext, decision_variable: Var) -> Decision {
        (**self).select_value(context, decision_variable)
    }
}

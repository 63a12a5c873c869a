//! A [`Brancher`] which combines a single [`VariableSelector`] with a single [`ValueSelector`].
use std::marker::PhantomData;

use crate::branching::value_selection::ValueSelector;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::Brancher;
use crate::branching::Decision;
use crate::branching::SelectionContext;

/// Chooses a variable with its [`VariableSelector`] and then a decision on that variable with
/// its [`ValueSelector`], independently of one another.
#[derive(Debug)]
pub struct IndependentVariableValueBrancher<Var, VariableSelect, ValueSelect> {
    variable_selector: VariableSelect,
    value_selector: ValueSelect,
    variable_type: PhantomData<Var>,
}

impl<Var, VariableSelect, ValueSelect>
    IndependentVariableValueBrancher<Var, VariableSelect, ValueSelect>
where
    VariableSelect: VariableSelector<Var>,
    ValueSelect: ValueSelector<Var>,
{
    pub fn new(variable_selector: VariableSelect, value_selector: ValueSelect) -> Self {
        IndependentVariableValueBrancher {
            variable_selector,
            value_selector,
            variable_type: PhantomData,
        }
    }
}

impl<Var, VariableSelect, ValueSelect> Brancher
    for IndependentVariableValueBrancher<Var, VariableSelect, ValueSelect>
where
    VariableSelect: VariableSelector<Var>,
    ValueSelect: ValueSelector<Var>,
{
    /// Returns [`None`] once every variable of the selector is fixed.
    fn next_decision(&mut self, context: &mut SelectionContext) -> Option<Decision> {
        self.variable_selector
            .select_variable(context)
            .map(|variable| self.value_selector.select_value(context, variable))
    }

    fn on_restart(&mut self) {
        self.variable_selector.on_restart();
    }
}

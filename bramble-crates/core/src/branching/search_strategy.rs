use super::branchers::IndependentVariableValueBrancher;
use super::value_selection::InDomainMax;
use super::value_selection::InDomainMedian;
use super::value_selection::InDomainMin;
use super::value_selection::InDomainRandom;
use super::value_selection::InDomainSplit;
use super::value_selection::ReverseInDomainSplit;
use super::value_selection::ValueSelector;
use super::variable_selection::AntiFirstFail;
use super::variable_selection::FirstFail;
use super::variable_selection::InputOrder;
use super::variable_selection::Largest;
use super::variable_selection::RandomSelector;
use super::variable_selection::Smallest;
use super::variable_selection::VariableSelector;
use super::Brancher;
use crate::engine::variables::DomainId;

/// The built-in variable selection strategies.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum VariableOrdering {
    /// See [`InputOrder`].
    #[default]
    InputOrder,
    /// See [`FirstFail`].
    FirstFail,
    /// See [`AntiFirstFail`].
    AntiFirstFail,
    /// See [`Smallest`].
    Smallest,
    /// See [`Largest`].
    Largest,
    /// See [`RandomSelector`].
    Random,
}

/// The built-in value selection strategies.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ValueOrdering {
    /// See [`InDomainMin`].
    #[default]
    Min,
    /// See [`InDomainMax`].
    Max,
    /// See [`InDomainMedian`].
    Median,
    /// See [`InDomainRandom`].
    Random,
    /// See [`InDomainSplit`].
    Split,
    /// See [`ReverseInDomainSplit`].
    ReverseSplit,
}

/// Build an [`IndependentVariableValueBrancher`] over `variables` from the two orderings.
pub fn create_brancher(
    variables: &[DomainId],
    variable_ordering: VariableOrdering,
    value_ordering: ValueOrdering,
) -> Box<dyn Brancher> {
    let variable_selector: Box<dyn VariableSelector<DomainId>> = match variable_ordering {
        VariableOrdering::InputOrder => Box::new(InputOrder::new(variables)),
        VariableOrdering::FirstFail => Box::new(FirstFail::new(variables)),
        VariableOrdering::AntiFirstFail => Box::new(AntiFirstFail::new(variables)),
        VariableOrdering::Smallest => Box::new(Smallest::new(variables)),
        VariableOrdering::Largest => Box::new(Largest::new(variables)),
        VariableOrdering::Random => Box::new(RandomSelector::new(variables)),
    };
    let value_selector: Box<dyn ValueSelector<DomainId>> = match value_ordering {
        ValueOrdering::Min => Box::new(InDomainMin),
        ValueOrdering::Max => Box::new(InDomainMax),
        ValueOrdering::Median => Box::new(InDomainMedian),
        ValueOrdering::Random => Box::new(InDomainRandom),
        ValueOrdering::Split => Box::new(InDomainSplit),
        ValueOrdering::ReverseSplit => Box::new(ReverseInDomainSplit),
    };

    Box::new(IndependentVariableValueBrancher::new(
        variable_selector,
        value_selector,
    ))
}

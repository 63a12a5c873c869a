use crate::engine::propagation::PropagatorId;
use crate::engine::variables::DomainId;

/// Returned by a domain representation when an operation would leave it without values.
///
/// The domain is left untouched when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyDomain;

/// The event that the current node of the search tree has no solution.
///
/// A contradiction is ordinary control flow: it is raised by domain operations and propagators,
/// threaded back through [`PropagationStatus`] and absorbed by the search loop, which then
/// backtracks. It never escapes a solve call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Contradiction {
    /// A domain operation would have left the domain of the variable empty.
    EmptyDomain(DomainId),
    /// A propagator proved its constraint false without emptying a domain.
    Inconsistency(PropagatorId),
}

impl Contradiction {
    pub(crate) fn empty_domain(domain: DomainId) -> impl FnOnce(EmptyDomain) -> Contradiction {
        move |_| Contradiction::EmptyDomain(domain)
    }
}

/// The result of invoking a propagator.
pub type PropagationStatus = Result<(), Contradiction>;

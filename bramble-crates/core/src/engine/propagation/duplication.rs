use crate::containers::HashMap;
use crate::containers::KeyedVec;
use crate::engine::reversible::ReversibleInt;
use crate::engine::reversible::ReversibleStore;
use crate::engine::variables::DomainId;

/// Maps the handles of a solver to the handles of its duplicate.
///
/// Variables are mapped through an index table built before the propagators are copied.
/// Reversible cells are created lazily in the target store, holding the value the source cell
/// has at the moment of duplication; asking twice for the same cell yields the same copy.
#[derive(Debug)]
pub struct DuplicationContext<'a> {
    domains: &'a KeyedVec<DomainId, DomainId>,
    source: &'a ReversibleStore,
    target: &'a mut ReversibleStore,
    cells: HashMap<ReversibleInt, ReversibleInt>,
}

impl<'a> DuplicationContext<'a> {
    pub(crate) fn new(
        domains: &'a KeyedVec<DomainId, DomainId>,
        source: &'a ReversibleStore,
        target: &'a mut ReversibleStore,
    ) -> Self {
        DuplicationContext {
            domains,
            source,
            target,
            cells: HashMap::default(),
        }
    }

    /// The variable of the duplicate corresponding to `domain`.
    pub fn domain(&self, domain: DomainId) -> DomainId {
        self.domains[domain]
    }

    pub fn domains(&self, domains: &[DomainId]) -> Box<[DomainId]> {
        domains.iter().map(|&domain| self.domain(domain)).collect()
    }

    /// The cell of the duplicate corresponding to `cell`.
    pub fn reversible(&mut self, cell: ReversibleInt) -> ReversibleInt {
        if let Some(&copy) = self.cells.get(&cell) {
            return copy;
        }
        let copy = self.target.new_int(self.source.get(cell));
        let _ = self.cells.insert(cell, copy);
        copy
    }
}

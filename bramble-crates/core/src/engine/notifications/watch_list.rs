use super::DomainEvents;
use crate::containers::KeyedVec;
use crate::engine::propagation::LocalId;
use crate::engine::propagation::PropagatorId;
use crate::engine::variables::DomainId;

/// A propagator subscribed to a variable, with the events that wake it up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Watcher {
    pub(crate) propagator: PropagatorId,
    pub(crate) local_id: LocalId,
    pub(crate) mask: DomainEvents,
}

/// For every variable, the propagators that watch it.
///
/// Registrations only ever grow; they are not undone on backtracking.
#[derive(Debug, Default, Clone)]
pub(crate) struct WatchList {
    watchers: KeyedVec<DomainId, Vec<Watcher>>,
}

impl WatchList {
    pub(crate) fn grow(&mut self) {
        let _ = self.watchers.push(Vec::new());
    }

    pub(crate) fn watch(&mut self, domain: DomainId, watcher: Watcher) {
        self.watchers.accomodate(domain, Vec::new());
        self.watchers[domain].push(watcher);
    }

    pub(crate) fn watchers(&self, domain: DomainId) -> &[Watcher] {
        self.watchers.get(domain).map_or(&[], |watchers| watchers.as_slice())
    }

    /// Replace the masks of every registration of `propagator` using `mask_of`.
    pub(crate) fn set_masks(
        &mut self,
        propagator: PropagatorId,
        mut mask_of: impl FnMut(LocalId) -> DomainEvents,
    ) {
        for watcher in self.watchers.iter_mut().flatten() {
            if watcher.propagator == propagator {
                watcher.mask = mask_of(watcher.local_id);
            }
        }
    }

    /// Every registration, as `(variable, watcher)` pairs.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (DomainId, Watcher)> + '_ {
        self.watchers
            .keys()
            .zip(self.watchers.iter())
            .flat_map(|(domain, watchers)| watchers.iter().map(move |watcher| (domain, *watcher)))
    }
}

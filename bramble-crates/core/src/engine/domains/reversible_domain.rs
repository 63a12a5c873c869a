use crate::basic_types::EmptyDomain;
use crate::engine::reversible::ReversibleStore;

/// The contract shared by the domain representations.
///
/// All state lives in the [`ReversibleStore`], so every mutation is undone when the world in
/// which it happened is popped. A mutation which would empty the domain returns [`EmptyDomain`]
/// and leaves the domain unchanged.
pub(crate) trait ReversibleDomain {
    fn contains(&self, store: &ReversibleStore, value: i32) -> bool;
    fn first(&self, store: &ReversibleStore) -> i32;
    fn last(&self, store: &ReversibleStore) -> i32;
    fn size(&self, store: &ReversibleStore) -> u64;

    /// The smallest member strictly greater than `value`, or [`i32::MAX`] if none exists.
    fn next_value(&self, store: &ReversibleStore, value: i32) -> i32;
    /// The largest member strictly smaller than `value`, or [`i32::MIN`] if none exists.
    fn previous_value(&self, store: &ReversibleStore, value: i32) -> i32;

    /// The upper end of the maximal run of members containing `value`, which must be a member.
    fn range_end(&self, store: &ReversibleStore, value: i32) -> i32;
    /// The lower end of the maximal run of members containing `value`, which must be a member.
    fn range_start(&self, store: &ReversibleStore, value: i32) -> i32;

    /// Whether the representation can hold holes. Removing an inner value from a domain which
    /// cannot is a no-op.
    fn is_enumerated(&self) -> bool;

    fn remove_interval(
        &mut self,
        store: &mut ReversibleStore,
        lower: i32,
        upper: i32,
    ) -> Result<bool, EmptyDomain>;

    fn remove_value(&mut self, store: &mut ReversibleStore, value: i32) -> Result<bool, EmptyDomain> {
        self.remove_interval(store, value, value)
    }

    fn update_lower_bound(
        &mut self,
        store: &mut ReversibleStore,
        value: i32,
    ) -> Result<bool, EmptyDomain> {
        let first = self.first(store);
        if value <= first {
            return Ok(false);
        }
        self.remove_interval(store, first, value - 1)
    }

    fn update_upper_bound(
        &mut self,
        store: &mut ReversibleStore,
        value: i32,
    ) -> Result<bool, EmptyDomain> {
        let last = self.last(store);
        if value >= last {
            return Ok(false);
        }
        self.remove_interval(store, value + 1, last)
    }
}

use super::ReversibleInt;
use crate::basic_types::Trail;
use crate::bramble_assert_simple;
use crate::containers::KeyedVec;

#[derive(Debug, Clone, Copy)]
struct ReversibleChange {
    cell: ReversibleInt,
    old_value: i64,
}

/// A checkpoint/restore memory manager.
///
/// Every [`ReversibleStore::set`] records the previous value of the cell on a trail. Popping a
/// world restores every cell written since that world was pushed, in reverse order, and leaves
/// writes made before the push untouched.
///
/// # Example
/// ```rust
/// # use bramble_core::reversible::ReversibleStore;
/// let mut store = ReversibleStore::default();
/// let cell = store.new_int(3);
///
/// store.push_world();
/// store.set(cell, 10);
/// store.set(cell, 11);
/// assert_eq!(store.get(cell), 11);
///
/// store.pop_world();
/// assert_eq!(store.get(cell), 3);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ReversibleStore {
    trail: Trail<ReversibleChange>,
    values: KeyedVec<ReversibleInt, i64>,
}

impl ReversibleStore {
    /// Allocate a new cell holding `initial_value`.
    ///
    /// Allocation itself is not undone by popping; a cell created inside a world keeps existing
    /// afterwards, holding whatever value it had when it was created.
    pub fn new_int(&mut self, initial_value: i64) -> ReversibleInt {
        self.values.push(initial_value)
    }

    pub fn get(&self, cell: ReversibleInt) -> i64 {
        self.values[cell]
    }

    pub fn set(&mut self, cell: ReversibleInt, value: i64) {
        let old_value = self.values[cell];
        if old_value == value {
            return;
        }
        self.trail.push(ReversibleChange { cell, old_value });
        self.values[cell] = value;
    }

    pub fn add(&mut self, cell: ReversibleInt, delta: i64) {
        self.set(cell, self.values[cell] + delta);
    }

    /// The number of worlds which are currently pushed.
    pub fn world_index(&self) -> usize {
        self.trail.world()
    }

    pub fn push_world(&mut self) {
        self.trail.open_world();
    }

    /// Restore the state to the moment the current world was pushed.
    ///
    /// # Panics
    /// Popping while no world is pushed is a programming error and panics.
    pub fn pop_world(&mut self) {
        bramble_assert_simple!(
            self.world_index() > 0,
            "attempted to pop a world while at the base world"
        );
        self.pop_world_to(self.world_index() - 1);
    }

    /// Pop worlds until `world` is the current world index.
    pub fn pop_world_to(&mut self, world: usize) {
        bramble_assert_simple!(
            world <= self.world_index(),
            "cannot pop to world {world} from world {}",
            self.world_index()
        );
        if world == self.world_index() {
            return;
        }
        self.trail
            .rewind_to(world)
            .for_each(|change| self.values[change.cell] = change.old_value);
    }

    /// The number of cells allocated so far.
    pub fn num_cells(&self) -> usize {
        self.values.len()
    }

    /// The number of undo entries currently on the trail.
    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }
}

#[cfg(test)]
mod tests {
    use super::ReversibleStore;

    #[test]
    fn nested_worlds_restore_in_order() {
        let mut store = ReversibleStore::default();
        let cell = store.new_int(0);

        store.push_world();
        store.add(cell, 5);
        store.add(cell, 5);
        assert_eq!(store.get(cell), 10);

        store.push_world();
        store.add(cell, 1);
        assert_eq!(store.get(cell), 11);

        store.pop_world();
        assert_eq!(store.get(cell), 10);

        store.pop_world();
        assert_eq!(store.get(cell), 0);
    }

    #[test]
    fn writes_before_a_push_survive_popping_it() {
        let mut store = ReversibleStore::default();
        let cell = store.new_int(1);

        store.push_world();
        store.set(cell, 2);
        store.push_world();
        store.set(cell, 3);
        store.pop_world();

        assert_eq!(store.get(cell), 2);
    }

    #[test]
    fn writing_the_same_value_is_not_trailed() {
        let mut store = ReversibleStore::default();
        let cell = store.new_int(4);

        store.push_world();
        store.set(cell, 4);

        assert_eq!(store.trail_len(), 0);
    }

    #[test]
    fn pop_world_to_skips_several_worlds() {
        let mut store = ReversibleStore::default();
        let first = store.new_int(0);
        let second = store.new_int(0);

        store.push_world();
        store.set(first, 1);
        store.push_world();
        store.set(second, 2);
        store.push_world();
        store.set(first, 3);

        store.pop_world_to(1);

        assert_eq!(store.world_index(), 1);
        assert_eq!(store.get(first), 1);
        assert_eq!(store.get(second), 0);
    }

    #[test]
    fn cells_allocated_inside_a_world_outlive_it() {
        let mut store = ReversibleStore::default();
        store.push_world();
        let cell = store.new_int(9);
        store.set(cell, 10);
        store.pop_world();

        assert_eq!(store.num_cells(), 1);
        assert_eq!(store.get(cell), 9);
    }

    #[test]
    #[should_panic]
    fn popping_the_base_world_panics() {
        let mut store = ReversibleStore::default();
        store.pop_world();
    }
}

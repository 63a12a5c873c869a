use crate::containers::StorageKey;

/// A handle to an integer cell of a [`super::ReversibleStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReversibleInt {
    id: u32,
}

impl StorageKey for ReversibleInt {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        Self { id: index as u32 }
    }
}

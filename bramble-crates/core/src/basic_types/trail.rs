use std::iter::Rev;
use std::vec::Drain;

use crate::bramble_assert_simple;

/// An undo log partitioned into worlds.
///
/// Entries pushed while world `w` is the current world are handed back, newest first, when the
/// trail is rewound to any world below `w`.
#[derive(Clone, Debug)]
pub(crate) struct Trail<T> {
    /// At index i is the length of the log at the moment world i + 1 was opened.
    world_delimiters: Vec<usize>,
    entries: Vec<T>,
}

// Implemented by hand to avoid imposing `Default` on `T`.
impl<T> Default for Trail<T> {
    fn default() -> Self {
        Trail {
            world_delimiters: Vec::default(),
            entries: Vec::default(),
        }
    }
}

impl<T> Trail<T> {
    pub(crate) fn open_world(&mut self) {
        self.world_delimiters.push(self.entries.len());
    }

    pub(crate) fn world(&self) -> usize {
        self.world_delimiters.len()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Drop every world above `world` and return their entries in reverse order of insertion.
    pub(crate) fn rewind_to(&mut self, world: usize) -> Rev<Drain<'_, T>> {
        bramble_assert_simple!(
            world < self.world(),
            "cannot rewind to world {world} from world {}",
            self.world()
        );

        let new_len = self.world_delimiters[world];
        self.world_delimiters.truncate(world);
        self.entries.drain(new_len..).rev()
    }

    pub(crate) fn push(&mut self, entry: T) {
        self.entries.push(entry)
    }
}

use super::IntRangeSet;
use super::ReversibleDomain;
use crate::basic_types::EmptyDomain;
use crate::bramble_assert_simple;
use crate::engine::reversible::ReversibleInt;
use crate::engine::reversible::ReversibleStore;

const WORD_SIZE: usize = 64;

/// An enumerated domain stored as a bit vector whose bit `i` represents the value `offset + i`.
///
/// Each 64-bit word is one reversible cell. The bounds and the cardinality are cached in their
/// own cells so that the common queries do not scan the words.
#[derive(Debug, Clone)]
pub(crate) struct BitsetDomain {
    offset: i32,
    words: Vec<ReversibleInt>,
    lower_bound: ReversibleInt,
    upper_bound: ReversibleInt,
    size: ReversibleInt,
}

impl BitsetDomain {
    pub(crate) fn new(store: &mut ReversibleStore, values: &IntRangeSet) -> Self {
        bramble_assert_simple!(!values.is_empty(), "cannot create an empty domain");

        let offset = values.first();
        let span = (values.last() as i64 - offset as i64 + 1) as usize;
        let mut words = vec![0_u64; span.div_ceil(WORD_SIZE)];
        for value in values.values() {
            let bit = (value as i64 - offset as i64) as usize;
            words[bit / WORD_SIZE] |= 1 << (bit % WORD_SIZE);
        }

        BitsetDomain {
            offset,
            words: words
                .into_iter()
                .map(|word| store.new_int(word as i64))
                .collect(),
            lower_bound: store.new_int(values.first() as i64),
            upper_bound: store.new_int(values.last() as i64),
            size: store.new_int(values.size() as i64),
        }
    }

    fn word(&self, store: &ReversibleStore, index: usize) -> u64 {
        store.get(self.words[index]) as u64
    }

    fn bit_of(&self, value: i32) -> usize {
        (value as i64 - self.offset as i64) as usize
    }

    fn value_of(&self, bit: usize) -> i32 {
        (self.offset as i64 + bit as i64) as i32
    }

    /// The first set bit at or after `bit`.
    fn next_set_bit(&self, store: &ReversibleStore, bit: usize) -> Option<usize> {
        let mut index = bit / WORD_SIZE;
        if index >= self.words.len() {
            return None;
        }
        let mut word = self.word(store, index) & (u64::MAX << (bit % WORD_SIZE));
        loop {
            if word != 0 {
                return Some(index * WORD_SIZE + word.trailing_zeros() as usize);
            }
            index += 1;
            if index == self.words.len() {
                return None;
            }
            word = self.word(store, index);
        }
    }

    /// The last set bit at or before `bit`.
    fn previous_set_bit(&self, store: &ReversibleStore, bit: usize) -> Option<usize> {
        let mut index = bit / WORD_SIZE;
        let shift = WORD_SIZE - 1 - bit % WORD_SIZE;
        let mut word = self.word(store, index) & (u64::MAX >> shift);
        loop {
            if word != 0 {
                return Some(index * WORD_SIZE + WORD_SIZE - 1 - word.leading_zeros() as usize);
            }
            if index == 0 {
                return None;
            }
            index -= 1;
            word = self.word(store, index);
        }
    }

    /// The first unset bit at or after `bit`, which may lie beyond the last word.
    fn next_clear_bit(&self, store: &ReversibleStore, bit: usize) -> usize {
        let mut index = bit / WORD_SIZE;
        if index >= self.words.len() {
            return bit;
        }
        let mut word = !self.word(store, index) & (u64::MAX << (bit % WORD_SIZE));
        loop {
            if word != 0 {
                return index * WORD_SIZE + word.trailing_zeros() as usize;
            }
            index += 1;
            if index == self.words.len() {
                return index * WORD_SIZE;
            }
            word = !self.word(store, index);
        }
    }

    /// The last unset bit at or before `bit`, if any.
    fn previous_clear_bit(&self, store: &ReversibleStore, bit: usize) -> Option<usize> {
        let mut index = bit / WORD_SIZE;
        let shift = WORD_SIZE - 1 - bit % WORD_SIZE;
        let mut word = !self.word(store, index) & (u64::MAX >> shift);
        loop {
            if word != 0 {
                return Some(index * WORD_SIZE + WORD_SIZE - 1 - word.leading_zeros() as usize);
            }
            if index == 0 {
                return None;
            }
            index -= 1;
            word = !self.word(store, index);
        }
    }

    /// Clear the bits `[from, to]`, returning how many were set.
    fn clear_bits(&mut self, store: &mut ReversibleStore, from: usize, to: usize) -> u64 {
        let mut cleared = 0;
        for index in from / WORD_SIZE..=to / WORD_SIZE {
            let low = if index == from / WORD_SIZE { from % WORD_SIZE } else { 0 };
            let high = if index == to / WORD_SIZE {
                to % WORD_SIZE
            } else {
                WORD_SIZE - 1
            };
            let mask = (u64::MAX << low) & (u64::MAX >> (WORD_SIZE - 1 - high));
            let word = self.word(store, index);
            if word & mask != 0 {
                cleared += (word & mask).count_ones() as u64;
                store.set(self.words[index], (word & !mask) as i64);
            }
        }
        cleared
    }
}

impl ReversibleDomain for BitsetDomain {
    fn contains(&self, store: &ReversibleStore, value: i32) -> bool {
        if value < self.first(store) || value > self.last(store) {
            return false;
        }
        let bit = self.bit_of(value);
        self.word(store, bit / WORD_SIZE) & (1 << (bit % WORD_SIZE)) != 0
    }

    fn first(&self, store: &ReversibleStore) -> i32 {
        store.get(self.lower_bound) as i32
    }

    fn last(&self, store: &ReversibleStore) -> i32 {
        store.get(self.upper_bound) as i32
    }

    fn size(&self, store: &ReversibleStore) -> u64 {
        store.get(self.size) as u64
    }

    fn next_value(&self, store: &ReversibleStore, value: i32) -> i32 {
        if value < self.first(store) {
            return self.first(store);
        }
        if value >= self.last(store) {
            return i32::MAX;
        }
        self.next_set_bit(store, self.bit_of(value) + 1)
            .map_or(i32::MAX, |bit| self.value_of(bit))
    }

    fn previous_value(&self, store: &ReversibleStore, value: i32) -> i32 {
        if value > self.last(store) {
            return self.last(store);
        }
        if value <= self.first(store) {
            return i32::MIN;
        }
        self.previous_set_bit(store, self.bit_of(value) - 1)
            .map_or(i32::MIN, |bit| self.value_of(bit))
    }

    fn range_end(&self, store: &ReversibleStore, value: i32) -> i32 {
        let end = self.value_of(self.next_clear_bit(store, self.bit_of(value)) - 1);
        end.min(self.last(store))
    }

    fn range_start(&self, store: &ReversibleStore, value: i32) -> i32 {
        let start = match self.previous_clear_bit(store, self.bit_of(value)) {
            Some(bit) => self.value_of(bit + 1),
            None => self.offset,
        };
        start.max(self.first(store))
    }

    fn is_enumerated(&self) -> bool {
        true
    }

    fn remove_interval(
        &mut self,
        store: &mut ReversibleStore,
        lower: i32,
        upper: i32,
    ) -> Result<bool, EmptyDomain> {
        let first = self.first(store);
        let last = self.last(store);
        let lower = lower.max(first);
        let upper = upper.min(last);
        if lower > upper {
            return Ok(false);
        }
        if lower == first && upper == last {
            return Err(EmptyDomain);
        }

        let cleared = self.clear_bits(store, self.bit_of(lower), self.bit_of(upper));
        if cleared == 0 {
            return Ok(false);
        }
        store.add(self.size, -(cleared as i64));

        if lower == first {
            let new_first = self
                .next_set_bit(store, self.bit_of(upper) + 1)
                .map(|bit| self.value_of(bit));
            if let Some(new_first) = new_first {
                store.set(self.lower_bound, new_first as i64);
            }
        }
        if upper == last {
            let new_last = self
                .previous_set_bit(store, self.bit_of(lower) - 1)
                .map(|bit| self.value_of(bit));
            if let Some(new_last) = new_last {
                store.set(self.upper_bound, new_last as i64);
            }
        }
        Ok(true)
    }
}

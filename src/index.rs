//! The inverted q-gram index: q-gram hash → ordered list of factor IDs
//! (spec §4.3). Backed by a flat array sized `2^hash_width` rather than a
//! hash map — the hash is already dense and small enough (at most 2^25
//! slots at the default interleave) that direct indexing beats a hash map's
//! overhead, and the algorithm is indifferent to the choice (spec §9).

use crate::pool::FactorId;

pub struct PostingIndex {
    lists: Vec<Vec<FactorId>>,
}

impl PostingIndex {
    pub fn new(hash_width_bits: u32) -> Self {
        let slots = 1usize << hash_width_bits;
        Self {
            lists: vec![Vec::new(); slots],
        }
    }

    /// Record that factor `f` contains q-gram `h`. Duplicate `(h, f)` pairs
    /// are meaningful — they mark repeated occurrences within one factor —
    /// and are simply appended again.
    pub fn bang(&mut self, h: u32, f: FactorId) {
        let list = &mut self.lists[h as usize];
        if list.is_empty() {
            list.reserve(64);
        }
        list.push(f);
    }

    pub fn postings(&self, h: u32) -> &[FactorId] {
        &self.lists[h as usize]
    }

    pub fn slot_count(&self) -> usize {
        self.lists.len()
    }

    /// Iterate `(hash, posting_list)` for every slot with a non-empty list,
    /// in ascending hash order. Used by `qgstat`.
    pub fn non_empty_slots(&self) -> impl Iterator<Item = (u32, &[FactorId])> {
        self.lists
            .iter()
            .enumerate()
            .filter(|(_, l)| !l.is_empty())
            .map(|(h, l)| (h as u32, l.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bang_appends_in_arrival_order() {
        let mut idx = PostingIndex::new(4);
        idx.bang(3, 1);
        idx.bang(3, 2);
        idx.bang(3, 1);
        assert_eq!(idx.postings(3), &[1, 2, 1]);
    }

    #[test]
    fn untouched_slots_are_empty() {
        let idx = PostingIndex::new(4);
        assert!(idx.postings(5).is_empty());
    }

    #[test]
    fn non_empty_slots_are_in_ascending_order() {
        let mut idx = PostingIndex::new(4);
        idx.bang(10, 1);
        idx.bang(2, 2);
        idx.bang(2, 3);
        let hashes: Vec<u32> = idx.non_empty_slots().map(|(h, _)| h).collect();
        assert_eq!(hashes, vec![2, 10]);
    }

    #[test]
    fn slot_count_is_power_of_two() {
        let idx = PostingIndex::new(5);
        assert_eq!(idx.slot_count(), 32);
    }
}

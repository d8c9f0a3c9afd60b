use crate::editable_binary_heap::HeapIndex;
use indexmap::map::{Entry as IMEntry, IndexMap};
use std::borrow::Borrow;
use std::hash::{BuildHasher, Hash};

/// Wrapper around possible outer vec index
/// Used to avoid mux up with heap index
/// And to make sure that `Mediator` indexed only with MediatorIndex
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub(crate) struct MediatorIndex(pub(crate) usize);

/// Address of one heap slot inside the occurrence stack of one key.
/// Heap entries keep it instead of the key itself.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub(crate) struct Occurrence {
    pub(crate) key: MediatorIndex,
    pub(crate) rank: usize,
}

/// What happened with key stack after removing one of its occurrences.
pub(crate) enum Removal<'a, TKey> {
    /// Key still has occurrences.
    /// `shifted` are heap positions of occurrences that moved one rank down,
    /// first of them now has rank of removed one.
    Shrunk {
        key: &'a TKey,
        shifted: &'a [HeapIndex],
    },
    /// It was the last occurrence so key left the map.
    /// If some other key took its map index, `moved` contains its stack.
    Vacated {
        key: TKey,
        moved: Option<&'a [HeapIndex]>,
    },
}

/// This is wrapper over indexmap that uses `MediatorIndex` as index.
/// Every key maps to stack of heap positions, one per occurrence, oldest first.
/// Stacks are never empty.
/// Also it centralized checking for panics
#[derive(Clone, Debug)]
pub(crate) struct Mediator<TKey: Hash + Eq, S: BuildHasher> {
    map: IndexMap<TKey, Vec<HeapIndex>, S>,
}

impl<TKey, S> Mediator<TKey, S>
where
    TKey: Hash + Eq,
    S: BuildHasher,
{
    #[inline(always)]
    pub(crate) fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            map: IndexMap::with_capacity_and_hasher(capacity, hasher),
        }
    }

    #[inline(always)]
    pub(crate) fn reserve(&mut self, additional: usize) {
        self.map.reserve(additional)
    }

    /// Number of distinct keys
    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    #[inline(always)]
    pub(crate) fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[inline(always)]
    pub(crate) fn clear(&mut self) {
        self.map.clear()
    }

    #[inline(always)]
    pub(crate) fn get_index(&self, MediatorIndex(position): MediatorIndex) -> (&TKey, &[HeapIndex]) {
        self.map
            .get_index(position)
            .map(|(key, stack)| (key, stack.as_slice()))
            .expect("All mediator indexes must be valid")
    }

    #[inline(always)]
    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&[HeapIndex]>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(key).map(Vec::as_slice)
    }

    #[inline(always)]
    pub(crate) fn get_full<'a, Q>(
        &'a self,
        key: &Q,
    ) -> Option<(MediatorIndex, &'a TKey, &'a [HeapIndex])>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map
            .get_full(key)
            .map(|(idx, key, stack)| (MediatorIndex(idx), key, stack.as_slice()))
    }

    #[inline(always)]
    pub(crate) fn position(&self, occurrence: Occurrence) -> HeapIndex {
        let (_, stack) = self.get_index(occurrence.key);
        stack[occurrence.rank]
    }

    /// Puts heap position on top of key stack, creating stack if key is new.
    pub(crate) fn push_occurrence(&mut self, key: TKey, heap_idx: HeapIndex) -> Occurrence {
        match self.map.entry(key) {
            IMEntry::Occupied(mut entry) => {
                let index = MediatorIndex(entry.index());
                let stack = entry.get_mut();
                stack.push(heap_idx);
                Occurrence {
                    key: index,
                    rank: stack.len() - 1,
                }
            }
            IMEntry::Vacant(entry) => {
                let index = MediatorIndex(entry.index());
                entry.insert(vec![heap_idx]);
                Occurrence {
                    key: index,
                    rank: 0,
                }
            }
        }
    }

    /// Patches the record of a single occurrence after its heap slot changed.
    #[inline(always)]
    pub(crate) fn set_position(&mut self, occurrence: Occurrence, heap_idx: HeapIndex) {
        let (_, stack) = self
            .map
            .get_index_mut(occurrence.key.0)
            .expect("All mediator indexes must be valid");
        stack[occurrence.rank] = heap_idx;
    }

    /// Removes occurrence from its key stack keeping order of the rest.
    /// Caller must fix ranks or key indexes stored in heap using returned info.
    pub(crate) fn remove_occurrence(&mut self, occurrence: Occurrence) -> Removal<TKey> {
        let MediatorIndex(index) = occurrence.key;
        let (_, stack) = self
            .map
            .get_index_mut(index)
            .expect("All mediator indexes must be valid");
        stack.remove(occurrence.rank);
        if !stack.is_empty() {
            let (key, stack) = self.get_index(occurrence.key);
            return Removal::Shrunk {
                key,
                shifted: &stack[occurrence.rank..],
            };
        }

        let (key, _) = self
            .map
            .swap_remove_index(index)
            .expect("All mediator indexes must be valid");
        let moved = self.map.get_index(index).map(|(_, stack)| stack.as_slice());
        Removal::Vacated { key, moved }
    }

    #[inline(always)]
    pub(crate) fn iter(&self) -> impl Iterator<Item = (MediatorIndex, &TKey, &[HeapIndex])> {
        self.map
            .iter()
            .enumerate()
            .map(|(idx, (key, stack))| (MediatorIndex(idx), key, stack.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::RandomState;

    fn new_mediator() -> Mediator<&'static str, RandomState> {
        Mediator::with_capacity_and_hasher(4, RandomState::new())
    }

    #[test]
    fn test_push_occurrence() {
        let mut mediator = new_mediator();
        assert!(mediator.is_empty());
        let first = mediator.push_occurrence("a", HeapIndex::new(0));
        let second = mediator.push_occurrence("b", HeapIndex::new(1));
        let third = mediator.push_occurrence("a", HeapIndex::new(2));

        assert_eq!(first.key, third.key);
        assert_ne!(first.key, second.key);
        assert_eq!((first.rank, second.rank, third.rank), (0, 0, 1));
        assert_eq!(mediator.len(), 2);
        assert_eq!(
            mediator.get("a"),
            Some(&[HeapIndex::new(0), HeapIndex::new(2)][..])
        );
        assert_eq!(mediator.position(third), HeapIndex::new(2));
        assert_eq!(mediator.get("c"), None);
    }

    #[test]
    fn test_set_position() {
        let mut mediator = new_mediator();
        mediator.push_occurrence("a", HeapIndex::new(0));
        let occurrence = mediator.push_occurrence("a", HeapIndex::new(1));
        mediator.set_position(occurrence, HeapIndex::new(5));
        assert_eq!(
            mediator.get("a"),
            Some(&[HeapIndex::new(0), HeapIndex::new(5)][..])
        );
    }

    #[test]
    fn test_remove_from_middle_of_stack() {
        let mut mediator = new_mediator();
        let bottom = mediator.push_occurrence("a", HeapIndex::new(3));
        mediator.push_occurrence("a", HeapIndex::new(1));
        mediator.push_occurrence("a", HeapIndex::new(7));

        match mediator.remove_occurrence(bottom) {
            Removal::Shrunk { key, shifted } => {
                assert_eq!(*key, "a");
                assert_eq!(shifted, &[HeapIndex::new(1), HeapIndex::new(7)][..]);
            }
            Removal::Vacated { .. } => unreachable!(),
        }
        assert_eq!(
            mediator.get("a"),
            Some(&[HeapIndex::new(1), HeapIndex::new(7)][..])
        );
    }

    #[test]
    fn test_remove_last_occurrence_moves_other_key() {
        let mut mediator = new_mediator();
        let a = mediator.push_occurrence("a", HeapIndex::new(0));
        mediator.push_occurrence("b", HeapIndex::new(1));
        mediator.push_occurrence("c", HeapIndex::new(2));
        mediator.push_occurrence("c", HeapIndex::new(3));

        match mediator.remove_occurrence(a) {
            Removal::Vacated { key, moved } => {
                assert_eq!(key, "a");
                assert_eq!(moved, Some(&[HeapIndex::new(2), HeapIndex::new(3)][..]));
            }
            Removal::Shrunk { .. } => unreachable!(),
        }
        assert_eq!(mediator.len(), 2);
        assert_eq!(mediator.get_full("c").map(|(idx, _, _)| idx), Some(a.key));
        assert_eq!(mediator.get("a"), None);
    }

    #[test]
    fn test_remove_last_key() {
        let mut mediator = new_mediator();
        mediator.push_occurrence("a", HeapIndex::new(0));
        let b = mediator.push_occurrence("b", HeapIndex::new(1));
        match mediator.remove_occurrence(b) {
            Removal::Vacated { key, moved } => {
                assert_eq!(key, "b");
                assert_eq!(moved, None);
            }
            Removal::Shrunk { .. } => unreachable!(),
        }
        let collected: Vec<_> = mediator.iter().map(|(_, &k, s)| (k, s.len())).collect();
        assert_eq!(collected, vec![("a", 1)]);
    }
}

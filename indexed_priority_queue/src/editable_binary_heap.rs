use std::cmp::Ord;
use std::fmt::Debug;
use std::vec::Vec;

use crate::mediator::Occurrence;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub(crate) struct HeapIndex(usize);

impl HeapIndex {
    #[inline(always)]
    pub(crate) fn new(v: usize) -> Self {
        Self(v)
    }

    #[inline(always)]
    pub(crate) fn as_usize(self) -> usize {
        self.0
    }
}

pub(crate) struct HeapEntry<TPriority> {
    outer: Occurrence,
    priority: TPriority,
}

/// Min-heap over priorities.
/// Every move of an entry is reported to `change_handler` together with new position
/// so outer index can be kept in sync.
pub(crate) struct BinaryHeap<TPriority>
where
    TPriority: Ord,
{
    data: Vec<HeapEntry<TPriority>>,
}

impl<TPriority: Ord> BinaryHeap<TPriority> {
    #[inline(always)]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    #[inline(always)]
    pub(crate) fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Puts occurrence and priority at the end of heap and lifts it up.
    /// Calls change_handler for every move
    #[inline(always)]
    pub(crate) fn push<TChangeHandler: std::ops::FnMut(Occurrence, HeapIndex)>(
        &mut self,
        outer: Occurrence,
        priority: TPriority,
        change_handler: TChangeHandler,
    ) -> HeapIndex {
        self.data.push(HeapEntry { outer, priority });
        self.sift_up(HeapIndex(self.data.len() - 1), change_handler)
    }

    #[inline(always)]
    pub(crate) fn most_prioritized_idx(&self) -> Option<(Occurrence, HeapIndex)> {
        self.data.first().map(|x| (x.outer, HeapIndex(0)))
    }

    /// Removes item at position and returns it
    /// Last item takes its place and is moved in the direction it needs.
    /// Time complexity - O(log n) swaps and change_handler calls
    pub(crate) fn remove<TChangeHandler: std::ops::FnMut(Occurrence, HeapIndex)>(
        &mut self,
        position: HeapIndex,
        mut change_handler: TChangeHandler,
    ) -> Option<(Occurrence, TPriority)> {
        if self.len() <= position {
            return None;
        }
        let removed = self.data.swap_remove(position.0);
        if position.0 < self.data.len() {
            change_handler(self.data[position.0].outer, position);
            self.restore(position, change_handler);
        }
        Some((removed.outer, removed.priority))
    }

    #[inline(always)]
    pub(crate) fn look_into(&self, position: HeapIndex) -> Option<(Occurrence, &TPriority)> {
        let entry = self.data.get(position.0)?;
        Some((entry.outer, &entry.priority))
    }

    /// Changes priority of queue item
    /// Returns old priority
    pub(crate) fn change_priority<TChangeHandler: std::ops::FnMut(Occurrence, HeapIndex)>(
        &mut self,
        position: HeapIndex,
        updated: TPriority,
        change_handler: TChangeHandler,
    ) -> TPriority {
        assert!(
            position < self.len(),
            "Out of index during changing priority"
        );

        let old = std::mem::replace(&mut self.data[position.0].priority, updated);
        self.restore(position, change_handler);
        old
    }

    /// Changes outer occurrence of element and returns old one
    pub(crate) fn change_outer_pos(&mut self, outer: Occurrence, position: HeapIndex) -> Occurrence {
        assert!(position < self.len(), "Out of index during changing outer pos");
        std::mem::replace(&mut self.data[position.0].outer, outer)
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> HeapIndex {
        HeapIndex(self.data.len())
    }

    #[inline(always)]
    pub(crate) fn usize_len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    pub(crate) fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline(always)]
    pub(crate) fn clear(&mut self) {
        self.data.clear()
    }

    #[inline(always)]
    pub(crate) fn iter(&self) -> BinaryHeapIterator<TPriority> {
        BinaryHeapIterator {
            inner: self.data.iter(),
        }
    }

    /// Tries to lift entry up, if it stays in place, tries to sink it down.
    /// Only one direction can actually move the entry.
    fn restore<TChangeHandler: std::ops::FnMut(Occurrence, HeapIndex)>(
        &mut self,
        position: HeapIndex,
        mut change_handler: TChangeHandler,
    ) -> HeapIndex {
        let lifted = self.sift_up(position, &mut change_handler);
        if lifted != position {
            return lifted;
        }
        self.sift_down(position, change_handler)
    }

    fn sift_up<TChangeHandler: std::ops::FnMut(Occurrence, HeapIndex)>(
        &mut self,
        position: HeapIndex,
        mut change_handler: TChangeHandler,
    ) -> HeapIndex {
        debug_assert!(position.0 < self.data.len(), "Out of index in sift_up");
        let mut position = position.0;
        while position > 0 {
            let parent_pos = (position - 1) / 2;
            if self.data[parent_pos].priority > self.data[position].priority {
                position = self.swap_items(position, parent_pos, &mut change_handler);
            } else {
                break;
            }
        }
        HeapIndex(position)
    }

    fn sift_down<TChangeHandler: std::ops::FnMut(Occurrence, HeapIndex)>(
        &mut self,
        position: HeapIndex,
        mut change_handler: TChangeHandler,
    ) -> HeapIndex {
        debug_assert!(position.0 < self.data.len(), "Out of index in sift_down");
        let mut position = position.0;
        loop {
            let min_child_idx = {
                let child1 = position * 2 + 1;
                let child2 = child1 + 1;
                if child1 >= self.data.len() {
                    break;
                }
                if child2 < self.data.len()
                    && self.data[child2].priority < self.data[child1].priority
                {
                    child2
                } else {
                    child1
                }
            };

            if self.data[position].priority <= self.data[min_child_idx].priority {
                break;
            }
            position = self.swap_items(position, min_child_idx, &mut change_handler);
        }
        HeapIndex(position)
    }

    /// Swaps two entries and reports both new positions.
    /// Returns new position of entry that was at `pos1`.
    #[inline(always)]
    fn swap_items<TChangeHandler: std::ops::FnMut(Occurrence, HeapIndex)>(
        &mut self,
        pos1: usize,
        pos2: usize,
        change_handler: &mut TChangeHandler,
    ) -> usize {
        debug_assert!(pos1 < self.data.len(), "Out of index in first pos in swap");
        debug_assert!(pos2 < self.data.len(), "Out of index in second pos in swap");
        self.data.swap(pos1, pos2);
        change_handler(self.data[pos1].outer, HeapIndex(pos1));
        change_handler(self.data[pos2].outer, HeapIndex(pos2));
        pos2
    }
}

// Default implementations

impl<TPriority: Clone> Clone for HeapEntry<TPriority> {
    fn clone(&self) -> Self {
        Self {
            outer: self.outer,
            priority: self.priority.clone(),
        }
    }
}

impl<TPriority: Copy> Copy for HeapEntry<TPriority> {}

impl<TPriority: Debug> Debug for HeapEntry<TPriority> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(
            f,
            "{{outer: {:?}, priority: {:?}}}",
            &self.outer, &self.priority
        )
    }
}

/// Bottom-up construction used when heap is built from whole sequence at once.
pub(crate) mod for_iteration_construction {
    use super::{BinaryHeap, HeapEntry, HeapIndex};
    use crate::mediator::Occurrence;

    #[inline(always)]
    pub(crate) fn make_heap_entry<TPriority>(
        outer: Occurrence,
        priority: TPriority,
    ) -> HeapEntry<TPriority> {
        HeapEntry { outer, priority }
    }

    /// Sinks every node that has at least one child, from the last one to the root.
    /// Takes ***O(n)*** comparisons.
    pub(crate) fn create_heap<TPriority: Ord>(
        vec: Vec<HeapEntry<TPriority>>,
    ) -> BinaryHeap<TPriority> {
        let mut res = BinaryHeap { data: vec };
        if res.data.len() < 2 {
            return res;
        }
        let last_parent = (res.data.len() - 2) / 2;
        for pos in (0..=last_parent).rev().map(HeapIndex) {
            res.sift_down(pos, |_, _| {});
        }
        res
    }

    #[inline(always)]
    pub(crate) fn reader_iterator<TP: Ord>(
        heap: &BinaryHeap<TP>,
    ) -> impl Iterator<Item = (HeapIndex, Occurrence)> + '_ {
        heap.data
            .iter()
            .enumerate()
            .map(|(i, entry)| (HeapIndex(i), entry.outer))
    }
}

impl<TPriority: Clone + Ord> Clone for BinaryHeap<TPriority> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }
}

impl<TPriority: Debug + Ord> Debug for BinaryHeap<TPriority> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        self.data.fmt(f)
    }
}

/// Level order iterator over heap entries
pub(crate) struct BinaryHeapIterator<'a, TPriority: 'a> {
    inner: std::slice::Iter<'a, HeapEntry<TPriority>>,
}

impl<'a, TPriority: 'a> Iterator for BinaryHeapIterator<'a, TPriority> {
    type Item = (Occurrence, &'a TPriority);

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (entry.outer, &entry.priority))
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    #[inline(always)]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.inner.count()
    }
}

impl<'a, TPriority: 'a> ExactSizeIterator for BinaryHeapIterator<'a, TPriority> {}

use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};
use std::iter::FromIterator;

use crate::editable_binary_heap::for_iteration_construction::{
    create_heap, make_heap_entry, reader_iterator,
};
use crate::editable_binary_heap::{BinaryHeap, BinaryHeapIterator, HeapIndex};
use crate::error::{InvariantError, QueueError};
use crate::mediator::{Mediator, MediatorIndex, Occurrence, Removal};
use crate::pyramid::Pyramid;

/// A min-priority queue that supports lookup by key.
///
/// Smaller `TPriority` values are extracted first.
///
/// The same key may be inserted several times, every insertion creates
/// a separate *occurrence* with its own priority.
/// Occurrences of a key are remembered in insertion order:
/// [`delete`] removes the most recently inserted one,
/// [`extract_min`] removes exactly the one that has the minimal priority.
/// [`change_priority`] works only for keys with single occurrence.
///
/// It is logic error if priority values changes other way than by [`change_priority`] method.
/// It is logic error if key values changes somehow while in queue.
/// This changes normally possible only through `Cell`, `RefCell`, global state, IO, or unsafe code.
///
/// If you feel IndexedPriorityQueue slow, it can be because it uses RandomState (slightly slow but strong against HashDoS attack) hasher by default.
/// For example, you may try [fnv] or [rustc-hash] crates hashers.
///
/// [`delete`]: struct.IndexedPriorityQueue.html#method.delete
/// [`extract_min`]: struct.IndexedPriorityQueue.html#method.extract_min
/// [`change_priority`]: struct.IndexedPriorityQueue.html#method.change_priority
/// [fnv]: https://crates.io/crates/fnv
/// [rustc-hash]: https://crates.io/crates/rustc-hash
///
/// # Examples
///
/// ## Main example
/// ```
/// use indexed_priority_queue::{IndexedPriorityQueue, QueueError};
///
/// let mut queue = IndexedPriorityQueue::new();
///
/// // Currently queue is empty
/// assert_eq!(queue.peek(), Err(QueueError::EmptyHeap));
///
/// queue.insert("Second", 2);
/// queue.insert("Third", 3);
/// queue.insert("First", 1);
/// queue.insert("Fourth", 4);
/// queue.insert("Fifth", 5);
///
/// // Peek return references to most important pair.
/// assert_eq!(queue.peek(), Ok((&"First", &1)));
///
/// assert_eq!(queue.len(), 5);
///
/// // We can clone queue if both key and priority is clonable
/// let queue_clone = queue.clone();
///
/// // We can run consuming iterator on queue,
/// // and it will return items in increasing order
/// for (key, priority) in queue_clone {
///     println!("Priority of key {} is {}", key, priority);
/// }
///
/// // Extracting always will return the smallest element
/// assert_eq!(queue.extract_min(), Ok(("First", 1)));
/// // We can change priority of item by key:
/// assert_eq!(queue.change_priority(&"Fourth", 0), Ok(4));
/// // And get it
/// assert_eq!(queue.get_priority(&"Fourth"), Some(&0));
/// // Now smallest element is Fourth
/// assert_eq!(queue.extract_min(), Ok(("Fourth", 0)));
/// // We can also increase priority!
/// queue.change_priority(&"Second", 10)?;
/// assert_eq!(queue.extract_min(), Ok(("Third", 3)));
/// assert_eq!(queue.extract_min(), Ok(("Fifth", 5)));
/// assert_eq!(queue.extract_min(), Ok(("Second", 10)));
/// // Now queue is empty
/// assert_eq!(queue.extract_min(), Err(QueueError::EmptyHeap));
/// # Ok::<(), QueueError>(())
/// ```
///
/// ## Repeated keys
/// ```
/// use indexed_priority_queue::{IndexedPriorityQueue, QueueError};
///
/// let mut queue = IndexedPriorityQueue::new();
/// queue.insert("job", 5);
/// queue.insert("job", 1);
/// queue.insert("job", 9);
/// queue.insert("other", 3);
///
/// let (_, priorities) = queue.select(&"job")?;
/// assert_eq!(priorities.copied().collect::<Vec<_>>(), vec![5, 1, 9]);
///
/// // It is unclear which occurrence should be changed
/// assert_eq!(
///     queue.change_priority(&"job", 0),
///     Err(QueueError::AmbiguousKey { occurrences: 3 })
/// );
///
/// // The latest occurrence is deleted
/// assert_eq!(queue.delete(&"job"), Ok(9));
/// // While extraction takes the minimal one
/// assert_eq!(queue.extract_min(), Ok(("job", 1)));
/// assert_eq!(queue.occurrences(&"job"), 1);
/// queue.change_priority(&"job", 0)?;
/// assert_eq!(queue.peek(), Ok((&"job", &0)));
/// # Ok::<(), QueueError>(())
/// ```
///
/// ## Partial ord queue
///
/// Float values don't implement Ord so they need a wrapper,
/// see [`FloatPriority`].
///
/// [`FloatPriority`]: struct.FloatPriority.html
#[derive(Clone)]
pub struct IndexedPriorityQueue<TKey, TPriority, S = RandomState>
where
    TKey: Hash + Eq,
    TPriority: Ord,
    S: BuildHasher,
{
    heap: BinaryHeap<TPriority>,
    key_to_pos: Mediator<TKey, S>,
}

impl<TKey: Hash + Eq, TPriority: Ord> IndexedPriorityQueue<TKey, TPriority, RandomState> {
    /// Creates an empty queue
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use indexed_priority_queue::IndexedPriorityQueue;
    /// let mut queue = IndexedPriorityQueue::new();
    /// queue.insert("Key", 4);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity_and_hasher(0, RandomState::default())
    }

    /// Creates an empty queue with allocated memory enough
    /// to keep `capacity` elements without reallocation.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use indexed_priority_queue::IndexedPriorityQueue;
    /// let mut queue = IndexedPriorityQueue::with_capacity(10);
    /// queue.insert("Key", 4);
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::default())
    }
}

impl<TKey: Hash + Eq, TPriority: Ord, S: BuildHasher> IndexedPriorityQueue<TKey, TPriority, S> {
    /// Creates an empty queue with specific Hasher
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use indexed_priority_queue::IndexedPriorityQueue;
    /// use std::collections::hash_map::RandomState;
    /// let mut queue = IndexedPriorityQueue::with_hasher(RandomState::default());
    /// queue.insert("Key", 4);
    /// ```
    #[inline]
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(0, hasher)
    }

    /// Creates an empty queue with allocated memory enough
    /// to keep `capacity` elements without reallocation.
    /// Also useful when Hasher cannot be defaulted.
    #[inline]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            key_to_pos: Mediator::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// Reserves space for at least `additional` new elements.
    ///
    /// ### Panics
    ///
    /// Panics if the new capacity overflows `usize`.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.heap.reserve(additional);
        self.key_to_pos.reserve(additional);
    }

    /// Adds new occurrence of key to queue.
    /// If key is already in queue, it gets one more occurrence, old ones stay untouched.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use indexed_priority_queue::IndexedPriorityQueue;
    /// let mut queue = IndexedPriorityQueue::new();
    /// queue.insert("First", 5);
    /// assert_eq!(queue.peek(), Ok((&"First", &5)));
    /// queue.insert("First", 1);
    /// assert_eq!(queue.peek(), Ok((&"First", &1)));
    /// assert_eq!(queue.len(), 2);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Average complexity is ***O(log n)***
    /// If elements inserted in ascending order, amortized complexity is ***O(1)***.
    ///
    /// The worst case is when reallocation appears.
    /// In this case complexity of single call is ***O(n)***.
    pub fn insert(&mut self, key: TKey, priority: TPriority) {
        // Borrow checker treats borrowing a field as borrowing whole structure
        // so we need to get references to fields to borrow them individually.
        let heap = &mut self.heap;
        let key_to_pos = &mut self.key_to_pos;

        let occurrence = key_to_pos.push_occurrence(key, heap.len());
        heap.push(occurrence, priority, |occurrence, heap_idx| {
            key_to_pos.set_position(occurrence, heap_idx)
        });
    }

    /// Converts `priority` and inserts it like [`insert`] does.
    /// Fails with [`QueueError::InvalidPriority`] if value cannot be converted,
    /// queue stays unchanged in that case.
    ///
    /// ```
    /// use indexed_priority_queue::{FloatPriority, IndexedPriorityQueue, QueueError};
    /// let mut queue: IndexedPriorityQueue<&str, FloatPriority> = IndexedPriorityQueue::new();
    /// assert_eq!(queue.try_insert("a", 0.5), Ok(()));
    /// assert_eq!(queue.try_insert("b", f64::NAN), Err(QueueError::InvalidPriority));
    /// assert_eq!(queue.len(), 1);
    /// ```
    ///
    /// [`insert`]: struct.IndexedPriorityQueue.html#method.insert
    #[inline]
    pub fn try_insert<Q>(&mut self, key: TKey, priority: Q) -> Result<(), QueueError>
    where
        Q: TryInto<TPriority>,
        QueueError: From<Q::Error>,
    {
        let priority = priority.try_into()?;
        self.insert(key, priority);
        Ok(())
    }

    /// Get reference to the pair with the minimal priority.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use indexed_priority_queue::IndexedPriorityQueue;
    /// let queue: IndexedPriorityQueue<i32, i32> = (0..5).map(|x|(x,x)).collect();
    /// assert_eq!(queue.peek(), Ok((&0, &0)));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    pub fn peek(&self) -> Result<(&TKey, &TPriority), QueueError> {
        let (occurrence, heap_idx) = self
            .heap
            .most_prioritized_idx()
            .ok_or(QueueError::EmptyHeap)?;
        let (key, _) = self.key_to_pos.get_index(occurrence.key);
        let (_, priority) = self
            .heap
            .look_into(heap_idx)
            .expect("Checked using most_prioritized_idx");
        Ok((key, priority))
    }

    /// Set new priority for the key and reorder the queue.
    /// Returns old priority if succeeds.
    ///
    /// Fails with [`QueueError::NotFound`] if key is missing
    /// and with [`QueueError::AmbiguousKey`] if key has more than one occurrence.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use indexed_priority_queue::{IndexedPriorityQueue, QueueError};
    /// let mut queue: IndexedPriorityQueue<&str, i32> = [("first", 0), ("second", 1), ("third", 2)]
    ///                             .iter().cloned().collect();
    /// assert_eq!(queue.change_priority(&"second", -5), Ok(1));
    /// assert_eq!(queue.get_priority(&"second"), Some(&-5));
    /// assert_eq!(queue.extract_min(), Ok(("second", -5)));
    /// assert_eq!(queue.change_priority(&"Missing", 5), Err(QueueError::NotFound));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// In best case ***O(1)***, in average costs ***O(log n)***.
    pub fn change_priority<Q>(&mut self, key: &Q, priority: TPriority) -> Result<TPriority, QueueError>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let heap_idx = match self.key_to_pos.get(key) {
            None => return Err(QueueError::NotFound),
            Some(&[single]) => single,
            Some(stack) => {
                return Err(QueueError::AmbiguousKey {
                    occurrences: stack.len(),
                })
            }
        };

        let heap = &mut self.heap;
        let key_to_pos = &mut self.key_to_pos;
        Ok(heap.change_priority(heap_idx, priority, |occurrence, heap_idx| {
            key_to_pos.set_position(occurrence, heap_idx)
        }))
    }

    /// Get key and priorities of all its occurrences in insertion order.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use indexed_priority_queue::{IndexedPriorityQueue, QueueError};
    /// let mut queue = IndexedPriorityQueue::new();
    /// queue.insert(String::from("dee"), 12);
    /// queue.insert(String::from("dee"), 7);
    /// let (key, priorities) = queue.select("dee")?;
    /// assert_eq!(key, "dee");
    /// assert_eq!(priorities.collect::<Vec<_>>(), vec![&12, &7]);
    /// assert!(queue.select("yuji").is_err());
    /// # Ok::<(), QueueError>(())
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(1)*** for lookup, iteration is ***O(k)*** for k occurrences.
    pub fn select<Q>(&self, key: &Q) -> Result<(&TKey, Priorities<TPriority>), QueueError>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (_, key, stack) = self.key_to_pos.get_full(key).ok_or(QueueError::NotFound)?;
        Ok((
            key,
            Priorities {
                heap: &self.heap,
                positions: stack.iter(),
            },
        ))
    }

    /// Get reference to the priority of the most recent occurrence of key.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use indexed_priority_queue::IndexedPriorityQueue;
    /// let queue: IndexedPriorityQueue<&str, i32> = [("first", 0), ("second", 1), ("first", 2)]
    ///                             .iter().cloned().collect();
    /// assert_eq!(queue.get_priority(&"second"), Some(&1));
    /// assert_eq!(queue.get_priority(&"first"), Some(&2));
    /// assert_eq!(queue.get_priority(&"third"), None);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(1)*** in average (limited by hash map key lookup).
    pub fn get_priority<Q>(&self, key: &Q) -> Option<&TPriority>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let &heap_idx = self.key_to_pos.get(key)?.last()?;
        Some(
            self.heap
                .look_into(heap_idx)
                .expect("Must contain if key_to_pos contain")
                .1,
        )
    }

    /// Returns true if key has at least one occurrence in queue.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.key_to_pos.get(key).is_some()
    }

    /// Number of occurrences of key, zero if key is missing.
    #[inline]
    pub fn occurrences<Q>(&self, key: &Q) -> usize
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.key_to_pos.get(key).map_or(0, <[HeapIndex]>::len)
    }

    /// Get the number of elements in queue, occurrences of the same key counted separately.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use indexed_priority_queue::IndexedPriorityQueue;
    /// let queue: IndexedPriorityQueue<i32, i32> = (0..5).map(|x|(x % 2, x)).collect();
    /// assert_eq!(queue.len(), 5);
    /// assert_eq!(queue.key_count(), 2);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.usize_len()
    }

    /// Number of distinct keys in queue.
    #[inline]
    pub fn key_count(&self) -> usize {
        self.key_to_pos.len()
    }

    /// Returns true if queue is empty.
    ///
    /// ```
    /// let mut queue = indexed_priority_queue::IndexedPriorityQueue::new();
    /// assert!(queue.is_empty());
    /// queue.insert(0,5);
    /// assert!(!queue.is_empty());
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    #[inline]
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.heap.is_empty(), self.key_to_pos.is_empty());
        self.heap.is_empty()
    }

    /// Make the queue empty.
    ///
    /// ```
    /// use indexed_priority_queue::IndexedPriorityQueue;
    /// let mut queue: IndexedPriorityQueue<i32, i32> = (0..5).map(|x|(x,x)).collect();
    /// assert!(!queue.is_empty());
    /// queue.clear();
    /// assert!(queue.is_empty());
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Always ***O(n)***
    #[inline]
    pub fn clear(&mut self) {
        self.heap.clear();
        self.key_to_pos.clear();
    }

    /// Get entry stored in heap slot `index`.
    /// Slot 0 is the root, children of slot `i` are `2i + 1` and `2i + 2`.
    ///
    /// ```
    /// use indexed_priority_queue::IndexedPriorityQueue;
    /// let queue: IndexedPriorityQueue<i32, i32> = IndexedPriorityQueue::from_priorities(vec![3, 1, 2]);
    /// assert_eq!(queue.entry_at(0), Some((&1, &1)));
    /// assert_eq!(queue.entry_at(3), None);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    pub fn entry_at(&self, index: usize) -> Option<(&TKey, &TPriority)> {
        let (occurrence, priority) = self.heap.look_into(HeapIndex::new(index))?;
        let (key, _) = self.key_to_pos.get_index(occurrence.key);
        Some((key, priority))
    }

    /// Create readonly borrowing iterator over heap slots in level order.
    ///
    /// ```
    /// use indexed_priority_queue::IndexedPriorityQueue;
    /// use std::collections::HashMap;
    /// let queue: IndexedPriorityQueue<i32, i32> = (0..5).map(|x|(x,x)).collect();
    /// let mut entries = HashMap::new();
    /// for (&key, &priority) in queue.iter(){
    ///     entries.insert(key, priority);
    /// }
    /// let second_map: HashMap<i32, i32> = (0..5).map(|x|(x,x)).collect();
    /// assert_eq!(entries, second_map);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Iterating over whole queue is ***O(n)***
    pub fn iter(&self) -> IndexedPriorityQueueBorrowIter<TKey, TPriority, S> {
        IndexedPriorityQueueBorrowIter {
            key_to_pos: &self.key_to_pos,
            heap_iterator: self.heap.iter(),
        }
    }

    /// Returns value that displays heap level by level.
    ///
    /// ```
    /// use indexed_priority_queue::IndexedPriorityQueue;
    /// let queue: IndexedPriorityQueue<i32, i32> = IndexedPriorityQueue::from_priorities(vec![3, 1, 2]);
    /// assert_eq!(queue.pyramid().to_string(), "  1:1\n3:3 2:2\n");
    /// ```
    #[inline]
    pub fn pyramid(&self) -> Pyramid<TKey, TPriority, S> {
        Pyramid::new(self)
    }

    /// Replaces content of queue with `entries` using bottom-up heap construction.
    /// Repeated keys become separate occurrences ordered by heap slot.
    ///
    /// ```
    /// use indexed_priority_queue::IndexedPriorityQueue;
    /// let mut queue = IndexedPriorityQueue::new();
    /// queue.insert("old", 0);
    /// queue.heapify(vec![("chang", 17), ("sheng", 5), ("dee", 10), ("dee", 8)]);
    /// assert_eq!(queue.len(), 4);
    /// assert_eq!(queue.peek(), Ok((&"sheng", &5)));
    /// assert!(!queue.contains_key(&"old"));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(n)***
    pub fn heapify<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (TKey, TPriority)>,
    {
        self.clear();

        let iter = entries.into_iter();
        let min_size = iter.size_hint().0;
        let mut keys: Vec<Option<TKey>> = Vec::with_capacity(min_size);
        let mut for_heap = Vec::with_capacity(min_size);
        for (key, priority) in iter {
            // Temporary outer position is index of key in `keys`
            let outer = Occurrence {
                key: MediatorIndex(keys.len()),
                rank: 0,
            };
            keys.push(Some(key));
            for_heap.push(make_heap_entry(outer, priority));
        }

        let mut heap = create_heap(for_heap);
        let key_to_pos = &mut self.key_to_pos;
        key_to_pos.reserve(keys.len());
        let relinked: Vec<(HeapIndex, Occurrence)> = reader_iterator(&heap)
            .map(|(heap_idx, temporary)| {
                let key = keys[temporary.key.0]
                    .take()
                    .expect("Every input entry is placed in exactly one slot");
                (heap_idx, key_to_pos.push_occurrence(key, heap_idx))
            })
            .collect();
        for (heap_idx, occurrence) in relinked {
            heap.change_outer_pos(occurrence, heap_idx);
        }
        self.heap = heap;
    }

    /// Verifies heap order and that every key occurrence points to the slot holding it.
    /// Always holds unless there is a bug in the queue or a logic error
    /// (keys or priorities changed by interior mutability).
    ///
    /// ```
    /// use indexed_priority_queue::IndexedPriorityQueue;
    /// let queue: IndexedPriorityQueue<i32, i32> = (0..100).map(|x| (x % 7, x)).collect();
    /// assert_eq!(queue.check_invariants(), Ok(()));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(n)***
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        for (slot, (_, priority)) in self.heap.iter().enumerate().skip(1) {
            let parent = (slot - 1) / 2;
            let (_, parent_priority) = self
                .heap
                .look_into(HeapIndex::new(parent))
                .expect("Parent is always before child");
            if parent_priority > priority {
                return Err(InvariantError::new(format!(
                    "Heap order broken: slot {} is smaller than its parent {}",
                    slot, parent
                )));
            }
        }

        let mut stacked = 0usize;
        for (key_index, _, stack) in self.key_to_pos.iter() {
            if stack.is_empty() {
                return Err(InvariantError::new(format!(
                    "Key {} has empty occurrence stack",
                    key_index.0
                )));
            }
            for (rank, &heap_idx) in stack.iter().enumerate() {
                let expected = Occurrence {
                    key: key_index,
                    rank,
                };
                match self.heap.look_into(heap_idx) {
                    Some((found, _)) if found == expected => {}
                    Some((found, _)) => {
                        return Err(InvariantError::new(format!(
                            "Slot {} holds {:?} but index expects {:?}",
                            heap_idx.as_usize(),
                            found,
                            expected
                        )))
                    }
                    None => {
                        return Err(InvariantError::new(format!(
                            "{:?} points to slot {} outside of heap",
                            expected,
                            heap_idx.as_usize()
                        )))
                    }
                }
                stacked += 1;
            }
        }

        if stacked != self.heap.usize_len() {
            return Err(InvariantError::new(format!(
                "Index tracks {} occurrences but heap has {} slots",
                stacked,
                self.heap.usize_len()
            )));
        }
        Ok(())
    }
}

impl<TKey: Hash + Eq + Clone, TPriority: Ord, S: BuildHasher> IndexedPriorityQueue<TKey, TPriority, S> {
    /// Remove and return item with the minimal priority.
    /// If the key has several occurrences, only the extracted one is removed.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use indexed_priority_queue::{IndexedPriorityQueue, QueueError};
    /// let mut queue: IndexedPriorityQueue<i32, i32> = (0..3).map(|x|(x,x)).collect();
    /// assert_eq!(queue.extract_min(), Ok((0,0)));
    /// assert_eq!(queue.extract_min(), Ok((1,1)));
    /// assert_eq!(queue.extract_min(), Ok((2,2)));
    /// assert_eq!(queue.extract_min(), Err(QueueError::EmptyHeap));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(log n + k)*** where k is number of occurrences of extracted key.
    pub fn extract_min(&mut self) -> Result<(TKey, TPriority), QueueError> {
        let (to_remove, _) = self
            .heap
            .most_prioritized_idx()
            .ok_or(QueueError::EmptyHeap)?;
        Ok(self.remove_internal(to_remove))
    }

    /// Removes the most recently inserted occurrence of key.
    /// Returns its priority if succeeds.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use indexed_priority_queue::{IndexedPriorityQueue, QueueError};
    /// let mut queue: IndexedPriorityQueue<i32, i32> = (0..5).map(|x|(x,x)).collect();
    /// assert_eq!(queue.delete(&2), Ok(2));
    /// assert_eq!(queue.extract_min(), Ok((0,0)));
    /// assert_eq!(queue.extract_min(), Ok((1,1)));
    /// // There is no 2
    /// assert_eq!(queue.extract_min(), Ok((3,3)));
    /// assert_eq!(queue.delete(&10), Err(QueueError::NotFound));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// On average the function will require ***O(log n)*** operations.
    #[inline]
    pub fn delete<Q>(&mut self, key: &Q) -> Result<TPriority, QueueError>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (_, priority) = self.delete_entry(key)?;
        Ok(priority)
    }

    /// Same as [`delete`] but returns key too.
    ///
    /// ```
    /// use indexed_priority_queue::IndexedPriorityQueue;
    /// let mut queue: IndexedPriorityQueue<String, i32> = IndexedPriorityQueue::new();
    /// queue.insert("key".to_owned(), 1);
    /// assert_eq!(queue.delete_entry("key"), Ok(("key".to_owned(), 1)));
    /// ```
    ///
    /// [`delete`]: struct.IndexedPriorityQueue.html#method.delete
    #[inline]
    pub fn delete_entry<Q>(&mut self, key: &Q) -> Result<(TKey, TPriority), QueueError>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (index, _, stack) = self.key_to_pos.get_full(key).ok_or(QueueError::NotFound)?;
        let latest = Occurrence {
            key: index,
            rank: stack.len() - 1,
        };
        Ok(self.remove_internal(latest))
    }

    // Removes exactly this occurrence
    fn remove_internal(&mut self, occurrence: Occurrence) -> (TKey, TPriority) {
        // Borrow checker treats borrowing a field as borrowing whole structure
        // so we need to get references to fields to borrow them individually.
        let key_to_pos = &mut self.key_to_pos;
        let heap = &mut self.heap;

        let heap_to_rem = key_to_pos.position(occurrence);
        let (removed, priority) = heap
            .remove(heap_to_rem, |occurrence, heap_idx| {
                key_to_pos.set_position(occurrence, heap_idx)
            })
            .expect("Checked by key_to_pos");
        debug_assert_eq!(removed, occurrence);

        let key = match key_to_pos.remove_occurrence(occurrence) {
            Removal::Shrunk { key, shifted } => {
                for (offset, &heap_idx) in shifted.iter().enumerate() {
                    let lowered = Occurrence {
                        key: occurrence.key,
                        rank: occurrence.rank + offset,
                    };
                    heap.change_outer_pos(lowered, heap_idx);
                }
                key.clone()
            }
            Removal::Vacated { key, moved } => {
                // Other key took map index of removed one
                for (rank, &heap_idx) in moved.unwrap_or_default().iter().enumerate() {
                    heap.change_outer_pos(
                        Occurrence {
                            key: occurrence.key,
                            rank,
                        },
                        heap_idx,
                    );
                }
                key
            }
        };
        (key, priority)
    }
}

impl<TPriority, S> IndexedPriorityQueue<TPriority, TPriority, S>
where
    TPriority: Hash + Eq + Ord + Clone,
    S: BuildHasher,
{
    /// Inserts bare priority that is also used as its key.
    ///
    /// ```
    /// use indexed_priority_queue::IndexedPriorityQueue;
    /// let mut queue = IndexedPriorityQueue::new();
    /// queue.insert_value(12);
    /// queue.insert_value(7);
    /// assert_eq!(queue.peek(), Ok((&7, &7)));
    /// assert_eq!(queue.delete(&12), Ok(12));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Same as [`insert`](struct.IndexedPriorityQueue.html#method.insert).
    #[inline]
    pub fn insert_value(&mut self, priority: TPriority) {
        self.insert(priority.clone(), priority);
    }
}

impl<TPriority, S> IndexedPriorityQueue<TPriority, TPriority, S>
where
    TPriority: Hash + Eq + Ord + Clone,
    S: BuildHasher + Default,
{
    /// Builds queue from bare priorities, every value is its own key.
    ///
    /// ```
    /// use indexed_priority_queue::IndexedPriorityQueue;
    /// let mut queue: IndexedPriorityQueue<u32, u32> =
    ///     IndexedPriorityQueue::from_priorities(vec![17, 5, 8, 10, 5]);
    /// assert_eq!(queue.occurrences(&5), 2);
    /// assert_eq!(queue.extract_min(), Ok((5, 5)));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(n)***
    pub fn from_priorities<I>(priorities: I) -> Self
    where
        I: IntoIterator<Item = TPriority>,
    {
        priorities
            .into_iter()
            .map(|priority| (priority.clone(), priority))
            .collect()
    }
}

/// Iterator over priorities of all occurrences of one key,
/// returned by [`select`].
///
/// [`select`]: struct.IndexedPriorityQueue.html#method.select
pub struct Priorities<'a, TPriority>
where
    TPriority: 'a + Ord,
{
    heap: &'a BinaryHeap<TPriority>,
    positions: std::slice::Iter<'a, HeapIndex>,
}

impl<'a, TPriority: 'a + Ord> Iterator for Priorities<'a, TPriority> {
    type Item = &'a TPriority;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let heap = self.heap;
        self.positions.next().map(|&heap_idx| {
            heap.look_into(heap_idx)
                .expect("Occurrence stack points into heap")
                .1
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.positions.size_hint()
    }
}

impl<'a, TPriority: 'a + Ord> ExactSizeIterator for Priorities<'a, TPriority> {}

impl<TKey: Hash + Eq + Debug, TPriority: Ord + Debug, S: BuildHasher> Debug
    for IndexedPriorityQueue<TKey, TPriority, S>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "[")?;
        for entry in self.iter() {
            write!(f, "{:?}", entry)?;
        }
        write!(f, "]")
    }
}

impl<TKey: Hash + Eq, TPriority: Ord, S: BuildHasher + Default> Default
    for IndexedPriorityQueue<TKey, TPriority, S>
{
    #[inline]
    fn default() -> Self {
        Self::with_capacity_and_hasher(0, S::default())
    }
}

impl<TKey: Hash + Eq, TPriority: Ord, S: BuildHasher + Default> FromIterator<(TKey, TPriority)>
    for IndexedPriorityQueue<TKey, TPriority, S>
{
    /// Allows building queue from iterator using `collect()`.
    /// Repeated keys are kept as separate occurrences.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use indexed_priority_queue::IndexedPriorityQueue;
    /// let mut queue: IndexedPriorityQueue<&str, i32> =
    /// [("first", 0), ("second", 1), ("third", 2), ("first", -1)]
    ///                             .iter().cloned().collect();
    /// assert_eq!(queue.extract_min(), Ok(("first", -1)));
    /// assert_eq!(queue.extract_min(), Ok(("first", 0)));
    /// assert_eq!(queue.extract_min(), Ok(("second", 1)));
    /// assert_eq!(queue.extract_min(), Ok(("third", 2)));
    /// assert!(queue.is_empty());
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(n)***
    fn from_iter<T: IntoIterator<Item = (TKey, TPriority)>>(iter: T) -> Self {
        let mut queue = Self::default();
        queue.heapify(iter);
        queue
    }
}

impl<TKey: Hash + Eq, TPriority: Ord, S: BuildHasher> Extend<(TKey, TPriority)>
    for IndexedPriorityQueue<TKey, TPriority, S>
{
    fn extend<T: IntoIterator<Item = (TKey, TPriority)>>(&mut self, iter: T) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for (key, priority) in iter {
            self.insert(key, priority);
        }
    }
}

impl<TKey: Hash + Eq + Clone, TPriority: Ord, S: BuildHasher> IntoIterator
    for IndexedPriorityQueue<TKey, TPriority, S>
{
    type Item = (TKey, TPriority);
    type IntoIter = IndexedPriorityQueueIterator<TKey, TPriority, S>;

    /// Make iterator that return items in ascending order.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use indexed_priority_queue::IndexedPriorityQueue;
    /// let queue: IndexedPriorityQueue<&str, i32> =
    ///     [("first", 0), ("second", 1), ("third", 2)]
    ///                             .iter().cloned().collect();
    /// let mut iterator = queue.into_iter();
    /// assert_eq!(iterator.next(), Some(("first", 0)));
    /// assert_eq!(iterator.next(), Some(("second", 1)));
    /// assert_eq!(iterator.next(), Some(("third", 2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(n log n)*** for iteration.
    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter { queue: self }
    }
}

/// This is consuming iterator that returns elements in increasing order
///
/// ### Time complexity
/// Overall complexity of iteration is ***O(n log n)***
pub struct IndexedPriorityQueueIterator<TKey, TPriority, S = RandomState>
where
    TKey: Hash + Eq,
    TPriority: Ord,
    S: BuildHasher,
{
    queue: IndexedPriorityQueue<TKey, TPriority, S>,
}

impl<TKey: Hash + Eq + Clone, TPriority: Ord, S: BuildHasher> Iterator
    for IndexedPriorityQueueIterator<TKey, TPriority, S>
{
    type Item = (TKey, TPriority);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.queue.extract_min().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }

    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.queue.len()
    }
}

impl<TKey: Hash + Eq + Clone, TPriority: Ord, S: BuildHasher> ExactSizeIterator
    for IndexedPriorityQueueIterator<TKey, TPriority, S>
{
}

/// This is level order borrowing iterator over queue.
///
/// ### Time complexity
/// Overall complexity of iteration is ***O(n)***
pub struct IndexedPriorityQueueBorrowIter<'a, TKey, TPriority, S = RandomState>
where
    TKey: 'a + Hash + Eq,
    TPriority: 'a,
    S: BuildHasher,
{
    heap_iterator: BinaryHeapIterator<'a, TPriority>,
    key_to_pos: &'a Mediator<TKey, S>,
}

impl<'a, TKey: 'a + Hash + Eq, TPriority: 'a, S: BuildHasher> Iterator
    for IndexedPriorityQueueBorrowIter<'a, TKey, TPriority, S>
{
    type Item = (&'a TKey, &'a TPriority);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let heap_iterator = &mut self.heap_iterator;
        let key_to_pos = &self.key_to_pos;
        heap_iterator.next().map(|(occurrence, priority)| {
            let (key, _) = key_to_pos.get_index(occurrence.key);
            (key, priority)
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.heap_iterator.size_hint()
    }

    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.heap_iterator.count()
    }
}

impl<'a, TKey: 'a + Hash + Eq, TPriority: 'a, S: BuildHasher> ExactSizeIterator
    for IndexedPriorityQueueBorrowIter<'a, TKey, TPriority, S>
{
}

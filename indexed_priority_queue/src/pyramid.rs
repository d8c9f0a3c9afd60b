use std::collections::hash_map::RandomState;
use std::fmt::{Display, Formatter};
use std::hash::{BuildHasher, Hash};

use crate::indexed_priority_queue::IndexedPriorityQueue;

/// Text view of the heap, one tree level per line.
///
/// Level `l` (1-based) of a heap with height `h` is indented by `2 * (h - l)` spaces
/// and contains up to `2^(l-1)` entries printed as `key:priority` separated by single space.
/// Empty queue is printed as empty string.
///
/// It is built only from [`len`] and [`entry_at`] so it doesn't depend on internals of queue.
///
/// ```
/// use indexed_priority_queue::IndexedPriorityQueue;
/// let mut queue = IndexedPriorityQueue::new();
/// for (key, priority) in [("a", 1), ("b", 2), ("c", 3), ("d", 4)] {
///     queue.insert(key, priority);
/// }
/// assert_eq!(queue.pyramid().to_string(), "    a:1\n  b:2 c:3\nd:4\n");
/// ```
///
/// [`len`]: struct.IndexedPriorityQueue.html#method.len
/// [`entry_at`]: struct.IndexedPriorityQueue.html#method.entry_at
pub struct Pyramid<'a, TKey, TPriority, S = RandomState>
where
    TKey: Hash + Eq,
    TPriority: Ord,
    S: BuildHasher,
{
    queue: &'a IndexedPriorityQueue<TKey, TPriority, S>,
}

impl<'a, TKey, TPriority, S> Pyramid<'a, TKey, TPriority, S>
where
    TKey: Hash + Eq,
    TPriority: Ord,
    S: BuildHasher,
{
    #[inline]
    pub(crate) fn new(queue: &'a IndexedPriorityQueue<TKey, TPriority, S>) -> Self {
        Self { queue }
    }

    /// Number of lines in the view, `floor(log2 n) + 1` for non-empty queue.
    #[inline]
    pub fn height(&self) -> usize {
        let len = self.queue.len();
        (usize::BITS - len.leading_zeros()) as usize
    }
}

impl<'a, TKey, TPriority, S> Display for Pyramid<'a, TKey, TPriority, S>
where
    TKey: Hash + Eq + Display,
    TPriority: Ord + Display,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let len = self.queue.len();
        let height = self.height();
        let mut first = 0;
        for level in 1..=height {
            write!(f, "{:indent$}", "", indent = 2 * (height - level))?;
            let width = 1usize << (level - 1);
            for slot in first..std::cmp::min(first + width, len) {
                if slot > first {
                    f.write_str(" ")?;
                }
                if let Some((key, priority)) = self.queue.entry_at(slot) {
                    write!(f, "{}:{}", key, priority)?;
                }
            }
            f.write_str("\n")?;
            first += width;
        }
        Ok(())
    }
}

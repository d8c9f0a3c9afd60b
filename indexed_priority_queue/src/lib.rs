//! This is min-priority queue that keeps track of where every key is stored in the heap.
//!
//! It uses IndexMap and own implementation of binary heap to achieve this.
//!
//! Each entry has associated *key* and *priority*.
//! Keys must be hashable; priorities must implement Ord trait.
//! The same key may be inserted several times, each insertion is a separate occurrence.
//!
//! Extracting returns element with the smallest priority.
//! Also it is possible to change priority or delete item by key.
//!
//! Insert, extract, change priority, delete by key have ***O(log n)*** time complexity;
//! peek, lookup by key are ***O(1)***.
//!
//! # Examples
//!
//! This is implementation of [A* algorithm][a_star] for 2D grid.
//! Each cell in grid has the cost.
//! This algorithm finds shortest path to target using heuristics.
//!
//! Let open set be the set of position where algorithm can move in next step.
//! Sometimes better path for node in open set is found
//! so the priority of it needs to be updated with new value.
//!
//! This example shows how to change priority in [`IndexedPriorityQueue`] when needed.
//!
//! [a_star]: https://en.wikipedia.org/wiki/A*_search_algorithm
//! [`IndexedPriorityQueue`]: struct.IndexedPriorityQueue.html
//!
//! ```
//! use indexed_priority_queue::IndexedPriorityQueue;
//! use std::collections::HashSet;
//! use std::ops::Index;
//!
//! struct Field {
//!     rows: usize,
//!     columns: usize,
//!     costs: Box<[u32]>,
//! }
//!
//! #[derive(Eq, PartialEq, Debug, Hash, Copy, Clone)]
//! struct Position {
//!     row: usize,
//!     column: usize,
//! }
//!
//! impl Index<Position> for Field {
//!     type Output = u32;
//!
//!     fn index(&self, index: Position) -> &Self::Output {
//!         &self.costs[self.columns * index.row + index.column]
//!     }
//! }
//!
//! // From cell we can move upper, right, bottom and left
//! fn get_neighbors(pos: Position, field: &Field) -> Vec<Position> {
//!     let mut items = Vec::with_capacity(4);
//!     if pos.row > 0 {
//!         items.push(Position { row: pos.row - 1, column: pos.column });
//!     }
//!     if pos.row + 1 < field.rows {
//!         items.push(Position { row: pos.row + 1, column: pos.column });
//!     }
//!     if pos.column > 0 {
//!         items.push(Position { row: pos.row, column: pos.column - 1 });
//!     }
//!     if pos.column + 1 < field.columns {
//!         items.push(Position { row: pos.row, column: pos.column + 1 });
//!     }
//!     items
//! }
//!
//! fn find_path(start: Position, target: Position, field: &Field) -> Option<u32> {
//!     if start == target {
//!         return Some(field[start]);
//!     }
//!     let calc_heuristic = |pos: Position| -> u32 {
//!         ((target.row as isize - pos.row as isize).abs()
//!             + (target.column as isize - pos.column as isize).abs()) as u32
//!     };
//!
//!     // Already handled this points
//!     let mut closed_set: HashSet<Position> = HashSet::new();
//!     // Positions sortered by total cost and real cost.
//!     // We prefer items with lower real cost if total ones are same.
//!     #[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
//!     struct Cost {
//!         total: u32,
//!         real: u32,
//!     }
//!     // Queue that contains all nodes that available for next step
//!     let mut available = IndexedPriorityQueue::<Position, Cost>::new();
//!     available.insert(
//!         start,
//!         Cost {
//!             total: calc_heuristic(start),
//!             real: 0,
//!         },
//!     );
//!     while let Ok((current_pos, current_cost)) = available.extract_min() {
//!         // We have reached target
//!         if current_pos == target {
//!             return Some(current_cost.real);
//!         }
//!
//!         closed_set.insert(current_pos);
//!
//!         for next in get_neighbors(current_pos, &field).into_iter()
//!             .filter(|x| !closed_set.contains(x))
//!             {
//!                 let real = field[next] + current_cost.real;
//!                 let total = current_cost.real + calc_heuristic(next);
//!                 let cost = Cost { total, real };
//!                 match available.get_priority(&next) {
//!                     // Add new position to queue
//!                     None => available.insert(next, cost),
//!                     // Have found better path to node in queue
//!                     Some(&old) if cost < old => {
//!                         available.change_priority(&next, cost).ok()?;
//!                     }
//!                     _ => { /* Have found worse path. */ }
//!                 };
//!             }
//!     }
//!     None
//! }
//!
//!let field = Field {
//!    rows: 4,
//!    columns: 4,
//!    costs: vec![
//!        1, 3, 3, 6, //
//!        4, 4, 3, 8, //
//!        3, 1, 2, 4, //
//!        4, 8, 9, 4, //
//!    ].into_boxed_slice(),
//!};
//!
//!let start = Position { row: 0, column: 0 };
//!let end = Position { row: 3, column: 3 };
//!assert_eq!(find_path(start, end, &field), Some(18));
//! ```
//!
//! [`FloatPriority`] allows to use floats as priorities:
//!
//! ```
//! use indexed_priority_queue::{FloatPriority, IndexedPriorityQueue, QueueError};
//!
//! let mut queue: IndexedPriorityQueue<&str, FloatPriority> = IndexedPriorityQueue::new();
//! queue.try_insert("alhazen", 2.5)?;
//! queue.try_insert("guang", -1.0)?;
//! assert_eq!(queue.try_insert("dee", f64::NAN), Err(QueueError::InvalidPriority));
//! assert_eq!(queue.extract_min()?.0, "guang");
//! # Ok::<(), QueueError>(())
//! ```
//!
//! [`FloatPriority`]: struct.FloatPriority.html

mod editable_binary_heap;
mod error;
mod indexed_priority_queue;
mod mediator;
mod priority;
mod pyramid;

pub use crate::error::{InvariantError, QueueError};
pub use crate::indexed_priority_queue::{
    IndexedPriorityQueue, IndexedPriorityQueueBorrowIter, IndexedPriorityQueueIterator,
    Priorities,
};
pub use crate::priority::FloatPriority;
pub use crate::pyramid::Pyramid;

#[doc = include_str!("../../Readme.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

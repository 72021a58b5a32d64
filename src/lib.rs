//! Predicate-Ordered Binary Heap
//!
//! This crate provides [`PriorityHeap`], an array-backed binary heap whose
//! ordering is decided by a caller-supplied predicate rather than an `Ord`
//! bound on the element type. Passing a "less-than" predicate yields a
//! min-heap; "greater-than" yields a max-heap; any other total order works
//! the same way, which is useful for custom element types such as tuples.
//!
//! Unlike `std::collections::BinaryHeap`, elements can also be removed from
//! an arbitrary position, not just the root.
//!
//! # Time Complexity
//!
//! | Operation       | Complexity |
//! |-----------------|------------|
//! | `push`          | O(log n)   |
//! | `pop`           | O(log n)   |
//! | `peek`          | O(1)       |
//! | `from_vec`      | O(n)       |
//! | `remove(index)` | O(log n)   |
//! | `position`      | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use priority_heap::PriorityHeap;
//!
//! let mut heap = PriorityHeap::new(|a: &i32, b: &i32| a < b);
//! heap.push(5);
//! heap.push(3);
//! heap.push(8);
//! heap.push(1);
//!
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.peek(), Some(&3));
//! ```

pub mod binary;

// Re-export the main type for convenience
pub use binary::PriorityHeap;

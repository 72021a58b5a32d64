//! Array-backed binary heap ordered by a caller-supplied predicate
//!
//! The heap stores its nodes in a `Vec<T>` laid out as a complete binary
//! tree: node `i` has children at `2i + 1` and `2i + 2` and its parent at
//! `(i - 1) / 2`. The ordering predicate is fixed at construction and
//! decides which of two elements comes first, so the same type serves as
//! a min-heap or a max-heap depending on the predicate passed in.
//!
//! # Example
//!
//! ```rust
//! use priority_heap::PriorityHeap;
//!
//! // Max-heap over i32: "greater-than" means "comes first".
//! let mut heap = PriorityHeap::from_vec(vec![3, 1, 4, 1, 5], |a: &i32, b: &i32| a > b);
//!
//! assert_eq!(heap.pop(), Some(5));
//! assert_eq!(heap.pop(), Some(4));
//! assert_eq!(heap.pop(), Some(3));
//! ```

use std::fmt;

/// A binary heap ordered by the predicate supplied at construction
///
/// The predicate must be a strict total order ("comes before"): `a < b`
/// for a min-heap, `a > b` for a max-heap. An inconsistent predicate is
/// not detected; the heap property simply may not hold afterward.
///
/// Heap invariant: for every node with index `i` and each existing child
/// `c`, `order(&nodes[c], &nodes[i])` is false, so the element the
/// predicate ranks first is always at the root.
pub struct PriorityHeap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// The heap's nodes, laid out as a complete binary tree
    nodes: Vec<T>,
    /// Decides which of two nodes comes first
    order: F,
}

impl<T, F> PriorityHeap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Creates an empty heap ordered by `order`
    ///
    /// For comparable element types, `|a, b| a < b` makes a min-heap and
    /// `|a, b| a > b` makes a max-heap.
    pub fn new(order: F) -> Self {
        Self {
            nodes: Vec::new(),
            order,
        }
    }

    /// Creates an empty heap with space preallocated for `capacity` nodes
    pub fn with_capacity(capacity: usize, order: F) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            order,
        }
    }

    /// Builds a heap from an existing vector, in a bottom-up manner
    ///
    /// The vector is taken over verbatim as backing storage and then
    /// heapified by sifting each node of the bottom-up half down. This is
    /// O(n), cheaper than pushing the elements one at a time (O(n log n)),
    /// because most nodes start near the leaves.
    pub fn from_vec(nodes: Vec<T>, order: F) -> Self {
        let mut heap = Self { nodes, order };
        for i in (0..heap.nodes.len() / 2).rev() {
            heap.sift_down(i, heap.nodes.len());
        }
        heap
    }

    /// Returns true if the heap contains no elements
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Returns the underlying storage as a slice
    ///
    /// The slice satisfies the heap invariant but is otherwise in
    /// unspecified order.
    pub fn as_slice(&self) -> &[T] {
        &self.nodes
    }

    /// Returns the root element without removing it
    ///
    /// For a max-heap this is the maximum value; for a min-heap the
    /// minimum. O(1).
    pub fn peek(&self) -> Option<&T> {
        self.nodes.first()
    }

    /// Inserts an element, reordering so the heap property still holds
    ///
    /// # Time Complexity
    /// O(log n): an O(1) amortized append followed by a sift up.
    pub fn push(&mut self, value: T) {
        self.nodes.push(value);
        self.sift_up(self.nodes.len() - 1);
    }

    /// Removes and returns the root element
    ///
    /// For a max-heap this is the maximum value; for a min-heap the
    /// minimum. Returns `None` on an empty heap.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn pop(&mut self) -> Option<T> {
        if self.nodes.len() <= 1 {
            return self.nodes.pop();
        }

        // Move the last node into the root slot, then sift it down into
        // its proper position.
        let last = self.nodes.len() - 1;
        self.nodes.swap(0, last);
        let value = self.nodes.pop();
        self.sift_down(0, self.nodes.len());
        value
    }

    /// Removes and returns the element at an arbitrary position
    ///
    /// This removes the logical element currently at `index`, which in
    /// general is not the heap's first element. Returns `None` if `index`
    /// is out of bounds.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.nodes.len() {
            return None;
        }

        let last = self.nodes.len() - 1;
        if index != last {
            self.nodes.swap(index, last);
            // The swapped-in node came from an arbitrary position, so it
            // may need to move in either direction. The sift down is
            // bounded by `last` to keep the outgoing element in place.
            self.sift_down(index, last);
            self.sift_up(index);
        }
        self.nodes.pop()
    }

    /// Moves the node at `index` toward the root until its parent comes
    /// first under the ordering predicate, or it becomes the root
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if (self.order)(&self.nodes[index], &self.nodes[parent]) {
                self.nodes.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Moves the node at `index` toward the leaves until it comes first
    /// among itself and its children, considering only nodes below `end`
    ///
    /// Ties go to the earlier candidate: the node beats its left child,
    /// the left child beats the right. A swap happens only when a child
    /// strictly outranks the current first candidate.
    fn sift_down(&mut self, mut index: usize, end: usize) {
        loop {
            let left = 2 * index + 1;
            let right = left + 1;

            let mut first = index;
            if left < end && (self.order)(&self.nodes[left], &self.nodes[first]) {
                first = left;
            }
            if right < end && (self.order)(&self.nodes[right], &self.nodes[first]) {
                first = right;
            }

            if first == index {
                break;
            }
            self.nodes.swap(index, first);
            index = first;
        }
    }
}

impl<T, F> PriorityHeap<T, F>
where
    T: PartialEq,
    F: Fn(&T, &T) -> bool,
{
    /// Returns the position of the first node equal to `node`, or `None`
    ///
    /// # Time Complexity
    /// O(n): linear scan over the backing storage.
    pub fn position(&self, node: &T) -> Option<usize> {
        self.nodes.iter().position(|n| n == node)
    }

    /// Removes the first node equal to `node`, returning it
    ///
    /// Returns `None` if no equal node is present. O(n) for the lookup
    /// plus O(log n) for the removal.
    pub fn remove_item(&mut self, node: &T) -> Option<T> {
        self.position(node).and_then(|index| self.remove(index))
    }
}

impl<T: Ord> PriorityHeap<T, fn(&T, &T) -> bool> {
    /// Creates an empty min-heap over the element type's natural order
    pub fn min_heap() -> Self {
        Self::new(T::lt)
    }

    /// Creates an empty max-heap over the element type's natural order
    pub fn max_heap() -> Self {
        Self::new(T::gt)
    }
}

impl<T, F> Extend<T> for PriorityHeap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Inserts each element of the iterator one at a time
    ///
    /// This is O(k log n) for k new elements, not a bulk re-heapify; for
    /// heavy batch loading into an empty heap, prefer
    /// [`from_vec`](PriorityHeap::from_vec).
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T, F> fmt::Debug for PriorityHeap<T, F>
where
    T: fmt::Debug,
    F: Fn(&T, &T) -> bool,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.nodes.iter()).finish()
    }
}

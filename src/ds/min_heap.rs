//! Fixed-capacity binary min-heap over `i64`.
//!
//! Stores elements in a single array laid out as an implicit binary tree.
//! Up to [`PREALLOC_LIMIT`] slots are reserved at construction; larger heaps
//! grow on demand. Every operation that would grow past `capacity` is
//! rejected before any mutation.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                       BoundedMinHeap (capacity = 7)                         │
//! │                                                                             │
//! │   elements: Vec<i64>   (len ≤ capacity)                                     │
//! │                                                                             │
//! │   Index:     0     1     2     3     4     5     6                          │
//! │            ┌─────┬─────┬─────┬─────┬─────┬─────┬─────┐                      │
//! │            │  1  │  3  │  2  │  7  │  4  │     │     │                      │
//! │            └─────┴─────┴─────┴─────┴─────┴─────┴─────┘                      │
//! │                                        ▲ len = 5                            │
//! │                                                                             │
//! │   Implicit tree:               parent(i) = (i - 1) / 2                      │
//! │                                left(i)   = 2i + 1                           │
//! │                 1              right(i)  = 2i + 2                           │
//! │               /   \                                                         │
//! │              3     2           heap property:                               │
//! │             / \                elements[parent(i)] ≤ elements[i]            │
//! │            7   4                                                            │
//! └─────────────────────────────────────────────────────────────────────────────┘
//!
//! Insert Flow                          Extract Flow
//! ───────────                          ────────────
//!   insert(0):                           extract_min():
//!     1. len == capacity? → reject         1. len == 0? → reject
//!     2. push at index len                 2. min = elements[0]
//!     3. sift up while strictly            3. last = pop()
//!        smaller than parent               4. if not empty:
//!                                               elements[0] = last
//!                                               sift down from 0
//!                                          5. return min
//! ```
//!
//! ## Key Concepts
//!
//! - **Bounded storage**: `capacity` is fixed at construction; capacity 0 is
//!   honored and rejects every insert
//! - **Strict sifting**: an element only moves past a neighbour that is
//!   strictly smaller (sift-down) or strictly larger (sift-up)
//! - **Tie-breaking**: when both children are equal, sift-down follows the
//!   left child
//! - **All-or-nothing**: a rejected operation never touches `elements`
//!
//! ## Operations
//!
//! | Operation      | Description                                   | Complexity  |
//! |----------------|-----------------------------------------------|-------------|
//! | `insert`       | Append and sift up                            | O(log n)    |
//! | `find_min`     | Read the root                                 | O(1)        |
//! | `extract_min`  | Remove the root, move last to root, sift down | O(log n)    |
//! | `replace_min`  | Overwrite the root and sift down              | O(log n)    |
//! | `heapify_from` | Replace contents, bottom-up build             | O(n)        |
//! | `heap_sort`    | Sorted copy, heap untouched                   | O(n log n)  |
//! | `decrease_key` | Lower the key at an index and sift up         | O(log n)    |
//! | `delete_key`   | Remove the element at an index                | O(log n)    |
//! | `snapshot`     | Copy of elements in array order               | O(n)        |
//!
//! ## Example Usage
//!
//! ```
//! use heapkit::ds::BoundedMinHeap;
//!
//! let mut heap = BoundedMinHeap::new(5);
//! for x in [5, 3, 8, 1] {
//!     heap.insert(x).unwrap();
//! }
//!
//! assert_eq!(heap.find_min(), Ok(1));
//! assert_eq!(heap.heap_sort(), vec![1, 3, 5, 8]);
//! assert_eq!(heap.extract_min(), Ok(1));
//! assert_eq!(heap.snapshot(), vec![3, 5, 8]);
//! assert!(heap.is_valid());
//! ```
//!
//! ## Thread Safety
//!
//! `BoundedMinHeap` has no interior synchronization. Each instance is owned
//! by a single caller; move it between threads rather than sharing it.
//!
//! ## Implementation Notes
//!
//! - Sift helpers work on plain slices so `heap_sort` can run them on its own
//!   copy without aliasing the live storage
//! - `check_invariants()` is always available; `debug_validate_invariants()`
//!   panics instead and exists in debug/test builds only

use std::fmt;

use crate::error::{HeapError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::HeapMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::HeapMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    HeapMetricsReadRecorder, HeapMetricsRecorder, MetricsReset, MetricsSnapshotProvider,
};

/// Largest number of slots reserved when a heap is created.
pub const PREALLOC_LIMIT: usize = 1 << 16;

#[inline]
fn parent_of(i: usize) -> Option<usize> {
    if i == 0 { None } else { Some((i - 1) / 2) }
}

#[inline]
fn left_child_of(i: usize) -> usize {
    2 * i + 1
}

#[inline]
fn right_child_of(i: usize) -> usize {
    2 * i + 2
}

/// Index of the child a sift-down would follow, or `None` for a leaf.
#[inline]
fn smaller_child_of(values: &[i64], i: usize) -> Option<usize> {
    let left = left_child_of(i);
    if left >= values.len() {
        return None;
    }
    let right = right_child_of(i);
    if right >= values.len() || values[left] <= values[right] {
        Some(left)
    } else {
        Some(right)
    }
}

/// Moves `values[i]` toward the root. Returns the number of swaps.
fn sift_up(values: &mut [i64], mut i: usize) -> u64 {
    let mut swaps = 0;
    while let Some(parent) = parent_of(i) {
        if values[i] >= values[parent] {
            break;
        }
        values.swap(i, parent);
        i = parent;
        swaps += 1;
    }
    swaps
}

/// Moves `values[i]` toward the leaves. Returns the number of swaps.
fn sift_down(values: &mut [i64], mut i: usize) -> u64 {
    let mut swaps = 0;
    while let Some(child) = smaller_child_of(values, i) {
        if values[child] >= values[i] {
            break;
        }
        values.swap(i, child);
        i = child;
        swaps += 1;
    }
    swaps
}

/// Bottom-up construction: sift down every internal node, last one first.
fn build_heap(values: &mut [i64]) -> u64 {
    let mut swaps = 0;
    for i in (0..values.len() / 2).rev() {
        swaps += sift_down(values, i);
    }
    swaps
}

/// Removes the root of a heap-ordered vector.
///
/// Returns the removed value and the sift-down swap count.
fn pop_root(values: &mut Vec<i64>) -> Option<(i64, u64)> {
    let last = values.pop()?;
    if values.is_empty() {
        return Some((last, 0));
    }
    let min = std::mem::replace(&mut values[0], last);
    let swaps = sift_down(values, 0);
    Some((min, swaps))
}

/// Returns the first `(parent, child)` index pair breaking the heap property.
fn first_violation(values: &[i64]) -> Option<(usize, usize)> {
    for i in 0..values.len() {
        for child in [left_child_of(i), right_child_of(i)] {
            if child < values.len() && values[i] > values[child] {
                return Some((i, child));
            }
        }
    }
    None
}

/// Returns `true` if `values`, read as an implicit binary tree, is a min-heap.
///
/// Works on any slice, independently of a live heap. Empty and single-element
/// slices are valid.
///
/// # Example
///
/// ```
/// use heapkit::ds::is_valid_min_heap;
///
/// assert!(is_valid_min_heap(&[]));
/// assert!(is_valid_min_heap(&[1, 2, 2, 5, 3]));
/// assert!(!is_valid_min_heap(&[4, 2, 7]));
/// ```
pub fn is_valid_min_heap(values: &[i64]) -> bool {
    first_violation(values).is_none()
}

/// Binary min-heap of `i64` with a fixed capacity.
///
/// # Example
///
/// ```
/// use heapkit::ds::BoundedMinHeap;
/// use heapkit::error::HeapError;
///
/// let mut heap = BoundedMinHeap::new(3);
/// heap.heapify_from(&[9, 4, 7]).unwrap();
/// assert_eq!(heap.find_min(), Ok(4));
///
/// // Full: the insert is rejected and nothing changes
/// let before = heap.snapshot();
/// assert!(matches!(heap.insert(1), Err(HeapError::CapacityExceeded { .. })));
/// assert_eq!(heap.snapshot(), before);
/// ```
pub struct BoundedMinHeap {
    elements: Vec<i64>,
    capacity: usize,
    #[cfg(feature = "metrics")]
    metrics: HeapMetrics,
}

impl BoundedMinHeap {
    /// Creates an empty heap that can hold at most `capacity` elements.
    ///
    /// Storage for `min(capacity, PREALLOC_LIMIT)` elements is reserved up
    /// front, so any capacity (including `usize::MAX`) is accepted.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::BoundedMinHeap;
    ///
    /// let heap = BoundedMinHeap::new(16);
    /// assert!(heap.is_empty());
    /// assert_eq!(heap.capacity(), 16);
    /// ```
    pub fn new(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity.min(PREALLOC_LIMIT)),
            capacity,
            #[cfg(feature = "metrics")]
            metrics: HeapMetrics::default(),
        }
    }

    /// Alias for [`new`](Self::new).
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(capacity)
    }

    /// Creates a heap of `capacity` holding `values`, built bottom-up.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::CapacityExceeded`] if `values.len() > capacity`.
    pub fn from_values(capacity: usize, values: &[i64]) -> Result<Self, HeapError> {
        let mut heap = Self::new(capacity);
        heap.heapify_from(values)?;
        Ok(heap)
    }

    /// Returns the number of stored elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the fixed capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns how many more elements fit before the heap is full.
    pub fn remaining(&self) -> usize {
        self.capacity - self.elements.len()
    }

    /// Returns `true` if `len() == capacity()`.
    pub fn is_full(&self) -> bool {
        self.elements.len() == self.capacity
    }

    /// Inserts `x`, restoring the heap property upward.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::CapacityExceeded`] if the heap is full. The heap
    /// is left unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::BoundedMinHeap;
    ///
    /// let mut heap = BoundedMinHeap::new(4);
    /// heap.insert(5).unwrap();
    /// heap.insert(3).unwrap();
    /// heap.insert(8).unwrap();
    /// heap.insert(1).unwrap();
    /// assert_eq!(heap.snapshot(), vec![1, 3, 8, 5]);
    /// ```
    pub fn insert(&mut self, x: i64) -> Result<(), HeapError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if self.is_full() {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_rejected();
            return Err(HeapError::CapacityExceeded {
                capacity: self.capacity,
                requested: self.elements.len() + 1,
            });
        }

        self.elements.push(x);
        let last = self.elements.len() - 1;
        let swaps = sift_up(&mut self.elements, last);
        self.record_sift_up(swaps);
        Ok(())
    }

    /// Returns the minimum without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::EmptyHeap`] if the heap is empty.
    pub fn find_min(&self) -> Result<i64, HeapError> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_find_min_call();

        match self.elements.first() {
            Some(&min) => Ok(min),
            None => {
                #[cfg(feature = "metrics")]
                (&self.metrics).record_find_min_empty();
                Err(HeapError::EmptyHeap)
            },
        }
    }

    /// Removes and returns the minimum.
    ///
    /// The last element moves to the root and sifts down. Removing the only
    /// element performs no sift.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::EmptyHeap`] if the heap is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::BoundedMinHeap;
    ///
    /// let mut heap = BoundedMinHeap::from_values(4, &[4, 1, 3]).unwrap();
    /// assert_eq!(heap.extract_min(), Ok(1));
    /// assert_eq!(heap.extract_min(), Ok(3));
    /// assert_eq!(heap.extract_min(), Ok(4));
    /// assert!(heap.extract_min().is_err());
    /// ```
    pub fn extract_min(&mut self) -> Result<i64, HeapError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_extract_call();

        match pop_root(&mut self.elements) {
            Some((min, swaps)) => {
                self.record_sift_down(swaps);
                Ok(min)
            },
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_empty_rejected();
                Err(HeapError::EmptyHeap)
            },
        }
    }

    /// Replaces the minimum with `x` in one step and returns the old minimum.
    ///
    /// The length is unchanged; `x` sifts down from the root.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::EmptyHeap`] if the heap is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::BoundedMinHeap;
    ///
    /// let mut heap = BoundedMinHeap::from_values(3, &[2, 4, 6]).unwrap();
    /// assert_eq!(heap.replace_min(10), Ok(2));
    /// assert_eq!(heap.snapshot(), vec![4, 10, 6]);
    /// ```
    pub fn replace_min(&mut self, x: i64) -> Result<i64, HeapError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_replace_call();

        if self.elements.is_empty() {
            #[cfg(feature = "metrics")]
            self.metrics.record_empty_rejected();
            return Err(HeapError::EmptyHeap);
        }
        let old = std::mem::replace(&mut self.elements[0], x);
        let swaps = sift_down(&mut self.elements, 0);
        self.record_sift_down(swaps);
        Ok(old)
    }

    /// Replaces the contents with a copy of `values` and builds a heap
    /// bottom-up.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::CapacityExceeded`] if `values.len() > capacity`.
    /// The current contents are kept.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::BoundedMinHeap;
    ///
    /// let mut heap = BoundedMinHeap::new(5);
    /// heap.heapify_from(&[9, 4, 7, 1, 2]).unwrap();
    /// assert_eq!(heap.snapshot(), vec![1, 2, 7, 4, 9]);
    /// ```
    pub fn heapify_from(&mut self, values: &[i64]) -> Result<(), HeapError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_heapify_call();

        if values.len() > self.capacity {
            #[cfg(feature = "metrics")]
            self.metrics.record_heapify_rejected();
            return Err(HeapError::CapacityExceeded {
                capacity: self.capacity,
                requested: values.len(),
            });
        }

        self.elements.clear();
        self.elements.extend_from_slice(values);
        let swaps = build_heap(&mut self.elements);
        self.record_sift_down(swaps);
        Ok(())
    }

    /// Returns the contents in ascending order without modifying the heap.
    ///
    /// Works on a private copy: builds a heap on it and drains it with the
    /// same extract procedure as [`extract_min`](Self::extract_min).
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::BoundedMinHeap;
    ///
    /// let mut heap = BoundedMinHeap::new(4);
    /// for x in [5, 3, 8, 1] {
    ///     heap.insert(x).unwrap();
    /// }
    /// let before = heap.snapshot();
    ///
    /// assert_eq!(heap.heap_sort(), vec![1, 3, 5, 8]);
    /// assert_eq!(heap.snapshot(), before);
    /// ```
    pub fn heap_sort(&self) -> Vec<i64> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_heap_sort_call();

        let mut scratch = self.elements.clone();
        build_heap(&mut scratch);

        let mut sorted = Vec::with_capacity(scratch.len());
        while let Some((min, _)) = pop_root(&mut scratch) {
            sorted.push(min);
        }
        sorted
    }

    /// Lowers the key at `index` to `new_value` and sifts it up.
    ///
    /// # Errors
    ///
    /// - [`HeapError::IndexOutOfBounds`] if `index >= len()`
    /// - [`HeapError::KeyNotDecreased`] if `new_value` is not strictly less
    ///   than the current key
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::BoundedMinHeap;
    ///
    /// let mut heap = BoundedMinHeap::from_values(4, &[1, 5, 3, 9]).unwrap();
    /// heap.decrease_key(3, 0).unwrap();
    /// assert_eq!(heap.find_min(), Ok(0));
    /// assert!(heap.decrease_key(1, 100).is_err());
    /// ```
    pub fn decrease_key(&mut self, index: usize, new_value: i64) -> Result<(), HeapError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_decrease_key_call();

        let current = self.key_at(index)?;
        if new_value >= current {
            #[cfg(feature = "metrics")]
            self.metrics.record_key_rejected();
            return Err(HeapError::KeyNotDecreased {
                current,
                requested: new_value,
            });
        }

        self.elements[index] = new_value;
        let swaps = sift_up(&mut self.elements, index);
        self.record_sift_up(swaps);
        Ok(())
    }

    /// Removes the element at `index` and returns it.
    ///
    /// The element is moved to the root as though its key had been lowered
    /// below every other key, then extracted.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::IndexOutOfBounds`] if `index >= len()`.
    pub fn delete_key(&mut self, index: usize) -> Result<i64, HeapError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_delete_key_call();

        self.key_at(index)?;

        let mut i = index;
        let mut swaps = 0;
        while let Some(parent) = parent_of(i) {
            self.elements.swap(i, parent);
            i = parent;
            swaps += 1;
        }
        self.record_sift_up(swaps);

        match pop_root(&mut self.elements) {
            Some((removed, swaps)) => {
                self.record_sift_down(swaps);
                Ok(removed)
            },
            None => Err(HeapError::EmptyHeap),
        }
    }

    /// Returns a copy of the elements in array order.
    pub fn snapshot(&self) -> Vec<i64> {
        self.elements.clone()
    }

    /// Borrows the elements in array order.
    pub fn as_slice(&self) -> &[i64] {
        &self.elements
    }

    /// Returns `true` if the live elements satisfy the heap property.
    pub fn is_valid(&self) -> bool {
        is_valid_min_heap(&self.elements)
    }

    /// Checks the heap property and the capacity bound.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError`] describing the first violation found.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.elements.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "len {} exceeds capacity {}",
                self.elements.len(),
                self.capacity
            )));
        }
        if let Some((parent, child)) = first_violation(&self.elements) {
            return Err(InvariantError::new(format!(
                "parent elements[{}] = {} > child elements[{}] = {}",
                parent, self.elements[parent], child, self.elements[child]
            )));
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    /// Validates internal invariants (debug/test builds only).
    pub fn debug_validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("heap invariant violated: {}", err);
        }
    }

    /// Returns an approximate memory footprint in bytes.
    pub fn approx_bytes(&self) -> usize {
        std::mem::size_of::<Self>() + self.elements.capacity() * std::mem::size_of::<i64>()
    }

    fn key_at(&mut self, index: usize) -> Result<i64, HeapError> {
        match self.elements.get(index) {
            Some(&key) => Ok(key),
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_key_rejected();
                Err(HeapError::IndexOutOfBounds {
                    index,
                    len: self.elements.len(),
                })
            },
        }
    }

    #[inline]
    fn record_sift_up(&mut self, _swaps: u64) {
        #[cfg(feature = "metrics")]
        self.metrics.record_sift_up_swaps(_swaps);
    }

    #[inline]
    fn record_sift_down(&mut self, _swaps: u64) {
        #[cfg(feature = "metrics")]
        self.metrics.record_sift_down_swaps(_swaps);
    }
}

#[cfg(feature = "metrics")]
impl BoundedMinHeap {
    pub fn metrics_snapshot(&self) -> HeapMetricsSnapshot {
        HeapMetricsSnapshot {
            insert_calls: self.metrics.insert_calls,
            insert_rejected: self.metrics.insert_rejected,
            extract_calls: self.metrics.extract_calls,
            replace_calls: self.metrics.replace_calls,
            empty_rejected: self.metrics.empty_rejected,
            find_min_calls: self.metrics.find_min_calls.get(),
            find_min_empty: self.metrics.find_min_empty.get(),
            heapify_calls: self.metrics.heapify_calls,
            heapify_rejected: self.metrics.heapify_rejected,
            heap_sort_calls: self.metrics.heap_sort_calls.get(),
            decrease_key_calls: self.metrics.decrease_key_calls,
            delete_key_calls: self.metrics.delete_key_calls,
            key_rejected: self.metrics.key_rejected,
            sift_up_swaps: self.metrics.sift_up_swaps,
            sift_down_swaps: self.metrics.sift_down_swaps,
            heap_len: self.elements.len(),
            capacity: self.capacity,
        }
    }
}

#[cfg(feature = "metrics")]
impl MetricsSnapshotProvider<HeapMetricsSnapshot> for BoundedMinHeap {
    fn snapshot(&self) -> HeapMetricsSnapshot {
        self.metrics_snapshot()
    }
}

#[cfg(feature = "metrics")]
impl MetricsReset for BoundedMinHeap {
    fn reset_metrics(&mut self) {
        self.metrics.reset_metrics();
    }
}

impl fmt::Debug for BoundedMinHeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedMinHeap")
            .field("len", &self.elements.len())
            .field("capacity", &self.capacity)
            .field("elements", &self.elements)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut values: Vec<i64>) -> Vec<i64> {
        values.sort_unstable();
        values
    }

    // ==============================================
    // Construction and Accessors
    // ==============================================

    #[test]
    fn new_heap_is_empty_with_fixed_capacity() {
        let heap = BoundedMinHeap::new(5);
        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);
        assert_eq!(heap.capacity(), 5);
        assert_eq!(heap.remaining(), 5);
        assert!(heap.snapshot().is_empty());
        assert!(heap.is_valid());

        let alias = BoundedMinHeap::with_capacity(5);
        assert_eq!(alias.capacity(), 5);
        assert!(alias.is_empty());
    }

    #[test]
    fn capacity_zero_rejects_inserts() {
        let mut heap = BoundedMinHeap::new(0);
        assert!(heap.is_full());
        assert_eq!(
            heap.insert(1),
            Err(HeapError::CapacityExceeded {
                capacity: 0,
                requested: 1
            })
        );
        assert!(heap.is_empty());
    }

    #[test]
    fn small_capacity_is_reserved_up_front() {
        let mut heap = BoundedMinHeap::new(8);
        let reserved = heap.elements.capacity();
        assert!(reserved >= 8);
        for x in 0..8 {
            heap.insert(x).unwrap();
        }
        assert_eq!(heap.elements.capacity(), reserved);
    }

    #[test]
    fn huge_capacity_reserves_lazily() {
        let mut heap = BoundedMinHeap::new(usize::MAX);
        assert!(heap.elements.capacity() <= PREALLOC_LIMIT);
        assert_eq!(heap.capacity(), usize::MAX);
        heap.insert(7).unwrap();
        heap.insert(-2).unwrap();
        assert_eq!(heap.find_min(), Ok(-2));
        assert!(!heap.is_full());
        assert_eq!(heap.remaining(), usize::MAX - 2);

        let mut big = BoundedMinHeap::new(1 << 40);
        big.heapify_from(&[3, 1, 2]).unwrap();
        assert_eq!(big.extract_min(), Ok(1));
    }

    #[test]
    fn approx_bytes_tracks_reserved_storage() {
        let empty = BoundedMinHeap::new(0);
        let base = empty.approx_bytes();
        assert!(base >= std::mem::size_of::<BoundedMinHeap>());

        let heap = BoundedMinHeap::new(100);
        assert!(heap.approx_bytes() >= base + 100 * std::mem::size_of::<i64>());

        let huge = BoundedMinHeap::new(usize::MAX);
        assert!(huge.approx_bytes() <= base + PREALLOC_LIMIT * std::mem::size_of::<i64>() * 2);
    }

    // ==============================================
    // Insert / Extract / Find
    // ==============================================

    #[test]
    fn insert_then_extract_scenario() {
        let mut heap = BoundedMinHeap::new(5);
        for x in [5, 3, 8, 1] {
            heap.insert(x).unwrap();
            heap.debug_validate_invariants();
        }
        assert_eq!(heap.extract_min(), Ok(1));
        assert_eq!(heap.find_min(), Ok(3));
        assert_eq!(sorted(heap.snapshot()), vec![3, 5, 8]);
        assert!(heap.is_valid());
    }

    #[test]
    fn insert_when_full_leaves_snapshot_unchanged() {
        let mut heap = BoundedMinHeap::new(2);
        heap.insert(4).unwrap();
        heap.insert(2).unwrap();
        let before = heap.snapshot();
        assert!(matches!(
            heap.insert(1),
            Err(HeapError::CapacityExceeded { .. })
        ));
        assert_eq!(heap.snapshot(), before);
    }

    #[test]
    fn fresh_heap_rejects_reads_and_removals() {
        let mut heap = BoundedMinHeap::new(3);
        assert_eq!(heap.find_min(), Err(HeapError::EmptyHeap));
        assert_eq!(heap.extract_min(), Err(HeapError::EmptyHeap));
        assert_eq!(heap.replace_min(4), Err(HeapError::EmptyHeap));
        assert!(heap.is_empty());
    }

    #[test]
    fn extract_last_element_empties_heap() {
        let mut heap = BoundedMinHeap::new(1);
        heap.insert(42).unwrap();
        assert_eq!(heap.extract_min(), Ok(42));
        assert!(heap.is_empty());
        assert_eq!(heap.find_min(), Err(HeapError::EmptyHeap));
    }

    #[test]
    fn extract_yields_non_decreasing_sequence() {
        let mut heap = BoundedMinHeap::from_values(10, &[7, -3, 7, 0, 12, -3, 5]).unwrap();
        let mut drained = Vec::new();
        while let Ok(min) = heap.extract_min() {
            heap.debug_validate_invariants();
            drained.push(min);
        }
        assert_eq!(drained, vec![-3, -3, 0, 5, 7, 7, 12]);
        assert!(heap.is_empty());
    }

    #[test]
    fn sift_up_stops_on_equal_parent() {
        let mut heap = BoundedMinHeap::new(3);
        heap.insert(2).unwrap();
        heap.insert(2).unwrap();
        assert_eq!(heap.snapshot(), vec![2, 2]);
    }

    #[test]
    fn sift_down_prefers_left_child_on_tie() {
        let mut heap = BoundedMinHeap::from_values(3, &[1, 4, 4]).unwrap();
        assert_eq!(heap.replace_min(9), Ok(1));
        assert_eq!(heap.snapshot(), vec![4, 9, 4]);
    }

    // ==============================================
    // Replace / Heapify / Sort
    // ==============================================

    #[test]
    fn replace_min_sifts_new_value_down() {
        let mut heap = BoundedMinHeap::from_values(3, &[2, 4, 6]).unwrap();
        assert_eq!(heap.replace_min(10), Ok(2));
        assert_eq!(heap.find_min(), Ok(4));
        assert_eq!(heap.len(), 3);
        let snapshot = heap.snapshot();
        assert_ne!(snapshot[0], 10);
        assert!(snapshot.contains(&10));
        assert!(heap.is_valid());
    }

    #[test]
    fn replace_min_with_smaller_value_stays_at_root() {
        let mut heap = BoundedMinHeap::from_values(3, &[2, 4, 6]).unwrap();
        assert_eq!(heap.replace_min(-1), Ok(2));
        assert_eq!(heap.snapshot(), vec![-1, 4, 6]);
    }

    #[test]
    fn heapify_scenario() {
        let mut heap = BoundedMinHeap::new(5);
        heap.heapify_from(&[9, 4, 7, 1, 2]).unwrap();
        assert_eq!(heap.find_min(), Ok(1));
        assert_eq!(sorted(heap.snapshot()), vec![1, 2, 4, 7, 9]);
        assert!(heap.is_valid());
    }

    #[test]
    fn heapify_over_capacity_keeps_contents() {
        let mut heap = BoundedMinHeap::from_values(3, &[3, 1]).unwrap();
        let before = heap.snapshot();
        assert_eq!(
            heap.heapify_from(&[1, 2, 3, 4]),
            Err(HeapError::CapacityExceeded {
                capacity: 3,
                requested: 4
            })
        );
        assert_eq!(heap.snapshot(), before);
    }

    #[test]
    fn heapify_with_empty_slice_empties_heap() {
        let mut heap = BoundedMinHeap::from_values(3, &[3, 1]).unwrap();
        heap.heapify_from(&[]).unwrap();
        assert!(heap.is_empty());
    }

    #[test]
    fn heap_sort_is_non_destructive() {
        let mut heap = BoundedMinHeap::new(4);
        for x in [5, 3, 8, 1] {
            heap.insert(x).unwrap();
        }
        let before = heap.snapshot();
        let first = heap.heap_sort();
        let second = heap.heap_sort();
        assert_eq!(first, vec![1, 3, 5, 8]);
        assert_eq!(first, second);
        assert_eq!(heap.snapshot(), before);
    }

    #[test]
    fn heap_sort_of_empty_heap_is_empty() {
        let heap = BoundedMinHeap::new(0);
        assert!(heap.heap_sort().is_empty());
    }

    // ==============================================
    // Decrease / Delete Key
    // ==============================================

    #[test]
    fn decrease_key_moves_element_up() {
        let mut heap = BoundedMinHeap::from_values(5, &[1, 3, 2, 7, 4]).unwrap();
        heap.decrease_key(3, 0).unwrap();
        assert_eq!(heap.find_min(), Ok(0));
        heap.debug_validate_invariants();
    }

    #[test]
    fn decrease_key_rejects_bad_input() {
        let mut heap = BoundedMinHeap::from_values(5, &[1, 3, 2]).unwrap();
        let before = heap.snapshot();
        assert_eq!(
            heap.decrease_key(3, 0),
            Err(HeapError::IndexOutOfBounds { index: 3, len: 3 })
        );
        assert_eq!(
            heap.decrease_key(1, 3),
            Err(HeapError::KeyNotDecreased {
                current: 3,
                requested: 3
            })
        );
        assert_eq!(heap.snapshot(), before);
    }

    #[test]
    fn delete_key_removes_interior_element() {
        let mut heap = BoundedMinHeap::from_values(7, &[1, 3, 2, 7, 4, 5, 6]).unwrap();
        assert_eq!(heap.delete_key(1), Ok(3));
        heap.debug_validate_invariants();
        assert_eq!(sorted(heap.snapshot()), vec![1, 2, 4, 5, 6, 7]);
    }

    #[test]
    fn delete_key_of_root_and_last() {
        let mut heap = BoundedMinHeap::from_values(4, &[1, 3, 2, 8]).unwrap();
        assert_eq!(heap.delete_key(3), Ok(8));
        assert_eq!(heap.delete_key(0), Ok(1));
        assert_eq!(heap.snapshot(), vec![2, 3]);
        assert_eq!(
            heap.delete_key(2),
            Err(HeapError::IndexOutOfBounds { index: 2, len: 2 })
        );
    }

    // ==============================================
    // Validation
    // ==============================================

    #[test]
    fn validator_accepts_and_rejects() {
        assert!(is_valid_min_heap(&[]));
        assert!(is_valid_min_heap(&[5]));
        assert!(is_valid_min_heap(&[1, 1, 1]));
        assert!(!is_valid_min_heap(&[2, 1]));
        assert!(!is_valid_min_heap(&[1, 2, 3, 4, 5, 0]));
    }

    #[test]
    fn check_invariants_reports_violation() {
        let heap = BoundedMinHeap {
            elements: vec![3, 1],
            capacity: 2,
            #[cfg(feature = "metrics")]
            metrics: HeapMetrics::default(),
        };
        let err = heap.check_invariants().unwrap_err();
        assert!(err.message().contains("elements[0] = 3"));
    }

    #[test]
    #[should_panic(expected = "heap invariant violated")]
    fn debug_validate_panics_on_corruption() {
        let heap = BoundedMinHeap {
            elements: vec![1, 2, 3],
            capacity: 2,
            #[cfg(feature = "metrics")]
            metrics: HeapMetrics::default(),
        };
        heap.debug_validate_invariants();
    }

    #[test]
    fn debug_format_shows_len_and_capacity() {
        let heap = BoundedMinHeap::from_values(4, &[2, 1]).unwrap();
        let dbg = format!("{:?}", heap);
        assert!(dbg.contains("len: 2"));
        assert!(dbg.contains("capacity: 4"));
    }

    // ==============================================
    // Metrics
    // ==============================================

    #[cfg(feature = "metrics")]
    mod metrics {
        use super::*;

        #[test]
        fn counters_track_calls_and_rejections() {
            let mut heap = BoundedMinHeap::new(2);
            let _ = heap.find_min();
            heap.insert(3).unwrap();
            heap.insert(1).unwrap();
            let _ = heap.insert(0);
            let _ = heap.heap_sort();
            heap.extract_min().unwrap();
            heap.extract_min().unwrap();
            let _ = heap.extract_min();

            let snap = heap.metrics_snapshot();
            assert_eq!(snap.insert_calls, 3);
            assert_eq!(snap.insert_rejected, 1);
            assert_eq!(snap.find_min_calls, 1);
            assert_eq!(snap.find_min_empty, 1);
            assert_eq!(snap.heap_sort_calls, 1);
            assert_eq!(snap.extract_calls, 3);
            assert_eq!(snap.empty_rejected, 1);
            assert_eq!(snap.sift_up_swaps, 1);
            assert_eq!(snap.heap_len, 0);
            assert_eq!(snap.capacity, 2);
        }

        #[test]
        fn reset_clears_counters() {
            let mut heap = BoundedMinHeap::new(2);
            heap.insert(1).unwrap();
            heap.reset_metrics();
            let snap = MetricsSnapshotProvider::snapshot(&heap);
            assert_eq!(snap.insert_calls, 0);
            assert_eq!(snap.heap_len, 1);
        }
    }
}

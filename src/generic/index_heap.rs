/*!
A max heap over a fixed collection of indexed values.

Each value is stored at a fixed index, and any subset of the indices may be *active* on the heap.
Popping from the heap returns the active index with the greatest value, and removes the index from the heap without removing the value.

Atoms are stored on an [IndexHeap] in the [atom database](crate::db::atom), as when making a decision it is useful to find the atom without a value with the greatest activity.
When an atom loses its value the atom is activated on the heap again, with whatever activity the atom has accumulated in the meantime.

```rust
# use otter_red::generic::index_heap::IndexHeap;
let mut heap = IndexHeap::default();

heap.add(600, 10.0);
heap.add(0, 70.0);

heap.activate(600);
heap.activate(0);

assert_eq!(heap.count(), 601);
assert_eq!(heap.value_at(5), &f64::default());

assert_eq!(heap.pop_max(), Some(0));
assert_eq!(heap.pop_max(), Some(600));
assert!(heap.pop_max().is_none());
```
*/

/// The index heap struct.
pub struct IndexHeap<V: PartialOrd + Default> {
    /// The values, by index.
    values: Vec<V>,

    /// The position of each index on the heap, if active.
    positions: Vec<Option<usize>>,

    /// The active indices, arranged as a binary max heap on their values.
    heap: Vec<usize>,
}

impl<V: PartialOrd + Default> Default for IndexHeap<V> {
    fn default() -> Self {
        IndexHeap {
            values: Vec::default(),
            positions: Vec::default(),
            heap: Vec::default(),
        }
    }
}

impl<V: PartialOrd + Default> IndexHeap<V> {
    /// Stores `value` at `index`, growing the structure if required.
    ///
    /// Returns true if `index` was fresh, false otherwise.
    /// The index is not activated by this method.
    pub fn add(&mut self, index: usize, value: V) -> bool {
        let fresh = index >= self.values.len();
        if fresh {
            self.values.resize_with(index + 1, V::default);
            self.positions.resize(index + 1, None);
        }
        self.revalue(index, value);
        fresh
    }

    /// Activates `index` on the heap, or restores the heap invariant for `index` if already active.
    ///
    /// Returns true if `index` was activated, false otherwise.
    pub fn activate(&mut self, index: usize) -> bool {
        match self.positions.get(index) {
            None => false,

            Some(Some(position)) => {
                let position = *position;
                self.sift_up(position);
                if let Some(position) = self.positions[index] {
                    self.sift_down(position);
                }
                false
            }

            Some(None) => {
                let position = self.heap.len();
                self.heap.push(index);
                self.positions[index] = Some(position);
                self.sift_up(position);
                true
            }
        }
    }

    /// Removes `index` from the heap, if active.
    ///
    /// Returns true if `index` was removed, false otherwise.
    pub fn remove(&mut self, index: usize) -> bool {
        let Some(Some(position)) = self.positions.get(index).copied() else {
            return false;
        };

        let last = self.heap.len() - 1;
        self.swap(position, last);
        self.heap.pop();
        self.positions[index] = None;

        if position < self.heap.len() {
            self.sift_up(position);
            self.sift_down(position);
        }
        true
    }

    /// Whether `index` is active on the heap.
    pub fn is_active(&self, index: usize) -> bool {
        matches!(self.positions.get(index), Some(Some(_)))
    }

    /// The active index with the greatest value, if any.
    pub fn peek_max(&self) -> Option<usize> {
        self.heap.first().copied()
    }

    /// Removes and returns the active index with the greatest value, if any.
    pub fn pop_max(&mut self) -> Option<usize> {
        let max = self.peek_max()?;
        self.remove(max);
        Some(max)
    }

    /// The value stored at `index`.
    ///
    /// # Panics
    /// If `index` has not been added.
    pub fn value_at(&self, index: usize) -> &V {
        &self.values[index]
    }

    /// Applies `f` to the value at `index`, restoring the heap invariant if `index` is active.
    pub fn apply_to_index(&mut self, index: usize, f: impl Fn(&V) -> V) {
        if let Some(value) = self.values.get_mut(index) {
            *value = f(value);
            if self.is_active(index) {
                self.activate(index);
            }
        }
    }

    /// Applies `f` to all values.
    ///
    /// The relative order of values should be preserved by `f`, as the heap is not restored.
    pub fn apply_to_all(&mut self, f: impl Fn(&V) -> V) {
        for value in self.values.iter_mut() {
            *value = f(value)
        }
    }

    /// Sets the value at `index`, without restoring the heap invariant.
    pub fn revalue(&mut self, index: usize, value: V) {
        if let Some(stored) = self.values.get_mut(index) {
            *stored = value
        }
    }

    /// Restores the heap invariant over all active indices.
    pub fn heapify(&mut self) {
        for position in (0..self.heap.len() / 2).rev() {
            self.sift_down(position)
        }
    }

    /// A count of the indices stored, active or not.
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// A count of the active indices.
    pub fn active_count(&self) -> usize {
        self.heap.len()
    }

    /// True if no index is stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<V: PartialOrd + Default> IndexHeap<V> {
    fn greater(&self, a: usize, b: usize) -> bool {
        self.values[self.heap[a]] > self.values[self.heap[b]]
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a]] = Some(a);
        self.positions[self.heap[b]] = Some(b);
    }

    fn sift_up(&mut self, mut position: usize) {
        while position > 0 {
            let parent = (position - 1) / 2;
            if !self.greater(position, parent) {
                break;
            }
            self.swap(position, parent);
            position = parent;
        }
    }

    fn sift_down(&mut self, mut position: usize) {
        loop {
            let left = 2 * position + 1;
            let right = left + 1;
            let mut largest = position;

            if left < self.heap.len() && self.greater(left, largest) {
                largest = left;
            }
            if right < self.heap.len() && self.greater(right, largest) {
                largest = right;
            }
            if largest == position {
                break;
            }
            self.swap(position, largest);
            position = largest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heap_of(pairs: &[(usize, i32)]) -> IndexHeap<i32> {
        let mut heap = IndexHeap::default();
        for (index, value) in pairs {
            heap.add(*index, *value);
            heap.activate(*index);
        }
        heap
    }

    #[test]
    fn pops_in_order() {
        let mut heap = heap_of(&[(6, 10), (5, 20), (4, 30), (1, 60), (0, 70)]);

        assert_eq!(heap.pop_max(), Some(0));
        assert_eq!(heap.pop_max(), Some(1));
        assert_eq!(heap.pop_max(), Some(4));
        assert_eq!(heap.pop_max(), Some(5));
        assert_eq!(heap.pop_max(), Some(6));
        assert!(heap.pop_max().is_none());
    }

    #[test]
    fn revalue_then_heapify() {
        let mut heap = heap_of(&[(6, 10), (4, 30), (1, 60), (0, 70)]);

        for index in [0, 1, 4, 6] {
            heap.revalue(index, index as i32);
        }
        heap.heapify();

        assert_eq!(heap.pop_max(), Some(6));
        assert_eq!(heap.pop_max(), Some(4));
        assert_eq!(heap.pop_max(), Some(1));
        assert_eq!(heap.pop_max(), Some(0));
        assert!(heap.pop_max().is_none());
    }

    #[test]
    fn bump_active_index() {
        let mut heap = heap_of(&[(1, 1), (2, 2), (3, 3)]);

        heap.apply_to_index(1, |v| v + 10);
        assert_eq!(heap.pop_max(), Some(1));

        // Inactive indices are revalued without being activated.
        heap.apply_to_index(1, |v| v + 10);
        assert!(!heap.is_active(1));
        assert_eq!(heap.value_at(1), &21);
        assert_eq!(heap.pop_max(), Some(3));
    }

    #[test]
    fn remove_and_reactivate() {
        let mut heap = heap_of(&[(6, 6), (5, 5), (4, 4), (1, 1), (0, 0)]);

        assert!(heap.remove(4));
        assert!(!heap.remove(4));
        assert!(heap.remove(6));
        assert!(!heap.add(4, 10));
        assert!(!heap.add(4, 2));
        assert!(heap.activate(4));
        assert_eq!(heap.active_count(), 4);

        assert_eq!(heap.pop_max(), Some(5));
        assert_eq!(heap.pop_max(), Some(4));
        assert_eq!(heap.pop_max(), Some(1));
        assert_eq!(heap.pop_max(), Some(0));
    }
}

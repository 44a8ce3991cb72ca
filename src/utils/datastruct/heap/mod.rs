use std::fmt::Debug;

use crate::error::{Error, Result};

/// children per node
pub const NUM_CHILDREN: usize = 4;

/// 4-ary min-heap over a dense array.
///
/// Node `i` has children `4i + 1 ..= 4i + 4` and parent `(i - 1) / 4`.
/// Every node is `<=` each of its children; equal elements leave the heap
/// in no particular relative order.
///
/// Capacity starts at 1 and becomes `capacity * 4 + 1` whenever an insert
/// would not fit.
///
/// # Examples
/// ```
/// use tf_idf_relevance::ArrayHeap;
/// let mut heap = ArrayHeap::new();
/// heap.insert(3).unwrap();
/// heap.insert(1).unwrap();
/// assert_eq!(heap.remove_min(), Ok(1));
/// ```
#[derive(Clone)]
pub struct ArrayHeap<T> {
    heap: Vec<T>,
    capacity: usize,
}

impl<T> Default for ArrayHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ArrayHeap<T> {
    pub fn new() -> Self {
        ArrayHeap {
            heap: Vec::with_capacity(1),
            capacity: 1,
        }
    }

    pub fn size(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Slots reserved for the backing array
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Backing array in heap order
    pub fn as_slice(&self) -> &[T] {
        &self.heap
    }

    pub fn peek_min(&self) -> Result<&T> {
        self.heap.first().ok_or(Error::EmptyContainer)
    }
}

impl<T> ArrayHeap<T>
where
    T: PartialOrd,
{
    /// Insert a value.
    /// A value that does not compare equal to itself (`NaN`) has no place in
    /// the order and is rejected with `InvalidArgument`, leaving the heap
    /// untouched.
    pub fn insert(&mut self, value: T) -> Result<()> {
        if value.partial_cmp(&value).is_none() {
            return Err(Error::invalid_argument("value is not comparable"));
        }
        self.reserve_one();
        self.heap.push(value);
        self.sift_up(self.heap.len() - 1);
        Ok(())
    }

    pub fn remove_min(&mut self) -> Result<T> {
        if self.heap.is_empty() {
            return Err(Error::EmptyContainer);
        }
        // last element takes the root slot
        let min = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    fn reserve_one(&mut self) {
        if self.heap.len() + 1 > self.capacity {
            self.capacity = self.capacity * NUM_CHILDREN + 1;
            self.heap.reserve_exact(self.capacity - self.heap.len());
        }
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / NUM_CHILDREN;
            if self.heap[idx] < self.heap[parent] {
                self.heap.swap(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.heap.len();
        loop {
            let first = idx * NUM_CHILDREN + 1;
            if first >= len {
                break;
            }
            let last = (first + NUM_CHILDREN).min(len);
            let mut min_child = first;
            for child in first + 1..last {
                if self.heap[child] < self.heap[min_child] {
                    min_child = child;
                }
            }
            if self.heap[min_child] < self.heap[idx] {
                self.heap.swap(idx, min_child);
                idx = min_child;
            } else {
                break;
            }
        }
    }
}

impl<T: Debug> Debug for ArrayHeap<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArrayHeap")
            .field("heap", &self.heap)
            .field("capacity", &self.capacity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_heap_order<T: PartialOrd + Debug>(heap: &ArrayHeap<T>) {
        let items = heap.as_slice();
        for (i, item) in items.iter().enumerate() {
            for child in i * NUM_CHILDREN + 1..=i * NUM_CHILDREN + NUM_CHILDREN {
                if let Some(c) = items.get(child) {
                    assert!(item <= c, "heap order broken at {i}: {item:?} > {c:?}");
                }
            }
        }
    }

    #[test]
    fn insert_tracks_size() {
        let mut heap = ArrayHeap::new();
        heap.insert(3).unwrap();
        assert_eq!(heap.size(), 1);
        assert_eq!(heap.peek_min(), Ok(&3));
    }

    #[test]
    fn remove_min_ascending() {
        let mut heap = ArrayHeap::new();
        for i in 0..100 {
            heap.insert(i).unwrap();
        }
        for i in 0..100 {
            assert_eq!(heap.peek_min(), Ok(&i));
            assert_eq!(heap.size(), 100 - i as usize);
            assert_eq!(heap.remove_min(), Ok(i));
        }
        assert!(heap.is_empty());
    }

    #[test]
    fn reverse_and_negative_input() {
        let mut heap = ArrayHeap::new();
        for i in (-20..20).rev() {
            heap.insert(i).unwrap();
            assert_heap_order(&heap);
        }
        for i in -20..20 {
            assert_eq!(heap.remove_min(), Ok(i));
            assert_heap_order(&heap);
        }
    }

    #[test]
    fn empty_heap_errors() {
        let mut heap: ArrayHeap<i32> = ArrayHeap::new();
        assert_eq!(heap.peek_min(), Err(Error::EmptyContainer));
        assert_eq!(heap.remove_min(), Err(Error::EmptyContainer));
        heap.insert(1).unwrap();
        heap.remove_min().unwrap();
        assert_eq!(heap.remove_min(), Err(Error::EmptyContainer));
    }

    #[test]
    fn nan_is_rejected_without_mutation() {
        let mut heap = ArrayHeap::new();
        heap.insert(1.0).unwrap();
        assert!(matches!(heap.insert(f64::NAN), Err(Error::InvalidArgument(_))));
        assert_eq!(heap.size(), 1);
        assert_eq!(heap.peek_min(), Ok(&1.0));
    }

    #[test]
    fn duplicates_come_out_together() {
        let mut heap = ArrayHeap::new();
        for v in [5, 1, 5, 3, 1, 3, 5, 1] {
            heap.insert(v).unwrap();
        }
        let mut out = Vec::new();
        while let Ok(v) = heap.remove_min() {
            out.push(v);
        }
        assert_eq!(out, vec![1, 1, 1, 3, 3, 5, 5, 5]);
    }

    #[test]
    fn capacity_grows_geometrically() {
        let mut heap = ArrayHeap::new();
        assert_eq!(heap.capacity(), 1);
        heap.insert(0).unwrap();
        assert_eq!(heap.capacity(), 1);
        heap.insert(1).unwrap();
        assert_eq!(heap.capacity(), 5);
        for i in 2..6 {
            heap.insert(i).unwrap();
        }
        assert_eq!(heap.capacity(), 21);
        for i in 6..22 {
            heap.insert(i).unwrap();
        }
        assert_eq!(heap.capacity(), 85);
    }

    proptest::proptest! {
        #[test]
        fn mixed_inserts_and_removals_keep_order(
            ops in proptest::collection::vec(proptest::option::of(0u32..1000), 0..500)
        ) {
            let mut heap = ArrayHeap::new();
            let mut mirror = Vec::new();
            for op in ops {
                match op {
                    Some(v) => {
                        heap.insert(v).unwrap();
                        mirror.push(v);
                    }
                    None => {
                        mirror.sort_unstable();
                        if mirror.is_empty() {
                            proptest::prop_assert_eq!(heap.remove_min(), Err(Error::EmptyContainer));
                        } else {
                            proptest::prop_assert_eq!(heap.remove_min(), Ok(mirror.remove(0)));
                        }
                    }
                }
                assert_heap_order(&heap);
                proptest::prop_assert_eq!(heap.size(), mirror.len());
            }
        }
    }
}

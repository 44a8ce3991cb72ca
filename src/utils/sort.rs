use crate::error::{Error, Result};
use crate::utils::datastruct::heap::ArrayHeap;
use crate::utils::datastruct::list::LinkedList;

/// Top-k selection with a bounded min-heap.
/// - returns the `k` largest inputs in ascending order
/// - `k >= n` returns every input, sorted
/// - `k < 0` is `InvalidArgument`
///
/// Complexity: O(n log k)
///
/// # Examples
/// ```
/// use tf_idf_relevance::{top_k_sort, LinkedList};
/// let list: LinkedList<i32> = (0..20).collect();
/// let top = top_k_sort(3, &list).unwrap();
/// assert_eq!(top.into_iter().copied().collect::<Vec<_>>(), vec![17, 18, 19]);
/// ```
pub fn top_k_sort<T, I>(k: isize, input: I) -> Result<LinkedList<T>>
where
    I: IntoIterator<Item = T>,
    T: PartialOrd,
{
    let k = usize::try_from(k)
        .map_err(|_| Error::invalid_argument(format!("k must not be negative, got {k}")))?;
    let mut out = LinkedList::new();
    if k == 0 {
        return Ok(out);
    }

    let mut heap = ArrayHeap::new();
    for item in input {
        heap.insert(item)?;
        if heap.size() > k {
            heap.remove_min()?;
        }
    }
    while !heap.is_empty() {
        out.add(heap.remove_min()?);
    }
    Ok(out)
}

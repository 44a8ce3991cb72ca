use std::fmt::Debug;

use crate::error::{Error, Result};
use crate::utils::datastruct::arena::{Arena, ArenaSlot};

/// Doubly linked sequence
///
/// Nodes live in an `Arena` owned by the list, so the list owns every node.
/// `next` is the forward chain walked by iteration; `prev` is only read to
/// splice or unlink a node in O(1).
///
/// Invariants:
/// - `front.prev` and `back.next` are `None`
/// - walking `next` from `front` reaches `back` in exactly `size` nodes
///
/// Iterators borrow the list, so mutating it mid-iteration does not compile.
///
/// # Examples
/// ```
/// use tf_idf_relevance::LinkedList;
/// let mut list = LinkedList::new();
/// list.add("b");
/// list.insert(0, "a").unwrap();
/// assert_eq!(list.get(1), Ok(&"b"));
/// ```
#[derive(Clone)]
pub struct LinkedList<T> {
    nodes: Arena<Node<T>>,
    front: Option<ArenaSlot>,
    back: Option<ArenaSlot>,
    size: usize,
}

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    prev: Option<ArenaSlot>,
    next: Option<ArenaSlot>,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList {
            nodes: Arena::new(),
            front: None,
            back: None,
            size: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Append at the back. O(1)
    pub fn add(&mut self, value: T) {
        let slot = self.nodes.alloc(Node {
            value,
            prev: self.back,
            next: None,
        });
        match self.back {
            Some(back) => self.set_next(back, Some(slot)),
            None => self.front = Some(slot),
        }
        self.back = Some(slot);
        self.size += 1;
    }

    /// Remove and return the back element. O(1)
    pub fn remove(&mut self) -> Result<T> {
        let back = self.back.ok_or(Error::EmptyContainer)?;
        self.unlink(back).ok_or(Error::EmptyContainer)
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.slot_at(index)
            .and_then(|slot| self.nodes.get(slot))
            .map(|node| &node.value)
            .ok_or(Error::out_of_bounds(index, self.size))
    }

    /// Replace the value at `index`, returning the previous one
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let size = self.size;
        self.slot_at(index)
            .and_then(|slot| self.nodes.get_mut(slot))
            .map(|node| std::mem::replace(&mut node.value, value))
            .ok_or(Error::out_of_bounds(index, size))
    }

    /// Splice a new node in front of position `index`.
    /// `index == size` appends.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.size {
            return Err(Error::out_of_bounds(index, self.size));
        }
        if index == self.size {
            self.add(value);
            return Ok(());
        }
        let target = self
            .slot_at(index)
            .ok_or(Error::out_of_bounds(index, self.size))?;
        let prev = self.nodes.get(target).and_then(|node| node.prev);
        let slot = self.nodes.alloc(Node {
            value,
            prev,
            next: Some(target),
        });
        match prev {
            Some(prev) => self.set_next(prev, Some(slot)),
            None => self.front = Some(slot),
        }
        self.set_prev(target, Some(slot));
        self.size += 1;
        Ok(())
    }

    /// Remove and return the value at `index`
    pub fn delete(&mut self, index: usize) -> Result<T> {
        let size = self.size;
        self.slot_at(index)
            .and_then(|slot| self.unlink(slot))
            .ok_or(Error::out_of_bounds(index, size))
    }

    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|v| v == value)
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            head: self.front,
            tail: self.back,
            remaining: self.size,
        }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.front = None;
        self.back = None;
        self.size = 0;
    }

    /// Walk from whichever end is closer to `index`.
    fn slot_at(&self, index: usize) -> Option<ArenaSlot> {
        if index >= self.size {
            return None;
        }
        let from_back = self.size - 1 - index;
        if index <= from_back {
            let mut cur = self.front?;
            for _ in 0..index {
                cur = self.nodes.get(cur)?.next?;
            }
            Some(cur)
        } else {
            let mut cur = self.back?;
            for _ in 0..from_back {
                cur = self.nodes.get(cur)?.prev?;
            }
            Some(cur)
        }
    }

    /// Detach `slot` from the chain and free it.
    fn unlink(&mut self, slot: ArenaSlot) -> Option<T> {
        let node = self.nodes.dealloc(slot)?;
        match node.prev {
            Some(prev) => self.set_next(prev, node.next),
            None => self.front = node.next,
        }
        match node.next {
            Some(next) => self.set_prev(next, node.prev),
            None => self.back = node.prev,
        }
        self.size -= 1;
        Some(node.value)
    }

    #[inline]
    fn set_next(&mut self, slot: ArenaSlot, next: Option<ArenaSlot>) {
        if let Some(node) = self.nodes.get_mut(slot) {
            node.next = next;
        }
    }

    #[inline]
    fn set_prev(&mut self, slot: ArenaSlot, prev: Option<ArenaSlot>) {
        if let Some(node) = self.nodes.get_mut(slot) {
            node.prev = prev;
        }
    }
}

/// Borrowing iterator, front to back (and back to front via `rev`)
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    head: Option<ArenaSlot>,
    tail: Option<ArenaSlot>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.nodes.get(self.head?)?;
        self.head = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.nodes.get(self.tail?)?;
        self.tail = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

/// Owning iterator, front to back
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let front = self.list.front?;
        self.list.unlink(front)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.size, Some(self.list.size))
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<T: Clone>(list: &LinkedList<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    /// forward and backward walks must agree
    fn assert_links<T: Clone + PartialEq + Debug>(list: &LinkedList<T>) {
        let forward = collect(list);
        let mut backward: Vec<T> = list.iter().rev().cloned().collect();
        backward.reverse();
        assert_eq!(forward, backward);
        assert_eq!(forward.len(), list.size());
    }

    #[test]
    fn add_and_remove_from_back() {
        let mut list = LinkedList::new();
        for i in 0..5 {
            list.add(i);
        }
        assert_eq!(list.size(), 5);
        assert_eq!(list.remove(), Ok(4));
        assert_eq!(list.remove(), Ok(3));
        assert_eq!(collect(&list), vec![0, 1, 2]);
        assert_links(&list);
    }

    #[test]
    fn remove_on_empty_fails() {
        let mut list: LinkedList<i32> = LinkedList::new();
        assert_eq!(list.remove(), Err(Error::EmptyContainer));
        list.add(1);
        assert_eq!(list.remove(), Ok(1));
        assert_eq!(list.remove(), Err(Error::EmptyContainer));
        assert!(list.is_empty());
    }

    #[test]
    fn get_walks_from_both_ends() {
        let list: LinkedList<i32> = (0..11).collect();
        for i in 0..11 {
            assert_eq!(list.get(i), Ok(&(i as i32)));
        }
        assert_eq!(list.get(11), Err(Error::out_of_bounds(11, 11)));
    }

    #[test]
    fn set_replaces_in_place() {
        let mut list: LinkedList<&str> = ["a", "b", "c"].into_iter().collect();
        assert_eq!(list.set(0, "x"), Ok("a"));
        assert_eq!(list.set(2, "z"), Ok("c"));
        assert_eq!(list.set(1, "y"), Ok("b"));
        assert_eq!(collect(&list), vec!["x", "y", "z"]);
        assert_eq!(list.set(3, "w"), Err(Error::out_of_bounds(3, 3)));
        assert_links(&list);
    }

    #[test]
    fn insert_at_front_middle_and_end() {
        let mut list = LinkedList::new();
        list.insert(0, 2).unwrap();
        list.insert(0, 0).unwrap();
        list.insert(1, 1).unwrap();
        list.insert(3, 4).unwrap();
        list.insert(3, 3).unwrap();
        assert_eq!(collect(&list), vec![0, 1, 2, 3, 4]);
        assert_links(&list);
        assert_eq!(list.insert(6, 9), Err(Error::out_of_bounds(6, 5)));
        assert_eq!(list.size(), 5);
    }

    #[test]
    fn insert_then_get_returns_inserted() {
        let mut list: LinkedList<i32> = (0..8).collect();
        for i in 0..=8 {
            let mut copy = list.clone();
            copy.insert(i, 100).unwrap();
            assert_eq!(copy.get(i), Ok(&100));
            assert_eq!(copy.size(), 9);
            assert_links(&copy);
        }
        list.insert(8, 8).unwrap();
        assert_eq!(list.get(8), Ok(&8));
    }

    #[test]
    fn delete_shifts_following_values() {
        let list: LinkedList<i32> = (0..6).collect();
        for i in 0..6 {
            let mut copy = list.clone();
            assert_eq!(copy.delete(i), Ok(i as i32));
            if i < 5 {
                assert_eq!(copy.get(i), Ok(&(i as i32 + 1)));
            }
            assert_links(&copy);
        }
    }

    #[test]
    fn delete_last_element_empties_list() {
        let mut list = LinkedList::new();
        list.add("only");
        assert_eq!(list.delete(0), Ok("only"));
        assert!(list.is_empty());
        assert_eq!(list.delete(0), Err(Error::out_of_bounds(0, 0)));
        list.add("again");
        assert_eq!(collect(&list), vec!["again"]);
        assert_links(&list);
    }

    #[test]
    fn index_of_honours_absent_values() {
        let list: LinkedList<Option<&str>> =
            [Some("a"), None, Some("b"), None].into_iter().collect();
        assert_eq!(list.index_of(&None), Some(1));
        assert_eq!(list.index_of(&Some("b")), Some(2));
        assert_eq!(list.index_of(&Some("c")), None);
        assert!(list.contains(&Some("a")));
        assert!(!list.contains(&Some("z")));
    }

    #[test]
    fn iteration_is_restartable() {
        let list: LinkedList<i32> = (1..=3).collect();
        let first: i32 = list.iter().sum();
        let second: i32 = (&list).into_iter().sum();
        assert_eq!(first, 6);
        assert_eq!(second, 6);
        assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn reused_slots_keep_order() {
        let mut list: LinkedList<i32> = (0..4).collect();
        list.delete(1).unwrap();
        list.delete(1).unwrap();
        list.insert(1, 10).unwrap();
        list.add(20);
        assert_eq!(collect(&list), vec![0, 10, 3, 20]);
        assert_links(&list);
    }
}

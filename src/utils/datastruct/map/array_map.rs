use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{Error, Result};
use crate::utils::datastruct::map::Dictionary;

/// Small array-backed map.
/// Linear scan on every lookup, so it is only meant for a handful of
/// entries, e.g. one bucket of `ChainedHashMap`.
#[derive(Clone, PartialEq)]
pub struct ArrayMap<K, V> {
    pairs: Vec<(K, V)>,
}

impl<K, V> Default for ArrayMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> ArrayMap<K, V> {
    pub fn new() -> Self {
        ArrayMap { pairs: Vec::new() }
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.pairs.iter(),
        }
    }

    fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.pairs.iter().position(|(k, _)| k.borrow() == key)
    }
}

impl<K, V> Dictionary<K, V> for ArrayMap<K, V>
where
    K: Hash + Eq,
{
    fn get<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.position(key)
            .map(|idx| &self.pairs[idx].1)
            .ok_or(Error::NoSuchKey)
    }

    fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.position(key) {
            Some(idx) => Ok(&mut self.pairs[idx].1),
            None => Err(Error::NoSuchKey),
        }
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        match self.position(&key) {
            Some(idx) => Some(std::mem::replace(&mut self.pairs[idx].1, value)),
            None => {
                self.pairs.push((key, value));
                None
            }
        }
    }

    fn remove<Q>(&mut self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.position(key).ok_or(Error::NoSuchKey)?;
        Ok(self.pairs.swap_remove(idx).1)
    }

    fn size(&self) -> usize {
        self.pairs.len()
    }
}

impl<K, V> IntoIterator for ArrayMap<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

impl<K: Debug, V: Debug> Debug for ArrayMap<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

pub struct Iter<'a, K, V> {
    inner: std::slice::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_overwrites_without_growing() {
        let mut map = ArrayMap::new();
        assert_eq!(map.put("a", 1), None);
        assert_eq!(map.put("b", 2), None);
        assert_eq!(map.put("a", 3), Some(1));
        assert_eq!(map.size(), 2);
        assert_eq!(map.get("a"), Ok(&3));
    }

    #[test]
    fn remove_missing_key_fails() {
        let mut map: ArrayMap<String, i32> = ArrayMap::new();
        map.put("x".to_string(), 1);
        assert_eq!(map.remove("y"), Err(Error::NoSuchKey));
        assert_eq!(map.remove("x"), Ok(1));
        assert_eq!(map.remove("x"), Err(Error::NoSuchKey));
        assert!(map.is_empty());
    }

    #[test]
    fn absent_key_is_an_ordinary_key() {
        let mut map: ArrayMap<Option<&str>, i32> = ArrayMap::new();
        map.put(None, 0);
        map.put(Some("k"), 1);
        assert_eq!(map.get(&None), Ok(&0));
        assert!(map.contains_key(&Some("k")));
        assert_eq!(map.remove(&None), Ok(0));
        assert!(!map.contains_key(&None));
    }
}

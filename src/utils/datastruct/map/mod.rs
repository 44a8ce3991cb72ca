use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

use ahash::RandomState;

use crate::error::Result;

pub mod array_map;
pub mod set;

pub use array_map::ArrayMap;
pub use set::ChainedHashSet;

/// Key-unique associative container contract.
///
/// Shared by `ChainedHashMap` and its buckets (`ArrayMap`), so key equality
/// lives in one place.
pub trait Dictionary<K, V> {
    /// Stored value for `key`, or `NoSuchKey`
    fn get<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    /// Insert or overwrite; returns the overwritten value
    fn put(&mut self, key: K, value: V) -> Option<V>;

    /// Remove and return the value for `key`, or `NoSuchKey`
    fn remove<Q>(&mut self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    fn size(&self) -> usize;

    fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_ok()
    }

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

/// bucket count of a fresh map
pub const DEFAULT_BUCKET_COUNT: usize = 100;

/// ChainedHashMap
/// Open hashing: every bucket is a small `ArrayMap`.
///
/// - `bucket = hash(key) % bucket_count`
/// - once a `put` adds a key and `size > 0.75 * bucket_count`, the bucket
///   count doubles and every pair is re-bucketed at once
/// - overwrites and removals never resize
///
/// Iteration order is unspecified.
///
/// # Examples
/// ```
/// use tf_idf_relevance::{ChainedHashMap, Dictionary};
/// let mut map: ChainedHashMap<String, f64> = ChainedHashMap::new();
/// map.put("cat".to_string(), 0.5);
/// assert_eq!(map.get("cat"), Ok(&0.5));
/// assert!(map.get("dog").is_err());
/// ```
#[derive(Clone)]
pub struct ChainedHashMap<K, V, S = RandomState> {
    chains: Vec<ArrayMap<K, V>>,
    size: usize,
    hash_builder: S,
}

impl<K, V, S> Default for ChainedHashMap<K, V, S>
where
    S: Default,
{
    fn default() -> Self {
        Self::with_bucket_count_and_hasher(DEFAULT_BUCKET_COUNT, S::default())
    }
}

impl<K, V> ChainedHashMap<K, V, RandomState> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bucket_count(bucket_count: usize) -> Self {
        Self::with_bucket_count_and_hasher(bucket_count, RandomState::new())
    }
}

impl<K, V, S> ChainedHashMap<K, V, S> {
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_bucket_count_and_hasher(DEFAULT_BUCKET_COUNT, hash_builder)
    }

    /// `bucket_count` is clamped to at least 1
    pub fn with_bucket_count_and_hasher(bucket_count: usize, hash_builder: S) -> Self {
        let bucket_count = bucket_count.max(1);
        ChainedHashMap {
            chains: (0..bucket_count).map(|_| ArrayMap::new()).collect(),
            size: 0,
            hash_builder,
        }
    }

    pub fn bucket_count(&self) -> usize {
        self.chains.len()
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            chains: self.chains.iter(),
            current: None,
            remaining: self.size,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }
}

impl<K, V, S> ChainedHashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// `hash % bucket_count` on the unsigned 64-bit hash.
    /// There is no dedicated bucket for an absent key: `Option::None` keys
    /// hash through `S` like every other key rather than being pinned to
    /// bucket 0.
    #[inline]
    fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        Q: Hash + ?Sized,
    {
        (self.hash_builder.hash_one(key) % self.chains.len() as u64) as usize
    }

    /// size > 0.75 * bucket_count, kept in integers
    #[inline]
    fn over_loaded(&self) -> bool {
        self.size * 4 > self.chains.len() * 3
    }

    /// Double the table and re-bucket every pair.
    fn grow(&mut self) {
        let new_count = self.chains.len() * 2;
        tracing::trace!(from = self.chains.len(), to = new_count, size = self.size, "rehash");
        let old = std::mem::replace(
            &mut self.chains,
            (0..new_count).map(|_| ArrayMap::new()).collect(),
        );
        for (key, value) in old.into_iter().flatten() {
            let idx = self.bucket_index(&key);
            self.chains[idx].put(key, value);
        }
    }
}

impl<K, V, S> Dictionary<K, V> for ChainedHashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn get<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.chains[self.bucket_index(key)].get(key)
    }

    fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.bucket_index(key);
        self.chains[idx].get_mut(key)
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        let idx = self.bucket_index(&key);
        let old = self.chains[idx].put(key, value);
        if old.is_none() {
            self.size += 1;
            if self.over_loaded() {
                self.grow();
            }
        }
        old
    }

    fn remove<Q>(&mut self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.bucket_index(key);
        let value = self.chains[idx].remove(key)?;
        self.size -= 1;
        Ok(value)
    }

    fn size(&self) -> usize {
        self.size
    }
}

/// Iterates bucket by bucket, skipping empty ones.
pub struct Iter<'a, K, V> {
    chains: std::slice::Iter<'a, ArrayMap<K, V>>,
    current: Option<array_map::Iter<'a, K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(pair) = self.current.as_mut().and_then(|it| it.next()) {
                self.remaining -= 1;
                return Some(pair);
            }
            self.current = Some(self.chains.next()?.iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

impl<'a, K, V, S> IntoIterator for &'a ChainedHashMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, S> IntoIterator for ChainedHashMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = std::iter::Flatten<std::vec::IntoIter<ArrayMap<K, V>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.chains.into_iter().flatten()
    }
}

impl<K, V, S> FromIterator<(K, V)> for ChainedHashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K, V, S> Extend<(K, V)> for ChainedHashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K: Debug, V: Debug, S> Debug for ChainedHashMap<K, V, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

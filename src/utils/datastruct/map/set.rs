use std::borrow::Borrow;
use std::hash::{BuildHasher, Hash};

use ahash::RandomState;

use crate::error::Result;
use crate::utils::datastruct::map::{ChainedHashMap, Dictionary};

/// Hash set on top of `ChainedHashMap<T, ()>`
#[derive(Clone, Debug)]
pub struct ChainedHashSet<T, S = RandomState> {
    map: ChainedHashMap<T, (), S>,
}

impl<T, S: Default> Default for ChainedHashSet<T, S> {
    fn default() -> Self {
        ChainedHashSet {
            map: ChainedHashMap::default(),
        }
    }
}

impl<T> ChainedHashSet<T, RandomState> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T, S> ChainedHashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    /// Returns `true` if the value was not present yet
    pub fn add(&mut self, value: T) -> bool {
        self.map.put(value, ()).is_none()
    }

    pub fn remove<Q>(&mut self, value: &Q) -> Result<()>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.remove(value)
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(value)
    }

    pub fn size(&self) -> usize {
        self.map.size()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.map.keys()
    }
}

impl<T, S> FromIterator<T> for ChainedHashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::default();
        for value in iter {
            set.add(value);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn keeps_distinct_values() {
        let set: ChainedHashSet<&str> = ["cat", "cat", "bird", "cat"].into_iter().collect();
        assert_eq!(set.size(), 2);
        assert!(set.contains("cat"));
        assert!(set.contains("bird"));
        assert!(!set.contains("dog"));
    }

    #[test]
    fn add_reports_novelty_and_remove_fails_on_missing() {
        let mut set = ChainedHashSet::new();
        assert!(set.add(1));
        assert!(!set.add(1));
        assert_eq!(set.remove(&2), Err(Error::NoSuchKey));
        assert_eq!(set.remove(&1), Ok(()));
        assert!(set.is_empty());
    }
}

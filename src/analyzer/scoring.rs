use std::cmp::Ordering;
use std::fmt::{Debug, Display};

use serde::Serialize;

/// One scored document.
/// Compares by `score` only, so hits can go through `top_k_sort`.
#[derive(Debug, Clone, Serialize)]
pub struct Hit<K, N> {
    pub id: K,
    pub score: N,
}

impl<K, N: PartialEq> PartialEq for Hit<K, N> {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score
    }
}

impl<K, N: PartialOrd> PartialOrd for Hit<K, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.score.partial_cmp(&other.score)
    }
}

/// Ranked results, best first
#[derive(Clone, Serialize)]
pub struct Hits<K, N> {
    pub list: Vec<Hit<K, N>>,
}

impl<K, N> Hits<K, N> {
    pub fn new(list: Vec<Hit<K, N>>) -> Self {
        Hits { list }
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Hit<K, N>> {
        self.list.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &K> {
        self.list.iter().map(|hit| &hit.id)
    }
}

impl<K, N> IntoIterator for Hits<K, N> {
    type Item = Hit<K, N>;
    type IntoIter = std::vec::IntoIter<Hit<K, N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl<K: Debug, N: Debug> Debug for Hits<K, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            writeln!(f, "Hits [")?;
            for hit in &self.list {
                writeln!(f, "    {:?}: {:?}", hit.id, hit.score)?;
            }
            write!(f, "]")
        } else {
            f.debug_list()
                .entries(self.list.iter().map(|hit| (&hit.id, &hit.score)))
                .finish()
        }
    }
}

/// `<score>\t<id>` per line
impl<K: Display, N: Display> Display for Hits<K, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for hit in &self.list {
            writeln!(f, "{}\t{}", hit.score, hit.id)?;
        }
        Ok(())
    }
}

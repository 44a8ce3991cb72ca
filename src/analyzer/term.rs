use num::Float;

use crate::analyzer::document::Document;
use crate::utils::datastruct::map::{ChainedHashMap, ChainedHashSet, Dictionary};

/// term -> weight
pub type TermVector<N> = ChainedHashMap<String, N>;

#[inline]
pub(crate) fn cast<N: Float>(n: usize) -> N {
    num::cast(n).unwrap_or_else(N::zero)
}

/// Term frequency: occurrences of a term divided by the number of tokens.
/// An empty token stream gives an empty vector.
pub fn tf_scores<N, I, T>(terms: I) -> TermVector<N>
where
    N: Float,
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let mut counts: ChainedHashMap<String, usize> = ChainedHashMap::new();
    let mut total = 0usize;
    for term in terms {
        let term = term.as_ref();
        total += 1;
        match counts.get_mut(term) {
            Ok(count) => *count += 1,
            Err(_) => {
                counts.put(term.to_owned(), 1);
            }
        }
    }
    let total: N = cast(total);
    counts
        .into_iter()
        .map(|(term, count)| (term, cast::<N>(count) / total))
        .collect()
}

/// Inverse document frequency `ln(N / df)` for every term of the corpus,
/// where `df` counts documents containing the term at least once.
pub fn idf_scores<'a, N, D>(documents: &[&'a D]) -> TermVector<N>
where
    N: Float,
    D: Document + 'a,
{
    let mut doc_freq: ChainedHashMap<&str, usize> = ChainedHashMap::new();
    for doc in documents {
        let distinct: ChainedHashSet<&str> = doc.terms().iter().map(String::as_str).collect();
        for term in distinct.iter() {
            match doc_freq.get_mut(*term) {
                Ok(df) => *df += 1,
                Err(_) => {
                    doc_freq.put(*term, 1);
                }
            }
        }
    }
    let doc_num: N = cast(documents.len());
    doc_freq
        .into_iter()
        .map(|(term, df)| (term.to_owned(), (doc_num / cast::<N>(df)).ln()))
        .collect()
}

/// Euclidean norm
pub fn norm<N: Float>(vector: &TermVector<N>) -> N {
    vector
        .values()
        .fold(N::zero(), |acc, &w| acc + w * w)
        .sqrt()
}

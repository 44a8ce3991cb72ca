pub mod document;
pub mod scoring;
pub mod term;

use std::borrow::Borrow;
use std::hash::Hash;

use num::Float;
use rayon::prelude::*;

use crate::analyzer::document::Document;
use crate::analyzer::scoring::{Hit, Hits};
use crate::analyzer::term::{idf_scores, norm, tf_scores, TermVector};
use crate::error::{Error, Result};
use crate::utils::datastruct::list::LinkedList;
use crate::utils::datastruct::map::{ChainedHashMap, ChainedHashSet, Dictionary};
use crate::utils::sort::top_k_sort;

/// TF-IDF relevance analyzer
///
/// Built once from a fixed corpus, read-only afterwards:
/// - IDF table: term -> `ln(doc_num / df)`
/// - TF-IDF vector per document: term -> `tf * idf`
/// - Euclidean norm of each document vector
///
/// Relevance of a query to a document is a cosine similarity restricted to
/// the query's terms: document terms absent from the query add nothing to
/// the dot product, while the document norm still covers the whole vector.
///
/// `K` is the document id, `N` the weight type (`f32` or `f64`).
#[derive(Debug, Clone)]
pub struct TfIdfAnalyzer<K, N = f64>
where
    K: Eq + Hash,
    N: Float,
{
    idf_scores: TermVector<N>,
    document_vectors: ChainedHashMap<K, TermVector<N>>,
    document_norms: ChainedHashMap<K, N>,
}

/// A query as scored: tokens in order plus its weight vector
struct Query<N> {
    terms: LinkedList<String>,
    weights: TermVector<N>,
    norm: N,
}

impl<K, N> TfIdfAnalyzer<K, N>
where
    K: Clone + Eq + Hash,
    N: Float,
{
    /// Build every table from `documents`.
    /// Two documents sharing an id is `InvalidArgument`.
    pub fn new<'a, D, I>(documents: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a D>,
        D: Document<Id = K> + 'a,
    {
        let documents: Vec<&D> = documents.into_iter().collect();

        let mut ids: ChainedHashSet<&K> = ChainedHashSet::new();
        for doc in &documents {
            if !ids.add(doc.id()) {
                return Err(Error::invalid_argument("duplicate document id"));
            }
        }

        let idf_scores: TermVector<N> = idf_scores(&documents);

        let mut document_vectors = ChainedHashMap::new();
        let mut document_norms = ChainedHashMap::new();
        for doc in &documents {
            let vector = Self::tf_idf_vector(&idf_scores, tf_scores(doc.terms()));
            document_norms.put(doc.id().clone(), norm(&vector));
            document_vectors.put(doc.id().clone(), vector);
        }

        tracing::debug!(
            documents = documents.len(),
            vocabulary = idf_scores.size(),
            "built tf-idf tables"
        );

        Ok(TfIdfAnalyzer {
            idf_scores,
            document_vectors,
            document_norms,
        })
    }

    /// Weigh a TF vector with the corpus IDF table.
    /// Terms the corpus never saw get weight 0.
    fn tf_idf_vector(idf_scores: &TermVector<N>, tf: TermVector<N>) -> TermVector<N> {
        tf.into_iter()
            .map(|(term, tf)| {
                let idf = idf_scores.get(term.as_str()).copied().unwrap_or(N::zero());
                (term, tf * idf)
            })
            .collect()
    }

    /// Tokens, TF-IDF weights and norm of a query
    fn query_vector<I, T>(&self, query: I) -> Query<N>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let terms: LinkedList<String> = query.into_iter().map(|t| t.as_ref().to_owned()).collect();
        let weights = Self::tf_idf_vector(&self.idf_scores, tf_scores(&terms));
        let query_norm = norm(&weights);
        Query {
            terms,
            weights,
            norm: query_norm,
        }
    }

    fn score<Q>(&self, query: &Query<N>, id: &Q) -> Result<N>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let document = self.document_vectors.get(id)?;
        let document_norm = *self.document_norms.get(id)?;

        // one product per query occurrence, so repeated terms count again
        let numerator = query.terms.iter().fold(N::zero(), |acc, term| {
            let weight = query.weights.get(term.as_str()).copied().unwrap_or(N::zero());
            let doc_weight = document.get(term.as_str()).copied().unwrap_or(N::zero());
            acc + weight * doc_weight
        });
        let denominator = document_norm * query.norm;
        if denominator == N::zero() {
            return Ok(N::zero());
        }
        Ok(numerator / denominator)
    }

    /// Relevance of `query` to the document `id`.
    ///
    /// The dot product walks the query token by token: a term given twice
    /// adds its product twice, so the result can exceed 1. The query norm is
    /// still taken over the distinct-term vector.
    ///
    /// Returns 0 when either vector has zero norm (empty query, query made
    /// only of unseen or ubiquitous terms, ...). An id that was not part of
    /// the corpus is `NoSuchKey`.
    pub fn compute_relevance<I, T, Q>(&self, query: I, id: &Q) -> Result<N>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let query = self.query_vector(query);
        self.score(&query, id)
    }

    /// IDF score of every corpus term
    pub fn idf_scores(&self) -> &TermVector<N> {
        &self.idf_scores
    }

    /// TF-IDF vector of every document, keyed by id
    pub fn document_tf_idf_vectors(&self) -> &ChainedHashMap<K, TermVector<N>> {
        &self.document_vectors
    }

    pub fn document_norm<Q>(&self, id: &Q) -> Result<N>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.document_norms.get(id).copied()
    }

    pub fn contains_doc<Q>(&self, id: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.document_vectors.contains_key(id)
    }

    pub fn doc_num(&self) -> usize {
        self.document_vectors.size()
    }
}

impl<K, N> TfIdfAnalyzer<K, N>
where
    K: Clone + Eq + Hash + Send + Sync,
    N: Float + Send + Sync,
{
    /// Score every document against `query` and keep the `k` best,
    /// highest score first.
    /// Scoring runs in parallel; the tables are only read.
    pub fn rank<I, T>(&self, query: I, k: usize) -> Result<Hits<K, N>>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let query = self.query_vector(query);
        let ids: Vec<&K> = self.document_vectors.keys().collect();
        let hits = ids
            .into_par_iter()
            .map(|id| {
                self.score(&query, id).map(|score| Hit {
                    id: id.clone(),
                    score,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let k = isize::try_from(k).unwrap_or(isize::MAX);
        let mut list: Vec<Hit<K, N>> = top_k_sort(k, hits)?.into_iter().collect();
        list.reverse();
        Ok(Hits::new(list))
    }
}

/// This crate provides generic containers and a TF-IDF relevance analyzer
/// built on top of them.
pub mod analyzer;
pub mod error;
pub mod utils;

/// TF-IDF Relevance Analyzer
/// Scores documents of a fixed corpus against a query.
///
/// Internally, it holds:
/// - The IDF table of the corpus (`ln(doc_num / document_frequency)`)
/// - A TF-IDF vector for each document
/// - The Euclidean norm of each document vector
///
/// `TfIdfAnalyzer<K, N>` has the following generic parameters:
/// - `K`: Document id type (e.g., String, usize)
/// - `N`: Weight type (f32 or f64)
///
/// Relevance is a cosine similarity whose dot product only runs over the
/// query's tokens, once per occurrence. Ranking with `rank` scores documents
/// in parallel and keeps the best `k` through `top_k_sort`.
pub use analyzer::TfIdfAnalyzer;

/// Document input
/// `Document` is what the analyzer reads: an id and a token sequence.
/// `TokenizedDocument` is a ready-made owned implementation, `tokenize` its
/// whitespace tokenizer.
pub use analyzer::document::{tokenize, Document, TokenizedDocument};

/// Search Hits and Hit structures
/// - `Hits`: ranked results, best first
/// - `Hit`: a document id and its score
pub use analyzer::scoring::{Hit, Hits};

/// Error type shared by every container and the analyzer
pub use error::{Error, Result};

/// Doubly linked sequence with positional insert/delete
pub use utils::datastruct::list::LinkedList;

/// Chained hash map, its bucket type and the shared `Dictionary` contract
pub use utils::datastruct::map::{ArrayMap, ChainedHashMap, ChainedHashSet, Dictionary};

/// 4-ary min-heap
pub use utils::datastruct::heap::ArrayHeap;

/// Top-k selection over any sequence
pub use utils::sort::top_k_sort;

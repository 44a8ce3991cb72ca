use std::hash::Hash;

use crate::utils::datastruct::list::LinkedList;

/// A document handed to the analyzer: a stable id and its tokens in order.
/// Tokenization happens before this point.
pub trait Document {
    type Id: Clone + Eq + Hash;

    fn id(&self) -> &Self::Id;

    fn terms(&self) -> &LinkedList<String>;
}

/// Whitespace split + lowercase.
/// Good enough for plain text; anything smarter belongs to the caller.
pub fn tokenize(text: &str) -> LinkedList<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// Plain owned document
#[derive(Debug, Clone, PartialEq)]
pub struct TokenizedDocument<K> {
    pub id: K,
    pub terms: LinkedList<String>,
}

impl<K> TokenizedDocument<K> {
    pub fn new<I, T>(id: K, terms: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        TokenizedDocument {
            id,
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_text(id: K, text: &str) -> Self {
        TokenizedDocument {
            id,
            terms: tokenize(text),
        }
    }
}

impl<K> Document for TokenizedDocument<K>
where
    K: Clone + Eq + Hash,
{
    type Id = K;

    fn id(&self) -> &K {
        &self.id
    }

    fn terms(&self) -> &LinkedList<String> {
        &self.terms
    }
}

//! Corpus index
//!
//! Flattens segmented articles into one ordered paragraph collection. The
//! record order is the matrix order: paragraphs group by article in caller
//! order and ascend by paragraph index within an article. The aggregation
//! engine depends on this invariant to locate contiguous per-article blocks,
//! so the order is held explicitly in a record list rather than relying on
//! map iteration order.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ParsimError, Result};

/// Composite key for one paragraph: owning article plus zero-based position
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParagraphId {
    pub article: String,
    pub index: usize,
}

impl ParagraphId {
    pub fn new(article: impl Into<String>, index: usize) -> Self {
        Self {
            article: article.into(),
            index,
        }
    }
}

impl fmt::Display for ParagraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.article, self.index)
    }
}

/// One paragraph with its identifier
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphRecord {
    pub id: ParagraphId,
    pub text: String,
}

/// One article's entry in the length table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleEntry {
    pub name: String,
    pub len: usize,
}

/// The flattened, order-preserving paragraph collection for one run
#[derive(Debug, Default)]
pub struct Corpus {
    records: Vec<ParagraphRecord>,
    by_id: HashMap<ParagraphId, usize>,
    articles: Vec<ArticleEntry>,
}

impl Corpus {
    /// Build the corpus from segmented articles in caller order.
    ///
    /// Fails with `DuplicateArticle` if two articles share a derived name;
    /// identifier uniqueness across the corpus is a hard invariant.
    pub fn from_articles<I>(articles: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let mut corpus = Corpus::default();
        let mut seen: HashSet<String> = HashSet::new();

        for (name, paragraphs) in articles {
            if !seen.insert(name.clone()) {
                return Err(ParsimError::DuplicateArticle { name });
            }
            corpus.articles.push(ArticleEntry {
                name: name.clone(),
                len: paragraphs.len(),
            });
            for (index, text) in paragraphs.into_iter().enumerate() {
                let id = ParagraphId::new(name.clone(), index);
                corpus.by_id.insert(id.clone(), corpus.records.len());
                corpus.records.push(ParagraphRecord { id, text });
            }
        }

        Ok(corpus)
    }

    /// Number of paragraphs across all articles
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Paragraph records in matrix order
    pub fn records(&self) -> &[ParagraphRecord] {
        &self.records
    }

    /// Article length table, in the same article order as the records
    pub fn articles(&self) -> &[ArticleEntry] {
        &self.articles
    }

    /// Paragraph texts in matrix order, for the embedding call
    pub fn texts(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.text.as_str()).collect()
    }

    /// Paragraph identifiers in matrix order
    pub fn ids(&self) -> Vec<ParagraphId> {
        self.records.iter().map(|r| r.id.clone()).collect()
    }

    /// Paragraph display labels in matrix order
    pub fn labels(&self) -> Vec<String> {
        self.records.iter().map(|r| r.id.to_string()).collect()
    }

    /// Article names in table order
    pub fn article_names(&self) -> Vec<String> {
        self.articles.iter().map(|a| a.name.clone()).collect()
    }

    /// Look up a paragraph's text by identifier
    pub fn get(&self, id: &ParagraphId) -> Option<&str> {
        self.by_id
            .get(id)
            .map(|&position| self.records[position].text.as_str())
    }

    /// Look up a paragraph's flattened position by identifier
    pub fn position(&self, id: &ParagraphId) -> Option<usize> {
        self.by_id.get(id).copied()
    }
}

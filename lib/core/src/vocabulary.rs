//! Frozen n-gram vocabulary with smoothed inverse document frequencies.

use crate::vector::SparseVector;
use ahash::AHashMap;
use serde::Serialize;
use std::collections::BTreeMap;

/// A vocabulary entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Term {
    /// Dimension of this n-gram in every vector of the index
    pub id: u32,
    /// Number of documents containing the n-gram at least once
    pub df: u32,
    pub idf: f64,
}

/// Smoothed IDF: `ln((1 + n) / (1 + df)) + 1`.
///
/// Stays positive for terms present in every document.
#[inline]
pub fn smoothed_idf(doc_count: usize, df: u32) -> f64 {
    ((1.0 + doc_count as f64) / (1.0 + f64::from(df))).ln() + 1.0
}

/// The set of n-grams seen at index-build time.
///
/// Term ids follow the lexicographic order of the n-grams, so two builds over
/// the same corpus produce identical vectors. Nothing can be added after
/// [`Vocabulary::fit`].
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    terms: BTreeMap<String, Term>,
    doc_count: usize,
}

impl Vocabulary {
    /// Fit over the per-document term counts of a corpus.
    pub fn fit(documents: &[AHashMap<&str, u32>]) -> Self {
        let mut dfs: BTreeMap<&str, u32> = BTreeMap::new();
        for counts in documents {
            for &gram in counts.keys() {
                *dfs.entry(gram).or_insert(0) += 1;
            }
        }

        let doc_count = documents.len();
        let terms = dfs
            .into_iter()
            .enumerate()
            .map(|(id, (gram, df))| {
                let term = Term {
                    id: id as u32,
                    df,
                    idf: smoothed_idf(doc_count, df),
                };
                (gram.to_string(), term)
            })
            .collect();

        Self { terms, doc_count }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of documents the vocabulary was fitted on
    #[inline]
    pub fn doc_count(&self) -> usize {
        self.doc_count
    }

    #[inline]
    pub fn get(&self, gram: &str) -> Option<&Term> {
        self.terms.get(gram)
    }

    #[inline]
    pub fn contains(&self, gram: &str) -> bool {
        self.terms.contains_key(gram)
    }

    /// Entries in term id order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Term)> {
        self.terms.iter().map(|(gram, term)| (gram.as_str(), term))
    }

    /// Turn raw term counts into an L2-normalized TF-IDF vector.
    /// N-grams outside the vocabulary are dropped.
    pub fn weigh(&self, counts: &AHashMap<&str, u32>) -> SparseVector {
        let entries = counts
            .iter()
            .filter_map(|(gram, &tf)| {
                self.terms
                    .get(*gram)
                    .map(|term| (term.id, f64::from(tf) * term.idf))
            })
            .collect();
        SparseVector::new(entries).normalized()
    }
}

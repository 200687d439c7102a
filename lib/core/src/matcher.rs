use crate::{CorpusIndex, Document, MatchConfig, Result};
use ordered_float::OrderedFloat;
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

/// A document retrieved for a query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match<'a> {
    /// Position of the document in the corpus
    pub position: usize,
    pub document: &'a Document,
    /// Cosine similarity in [0.0, 1.0]
    pub score: f64,
}

/// Ranks the documents of a [`CorpusIndex`] against free-text queries.
///
/// Borrows the index read-only and keeps no state between calls.
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'a> {
    index: &'a CorpusIndex,
    config: MatchConfig,
}

impl<'a> Matcher<'a> {
    /// Matcher with the default top-k and similarity threshold
    pub fn new(index: &'a CorpusIndex) -> Self {
        Self {
            index,
            config: MatchConfig::default(),
        }
    }

    pub fn with_config(index: &'a CorpusIndex, config: MatchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { index, config })
    }

    #[inline]
    pub fn index(&self) -> &'a CorpusIndex {
        self.index
    }

    #[inline]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Best matches for `query` under the configured top-k and threshold
    pub fn search(&self, query: &str) -> Vec<Match<'a>> {
        self.find_best_matches(query, self.config.top_k, self.config.similarity_threshold)
    }

    /// Cosine similarity of `query` against every document, in corpus order
    pub fn scores(&self, query: &str) -> Vec<f64> {
        let query_vector = self.index.vectorize(query);
        self.index
            .iter()
            // Both sides are unit vectors (or zero), so the dot product is the cosine.
            .map(|(_, vector)| query_vector.dot(vector).clamp(0.0, 1.0))
            .collect()
    }

    /// Up to `top_k` documents scoring at least `threshold`, best first.
    ///
    /// Equal scores keep corpus order. An empty result means nothing in the
    /// corpus is close enough; it is not an error.
    pub fn find_best_matches(&self, query: &str, top_k: usize, threshold: f64) -> Vec<Match<'a>> {
        if top_k == 0 {
            return Vec::new();
        }

        let documents = self.index.documents();
        let mut matches: Vec<Match<'a>> = self
            .scores(query)
            .into_iter()
            .enumerate()
            .filter(|&(_, score)| score >= threshold)
            .map(|(position, score)| Match {
                position,
                document: &documents[position],
                score,
            })
            .collect();

        matches.sort_by(|a, b| {
            OrderedFloat(b.score)
                .cmp(&OrderedFloat(a.score))
                .then_with(|| a.position.cmp(&b.position))
        });
        matches.truncate(top_k);

        debug!(
            query_chars = query.chars().count(),
            kept = matches.len(),
            top_k,
            threshold,
            "Matched query"
        );
        matches
    }

    /// [`Matcher::find_best_matches`] for many queries at once.
    ///
    /// Queries are scored in parallel against the shared index; results come
    /// back in query order.
    pub fn find_best_matches_batch<S>(
        &self,
        queries: &[S],
        top_k: usize,
        threshold: f64,
    ) -> Vec<Vec<Match<'a>>>
    where
        S: AsRef<str> + Sync,
    {
        queries
            .par_iter()
            .map(|query| self.find_best_matches(query.as_ref(), top_k, threshold))
            .collect()
    }
}

use crate::ngram::{normalize, term_counts};
use crate::{Document, Error, Result, SparseVector, Vocabulary};
use tracing::info;

/// The immutable document set together with its fitted TF-IDF space.
///
/// Documents, per-document vectors and the vocabulary are built in one step
/// and never change afterwards, so an index can be shared across threads and
/// queried concurrently without locking.
#[derive(Debug, Clone)]
pub struct CorpusIndex {
    documents: Vec<Document>,
    vectors: Vec<SparseVector>,
    vocabulary: Vocabulary,
}

impl CorpusIndex {
    /// Fit the vocabulary over `documents` and vectorize each of them.
    ///
    /// Fails with [`Error::EmptyCorpus`] when there is nothing to fit and with
    /// [`Error::InvalidDocument`] for the first document whose title and
    /// content are both blank.
    pub fn build(documents: Vec<Document>) -> Result<Self> {
        if documents.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        if let Some((position, doc)) = documents
            .iter()
            .enumerate()
            .find(|(_, doc)| !doc.has_feature_text())
        {
            return Err(Error::InvalidDocument {
                position,
                id: doc.id.clone(),
            });
        }

        let texts: Vec<String> = documents
            .iter()
            .map(|doc| normalize(&doc.feature_text()))
            .collect();
        let counts: Vec<_> = texts.iter().map(|text| term_counts(text)).collect();

        let vocabulary = Vocabulary::fit(&counts);
        let vectors: Vec<SparseVector> =
            counts.iter().map(|c| vocabulary.weigh(c)).collect();

        info!(
            documents = documents.len(),
            ngrams = vocabulary.len(),
            "Corpus index built"
        );

        Ok(Self {
            documents,
            vectors,
            vocabulary,
        })
    }

    /// Number of indexed documents
    #[inline]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Always false for a successfully built index
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    #[inline]
    pub fn document(&self, position: usize) -> Option<&Document> {
        self.documents.get(position)
    }

    #[inline]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Stored unit vector of the document at `position`
    #[inline]
    pub fn vector(&self, position: usize) -> Option<&SparseVector> {
        self.vectors.get(position)
    }

    #[inline]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Documents paired with their vectors, in corpus order
    pub fn iter(&self) -> impl Iterator<Item = (&Document, &SparseVector)> {
        self.documents.iter().zip(self.vectors.iter())
    }

    /// TF-IDF vector of arbitrary text under the frozen vocabulary,
    /// L2-normalized. Unknown n-grams are ignored.
    pub fn vectorize(&self, text: &str) -> SparseVector {
        let text = normalize(text);
        self.vocabulary.weigh(&term_counts(&text))
    }
}

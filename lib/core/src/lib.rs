//! # solace Core
//!
//! Retrieval engine for the solace counseling assistant.
//!
//! This crate turns a small corpus of pre-written answers into a character
//! n-gram TF-IDF space and ranks the corpus against free-text questions:
//!
//! - [`Document`] - A corpus entry (id, category, title, content, keywords)
//! - [`CorpusIndex`] - Documents plus their fitted vocabulary and unit vectors
//! - [`Matcher`] - Brute-force cosine ranking with top-k and a similarity floor
//! - [`SparseVector`] - Sparse TF-IDF vector over vocabulary term ids
//!
//! ## Example
//!
//! ```rust
//! use solace_core::{CorpusIndex, Document, Matcher};
//!
//! let index = CorpusIndex::build(vec![
//!     Document::new("A", "career", "Career doubts", "I don't know which job to choose")
//!         .with_keywords(["career", "job"]),
//!     Document::new("B", "romance", "Breakup", "My partner and I broke up and it hurts")
//!         .with_keywords(["breakup", "romance"]),
//! ])
//! .unwrap();
//!
//! let matcher = Matcher::new(&index);
//! let matches = matcher.find_best_matches("I'm anxious about choosing a career", 2, 0.0);
//! assert_eq!(matches[0].document.id, "A");
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod index;
pub mod matcher;
pub mod summary;
pub mod vector;
pub mod vocabulary;

/// Character n-gram extraction
///
/// Text is lowercased, whitespace runs collapse to one space, and every
/// overlapping 2- and 3-code-point substring becomes a feature.
pub mod ngram;

pub use config::{MatchConfig, DEFAULT_SIMILARITY_THRESHOLD, DEFAULT_TOP_K};
pub use document::Document;
pub use error::{Error, Result};
pub use index::CorpusIndex;
pub use matcher::{Match, Matcher};
pub use summary::match_summary;
pub use vector::SparseVector;
pub use vocabulary::{smoothed_idf, Term, Vocabulary};

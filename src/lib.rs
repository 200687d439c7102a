//! # solace
//!
//! Answer retrieval for a counseling assistant.
//!
//! solace indexes a fixed corpus of pre-written answers with character
//! n-gram TF-IDF and ranks it against free-text questions. The ranked matches
//! ground the prompt of an external answer generator; when nothing clears
//! the similarity floor the generator is prompted without references.
//!
//! ## Quick Start
//!
//! ### From the command line
//!
//! ```bash
//! solace --corpus data/sample_answers.json "친구와 다퉜어요"
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use solace::prelude::*;
//!
//! let documents = parse_corpus(r#"{"answers": [
//!     {"id": "REL001", "category": "relationships", "title": "Making up after a fight",
//!      "content": "Reaching out first takes courage.", "keywords": ["friend", "fight"]}
//! ]}"#).unwrap();
//! let index = CorpusIndex::build(documents).unwrap();
//!
//! let matcher = Matcher::new(&index);
//! let matches = matcher.find_best_matches("I had a fight with my friend", 3, 0.1);
//! println!("{}", match_summary(&matches));
//! ```
//!
//! ## Crate Structure
//!
//! - `solace-core` - Documents, n-gram vocabulary, TF-IDF index and matcher
//! - `solace-corpus` - JSON corpus loading
//! - `solace-respond` - Prompt construction and generator/speech boundary

// Re-export core types
pub use solace_core::{
    match_summary, CorpusIndex, Document, Error, Match, MatchConfig, Matcher, Result,
    SparseVector, Vocabulary, DEFAULT_SIMILARITY_THRESHOLD, DEFAULT_TOP_K,
};

// Re-export corpus loading
pub use solace_corpus::{load_corpus, load_index, parse_corpus, LoadError};

// Re-export the generation boundary
pub use solace_respond::{
    fallback_prompt, grounded_prompt, strip_emoji, AnswerGenerator, BoxError, Consultation, Counselor,
    Prompt, RespondError, SpeechOptions, SpeechSynthesizer,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        load_corpus, load_index, match_summary, parse_corpus, AnswerGenerator, CorpusIndex,
        Counselor, Document, Error, LoadError, Match, MatchConfig, Matcher, Prompt, Result,
        SpeechOptions, SpeechSynthesizer,
    };
}

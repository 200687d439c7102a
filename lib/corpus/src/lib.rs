pub mod error;
pub mod loader;

pub use error::{LoadError, Result};
pub use loader::{load_corpus, load_index, parse_corpus, CorpusFile};

// JSON corpus loading
use crate::{LoadError, Result};
use serde::{Deserialize, Serialize};
use solace_core::{CorpusIndex, Document};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// On-disk shape of the answer database: `{"answers": [...]}`
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CorpusFile {
    #[serde(default)]
    pub answers: Vec<Document>,
}

/// Parse a corpus from a JSON string.
///
/// A missing `answers` key parses as an empty corpus; building an index over
/// it then fails with `EmptyCorpus`.
pub fn parse_corpus(json: &str) -> Result<Vec<Document>> {
    let file: CorpusFile = serde_json::from_str(json)?;
    Ok(file.answers)
}

/// Read and parse the corpus file at `path`.
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<Vec<Document>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let corpus: CorpusFile = serde_json::from_reader(BufReader::new(file))?;
    info!(
        path = %path.display(),
        answers = corpus.answers.len(),
        "Corpus loaded"
    );
    Ok(corpus.answers)
}

/// Load the corpus at `path` and build its index in one step.
pub fn load_index<P: AsRef<Path>>(path: P) -> Result<CorpusIndex> {
    let documents = load_corpus(path)?;
    Ok(CorpusIndex::build(documents)?)
}

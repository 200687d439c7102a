use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Cannot build an index over an empty corpus")]
    EmptyCorpus,

    #[error("Invalid document at position {position} (id {id:?}): title and content are both blank")]
    InvalidDocument { position: usize, id: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

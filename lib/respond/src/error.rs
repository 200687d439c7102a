use thiserror::Error;

/// Error type returned by generator and speech backends
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub type Result<T> = std::result::Result<T, RespondError>;

#[derive(Error, Debug)]
pub enum RespondError {
    #[error("Answer generation failed: {0}")]
    Generation(#[source] BoxError),

    #[error("Generator returned an empty answer")]
    EmptyAnswer,

    #[error("Speech synthesis failed: {0}")]
    Speech(#[source] BoxError),
}

//! # solace Respond
//!
//! The hand-off from retrieval to answer generation and speech.
//!
//! Language-model and text-to-speech backends live outside this workspace;
//! they plug in through [`AnswerGenerator`] and [`SpeechSynthesizer`].
//! [`Counselor`] wires them to a [`solace_core::Matcher`]: matches become a
//! grounded prompt, an empty match list takes the fallback prompt, and the
//! generated text is cleaned before it is returned or spoken.

pub mod clean;
pub mod counselor;
pub mod error;
pub mod prompt;

pub use clean::strip_emoji;
pub use counselor::{AnswerGenerator, Consultation, Counselor, SpeechOptions, SpeechSynthesizer};
pub use error::{BoxError, RespondError, Result};
pub use prompt::{fallback_prompt, format_references, grounded_prompt, Prompt};

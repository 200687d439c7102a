use crate::clean::strip_emoji;
use crate::prompt::{fallback_prompt, grounded_prompt, Prompt};
use crate::{BoxError, RespondError, Result};
use serde::{Deserialize, Serialize};
use solace_core::{Match, Matcher};
use tracing::{debug, info, warn};

/// Produces answer text from a prompt, typically by calling a language model.
pub trait AnswerGenerator {
    fn generate(&self, prompt: &Prompt) -> std::result::Result<String, BoxError>;
}

/// Renders answer text as audio.
pub trait SpeechSynthesizer {
    fn synthesize(&self, text: &str, options: &SpeechOptions)
        -> std::result::Result<Vec<u8>, BoxError>;
}

/// Voice settings passed to a [`SpeechSynthesizer`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechOptions {
    /// Language code of the voice
    pub language: String,
    pub slow: bool,
}

impl Default for SpeechOptions {
    fn default() -> Self {
        Self {
            language: "ko".to_string(),
            slow: false,
        }
    }
}

/// Outcome of answering one question
#[derive(Debug, Clone)]
pub struct Consultation<'a> {
    pub question: String,
    pub matches: Vec<Match<'a>>,
    /// Whether the answer was generated from reference matches
    pub grounded: bool,
    pub answer: String,
    pub audio: Option<Vec<u8>>,
}

/// Answers questions: retrieve references, generate, clean, optionally speak.
pub struct Counselor<'a> {
    matcher: Matcher<'a>,
    generator: Box<dyn AnswerGenerator + 'a>,
    speech: Option<(Box<dyn SpeechSynthesizer + 'a>, SpeechOptions)>,
}

impl<'a> Counselor<'a> {
    pub fn new(matcher: Matcher<'a>, generator: impl AnswerGenerator + 'a) -> Self {
        Self {
            matcher,
            generator: Box::new(generator),
            speech: None,
        }
    }

    #[must_use]
    pub fn with_speech(
        mut self,
        synthesizer: impl SpeechSynthesizer + 'a,
        options: SpeechOptions,
    ) -> Self {
        self.speech = Some((Box::new(synthesizer), options));
        self
    }

    #[inline]
    pub fn matcher(&self) -> &Matcher<'a> {
        &self.matcher
    }

    pub fn consult(&self, question: &str) -> Result<Consultation<'a>> {
        let matches = self.matcher.search(question);
        let grounded = !matches.is_empty();

        let prompt = if grounded {
            debug!(references = matches.len(), "Generating grounded answer");
            grounded_prompt(question, &matches)
        } else {
            warn!("No similar answers found, generating without references");
            fallback_prompt(question)
        };

        let raw = self
            .generator
            .generate(&prompt)
            .map_err(RespondError::Generation)?;
        let answer = strip_emoji(raw.trim()).trim().to_string();
        if answer.is_empty() {
            return Err(RespondError::EmptyAnswer);
        }

        let audio = match &self.speech {
            Some((synthesizer, options)) => Some(
                synthesizer
                    .synthesize(&answer, options)
                    .map_err(RespondError::Speech)?,
            ),
            None => None,
        };

        info!(
            grounded,
            answer_chars = answer.chars().count(),
            audio = audio.is_some(),
            "Question answered"
        );

        Ok(Consultation {
            question: question.to_string(),
            matches,
            grounded,
            answer,
            audio,
        })
    }
}

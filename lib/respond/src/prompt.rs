//! Prompt construction for the answer generator.
//!
//! Retrieved matches are passed to the generator as reference material; when
//! retrieval comes back empty the question is sent on its own.

use solace_core::Match;

const COUNSELOR_ROLE: &str = "You are an empathetic, experienced counselor. \
Respond to the user's worry with sincere empathy and warm, practical advice.";

const ANSWER_GUIDELINES: &str = "\n\nGuidelines:\n\
1. Empathy first: acknowledge and name the person's feelings.\n\
2. Stay hopeful: keep a constructive perspective even on hard problems.\n\
3. Be concrete: prefer actionable steps over abstract advice.\n\
4. Close with encouragement and support.\n\
\n\
Structure: empathy (2-3 sentences), understanding of the situation (2-3 sentences), \
concrete advice (4-5 sentences), encouragement (2-3 sentences).\n\
\n\
Do not give medical or legal advice; suggest a professional instead. \
In a crisis (self-harm, violence) urge contacting an emergency service immediately. \
Never judge or blame. Write plain text without emoji or decorative symbols.";

/// A system/user prompt pair handed to an [`crate::AnswerGenerator`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// Render matches as numbered reference blocks.
pub fn format_references(matches: &[Match<'_>]) -> String {
    if matches.is_empty() {
        return "No similar reference answers are available.".to_string();
    }

    let mut out = String::new();
    for (i, m) in matches.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "\n[Reference {}] {} (category: {}, similarity: {:.0}%)\n{}\n",
            i + 1,
            m.document.title,
            m.document.category,
            m.score * 100.0,
            m.document.content
        ));
    }
    out
}

/// Prompt grounded on the retrieved reference answers.
pub fn grounded_prompt(question: &str, matches: &[Match<'_>]) -> Prompt {
    let user = format!(
        "Here is the user's worry:\n\n\"{question}\"\n\n\
         Write a warm, empathetic answer to it.\n\n\
         Answers to similar worries you can draw on:\n{references}\n\n\
         Use the key points of these references, but write a new answer that fits \
         the user's specific situation, in natural language, around 300-500 characters.",
        references = format_references(matches)
    );
    Prompt {
        system: format!("{COUNSELOR_ROLE}{ANSWER_GUIDELINES}"),
        user,
    }
}

/// Prompt used when no reference answer cleared the similarity threshold.
pub fn fallback_prompt(question: &str) -> Prompt {
    Prompt {
        system: COUNSELOR_ROLE.to_string(),
        user: format!(
            "Write a warm, empathetic answer of around 300-500 characters to this worry:\n\n\"{question}\""
        ),
    }
}

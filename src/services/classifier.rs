//! Keyword heuristics that map a chat message to a [`TaskCategory`].

use crate::models::TaskCategory;

const CODING_KEYWORDS: &[&str] = &[
    "code",
    "function",
    "class",
    "debug",
    "error",
    "python",
    "javascript",
    "java",
    "c++",
    "programming",
    "algorithm",
    "api",
    "sql",
    "html",
    "css",
];

const REASONING_KEYWORDS: &[&str] = &[
    "calculate",
    "solve",
    "equation",
    "math",
    "proof",
    "logic",
    "reasoning",
    "analyze",
    "theorem",
    "formula",
];

const CREATIVE_KEYWORDS: &[&str] = &[
    "write",
    "story",
    "poem",
    "creative",
    "imagine",
    "describe",
    "narrative",
    "character",
    "plot",
];

/// Messages shorter than this many words are routed to fast models.
const SHORT_MESSAGE_WORDS: usize = 10;

/// Classify a message. Checks run in order and the first hit wins:
/// coding, math/reasoning, creative, non-ASCII text, short text.
pub fn classify(message: &str) -> TaskCategory {
    let lowered = message.to_lowercase();

    if contains_any(&lowered, CODING_KEYWORDS) {
        TaskCategory::Coding
    } else if contains_any(&lowered, REASONING_KEYWORDS) {
        TaskCategory::Reasoning
    } else if contains_any(&lowered, CREATIVE_KEYWORDS) {
        TaskCategory::Creative
    } else if !message.is_ascii() {
        TaskCategory::Multilingual
    } else if message.split_whitespace().count() < SHORT_MESSAGE_WORDS {
        TaskCategory::FastResponse
    } else {
        TaskCategory::GeneralChat
    }
}

/// Plain substring match, so "classic" hits "class".
pub(crate) fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

//! Canned replies used when remote inference is disabled or failed.

use super::classifier::contains_any;
use chrono::{DateTime, Local, TimeZone};

const GREETINGS: &[&str] = &[
    "hi",
    "hello",
    "hey",
    "greetings",
    "good morning",
    "good afternoon",
];
const IDENTITY: &[&str] = &["your name", "who are you", "what are you"];
const CAPABILITIES: &[&str] = &["what can you do", "help me", "help", "capabilities"];
const DATE_TIME: &[&str] = &["date", "time", "today", "day"];
const CODING: &[&str] = &["code", "python", "javascript", "programming", "function"];
const MATH: &[&str] = &["calculate", "math", "solve", "equation"];

const GREETING_REPLY: &str = "Hello! I'm MyGPT, your AI assistant. I'm currently running in \
    fallback mode, so my answers are limited. How can I help you today?";
const WELLBEING_REPLY: &str = "I'm doing well, thank you! I'm running in fallback mode right \
    now. For full AI capabilities, configure a working inference API.";
const IDENTITY_REPLY: &str = "I'm MyGPT, an AI assistant with multi-model support. I'm \
    currently in fallback mode, but I can help with basic questions!";
const CAPABILITIES_REPLY: &str = "I'm designed to help with:\n\
    • General conversation\n\
    • Coding questions\n\
    • Math and reasoning\n\
    • Creative writing\n\
    • Multilingual support\n\n\
    Note: full AI features require a working inference API endpoint.";
const CODING_REPLY: &str = "I can help with coding! However, I'm in fallback mode right now. \
    Specialized coding models (Qwen Coder, DeepSeek Coder) answer once remote inference is enabled.";
const MATH_REPLY: &str = "I can help with math! In fallback mode my capabilities are limited. \
    Math and reasoning models (Qwen Math, DeepSeek R1) answer once remote inference is enabled.";
const QUESTION_REPLY: &str = "That's an interesting question! I'm currently in fallback mode \
    with limited AI capabilities. Enable remote inference for answers from specialized models.";
const DEFAULT_REPLY: &str = "I understand. I'm running in fallback mode right now. For full \
    AI-powered conversations, configure a working inference API endpoint.";

/// Reply to `message` using the local clock for date and time questions.
pub fn respond(message: &str) -> String {
    respond_at(message, Local::now())
}

/// Ordered keyword rules, first match wins. Never fails.
pub fn respond_at<Tz>(message: &str, now: DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let lowered = message.to_lowercase();

    if contains_any(&lowered, GREETINGS) {
        GREETING_REPLY.to_string()
    } else if lowered.contains("how are you") {
        WELLBEING_REPLY.to_string()
    } else if contains_any(&lowered, IDENTITY) {
        IDENTITY_REPLY.to_string()
    } else if contains_any(&lowered, CAPABILITIES) {
        CAPABILITIES_REPLY.to_string()
    } else if contains_any(&lowered, DATE_TIME) {
        format!(
            "Today is {}. The current time is {}.",
            now.format("%A, %B %d, %Y"),
            now.format("%I:%M %p")
        )
    } else if contains_any(&lowered, CODING) {
        CODING_REPLY.to_string()
    } else if contains_any(&lowered, MATH) {
        MATH_REPLY.to_string()
    } else if message.contains('?') {
        QUESTION_REPLY.to_string()
    } else {
        DEFAULT_REPLY.to_string()
    }
}

//! Prompt assembly for policy generation.
//!
//! Every contender gets the same system prompt and the same user
//! requirement, so differences in the reports reflect the models, not the
//! prompting.

use crate::providers::ChatMessage;

/// System prompt sent to every model backend.
pub const POLICY_SYSTEM_PROMPT: &str =
    "You are an Azure Policy generator. Return only valid JSON, no markdown, no comments.";

/// Build the message sequence for one generation request.
pub fn generation_messages(system_prompt: &str, requirement: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(system_prompt),
        ChatMessage::user(requirement),
    ]
}

// Prompt construction for a single chat turn.

use crate::chat::{AnalysisSummary, ConversationMessage};
use crate::llm_client::prompts::truncate_chars;
use crate::llm_client::ChatMessage;

pub const CHAT_TEMPERATURE: f32 = 0.5;
const HISTORY_MESSAGES: usize = 2;
const HISTORY_MESSAGE_CHARS: usize = 150;
const USER_MESSAGE_CHARS: usize = 300;
const TOP_SKILLS: usize = 3;

/// Reply budget: numbered plans need more room than a plain answer.
pub fn max_tokens_for(message: &str) -> u32 {
    let lower = message.to_lowercase();
    if lower.contains("plan") && lower.chars().any(|c| c.is_ascii_digit()) {
        800
    } else if lower.contains("resume") || lower.contains("interview") {
        600
    } else {
        500
    }
}

pub fn build_system_prompt(summary: Option<&AnalysisSummary>, user_message: &str) -> String {
    let score = summary.map_or_else(|| "N/A".to_string(), AnalysisSummary::score_label);
    let present = summary
        .and_then(|s| s.top_present(TOP_SKILLS))
        .unwrap_or_else(|| "None".to_string());
    let missing = summary
        .and_then(|s| s.top_missing(TOP_SKILLS))
        .unwrap_or_else(|| "None".to_string());

    format!(
        r#"You are Career Compass AI. Give concise career advice.

USER INFO:
- Match Score: {score}/10
- Skills Present: {present}
- Skills Needed: {missing}

FORMATTING RULES:
Write numbered lists like this (number and text on SAME line):
1. First step here on same line
2. Second step here on same line

For most questions, use 2-3 short paragraphs. Only use numbered lists for steps or ordered actions.

Keep responses under 400 words. Be practical and direct.

Now answer: "{user_message}""#
    )
}

/// System prompt, the last two non-empty conversation messages, then the
/// user's message, each truncated.
pub fn build_messages(
    summary: Option<&AnalysisSummary>,
    conversation: &[ConversationMessage],
    user_message: &str,
) -> Vec<ChatMessage> {
    let mut messages = vec![ChatMessage::system(build_system_prompt(summary, user_message))];

    let start = conversation.len().saturating_sub(HISTORY_MESSAGES);
    messages.extend(
        conversation[start..]
            .iter()
            .filter(|m| !m.text.trim().is_empty())
            .map(|m| {
                let text = truncate_chars(&m.text, HISTORY_MESSAGE_CHARS);
                if m.sender == "user" {
                    ChatMessage::user(text)
                } else {
                    ChatMessage::assistant(text)
                }
            }),
    );

    messages.push(ChatMessage::user(truncate_chars(user_message, USER_MESSAGE_CHARS)));
    messages
}

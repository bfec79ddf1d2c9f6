//! Axum route handler for the career chat.

use std::time::Duration;

use axum::{extract::State, http::StatusCode, Json};
use tracing::{info, warn};

use crate::chat::fallback::{is_greeting, learning_plan, missing_skills_label, parse_day_plan, template_reply};
use crate::chat::formatting::fix_response_formatting;
use crate::chat::prompts::{build_messages, max_tokens_for, CHAT_TEMPERATURE};
use crate::chat::{ChatRequest, ChatResponse, ChatSource};
use crate::llm_client::{complete_within, ChatBackend, CompletionRequest};
use crate::state::AppState;

const MIN_REPLY_CHARS: usize = 10;

/// POST /ai-chat
///
/// Always answers; LLM failures become template replies with `success: false`.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> (StatusCode, Json<ChatResponse>) {
    let (status, response) = respond(state.llm.as_deref(), state.config.llm_timeout, &request).await;
    (status, Json(response))
}

pub async fn respond(
    llm: Option<&dyn ChatBackend>,
    timeout: Duration,
    request: &ChatRequest,
) -> (StatusCode, ChatResponse) {
    let message = request.user_message.trim();
    if message.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            ChatResponse::new("Please provide a message.", false, ChatSource::Validation),
        );
    }

    let summary = request.analysis_summary.as_ref();
    let lower = message.to_lowercase();

    if is_greeting(&lower) {
        return (
            StatusCode::OK,
            ChatResponse::new(template_reply(message, summary), true, ChatSource::GreetingResponse),
        );
    }

    if let Some(days) = parse_day_plan(&lower) {
        info!("Serving structured {days}-day plan");
        let plan = learning_plan(days, &missing_skills_label(summary));
        return (StatusCode::OK, ChatResponse::new(plan, true, ChatSource::StructuredPlan));
    }

    let Some(llm) = llm else {
        return (
            StatusCode::OK,
            ChatResponse::new(template_reply(message, summary), false, ChatSource::Fallback),
        );
    };

    let completion = CompletionRequest {
        messages: build_messages(summary, &request.conversation, &request.user_message),
        temperature: CHAT_TEMPERATURE,
        max_tokens: max_tokens_for(message),
        json_mode: false,
    };

    match complete_within(llm, &completion, timeout).await {
        Ok(reply) => {
            let reply = if reply.trim().chars().count() < MIN_REPLY_CHARS {
                warn!("LLM chat reply too short, using template");
                template_reply(message, summary)
            } else {
                fix_response_formatting(&reply)
            };
            (StatusCode::OK, ChatResponse::new(reply, true, ChatSource::Llm))
        }
        Err(e) => {
            warn!("LLM chat failed, using template: {e}");
            (
                StatusCode::OK,
                ChatResponse::new(template_reply(message, summary), false, ChatSource::Fallback),
            )
        }
    }
}

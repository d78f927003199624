use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;

// Two snippets to compare, built per user action
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ComparisonRequest {
    pub correct_code: String,
    pub submitted_code: String,
}

impl ComparisonRequest {
    pub fn new(correct_code: impl Into<String>, submitted_code: impl Into<String>) -> Self {
        Self {
            correct_code: correct_code.into(),
            submitted_code: submitted_code.into(),
        }
    }
}

// Chat completions request format
#[derive(Debug, Serialize, Clone)]
pub struct CompletionRequestPayload {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

// Chat completions response format; only the fields we read
#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: String,
}

// Reply body of the local front end
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct FeedbackResponse {
    pub feedback: String,
}

// Queued comparison - holds request + response channel
pub struct CompareJob {
    pub request: ComparisonRequest,
    pub response_tx: oneshot::Sender<String>, // one-time channel to send back the feedback
}

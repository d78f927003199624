use reqwest::StatusCode;
use tracing::debug;

use crate::config::CompletionSettings;
use crate::error::{CompareError, CompareResult};
use crate::models::{ChatMessage, CompletionRequestPayload};
use crate::prompt::encode_prompt;

/// One-shot client for a chat completions endpoint.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    settings: CompletionSettings,
}

impl CompletionClient {
    pub fn new(settings: CompletionSettings) -> Self {
        Self {
            http: reqwest::Client::new(),
            settings,
        }
    }

    pub fn payload(&self, prompt: &str) -> CompletionRequestPayload {
        let content = if self.settings.encode_prompt {
            encode_prompt(prompt)
        } else {
            prompt.to_string()
        };

        CompletionRequestPayload {
            model: self.settings.model.clone(),
            messages: vec![ChatMessage::user(content)],
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
        }
    }

    /// POST the prompt once and return the raw body of a 200 reply.
    /// No retry.
    pub async fn send(&self, prompt: &str) -> CompareResult<String> {
        let payload = self.payload(prompt);
        debug!(
            endpoint = %self.settings.endpoint,
            model = %payload.model,
            prompt_bytes = prompt.len(),
            "sending completion request"
        );

        let res = self
            .http
            .post(&self.settings.endpoint)
            .bearer_auth(self.settings.api_key.expose())
            .json(&payload)
            .send()
            .await?;

        let status = res.status();
        debug!(status = status.as_u16(), "completion service replied");

        if status != StatusCode::OK {
            return Err(CompareError::Status {
                status: status.as_u16(),
            });
        }

        Ok(res.text().await?)
    }
}

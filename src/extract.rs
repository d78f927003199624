use crate::error::{CompareError, CompareResult};
use crate::models::CompletionResponse;

/// Pull `choices[0].message.content` out of a completion body.
pub fn extract_feedback(body: &str) -> CompareResult<String> {
    let response: CompletionResponse =
        serde_json::from_str(body).map_err(|e| CompareError::Extraction {
            reason: e.to_string(),
        })?;

    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(|| CompareError::Extraction {
            reason: "choices list is empty".to_string(),
        })
}

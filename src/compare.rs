use std::time::Instant;
use tracing::{debug, warn};

use crate::cache::{CacheKey, ComparisonCache};
use crate::client::CompletionClient;
use crate::error::CompareResult;
use crate::extract::extract_feedback;
use crate::metrics::{CACHE_HITS, CACHE_MISSES, CACHE_SIZE, REQUEST_TOTAL, UPSTREAM_LATENCY};
use crate::models::ComparisonRequest;
use crate::prompt::build_prompt;

/// Cache lookup, prompt, completion call, extraction and store, in that order.
pub struct Comparator {
    client: CompletionClient,
    cache: ComparisonCache,
}

impl Comparator {
    pub fn new(client: CompletionClient, cache: ComparisonCache) -> Self {
        Self { client, cache }
    }

    pub fn cache(&self) -> &ComparisonCache {
        &self.cache
    }

    /// Feedback for the pair, or a description of what went wrong.
    /// Failures are never cached.
    pub async fn compare(&self, request: &ComparisonRequest) -> String {
        match self.try_compare(request).await {
            Ok(feedback) => feedback,
            Err(e) => {
                warn!(error = ?e, "comparison failed");
                e.to_string()
            }
        }
    }

    async fn try_compare(&self, request: &ComparisonRequest) -> CompareResult<String> {
        REQUEST_TOTAL.inc();
        let key = CacheKey::new(&request.correct_code, &request.submitted_code);

        // check cache first
        if let Some(feedback) = self.cache.get(&key) {
            CACHE_HITS.inc();
            debug!(key = %key, "cache hit");
            return Ok(feedback);
        }
        CACHE_MISSES.inc();
        debug!(
            key = %key,
            correct_bytes = request.correct_code.len(),
            submitted_bytes = request.submitted_code.len(),
            "cache miss - calling completion service"
        );

        let prompt = build_prompt(&request.correct_code, &request.submitted_code);

        let start_time = Instant::now();
        let body = self.client.send(&prompt).await;
        UPSTREAM_LATENCY.observe(start_time.elapsed().as_secs_f64());

        let feedback = extract_feedback(&body?)?;

        self.cache.put(key, feedback.clone());
        CACHE_SIZE.set(self.cache.len() as f64);

        Ok(feedback)
    }
}

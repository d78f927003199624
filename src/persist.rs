use std::path::Path;
use tracing::info;

use crate::error::{CompareError, CompareResult};

/// Write feedback verbatim as plain text, replacing any existing file.
pub async fn save_feedback(path: &Path, feedback: &str) -> CompareResult<()> {
    tokio::fs::write(path, feedback)
        .await
        .map_err(|source| CompareError::Persist {
            path: path.to_path_buf(),
            source,
        })?;

    info!(path = %path.display(), bytes = feedback.len(), "feedback saved");
    Ok(())
}

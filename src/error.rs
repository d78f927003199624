use std::path::PathBuf;

pub type CompareResult<T> = Result<T, CompareError>;

/// Everything that can go wrong while producing or saving feedback.
///
/// The `Display` text is what the user sees, so it stays free of secrets and
/// of the compared code.
#[derive(Debug, thiserror::Error)]
pub enum CompareError {
    /// Connection failure or interrupted wait.
    #[error("Error occurred while generating feedback: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with something other than 200.
    #[error("Error occurred while generating feedback. Status code: {status}")]
    Status { status: u16 },

    /// The body did not contain `choices[0].message.content`.
    #[error("Unable to extract content from the API response.")]
    Extraction { reason: String },

    #[error("Error occurred while saving feedback to {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The background worker has shut down.
    #[error("Comparison worker is not running")]
    WorkerUnavailable,
}

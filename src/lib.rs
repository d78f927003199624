//! Ask a chat-completion service to compare a submitted snippet against a
//! reference solution, memoizing identical comparisons for the session.

pub mod cache;
pub mod client;
pub mod compare;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod persist;
pub mod prompt;
pub mod state;
pub mod worker;

pub use cache::{CacheKey, ComparisonCache};
pub use client::CompletionClient;
pub use compare::Comparator;
pub use config::{ApiKey, CompletionSettings};
pub use error::{CompareError, CompareResult};
pub use models::ComparisonRequest;
pub use worker::CompareHandle;

use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use crate::compare::Comparator;
use crate::error::{CompareError, CompareResult};
use crate::models::{CompareJob, ComparisonRequest};

const QUEUE_DEPTH: usize = 100;

/// Runs queued comparisons one at a time until every sender is dropped.
pub async fn compare_worker(mut rx: mpsc::Receiver<CompareJob>, comparator: Arc<Comparator>) {
    info!("compare worker started - processing comparisons sequentially");

    while let Some(job) = rx.recv().await {
        let feedback = comparator.compare(&job.request).await;
        // caller may have gone away
        if job.response_tx.send(feedback).is_err() {
            debug!("comparison finished after its caller left");
        }
    }

    info!("compare worker stopped");
}

/// Cloneable entry point to the background worker.
#[derive(Clone)]
pub struct CompareHandle {
    tx: mpsc::Sender<CompareJob>,
}

impl CompareHandle {
    /// Spawn the worker on the current tokio runtime.
    pub fn spawn(comparator: Arc<Comparator>) -> Self {
        let (tx, rx) = mpsc::channel::<CompareJob>(QUEUE_DEPTH);
        tokio::spawn(compare_worker(rx, comparator));
        Self { tx }
    }

    pub async fn submit(&self, request: ComparisonRequest) -> CompareResult<String> {
        let (response_tx, response_rx) = oneshot::channel();

        self.tx
            .send(CompareJob {
                request,
                response_tx,
            })
            .await
            .map_err(|_| CompareError::WorkerUnavailable)?;

        response_rx
            .await
            .map_err(|_| CompareError::WorkerUnavailable)
    }
}

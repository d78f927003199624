use crate::cache::ComparisonCache;
use crate::worker::CompareHandle;

// front end's shared state
pub struct AppState {
    pub compare: CompareHandle,   // queue into the single worker
    pub cache: ComparisonCache,   // same map the worker fills, read for /health
}

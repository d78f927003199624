use lazy_static::lazy_static;
use prometheus::{Counter, Gauge, Histogram, register_counter, register_gauge, register_histogram};


lazy_static! {
    pub static ref REQUEST_TOTAL: Counter =
        register_counter!("code_compare_requests_total", "Total number of comparisons").unwrap();
    pub static ref CACHE_HITS: Counter =
        register_counter!("code_compare_cache_hits_total", "Total cache hits").unwrap();
    pub static ref CACHE_MISSES: Counter =
        register_counter!("code_compare_cache_misses_total", "Total cache misses").unwrap();
    pub static ref UPSTREAM_LATENCY: Histogram = register_histogram!(
        "code_compare_upstream_latency_seconds",
        "Completion service round-trip in seconds"
    )
    .unwrap();
    pub static ref CACHE_SIZE: Gauge =
        register_gauge!("code_compare_cache_size", "Current number of cached feedback entries").unwrap();
}

// Register every metric up front so /metrics lists them before first use
pub fn init() {
    lazy_static::initialize(&REQUEST_TOTAL);
    lazy_static::initialize(&CACHE_HITS);
    lazy_static::initialize(&CACHE_MISSES);
    lazy_static::initialize(&UPSTREAM_LATENCY);
    lazy_static::initialize(&CACHE_SIZE);
}

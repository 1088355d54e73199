//! # Metrics Trait Hierarchy
//!
//! Recording, snapshotting and export are kept in small, separate traits so
//! heap code never depends on how counters are read or published.
//!
//! ```text
//!   ┌──────────────────────────────┐   ┌──────────────────────────────┐
//!   │     HeapMetricsRecorder      │   │   HeapMetricsReadRecorder    │
//!   │  insert/extract/replace/...  │   │   find_min / heap_sort       │
//!   │  (&mut self, write paths)    │   │   (&self, read paths)        │
//!   └──────────────┬───────────────┘   └──────────────┬───────────────┘
//!                  └───────────────┬──────────────────┘
//!                                  ▼
//!                       ┌─────────────────────┐
//!                       │     HeapMetrics     │
//!                       └──────────┬──────────┘
//!                                  │ metrics_snapshot()
//!                                  ▼
//!   ┌──────────────────────────────┐    ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │    │ MetricsExporter<S>           │
//!   │ (bench/test)                 │    │ (Prometheus text)            │
//!   └──────────────────────────────┘    └──────────────────────────────┘
//! ```

/// Counters recorded on mutating heap operations.
pub trait HeapMetricsRecorder {
    fn record_insert_call(&mut self);
    fn record_insert_rejected(&mut self);
    fn record_extract_call(&mut self);
    fn record_replace_call(&mut self);
    fn record_empty_rejected(&mut self);
    fn record_heapify_call(&mut self);
    fn record_heapify_rejected(&mut self);
    fn record_decrease_key_call(&mut self);
    fn record_delete_key_call(&mut self);
    fn record_key_rejected(&mut self);
    fn record_sift_up_swaps(&mut self, swaps: u64);
    fn record_sift_down_swaps(&mut self, swaps: u64);
}

/// Counters recorded on read-only heap operations.
pub trait HeapMetricsReadRecorder {
    fn record_find_min_call(&self);
    fn record_find_min_empty(&self);
    fn record_heap_sort_call(&self);
}

/// Snapshot provider for bench/testing.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Reset metrics between tests or benchmark iterations.
pub trait MetricsReset {
    fn reset_metrics(&mut self);
}

/// Export/publish metrics to monitoring backends.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}

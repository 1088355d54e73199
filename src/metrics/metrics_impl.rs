use crate::metrics::cell::MetricsCell;
use crate::metrics::traits::{HeapMetricsReadRecorder, HeapMetricsRecorder, MetricsReset};

#[derive(Debug, Default)]
pub struct HeapMetrics {
    pub insert_calls: u64,
    pub insert_rejected: u64,
    pub extract_calls: u64,
    pub replace_calls: u64,
    pub empty_rejected: u64,
    pub find_min_calls: MetricsCell,
    pub find_min_empty: MetricsCell,
    pub heapify_calls: u64,
    pub heapify_rejected: u64,
    pub heap_sort_calls: MetricsCell,
    pub decrease_key_calls: u64,
    pub delete_key_calls: u64,
    pub key_rejected: u64,
    pub sift_up_swaps: u64,
    pub sift_down_swaps: u64,
}

impl HeapMetricsRecorder for HeapMetrics {
    fn record_insert_call(&mut self) {
        self.insert_calls += 1;
    }

    fn record_insert_rejected(&mut self) {
        self.insert_rejected += 1;
    }

    fn record_extract_call(&mut self) {
        self.extract_calls += 1;
    }

    fn record_replace_call(&mut self) {
        self.replace_calls += 1;
    }

    fn record_empty_rejected(&mut self) {
        self.empty_rejected += 1;
    }

    fn record_heapify_call(&mut self) {
        self.heapify_calls += 1;
    }

    fn record_heapify_rejected(&mut self) {
        self.heapify_rejected += 1;
    }

    fn record_decrease_key_call(&mut self) {
        self.decrease_key_calls += 1;
    }

    fn record_delete_key_call(&mut self) {
        self.delete_key_calls += 1;
    }

    fn record_key_rejected(&mut self) {
        self.key_rejected += 1;
    }

    fn record_sift_up_swaps(&mut self, swaps: u64) {
        self.sift_up_swaps += swaps;
    }

    fn record_sift_down_swaps(&mut self, swaps: u64) {
        self.sift_down_swaps += swaps;
    }
}

impl HeapMetricsReadRecorder for &HeapMetrics {
    fn record_find_min_call(&self) {
        self.find_min_calls.incr();
    }

    fn record_find_min_empty(&self) {
        self.find_min_empty.incr();
    }

    fn record_heap_sort_call(&self) {
        self.heap_sort_calls.incr();
    }
}

impl MetricsReset for HeapMetrics {
    fn reset_metrics(&mut self) {
        self.find_min_calls.reset();
        self.find_min_empty.reset();
        self.heap_sort_calls.reset();
        *self = HeapMetrics::default();
    }
}

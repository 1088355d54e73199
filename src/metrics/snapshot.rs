/// Point-in-time copy of a heap's counters and gauges.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HeapMetricsSnapshot {
    pub insert_calls: u64,
    pub insert_rejected: u64,

    pub extract_calls: u64,
    pub replace_calls: u64,
    pub empty_rejected: u64, // extract/find/replace on an empty heap

    pub find_min_calls: u64,
    pub find_min_empty: u64,

    pub heapify_calls: u64,
    pub heapify_rejected: u64,
    pub heap_sort_calls: u64,

    pub decrease_key_calls: u64,
    pub delete_key_calls: u64,
    pub key_rejected: u64, // bad index or non-decreasing key

    pub sift_up_swaps: u64,
    pub sift_down_swaps: u64,

    // gauges captured at snapshot time
    pub heap_len: usize,
    pub capacity: usize,
}

impl HeapMetricsSnapshot {
    /// Total swaps performed while restoring the heap property.
    pub fn total_swaps(&self) -> u64 {
        self.sift_up_swaps + self.sift_down_swaps
    }
}

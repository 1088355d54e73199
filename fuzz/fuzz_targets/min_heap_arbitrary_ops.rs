#![no_main]

use heapkit::ds::{BoundedMinHeap, is_valid_min_heap};
use heapkit::error::HeapError;
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on BoundedMinHeap
//
// Every rejected operation must leave the heap untouched, and every accepted
// one must keep the heap property and the capacity bound.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let capacity = usize::from(data[0] % 32);
    let mut heap = BoundedMinHeap::new(capacity);

    for chunk in data[1..].chunks_exact(3) {
        let op = chunk[0] % 7;
        let value = i64::from(chunk[1] as i8);
        let index = usize::from(chunk[2] % 40);
        let before = heap.snapshot();

        let result: Result<(), HeapError> = match op {
            0 => heap.insert(value),
            1 => heap.extract_min().map(|min| assert_eq!(Some(&min), before.iter().min())),
            2 => heap.find_min().map(|min| assert_eq!(min, before[0])),
            3 => heap.replace_min(value).map(|old| assert_eq!(old, before[0])),
            4 => {
                let values: Vec<i64> = chunk.iter().map(|&b| i64::from(b as i8)).collect();
                heap.heapify_from(&values[..index % 4])
            },
            5 => heap.decrease_key(index, value),
            _ => heap.delete_key(index).map(|_| ()),
        };

        if result.is_err() {
            assert_eq!(heap.snapshot(), before);
        }
        assert!(heap.len() <= capacity);
        assert!(is_valid_min_heap(&heap.snapshot()));
    }

    let sorted = heap.heap_sort();
    assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(sorted.len(), heap.len());
});

pub mod min_heap;

pub use min_heap::{BoundedMinHeap, is_valid_min_heap};

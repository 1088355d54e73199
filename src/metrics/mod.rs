//! Operation counters for [`BoundedMinHeap`](crate::ds::BoundedMinHeap).
//!
//! Compiled only with the `metrics` feature. Recording, snapshotting and
//! export are split into separate traits (see [`traits`]) so that heap code
//! only ever writes counters.

pub mod cell;
pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;

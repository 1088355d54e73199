//! heapkit: a fixed-capacity binary min-heap, a command-driven simulator for
//! it, and a seeded generator of paired input/expected-output heap fixtures.
//!
//! - [`ds`]: `BoundedMinHeap` and the `is_valid_min_heap` checker
//! - [`command`]: the line-oriented command format (`1 x` .. `12 x`)
//! - [`simulator`]: applies commands to a heap, one output line each
//! - [`fixture`]: seeded generation of input/expected-output pairs
//! - [`error`]: heap, parse, config and invariant errors
//! - [`logging`]: slog logger constructors
//! - `metrics` (feature `metrics`): operation counters and exporters

pub mod command;
pub mod ds;
pub mod error;
pub mod fixture;
pub mod logging;
pub mod simulator;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;

pub use crate::command::{Command, parse_script, render_script};
pub use crate::ds::{BoundedMinHeap, is_valid_min_heap};
pub use crate::error::{ConfigError, HeapError, InvariantError, ParseError};
pub use crate::fixture::{Fixture, FixtureConfig, FixtureGenerator, OpKind, OpWeights};
pub use crate::simulator::HeapSimulator;

#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::HeapMetricsSnapshot;

//! Error types for the heapkit library.
//!
//! ## Key Components
//!
//! - [`HeapError`]: Returned when a heap operation's precondition does not
//!   hold (empty heap, full heap, bad index, non-decreasing key).
//! - [`InvariantError`]: Returned by
//!   [`BoundedMinHeap::check_invariants`](crate::ds::BoundedMinHeap::check_invariants)
//!   when the heap property or the capacity bound is violated.
//! - [`ConfigError`]: Returned when fixture generator parameters are invalid
//!   (e.g. all-zero weights, empty value ranges).
//! - [`ParseError`]: Returned when a command line cannot be parsed.
//!
//! ## Example Usage
//!
//! ```
//! use heapkit::ds::BoundedMinHeap;
//! use heapkit::error::HeapError;
//!
//! let mut heap = BoundedMinHeap::new(1);
//! assert_eq!(heap.find_min(), Err(HeapError::EmptyHeap));
//!
//! heap.insert(7).unwrap();
//! assert_eq!(
//!     heap.insert(8),
//!     Err(HeapError::CapacityExceeded { capacity: 1, requested: 2 })
//! );
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// HeapError
// ---------------------------------------------------------------------------

/// Error returned when a heap operation is rejected.
///
/// Every variant is a precondition violation: a rejected operation leaves the
/// heap exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The operation needs at least one element and the heap has none.
    EmptyHeap,
    /// The operation would store more than `capacity` elements.
    CapacityExceeded {
        /// Fixed capacity of the heap.
        capacity: usize,
        /// Number of elements the operation would have stored.
        requested: usize,
    },
    /// `index` does not address a stored element.
    IndexOutOfBounds { index: usize, len: usize },
    /// `decrease_key` was asked to raise (or keep) a key.
    KeyNotDecreased { current: i64, requested: i64 },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyHeap => f.write_str("heap is empty"),
            HeapError::CapacityExceeded {
                capacity,
                requested,
            } => write!(
                f,
                "capacity exceeded: {} elements requested, capacity is {}",
                requested, capacity
            ),
            HeapError::IndexOutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for heap of length {}", index, len)
            },
            HeapError::KeyNotDecreased { current, requested } => write!(
                f,
                "new key {} must be less than the current key {}",
                requested, current
            ),
        }
    }
}

impl std::error::Error for HeapError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal heap invariants are violated.
///
/// Produced by [`BoundedMinHeap::check_invariants`](crate::ds::BoundedMinHeap::check_invariants).
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when fixture generator parameters are invalid.
///
/// Produced by [`FixtureConfig::validate`](crate::fixture::FixtureConfig::validate)
/// and [`FixtureGenerator::try_new`](crate::fixture::FixtureGenerator::try_new).
///
/// # Example
///
/// ```
/// use heapkit::fixture::FixtureConfig;
///
/// let mut config = FixtureConfig::new(10, 20, 7);
/// config.insert_range = (5, 1);
/// let err = config.validate().unwrap_err();
/// assert!(err.to_string().contains("insert_range"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// ParseError
// ---------------------------------------------------------------------------

/// Error returned when a command line cannot be parsed.
///
/// `line` is the 1-based line number when the error came from
/// [`parse_script`](crate::command::parse_script), `None` for a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    line: Option<usize>,
    msg: String,
}

impl ParseError {
    /// Creates a new `ParseError` with no line information.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            line: None,
            msg: msg.into(),
        }
    }

    /// Attaches a 1-based line number.
    #[inline]
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Returns the 1-based line number, if known.
    #[inline]
    pub fn line(&self) -> Option<usize> {
        self.line
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.msg
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {}: {}", line, self.msg),
            None => f.write_str(&self.msg),
        }
    }
}

impl std::error::Error for ParseError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Command-driven heap session.
//!
//! [`HeapSimulator`] owns one [`BoundedMinHeap`], applies [`Command`]s to it
//! and renders each result as exactly one output line. A command the heap
//! rejects is rendered as its failure line and leaves the heap untouched.
//!
//! ## Output Lines
//!
//! | Command         | Success                                  | Failure                         |
//! |-----------------|------------------------------------------|---------------------------------|
//! | `Insert(x)`     | `Inserted x into the heap.`              | `Capacity exceeded on insert`   |
//! | `ExtractMin`    | `Extracted Min: v`                       | `Heap is empty.`                |
//! | `FindMin`       | `Min: v`                                 | `Heap is empty.`                |
//! | `Size`          | `Size: n`                                |                                 |
//! | `IsEmpty`       | `Heap is empty.` / `Heap is not empty.`  |                                 |
//! | `DecreaseKey`   | `Decreased key at index i to x.`         | `Index out of bound.` or key msg|
//! | `DeleteKey`     | `Deleted key at index i.`                | `Index out of bound.`           |
//! | `Print`         | `Heap: a b c`                            | `Empty heap`                    |
//! | `Validate`      | `Min Heap property is preserved.`        | `... is not preserved.`         |
//! | `Heapify`       | `Heap built from array.`                 | `Capacity exceeded on heapify`  |
//! | `HeapSort`      | `Sorted: a b c` / `Sorted:`              |                                 |
//! | `ReplaceMin(x)` | `Replaced Min: old with x`               | `Heap is empty.`                |
//!
//! ## Example Usage
//!
//! ```
//! use heapkit::command::parse_script;
//! use heapkit::simulator::HeapSimulator;
//!
//! let script = parse_script("1 5\n1 3\n2\n8\n11\n").unwrap();
//! let mut sim = HeapSimulator::new(4);
//! assert_eq!(
//!     sim.run(&script),
//!     vec![
//!         "Inserted 5 into the heap.",
//!         "Inserted 3 into the heap.",
//!         "Extracted Min: 3",
//!         "Heap: 5",
//!         "Sorted: 5",
//!     ]
//! );
//! ```

use slog::{Logger, debug, info, o};

use crate::command::Command;
use crate::ds::{BoundedMinHeap, is_valid_min_heap};
use crate::error::HeapError;
use crate::logging::discard_logger;

pub const EMPTY_HEAP_LINE: &str = "Heap is empty.";
pub const NOT_EMPTY_LINE: &str = "Heap is not empty.";
pub const EMPTY_PRINT_LINE: &str = "Empty heap";
pub const PRESERVED_LINE: &str = "Min Heap property is preserved.";
pub const NOT_PRESERVED_LINE: &str = "Min Heap property is not preserved.";
pub const HEAP_BUILT_LINE: &str = "Heap built from array.";

/// Renders `values` after `label`, space separated: `"Heap: 1 2 3"`.
///
/// An empty slice renders as the bare label (`"Sorted:"`).
pub fn render_values(label: &str, values: &[i64]) -> String {
    let mut line = String::from(label);
    for value in values {
        line.push(' ');
        line.push_str(&value.to_string());
    }
    line
}

/// Renders the `Print` line for a heap's array contents.
pub fn render_heap(values: &[i64]) -> String {
    if values.is_empty() {
        EMPTY_PRINT_LINE.to_string()
    } else {
        render_values("Heap:", values)
    }
}

fn render_error(command: &Command, err: &HeapError) -> String {
    match err {
        HeapError::EmptyHeap => EMPTY_HEAP_LINE.to_string(),
        HeapError::CapacityExceeded { .. } => match command {
            Command::Heapify(_) => "Capacity exceeded on heapify".to_string(),
            _ => "Capacity exceeded on insert".to_string(),
        },
        HeapError::IndexOutOfBounds { .. } => "Index out of bound.".to_string(),
        HeapError::KeyNotDecreased { .. } => {
            "New value must be less than the current value.".to_string()
        },
    }
}

/// A heap plus the rendering rules of the command format.
#[derive(Debug)]
pub struct HeapSimulator {
    heap: BoundedMinHeap,
    log: Logger,
}

impl HeapSimulator {
    /// Creates a session over an empty heap of `capacity`, without logging.
    pub fn new(capacity: usize) -> Self {
        Self::with_logger(capacity, &discard_logger())
    }

    /// Creates a session whose records go to a child of `log`.
    pub fn with_logger(capacity: usize, log: &Logger) -> Self {
        Self {
            heap: BoundedMinHeap::new(capacity),
            log: log.new(o!("component" => "heap_simulator", "capacity" => capacity)),
        }
    }

    /// Borrows the heap.
    pub fn heap(&self) -> &BoundedMinHeap {
        &self.heap
    }

    /// Consumes the session and returns the heap.
    pub fn into_heap(self) -> BoundedMinHeap {
        self.heap
    }

    /// Applies one command and returns its output line.
    pub fn apply(&mut self, command: &Command) -> String {
        let result = self.execute(command);
        match result {
            Ok(line) => {
                debug!(self.log, "applied command";
                    "command" => %command,
                    "len" => self.heap.len(),
                );
                line
            },
            Err(err) => {
                info!(self.log, "command rejected";
                    "command" => %command,
                    "error" => %err,
                );
                render_error(command, &err)
            },
        }
    }

    /// Applies every command in order and collects the output lines.
    pub fn run<'a, I>(&mut self, commands: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a Command>,
    {
        commands
            .into_iter()
            .map(|command| self.apply(command))
            .collect()
    }

    fn execute(&mut self, command: &Command) -> Result<String, HeapError> {
        let heap = &mut self.heap;
        let line = match command {
            Command::Insert(x) => {
                heap.insert(*x)?;
                format!("Inserted {} into the heap.", x)
            },
            Command::ExtractMin => format!("Extracted Min: {}", heap.extract_min()?),
            Command::FindMin => format!("Min: {}", heap.find_min()?),
            Command::Size => format!("Size: {}", heap.len()),
            Command::IsEmpty => {
                if heap.is_empty() {
                    EMPTY_HEAP_LINE.to_string()
                } else {
                    NOT_EMPTY_LINE.to_string()
                }
            },
            Command::DecreaseKey { index, value } => {
                heap.decrease_key(*index, *value)?;
                format!("Decreased key at index {} to {}.", index, value)
            },
            Command::DeleteKey(index) => {
                heap.delete_key(*index)?;
                format!("Deleted key at index {}.", index)
            },
            Command::Print => render_heap(heap.as_slice()),
            Command::Validate => {
                if is_valid_min_heap(heap.as_slice()) {
                    PRESERVED_LINE.to_string()
                } else {
                    NOT_PRESERVED_LINE.to_string()
                }
            },
            Command::Heapify(values) => {
                heap.heapify_from(values)?;
                HEAP_BUILT_LINE.to_string()
            },
            Command::HeapSort => render_values("Sorted:", &heap.heap_sort()),
            Command::ReplaceMin(x) => {
                let old = heap.replace_min(*x)?;
                format!("Replaced Min: {} with {}", old, x)
            },
        };
        Ok(line)
    }
}

//! Logger construction helpers.
//!
//! Library types take a parent [`Logger`] and derive a component logger from
//! it. Callers that do not care about logs pass [`discard_logger`].

use slog::{Drain, Level, LevelFilter, Logger, o};
use slog_term::{FullFormat, TermDecorator};

/// Returns a logger that drops every record.
pub fn discard_logger() -> Logger {
    Logger::root(slog::Discard, o!())
}

/// Creates an asynchronous terminal logger that keeps records at `level`
/// and above.
pub fn terminal_logger(level: Level) -> Logger {
    let decorator = TermDecorator::new().stderr().build();
    let drain = FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    let drain = LevelFilter::new(drain, level).fuse();
    Logger::root(drain, o!("unit" => "heapkit"))
}

//! Textual heap commands.
//!
//! One command per line, tokens separated by whitespace. The leading token
//! is the opcode:
//!
//! | Line          | Command                        |
//! |---------------|--------------------------------|
//! | `1 x`         | [`Command::Insert`]            |
//! | `2`           | [`Command::ExtractMin`]        |
//! | `3`           | [`Command::FindMin`]           |
//! | `4`           | [`Command::Size`]              |
//! | `5`           | [`Command::IsEmpty`]           |
//! | `6 i x`       | [`Command::DecreaseKey`]       |
//! | `7 i`         | [`Command::DeleteKey`]         |
//! | `8`           | [`Command::Print`]             |
//! | `9`           | [`Command::Validate`]          |
//! | `10 k a1..ak` | [`Command::Heapify`]           |
//! | `11`          | [`Command::HeapSort`]          |
//! | `12 x`        | [`Command::ReplaceMin`]        |
//!
//! [`Command`] implements [`FromStr`] and [`Display`](fmt::Display); the
//! display form is the canonical line, single-space separated.
//!
//! ```
//! use heapkit::command::{Command, parse_script};
//!
//! let cmd: Command = "10 3  9 4 7".parse().unwrap();
//! assert_eq!(cmd, Command::Heapify(vec![9, 4, 7]));
//! assert_eq!(cmd.to_string(), "10 3 9 4 7");
//!
//! let script = parse_script("1 5\n\n2\n8\n").unwrap();
//! assert_eq!(script, vec![Command::Insert(5), Command::ExtractMin, Command::Print]);
//! ```

use std::fmt;
use std::str::{FromStr, SplitAsciiWhitespace};

use crate::error::ParseError;

/// A single heap command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Insert(i64),
    ExtractMin,
    FindMin,
    Size,
    IsEmpty,
    DecreaseKey { index: usize, value: i64 },
    DeleteKey(usize),
    Print,
    Validate,
    Heapify(Vec<i64>),
    HeapSort,
    ReplaceMin(i64),
}

impl Command {
    /// Returns the numeric opcode that starts this command's line.
    pub fn opcode(&self) -> u8 {
        match self {
            Command::Insert(_) => 1,
            Command::ExtractMin => 2,
            Command::FindMin => 3,
            Command::Size => 4,
            Command::IsEmpty => 5,
            Command::DecreaseKey { .. } => 6,
            Command::DeleteKey(_) => 7,
            Command::Print => 8,
            Command::Validate => 9,
            Command::Heapify(_) => 10,
            Command::HeapSort => 11,
            Command::ReplaceMin(_) => 12,
        }
    }

    /// Returns `true` for commands that can change the heap.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::Insert(_)
                | Command::ExtractMin
                | Command::DecreaseKey { .. }
                | Command::DeleteKey(_)
                | Command::Heapify(_)
                | Command::ReplaceMin(_)
        )
    }
}

struct Operands<'a> {
    tokens: SplitAsciiWhitespace<'a>,
    opcode: u8,
}

impl Operands<'_> {
    fn next<T: FromStr>(&mut self, what: &str) -> Result<T, ParseError> {
        let token = self.tokens.next().ok_or_else(|| {
            ParseError::new(format!("opcode {}: missing {}", self.opcode, what))
        })?;
        token.parse().map_err(|_| {
            ParseError::new(format!(
                "opcode {}: invalid {} '{}'",
                self.opcode, what, token
            ))
        })
    }

    fn finish(mut self) -> Result<(), ParseError> {
        match self.tokens.next() {
            Some(extra) => Err(ParseError::new(format!(
                "opcode {}: unexpected trailing token '{}'",
                self.opcode, extra
            ))),
            None => Ok(()),
        }
    }
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_ascii_whitespace();
        let head = tokens
            .next()
            .ok_or_else(|| ParseError::new("empty command line"))?;
        let opcode: u8 = head
            .parse()
            .map_err(|_| ParseError::new(format!("invalid opcode '{}'", head)))?;
        let mut ops = Operands { tokens, opcode };

        let command = match opcode {
            1 => Command::Insert(ops.next("value")?),
            2 => Command::ExtractMin,
            3 => Command::FindMin,
            4 => Command::Size,
            5 => Command::IsEmpty,
            6 => Command::DecreaseKey {
                index: ops.next("index")?,
                value: ops.next("value")?,
            },
            7 => Command::DeleteKey(ops.next("index")?),
            8 => Command::Print,
            9 => Command::Validate,
            10 => {
                let count: usize = ops.next("element count")?;
                let mut values = Vec::with_capacity(count.min(1024));
                for _ in 0..count {
                    values.push(ops.next("value")?);
                }
                Command::Heapify(values)
            },
            11 => Command::HeapSort,
            12 => Command::ReplaceMin(ops.next("value")?),
            other => return Err(ParseError::new(format!("unknown opcode {}", other))),
        };
        ops.finish()?;
        Ok(command)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.opcode())?;
        match self {
            Command::Insert(x) | Command::ReplaceMin(x) => write!(f, " {}", x),
            Command::DecreaseKey { index, value } => write!(f, " {} {}", index, value),
            Command::DeleteKey(index) => write!(f, " {}", index),
            Command::Heapify(values) => {
                write!(f, " {}", values.len())?;
                for value in values {
                    write!(f, " {}", value)?;
                }
                Ok(())
            },
            Command::ExtractMin
            | Command::FindMin
            | Command::Size
            | Command::IsEmpty
            | Command::Print
            | Command::Validate
            | Command::HeapSort => Ok(()),
        }
    }
}

/// Parses a multi-line script, skipping blank lines.
///
/// # Errors
///
/// Returns the first [`ParseError`], tagged with its 1-based line number.
pub fn parse_script(text: &str) -> Result<Vec<Command>, ParseError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| line.parse::<Command>().map_err(|err| err.at_line(idx + 1)))
        .collect()
}

/// Renders commands back to newline-terminated text.
pub fn render_script(commands: &[Command]) -> String {
    let mut out = String::new();
    for command in commands {
        out.push_str(&command.to_string());
        out.push('\n');
    }
    out
}

//! # taskdown
//!
//! A streaming parser that extracts runnable task definitions from
//! markdown documents. Tasks live under a designated section heading;
//! each task heading one level below it opens a task that may carry
//! dependency/environment/directory/input attribute lines, free-form
//! description text, and one fenced command block.
//!
//! The parser makes a single forward pass with one line of lookahead and
//! is strict: the first malformed task aborts the whole parse, so
//! downstream consumers (a task execution engine, typically) either get a
//! fully validated task list or nothing.
//!
//! ## Quick Start
//!
//! ```
//! use taskdown::parse_str;
//!
//! let doc = "# Tasks\n\n## release\n\nreq: build, test\n";
//! let tasks = parse_str(doc, "Tasks")?;
//!
//! assert_eq!(tasks[0].name, "release");
//! assert_eq!(tasks[0].depends_on, ["build", "test"]);
//! # Ok::<(), taskdown::ParseError>(())
//! ```

use std::io::BufRead;

/// Streaming parser core: line cursor, heading recognition, attribute
/// classification, and the task assembly state machine.
pub mod parser;

/// Task data model: the parsed task record and lookup helpers consumed by
/// execution engines.
pub mod task;

// Re-export the public surface
pub use parser::{ParseError, TaskParser};
pub use task::{Task, Tasks, find_task};

/// Parse every task under `section` from a line-oriented reader.
///
/// Returns the tasks in document order, or the first fatal error. The
/// section name is matched case-insensitively against heading text.
pub fn parse<R: BufRead>(reader: R, section: &str) -> Result<Tasks, ParseError> {
    TaskParser::new(reader, section).parse()
}

/// Parse every task under `section` from an in-memory document.
pub fn parse_str(input: &str, section: &str) -> Result<Tasks, ParseError> {
    parse(input.as_bytes(), section)
}

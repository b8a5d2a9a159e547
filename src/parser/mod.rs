//! Streaming markdown task parser.
//!
//! The parser walks a line-oriented document exactly once, with a single
//! line of lookahead, and collects every task declared under a named
//! section heading:
//!
//! - [`cursor`]: forward-only line access with one line of lookahead
//! - [`heading`]: recognition of marker (`## name`) and underline
//!   (`name` + `----`) heading forms
//! - [`attribute`]: classification of `name: value[,value...]` lines
//! - [`driver`]: the state machine assembling tasks from the above
//!
//! Parsing is all-or-nothing: the first malformed task aborts the whole
//! parse and no partial task list is ever returned.

pub mod attribute;
pub mod cursor;
pub mod driver;
pub mod heading;


pub use attribute::AttributeKind;
pub use driver::TaskParser;

use thiserror::Error;

/// Decoration characters stripped from heading text, attribute names and
/// values, and description lines. A single shared rule so every call site
/// trims identically.
pub(crate) const DECORATIONS: &[char] = &['_', '*', '`', ' '];

/// Strip leading and trailing decoration characters from a line fragment.
pub(crate) fn trim_decorations(s: &str) -> &str {
    s.trim_matches(DECORATIONS)
}

/// Fatal parse errors. Each aborts the entire parse; no partial task list
/// is returned alongside any of these.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The target section heading never appeared in the document.
    #[error("no section named '{section}' found")]
    NoSectionFound { section: String },

    /// A `dir:`/`directory:` attribute was assigned twice for one task,
    /// even with an identical value.
    #[error("directory appears more than once for task '{task}'")]
    DuplicateDirectory { task: String },

    /// A second fenced command block was opened within one task.
    #[error("command block already exists for task '{task}'")]
    DuplicateCodeBlock { task: String },

    /// A fenced command block was still open when the input ended.
    #[error("command block in task '{task}' was not closed")]
    UnterminatedCodeBlock { task: String },

    /// A finalized task had neither a command block nor any required tasks.
    #[error("task '{task}' has no commands or required tasks")]
    EmptyTask { task: String },

    /// A task heading's text was empty once decorations were stripped.
    #[error("task heading has an empty name")]
    UnnamedTask,

    /// The underlying input source reported a read error.
    #[error("failed to read task document: {source}")]
    Stream {
        #[from]
        source: std::io::Error,
    },
}

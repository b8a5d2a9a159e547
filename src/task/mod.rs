//! Task data model shared between the parser and downstream consumers.

pub mod types;


pub use types::*;

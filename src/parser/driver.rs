//! Task assembly driver: the state machine that turns a document stream
//! into an ordered task list.
//!
//! The driver owns the single [`LineCursor`] and walks four explicit
//! states:
//!
//! ```text
//! SeekingSection -> InTaskSearch -> InTaskBody -> (Done | error)
//!                        ^................|
//! ```
//!
//! The body loop dispatches each line in a fixed order: attribute line,
//! fenced command block, heading boundary, description text. Whatever ends
//! a task body triggers finalization, where the task invariant (a name
//! plus a command block or at least one dependency) is enforced.

use std::io::BufRead;

use tracing::{debug, warn};

use super::attribute::{self, AttributeKind};
use super::cursor::LineCursor;
use super::heading::{self, Heading};
use super::{ParseError, trim_decorations};
use crate::task::{Task, Tasks};

/// Opening and closing delimiter of a fenced command block.
const FENCE: &str = "```";

/// Parser states, in the order a successful parse moves through them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// Consuming lines until the target section heading is found.
    SeekingSection,
    /// Between tasks, looking for the next task heading or the section end.
    InTaskSearch,
    /// Inside a task body, assembling the current task line by line.
    InTaskBody,
    /// Parse finished; the accumulated tasks are the result.
    Done,
}

/// What ended a task body.
enum BodyEnd {
    /// A heading at the root level or above; the section is over.
    Section,
    /// A heading one level below the root; another task follows.
    NextTask,
    /// The input ran out.
    Input,
}

/// Single-pass parser for one document. Construct one per parse;
/// [`TaskParser::parse`] consumes it.
pub struct TaskParser<R> {
    cursor: LineCursor<R>,
    section: String,
    root_level: usize,
    task: Task,
    tasks: Tasks,
}

impl<R: BufRead> TaskParser<R> {
    /// Create a parser over `reader` targeting the section whose heading
    /// text matches `section` case-insensitively.
    pub fn new(reader: R, section: impl Into<String>) -> Self {
        Self {
            cursor: LineCursor::new(reader),
            section: section.into(),
            root_level: 0,
            task: Task::default(),
            tasks: Tasks::new(),
        }
    }

    /// Run the parse to completion. Returns every task in document order,
    /// or the first fatal error; never a partial list.
    pub fn parse(mut self) -> Result<Tasks, ParseError> {
        let mut state = State::SeekingSection;
        loop {
            state = match state {
                State::SeekingSection => self.seek_section()?,
                State::InTaskSearch => self.search_task()?,
                State::InTaskBody => self.parse_body()?,
                State::Done => {
                    if self.tasks.is_empty() {
                        warn!("section '{}' contains no tasks", self.section);
                    }
                    return Ok(self.tasks);
                }
            };
        }
    }

    /// Consume lines until a heading of either form matches the target
    /// section name; its level anchors all task headings beneath it.
    fn seek_section(&mut self) -> Result<State, ParseError> {
        let wanted = self.section.trim().to_lowercase();
        while self.cursor.advance()? {
            let Some(heading) = self.peek_heading() else {
                continue;
            };
            if heading.text.trim().to_lowercase() != wanted {
                continue;
            }
            debug!(
                "located section '{}' at level {}",
                heading.text, heading.level
            );
            self.root_level = heading.level;
            self.consume_heading(&heading)?;
            return Ok(State::InTaskSearch);
        }
        Err(ParseError::NoSectionFound {
            section: self.section.clone(),
        })
    }

    /// Scan for the next task heading. Headings at or above the root level
    /// end the section; anything else is skipped one line at a time. Clean
    /// end of input also ends the section.
    fn search_task(&mut self) -> Result<State, ParseError> {
        loop {
            if self.cursor.is_finished() {
                return Ok(State::Done);
            }
            if let Some(heading) = self.peek_heading() {
                if heading.level <= self.root_level {
                    debug!("section '{}' ended by '{}'", self.section, heading.text);
                    return Ok(State::Done);
                }
                if heading.level == self.root_level + 1 {
                    let name = trim_decorations(&heading.text).to_string();
                    debug!("opening task '{}'", name);
                    self.consume_heading(&heading)?;
                    self.task = Task::named(name);
                    return Ok(State::InTaskBody);
                }
            }
            if !self.cursor.advance()? {
                return Ok(State::Done);
            }
        }
    }

    /// Assemble the current task's body, then finalize it.
    fn parse_body(&mut self) -> Result<State, ParseError> {
        let end = loop {
            if self.cursor.is_finished() {
                break BodyEnd::Input;
            }
            if self.try_attribute()? {
                continue;
            }
            if self.try_code_block()? {
                continue;
            }
            if let Some(heading) = self.peek_heading() {
                if heading.level <= self.root_level {
                    break BodyEnd::Section;
                }
                if heading.level == self.root_level + 1 {
                    // Left as the current line; the task search re-reads it
                    // without another scan.
                    break BodyEnd::NextTask;
                }
                // Deeper headings are plain description text.
            }
            if !self.cursor.current().trim().is_empty() {
                let line = trim_decorations(self.cursor.current()).to_string();
                self.task.description.push(line);
            }
            if !self.cursor.advance()? {
                break BodyEnd::Input;
            }
        };
        self.finalize_task()?;
        match end {
            BodyEnd::NextTask => Ok(State::InTaskSearch),
            BodyEnd::Section | BodyEnd::Input => Ok(State::Done),
        }
    }

    /// Apply the current line as an attribute, if it is one. Consumes the
    /// line on a match.
    fn try_attribute(&mut self) -> Result<bool, ParseError> {
        let Some((kind, rest)) = attribute::classify(self.cursor.current()) else {
            return Ok(false);
        };
        match kind {
            AttributeKind::DependsOn => {
                self.task.depends_on.extend(attribute::split_values(rest));
            }
            AttributeKind::Env => {
                self.task.env.extend(attribute::split_values(rest));
            }
            AttributeKind::Inputs => {
                self.task.inputs.extend(attribute::split_values(rest));
            }
            AttributeKind::Dir => {
                if self.task.dir.is_some() {
                    return Err(ParseError::DuplicateDirectory {
                        task: self.task.name.clone(),
                    });
                }
                self.task.dir = Some(trim_decorations(rest).to_string());
            }
        }
        self.cursor.advance()?;
        Ok(true)
    }

    /// Capture a fenced command block starting at the current line, if
    /// any. Blank lines inside the fence are dropped; every other line is
    /// kept verbatim with a trailing newline.
    fn try_code_block(&mut self) -> Result<bool, ParseError> {
        if !self.cursor.current().starts_with(FENCE) {
            return Ok(false);
        }
        if self.task.has_commands() {
            return Err(ParseError::DuplicateCodeBlock {
                task: self.task.name.clone(),
            });
        }
        let mut terminated = false;
        while self.cursor.advance()? {
            if self.cursor.current().starts_with(FENCE) {
                terminated = true;
                break;
            }
            if !self.cursor.current().trim().is_empty() {
                self.task.script.push_str(self.cursor.current());
                self.task.script.push('\n');
            }
        }
        if !terminated {
            return Err(ParseError::UnterminatedCodeBlock {
                task: self.task.name.clone(),
            });
        }
        // Move past the closing fence. Exhaustion here ends the body at
        // the top of the next loop iteration.
        self.cursor.advance()?;
        Ok(true)
    }

    /// Validate the assembled task and append it to the result list.
    fn finalize_task(&mut self) -> Result<(), ParseError> {
        let task = std::mem::take(&mut self.task);
        if task.name.is_empty() {
            return Err(ParseError::UnnamedTask);
        }
        if !task.is_runnable() {
            return Err(ParseError::EmptyTask { task: task.name });
        }
        debug!(
            "finalized task '{}' ({} dependencies, {} script bytes)",
            task.name,
            task.depends_on.len(),
            task.script.len()
        );
        self.tasks.push(task);
        Ok(())
    }

    fn peek_heading(&self) -> Option<Heading> {
        heading::recognize(self.cursor.current(), self.cursor.peek_next())
    }

    fn consume_heading(&mut self, heading: &Heading) -> Result<(), ParseError> {
        for _ in 0..heading.form.line_count() {
            self.cursor.advance()?;
        }
        Ok(())
    }
}

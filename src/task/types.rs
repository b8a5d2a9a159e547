use serde::{Deserialize, Serialize};

/// A single runnable task parsed from a markdown document.
///
/// A task is declared as a heading one level below the document's task
/// section heading. Its body may carry attribute lines, free-form
/// description text, and at most one fenced command block.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Task {
    /// Heading text of the task, stripped of markdown decorations.
    pub name: String,
    /// Free-form body lines in document order; may be empty.
    pub description: Vec<String>,
    /// Concatenated non-blank lines of the task's fenced command block,
    /// each terminated with a newline. Empty when the task has no block.
    pub script: String,
    /// Environment variable assignments, accumulated across
    /// `env:`/`environment:` lines.
    pub env: Vec<String>,
    /// Working directory for the task's commands. Set at most once.
    pub dir: Option<String>,
    /// Names of tasks that must run before this one, accumulated across
    /// `req:`/`requires:` lines.
    pub depends_on: Vec<String>,
    /// Required inputs, accumulated across `inputs:` lines. Inputs can be
    /// satisfied by command-line arguments or environment variables.
    pub inputs: Vec<String>,
}

/// Ordered list of tasks in document order. Duplicate names are permitted.
pub type Tasks = Vec<Task>;

impl Task {
    /// Create an empty task with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Check if the task carries a command block.
    pub fn has_commands(&self) -> bool {
        !self.script.is_empty()
    }

    /// Check if the task requires other tasks to run first.
    pub fn has_dependencies(&self) -> bool {
        !self.depends_on.is_empty()
    }

    /// A task is runnable when it carries either a command block or at
    /// least one required task. Anything else is rejected at parse time.
    pub fn is_runnable(&self) -> bool {
        self.has_commands() || self.has_dependencies()
    }
}

/// Look up a task by name, case-insensitively. Returns the first match in
/// document order.
pub fn find_task<'a>(tasks: &'a [Task], name: &str) -> Option<&'a Task> {
    let needle = name.to_lowercase();
    tasks.iter().find(|t| t.name.to_lowercase() == needle)
}

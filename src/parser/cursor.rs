//! Forward-only line access with a single line of lookahead.

use std::io::BufRead;

use super::ParseError;

/// Two-slot line buffer over a [`BufRead`] stream.
///
/// `advance` shifts the lookahead line into `current` and reads one more
/// line from the stream. Exhaustion is signalled one step late: the call
/// that hits end of input still reports more to process, so the final real
/// line is delivered as `current` exactly once before `advance` starts
/// returning false. This is the only type that touches the raw input.
pub struct LineCursor<R> {
    reader: R,
    current: String,
    next: String,
    reached_end: bool,
    finished: bool,
}

impl<R: BufRead> LineCursor<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            current: String::new(),
            next: String::new(),
            reached_end: false,
            finished: false,
        }
    }

    /// Move one line forward. Returns false once every line, including the
    /// final one, has been consumed. A read failure from the underlying
    /// stream is returned immediately; nothing is retried.
    pub fn advance(&mut self) -> Result<bool, ParseError> {
        if self.reached_end {
            self.finished = true;
            return Ok(false);
        }
        self.current = std::mem::take(&mut self.next);
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            // The lookahead slot stays empty from here on, so the last
            // real line can never pair with a stale underline.
            self.reached_end = true;
            return Ok(true);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        self.next = line;
        Ok(true)
    }

    /// The line under the cursor.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// The one-line lookahead; empty at end of input.
    pub fn peek_next(&self) -> &str {
        &self.next
    }

    /// True once `advance` has reported the end of input.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

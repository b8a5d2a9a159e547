//! Recognition of the two mutually-exclusive heading syntaxes.
//!
//! Recognition is pure classification over the cursor's `current` and
//! lookahead lines; it never consumes input itself. The driver decides
//! whether to commit by advancing the cursor over [`HeadingForm::line_count`]
//! lines.

/// A recognized heading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Heading {
    /// Nesting level: number of marker characters, or 1/2 for `=`/`-`
    /// underlines.
    pub level: usize,
    /// Heading text with surrounding whitespace removed. Markdown
    /// decorations are left in place; callers strip them where needed.
    pub text: String,
    pub form: HeadingForm,
}

/// Which of the two surface syntaxes produced a heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeadingForm {
    /// `text` followed by a line of all `=` (level 1) or all `-` (level 2).
    Underline,
    /// `## text`: repeated `#` marker, whitespace, heading text.
    Marker,
}

impl HeadingForm {
    /// Number of input lines the heading occupies.
    pub fn line_count(self) -> usize {
        match self {
            HeadingForm::Underline => 2,
            HeadingForm::Marker => 1,
        }
    }
}

/// Classify the current line (plus lookahead) as a heading. The underline
/// form is checked first; an empty lookahead line never matches it.
pub fn recognize(current: &str, next: &str) -> Option<Heading> {
    recognize_underline(current, next).or_else(|| recognize_marker(current))
}

fn recognize_underline(current: &str, next: &str) -> Option<Heading> {
    let text = current.trim();
    if text.is_empty() {
        return None;
    }
    let underline = next.trim();
    let level = if only_repeats(underline, '=') {
        1
    } else if only_repeats(underline, '-') {
        2
    } else {
        return None;
    };
    Some(Heading {
        level,
        text: text.to_string(),
        form: HeadingForm::Underline,
    })
}

fn recognize_marker(current: &str) -> Option<Heading> {
    let mut tokens = current.trim().split_whitespace();
    let marker = tokens.next()?;
    if !only_repeats(marker, '#') {
        return None;
    }
    let text = tokens.collect::<Vec<_>>().join(" ");
    if text.is_empty() {
        return None;
    }
    Some(Heading {
        level: marker.len(),
        text,
        form: HeadingForm::Marker,
    })
}

fn only_repeats(s: &str, marker: char) -> bool {
    !s.is_empty() && s.chars().all(|c| c == marker)
}

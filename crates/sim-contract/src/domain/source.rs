//! # Source Line Classification
//!
//! A contract program is an ordered sequence of text lines, fixed at
//! construction. Lines are classified once per scan instead of ad hoc
//! string checks spread across callers.

use serde::{Deserialize, Serialize};

/// What a single source line is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
    /// Whitespace only.
    Blank,
    /// A single `name:` jump target and nothing else.
    Label,
    /// Directive/comment line, first non-whitespace char is `^`.
    Comment,
    /// Anything else; the instruction pointer may land here.
    Executable,
}

/// Classifies one source line.
#[must_use]
pub fn classify(line: &str) -> LineKind {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if trimmed.starts_with('^') {
        return LineKind::Comment;
    }
    if let Some(name) = trimmed.strip_suffix(':') {
        if !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
            return LineKind::Label;
        }
    }
    LineKind::Executable
}

/// An immutable contract program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsmSource {
    lines: Vec<String>,
}

impl AsmSource {
    /// Splits program text into its line sequence.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_owned).collect(),
        }
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True for an empty program.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns a line by index.
    #[must_use]
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Index of the first executable line at or after `from`.
    ///
    /// Returns `len()` when no executable line remains; the caller must
    /// treat that as end-of-program, which faults the contract on its next
    /// execution attempt.
    #[must_use]
    pub fn next_instruction_line(&self, from: usize) -> usize {
        (from..self.lines.len())
            .find(|&idx| classify(&self.lines[idx]) == LineKind::Executable)
            .unwrap_or(self.lines.len())
    }
}

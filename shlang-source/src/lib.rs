//! Source code representation and position lookup.

use std::fmt;

/// Represents source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Source<'a> {
    /// Name used when reporting diagnostics (usually a file path).
    pub name: &'a str,
    /// Original source code.
    pub content: &'a str,
}

impl<'a> Source<'a> {
    /// Create a new anonymous `Source` with the specified `content`.
    pub fn new(content: &'a str) -> Self {
        Self::named("<input>", content)
    }

    /// Create a new `Source` called `name` with the specified `content`.
    pub fn named(name: &'a str, content: &'a str) -> Self {
        Self { name, content }
    }

    /// Returns the line and column of the byte `offset`.
    /// Offsets past the end of the content are clamped to the end.
    pub fn location(&self, offset: usize) -> Location {
        let mut offset = offset.min(self.content.len());
        while !self.content.is_char_boundary(offset) {
            offset -= 1;
        }

        let before = &self.content[..offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        Location { line, column }
    }

    /// Returns the 1-based `line` without its line terminator.
    pub fn line(&self, line: usize) -> Option<&'a str> {
        let line = line.checked_sub(1)?;
        self.content
            .split('\n')
            .nth(line)
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
    }
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(content: &'a str) -> Self {
        Source::new(content)
    }
}

/// A 1-based line and column inside a [`Source`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Location {
    pub line: usize,
    /// Counted in characters, not bytes.
    pub column: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

//! Strategy selection as a closed set of variants.

use crate::{
    IndentError, IndentStr, IndentationPolicy, InvisibleIndentation, LineBreak,
    RepeatingIndentation, Sink, Whitespace,
};

/// An indentation policy chosen at construction time.
///
/// Dispatches to the wrapped strategy without boxing, so a renderer can hold
/// an `Indentation` by value and still switch between visible and invisible
/// output from configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Indentation {
    /// Repeat a unit once per level.
    Repeating(RepeatingIndentation),
    /// Render nothing.
    Invisible(InvisibleIndentation),
}

impl Indentation {
    /// `count` copies of `whitespace` per level.
    pub fn whitespace(whitespace: Whitespace, count: usize, line_break: LineBreak) -> Self {
        Indentation::Repeating(RepeatingIndentation::whitespace(
            whitespace, count, line_break,
        ))
    }

    /// No indentation and no line breaks.
    pub fn none() -> Self {
        Indentation::Invisible(InvisibleIndentation::new())
    }

    #[inline]
    fn policy(&self) -> &dyn IndentationPolicy {
        match self {
            Indentation::Repeating(indent) => indent,
            Indentation::Invisible(indent) => indent,
        }
    }
}

impl Default for Indentation {
    /// One tab per level, host line break.
    fn default() -> Self {
        Indentation::whitespace(Whitespace::Tab, 1, LineBreak::System)
    }
}

impl From<RepeatingIndentation> for Indentation {
    fn from(indent: RepeatingIndentation) -> Self {
        Indentation::Repeating(indent)
    }
}

impl From<InvisibleIndentation> for Indentation {
    fn from(indent: InvisibleIndentation) -> Self {
        Indentation::Invisible(indent)
    }
}

impl IndentationPolicy for Indentation {
    #[inline]
    fn is_visible(&self) -> bool {
        self.policy().is_visible()
    }

    #[inline]
    fn line_break_str(&self) -> &str {
        self.policy().line_break_str()
    }

    fn prefix(&self, level: isize) -> Result<IndentStr, IndentError> {
        self.policy().prefix(level)
    }

    fn write_prefix(&self, sink: &mut dyn Sink, level: isize) -> Result<(), IndentError> {
        self.policy().write_prefix(sink, level)
    }

    fn line_break(&self, level: isize) -> Result<IndentStr, IndentError> {
        self.policy().line_break(level)
    }

    fn write_line_break(&self, sink: &mut dyn Sink, level: isize) -> Result<(), IndentError> {
        self.policy().write_line_break(sink, level)
    }
}

//! Indentation that renders nothing.

use std::borrow::Cow;

use crate::error::check_level;
use crate::{IndentError, IndentStr, IndentationPolicy, LineBreak, Sink};

/// A policy with a permanently empty unit.
///
/// Lets callers choose "no indentation" through the same interface instead
/// of branching on an absent policy. Line breaks are suppressed too; the
/// configured one is only reported by [`line_break_str`].
///
/// [`line_break_str`]: IndentationPolicy::line_break_str
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvisibleIndentation {
    line_break: Cow<'static, str>,
}

impl InvisibleIndentation {
    /// Invisible policy recording the host line break.
    pub fn new() -> Self {
        Self::with_line_break(LineBreak::System)
    }

    /// Invisible policy recording a named line break.
    pub fn with_line_break(line_break: LineBreak) -> Self {
        Self {
            line_break: Cow::Borrowed(line_break.as_str()),
        }
    }

    /// Invisible policy recording an arbitrary line-break string.
    pub fn with_line_break_str(line_break: impl Into<String>) -> Self {
        Self {
            line_break: Cow::Owned(line_break.into()),
        }
    }
}

impl Default for InvisibleIndentation {
    fn default() -> Self {
        Self::new()
    }
}

impl IndentationPolicy for InvisibleIndentation {
    #[inline]
    fn is_visible(&self) -> bool {
        false
    }

    fn line_break_str(&self) -> &str {
        &self.line_break
    }

    fn prefix(&self, level: isize) -> Result<IndentStr, IndentError> {
        check_level(level)?;
        Ok(IndentStr::empty())
    }

    fn write_prefix(&self, _sink: &mut dyn Sink, level: isize) -> Result<(), IndentError> {
        check_level(level)?;
        Ok(())
    }

    fn line_break(&self, level: isize) -> Result<IndentStr, IndentError> {
        self.prefix(level)
    }

    fn write_line_break(&self, sink: &mut dyn Sink, level: isize) -> Result<(), IndentError> {
        self.write_prefix(sink, level)
    }
}

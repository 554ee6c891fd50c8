//! The indentation contract shared by every strategy.

use std::sync::Arc;

use crate::error::check_level;
use crate::{IndentError, IndentStr, Sink};

/// How a renderer obtains indentation and line breaks for a nesting level.
///
/// A policy is immutable once built and is meant to be shared across every
/// call (and every thread) of one rendering job. Levels are signed so that a
/// caller bug producing a negative depth surfaces as
/// [`IndentError::NegativeLevel`] instead of being clamped.
///
/// The string-returning and sink-writing forms have identical semantics:
/// `write_prefix(sink, l)` appends exactly `prefix(l)`, and
/// `write_line_break(sink, l)` appends exactly `line_break(l)`.
pub trait IndentationPolicy: Send + Sync {
    /// Whether this policy produces any output at all.
    fn is_visible(&self) -> bool;

    /// The configured line-break sequence, even when it is never emitted.
    fn line_break_str(&self) -> &str;

    /// Text to place at the start of a line indented to `level`.
    ///
    /// Empty for level 0 and for invisible policies.
    fn prefix(&self, level: isize) -> Result<IndentStr, IndentError>;

    /// Append [`prefix`](Self::prefix) for `level` to `sink`.
    fn write_prefix(&self, sink: &mut dyn Sink, level: isize) -> Result<(), IndentError>;

    /// End the current line and start the next one at `level`.
    ///
    /// Invisible policies suppress the line break as well as the prefix.
    fn line_break(&self, level: isize) -> Result<IndentStr, IndentError> {
        let prefix = self.prefix(level)?;
        if !self.is_visible() {
            return Ok(IndentStr::empty());
        }
        let line_break = self.line_break_str();
        let mut out = String::with_capacity(line_break.len() + prefix.len());
        out.push_str(line_break);
        out.push_str(&prefix);
        Ok(IndentStr::new(Arc::from(out)))
    }

    /// Append [`line_break`](Self::line_break) for `level` to `sink`.
    fn write_line_break(&self, sink: &mut dyn Sink, level: isize) -> Result<(), IndentError> {
        check_level(level)?;
        if self.is_visible() {
            sink.append(self.line_break_str())?;
        }
        self.write_prefix(sink, level)
    }
}

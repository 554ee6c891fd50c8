//! Output Sinks
//!
//! Append-only destinations for [`IndentationPolicy::write_prefix`] and
//! [`IndentationPolicy::write_line_break`].
//!
//! [`IndentationPolicy::write_prefix`]: crate::IndentationPolicy::write_prefix
//! [`IndentationPolicy::write_line_break`]: crate::IndentationPolicy::write_line_break

use std::{fmt, io};

use crate::IndentError;

/// An append-only text destination owned by the caller.
///
/// A policy writes into a sink instead of returning a fresh `String`, so
/// high-volume renderers can skip the intermediate allocation. Failures are
/// propagated to the caller, never retried.
pub trait Sink {
    /// Append `text` to the end of the sink.
    fn append(&mut self, text: &str) -> Result<(), IndentError>;
}

impl Sink for String {
    #[inline]
    fn append(&mut self, text: &str) -> Result<(), IndentError> {
        self.push_str(text);
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    #[inline]
    fn append(&mut self, text: &str) -> Result<(), IndentError> {
        (**self).append(text)
    }
}

/// Adapts any [`fmt::Write`] (a `Formatter`, a custom buffer) into a [`Sink`].
#[derive(Debug, Default)]
pub struct FmtSink<W> {
    inner: W,
}

impl<W: fmt::Write> FmtSink<W> {
    /// Wrap a formatter-style writer.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Borrow the wrapped writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Unwrap, returning the writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: fmt::Write> Sink for FmtSink<W> {
    fn append(&mut self, text: &str) -> Result<(), IndentError> {
        self.inner.write_str(text)?;
        Ok(())
    }
}

/// Adapts any [`io::Write`] (a file, a socket, stdout) into a [`Sink`].
///
/// Text is written as UTF-8 with `write_all`; the wrapped writer is not
/// flushed.
#[derive(Debug, Default)]
pub struct IoSink<W> {
    inner: W,
}

impl<W: io::Write> IoSink<W> {
    /// Wrap a byte writer.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Borrow the wrapped writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Unwrap, returning the writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: io::Write> Sink for IoSink<W> {
    fn append(&mut self, text: &str) -> Result<(), IndentError> {
        self.inner.write_all(text.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;

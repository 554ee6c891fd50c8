//! Repeating Indentation
//!
//! Builds the prefix for level `n` by repeating a unit string `n` times.
//!
//! # Caching
//!
//! Each distinct level is built once and memoized for the lifetime of the
//! policy, separately for the bare prefix and for the line break followed by
//! the prefix. A hit returns the memoized allocation itself. The unit never
//! changes, so an entry is never invalidated and the caches only grow with
//! the distinct depths a renderer actually uses.
//!
//! A level whose prefix would exceed `isize::MAX` bytes is rejected with
//! [`IndentError::LevelTooDeep`] before anything is allocated.
//!
//! # Thread Safety
//!
//! Each cache sits behind a `RwLock`. Hits take the shared lock only. On a
//! miss the string is built with no lock held, then inserted under the
//! exclusive lock unless another thread got there first. Two threads racing
//! on the same new level may both build it; the first insert wins and both
//! return equal strings.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::error::check_level;
use crate::{IndentError, IndentStr, IndentationPolicy, LineBreak, Sink, Whitespace};

type LevelCache = RwLock<FxHashMap<usize, Arc<str>>>;

/// Indentation that repeats a fixed unit once per level.
pub struct RepeatingIndentation {
    unit: String,
    line_break: String,
    /// Depth -> `unit` repeated depth times.
    prefixes: LevelCache,
    /// Depth -> `line_break` followed by the prefix.
    line_breaks: LevelCache,
}

impl RepeatingIndentation {
    /// Create a policy from an arbitrary unit and line-break string.
    ///
    /// An empty `unit` yields an invisible policy.
    pub fn new(unit: impl Into<String>, line_break: impl Into<String>) -> Self {
        Self {
            unit: unit.into(),
            line_break: line_break.into(),
            prefixes: RwLock::new(FxHashMap::default()),
            line_breaks: RwLock::new(FxHashMap::default()),
        }
    }

    /// Create a policy from a unit and a named line-break convention.
    pub fn with_line_break(unit: impl Into<String>, line_break: LineBreak) -> Self {
        Self::new(unit, line_break.as_str())
    }

    /// Create a policy whose unit is `whitespace` repeated `count` times.
    ///
    /// `whitespace(Whitespace::Space, 4, ..)` indents four spaces per level.
    pub fn whitespace(whitespace: Whitespace, count: usize, line_break: LineBreak) -> Self {
        Self::with_line_break(whitespace.repeat(count), line_break)
    }

    /// The string repeated once per level.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Number of distinct prefix levels built so far.
    pub fn cached_levels(&self) -> usize {
        self.prefixes.read().len()
    }

    /// Byte length of `extra` bytes plus the prefix for `depth`, if it fits
    /// in a `String`.
    fn rendered_len(&self, level: isize, depth: usize, extra: usize) -> Result<usize, IndentError> {
        self.unit
            .len()
            .checked_mul(depth)
            .and_then(|len| len.checked_add(extra))
            .filter(|&len| isize::try_from(len).is_ok())
            .ok_or(IndentError::LevelTooDeep { level })
    }

    /// Memoized prefix for a validated, non-negative `level`.
    fn cached_prefix(&self, level: isize, depth: usize) -> Result<Arc<str>, IndentError> {
        self.rendered_len(level, depth, 0)?;
        Ok(memoize(&self.prefixes, depth, || self.unit.repeat(depth)))
    }

    /// Memoized line break plus prefix for a validated, non-negative `level`.
    fn cached_line_break(&self, level: isize, depth: usize) -> Result<Arc<str>, IndentError> {
        let len = self.rendered_len(level, depth, self.line_break.len())?;
        let prefix = self.cached_prefix(level, depth)?;
        Ok(memoize(&self.line_breaks, depth, || {
            let mut out = String::with_capacity(len);
            out.push_str(&self.line_break);
            out.push_str(&prefix);
            out
        }))
    }
}

/// Look up `depth` in `cache`, building and inserting it on first use.
fn memoize(cache: &LevelCache, depth: usize, build: impl FnOnce() -> String) -> Arc<str> {
    // Fast path: already built
    {
        let guard = cache.read();
        if let Some(text) = guard.get(&depth) {
            return Arc::clone(text);
        }
    }

    let built: Arc<str> = Arc::from(build());
    tracing::trace!(depth, len = built.len(), "memoized indentation string");

    // Keep whichever entry landed first so every caller sees one value
    let mut guard = cache.write();
    Arc::clone(guard.entry(depth).or_insert(built))
}

impl IndentationPolicy for RepeatingIndentation {
    #[inline]
    fn is_visible(&self) -> bool {
        !self.unit.is_empty()
    }

    #[inline]
    fn line_break_str(&self) -> &str {
        &self.line_break
    }

    fn prefix(&self, level: isize) -> Result<IndentStr, IndentError> {
        let depth = check_level(level)?;
        if !self.is_visible() {
            return Ok(IndentStr::empty());
        }
        self.cached_prefix(level, depth).map(IndentStr::new)
    }

    fn write_prefix(&self, sink: &mut dyn Sink, level: isize) -> Result<(), IndentError> {
        let depth = check_level(level)?;
        if !self.is_visible() {
            return Ok(());
        }
        // Clone the Arc out so no lock is held while the sink writes
        let prefix = self.cached_prefix(level, depth)?;
        sink.append(&prefix)
    }

    fn line_break(&self, level: isize) -> Result<IndentStr, IndentError> {
        let depth = check_level(level)?;
        if !self.is_visible() {
            return Ok(IndentStr::empty());
        }
        self.cached_line_break(level, depth).map(IndentStr::new)
    }

    fn write_line_break(&self, sink: &mut dyn Sink, level: isize) -> Result<(), IndentError> {
        let depth = check_level(level)?;
        if !self.is_visible() {
            return Ok(());
        }
        let prefix = self.cached_prefix(level, depth)?;
        sink.append(&self.line_break)?;
        sink.append(&prefix)
    }
}

impl Clone for RepeatingIndentation {
    /// Clones carry over every level built so far.
    fn clone(&self) -> Self {
        Self {
            unit: self.unit.clone(),
            line_break: self.line_break.clone(),
            prefixes: RwLock::new(self.prefixes.read().clone()),
            line_breaks: RwLock::new(self.line_breaks.read().clone()),
        }
    }
}

impl PartialEq for RepeatingIndentation {
    fn eq(&self, other: &Self) -> bool {
        self.unit == other.unit && self.line_break == other.line_break
    }
}

impl Eq for RepeatingIndentation {}

impl fmt::Debug for RepeatingIndentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepeatingIndentation")
            .field("unit", &self.unit)
            .field("line_break", &self.line_break)
            .field("cached_levels", &self.cached_levels())
            .finish()
    }
}

//! Declarative policy configuration.
//!
//! An [`IndentConfig`] names the unit and line break a renderer should use
//! and is checked when built, so a configuration that leaves either unset
//! is rejected before any policy exists. With the `serde` feature enabled
//! the config can be read from any serde format:
//!
//! ```text
//! { "unit": "  ", "line_break": "\n" }
//! ```

use crate::{
    IndentError, Indentation, IndentationPolicy, InvisibleIndentation, LineBreak,
    RepeatingIndentation, Whitespace,
};

/// Unit and line break for an [`Indentation`], either of which may be unset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct IndentConfig {
    /// Text repeated once per level. Empty means invisible.
    pub unit: Option<String>,
    /// Text emitted before the prefix of a new line.
    pub line_break: Option<String>,
}

impl IndentConfig {
    /// Config with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an arbitrary unit string.
    #[must_use]
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Set the unit to `count` copies of `whitespace`.
    #[must_use]
    pub fn whitespace(self, whitespace: Whitespace, count: usize) -> Self {
        self.unit(whitespace.repeat(count))
    }

    /// Set a named line break.
    #[must_use]
    pub fn line_break(self, line_break: LineBreak) -> Self {
        self.line_break_str(line_break.as_str())
    }

    /// Set an arbitrary line-break string.
    #[must_use]
    pub fn line_break_str(mut self, line_break: impl Into<String>) -> Self {
        self.line_break = Some(line_break.into());
        self
    }

    /// Validate and build the policy.
    ///
    /// An empty unit selects [`Indentation::Invisible`].
    pub fn build(&self) -> Result<Indentation, IndentError> {
        let unit = self.unit.as_deref().ok_or(IndentError::MissingUnit)?;
        let line_break = self
            .line_break
            .as_deref()
            .ok_or(IndentError::MissingLineBreak)?;

        let indentation = if unit.is_empty() {
            Indentation::Invisible(InvisibleIndentation::with_line_break_str(line_break))
        } else {
            Indentation::Repeating(RepeatingIndentation::new(unit, line_break))
        };
        tracing::debug!(
            visible = indentation.is_visible(),
            unit_len = unit.len(),
            line_break = ?line_break,
            "built indentation policy"
        );
        Ok(indentation)
    }
}

//! Named indentation units and line-break conventions.

use std::fmt;
use std::str::FromStr;

use crate::IndentError;

/// Line separator of the host platform.
#[cfg(windows)]
const SYSTEM_LINE_BREAK: &str = "\r\n";

/// Line separator of the host platform.
#[cfg(not(windows))]
const SYSTEM_LINE_BREAK: &str = "\n";

/// A whitespace character used as a repeatable indentation unit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Whitespace {
    /// A single space, `" "`.
    Space,
    /// A single horizontal tab, `"\t"`.
    Tab,
}

impl Whitespace {
    /// The literal character as a string.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Whitespace::Space => " ",
            Whitespace::Tab => "\t",
        }
    }

    /// This whitespace repeated `count` times, e.g. a 4-space step.
    pub fn repeat(self, count: usize) -> String {
        self.as_str().repeat(count)
    }
}

impl fmt::Display for Whitespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Whitespace::Space => "space",
            Whitespace::Tab => "tab",
        })
    }
}

impl FromStr for Whitespace {
    type Err = IndentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "space" | "spaces" => Ok(Whitespace::Space),
            "tab" | "tabs" => Ok(Whitespace::Tab),
            _ => Err(IndentError::UnknownUnit {
                kind: "whitespace",
                name: s.to_owned(),
            }),
        }
    }
}

/// A line-break convention.
///
/// [`LineBreak::System`] is fixed when the crate is compiled and never
/// re-read at runtime.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum LineBreak {
    /// Line feed, `"\n"`.
    Unix,
    /// Carriage return followed by line feed, `"\r\n"`.
    Windows,
    /// The host platform's separator.
    #[default]
    System,
}

impl LineBreak {
    /// The literal line-break sequence.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            LineBreak::Unix => "\n",
            LineBreak::Windows => "\r\n",
            LineBreak::System => SYSTEM_LINE_BREAK,
        }
    }
}

impl fmt::Display for LineBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LineBreak::Unix => "unix",
            LineBreak::Windows => "windows",
            LineBreak::System => "system",
        })
    }
}

impl FromStr for LineBreak {
    type Err = IndentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unix" | "lf" => Ok(LineBreak::Unix),
            "windows" | "crlf" => Ok(LineBreak::Windows),
            "system" | "native" => Ok(LineBreak::System),
            _ => Err(IndentError::UnknownUnit {
                kind: "line break",
                name: s.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests;

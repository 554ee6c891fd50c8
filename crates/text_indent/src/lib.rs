//! Text Indentation
//!
//! Indentation prefixes and line-break sequences for rendering nested text.
//!
//! # Architecture
//!
//! A renderer holds one policy for the lifetime of a document and asks it
//! for the prefix of every line it starts:
//!
//! - [`IndentationPolicy`]: the contract (visibility, prefix, line break,
//!   and sink-writing variants of both)
//! - [`RepeatingIndentation`]: repeats a unit string once per level and
//!   memoizes the result per level
//! - [`InvisibleIndentation`]: renders nothing, not even line breaks
//! - [`Indentation`]: tagged union of the two, selected at construction
//!
//! # Modules
//!
//! - [`units`]: named whitespace units and line-break conventions
//! - [`sink`]: output destinations for the `write_*` operations
//! - [`config`]: declarative construction of an [`Indentation`]
//!
//! # Example
//!
//! ```
//! use text_indent::{IndentStr, IndentationPolicy, LineBreak, RepeatingIndentation, Whitespace};
//!
//! let indent = RepeatingIndentation::whitespace(Whitespace::Space, 2, LineBreak::Unix);
//! assert_eq!(indent.prefix(2).ok().as_deref(), Some("    "));
//! assert_eq!(indent.line_break(1).ok().as_deref(), Some("\n  "));
//!
//! // Repeated calls share the memoized string.
//! let (a, b) = (indent.prefix(2).ok(), indent.prefix(2).ok());
//! assert!(a.zip(b).is_some_and(|(a, b)| IndentStr::ptr_eq(&a, &b)));
//! ```

pub mod config;
mod error;
mod indent_str;
mod indentation;
mod invisible;
mod policy;
mod repeating;
pub mod sink;
pub mod units;

pub use config::IndentConfig;
pub use error::{ErrorKind, IndentError};
pub use indent_str::IndentStr;
pub use indentation::Indentation;
pub use invisible::InvisibleIndentation;
pub use policy::IndentationPolicy;
pub use repeating::RepeatingIndentation;
pub use sink::{FmtSink, IoSink, Sink};
pub use units::{LineBreak, Whitespace};

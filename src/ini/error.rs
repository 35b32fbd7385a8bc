//! Error types for the INI engine.
//!
//! This module provides a structured error hierarchy using [`thiserror`].
//! Engine modules return typed errors while command handlers at the CLI
//! boundary convert them to [`anyhow::Error`] via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! IniError
//! ├── Parse(ParseError)       — line-level violations, all-or-nothing
//! └── Access(AccessError)     — document lookups and mutation
//!     └── Interpolation(InterpolationError) — lazy, read-time only
//! ```
//!
//! Parsing is fail-fast: the first [`ParseError`] aborts the whole document.
//! [`AccessError`]s are local to a single `get`/`set` call and never
//! invalidate the document they were raised from.

use thiserror::Error;

/// Top-level error type for the INI engine.
///
/// Aggregates the parse-time and access-time sub-errors and is convertible
/// to [`anyhow::Error`] for use at CLI command boundaries.
#[derive(Error, Debug)]
pub enum IniError {
    /// A violation found while parsing INI text.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// A failed document lookup or mutation.
    #[error("Access error: {0}")]
    Access(#[from] AccessError),
}

/// Errors raised while parsing INI text.
///
/// Every variant carries the 1-based line number and the raw line text of
/// the offending input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A line that is neither a header, a key/value pair, nor a legal
    /// continuation.
    #[error("Invalid line {line}: '{text}'")]
    Syntax {
        /// 1-based line number of the offending line.
        line: usize,
        /// The raw line text.
        text: String,
    },

    /// A line that opens a section header without closing it properly.
    #[error("Malformed section header at line {line}: '{text}'")]
    MalformedHeader {
        /// 1-based line number of the offending line.
        line: usize,
        /// The raw line text.
        text: String,
    },

    /// An indented line with no key/value line open above it.
    #[error("Unexpected continuation at line {line}: '{text}'")]
    UnexpectedContinuation {
        /// 1-based line number of the offending line.
        line: usize,
        /// The raw line text.
        text: String,
    },

    /// A second header for a section name already seen in this document.
    #[error("Duplicate section '{name}' at line {line}: '{text}'")]
    DuplicateSection {
        /// 1-based line number of the offending line.
        line: usize,
        /// The duplicated section name.
        name: String,
        /// The raw line text.
        text: String,
    },

    /// A key that, after normalization, already exists in its section.
    #[error("Duplicate key '{key}' in section '{section}' at line {line}: '{text}'")]
    DuplicateKey {
        /// 1-based line number of the offending line.
        line: usize,
        /// Section that already contains the key.
        section: String,
        /// The duplicated (normalized) key.
        key: String,
        /// The raw line text.
        text: String,
    },

    /// A delimiter with nothing but whitespace on its left.
    #[error("Missing key before delimiter at line {line}: '{text}'")]
    EmptyKey {
        /// 1-based line number of the offending line.
        line: usize,
        /// The raw line text.
        text: String,
    },
}

impl ParseError {
    /// The 1-based line number the error was raised at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Syntax { line, .. }
            | Self::MalformedHeader { line, .. }
            | Self::UnexpectedContinuation { line, .. }
            | Self::DuplicateSection { line, .. }
            | Self::DuplicateKey { line, .. }
            | Self::EmptyKey { line, .. } => *line,
        }
    }
}

/// Errors raised by document accessors and mutators.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// The named section does not exist in the document.
    #[error("No section named '{section}'")]
    SectionNotFound {
        /// The section name that was looked up.
        section: String,
    },

    /// The key is absent from the section and from the default section.
    #[error("No key '{key}' in section '{section}'")]
    KeyNotFound {
        /// Section the lookup started from.
        section: String,
        /// The (normalized) key that was looked up.
        key: String,
    },

    /// `add_section` was called with a name that is already present.
    #[error("Section '{section}' already exists")]
    DuplicateSection {
        /// The colliding section name.
        section: String,
    },

    /// `add_section` was called with the reserved default-section name.
    #[error("'{section}' is reserved for the default section")]
    ReservedSectionName {
        /// The reserved name that was used.
        section: String,
    },

    /// A value was read whose placeholders could not be resolved.
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
}

/// Errors raised while resolving interpolation placeholders.
///
/// These surface only when a value containing a placeholder is actually
/// read, never at parse time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpolationError {
    /// A placeholder references a key that is not visible from the
    /// referencing section.
    #[error("Cannot resolve reference '{reference}' in {section}:{key}")]
    MissingKey {
        /// Section of the value being resolved.
        section: String,
        /// Key of the value being resolved.
        key: String,
        /// The unresolvable reference text.
        reference: String,
    },

    /// Resolution revisited a key that is already being resolved.
    #[error("Circular interpolation detected while resolving {section}:{key}")]
    Cycle {
        /// Section of the value being resolved.
        section: String,
        /// Key of the value being resolved.
        key: String,
    },

    /// Resolution chained through more than the allowed number of levels.
    #[error("Interpolation depth exceeded {max} levels while resolving {section}:{key}")]
    DepthExceeded {
        /// Section of the value being resolved.
        section: String,
        /// Key of the value being resolved.
        key: String,
        /// The configured maximum chain length.
        max: usize,
    },

    /// A placeholder that does not follow the configured syntax.
    #[error("Bad interpolation syntax in {section}:{key}: {message}")]
    Syntax {
        /// Section of the value being resolved.
        section: String,
        /// Key of the value being resolved.
        key: String,
        /// What was wrong with the placeholder.
        message: String,
    },
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // ParseError
    // -----------------------------------------------------------------------

    #[test]
    fn parse_error_syntax_display() {
        let e = ParseError::Syntax {
            line: 3,
            text: "not a pair".to_string(),
        };
        assert_eq!(e.to_string(), "Invalid line 3: 'not a pair'");
    }

    #[test]
    fn parse_error_duplicate_section_display() {
        let e = ParseError::DuplicateSection {
            line: 9,
            name: "server".to_string(),
            text: "[server]".to_string(),
        };
        assert_eq!(e.to_string(), "Duplicate section 'server' at line 9: '[server]'");
    }

    #[test]
    fn parse_error_duplicate_key_display() {
        let e = ParseError::DuplicateKey {
            line: 4,
            section: "server".to_string(),
            key: "host".to_string(),
            text: "host = other".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Duplicate key 'host' in section 'server' at line 4: 'host = other'"
        );
    }

    #[test]
    fn parse_error_line_accessor() {
        let e = ParseError::UnexpectedContinuation {
            line: 7,
            text: "  dangling".to_string(),
        };
        assert_eq!(e.line(), 7);
    }

    // -----------------------------------------------------------------------
    // AccessError
    // -----------------------------------------------------------------------

    #[test]
    fn access_error_section_not_found_display() {
        let e = AccessError::SectionNotFound {
            section: "client".to_string(),
        };
        assert_eq!(e.to_string(), "No section named 'client'");
    }

    #[test]
    fn access_error_key_not_found_display() {
        let e = AccessError::KeyNotFound {
            section: "server".to_string(),
            key: "port".to_string(),
        };
        assert_eq!(e.to_string(), "No key 'port' in section 'server'");
    }

    #[test]
    fn access_error_reserved_name_display() {
        let e = AccessError::ReservedSectionName {
            section: "DEFAULT".to_string(),
        };
        assert_eq!(e.to_string(), "'DEFAULT' is reserved for the default section");
    }

    // -----------------------------------------------------------------------
    // InterpolationError
    // -----------------------------------------------------------------------

    #[test]
    fn interpolation_error_missing_key_display() {
        let e = InterpolationError::MissingKey {
            section: "x".to_string(),
            key: "path".to_string(),
            reference: "root".to_string(),
        };
        assert_eq!(e.to_string(), "Cannot resolve reference 'root' in x:path");
    }

    #[test]
    fn interpolation_error_cycle_display() {
        let e = InterpolationError::Cycle {
            section: "x".to_string(),
            key: "a".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Circular interpolation detected while resolving x:a"
        );
    }

    #[test]
    fn interpolation_error_is_transparent_through_access_error() {
        let e: AccessError = InterpolationError::Cycle {
            section: "x".to_string(),
            key: "a".to_string(),
        }
        .into();
        assert_eq!(
            e.to_string(),
            "Circular interpolation detected while resolving x:a"
        );
    }

    // -----------------------------------------------------------------------
    // IniError conversions
    // -----------------------------------------------------------------------

    #[test]
    fn ini_error_from_parse_error() {
        let e: IniError = ParseError::Syntax {
            line: 1,
            text: "oops".to_string(),
        }
        .into();
        assert!(e.to_string().contains("Parse error"));
        assert!(e.to_string().contains("oops"));
    }

    #[test]
    fn ini_error_from_access_error() {
        let e: IniError = AccessError::SectionNotFound {
            section: "s".to_string(),
        }
        .into();
        assert!(e.to_string().contains("Access error"));
    }

    // -----------------------------------------------------------------------
    // Send + Sync bounds
    // -----------------------------------------------------------------------

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn all_error_types_are_send_sync() {
        assert_send_sync::<IniError>();
        assert_send_sync::<ParseError>();
        assert_send_sync::<AccessError>();
        assert_send_sync::<InterpolationError>();
    }

    // -----------------------------------------------------------------------
    // anyhow conversion
    // -----------------------------------------------------------------------

    #[test]
    fn parse_error_converts_to_anyhow() {
        let e = ParseError::EmptyKey {
            line: 2,
            text: "= 1".to_string(),
        };
        let _anyhow_err: anyhow::Error = e.into();
    }

    #[test]
    fn access_error_converts_to_anyhow() {
        let e = AccessError::KeyNotFound {
            section: "s".to_string(),
            key: "k".to_string(),
        };
        let _anyhow_err: anyhow::Error = e.into();
    }
}

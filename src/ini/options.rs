//! Engine configuration surface.
//!
//! [`Options`] collects every knob the parser, document accessors, and
//! serializer consult. The defaults match the most common INI dialect:
//! `;`/`#` comments, `=`/`:` delimiters, lowercased keys, strict duplicate
//! detection, and `%(name)s` interpolation.

/// Policy for a key that, after normalization, already exists in its section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateKeys {
    /// Reject the document with a duplicate-key parse error.
    #[default]
    Error,
    /// Keep parsing; the last value wins and the key keeps its position.
    Overwrite,
}

/// Placeholder syntax used when values are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolation {
    /// Values are returned verbatim.
    None,
    /// `%(name)s` references a key visible from the referencing section;
    /// `%%` is a literal `%`.
    #[default]
    Basic,
    /// `${name}` and `${section:name}` references; `$$` is a literal `$`.
    Extended,
}

/// Engine configuration for parsing, reading, and writing INI documents.
///
/// Construct with [`Options::default`] and refine with the fluent `with_*`
/// methods:
///
/// ```
/// use inifmt::ini::{DuplicateKeys, Interpolation, Options};
///
/// let options = Options::default()
///     .with_duplicate_keys(DuplicateKeys::Overwrite)
///     .with_interpolation(Interpolation::Extended);
/// assert_eq!(options.duplicate_keys, DuplicateKeys::Overwrite);
/// assert_eq!(options.comment_prefixes, [";", "#"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Keep key case as written instead of lowercasing.
    pub case_sensitive_keys: bool,
    /// What to do with a duplicate key inside one section.
    pub duplicate_keys: DuplicateKeys,
    /// Merge a repeated section header into the existing section instead of
    /// rejecting the document.
    pub merge_duplicate_sections: bool,
    /// Placeholder syntax resolved on read.
    pub interpolation: Interpolation,
    /// Prefixes that make a (trimmed) line a full-line comment.
    pub comment_prefixes: Vec<String>,
    /// Key/value delimiters; the first is preferred when writing.
    pub delimiters: Vec<String>,
    /// Prefixes that start a comment mid-line when preceded by whitespace.
    /// Empty by default: inline `#` is part of the value.
    pub inline_comment_prefixes: Vec<String>,
    /// Accept a line with no delimiter as a key with an empty value.
    pub allow_no_value: bool,
    /// Fold blank lines into a multi-line value instead of ending it.
    pub empty_lines_in_values: bool,
    /// Put spaces around the delimiter when writing (`key = value`).
    pub space_around_delimiters: bool,
    /// Let `set` create a missing section instead of failing.
    pub auto_create_sections: bool,
    /// Name of the implicit default section whose keys every other section
    /// inherits. Compared case-sensitively.
    pub default_section: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            case_sensitive_keys: false,
            duplicate_keys: DuplicateKeys::Error,
            merge_duplicate_sections: false,
            interpolation: Interpolation::Basic,
            comment_prefixes: vec![";".to_string(), "#".to_string()],
            delimiters: vec!["=".to_string(), ":".to_string()],
            inline_comment_prefixes: Vec::new(),
            allow_no_value: false,
            empty_lines_in_values: true,
            space_around_delimiters: true,
            auto_create_sections: false,
            default_section: "DEFAULT".to_string(),
        }
    }
}

impl Options {
    /// Keep key case as written instead of lowercasing.
    #[must_use]
    pub fn with_case_sensitive_keys(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive_keys = case_sensitive;
        self
    }

    /// Set the duplicate-key policy.
    #[must_use]
    pub fn with_duplicate_keys(mut self, policy: DuplicateKeys) -> Self {
        self.duplicate_keys = policy;
        self
    }

    /// Merge repeated section headers instead of rejecting them.
    #[must_use]
    pub fn with_merge_duplicate_sections(mut self, merge: bool) -> Self {
        self.merge_duplicate_sections = merge;
        self
    }

    /// Select the interpolation syntax.
    #[must_use]
    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Replace the full-line comment prefixes.
    #[must_use]
    pub fn with_comment_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.comment_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the key/value delimiters. The first entry is preferred when
    /// writing.
    #[must_use]
    pub fn with_delimiters<I, S>(mut self, delimiters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.delimiters = delimiters.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the inline comment prefixes.
    #[must_use]
    pub fn with_inline_comment_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inline_comment_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    /// Accept value-less keys.
    #[must_use]
    pub fn with_allow_no_value(mut self, allow: bool) -> Self {
        self.allow_no_value = allow;
        self
    }

    /// Fold blank lines into multi-line values.
    #[must_use]
    pub fn with_empty_lines_in_values(mut self, fold: bool) -> Self {
        self.empty_lines_in_values = fold;
        self
    }

    /// Put spaces around the delimiter when writing.
    #[must_use]
    pub fn with_space_around_delimiters(mut self, spaced: bool) -> Self {
        self.space_around_delimiters = spaced;
        self
    }

    /// Let `set` create missing sections.
    #[must_use]
    pub fn with_auto_create_sections(mut self, auto_create: bool) -> Self {
        self.auto_create_sections = auto_create;
        self
    }

    /// Rename the implicit default section.
    #[must_use]
    pub fn with_default_section(mut self, name: impl Into<String>) -> Self {
        self.default_section = name.into();
        self
    }

    /// Normalize a key per the configured case sensitivity.
    #[must_use]
    pub fn normalize_key(&self, key: &str) -> String {
        if self.case_sensitive_keys {
            key.to_string()
        } else {
            key.to_lowercase()
        }
    }
}

//! Line-oriented INI parser.
//!
//! One pass over the input, all-or-nothing: the first violation aborts with a
//! [`ParseError`] and no partial document escapes. Values are accumulated as
//! unjoined line lists while parsing and joined with `\n` at the end, with
//! trailing blank lines stripped.

use indexmap::IndexMap;

use super::document::Document;
use super::error::ParseError;
use super::options::{DuplicateKeys, Options};

/// Parse INI text into a [`Document`] with the given engine options.
///
/// Line forms, in priority order: comments and blank lines (skipped), section
/// headers, continuation lines (more deeply indented than the line that
/// opened the current key), and key/value pairs. Pairs seen before any header
/// land in the default section.
///
/// ```
/// use inifmt::ini::{parse, Options};
///
/// let doc = parse("[server]\nhost = localhost\nport = 8080\n", Options::default()).unwrap();
/// assert_eq!(doc.sections(), ["server"]);
/// assert_eq!(doc.get("server", "host").unwrap(), "localhost");
/// ```
///
/// # Errors
///
/// The first [`ParseError`] encountered, carrying the 1-based line number
/// and the raw line text.
pub fn parse(text: &str, options: Options) -> Result<Document, ParseError> {
    let mut parser = Parser::new(options);
    for (index, line) in text.lines().enumerate() {
        parser.feed(index + 1, line)?;
    }
    Ok(parser.finish())
}

/// Parse INI text with [`Options::default`].
///
/// # Errors
///
/// See [`parse`].
pub fn parse_default(text: &str) -> Result<Document, ParseError> {
    parse(text, Options::default())
}

/// Which section newly parsed pairs go to.
#[derive(Debug, Clone)]
enum Cursor {
    Defaults,
    Named(String),
}

struct Parser {
    options: Options,
    defaults: IndexMap<String, Vec<String>>,
    sections: IndexMap<String, IndexMap<String, Vec<String>>>,
    cursor: Cursor,
    current_key: Option<String>,
    /// Indent of the line that opened the current key or section; `None`
    /// until the first structural line is seen.
    indent: Option<usize>,
}

impl Parser {
    fn new(options: Options) -> Self {
        Self {
            options,
            defaults: IndexMap::new(),
            sections: IndexMap::new(),
            cursor: Cursor::Defaults,
            current_key: None,
            indent: None,
        }
    }

    fn feed(&mut self, line_no: usize, raw_line: &str) -> Result<(), ParseError> {
        let (content, had_comment) = self.strip_inline_comment(raw_line);
        let value = content.trim();

        // Full-line comments contribute nothing and do not end a value.
        if self.is_full_line_comment(value) {
            return Ok(());
        }

        if value.is_empty() {
            if self.options.empty_lines_in_values {
                if !had_comment {
                    self.append_to_current("");
                }
            } else {
                // A blank line ends the current value; the next structural
                // line parses normally whatever its indent.
                self.current_key = None;
                self.indent = Some(usize::MAX);
            }
            return Ok(());
        }

        let indent = raw_line.len() - raw_line.trim_start().len();
        if let Some(baseline) = self.indent
            && indent > baseline
        {
            if self.current_key.is_some() {
                self.append_to_current(value);
                return Ok(());
            }
            return Err(ParseError::UnexpectedContinuation {
                line: line_no,
                text: raw_line.to_string(),
            });
        }
        self.indent = Some(indent);

        if value.starts_with('[') {
            return self.open_section(line_no, raw_line, value);
        }
        self.store_pair(line_no, raw_line, value)
    }

    /// Truncate the line at the earliest inline comment prefix that sits at
    /// column zero or right after whitespace. Returns the remaining content
    /// and whether a comment was cut off.
    fn strip_inline_comment<'a>(&self, raw_line: &'a str) -> (&'a str, bool) {
        if self.options.inline_comment_prefixes.is_empty() {
            return (raw_line, false);
        }
        let mut earliest: Option<usize> = None;
        for prefix in &self.options.inline_comment_prefixes {
            for (pos, _) in raw_line.match_indices(prefix.as_str()) {
                let head = raw_line.get(..pos).unwrap_or_default();
                if head.chars().next_back().is_none_or(char::is_whitespace) {
                    earliest = Some(earliest.map_or(pos, |e| e.min(pos)));
                    break;
                }
            }
        }
        match earliest {
            Some(pos) => (raw_line.get(..pos).unwrap_or_default(), true),
            None => (raw_line, false),
        }
    }

    fn is_full_line_comment(&self, value: &str) -> bool {
        !value.is_empty()
            && self
                .options
                .comment_prefixes
                .iter()
                .any(|p| value.starts_with(p.as_str()))
    }

    fn open_section(
        &mut self,
        line_no: usize,
        raw_line: &str,
        value: &str,
    ) -> Result<(), ParseError> {
        let malformed = || ParseError::MalformedHeader {
            line: line_no,
            text: raw_line.to_string(),
        };
        let Some(inner) = value
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        else {
            return Err(malformed());
        };
        if inner.contains(']') {
            return Err(malformed());
        }
        let name = inner.trim();
        if name.is_empty() {
            return Err(malformed());
        }

        // Sections cannot start with a continuation line.
        self.current_key = None;

        if name == self.options.default_section {
            self.cursor = Cursor::Defaults;
            return Ok(());
        }
        if self.sections.contains_key(name) && !self.options.merge_duplicate_sections {
            return Err(ParseError::DuplicateSection {
                line: line_no,
                name: name.to_string(),
                text: raw_line.to_string(),
            });
        }
        self.sections.entry(name.to_string()).or_default();
        self.cursor = Cursor::Named(name.to_string());
        Ok(())
    }

    fn store_pair(&mut self, line_no: usize, raw_line: &str, value: &str) -> Result<(), ParseError> {
        let mut split: Option<(usize, &String)> = None;
        for delimiter in &self.options.delimiters {
            if let Some(pos) = value.find(delimiter.as_str())
                && split.is_none_or(|(best, _)| pos < best)
            {
                split = Some((pos, delimiter));
            }
        }

        let (key_raw, lines) = match split {
            Some((pos, delimiter)) => {
                let key_raw = value.get(..pos).unwrap_or_default().trim_end();
                if key_raw.is_empty() {
                    return Err(ParseError::EmptyKey {
                        line: line_no,
                        text: raw_line.to_string(),
                    });
                }
                let rest = value.get(pos + delimiter.len()..).unwrap_or_default().trim();
                (key_raw, vec![rest.to_string()])
            }
            None => {
                if !self.options.allow_no_value {
                    return Err(ParseError::Syntax {
                        line: line_no,
                        text: raw_line.to_string(),
                    });
                }
                (value, Vec::new())
            }
        };

        let key = self.options.normalize_key(key_raw);
        let section_display = match &self.cursor {
            Cursor::Defaults => self.options.default_section.clone(),
            Cursor::Named(name) => name.clone(),
        };
        let strict = matches!(self.options.duplicate_keys, DuplicateKeys::Error);
        let map = self.current_map_mut();
        if strict && map.contains_key(&key) {
            return Err(ParseError::DuplicateKey {
                line: line_no,
                section: section_display,
                key,
                text: raw_line.to_string(),
            });
        }
        map.insert(key.clone(), lines);
        self.current_key = Some(key);
        Ok(())
    }

    fn append_to_current(&mut self, line: &str) {
        let Some(key) = self.current_key.clone() else {
            return;
        };
        let map = self.current_map_mut();
        if let Some(lines) = map.get_mut(&key) {
            lines.push(line.to_string());
        }
    }

    fn current_map_mut(&mut self) -> &mut IndexMap<String, Vec<String>> {
        match self.cursor.clone() {
            Cursor::Defaults => &mut self.defaults,
            Cursor::Named(name) => self.sections.entry(name).or_default(),
        }
    }

    fn finish(self) -> Document {
        let Self {
            options,
            defaults,
            sections,
            ..
        } = self;
        let mut doc = Document::new(options);
        for (key, lines) in defaults {
            doc.defaults_mut().insert(key, join_value(lines));
        }
        for (name, entries) in sections {
            let section = doc.section_entry(name);
            for (key, lines) in entries {
                section.insert(key, join_value(lines));
            }
        }
        doc
    }
}

/// Join accumulated value lines with `\n`, dropping trailing blank lines.
fn join_value(mut lines: Vec<String>) -> String {
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

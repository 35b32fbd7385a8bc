//! INI serialization.
//!
//! The serializer is the structural inverse of the parser: sections in
//! document order (default section first when non-empty), one blank line
//! between sections, embedded newlines re-split onto tab-indented
//! continuation lines. Values are written literally; interpolation
//! placeholders are never resolved, so round-tripping an interpolated file
//! reproduces the placeholders.

use std::fmt;

use super::document::{Document, Section};

/// Render a document as INI text.
///
/// The round-trip contract: parsing the output yields a document that is
/// structurally equivalent to the input document (same section order, same
/// key order, same literal values), and re-serializing it reproduces the
/// output byte for byte.
///
/// ```
/// use inifmt::ini::{parse_default, write};
///
/// let doc = parse_default("[server]\nhost=localhost\n").unwrap();
/// assert_eq!(write(&doc), "[server]\nhost = localhost\n");
/// ```
#[must_use]
pub fn write(doc: &Document) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_to(doc, &mut out);
    out
}

/// Render a document as INI text into a [`fmt::Write`] sink.
///
/// # Errors
///
/// Propagates errors from the sink; the serializer itself is infallible.
pub fn write_to<W: fmt::Write>(doc: &Document, out: &mut W) -> fmt::Result {
    let options = doc.options();
    let delimiter_text = options.delimiters.first().map_or("=", String::as_str);
    let delimiter = if options.space_around_delimiters {
        format!(" {delimiter_text} ")
    } else {
        delimiter_text.to_string()
    };

    let mut first = true;
    if !doc.defaults().is_empty() {
        write_section(
            out,
            &options.default_section,
            doc.defaults(),
            &delimiter,
            options.allow_no_value,
        )?;
        first = false;
    }
    for (name, section) in doc.iter() {
        if !first {
            out.write_char('\n')?;
        }
        write_section(out, name, section, &delimiter, options.allow_no_value)?;
        first = false;
    }
    Ok(())
}

fn write_section<W: fmt::Write>(
    out: &mut W,
    name: &str,
    section: &Section,
    delimiter: &str,
    allow_no_value: bool,
) -> fmt::Result {
    writeln!(out, "[{name}]")?;
    for (key, value) in section.iter() {
        if allow_no_value && value.is_empty() {
            writeln!(out, "{key}")?;
        } else {
            writeln!(out, "{key}{delimiter}{}", value.replace('\n', "\n\t"))?;
        }
    }
    Ok(())
}

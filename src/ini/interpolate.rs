//! Lazy interpolation of value placeholders.
//!
//! Resolution is triggered by reads (`get`, `items`), never by parsing, so
//! placeholder targets may be defined later in the file or mutated after
//! parsing. The resolver walks the value character by character; references
//! are looked up raw (local key first, then the default section) and resolved
//! recursively with an explicit visited stack for cycle detection and a fixed
//! depth bound for runaway chains.

use super::document::Document;
use super::error::InterpolationError;
use super::options::Interpolation;

/// Upper bound on chained placeholder resolution.
pub(crate) const MAX_DEPTH: usize = 10;

/// A (section, key) pair currently being resolved.
type Frame = (String, String);

/// Resolve every placeholder in `raw`, read from `section:key`.
///
/// `key` must already be normalized. Which placeholder syntax applies comes
/// from the document's options; callers handle `Interpolation::None`
/// themselves.
pub(crate) fn resolve(
    doc: &Document,
    section: &str,
    key: &str,
    raw: &str,
) -> Result<String, InterpolationError> {
    let mut visited: Vec<Frame> = vec![(section.to_string(), key.to_string())];
    let mut out = String::with_capacity(raw.len());
    resolve_into(doc, section, key, raw, 1, &mut visited, &mut out)?;
    Ok(out)
}

fn resolve_into(
    doc: &Document,
    section: &str,
    key: &str,
    raw: &str,
    depth: usize,
    visited: &mut Vec<Frame>,
    out: &mut String,
) -> Result<(), InterpolationError> {
    if depth > MAX_DEPTH {
        return Err(InterpolationError::DepthExceeded {
            section: section.to_string(),
            key: key.to_string(),
            max: MAX_DEPTH,
        });
    }
    match doc.options().interpolation {
        Interpolation::None => {
            out.push_str(raw);
            Ok(())
        }
        Interpolation::Basic => resolve_basic(doc, section, key, raw, depth, visited, out),
        Interpolation::Extended => resolve_extended(doc, section, key, raw, depth, visited, out),
    }
}

/// `%(name)s` syntax: the reference names a key visible from the referencing
/// section; `%%` is a literal `%`.
fn resolve_basic(
    doc: &Document,
    section: &str,
    key: &str,
    raw: &str,
    depth: usize,
    visited: &mut Vec<Frame>,
    out: &mut String,
) -> Result<(), InterpolationError> {
    let syntax = |message: String| InterpolationError::Syntax {
        section: section.to_string(),
        key: key.to_string(),
        message,
    };
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some('(') => {
                chars.next();
                let Some(reference) = consume_until(&mut chars, ')') else {
                    return Err(syntax("unclosed reference".to_string()));
                };
                if chars.next() != Some('s') {
                    return Err(syntax(format!("reference '%({reference})' must end with 's'")));
                }
                descend(doc, section, key, section, &reference, depth, visited, out)?;
            }
            other => {
                let found = other.map_or_else(|| "end of value".to_string(), char::to_string);
                return Err(syntax(format!(
                    "'%' must be followed by '%' or '(', found {found}"
                )));
            }
        }
    }
    Ok(())
}

/// `${name}` / `${section:name}` syntax; `$$` is a literal `$`.
fn resolve_extended(
    doc: &Document,
    section: &str,
    key: &str,
    raw: &str,
    depth: usize,
    visited: &mut Vec<Frame>,
    out: &mut String,
) -> Result<(), InterpolationError> {
    let syntax = |message: String| InterpolationError::Syntax {
        section: section.to_string(),
        key: key.to_string(),
        message,
    };
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('$') => {
                chars.next();
                out.push('$');
            }
            Some('{') => {
                chars.next();
                let Some(reference) = consume_until(&mut chars, '}') else {
                    return Err(syntax("unclosed reference".to_string()));
                };
                let mut parts = reference.split(':');
                let (target_section, target_key) = match (parts.next(), parts.next(), parts.next())
                {
                    (Some(name), None, _) => (section, name),
                    (Some(sect), Some(name), None) => (sect, name),
                    _ => {
                        return Err(syntax(format!(
                            "more than one ':' in reference '{reference}'"
                        )));
                    }
                };
                descend(doc, section, key, target_section, target_key, depth, visited, out)?;
            }
            other => {
                let found = other.map_or_else(|| "end of value".to_string(), char::to_string);
                return Err(syntax(format!(
                    "'$' must be followed by '$' or '{{', found {found}"
                )));
            }
        }
    }
    Ok(())
}

/// Look up a reference target and splice its (recursively resolved) value
/// into `out`.
#[allow(clippy::too_many_arguments)]
fn descend(
    doc: &Document,
    section: &str,
    key: &str,
    target_section: &str,
    target_key: &str,
    depth: usize,
    visited: &mut Vec<Frame>,
    out: &mut String,
) -> Result<(), InterpolationError> {
    let normalized = doc.options().normalize_key(target_key);
    let Some(value) = doc.raw_visible(target_section, &normalized) else {
        return Err(InterpolationError::MissingKey {
            section: section.to_string(),
            key: key.to_string(),
            reference: target_key.to_string(),
        });
    };
    let frame = (target_section.to_string(), normalized.clone());
    if visited.contains(&frame) {
        return Err(InterpolationError::Cycle {
            section: section.to_string(),
            key: key.to_string(),
        });
    }
    // Plain values splice directly; only values that still contain a marker
    // cost a resolution level.
    let marker = match doc.options().interpolation {
        Interpolation::Basic => '%',
        Interpolation::Extended => '$',
        Interpolation::None => {
            out.push_str(value);
            return Ok(());
        }
    };
    if value.contains(marker) {
        let value = value.to_string();
        visited.push(frame);
        resolve_into(doc, target_section, &normalized, &value, depth + 1, visited, out)?;
        visited.pop();
    } else {
        out.push_str(value);
    }
    Ok(())
}

/// Consume characters up to (and including) `delim`, returning the collected
/// text, or `None` when the delimiter never appears.
fn consume_until(
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
    delim: char,
) -> Option<String> {
    let mut collected = String::new();
    for c in chars.by_ref() {
        if c == delim {
            return Some(collected);
        }
        collected.push(c);
    }
    None
}

//! Top-level subcommand implementations.
//!
//! Each command is a thin I/O wrapper around the engine in [`crate::ini`]:
//! read the file, parse, act on the document. Errors are converted to
//! [`anyhow::Error`] with path context at this boundary; the engine itself
//! never touches the filesystem.

pub mod completions;
pub mod dump;
pub mod format;
pub mod get;

use anyhow::{Context, Result};
use std::path::Path;

use crate::ini::{self, Document};
use crate::logging::Logger;

/// Read a file fully and parse it with the given engine options.
///
/// # Errors
///
/// Returns an error when the file cannot be read or does not parse.
fn load_document(path: &Path, options: ini::Options, log: &Logger) -> Result<Document> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let doc =
        ini::parse(&text, options).with_context(|| format!("parsing {}", path.display()))?;
    log.debug(&format!(
        "parsed {} sections from {}",
        doc.sections().len(),
        path.display()
    ));
    Ok(doc)
}

//! The `dump` command: render a parsed INI file as JSON.

use anyhow::{Context, Result};
use std::io::Write as _;

use serde_json::{Map, Value};

use crate::cli::{DumpOpts, GlobalOpts};
use crate::ini::Document;
use crate::logging::Logger;

/// Run the `dump` command.
///
/// By default the raw document is dumped: sections in order, literal values
/// with placeholders untouched. With `--resolve` every section is rendered
/// through the same path `get` uses, so values are interpolated and
/// inherited default-section keys appear in each section.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or (with
/// `--resolve`) a placeholder cannot be resolved.
pub fn run(global: &GlobalOpts, opts: &DumpOpts, log: &Logger) -> Result<()> {
    let doc = super::load_document(&opts.file, global.engine_options(), log)?;
    let rendered = if opts.resolve {
        serde_json::to_string_pretty(&resolved_view(&doc)?)
    } else {
        serde_json::to_string_pretty(&doc)
    }
    .context("rendering JSON")?;
    writeln!(std::io::stdout().lock(), "{rendered}").context("writing to stdout")?;
    Ok(())
}

/// Build the resolved JSON view of a document.
fn resolved_view(doc: &Document) -> Result<Value> {
    let mut root = Map::new();
    let default_name = doc.options().default_section.as_str();
    if !doc.defaults().is_empty() {
        root.insert(default_name.to_string(), section_view(doc, default_name)?);
    }
    for name in doc.sections() {
        root.insert(name.to_string(), section_view(doc, name)?);
    }
    Ok(Value::Object(root))
}

fn section_view(doc: &Document, name: &str) -> Result<Value> {
    let mut section = Map::new();
    for (key, value) in doc.items(name)? {
        section.insert(key, Value::String(value));
    }
    Ok(Value::Object(section))
}

//! The `format` command: parse an INI file and write it back in canonical
//! form.

use anyhow::{Context, Result};
use std::io::Write as _;

use crate::cli::{FormatOpts, GlobalOpts};
use crate::ini;
use crate::logging::Logger;

/// Run the `format` command.
///
/// Reads the input fully, parses it, serializes the document, and writes the
/// result to the output path (created or truncated), or to stdout when the
/// output path is `-`. The output is not touched when parsing fails.
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed, or the output
/// cannot be written.
pub fn run(global: &GlobalOpts, opts: &FormatOpts, log: &Logger) -> Result<()> {
    log.stage("Parsing input");
    let doc = super::load_document(&opts.input, global.engine_options(), log)?;

    log.stage("Writing output");
    let rendered = ini::write(&doc);
    if opts.output.as_os_str() == "-" {
        std::io::stdout()
            .lock()
            .write_all(rendered.as_bytes())
            .context("writing to stdout")?;
    } else {
        std::fs::write(&opts.output, &rendered)
            .with_context(|| format!("writing {}", opts.output.display()))?;
        log.info(&format!(
            "wrote {} sections to {}",
            doc.sections().len(),
            opts.output.display()
        ));
    }
    Ok(())
}

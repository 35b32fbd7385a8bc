//! The `get` command: look up a single value.

use anyhow::{Context, Result};
use std::io::Write as _;

use crate::cli::{GetOpts, GlobalOpts};
use crate::logging::Logger;

/// Run the `get` command.
///
/// Prints the value of `section:key` to stdout, resolved through
/// interpolation and default-section fallback unless `--raw` was given.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or the lookup
/// fails (missing section or key, unresolvable placeholder).
pub fn run(global: &GlobalOpts, opts: &GetOpts, log: &Logger) -> Result<()> {
    let doc = super::load_document(&opts.file, global.engine_options(), log)?;
    let value = if opts.raw {
        doc.get_raw(&opts.section, &opts.key)?.to_string()
    } else {
        doc.get(&opts.section, &opts.key)?
    };
    writeln!(std::io::stdout().lock(), "{value}").context("writing to stdout")?;
    Ok(())
}

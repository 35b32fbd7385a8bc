//! The `completions` command: emit shell completion scripts.

use anyhow::Result;
use clap::CommandFactory as _;

use crate::cli::{Cli, CompletionsOpts};

/// Run the `completions` command, writing the script to stdout.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the command signature uniform.
pub fn run(opts: &CompletionsOpts) -> Result<()> {
    let mut command = Cli::command();
    clap_complete::generate(opts.shell, &mut command, "inifmt", &mut std::io::stdout());
    Ok(())
}

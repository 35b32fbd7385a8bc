//! Command-line interface definition.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::ini::{DuplicateKeys, Interpolation, Options};

/// Top-level CLI entry point for the INI round-trip formatter.
#[derive(Parser, Debug)]
#[command(
    name = "inifmt",
    about = "INI configuration parser, inspector, and round-trip formatter",
    version
)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Engine options shared across subcommands.
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Engine options shared across all subcommands.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// Keep key case instead of lowercasing
    #[arg(long, global = true)]
    pub case_sensitive: bool,

    /// Merge duplicate sections and let the last duplicate key win
    #[arg(long, global = true)]
    pub allow_duplicates: bool,

    /// Return values verbatim, without resolving placeholders
    #[arg(long, global = true, conflicts_with = "extended_interpolation")]
    pub no_interpolation: bool,

    /// Use ${section:key} placeholders instead of %(key)s
    #[arg(long, global = true)]
    pub extended_interpolation: bool,

    /// Accept keys without a delimiter or value
    #[arg(long, global = true)]
    pub allow_no_value: bool,

    /// Preferred key/value delimiter for output
    #[arg(long, global = true)]
    pub delimiter: Option<String>,
}

impl GlobalOpts {
    /// Translate the CLI flags into engine [`Options`].
    #[must_use]
    pub fn engine_options(&self) -> Options {
        let mut options = Options::default()
            .with_case_sensitive_keys(self.case_sensitive)
            .with_allow_no_value(self.allow_no_value);
        if self.allow_duplicates {
            options = options
                .with_merge_duplicate_sections(true)
                .with_duplicate_keys(DuplicateKeys::Overwrite);
        }
        if self.no_interpolation {
            options = options.with_interpolation(Interpolation::None);
        } else if self.extended_interpolation {
            options = options.with_interpolation(Interpolation::Extended);
        }
        if let Some(delimiter) = &self.delimiter {
            options = options.with_delimiters([delimiter.clone()]);
        }
        options
    }
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse an INI file and write it back in canonical form
    Format(FormatOpts),
    /// Look up a single value
    Get(GetOpts),
    /// Render a parsed file as JSON
    Dump(DumpOpts),
    /// Generate shell completions
    Completions(CompletionsOpts),
    /// Print version information
    Version,
}

/// Options for the `format` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct FormatOpts {
    /// Input INI file
    pub input: PathBuf,

    /// Output file; `-` writes to stdout
    pub output: PathBuf,
}

/// Options for the `get` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct GetOpts {
    /// INI file to read
    pub file: PathBuf,

    /// Section to look in
    pub section: String,

    /// Key to look up
    pub key: String,

    /// Print the literal stored value without resolving placeholders
    #[arg(long)]
    pub raw: bool,
}

/// Options for the `dump` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct DumpOpts {
    /// INI file to read
    pub file: PathBuf,

    /// Resolve interpolation and include inherited default-section keys
    #[arg(long)]
    pub resolve: bool,
}

/// Options for the `completions` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct CompletionsOpts {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

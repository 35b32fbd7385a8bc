//! CLI entry point for `inifmt`.

use anyhow::Result;
use clap::Parser;

use inifmt::cli::{Cli, Command};
use inifmt::commands;
use inifmt::logging;

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();
    logging::init_subscriber(args.verbose);
    let log = logging::Logger::new(args.verbose);

    match args.command {
        Command::Format(opts) => commands::format::run(&args.global, &opts, &log),
        Command::Get(opts) => commands::get::run(&args.global, &opts, &log),
        Command::Dump(opts) => commands::dump::run(&args.global, &opts, &log),
        Command::Completions(opts) => commands::completions::run(&opts),
        Command::Version => {
            let version = option_env!("INIFMT_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
            println!("inifmt {version}");
            Ok(())
        }
    }
}

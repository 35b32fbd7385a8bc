//! INI round-trip engine.
//!
//! Parses INI-format text into a structured, mutable [`ini::Document`] and
//! serializes it back with round-trip fidelity of structure: same sections,
//! same keys, same order, same literal values. Comments and blank-line
//! placement are not preserved. Values may carry interpolation placeholders
//! (`%(key)s` or `${section:key}`) that are resolved lazily on read, never
//! at parse time and never on write.
//!
//! The public API is organised into three layers:
//!
//! - **[`ini`]** — the engine: parse, document model, serialize, interpolate
//! - **[`cli`]** — argument definitions mapping flags to engine options
//! - **[`commands`]** — top-level subcommand orchestration (`format`, `get`,
//!   `dump`, `completions`)
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod ini;
pub mod logging;

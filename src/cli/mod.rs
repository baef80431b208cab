//! CLI scaffolding shared by the `cdiff`, `cprfx`, `qgjoin`, and `qgstat`
//! binaries. Argument parsing itself lives in each `src/bin/*.rs` (via
//! `clap`'s derive API) since the four tools share no flags beyond
//! `--verbose`; this module holds only what they do share: the stdin
//! sentinel, the verbosity atomic, and the open-file error type.

pub mod common;

//! Shared CLI scaffolding used by all four binaries.
//!
//! Mirrors the teacher's `cli::constants` display-level machinery (a
//! process-global verbosity atomic plus a `displaylevel!` macro) and the
//! `io::file_io` sentinel convention for stdin, reduced to what this crate's
//! batch pipelines actually need: every tool here is a single straight-line
//! pass over an input stream, so there is no op-mode dispatch, no alias
//! detection, no legacy-command handling to port.

use std::fs::File;
use std::io::{self, Read};
use std::sync::atomic::{AtomicU32, Ordering};

/// Sentinel accepted in place of a filename to mean "read from standard input".
pub const STDIN_MARK: &str = "-";

/// 0 = silent, 1 = normal (errors only), 2 = verbose.
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(1);

#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

#[inline]
pub fn set_verbose(verbose: bool) {
    DISPLAY_LEVEL.store(if verbose { 2 } else { 1 }, Ordering::Relaxed);
}

/// Conditionally print to stderr at or above `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::common::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}

/// Errors surfaced at the OS boundary — file-open failures, mainly.
///
/// Kept as a hand-rolled enum (no `thiserror`) with a manual `Display`/`Error`
/// impl, matching the teacher's `Lz4Error`/`Lz4FError` style. `main` wraps
/// these into `anyhow::Error` via `?`.
#[derive(Debug)]
pub enum CliError {
    OpenFailure { path: String, source: io::Error },
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::OpenFailure { path, source } => {
                write!(f, "{}: cannot open: {}", path, source)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::OpenFailure { source, .. } => Some(source),
        }
    }
}

/// Resolve a single optional path argument to a byte source: `None` or
/// [`STDIN_MARK`] means stdin, anything else is opened as a file.
pub fn open_input(path: Option<&str>) -> Result<Box<dyn Read>, CliError> {
    match path {
        None | Some(STDIN_MARK) => Ok(Box::new(io::stdin())),
        Some(p) => File::open(p)
            .map(|f| Box::new(f) as Box<dyn Read>)
            .map_err(|source| CliError::OpenFailure {
                path: p.to_string(),
                source,
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_level_default_is_normal() {
        assert_eq!(display_level(), 1);
    }

    #[test]
    fn set_verbose_round_trips() {
        set_verbose(true);
        assert_eq!(display_level(), 2);
        set_verbose(false);
        assert_eq!(display_level(), 1);
    }

    #[test]
    fn open_input_missing_file_is_open_failure() {
        let err = open_input(Some("/nonexistent/streamtools-test-path")).unwrap_err();
        assert!(matches!(err, CliError::OpenFailure { .. }));
        assert!(err.to_string().contains("cannot open"));
    }
}

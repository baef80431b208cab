//! `cdiff` — command-line entry point for CDIFF (spec §4.6/§6): mask the
//! leading bytes each line shares with the previous one.

use std::io::{self, Write};

use clap::Parser;

use streamtools::cli::common::{open_input, set_verbose};
use streamtools::run_cdiff;

/// Replace each line's common prefix with the previous line with spaces.
#[derive(Parser)]
#[command(name = "cdiff", about = "Mask each line's common prefix with the previous line")]
struct Args {
    /// Snap the mask back to the last whitespace boundary.
    #[arg(short = 'w', long = "whitespace")]
    whitespace: bool,

    /// Print progress diagnostics to stderr.
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Input files, in order; "-" or no files at all means standard input.
    files: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    set_verbose(args.verbose);

    let paths: Vec<Option<String>> = if args.files.is_empty() {
        vec![None]
    } else {
        args.files.into_iter().map(Some).collect()
    };

    let mut inputs = Vec::with_capacity(paths.len());
    for p in &paths {
        inputs.push(open_input(p.as_deref())?);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_cdiff(inputs, args.whitespace, &mut out)?;
    out.flush()?;
    Ok(())
}

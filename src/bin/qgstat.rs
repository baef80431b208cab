//! `qgstat` — command-line entry point for QGSTAT (spec §2): dump
//! `(q-gram, posting_count)` for every non-empty q-gram slot of an input
//! stream, indexed exactly as `qgjoin` indexes LEFT.

use std::io::{self, Write};

use clap::Parser;

use streamtools::cli::common::{open_input, set_verbose};
use streamtools::run_qgstat;

#[derive(Parser)]
#[command(name = "qgstat", about = "Dump q-gram posting counts for a stream of lines")]
struct Args {
    /// Q-gram interleave factor, in bits per folded code.
    #[arg(long = "ileave", default_value_t = 5, value_parser = clap::value_parser!(u8).range(3..=5))]
    ileave: u8,

    /// Print progress diagnostics to stderr.
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Input file; "-" or omitted means standard input.
    file: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    set_verbose(args.verbose);

    let input = open_input(args.file.as_deref())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_qgstat(input, &mut out, args.ileave)?;
    out.flush()?;
    Ok(())
}

//! `qgjoin` — command-line entry point for the QGJ pipeline (spec §2,
//! §4.1–§4.5): approximately join RIGHT lines against LEFT lines by shared
//! folded q-grams.

use std::io::{self, Write};

use clap::Parser;

use streamtools::cli::common::{open_input, set_verbose};
use streamtools::{displaylevel, run_qgjoin};

#[derive(Parser)]
#[command(name = "qgjoin", about = "Approximately join RIGHT lines against LEFT lines by shared q-grams")]
struct Args {
    /// Left-hand (indexed) stream.
    left: Option<String>,

    /// Right-hand (matched) stream; "-" or omitted means standard input.
    right: Option<String>,

    /// Q-gram interleave factor, in bits per folded code.
    #[arg(long = "ileave", default_value_t = 5, value_parser = clap::value_parser!(u8).range(3..=5))]
    ileave: u8,

    /// Print left-stream indexing stats to stderr after building the index.
    #[arg(long = "stats")]
    stats: bool,

    /// Print progress diagnostics to stderr.
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    set_verbose(args.verbose);

    let Some(left_path) = args.left.as_deref() else {
        anyhow::bail!("qgjoin: missing required LEFT argument");
    };
    let left = open_input(Some(left_path))?;
    let right = open_input(args.right.as_deref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stats = run_qgjoin(left, right, &mut out, args.ileave)?;
    out.flush()?;

    if args.stats {
        displaylevel!(
            1,
            "qgjoin: {} factors, {} non-empty q-gram slots\n",
            stats.factors,
            stats.slots
        );
    }
    Ok(())
}

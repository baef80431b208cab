//! `cprfx` — command-line entry point for CPFX (spec §4.7): collapse runs
//! of lines sharing a common prefix into `prefix\tcount` records.

use std::io::{self, Write};

use clap::Parser;

use streamtools::cli::common::{open_input, set_verbose};
use streamtools::run_cprfx;

#[derive(Parser)]
#[command(name = "cprfx", about = "Collapse runs of lines sharing a common prefix into prefix\\tcount records")]
struct Args {
    /// Lower the emission threshold so singleton streaks are also emitted.
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
    run_cprfx(input, args.verbose, &mut out)?;
    out.flush()?;
    Ok(())
}

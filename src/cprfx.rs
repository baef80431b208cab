//! CPFX: streamingly groups adjacent lines by longest common prefix,
//! emitting `(prefix, count)` records once a run of lines stops sharing any
//! prefix at all with what came before (spec §4.7).
//!
//! One run is open at a time: `prev_depth` is the common-prefix length every
//! line folded into the run shares with every other, and `streak` is how
//! many lines that is. Each new line narrows `prev_depth` down to its LCP
//! with the previous line, without ever closing the run — unrelated lines
//! (LCP 0) are the only thing that retires it, emitting `(prev[..prev_depth],
//! streak)` once `streak` clears `threshold`. `threshold` is 1 in normal mode
//! and 0 in `--verbose` mode, where singleton runs are also emitted. End of
//! input flushes whatever run is still open.

use std::io::{self, Read, Write};

use crate::lines::for_each_line;

pub struct CpfxState {
    prev: Vec<u8>,
    prev_depth: usize,
    streak: u64,
}

impl CpfxState {
    pub fn new() -> Self {
        Self {
            prev: Vec::new(),
            prev_depth: 0,
            streak: 0,
        }
    }

    /// Process one line against the current state, returning the retired
    /// `(prefix, count)` record if this line shares nothing with the run
    /// that was open before it.
    pub fn advance(&mut self, line: &[u8], threshold: u64) -> Option<(Vec<u8>, u64)> {
        let cap = line.len().min(self.prev.len());
        let mut i = 0;
        while i < cap && line[i] == self.prev[i] {
            i += 1;
        }

        let mut emitted = None;
        if self.streak > 0 && i == 0 {
            if self.streak > threshold {
                emitted = Some((self.prev[..self.prev_depth].to_vec(), self.streak));
            }
            self.streak = 0;
        }

        if self.streak == 0 {
            self.prev_depth = line.len();
            self.streak = 1;
        } else {
            self.prev_depth = self.prev_depth.min(i);
            self.streak += 1;
        }

        self.prev.clear();
        self.prev.extend_from_slice(line);

        emitted
    }

    /// End-of-input flush: retire whatever run is still open.
    pub fn flush(&mut self, threshold: u64) -> Option<(Vec<u8>, u64)> {
        if self.streak == 0 {
            return None;
        }
        let emitted = if self.streak > threshold {
            Some((self.prev[..self.prev_depth].to_vec(), self.streak))
        } else {
            None
        };
        self.streak = 0;
        emitted
    }
}

impl Default for CpfxState {
    fn default() -> Self {
        Self::new()
    }
}

fn write_record<W: Write>(out: &mut W, prefix: &[u8], count: u64) -> io::Result<()> {
    out.write_all(prefix)?;
    out.write_all(b"\t")?;
    out.write_all(count.to_string().as_bytes())?;
    out.write_all(b"\n")
}

/// Run CPFX over `input`, writing `(prefix\tcount\n)` records to `out`.
/// `verbose` lowers the emission threshold from 1 to 0 so singleton runs
/// are also emitted.
pub fn run_cprfx<R: Read, W: Write>(input: R, verbose: bool, mut out: W) -> io::Result<()> {
    let threshold: u64 = if verbose { 0 } else { 1 };
    let mut state = CpfxState::new();

    for_each_line(input, |line| {
        if let Some((prefix, count)) = state.advance(line, threshold) {
            write_record(&mut out, &prefix, count)?;
        }
        Ok(())
    })?;

    if let Some((prefix, count)) = state.flush(threshold) {
        write_record(&mut out, &prefix, count)?;
    }
    Ok(())
}

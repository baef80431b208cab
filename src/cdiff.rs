//! CDIFF: replaces the leading bytes of each line that match the previous
//! line with spaces, with an optional snap-back to the last whitespace
//! (spec §4.6).
//!
//! State is a single two-line sliding window (`prev`); per spec §6 the
//! multi-file form is the one implemented — `prev` is **not** reset between
//! FILE arguments, so a streak that starts in one file can continue to mask
//! the first line of the next (see `DESIGN.md` for the resolved open
//! question).

use std::io::{self, Read, Write};

use crate::lines::for_each_line;

/// The `prev`/`prev_len` sliding window from spec §4.6, carried across
/// lines (and, in the multi-file CLI, across files).
pub struct CdiffState {
    prev: Vec<u8>,
}

impl CdiffState {
    pub fn new() -> Self {
        Self { prev: Vec::new() }
    }

    /// Compute the boundary up to which `line` shares a common prefix with
    /// the previous line (optionally snapped back to the last whitespace),
    /// then update the state to `line`. Returns the boundary `i`, the
    /// number of leading bytes to mask with spaces.
    pub fn advance(&mut self, line: &[u8], whitespace_snap: bool) -> usize {
        let cap = line.len().min(self.prev.len());
        let mut i = 0;
        while i < cap && line[i] == self.prev[i] {
            i += 1;
        }
        if whitespace_snap {
            while i > 0 && line[i - 1] > 0x20 {
                i -= 1;
            }
        }
        self.prev.clear();
        self.prev.extend_from_slice(line);
        i
    }
}

impl Default for CdiffState {
    fn default() -> Self {
        Self::new()
    }
}

fn write_spaces<W: Write>(out: &mut W, mut n: usize) -> io::Result<()> {
    const SPACES: &[u8] = &[b' '; 64];
    while n > 0 {
        let chunk = n.min(SPACES.len());
        out.write_all(&SPACES[..chunk])?;
        n -= chunk;
    }
    Ok(())
}

/// Run CDIFF over `inputs` in order, sharing one [`CdiffState`] across all
/// of them, writing masked lines to `out`.
pub fn run_cdiff<R, W>(inputs: impl IntoIterator<Item = R>, whitespace_snap: bool, mut out: W) -> io::Result<()>
where
    R: Read,
    W: Write,
{
    let mut state = CdiffState::new();
    for input in inputs {
        for_each_line(input, |line| {
            let i = state.advance(line, whitespace_snap);
            write_spaces(&mut out, i)?;
            out.write_all(&line[i..])?;
            out.write_all(b"\n")
        })?;
    }
    Ok(())
}

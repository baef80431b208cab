//! QGJ pipeline: index the LEFT stream, then stream-match RIGHT against it,
//! emitting `(left_line, right_line, score)` triples (spec §2, §4.4).
//!
//! This module owns no process-wide state (spec §9: "replace global mutable
//! arrays with an explicit `Index` value") — [`build_index`] hands back a
//! [`StringPool`] + [`PostingIndex`] pair that the caller threads into
//! [`run_qgjoin`], which is itself just the right-stream loop plus
//! bookkeeping; all of the interesting algorithm lives in [`crate::matcher`].

use std::io::{self, Read, Write};

use crate::index::PostingIndex;
use crate::lines::for_each_line;
use crate::matcher::MatchWorkspace;
use crate::pool::StringPool;
use crate::qgram::{hash_width_bits, QGramExtractor};

/// Summary of the left-stream indexing pass, used by `qgjoin --stats`.
pub struct JoinStats {
    pub factors: usize,
    pub slots: usize,
}

/// Index every line of `left` as a factor, at the given interleave.
pub fn build_index<R: Read>(left: R, ileave: u8) -> io::Result<(StringPool, PostingIndex)> {
    let mut pool = StringPool::new();
    let mut index = PostingIndex::new(hash_width_bits(ileave));
    for_each_line(left, |line| {
        let id = pool.intern(line);
        for h in QGramExtractor::new(line, ileave) {
            index.bang(h, id);
        }
        Ok(())
    })?;
    Ok((pool, index))
}

fn write_record<W: Write>(out: &mut W, left: &[u8], right: &[u8], score: u32) -> io::Result<()> {
    out.write_all(left)?;
    out.write_all(b"\t")?;
    out.write_all(right)?;
    out.write_all(b"\t")?;
    out.write_all(score.to_string().as_bytes())?;
    out.write_all(b"\n")
}

/// Run the full QGJ pipeline: index `left`, then match every line of
/// `right` against it, writing matches to `out`. Returns indexing stats.
pub fn run_qgjoin<L: Read, R: Read, W: Write>(
    left: L,
    right: R,
    mut out: W,
    ileave: u8,
) -> io::Result<JoinStats> {
    let (pool, index) = build_index(left, ileave)?;
    let nfactor = pool.len();
    let stats = JoinStats {
        factors: nfactor,
        slots: index.non_empty_slots().count(),
    };

    let mut ws = MatchWorkspace::new();
    for_each_line(right, |line| {
        if let Some(score) = ws.match_line(line, &index, ileave, nfactor) {
            for i in 0..ws.winners().len() {
                let f = ws.winners()[i];
                write_record(&mut out, pool.lookup(f), line, score)?;
            }
        }
        Ok(())
    })?;

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(left: &str, right: &str) -> String {
        let mut out = Vec::new();
        run_qgjoin(left.as_bytes(), right.as_bytes(), &mut out, 5).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn trivial_identical_line_matches() {
        let out = run("hello world\n", "hello world\n");
        assert!(out.starts_with("hello world\thello world\t"));
        let score: u32 = out.trim_end().split('\t').nth(2).unwrap().parse().unwrap();
        assert!(score >= 3);
    }

    #[test]
    fn digit_folding_matches_equally() {
        let a = run("ACME2017\n", "ACME2017\n");
        let b = run("ACME2017\n", "ACMEZ017\n");
        assert_eq!(a, b);
    }

    #[test]
    fn unrelated_lines_do_not_match() {
        let out = run("alpha beta\n", "zzzzzzzzzz\n");
        assert_eq!(out, "");
    }

    #[test]
    fn matches_are_ascending_by_factor_order() {
        let left = "hello world\nhello world again\n";
        let out = run(left, "hello world\n");
        let lines: Vec<&str> = out.lines().collect();
        if lines.len() == 2 {
            assert_eq!(lines[0].split('\t').next(), Some("hello world"));
        }
    }

    #[test]
    fn determinism_across_runs() {
        let a = run("the quick brown fox\n", "the quick brown fox jumps\n");
        let b = run("the quick brown fox\n", "the quick brown fox jumps\n");
        assert_eq!(a, b);
    }

    #[test]
    fn missing_trailing_newline_is_tolerated() {
        let mut out = Vec::new();
        run_qgjoin(
            "hello world".as_bytes(),
            "hello world".as_bytes(),
            &mut out,
            5,
        )
        .unwrap();
        assert!(!out.is_empty());
    }
}

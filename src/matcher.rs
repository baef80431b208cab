//! Per-right-line matcher: position bitmaps, longest-run-of-ones, and the
//! score gate (spec §4.4–§4.5). This is the hottest and most intricate part
//! of the system; [`MatchWorkspace`] is allocated once per `qgjoin` run and
//! reused across every right-side line, exactly as spec §4.4 step 6
//! prescribes ("the workspace is zeroed... for the next right line").

use crate::index::PostingIndex;
use crate::pool::FactorId;
use crate::qgram::QGramExtractor;

#[inline]
fn set_bit(words: &mut [u64], i: usize) {
    words[i / 64] |= 1u64 << (i % 64);
}

/// Longest run of consecutive 1-bits in `x`.
///
/// `lstrk(0) == 0`, `lstrk(u64::MAX) == 64`. Runs at most O(popcount(x))
/// iterations: each pass skips the trailing zero run, then consumes one
/// run of ones, by shifting it off.
pub fn lstrk(mut x: u64) -> u32 {
    let mut max = 0u32;
    while x != 0 {
        let tz = x.trailing_zeros();
        x >>= tz;
        let run = (!x).trailing_zeros();
        if run > max {
            max = run;
        }
        if run >= 64 {
            break;
        }
        x >>= run;
    }
    max
}

/// Per-right-line scratch space: one 64-bit position bitmap per factor ID
/// (`qc`), a candidate bitmap marking factors that received any bit (`cc`),
/// and the reused winning-factor-ID buffer.
///
/// A q-gram position beyond 63 wraps onto the same bit (`i % 64`), per
/// spec §9: this bounds the scorable position range to ~68 folded code
/// points per line. Longer lines still match, just with positions beyond
/// 63 aliased onto earlier ones — preserved rather than widened, since
/// widening would change which lines pass the score gate.
pub struct MatchWorkspace {
    qc: Vec<u64>,
    cc: Vec<u64>,
    winners: Vec<FactorId>,
}

impl MatchWorkspace {
    pub fn new() -> Self {
        Self {
            qc: Vec::new(),
            cc: Vec::new(),
            winners: Vec::new(),
        }
    }

    fn reset(&mut self, nfactor: usize) {
        self.qc.clear();
        self.qc.resize(nfactor, 0);
        self.cc.clear();
        self.cc.resize(nfactor.div_ceil(64), 0);
        self.winners.clear();
    }

    /// Match `right_line` against `index` (built over `nfactor` left-stream
    /// factors, at the same `ileave` used to build it).
    ///
    /// Returns the published score (`max - 1`) when the line passes the
    /// gate; the winning factor IDs, in ascending order, are then available
    /// via [`MatchWorkspace::winners`]. Returns `None` ("gate skip", not an
    /// error) otherwise.
    pub fn match_line(
        &mut self,
        right_line: &[u8],
        index: &PostingIndex,
        ileave: u8,
        nfactor: usize,
    ) -> Option<u32> {
        self.reset(nfactor);

        let xs: Vec<u32> = QGramExtractor::new(right_line, ileave).collect();
        let ncode = xs.len();
        if ncode == 0 {
            return None;
        }

        let mut nq: u64 = 0;
        for (i, &h) in xs.iter().enumerate() {
            let bit = i % 64;
            let posting = index.postings(h);
            for &f in posting {
                self.qc[(f - 1) as usize] |= 1u64 << bit;
            }
            nq += posting.len() as u64;
        }
        if nq == 0 {
            return None;
        }

        for &h in &xs {
            for &f in index.postings(h) {
                set_bit(&mut self.cc, (f - 1) as usize);
            }
        }

        let mut max: u32 = 3;
        for (word_idx, &word0) in self.cc.iter().enumerate() {
            let mut word = word0;
            while word != 0 {
                let bit = word.trailing_zeros() as usize;
                word &= word - 1;
                let f = (word_idx * 64 + bit) as FactorId + 1;
                let s = lstrk(self.qc[(f - 1) as usize]);
                if s > max {
                    max = s;
                    self.winners.clear();
                    self.winners.push(f);
                } else if s == max {
                    self.winners.push(f);
                }
            }
        }

        if self.winners.is_empty() {
            return None;
        }

        let sco = max as f64 / ncode as f64;
        let refv = ncode as f64 / (nq as f64).sqrt();
        if sco + refv < 1.0 {
            self.winners.clear();
            return None;
        }

        Some(max - 1)
    }

    /// Winning factor IDs from the most recent [`match_line`] call that
    /// returned `Some`, in ascending order.
    pub fn winners(&self) -> &[FactorId] {
        &self.winners
    }
}

impl Default for MatchWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

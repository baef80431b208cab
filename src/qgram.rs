//! Q-gram extraction: turns a byte sequence into a lazy sequence of 5-gram
//! hashes over the folded alphabet ([`crate::fold`]).
//!
//! The hash is a rolling window of `Q = 5` folded codes, each contributing
//! `ileave` bits (`ileave` in `3..=5`, default 5 for a 25-bit hash space).
//! Separator runs (space/hyphen/underscore) are condensed to nothing, so
//! `"foo  bar"`, `"foo-bar"`, and `"foo_bar"` extract identically. Bytes that
//! fold to 0 ("ignore") still occupy a hash position unless the byte
//! immediately preceding them was a separator — this mirrors the source
//! behavior described in the folding-table notes and is preserved verbatim
//! rather than "cleaned up", since other parts of the system (the zero-hash
//! filter below) depend on it.
//!
//! A window's hash of all-zero bits is never emitted: this filters out both
//! "not enough codes yet" windows and the rare legitimate window that
//! happens to hash to zero. [`QGramExtractor`] is a plain iterator — finite,
//! not restartable, and non-allocating beyond its own state.

use crate::fold::{fold, Q};

/// Number of bits of hash space for a given interleave factor.
pub fn hash_width_bits(ileave: u8) -> u32 {
    Q as u32 * ileave as u32
}

pub struct QGramExtractor<'a> {
    bytes: &'a [u8],
    pos: usize,
    x: u32,
    j: usize,
    condens: bool,
    ileave: u8,
    code_mask: u32,
    window_mask: u32,
}

impl<'a> QGramExtractor<'a> {
    /// `ileave` must be 3, 4, or 5.
    pub fn new(bytes: &'a [u8], ileave: u8) -> Self {
        assert!((3..=5).contains(&ileave), "ileave must be in 3..=5");
        let width = hash_width_bits(ileave);
        Self {
            bytes,
            pos: 0,
            x: 0,
            j: 0,
            condens: true,
            ileave,
            code_mask: (1u32 << ileave) - 1,
            window_mask: (1u32 << width) - 1,
        }
    }
}

impl<'a> Iterator for QGramExtractor<'a> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        while self.pos < self.bytes.len() {
            let h = fold(self.bytes[self.pos]);
            self.pos += 1;

            let shift = h > 0 || (h == 0 && !self.condens);
            if shift {
                let code = (h as u32) & self.code_mask;
                self.x = ((self.x << self.ileave) | code) & self.window_mask;
                self.j += 1;
            }
            self.condens = h < 0;

            if shift && self.j >= Q && self.x != 0 {
                return Some(self.x);
            }
        }
        None
    }
}

/// Convenience: collect all q-grams of `bytes` at the default interleave (5).
pub fn extract(bytes: &[u8]) -> Vec<u32> {
    QGramExtractor::new(bytes, 5).collect()
}

//! QGSTAT: a peripheral consumer of the q-gram indexing primitives. Indexes
//! stdin exactly as `qgjoin` indexes LEFT, then dumps `(q-gram, posting
//! length)` for every non-empty hash slot (spec §2, §4.1 "Output encoding
//! note").

use std::io::{self, Read, Write};

use crate::fold::decode_code;
use crate::qgjoin::build_index;
use crate::qgram::Q;

/// Decode a hash back to its `Q`-character rendering: fixed 5-bit groups,
/// most significant first, rendered as `code + '@'` — independent of the
/// `ileave` the hash was packed with, matching the original `mkstring`.
fn decode_qgram(hash: u32) -> [u8; Q] {
    const BITS: u32 = 5;
    let mut out = [0u8; Q];
    let mask = (1u32 << BITS) - 1;
    for (i, slot) in out.iter_mut().enumerate() {
        let shift = (Q - 1 - i) as u32 * BITS;
        let code = (hash >> shift) & mask;
        *slot = decode_code(code);
    }
    out
}

/// Index `input` and write `(q-gram\tposting_count\n)` for every slot with
/// at least one factor, in ascending hash order.
pub fn run_qgstat<R: Read, W: Write>(input: R, mut out: W, ileave: u8) -> io::Result<()> {
    let (_pool, index) = build_index(input, ileave)?;
    for (h, postings) in index.non_empty_slots() {
        let token = decode_qgram(h);
        out.write_all(&token)?;
        out.write_all(b"\t")?;
        out.write_all(postings.len().to_string().as_bytes())?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

//! Shared LF-terminated line splitting, used by all four pipelines.
//!
//! Trailing LF on the final record is tolerated but not required (spec §6);
//! internal NUL bytes are not handled specially — this is a byte-oriented
//! splitter, not a text decoder.

use std::io::{self, BufRead, BufReader, Read};

/// Call `f` once per record of `r`, LF stripped. The final record is still
/// delivered even if it has no trailing LF.
pub fn for_each_line<R: Read>(r: R, mut f: impl FnMut(&[u8]) -> io::Result<()>) -> io::Result<()> {
    let mut reader = BufReader::new(r);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf)?;
        if n == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        f(&buf)?;
    }
    Ok(())
}

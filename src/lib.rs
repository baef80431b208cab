//! `streamtools` — byte-oriented, single-pass stream text utilities: an
//! approximate line-join over folded q-gram indexing (QGJ/QGSTAT) and two
//! common-prefix compressors (CDIFF/CPFX). Every pipeline here reads its
//! input once, front to back, and holds state proportional to what it has
//! seen so far — no regex, no Unicode segmentation, no persistence.

pub mod cli;

pub mod fold;
pub mod qgram;

pub mod pool;
pub mod index;
pub mod matcher;

pub mod lines;

pub mod qgjoin;
pub mod qgstat;

pub mod cdiff;
pub mod cprfx;

pub use fold::{fold, is_separator, Q};
pub use qgram::{hash_width_bits, QGramExtractor};

pub use pool::{FactorId, StringPool};
pub use index::PostingIndex;
pub use matcher::{lstrk, MatchWorkspace};

pub use qgjoin::{build_index, run_qgjoin, JoinStats};
pub use qgstat::run_qgstat;

pub use cdiff::{run_cdiff, CdiffState};
pub use cprfx::{run_cprfx, CpfxState};

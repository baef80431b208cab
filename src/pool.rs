//! String pool and factor interning (spec §4.2).
//!
//! `StringPool` is an append-only byte buffer; a parallel `offsets` array
//! gives each interned "factor" (a left-stream line) a dense, 1-based,
//! immutable ID. Factor 0 is reserved — `offsets[0]` is always 0 and is
//! never the end of a real factor.

/// A dense, 1-based factor identifier. 0 is reserved ("unused").
pub type FactorId = u32;

pub struct StringPool {
    pool: Vec<u8>,
    offsets: Vec<u32>,
}

impl StringPool {
    pub fn new() -> Self {
        let mut offsets = Vec::with_capacity(512);
        offsets.push(0);
        Self {
            pool: Vec::with_capacity(4096),
            offsets,
        }
    }

    /// Append `bytes` as a new factor and return its ID.
    pub fn intern(&mut self, bytes: &[u8]) -> FactorId {
        self.pool.extend_from_slice(bytes);
        self.offsets.push(self.pool.len() as u32);
        (self.offsets.len() - 1) as FactorId
    }

    /// Number of interned factors.
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up the bytes of factor `id`. Panics on `id == 0` or out-of-range,
    /// matching the invariant that factor IDs handed out by `intern` are the
    /// only valid inputs.
    pub fn lookup(&self, id: FactorId) -> &[u8] {
        let id = id as usize;
        assert!(id >= 1 && id < self.offsets.len(), "invalid factor id {id}");
        let start = self.offsets[id - 1] as usize;
        let end = self.offsets[id] as usize;
        &self.pool[start..end]
    }
}

impl Default for StringPool {
    fn default() -> Self {
        Self::new()
    }
}

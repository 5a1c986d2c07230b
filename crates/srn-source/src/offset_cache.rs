/// A lazily built, size-specialized cache of newline byte offsets.
///
/// The element width is chosen from the buffer's own length rather than
/// fixed at `usize`: most source files are a handful of kilobytes, so an
/// 8- or 16-bit offset halves (or quarters) the cache's footprint relative
/// to always storing `usize`.
#[derive(Debug, Clone)]
pub enum OffsetCache {
    U8(Vec<u8>),
    U16(Vec<u16>),
    U32(Vec<u32>),
    U64(Vec<u64>),
}

impl OffsetCache {
    /// Scan `bytes` once, recording the offset of every `\n`.
    pub fn build(bytes: &[u8]) -> Self {
        let offsets = bytes.iter().enumerate().filter(|(_, b)| **b == b'\n').map(|(i, _)| i);

        match bytes.len() {
            n if n <= u8::MAX as usize => OffsetCache::U8(offsets.map(|o| o as u8).collect()),
            n if n <= u16::MAX as usize => OffsetCache::U16(offsets.map(|o| o as u16).collect()),
            n if n <= u32::MAX as usize => OffsetCache::U32(offsets.map(|o| o as u32).collect()),
            _ => OffsetCache::U64(offsets.map(|o| o as u64).collect()),
        }
    }

    /// The offset of the `idx`-th recorded `\n`, if present.
    pub fn get(&self, idx: usize) -> Option<usize> {
        match self {
            OffsetCache::U8(v) => v.get(idx).map(|&o| o as usize),
            OffsetCache::U16(v) => v.get(idx).map(|&o| o as usize),
            OffsetCache::U32(v) => v.get(idx).map(|&o| o as usize),
            OffsetCache::U64(v) => v.get(idx).map(|&o| o as usize),
        }
    }

    /// How many `\n` bytes were recorded.
    pub fn len(&self) -> usize {
        match self {
            OffsetCache::U8(v) => v.len(),
            OffsetCache::U16(v) => v.len(),
            OffsetCache::U32(v) => v.len(),
            OffsetCache::U64(v) => v.len(),
        }
    }

    /// Whether the buffer this cache was built from contained no `\n`.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

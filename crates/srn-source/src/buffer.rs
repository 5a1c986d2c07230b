use crate::offset_cache::OffsetCache;
use srn_location::LocationRange;
use std::sync::OnceLock;

/// A contiguous, immutable region of source bytes, plus the location the
/// import that pulled it in occurred at (unknown for root namespaces) and a
/// lazily built line-offset cache.
#[derive(Debug)]
pub struct SourceBuffer {
    content: Vec<u8>,
    import_location: LocationRange,
    offset_cache: OnceLock<OffsetCache>,
}

impl SourceBuffer {
    pub(crate) fn new(content: Vec<u8>, import_location: LocationRange) -> Self {
        Self { content, import_location, offset_cache: OnceLock::new() }
    }

    /// The buffer's raw bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.content
    }

    /// Where the import that loaded this buffer occurred.
    pub fn import_location(&self) -> &LocationRange {
        &self.import_location
    }

    /// The byte offset the given 1-based line starts at, building the
    /// newline-offset cache on first use.
    ///
    /// `line_no == 0` is treated as `1`. Returns `None` once `line_no`
    /// exceeds the number of lines the buffer actually has.
    pub fn pointer_for_line(&self, line_no: u32) -> Option<usize> {
        let line_no = line_no.max(1);
        if line_no == 1 {
            return Some(0);
        }

        let cache = self.offset_cache.get_or_init(|| OffsetCache::build(&self.content));
        let idx = (line_no - 2) as usize;
        cache.get(idx).map(|offset| offset + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_line_is_the_buffer_start() {
        let buffer = SourceBuffer::new(b"aa\nbb\ncc".to_vec(), LocationRange::unknown("user"));
        assert_eq!(buffer.pointer_for_line(0), Some(0));
        assert_eq!(buffer.pointer_for_line(1), Some(0));
    }

    #[test]
    fn later_lines_follow_each_recorded_newline() {
        let buffer = SourceBuffer::new(b"aa\nbb\ncc".to_vec(), LocationRange::unknown("user"));
        assert_eq!(buffer.pointer_for_line(2), Some(3));
        assert_eq!(buffer.pointer_for_line(3), Some(6));
        assert_eq!(buffer.pointer_for_line(4), None);
    }
}

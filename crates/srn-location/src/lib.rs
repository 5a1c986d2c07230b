//! Source location tracking for the reader and everything downstream of it.
//!
//! Every AST node and every error carries a [`LocationRange`]. A `Location`
//! names the namespace and (optional) file the position came from, plus the
//! 1-based line/column and, when available, a byte offset into the
//! originating buffer. Namespace and filename are kept behind `Arc<str>` so
//! cloning a `Location` is two refcount bumps, never an allocation.

mod range;

pub use range::LocationRange;

use std::sync::Arc;

/// A single point in source, or an explicitly-unknown point.
///
/// `Location` never borrows from a `SourceBuffer` directly: the `offset`
/// field names a byte position that a `SourceManager` can resolve back into
/// buffer text on demand. This keeps `Location` free of lifetimes so it can
/// be stored on AST nodes and errors without tying them to the manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Namespace this location is reported against.
    pub namespace: Arc<str>,
    /// Originating file, if the namespace was loaded from disk.
    pub filename: Option<Arc<str>>,
    /// Byte offset into the originating buffer, when known.
    pub offset: Option<usize>,
    /// 1-based line number.
    pub line: u16,
    /// 1-based column number.
    pub column: u16,
    /// Whether this location actually points somewhere.
    pub known: bool,
}

impl Location {
    /// Create a location at the start of a namespace's buffer (line 1, column 1).
    pub fn start(namespace: impl Into<Arc<str>>, filename: Option<Arc<str>>) -> Self {
        Self {
            namespace: namespace.into(),
            filename,
            offset: Some(0),
            line: 1,
            column: 1,
            known: true,
        }
    }

    /// Create an explicitly unknown location for a namespace.
    ///
    /// Renders as `<unknown>:0:0` per the error-display contract.
    pub fn unknown(namespace: impl Into<Arc<str>>) -> Self {
        Self {
            namespace: namespace.into(),
            filename: None,
            offset: None,
            line: 0,
            column: 0,
            known: false,
        }
    }

    /// Advance this location by one consumed byte `b`, in place.
    ///
    /// Column advances by one; on `\n`, line advances and column resets to 1.
    pub fn advance(&mut self, b: u8) {
        if let Some(offset) = self.offset.as_mut() {
            *offset += 1;
        }
        if b == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.known {
            return write!(f, "<unknown>:0:0");
        }
        match &self.filename {
            Some(file) => write!(f, "{}:{}:{}", file, self.line, self.column),
            None => write!(f, "{}:{}:{}", self.namespace, self.line, self.column),
        }
    }
}

//! LL(2) recursive-descent reader: bytes in, an [`Ast`] or a structured
//! [`srn_error::Error`] out.
//!
//! The reader never backtracks beyond one byte of lookahead and never
//! tokenizes as a separate phase — each top-level `read_expr` call both
//! classifies and consumes the next form directly from the byte slice,
//! tracking [`Location`] as it goes.

mod reader;

pub use reader::Reader;

use srn_ast::Ast;
use srn_error::Result;

/// Parse `buf` as a sequence of top-level forms belonging to `namespace`.
///
/// `filename` is attached to every location produced, when given. On the
/// first lexical error, partially built forms are discarded and the error
/// is returned.
pub fn read(buf: &[u8], namespace: &str, filename: Option<&str>) -> Result<Ast> {
    Reader::new(buf, namespace, filename).read()
}

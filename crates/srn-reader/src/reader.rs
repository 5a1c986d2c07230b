use srn_ast::{Ast, Expression};
use srn_error::{Error, Kind, Result};
use srn_location::{Location, LocationRange};
use std::sync::Arc;

/// A single-pass, LL(2) recursive-descent reader.
///
/// `advance` consumes one byte at a time; `peek` looks ahead up to any `k`
/// without consuming. Reading never backtracks past what `peek` already
/// inspected — once a byte is consumed via `advance`, the reader commits to
/// having read it.
pub struct Reader<'buf> {
    buf: &'buf [u8],
    pos: usize,
    loc: Location,
    namespace: Arc<str>,
}

impl<'buf> Reader<'buf> {
    /// Build a reader over `buf` for namespace `namespace`, optionally tagged
    /// with the file it came from.
    pub fn new(buf: &'buf [u8], namespace: &str, filename: Option<&str>) -> Self {
        let namespace: Arc<str> = Arc::from(namespace);
        let filename = filename.map(Arc::from);
        Self { buf, pos: 0, loc: Location::start(namespace.clone(), filename), namespace }
    }

    /// Look ahead `k` bytes without consuming (`k = 0` is the next
    /// unconsumed byte). Returns `None` past end of input.
    pub fn peek(&self, k: usize) -> Option<u8> {
        self.buf.get(self.pos + k).copied()
    }

    /// Consume and return the next byte along with the location it occupied,
    /// advancing line/column bookkeeping. Returns `None` at end of input.
    pub fn advance(&mut self) -> Option<(u8, Location)> {
        let b = *self.buf.get(self.pos)?;
        let loc = self.loc.clone();
        self.pos += 1;
        self.loc.advance(b);
        Some((b, loc))
    }

    /// Consume a byte already confirmed present by `peek`. Only ever called
    /// right after a successful lookahead, so the `None` arm is unreachable.
    fn bump(&mut self) -> (u8, Location) {
        match self.advance() {
            Some(v) => v,
            None => unreachable!("bump() called with no lookahead byte available"),
        }
    }

    fn is_whitespace(b: u8) -> bool {
        matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b',')
    }

    fn is_identifier_char(b: u8) -> bool {
        b >= 0x20 && b != 0x7f && b != b'(' && b != b')' && !Self::is_whitespace(b)
    }

    /// Skip whitespace (including comma) and `;`-to-end-of-line comments.
    fn skip_whitespace(&mut self) {
        loop {
            match self.peek(0) {
                Some(b) if Self::is_whitespace(b) => {
                    self.bump();
                }
                Some(b';') => {
                    while let Some(b) = self.peek(0) {
                        if b == b'\n' {
                            break;
                        }
                        self.bump();
                    }
                }
                _ => break,
            }
        }
    }

    /// Parse the whole buffer into a sequence of top-level forms.
    pub fn read(&mut self) -> Result<Ast> {
        let mut forms = Vec::new();
        loop {
            self.skip_whitespace();
            if self.peek(0).is_none() {
                break;
            }
            forms.push(self.read_expr()?);
        }
        tracing::debug!(namespace = %self.namespace, forms = forms.len(), "reader: parsed top-level forms");
        Ok(forms)
    }

    fn read_expr(&mut self) -> Result<Expression> {
        self.skip_whitespace();
        match self.peek(0) {
            Some(b'(') => self.read_list(),
            Some(b'"') => self.read_string(),
            Some(b':') => self.read_keyword(),
            Some(b) if b.is_ascii_digit() => self.read_number(),
            Some(b'-') if self.peek(1).is_some_and(|n| n.is_ascii_digit()) => self.read_number(),
            Some(_) => self.read_symbol(),
            None => unreachable!("read_expr called at end of input"),
        }
    }

    fn read_list(&mut self) -> Result<Expression> {
        let (_, open) = self.bump(); // consume '('
        let mut children = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek(0) {
                None => {
                    return Err(Error::new(Kind::EOFWhileScanningAList, LocationRange::point(open)));
                }
                Some(b')') => {
                    let (_, close) = self.bump();
                    return Ok(Expression::list(children, LocationRange::new(open, close)));
                }
                Some(_) => children.push(self.read_expr()?),
            }
        }
    }

    fn read_number(&mut self) -> Result<Expression> {
        let start = self.loc.clone();
        let mut digits = String::new();
        let mut negative = false;
        let mut end = start.clone();

        if self.peek(0) == Some(b'-') {
            negative = true;
            let (_, loc) = self.bump();
            end = loc;
        }

        match self.peek(0) {
            Some(b) if b.is_ascii_digit() => {}
            _ => {
                return Err(Error::new(
                    Kind::InvalidDigitForNumber,
                    LocationRange::new(start, self.loc.clone()),
                ));
            }
        }

        while let Some(b) = self.peek(0) {
            if !b.is_ascii_digit() {
                break;
            }
            let (b, loc) = self.bump();
            digits.push(b as char);
            end = loc;
        }

        let mut float = false;
        if self.peek(0) == Some(b'.') {
            float = true;
            let (_, loc) = self.bump();
            digits.push('.');
            end = loc;

            while let Some(b) = self.peek(0) {
                if !b.is_ascii_digit() {
                    break;
                }
                let (b, loc) = self.bump();
                digits.push(b as char);
                end = loc;
            }

            if self.peek(0) == Some(b'.') {
                return Err(Error::new(Kind::TwoFloatPoints, LocationRange::point(self.loc.clone())));
            }
        }

        Ok(Expression::number(digits, negative, float, LocationRange::new(start, end)))
    }

    fn read_string(&mut self) -> Result<Expression> {
        let (_, open) = self.bump(); // consume opening '"'
        let mut content = String::new();
        loop {
            match self.advance() {
                None => {
                    return Err(Error::new(
                        Kind::EOFWhileScanningAString,
                        LocationRange::point(open),
                    ));
                }
                Some((b'"', close)) => {
                    return Ok(Expression::string(content, LocationRange::new(open, close)));
                }
                Some((b'\\', _)) => match self.advance() {
                    None => {
                        return Err(Error::new(
                            Kind::EOFWhileScanningAString,
                            LocationRange::point(open),
                        ));
                    }
                    Some((escaped, _)) => content.push(match escaped {
                        b'n' => '\n',
                        b't' => '\t',
                        b'r' => '\r',
                        b'"' => '"',
                        b'\\' => '\\',
                        other => other as char,
                    }),
                },
                Some((b, _)) => content.push(b as char),
            }
        }
    }

    fn read_keyword(&mut self) -> Result<Expression> {
        let (_, open) = self.bump(); // consume ':'
        let mut name = String::new();
        let mut end = open.clone();
        while let Some(b) = self.peek(0) {
            if !Self::is_identifier_char(b) {
                break;
            }
            let (b, loc) = self.bump();
            name.push(b as char);
            end = loc;
        }
        if name.is_empty() {
            return Err(Error::new(Kind::InvalidCharacterForSymbol, LocationRange::point(open)));
        }
        Ok(Expression::keyword(name, LocationRange::new(open, end)))
    }

    fn read_symbol(&mut self) -> Result<Expression> {
        let start = self.loc.clone();
        let mut text = String::new();
        let mut end = start.clone();
        while let Some(b) = self.peek(0) {
            if !Self::is_identifier_char(b) {
                break;
            }
            let (b, loc) = self.bump();
            text.push(b as char);
            end = loc;
        }
        if text.is_empty() {
            return Err(Error::new(
                Kind::InvalidCharacterForSymbol,
                LocationRange::new(start.clone(), start),
            ));
        }
        Ok(Expression::symbol(&text, &self.namespace, LocationRange::new(start, end)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    fn read(src: &str) -> Result<Ast> {
        crate::read(src.as_bytes(), "user", None)
    }

    fn read_err(src: &str) -> std::result::Result<Error, Box<dyn std::error::Error>> {
        match read(src) {
            Ok(_) => Err("expected a parse error, got Ok".into()),
            Err(e) => Ok(e),
        }
    }

    #[test]
    fn minimal_list() -> TestResult {
        let ast = read("(a 1)")?;
        assert_eq!(ast.len(), 1);
        let Expression::List { children, range } = &ast[0] else {
            return Err("top form is not a list".into());
        };
        assert_eq!(children.len(), 2);
        assert_eq!(range.start.column, 1);
        assert_eq!(range.end.column, 5);
        match &children[0] {
            Expression::Symbol { namespace_part, name_part, .. } => {
                assert_eq!(namespace_part, "user");
                assert_eq!(name_part, "a");
            }
            _ => return Err("first child is not a symbol".into()),
        }
        match &children[1] {
            Expression::Number { digits, negative, float, .. } => {
                assert_eq!(digits, "1");
                assert!(!negative);
                assert!(!float);
            }
            _ => return Err("second child is not a number".into()),
        }
        Ok(())
    }

    #[test]
    fn float_with_two_dots_is_an_error() -> TestResult {
        let err = read_err("1.2.3")?;
        assert_eq!(err.kind, Kind::TwoFloatPoints);
        assert_eq!(err.range.start.line, 1);
        assert_eq!(err.range.start.column, 4);
        Ok(())
    }

    #[test]
    fn unterminated_list_is_anchored_at_the_open_paren() -> TestResult {
        let err = read_err("(a")?;
        assert_eq!(err.kind, Kind::EOFWhileScanningAList);
        assert_eq!(err.range.start.column, 1);
        Ok(())
    }

    #[test]
    fn qualified_symbol_splits_on_slash() -> TestResult {
        let ast = read("core/map")?;
        match &ast[0] {
            Expression::Symbol { namespace_part, name_part, .. } => {
                assert_eq!(namespace_part, "core");
                assert_eq!(name_part, "map");
                Ok(())
            }
            _ => Err("single form is not a symbol".into()),
        }
    }

    #[test]
    fn negative_number_is_recognized() -> TestResult {
        let ast = read("-5")?;
        match &ast[0] {
            Expression::Number { digits, negative, float, .. } => {
                assert_eq!(digits, "5");
                assert!(negative);
                assert!(!float);
                Ok(())
            }
            _ => Err("single form is not a number".into()),
        }
    }

    #[test]
    fn bare_minus_is_a_symbol() -> TestResult {
        let ast = read("-")?;
        match &ast[0] {
            Expression::Symbol { name_part, .. } => {
                assert_eq!(name_part, "-");
                Ok(())
            }
            _ => Err("single form is not a symbol".into()),
        }
    }

    #[test]
    fn string_literal_decodes_escapes() -> TestResult {
        let ast = read("\"a\\nb\"")?;
        match &ast[0] {
            Expression::String { content, .. } => {
                assert_eq!(content, "a\nb");
                Ok(())
            }
            _ => Err("single form is not a string".into()),
        }
    }

    #[test]
    fn unterminated_string_is_anchored_at_the_open_quote() -> TestResult {
        let err = read_err("\"")?;
        assert_eq!(err.kind, Kind::EOFWhileScanningAString);
        assert_eq!(err.range.start.column, 1);
        Ok(())
    }

    #[test]
    fn keyword_reads_its_name() -> TestResult {
        let ast = read(":foo")?;
        match &ast[0] {
            Expression::Keyword { name, .. } => {
                assert_eq!(name, "foo");
                Ok(())
            }
            _ => Err("single form is not a keyword".into()),
        }
    }

    #[test]
    fn bare_colon_is_invalid() -> TestResult {
        let err = read_err(": ")?;
        assert_eq!(err.kind, Kind::InvalidCharacterForSymbol);
        Ok(())
    }

    #[test]
    fn comment_is_elided_like_whitespace() -> TestResult {
        let with_comment = read("; comment\n(a)")?;
        let without_comment = read("(a)")?;
        assert_eq!(with_comment.len(), without_comment.len());
        Ok(())
    }

    #[test]
    fn comma_is_whitespace() -> TestResult {
        let ast = read("(a, b)")?;
        assert_eq!(ast[0].children().map(|c| c.len()), Some(2));
        Ok(())
    }
}

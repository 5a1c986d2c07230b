use crate::NamespaceData;
use srn_location::LocationRange;

/// Every form the reader can produce, plus the `Namespace` value a
/// namespace's data can be embedded as.
///
/// Sealed by construction: there is no escape hatch for callers to add
/// variants, matching the "closed match" visitor obligation the original
/// single-inheritance design implied.
#[derive(Debug)]
pub enum Expression {
    Symbol { namespace_part: String, name_part: String, range: LocationRange },
    Number { digits: String, negative: bool, float: bool, range: LocationRange },
    String { content: String, range: LocationRange },
    Keyword { name: String, range: LocationRange },
    List { children: Vec<Expression>, range: LocationRange },
    Error { tag: String, message: String, range: LocationRange },
    Namespace { data: Box<NamespaceData>, range: LocationRange },
}

impl Expression {
    /// The location range every variant carries.
    pub fn range(&self) -> &LocationRange {
        match self {
            Expression::Symbol { range, .. }
            | Expression::Number { range, .. }
            | Expression::String { range, .. }
            | Expression::Keyword { range, .. }
            | Expression::List { range, .. }
            | Expression::Error { range, .. }
            | Expression::Namespace { range, .. } => range,
        }
    }

    /// Build a `Symbol`, splitting on the first `/` into namespace/name
    /// parts. A symbol without `/` inherits `current_namespace` as its
    /// namespace part.
    pub fn symbol(text: &str, current_namespace: &str, range: LocationRange) -> Self {
        let (namespace_part, name_part) = match text.split_once('/') {
            Some((ns, name)) => (ns.to_string(), name.to_string()),
            None => (current_namespace.to_string(), text.to_string()),
        };
        Expression::Symbol { namespace_part, name_part, range }
    }

    /// Build a `Number` from its textual digits.
    pub fn number(digits: impl Into<String>, negative: bool, float: bool, range: LocationRange) -> Self {
        Expression::Number { digits: digits.into(), negative, float, range }
    }

    /// Build a `String` expression from already-decoded content.
    pub fn string(content: impl Into<String>, range: LocationRange) -> Self {
        Expression::String { content: content.into(), range }
    }

    /// Build a `Keyword` expression.
    pub fn keyword(name: impl Into<String>, range: LocationRange) -> Self {
        Expression::Keyword { name: name.into(), range }
    }

    /// Build a `List` from already-parsed children.
    pub fn list(children: Vec<Expression>, range: LocationRange) -> Self {
        Expression::List { children, range }
    }

    /// Build an `Error` expression carrying a keyword tag and message.
    pub fn error(tag: impl Into<String>, message: impl Into<String>, range: LocationRange) -> Self {
        Expression::Error { tag: tag.into(), message: message.into(), range }
    }

    /// Whether this is a `List`.
    pub fn is_list(&self) -> bool {
        matches!(self, Expression::List { .. })
    }

    /// The children of a `List`, or `None` for any other variant.
    pub fn children(&self) -> Option<&[Expression]> {
        match self {
            Expression::List { children, .. } => Some(children),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn range() -> LocationRange {
        LocationRange::unknown("user")
    }

    #[test]
    fn symbol_without_slash_inherits_current_namespace() {
        let expr = Expression::symbol("b", "a", range());
        match expr {
            Expression::Symbol { namespace_part, name_part, .. } => {
                assert_eq!(namespace_part, "a");
                assert_eq!(name_part, "b");
            }
            _ => unreachable!("symbol() always builds a Symbol"),
        }
    }

    #[test]
    fn symbol_with_slash_splits_on_first_occurrence() {
        let expr = Expression::symbol("core/map", "user", range());
        match expr {
            Expression::Symbol { namespace_part, name_part, .. } => {
                assert_eq!(namespace_part, "core");
                assert_eq!(name_part, "map");
            }
            _ => unreachable!("symbol() always builds a Symbol"),
        }
    }

    #[test]
    fn list_reports_its_children() {
        let expr = Expression::list(
            vec![Expression::number("1", false, false, range())],
            range(),
        );
        assert_eq!(expr.children().map(|c| c.len()), Some(1));
        assert!(expr.is_list());
    }

    #[test]
    fn non_list_has_no_children() {
        let expr = Expression::number("1", false, false, range());
        assert_eq!(expr.children(), None);
        assert!(!expr.is_list());
    }
}

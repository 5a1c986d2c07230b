use crate::Expression;
use srn_env::EnvironmentArena;

/// The data an `Expression::Namespace` value owns: a name, an optional
/// originating file, the forms accumulated so far, and the stack of lexical
/// environments built while expanding them.
///
/// This is pure data — no JIT handle, no compilation-phase gate. The `srn-
/// namespace` crate's `Namespace` type composes a `NamespaceData` with those
/// external concerns rather than extending this enum, which keeps the AST
/// free of dependencies on the options/JIT layer.
#[derive(Debug)]
pub struct NamespaceData {
    pub name: String,
    pub filename: Option<String>,
    pub forms: Vec<Expression>,
    pub envs: EnvironmentArena<Expression>,
}

impl NamespaceData {
    /// A namespace with no forms yet and a freshly created root environment.
    pub fn new(name: impl Into<String>, filename: Option<String>) -> Self {
        let mut envs = EnvironmentArena::new();
        envs.create(None);
        Self { name: name.into(), filename, forms: Vec::new(), envs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_creates_the_root_environment() {
        let data = NamespaceData::new("user", None);
        assert_eq!(data.envs.len(), 1);
        assert!(data.forms.is_empty());
    }
}

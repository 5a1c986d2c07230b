//! The namespace: a compilation unit owning its forms and its stack of
//! lexical environments, plus the phase gate that decides how deep
//! `expand_tree` pushes new forms.
//!
//! A [`Namespace`] composes [`srn_ast::NamespaceData`] (pure data) with a
//! borrowed [`JitHandle`] and a pluggable [`SemanticAnalyzer`]. It never
//! extends the handle's lifetime beyond its own borrow, and it never
//! subclasses `NamespaceData` — the AST crate stays free of any dependency
//! on JIT or options concerns.

mod analyzer;

pub use analyzer::{PassThroughAnalyzer, SemanticAnalyzer};

use srn_ast::{Ast, Expression, NamespaceData};
use srn_env::EnvId;
use srn_error::Result;
use srn_options::{CompilationPhase, JitHandle};

/// An owning compilation unit: forms plus a stack of lexical environments,
/// gated by the compilation phase the borrowed JIT handle reports.
pub struct Namespace<'jit, J: JitHandle> {
    data: NamespaceData,
    jit: &'jit J,
    analyzer: Box<dyn SemanticAnalyzer>,
}

impl<'jit, J: JitHandle> Namespace<'jit, J> {
    /// Construct a namespace with a fresh root environment and the default
    /// pass-through semantic analyzer.
    pub fn new(jit: &'jit J, name: impl Into<String>, filename: Option<String>) -> Self {
        Self::with_analyzer(jit, name, filename, Box::new(PassThroughAnalyzer))
    }

    /// Construct a namespace with an explicit semantic-analysis hook.
    pub fn with_analyzer(
        jit: &'jit J,
        name: impl Into<String>,
        filename: Option<String>,
        analyzer: Box<dyn SemanticAnalyzer>,
    ) -> Self {
        Self { data: NamespaceData::new(name, filename), jit, analyzer }
    }

    /// Push a new environment owned by this namespace, returning its id.
    pub fn create_env(&mut self, parent: Option<EnvId>) -> EnvId {
        self.data.envs.create(parent)
    }

    /// The first environment created for this namespace.
    pub fn root_env(&self) -> EnvId {
        self.data.envs.root()
    }

    /// Insert or overwrite `name` in the root environment.
    pub fn define(&mut self, name: impl Into<String>, node: Expression) {
        let root = self.root_env();
        self.data.envs.insert(root, name, node);
    }

    /// Append `ast` to this namespace's tree, running the semantic-analysis
    /// hook unless the configured phase is `Parse`.
    pub fn expand_tree(&mut self, ast: Ast) -> Result<()> {
        self.data.forms.extend(ast);

        let phase = self.jit.options().compilation_phase;
        if phase == CompilationPhase::Parse {
            tracing::trace!(namespace = %self.data.name, "expand_tree: parse phase, skipping analysis");
            return Ok(());
        }

        let root = self.data.envs.root();
        tracing::debug!(namespace = %self.data.name, ?phase, "expand_tree: running semantic analysis");
        self.analyzer.analyze(root, &mut self.data.envs, &self.data.forms)
    }

    /// Read access to the accumulated forms.
    pub fn tree(&self) -> &Ast {
        &self.data.forms
    }

    /// This namespace's name.
    pub fn name(&self) -> &str {
        &self.data.name
    }

    /// The file this namespace was loaded from, if any.
    pub fn filename(&self) -> Option<&str> {
        self.data.filename.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use srn_location::LocationRange;
    use srn_options::{JitError, Options, SymbolAddress};

    struct StubJit(Options);

    impl JitHandle for StubJit {
        fn options(&self) -> &Options {
            &self.0
        }
        fn load_module(&mut self, _name: &str, _ir_bytes: &[u8]) -> std::result::Result<(), JitError> {
            Ok(())
        }
        fn lookup(&self, _symbol: &str) -> Option<SymbolAddress> {
            None
        }
        fn invoke_packed(&self, _symbol: &str, _args: &[u64]) -> std::result::Result<u64, JitError> {
            Ok(0)
        }
    }

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    fn range() -> LocationRange {
        LocationRange::unknown("user")
    }

    #[test]
    fn construction_creates_the_root_environment() {
        let jit = StubJit(Options::default());
        let ns = Namespace::new(&jit, "user", None);
        assert_eq!(ns.data.envs.len(), 1);
        assert_eq!(ns.root_env(), ns.data.envs.root());
        assert!(ns.tree().is_empty());
    }

    #[test]
    fn parse_phase_appends_without_running_analysis() -> TestResult {
        let jit = StubJit(Options::default());
        let mut ns = Namespace::new(&jit, "user", None);
        let ast = vec![Expression::number("1", false, false, range())];
        ns.expand_tree(ast)?;
        assert_eq!(ns.tree().len(), 1);
        Ok(())
    }

    #[test]
    fn non_parse_phase_runs_the_pass_through_analyzer() -> TestResult {
        let options =
            Options { compilation_phase: srn_options::CompilationPhase::Analysis, ..Options::default() };
        let jit = StubJit(options);
        let mut ns = Namespace::new(&jit, "user", None);
        let ast = vec![Expression::number("1", false, false, range())];
        ns.expand_tree(ast)?;
        assert_eq!(ns.tree().len(), 1);
        Ok(())
    }

    #[test]
    fn define_inserts_into_the_root_environment() {
        let jit = StubJit(Options::default());
        let mut ns = Namespace::new(&jit, "user", None);
        ns.define("x", Expression::number("1", false, false, range()));
        let root = ns.root_env();
        assert!(matches!(
            ns.data.envs.lookup(root, "x"),
            Some(Expression::Number { .. })
        ));
    }
}

use srn_ast::Expression;
use srn_env::{EnvId, EnvironmentArena};
use srn_error::Result;

/// The semantic-analysis hook `expand_tree` invokes once a namespace's
/// compilation phase has moved past `Parse`.
///
/// The hook's interface is fixed by the core — a namespace's root
/// environment, its environment arena, and the forms accumulated so far —
/// but its algorithm is not: the source this workspace is modeled on ships
/// this pass disabled, so [`PassThroughAnalyzer`] is the only implementation
/// provided here.
pub trait SemanticAnalyzer {
    fn analyze(
        &mut self,
        root: EnvId,
        envs: &mut EnvironmentArena<Expression>,
        forms: &[Expression],
    ) -> Result<()>;
}

/// The default hook: accepts every form without touching any environment.
#[derive(Debug, Default)]
pub struct PassThroughAnalyzer;

impl SemanticAnalyzer for PassThroughAnalyzer {
    fn analyze(
        &mut self,
        _root: EnvId,
        _envs: &mut EnvironmentArena<Expression>,
        _forms: &[Expression],
    ) -> Result<()> {
        Ok(())
    }
}

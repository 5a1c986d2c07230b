//! Compilation options and the external JIT handle interface.
//!
//! Everything downstream of the reader/namespace core — the JIT engine
//! itself, MLIR lowering, object caching — lives outside this workspace.
//! This crate only pins down the shapes that cross the boundary: the
//! [`Options`] struct the core reads, the [`CompilationPhase`] gate that
//! `Namespace::expand_tree` consults, and the [`JitHandle`] trait a real JIT
//! implementation would satisfy.

use std::fmt;

/// How far down the pipeline a namespace's forms should be pushed when
/// `expand_tree` runs, ordered from earliest to latest.
///
/// Only `Parse` is consulted by this workspace's `Namespace::expand_tree`;
/// the later variants describe phases the (absent) downstream lowering
/// pipeline would recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum CompilationPhase {
    #[default]
    Parse,
    Analysis,
    Slir,
    Mlir,
    Lir,
    Ir,
    NoOptimization,
    O1,
    O2,
    O3,
}

/// The recognized configuration surface. Fields with no effect inside this
/// workspace (the JIT-facing ones) are still carried, since `JitHandle::
/// options` is the one place a real JIT implementation reads them from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub verbose: bool,
    pub with_colors: bool,
    pub jit_enable_object_cache: bool,
    pub jit_enable_gdb_notification_listener: bool,
    pub jit_enable_perf_notification_listener: bool,
    pub jit_lazy: bool,
    pub target_triple: String,
    pub host_triple: String,
    pub compilation_phase: CompilationPhase,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            verbose: false,
            with_colors: false,
            jit_enable_object_cache: false,
            jit_enable_gdb_notification_listener: false,
            jit_enable_perf_notification_listener: false,
            jit_lazy: true,
            target_triple: String::new(),
            host_triple: String::new(),
            compilation_phase: CompilationPhase::Parse,
        }
    }
}

/// An address-sized symbol handle returned by [`JitHandle::lookup`].
///
/// Left as a bare integer rather than a raw pointer: the JIT that resolves
/// it lives outside this workspace, and nothing here dereferences it.
pub type SymbolAddress = usize;

/// An opaque error surfaced by a [`JitHandle`] implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JitError(pub String);

impl fmt::Display for JitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for JitError {}

/// The external JIT engine's interface, as consumed (not owned) by
/// `Namespace`. A real implementation loads compiled modules, resolves
/// symbols, and invokes packed calling conventions; the core here only
/// reads `options()` to gate `expand_tree`.
pub trait JitHandle {
    /// The options this handle was configured with.
    fn options(&self) -> &Options;

    /// Register a compiled module's bytes under `name`.
    fn load_module(&mut self, name: &str, ir_bytes: &[u8]) -> Result<(), JitError>;

    /// Resolve `symbol` to an address, if it has been loaded.
    fn lookup(&self, symbol: &str) -> Option<SymbolAddress>;

    /// Invoke `symbol` with a packed argument list, returning a packed result.
    fn invoke_packed(&self, symbol: &str, args: &[u64]) -> Result<u64, JitError>;
}

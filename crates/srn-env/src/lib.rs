//! Lexically chained name-to-value environments.
//!
//! An `Environment<V>` is a single scope: a local map plus an optional
//! parent. Lookup walks the parent chain; insertion always targets the
//! local scope and shadows whatever an ancestor bound under the same key.
//!
//! Parents are referenced by index rather than by pointer or `Rc`, the same
//! arena-plus-id shape the teacher workspace uses for lexical scope chains
//! (`ScopeId`/`Scope::parent: Option<ScopeId>`). [`EnvironmentArena`] owns the
//! backing `Vec` and is what a namespace actually stores as its "environment
//! stack" — individual `Environment` values never outlive it.

use std::collections::HashMap;

/// Stable identifier for an environment owned by an [`EnvironmentArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnvId(usize);

/// A single lexical scope: a local map plus an optional parent.
#[derive(Debug, Clone)]
pub struct Environment<V> {
    parent: Option<EnvId>,
    bindings: HashMap<String, V>,
}

impl<V> Environment<V> {
    fn new(parent: Option<EnvId>) -> Self {
        Self { parent, bindings: HashMap::new() }
    }

    /// The parent of this scope, if any.
    pub fn parent(&self) -> Option<EnvId> {
        self.parent
    }

    /// Insert or overwrite a binding in this scope only.
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        self.bindings.insert(key.into(), value);
    }

    /// Look up a binding in this scope only (no parent walk).
    pub fn get_local(&self, key: &str) -> Option<&V> {
        self.bindings.get(key)
    }
}

/// The owned collection of environments belonging to one namespace.
///
/// Environments are pushed and never removed; a namespace's first `create`
/// call produces the root environment (`parent = None`), asserted to exist
/// by [`EnvironmentArena::root`].
#[derive(Debug, Clone, Default)]
pub struct EnvironmentArena<V> {
    envs: Vec<Environment<V>>,
}

impl<V> EnvironmentArena<V> {
    /// An empty arena with no environments yet.
    pub fn new() -> Self {
        Self { envs: Vec::new() }
    }

    /// Push a new environment owned by this arena, returning its id.
    ///
    /// The first call (on an empty arena) creates the root environment;
    /// callers should pass `parent = None` for that call.
    pub fn create(&mut self, parent: Option<EnvId>) -> EnvId {
        let id = EnvId(self.envs.len());
        self.envs.push(Environment::new(parent));
        id
    }

    /// The root environment's id. Panics only if called before any
    /// environment has been created, which a well-formed namespace never
    /// does (construction always creates the root first).
    pub fn root(&self) -> EnvId {
        debug_assert!(!self.envs.is_empty(), "EnvironmentArena::root called with no environments");
        EnvId(0)
    }

    /// Insert or overwrite a binding directly in the given scope.
    pub fn insert(&mut self, id: EnvId, key: impl Into<String>, value: V) {
        self.envs[id.0].insert(key, value);
    }

    /// Look up `key` starting at `id`, walking the parent chain.
    pub fn lookup(&self, id: EnvId, key: &str) -> Option<&V> {
        let mut current = Some(id);
        while let Some(cur) = current {
            let env = &self.envs[cur.0];
            if let Some(value) = env.get_local(key) {
                return Some(value);
            }
            current = env.parent();
        }
        None
    }

    /// Borrow the environment at `id`.
    pub fn get(&self, id: EnvId) -> &Environment<V> {
        &self.envs[id.0]
    }

    /// Number of environments currently owned by this arena.
    pub fn len(&self) -> usize {
        self.envs.len()
    }

    /// Whether any environment has been created yet.
    pub fn is_empty(&self) -> bool {
        self.envs.is_empty()
    }
}

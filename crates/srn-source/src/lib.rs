//! The source buffer registry: an append-only store of loaded source bytes,
//! the namespace-name-to-buffer index, and load-path resolution that turns a
//! dotted namespace name into a file on disk.
//!
//! [`SourceManager::read_namespace`] is the single entry point that ties the
//! reader and the namespace model together: resolve a name on the load
//! path, register its bytes, parse them, and hand back an analyzed
//! [`srn_namespace::Namespace`].

mod buffer;
mod offset_cache;

pub use buffer::SourceBuffer;

use srn_error::{Error, Kind, Result};
use srn_location::LocationRange;
use srn_namespace::Namespace;
use srn_options::JitHandle;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File extension every namespace file is expected to carry.
pub const DEFAULT_SUFFIX: &str = "srn";

/// Stable, 1-based identifier for a buffer owned by a [`SourceManager`].
/// Never reused; `0` would be the reserved "invalid" sentinel, but this
/// type simply never constructs that value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferId(usize);

impl BufferId {
    /// The 1-based integer this id wraps.
    pub fn get(self) -> usize {
        self.0
    }
}

/// Registry of loaded source buffers and the canonical namespace-name to
/// buffer-id mapping.
#[derive(Debug, Default)]
pub struct SourceManager {
    buffers: Vec<SourceBuffer>,
    namespace_index: HashMap<String, BufferId>,
    load_paths: Vec<PathBuf>,
}

impl SourceManager {
    /// An empty manager with no load paths configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the ordered list of directory roots probed when resolving a
    /// namespace name to a file.
    pub fn set_load_paths(&mut self, paths: Vec<PathBuf>) {
        self.load_paths = paths;
    }

    /// Register `content`, returning a fresh, never-reused id.
    pub fn add_buffer(&mut self, content: Vec<u8>, import_location: LocationRange) -> BufferId {
        let id = BufferId(self.buffers.len() + 1);
        self.buffers.push(SourceBuffer::new(content, import_location));
        id
    }

    /// Whether `id` names a buffer currently held by this manager.
    pub fn is_valid_id(&self, id: BufferId) -> bool {
        id.0 >= 1 && id.0 <= self.buffers.len()
    }

    /// Borrow the buffer `id` names, if it is valid.
    pub fn get_buffer(&self, id: BufferId) -> Option<&SourceBuffer> {
        id.0.checked_sub(1).and_then(|index| self.buffers.get(index))
    }

    /// The buffer id a namespace name currently resolves to, if it has been loaded.
    pub fn buffer_id_for_namespace(&self, name: &str) -> Option<BufferId> {
        self.namespace_index.get(name).copied()
    }

    /// Replace every `.` in a dotted namespace name with the platform path
    /// separator, without appending an extension.
    pub fn convert_namespace_to_path(name: &str) -> PathBuf {
        name.split('.').collect()
    }

    /// Probe each load-path root in declared order for `name`'s file,
    /// returning the first hit's bytes and the full path they were read
    /// from. Transient I/O errors on one root do not abort the search.
    pub fn find_file_in_load_path(&self, name: &str) -> Option<(Vec<u8>, PathBuf)> {
        let relative = Self::convert_namespace_to_path(name);
        for root in &self.load_paths {
            let mut candidate = root.join(&relative);
            candidate.set_extension(DEFAULT_SUFFIX);
            match fs::read(&candidate) {
                Ok(content) => return Some((content, candidate)),
                Err(error) => {
                    tracing::trace!(root = %root.display(), %error, "find_file_in_load_path: probe missed");
                    continue;
                }
            }
        }
        None
    }

    /// Resolve `name` on the load path, register its buffer, parse it, and
    /// return an analyzed [`Namespace`] bound to `jit`.
    pub fn read_namespace<'jit, J: JitHandle>(
        &mut self,
        jit: &'jit J,
        name: &str,
        import_location: LocationRange,
    ) -> Result<Namespace<'jit, J>> {
        let (content, full_path) = self
            .find_file_in_load_path(name)
            .ok_or_else(|| Error::new(Kind::NSLoadError, import_location.clone()))?;

        let id = self.add_buffer(content, import_location);
        self.namespace_index.insert(name.to_string(), id);

        let filename = full_path.to_string_lossy().into_owned();
        let ast = srn_reader::read(self.buffers[id.0 - 1].bytes(), name, Some(&filename))?;

        tracing::info!(namespace = name, filename = %filename, forms = ast.len(), "read_namespace: loaded");

        let mut namespace = Namespace::new(jit, name, Some(filename));
        namespace.expand_tree(ast)?;
        Ok(namespace)
    }

    /// The byte offset the given 1-based line of buffer `id` starts at.
    pub fn get_pointer_for_line_number(&self, id: BufferId, line_no: u32) -> Option<usize> {
        self.get_buffer(id)?.pointer_for_line(line_no)
    }
}

/// Join a namespace's file-layout path fragment under `root`, for callers
/// (such as the CLI) that need the same convention `find_file_in_load_path`
/// uses without going through a full [`SourceManager`].
pub fn namespace_file_path(root: &Path, name: &str) -> PathBuf {
    let mut path = root.join(SourceManager::convert_namespace_to_path(name));
    path.set_extension(DEFAULT_SUFFIX);
    path
}

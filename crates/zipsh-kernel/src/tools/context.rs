//! Execution context for tools.

use std::path::PathBuf;

use crate::archive::NO_VFS_NAME;
use crate::vfs::{NodeId, Vfs, VfsResult};

use super::traits::ToolSchema;

/// Session state passed to every tool.
///
/// Owns the filesystem tree outright; there is exactly one context per
/// session and nothing else can observe the tree while a tool runs.
#[derive(Debug)]
pub struct ExecContext {
    /// The in-memory filesystem.
    pub vfs: Vfs,
    /// Current working directory. Always a directory.
    pub cwd: NodeId,
    /// Raw input lines, in the order they were accepted.
    pub history: Vec<String>,
    /// Archive the tree was loaded from, if any.
    pub vfs_zip: Option<PathBuf>,
    /// Startup script configured for this session, if any.
    pub startup: Option<PathBuf>,
    /// Display name shown in the prompt.
    pub vfs_name: String,
    /// Tool schemas for the help command.
    pub tool_schemas: Vec<ToolSchema>,
}

impl ExecContext {
    /// Create a context over `vfs` with the cwd at its root.
    pub fn new(vfs: Vfs) -> Self {
        let cwd = vfs.root();
        Self {
            vfs,
            cwd,
            history: Vec::new(),
            vfs_zip: None,
            startup: None,
            vfs_name: NO_VFS_NAME.to_string(),
            tool_schemas: Vec::new(),
        }
    }

    /// Resolve a path against the current directory.
    pub fn resolve(&self, path: &str) -> VfsResult<NodeId> {
        self.vfs.resolve(path, self.cwd)
    }

    /// Change the current directory.
    pub fn set_cwd(&mut self, dir: NodeId) {
        self.cwd = dir;
    }

    /// Absolute path of the current directory.
    pub fn cwd_path(&self) -> String {
        self.vfs.path(self.cwd)
    }

    /// The session prompt: `[<vfs name>] <cwd>$ `.
    pub fn prompt(&self) -> String {
        format!("[{}] {}$ ", self.vfs_name, self.cwd_path())
    }
}

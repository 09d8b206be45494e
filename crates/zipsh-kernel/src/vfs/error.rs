//! Errors produced by tree lookups and mutations.

use thiserror::Error;

/// Result type for VFS operations.
pub type VfsResult<T> = Result<T, VfsError>;

/// VFS operation errors.
///
/// Messages are written to be prefixed by the failing command, e.g.
/// `cd: No such file or directory: /nope`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VfsError {
    /// Lookup failed. Carries the path exactly as the caller requested it.
    #[error("No such file or directory: {0}")]
    NotFound(String),
    #[error("not a directory: {0}")]
    NotADirectory(String),
    #[error("cannot move root")]
    MoveRoot,
    #[error("cannot move '{0}' into itself")]
    MoveIntoSelf(String),
}

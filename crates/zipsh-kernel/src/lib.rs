//! zipsh-kernel: the core of zipsh.
//!
//! This crate provides:
//!
//! - **VFS**: an in-memory directory tree with path resolution
//! - **Archive**: zip ingestion, including `.b64` binary payloads
//! - **Lexer**: shell-word tokenization of command lines
//! - **Tools**: the `Tool` trait, registry, and builtin commands
//! - **Kernel**: the session state machine driving all of the above
//!
//! ```
//! use zipsh_kernel::{Kernel, KernelConfig};
//!
//! let mut kernel = Kernel::new(KernelConfig::default()).unwrap();
//! let outcome = kernel.run_line("pwd", false);
//! assert_eq!(outcome.result.out, "/\n");
//! ```

pub mod archive;
pub mod kernel;
pub mod lexer;
pub mod result;
pub mod tools;
pub mod vfs;

pub use archive::{load_archive, LoadError, LoadedArchive};
pub use kernel::{Kernel, KernelConfig, LineOutcome};
pub use result::ExecResult;
pub use vfs::{Node, NodeId, Vfs, VfsError};

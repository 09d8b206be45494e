//! Virtual filesystem for zipsh.
//!
//! The whole filesystem lives in memory:
//!
//! ```text
//! Vfs
//! ├── nodes: [Option<Node>]   # arena slots, addressed by NodeId
//! └── root: NodeId            # the only node without a parent
//! ```
//!
//! Nothing is ever written back to the host disk. The tree is populated once
//! by the archive ingestor; after that only `chmod` and `mv` change it.

mod error;
mod node;
mod resolve;

pub use error::{VfsError, VfsResult};
pub use node::{Node, NodeId, NodeKind, Vfs, DIR_MODE, FILE_MODE};

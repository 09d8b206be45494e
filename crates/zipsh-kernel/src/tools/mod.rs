//! Tool system for zipsh.
//!
//! Every command is a tool: a name, a schema used for usage and help text,
//! and an `execute` function over the session context.
//!
//! # Architecture
//!
//! ```text
//! ToolRegistry
//! └── Builtins (ls, cd, pwd, history, tree, chmod, mv, conf-dump, help)
//! ```
//!
//! `exit` is not a tool; the kernel intercepts it before dispatch.

mod builtin;
mod context;
mod registry;
mod traits;

pub use builtin::register_builtins;
pub use context::ExecContext;
pub use registry::ToolRegistry;
pub use traits::{ParamSchema, Tool, ToolArgs, ToolSchema};

//! Built-in tools for zipsh.
//!
//! These are the only commands a session knows about.

mod cd;
mod chmod;
mod conf_dump;
mod help;
mod history;
mod ls;
mod mv;
mod pwd;
mod tree;

use super::ToolRegistry;

/// Register all built-in tools with the registry.
pub fn register_builtins(registry: &mut ToolRegistry) {
    registry.register(cd::Cd);
    registry.register(chmod::Chmod);
    registry.register(conf_dump::ConfDump);
    registry.register(help::Help);
    registry.register(history::History);
    registry.register(ls::Ls);
    registry.register(mv::Mv);
    registry.register(pwd::Pwd);
    registry.register(tree::Tree);
}

/// Fixture shared by the builtin unit tests.
///
/// ```text
/// /
/// ├── a
/// │   └── x        "hello"
/// ├── b
/// └── bin.dat      binary, 3 bytes
/// ```
#[cfg(test)]
pub(crate) fn make_ctx() -> super::ExecContext {
    use crate::vfs::{Node, Vfs};

    let mut vfs = Vfs::new();
    let root = vfs.root();
    let a = vfs.add(root, Node::directory("a")).unwrap();
    vfs.add(a, Node::file("x", "hello", false)).unwrap();
    vfs.add(root, Node::directory("b")).unwrap();
    vfs.add(root, Node::file("bin.dat", vec![0u8, 1, 2], true)).unwrap();
    super::ExecContext::new(vfs)
}

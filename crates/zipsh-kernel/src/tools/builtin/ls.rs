//! ls — List directory contents.

use crate::result::ExecResult;
use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};
use crate::vfs::Node;

/// Ls tool: list directory contents in long form.
pub struct Ls;

impl Tool for Ls {
    fn name(&self) -> &str {
        "ls"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("ls", "List directory contents").param(ParamSchema::optional(
            "path",
            "File or directory to list (default: current directory)",
        ))
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let path = args.get(0).unwrap_or("");

        let target = match ctx.resolve(path) {
            Ok(id) => id,
            Err(e) => return ExecResult::failure(1, format!("ls: {e}")),
        };

        let vfs = &ctx.vfs;
        if vfs.is_dir(target) {
            ExecResult::success_lines(
                vfs.children(target)
                    .map(|(_, child)| format_entry(vfs.node(child))),
            )
        } else {
            ExecResult::success_lines([format_entry(vfs.node(target))])
        }
    }
}

/// `drwxr-xr-x\tdir\tname` or `-rw-r--r--\ttxt\tname\t12B`.
fn format_entry(node: &Node) -> String {
    let mode = format_mode(node.perms, node.is_dir());
    if node.is_dir() {
        format!("{mode}\tdir\t{}", node.name)
    } else {
        let kind = if node.is_binary() { "bin" } else { "txt" };
        format!("{mode}\t{kind}\t{}\t{}B", node.name, node.size())
    }
}

/// Render permission bits as a ten-character mode string.
fn format_mode(mode: u32, is_dir: bool) -> String {
    let mut out = String::with_capacity(10);
    out.push(if is_dir { 'd' } else { '-' });
    for shift in [6, 3, 0] {
        let bits = (mode >> shift) & 0o7;
        out.push(if bits & 0o4 != 0 { 'r' } else { '-' });
        out.push(if bits & 0o2 != 0 { 'w' } else { '-' });
        out.push(if bits & 0o1 != 0 { 'x' } else { '-' });
    }
    out
}

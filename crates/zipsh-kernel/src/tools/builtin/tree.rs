//! tree — Display directory structure.

use crate::result::ExecResult;
use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};
use crate::vfs::{NodeId, Vfs};

/// Tree tool: display directory structure with box-drawing connectors.
pub struct Tree;

impl Tool for Tree {
    fn name(&self) -> &str {
        "tree"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("tree", "Display directory structure").param(ParamSchema::optional(
            "path",
            "Directory to display (default: current directory)",
        ))
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let path = args.get(0).unwrap_or("");

        let target = match ctx.resolve(path) {
            Ok(id) => id,
            Err(e) => return ExecResult::failure(1, format!("tree: {e}")),
        };

        if !ctx.vfs.is_dir(target) {
            return ExecResult::success_lines([ctx.vfs.node(target).name.as_str()]);
        }

        let mut output = String::new();
        format_traditional(&ctx.vfs, target, "", &mut output);
        ExecResult::success(output)
    }
}

fn format_traditional(vfs: &Vfs, dir: NodeId, prefix: &str, output: &mut String) {
    let children: Vec<_> = vfs.children(dir).collect();

    for (i, (name, child)) in children.iter().enumerate() {
        let is_last_child = i == children.len() - 1;
        let connector = if is_last_child { "└── " } else { "├── " };

        output.push_str(prefix);
        output.push_str(connector);
        output.push_str(name);
        output.push('\n');

        if vfs.is_dir(*child) {
            let new_prefix = if is_last_child {
                format!("{prefix}    ")
            } else {
                format!("{prefix}│   ")
            };
            format_traditional(vfs, *child, &new_prefix, output);
        }
    }
}

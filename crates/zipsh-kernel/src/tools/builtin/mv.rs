//! mv — Move (rename) files and directories.
//!
//! `mv SRC DST` relocates the node at SRC. The last segment of DST decides
//! the outcome: if it names an existing directory, SRC moves inside it and
//! keeps its name; otherwise SRC is renamed to that segment and placed in the
//! directory formed by the preceding segments, replacing whatever was there.

use crate::result::ExecResult;
use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};
use crate::vfs::NodeId;

/// Mv tool: move/rename files and directories.
pub struct Mv;

impl Tool for Mv {
    fn name(&self) -> &str {
        "mv"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("mv", "Move (rename) files and directories")
            .param(ParamSchema::required("SRC", "Source path"))
            .param(ParamSchema::required("DST", "Destination path or directory"))
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let (Some(source), Some(dest), 2) = (args.get(0), args.get(1), args.len()) else {
            return ExecResult::failure(1, format!("mv: usage: {}", self.schema().usage()));
        };

        let src = match ctx.resolve(source) {
            Ok(id) => id,
            Err(e) => return ExecResult::failure(1, format!("mv: {e}")),
        };
        if ctx.vfs.parent(src).is_none() {
            return ExecResult::failure(1, "mv: cannot move root");
        }

        let (dest_dir, name) = match destination(ctx, src, dest) {
            Ok(target) => target,
            Err(msg) => return ExecResult::failure(1, format!("mv: {msg}")),
        };

        if let Err(e) = ctx.vfs.move_node(src, dest_dir, &name) {
            return ExecResult::failure(1, format!("mv: {e}"));
        }

        // The cwd may have lived inside a directory the move replaced.
        if !ctx.vfs.contains(ctx.cwd) {
            ctx.set_cwd(dest_dir);
        }
        ExecResult::success("")
    }
}

/// Work out the directory SRC lands in and its name there.
///
/// Directory segments of `dest` are looked up literally: `.` and `..` get
/// no special treatment and must exist as real children to match.
fn destination(ctx: &ExecContext, src: NodeId, dest: &str) -> Result<(NodeId, String), String> {
    let vfs = &ctx.vfs;
    let dest = dest.strip_suffix('/').unwrap_or(dest);
    let base = if dest.starts_with('/') { vfs.root() } else { ctx.cwd };

    let parts: Vec<&str> = dest.split('/').filter(|s| !s.is_empty()).collect();
    let Some((last, dir_parts)) = parts.split_last() else {
        return Err("invalid destination".to_string());
    };

    let mut dest_dir = base;
    for part in dir_parts {
        match vfs.get(dest_dir, part) {
            Some(id) if vfs.is_dir(id) => dest_dir = id,
            Some(_) => return Err("destination component is not a directory".to_string()),
            None => {
                return Err(format!(
                    "destination path not found: {}",
                    dir_parts.join("/")
                ))
            }
        }
    }

    if matches!(*last, "." | "..") {
        return Err("invalid destination".to_string());
    }

    match vfs.get(dest_dir, last) {
        Some(existing) if vfs.is_dir(existing) => Ok((existing, vfs.node(src).name.clone())),
        _ => Ok((dest_dir, (*last).to_string())),
    }
}

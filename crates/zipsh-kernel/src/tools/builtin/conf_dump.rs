//! conf-dump — Print session configuration as key=value lines.

use std::path::Path;

use crate::result::ExecResult;
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// ConfDump tool: show archive, startup script, and cwd settings.
pub struct ConfDump;

impl Tool for ConfDump {
    fn name(&self) -> &str {
        "conf-dump"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("conf-dump", "Print session configuration")
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        if !args.is_empty() {
            return ExecResult::failure(1, "conf-dump: no arguments expected");
        }

        let display = |path: &Option<std::path::PathBuf>| {
            path.as_deref()
                .map(Path::display)
                .map(|p| p.to_string())
                .unwrap_or_default()
        };
        let loaded = if ctx.vfs_zip.is_some() { "yes" } else { "no" };

        ExecResult::success_lines([
            format!("vfs_zip={}", display(&ctx.vfs_zip)),
            format!("startup={}", display(&ctx.startup)),
            format!("vfs_loaded={loaded}"),
            format!("vfs_name={}", ctx.vfs_name),
            format!("cwd={}", ctx.cwd_path()),
        ])
    }
}

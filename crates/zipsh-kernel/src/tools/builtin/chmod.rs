//! chmod — Change permission bits.

use crate::result::ExecResult;
use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

/// Highest accepted mode (setuid, setgid, sticky and the rwx triads).
const MAX_MODE: u32 = 0o7777;

/// Chmod tool: overwrite a node's permission bits.
pub struct Chmod;

impl Tool for Chmod {
    fn name(&self) -> &str {
        "chmod"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("chmod", "Change file or directory permissions")
            .param(ParamSchema::required("OCTAL", "New mode, e.g. 755"))
            .param(ParamSchema::required("path", "File or directory"))
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let (Some(mode), Some(path), 2) = (args.get(0), args.get(1), args.len()) else {
            return ExecResult::failure(1, format!("chmod: usage: {}", self.schema().usage()));
        };

        let Some(mode) = parse_mode(mode) else {
            return ExecResult::failure(1, "chmod: invalid mode (use octal like 755)");
        };

        match ctx.resolve(path) {
            Ok(target) => {
                ctx.vfs.set_perms(target, mode);
                tracing::debug!(path = %ctx.vfs.path(target), mode = %format!("{mode:o}"), "chmod");
                ExecResult::success("")
            }
            Err(e) => ExecResult::failure(1, format!("chmod: {e}")),
        }
    }
}

/// Parse an octal mode such as `755`, `0755` or `0o755`.
fn parse_mode(text: &str) -> Option<u32> {
    let digits = text.strip_prefix("0o").unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| matches!(b, b'0'..=b'7')) {
        return None;
    }
    u32::from_str_radix(digits, 8)
        .ok()
        .filter(|mode| *mode <= MAX_MODE)
}

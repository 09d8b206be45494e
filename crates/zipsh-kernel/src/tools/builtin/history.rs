//! history — Show previously entered command lines.

use crate::result::ExecResult;
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// History tool: list recorded input lines, 1-indexed.
pub struct History;

impl Tool for History {
    fn name(&self) -> &str {
        "history"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("history", "Show command history")
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        if !args.is_empty() {
            return ExecResult::failure(1, "history: no arguments expected");
        }
        ExecResult::success_lines(
            ctx.history
                .iter()
                .enumerate()
                .map(|(i, line)| format!("{}  {line}", i + 1)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::builtin::make_ctx;

    #[test]
    fn test_history_numbering() {
        let mut ctx = make_ctx();
        ctx.history = vec!["ls".into(), "cd a".into(), "history".into()];
        let result = History.execute(ToolArgs::new(), &mut ctx);
        assert!(result.ok());
        assert_eq!(result.out, "1  ls\n2  cd a\n3  history\n");
    }

    #[test]
    fn test_history_rejects_args() {
        let mut ctx = make_ctx();
        let result = History.execute(["-c"].into_iter().collect(), &mut ctx);
        assert_eq!(result.code, 1);
        assert_eq!(result.err, "history: no arguments expected");
    }
}

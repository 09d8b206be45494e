//! pwd — Print working directory.

use crate::result::ExecResult;
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Pwd tool: print current working directory.
pub struct Pwd;

impl Tool for Pwd {
    fn name(&self) -> &str {
        "pwd"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("pwd", "Print current working directory")
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        if !args.is_empty() {
            return ExecResult::failure(1, "pwd: no arguments expected");
        }
        ExecResult::success_lines([ctx.cwd_path()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::builtin::make_ctx;

    #[test]
    fn test_pwd_default() {
        let mut ctx = make_ctx();
        let result = Pwd.execute(ToolArgs::new(), &mut ctx);
        assert!(result.ok());
        assert_eq!(result.out, "/\n");
    }

    #[test]
    fn test_pwd_changed() {
        let mut ctx = make_ctx();
        let a = ctx.resolve("/a").unwrap();
        ctx.set_cwd(a);
        assert_eq!(Pwd.execute(ToolArgs::new(), &mut ctx).out, "/a\n");
    }

    #[test]
    fn test_pwd_rejects_args() {
        let mut ctx = make_ctx();
        let result = Pwd.execute(["x"].into_iter().collect(), &mut ctx);
        assert_eq!(result.code, 1);
        assert_eq!(result.err, "pwd: no arguments expected");
    }
}

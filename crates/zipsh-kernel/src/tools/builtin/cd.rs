//! cd — Change working directory.

use crate::result::ExecResult;
use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

/// Cd tool: change current working directory.
pub struct Cd;

impl Tool for Cd {
    fn name(&self) -> &str {
        "cd"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("cd", "Change current working directory")
            .param(ParamSchema::required("path", "Directory to change to"))
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let path = match args.get(0) {
            Some(path) if args.len() == 1 => path,
            _ => return ExecResult::failure(1, "cd: expected exactly one argument"),
        };

        match ctx.resolve(path) {
            Ok(dir) if ctx.vfs.is_dir(dir) => {
                ctx.set_cwd(dir);
                ExecResult::success("")
            }
            Ok(_) => ExecResult::failure(1, "cd: not a directory"),
            Err(e) => ExecResult::failure(1, format!("cd: {e}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::builtin::make_ctx;

    fn cd(ctx: &mut ExecContext, args: &[&str]) -> ExecResult {
        Cd.execute(args.iter().copied().collect(), ctx)
    }

    #[test]
    fn test_cd_subdir() {
        let mut ctx = make_ctx();
        let result = cd(&mut ctx, &["/a"]);
        assert!(result.ok());
        assert_eq!(ctx.cwd_path(), "/a");
    }

    #[test]
    fn test_cd_relative_and_parent() {
        let mut ctx = make_ctx();
        assert!(cd(&mut ctx, &["a"]).ok());
        assert!(cd(&mut ctx, &[".."]).ok());
        assert_eq!(ctx.cwd_path(), "/");
        assert!(cd(&mut ctx, &[".."]).ok());
        assert_eq!(ctx.cwd_path(), "/");
    }

    #[test]
    fn test_cd_file_fails() {
        let mut ctx = make_ctx();
        let result = cd(&mut ctx, &["/a/x"]);
        assert_eq!(result.code, 1);
        assert_eq!(result.err, "cd: not a directory");
        assert_eq!(ctx.cwd_path(), "/");
    }

    #[test]
    fn test_cd_nonexistent() {
        let mut ctx = make_ctx();
        let result = cd(&mut ctx, &["/nope"]);
        assert_eq!(result.code, 1);
        assert_eq!(result.err, "cd: No such file or directory: /nope");
    }

    #[test]
    fn test_cd_arity() {
        let mut ctx = make_ctx();
        assert_eq!(cd(&mut ctx, &[]).err, "cd: expected exactly one argument");
        assert_eq!(cd(&mut ctx, &["a", "b"]).code, 1);
    }
}

//! help — Describe available commands.

use crate::result::ExecResult;
use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

/// Help tool: list commands or describe one.
pub struct Help;

impl Tool for Help {
    fn name(&self) -> &str {
        "help"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("help", "Show available commands")
            .param(ParamSchema::optional("command", "Command to describe"))
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        match args.get(0) {
            None => {
                let width = ctx
                    .tool_schemas
                    .iter()
                    .map(|s| s.usage().len())
                    .max()
                    .unwrap_or(0);
                let mut lines: Vec<String> = ctx
                    .tool_schemas
                    .iter()
                    .map(|s| format!("  {:<width$}  {}", s.usage(), s.description))
                    .collect();
                lines.push(format!("  {:<width$}  Leave the session", "exit"));
                ExecResult::success_lines(lines)
            }
            Some(name) => {
                let Some(schema) = ctx.tool_schemas.iter().find(|s| s.name == name) else {
                    return ExecResult::failure(1, format!("help: no such command: {name}"));
                };
                let mut lines = vec![
                    format!("usage: {}", schema.usage()),
                    String::new(),
                    schema.description.clone(),
                ];
                if !schema.params.is_empty() {
                    lines.push(String::new());
                    lines.extend(
                        schema
                            .params
                            .iter()
                            .map(|p| format!("  {}  {}", p.name, p.description)),
                    );
                }
                ExecResult::success_lines(lines)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::builtin::make_ctx;
    use crate::tools::{register_builtins, ToolRegistry};

    fn ctx_with_schemas() -> ExecContext {
        let mut registry = ToolRegistry::new();
        register_builtins(&mut registry);
        let mut ctx = make_ctx();
        ctx.tool_schemas = registry.schemas();
        ctx
    }

    #[test]
    fn test_help_lists_everything() {
        let mut ctx = ctx_with_schemas();
        let result = Help.execute(ToolArgs::new(), &mut ctx);
        assert!(result.ok());
        for name in ["cd", "chmod", "conf-dump", "history", "ls", "mv", "pwd", "tree", "exit"] {
            assert!(result.out.contains(name), "missing {name}");
        }
    }

    #[test]
    fn test_help_one_command() {
        let mut ctx = ctx_with_schemas();
        let result = Help.execute(["mv"].into_iter().collect(), &mut ctx);
        assert!(result.out.starts_with("usage: mv SRC DST\n"));
        assert!(result.out.contains("  DST  Destination path or directory\n"));
    }

    #[test]
    fn test_help_unknown() {
        let mut ctx = ctx_with_schemas();
        let result = Help.execute(["frobnicate"].into_iter().collect(), &mut ctx);
        assert_eq!(result.code, 1);
        assert_eq!(result.err, "help: no such command: frobnicate");
    }
}

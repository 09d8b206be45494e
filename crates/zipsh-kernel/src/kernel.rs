//! Kernel (核) — the session engine.
//!
//! The Kernel owns one session: the filesystem tree, the current directory,
//! the command history, and the tool registry. Front ends feed it one line
//! at a time through [`Kernel::run_line`] and act on the [`LineOutcome`].
//!
//! ```text
//! line ──► blank? ──► tokenize ──► history ──► exit? ──► lookup ──► echo ──► tool
//!            │            │                      │          │
//!          (0)       parse error (1)       should_exit   unknown (127)
//! ```

use std::path::{Path, PathBuf};

use crate::archive::{load_archive, LoadError};
use crate::lexer::tokenize;
use crate::result::{ExecResult, EXIT_UNKNOWN_COMMAND};
use crate::tools::{register_builtins, ExecContext, ToolArgs, ToolRegistry};
use crate::vfs::Vfs;

/// Keyword that ends the session.
pub const EXIT_KEYWORD: &str = "exit";

/// Configuration for a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KernelConfig {
    /// Zip archive to populate the filesystem from.
    pub vfs_zip: Option<PathBuf>,
    /// Script to run before the interactive loop.
    pub startup: Option<PathBuf>,
}

impl KernelConfig {
    /// Set the archive to load.
    pub fn with_vfs_zip(mut self, path: impl Into<PathBuf>) -> Self {
        self.vfs_zip = Some(path.into());
        self
    }

    /// Set the startup script.
    pub fn with_startup(mut self, path: impl Into<PathBuf>) -> Self {
        self.startup = Some(path.into());
        self
    }
}

/// What happened when a line was run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOutcome {
    /// The session should end.
    pub should_exit: bool,
    /// Prompt plus the raw line, to be printed before the command output.
    pub echo: Option<String>,
    pub result: ExecResult,
}

impl LineOutcome {
    fn done(result: ExecResult) -> Self {
        Self {
            should_exit: false,
            echo: None,
            result,
        }
    }

    /// Exit code of the line.
    pub fn code(&self) -> i64 {
        self.result.code
    }
}

/// A single interpreter session.
#[derive(Debug)]
pub struct Kernel {
    ctx: ExecContext,
    tools: ToolRegistry,
}

impl Kernel {
    /// Create a session, loading the configured archive if there is one.
    pub fn new(config: KernelConfig) -> Result<Self, LoadError> {
        match config.vfs_zip.as_deref() {
            Some(path) => {
                let loaded = load_archive(path)?;
                Ok(Self::with_vfs(config, loaded.vfs, loaded.name))
            }
            None => Ok(Self::with_vfs(config, Vfs::new(), crate::archive::NO_VFS_NAME)),
        }
    }

    /// Create a session over an already populated tree.
    pub fn with_vfs(config: KernelConfig, vfs: Vfs, vfs_name: impl Into<String>) -> Self {
        let mut tools = ToolRegistry::new();
        register_builtins(&mut tools);

        let mut ctx = ExecContext::new(vfs);
        ctx.vfs_zip = config.vfs_zip;
        ctx.startup = config.startup;
        ctx.vfs_name = vfs_name.into();
        ctx.tool_schemas = tools.schemas();

        Self { ctx, tools }
    }

    /// The session prompt, e.g. `[demo] /docs$ `.
    pub fn prompt(&self) -> String {
        self.ctx.prompt()
    }

    /// Display name of the loaded archive (`no-vfs` without one).
    pub fn vfs_name(&self) -> &str {
        &self.ctx.vfs_name
    }

    /// Startup script from the configuration.
    pub fn startup(&self) -> Option<&Path> {
        self.ctx.startup.as_deref()
    }

    /// Recorded input lines.
    pub fn history(&self) -> &[String] {
        &self.ctx.history
    }

    /// Session state, for inspection.
    pub fn context(&self) -> &ExecContext {
        &self.ctx
    }

    /// Run one input line.
    ///
    /// Blank lines and lines that fail to tokenize are not recorded in the
    /// history; everything else is, including unknown commands and commands
    /// that fail. With `echo` set, the outcome carries the prompt and line
    /// so the caller can print them ahead of the command's output.
    pub fn run_line(&mut self, line: &str, echo: bool) -> LineOutcome {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim().is_empty() {
            return LineOutcome::done(ExecResult::success(""));
        }

        let words = match tokenize(line) {
            Ok(words) => words,
            Err(e) => {
                tracing::debug!(line, error = %e, "tokenize failed");
                return LineOutcome::done(ExecResult::failure(1, format!("parse error: {e}")));
            }
        };
        self.ctx.history.push(line.to_string());

        let mut words = words.into_iter();
        let Some(command) = words.next() else {
            return LineOutcome::done(ExecResult::success(""));
        };

        if command == EXIT_KEYWORD {
            return LineOutcome {
                should_exit: true,
                echo: None,
                result: ExecResult::success(""),
            };
        }

        let Some(tool) = self.tools.get(&command) else {
            return LineOutcome::done(ExecResult::failure(
                EXIT_UNKNOWN_COMMAND,
                format!("unknown command: {command}"),
            ));
        };

        let echo = echo.then(|| format!("{}{line}", self.ctx.prompt()));
        let args: ToolArgs = words.collect();
        tracing::debug!(command = %command, args = ?args.positional, "dispatch");
        let result = tool.execute(args, &mut self.ctx);
        if !result.ok() {
            tracing::debug!(command = %command, code = result.code, "command failed");
        }

        LineOutcome {
            should_exit: false,
            echo,
            result,
        }
    }
}

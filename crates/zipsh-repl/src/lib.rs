//! zipsh REPL — front ends for the zipsh kernel.
//!
//! Two ways to feed a session:
//!
//! - **Interactive**: prompt, read a line with rustyline, run it, repeat until
//!   end-of-input or `exit`.
//! - **Startup script**: run each line of a file with the prompt echoed in
//!   front of it, stopping at the first line that exits non-zero.
//!
//! Both write command output to stdout and diagnostics to stderr. The
//! writer-generic entry points exist so tests can capture both streams.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

use zipsh_kernel::{Kernel, KernelConfig, LineOutcome, LoadError};

/// Exit code for a startup script that cannot be read.
pub const EXIT_STARTUP_ERROR: i64 = 2;

/// REPL state: one kernel session.
#[derive(Debug)]
pub struct Repl {
    kernel: Kernel,
}

impl Repl {
    /// Create a REPL, loading the configured archive.
    pub fn new(config: KernelConfig) -> Result<Self, LoadError> {
        Ok(Self::with_kernel(Kernel::new(config)?))
    }

    /// Wrap an existing kernel.
    pub fn with_kernel(kernel: Kernel) -> Self {
        Self { kernel }
    }

    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    /// Run one line and write its echo, output and diagnostics.
    pub fn process_line<W: Write, E: Write>(
        &mut self,
        line: &str,
        echo: bool,
        out: &mut W,
        err: &mut E,
    ) -> io::Result<LineOutcome> {
        let outcome = self.kernel.run_line(line, echo);

        if let Some(echoed) = &outcome.echo {
            writeln!(out, "{echoed}")?;
        }
        out.write_all(outcome.result.out.as_bytes())?;
        out.flush()?;
        if !outcome.result.err.is_empty() {
            writeln!(err, "{}", outcome.result.err)?;
        }
        Ok(outcome)
    }

    /// Run script lines until one fails or asks to exit.
    ///
    /// Returns the failing line's exit code, or 0 when the script finishes
    /// or runs `exit`.
    pub fn run_script<R: BufRead, W: Write, E: Write>(
        &mut self,
        reader: R,
        out: &mut W,
        err: &mut E,
    ) -> io::Result<i64> {
        for line in reader.lines() {
            let line = line?;
            let outcome = self.process_line(&line, true, out, err)?;
            if outcome.code() != 0 {
                writeln!(err, "Startup halted due to error (rc={}).", outcome.code())?;
                return Ok(outcome.code());
            }
            if outcome.should_exit {
                return Ok(0);
            }
        }
        Ok(0)
    }

    /// Run the startup script at `path`.
    ///
    /// A missing or unreadable script is reported on `err` and yields
    /// [`EXIT_STARTUP_ERROR`]; otherwise the result of [`Repl::run_script`].
    pub fn run_startup<W: Write, E: Write>(
        &mut self,
        path: &Path,
        out: &mut W,
        err: &mut E,
    ) -> io::Result<i64> {
        if !path.exists() {
            writeln!(err, "Startup error: file not found: {}", path.display())?;
            return Ok(EXIT_STARTUP_ERROR);
        }

        let script = match File::open(path) {
            Ok(file) => BufReader::new(file),
            Err(e) => {
                writeln!(err, "Startup error: {}: {e}", path.display())?;
                return Ok(EXIT_STARTUP_ERROR);
            }
        };

        tracing::debug!(script = %path.display(), "running startup script");
        match self.run_script(script, out, err) {
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                writeln!(err, "Startup error: {}: {e}", path.display())?;
                Ok(EXIT_STARTUP_ERROR)
            }
            other => other,
        }
    }

    /// Run the interactive loop until end-of-input or `exit`.
    pub fn run_interactive(&mut self) -> Result<()> {
        let mut rl: Editor<(), DefaultHistory> =
            Editor::new().context("Failed to create editor")?;

        loop {
            let prompt = self.kernel.prompt();

            match rl.readline(&prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        if let Err(e) = rl.add_history_entry(line.as_str()) {
                            tracing::warn!("Failed to add history entry: {}", e);
                        }
                    }

                    let outcome =
                        self.process_line(&line, false, &mut io::stdout(), &mut io::stderr())?;
                    if outcome.should_exit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!();
                    break;
                }
                Err(err) => return Err(err).context("Failed to read input"),
            }
        }

        Ok(())
    }
}

//! zipsh CLI entry point.
//!
//! Usage:
//!   zipsh                              # Interactive shell, empty filesystem
//!   zipsh --vfs-zip site.zip           # Interactive shell over an archive
//!   zipsh --vfs-zip x.zip --startup s  # Run a startup script, then the shell

use std::env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use zipsh_kernel::KernelConfig;
use zipsh_repl::Repl;

/// Exit code for bad usage and load failures.
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    // Logs go to stderr so they never mix with command output (RUST_LOG).
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}

/// What the command line asked for.
#[derive(Debug, PartialEq, Eq)]
enum Invocation {
    Help,
    Version,
    Shell(KernelConfig),
}

fn run() -> Result<ExitCode> {
    let config = match parse_args(env::args().skip(1)) {
        Ok(Invocation::Help) => {
            print_help();
            return Ok(ExitCode::SUCCESS);
        }
        Ok(Invocation::Version) => {
            println!("zipsh {}", env!("CARGO_PKG_VERSION"));
            return Ok(ExitCode::SUCCESS);
        }
        Ok(Invocation::Shell(config)) => config,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("Run 'zipsh --help' for usage.");
            return Ok(ExitCode::from(EXIT_USAGE));
        }
    };

    let startup = config.startup.clone();
    let mut repl = match Repl::new(config) {
        Ok(repl) => repl,
        Err(e) => {
            eprintln!("VFS load error: {e}");
            return Ok(ExitCode::from(EXIT_USAGE));
        }
    };
    tracing::debug!(vfs = repl.kernel().vfs_name(), "session ready");

    if let Some(script) = startup {
        let code = repl.run_startup(&script, &mut io::stdout(), &mut io::stderr())?;
        if code != 0 {
            return Ok(exit_code(code));
        }
    }

    repl.run_interactive()?;
    Ok(ExitCode::SUCCESS)
}

/// Parse command-line options (program name already skipped).
fn parse_args<I>(args: I) -> Result<Invocation, String>
where
    I: IntoIterator<Item = String>,
{
    let mut config = KernelConfig::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Invocation::Help),
            "-V" | "--version" => return Ok(Invocation::Version),
            "--vfs-zip" => {
                let path = args.next().ok_or("--vfs-zip requires a path")?;
                config.vfs_zip = Some(PathBuf::from(path));
            }
            "--startup" => {
                let path = args.next().ok_or("--startup requires a path")?;
                config.startup = Some(PathBuf::from(path));
            }
            other => {
                if let Some(path) = other.strip_prefix("--vfs-zip=") {
                    config.vfs_zip = Some(PathBuf::from(path));
                } else if let Some(path) = other.strip_prefix("--startup=") {
                    config.startup = Some(PathBuf::from(path));
                } else {
                    return Err(format!("Unknown option: {other}"));
                }
            }
        }
    }

    Ok(Invocation::Shell(config))
}

/// Map a command exit code onto a process exit status.
fn exit_code(code: i64) -> ExitCode {
    u8::try_from(code)
        .map(ExitCode::from)
        .unwrap_or(ExitCode::FAILURE)
}

fn print_help() {
    println!(
        r#"zipsh v{}

A small shell over an in-memory filesystem loaded from a zip archive.

Usage:
  zipsh [OPTIONS]

Options:
  --vfs-zip <path>     Populate the filesystem from a zip archive
  --startup <path>     Run a script before the interactive prompt
  -h, --help           Show this help
  -V, --version        Show version

Commands:
  ls, cd, pwd, tree, chmod, mv, history, conf-dump, help, exit

Archive entries ending in .b64 are base64-decoded and stored without the
suffix. Set RUST_LOG=debug for diagnostics on stderr.
"#,
        env!("CARGO_PKG_VERSION")
    );
}

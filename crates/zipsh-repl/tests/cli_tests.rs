//! End-to-end tests: run the `zipsh` binary against archives and scripts on
//! disk and check exit codes and streams.

use std::ffi::OsStr;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use rstest::rstest;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// A scratch directory holding `site.zip` and any scripts.
struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();
        writer.add_directory("docs/", options).unwrap();
        writer.start_file("docs/readme.md", options).unwrap();
        writer.write_all(b"# hello\n").unwrap();
        writer.start_file("img/logo.png.b64", options).unwrap();
        writer.write_all(b"iVBORw0K\n").unwrap();
        let bytes = writer.finish().unwrap().into_inner();
        std::fs::write(dir.path().join("site.zip"), bytes).unwrap();
        Self { dir }
    }

    fn zip(&self) -> PathBuf {
        self.dir.path().join("site.zip")
    }

    fn script(&self, name: &str, body: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, body).unwrap();
        path
    }
}

/// Run `zipsh` with `args`, feeding `stdin` and closing it.
fn zipsh<I, S>(args: I, stdin: &str) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut child = Command::new(env!("CARGO_BIN_EXE_zipsh"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn zipsh");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn startup_args(ws: &Workspace, script: &Path) -> Vec<PathBuf> {
    vec![
        PathBuf::from("--vfs-zip"),
        ws.zip(),
        PathBuf::from("--startup"),
        script.to_path_buf(),
    ]
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_startup_script_then_eof() {
    let ws = Workspace::new();
    let script = ws.script("boot.txt", "cd docs\nls\n");
    let output = zipsh(startup_args(&ws, &script), "");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("[site] /$ cd docs\n"));
    assert!(out.contains("[site] /docs$ ls\n"));
    assert!(out.contains("-rw-r--r--\ttxt\treadme.md\t8B\n"));
}

#[test]
fn test_failing_startup_exits_with_its_code() {
    let ws = Workspace::new();
    let script = ws.script("boot.txt", "cd /nope\nls\n");
    let output = zipsh(startup_args(&ws, &script), "");

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("cd: No such file or directory: /nope"));
    assert!(err.contains("Startup halted due to error (rc=1)."));
    assert!(!stdout(&output).contains("[site] /$ ls"));
}

#[test]
fn test_unknown_startup_command_exits_127() {
    let ws = Workspace::new();
    let script = ws.script("boot.txt", "frobnicate\n");
    let output = zipsh([OsStr::new("--startup"), script.as_os_str()], "");

    assert_eq!(output.status.code(), Some(127));
    assert!(stderr(&output).contains("unknown command: frobnicate"));
}

#[test]
fn test_missing_archive_exits_2() {
    let ws = Workspace::new();
    let missing = ws.dir.path().join("gone.zip");
    let output = zipsh([OsStr::new("--vfs-zip"), missing.as_os_str()], "");

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("VFS load error: file not found: "));
}

#[test]
fn test_garbage_archive_exits_2() {
    let ws = Workspace::new();
    let bogus = ws.script("bogus.zip", "this is not a zip archive");
    let output = zipsh([OsStr::new("--vfs-zip"), bogus.as_os_str()], "");

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("VFS load error: not a zip file"));
}

#[test]
fn test_missing_startup_script_exits_2() {
    let ws = Workspace::new();
    let missing = ws.dir.path().join("nope.txt");
    let output = zipsh(startup_args(&ws, &missing), "");

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Startup error: file not found: "));
}

#[rstest]
#[case::pwd("pwd\n", "/\n")]
#[case::binary_file("ls /img\n", "-rw-r--r--\tbin\tlogo.png\t6B\n")]
#[case::history("pwd\nhistory\n", "1  pwd\n2  history\n")]
#[case::exit_stops_reading("exit\npwd\n", "")]
fn test_interactive_lines(#[case] input: &str, #[case] expected: &str) {
    let ws = Workspace::new();
    let output = zipsh([OsStr::new("--vfs-zip"), ws.zip().as_os_str()], input);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    if expected.is_empty() {
        assert!(!out.contains("/\n"), "unexpected output: {out:?}");
    } else {
        assert!(out.contains(expected), "missing {expected:?} in {out:?}");
    }
}

#[test]
fn test_unknown_option_exits_2() {
    let output = Command::new(env!("CARGO_BIN_EXE_zipsh"))
        .arg("--frobnicate")
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Unknown option: --frobnicate"));
}

#[test]
fn test_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_zipsh"))
        .arg("--version")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("zipsh "));
}

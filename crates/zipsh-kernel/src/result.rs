//! ExecResult — the structured result of every command execution.
//!
//! Tools never print. They hand back what they would have written to stdout
//! and stderr together with an exit code, and the session driver decides
//! where the text goes. This keeps every builtin testable without capturing
//! process streams.

/// Exit code for a command name that is not registered.
pub const EXIT_UNKNOWN_COMMAND: i64 = 127;

/// The result of executing one command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecResult {
    /// Exit code. 0 means success.
    pub code: i64,
    /// Standard output. Each line is newline-terminated.
    pub out: String,
    /// Standard error, without a trailing newline.
    pub err: String,
}

impl ExecResult {
    /// Successful result with output.
    pub fn success(out: impl Into<String>) -> Self {
        Self {
            code: 0,
            out: out.into(),
            err: String::new(),
        }
    }

    /// Successful result whose output is `lines`, one per line.
    pub fn success_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = String::new();
        for line in lines {
            out.push_str(line.as_ref());
            out.push('\n');
        }
        Self::success(out)
    }

    /// Failed result with an error message.
    pub fn failure(code: i64, err: impl Into<String>) -> Self {
        Self {
            code,
            out: String::new(),
            err: err.into(),
        }
    }

    /// True if the exit code is 0.
    pub fn ok(&self) -> bool {
        self.code == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success() {
        let result = ExecResult::success("hi\n");
        assert!(result.ok());
        assert_eq!(result.out, "hi\n");
        assert!(result.err.is_empty());
    }

    #[test]
    fn test_success_lines_terminates_each_line() {
        let result = ExecResult::success_lines(["a", "b"]);
        assert_eq!(result.out, "a\nb\n");
        assert_eq!(ExecResult::success_lines(Vec::<String>::new()).out, "");
    }

    #[test]
    fn test_failure() {
        let result = ExecResult::failure(1, "ls: boom");
        assert!(!result.ok());
        assert_eq!(result.code, 1);
        assert_eq!(result.err, "ls: boom");
    }
}

//! Core tool traits and types.

use super::context::ExecContext;
use crate::result::ExecResult;

/// Schema for a tool parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSchema {
    /// Parameter name as shown in usage text.
    pub name: String,
    /// Whether this parameter is required.
    pub required: bool,
    /// Description for help text.
    pub description: String,
}

impl ParamSchema {
    /// Create a required parameter.
    pub fn required(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: true,
            description: description.into(),
        }
    }

    /// Create an optional parameter.
    pub fn optional(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
            description: description.into(),
        }
    }
}

/// Schema describing a tool's interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSchema {
    /// Tool name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Parameter definitions, in positional order.
    pub params: Vec<ParamSchema>,
}

impl ToolSchema {
    /// Create a new tool schema.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            params: Vec::new(),
        }
    }

    /// Add a parameter to the schema.
    pub fn param(mut self, param: ParamSchema) -> Self {
        self.params.push(param);
        self
    }

    /// One-line synopsis, e.g. `mv SRC DST` or `ls [path]`.
    pub fn usage(&self) -> String {
        let mut usage = self.name.clone();
        for param in &self.params {
            usage.push(' ');
            if param.required {
                usage.push_str(&param.name);
            } else {
                usage.push('[');
                usage.push_str(&param.name);
                usage.push(']');
            }
        }
        usage
    }
}

/// Positional arguments, after the command name has been stripped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolArgs {
    pub positional: Vec<String>,
}

impl ToolArgs {
    /// Create empty args.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a positional argument by index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.positional.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.positional.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ToolArgs {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            positional: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// A command that can be executed.
pub trait Tool {
    /// The tool's name (used for lookup).
    fn name(&self) -> &str;

    /// Get the tool's schema.
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with the given arguments and context.
    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult;
}

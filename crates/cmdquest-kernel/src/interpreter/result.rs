//! CommandResult — the structured outcome of every command line.
//!
//! The level rules inspect these, the REPL renders them, and the kernel
//! accumulates their scores:
//!
//! - `output` — text to print (may be empty)
//! - `kind` — how the host should style it
//! - `score` — points awarded for a successful use of the command
//! - `success` — explicit outcome flag, set by `taskkill`
//! - `action` — host-side effect such as clearing the screen

use serde::{Deserialize, Serialize};

/// How a result should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    #[default]
    Output,
    Error,
    Info,
    Success,
}

/// Effects the host performs on behalf of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostAction {
    ClearScreen,
    Exit,
}

/// The result of executing one command line.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommandResult {
    pub output: String,
    pub kind: OutputKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<HostAction>,
}

impl CommandResult {
    fn with_kind(kind: OutputKind, output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            kind,
            ..Self::default()
        }
    }

    /// Plain command output.
    pub fn output(output: impl Into<String>) -> Self {
        Self::with_kind(OutputKind::Output, output)
    }

    /// A failure message.
    pub fn error(message: impl Into<String>) -> Self {
        Self::with_kind(OutputKind::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::with_kind(OutputKind::Info, message)
    }

    /// A highlighted success message (`setinfo`, `genpass`).
    pub fn success(message: impl Into<String>) -> Self {
        Self::with_kind(OutputKind::Success, message)
    }

    /// An empty, successful result.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_score(mut self, score: u32) -> Self {
        self.score = Some(score);
        self
    }

    pub fn with_success(mut self, success: bool) -> Self {
        self.success = Some(success);
        self
    }

    pub fn with_action(mut self, action: HostAction) -> Self {
        self.action = Some(action);
        self
    }

    /// True unless the result is an error.
    pub fn ok(&self) -> bool {
        self.kind != OutputKind::Error
    }

    pub fn is_error(&self) -> bool {
        self.kind == OutputKind::Error
    }

    /// JSON form for hosts that ship results over a wire.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

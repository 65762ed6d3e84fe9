//! Errors a command handler can raise instead of returning a result.

use cmdquest_glob::GlobError;
use thiserror::Error;

use crate::interpreter::CommandResult;
use crate::vfs::FsError;

/// The message `cmd.exe` prints for malformed arguments.
pub const SYNTAX_ERROR: &str = "命令语法不正确。";

/// Failure raised by a [`super::Command`] handler.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Missing or malformed arguments.
    #[error("命令语法不正确。")]
    Syntax,
    #[error(transparent)]
    Fs(#[from] FsError),
    #[error(transparent)]
    Glob(#[from] GlobError),
}

impl CommandError {
    /// Convert to the result shown to the player.
    ///
    /// Syntax errors print the plain CMD message. Anything else is reported
    /// as a failed execution.
    pub fn into_result(self) -> CommandResult {
        match self {
            CommandError::Syntax => CommandResult::error(SYNTAX_ERROR),
            other => CommandResult::error(format!("执行命令时发生错误: {other}")),
        }
    }
}

impl From<FsError> for CommandResult {
    fn from(err: FsError) -> Self {
        CommandResult::error(err.to_string())
    }
}

//! The command handler trait.

use super::{CommandError, ExecContext};
use crate::interpreter::CommandResult;

/// A command the interpreter can dispatch to.
///
/// `args` excludes the command name. Expected failures (missing file,
/// unknown process) are returned as `Ok` error results with the CMD
/// message; `Err` is for malformed input and unexpected faults.
pub trait Command: Send + Sync {
    /// Primary name, lowercase.
    fn name(&self) -> &str;

    /// Alternative lowercase names dispatching to the same handler.
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// One-line description shown by `help`.
    fn description(&self) -> &str;

    /// Execute the command.
    fn execute(&self, args: &[String], ctx: &mut ExecContext) -> Result<CommandResult, CommandError>;
}

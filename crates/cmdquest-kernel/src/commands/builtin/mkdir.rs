//! mkdir — Create a directory.

use crate::commands::{Command, CommandError, ExecContext};
use crate::interpreter::CommandResult;

/// Mkdir command: create one directory. Parents must exist.
pub struct Mkdir;

impl Command for Mkdir {
    fn name(&self) -> &str {
        "mkdir"
    }

    fn aliases(&self) -> &[&str] {
        &["md"]
    }

    fn description(&self) -> &str {
        "创建目录"
    }

    fn execute(&self, args: &[String], ctx: &mut ExecContext) -> Result<CommandResult, CommandError> {
        let path = args.first().ok_or(CommandError::Syntax)?;
        Ok(match ctx.vfs.create_directory(path) {
            Ok(()) => CommandResult::empty().with_score(8),
            Err(e) => e.into(),
        })
    }
}

//! cd — Change working directory.

use crate::commands::{Command, CommandError, ExecContext};
use crate::interpreter::CommandResult;

/// Cd command: show or change the working directory.
pub struct Cd;

impl Command for Cd {
    fn name(&self) -> &str {
        "cd"
    }

    fn description(&self) -> &str {
        "显示当前目录名或改变当前目录"
    }

    fn execute(&self, args: &[String], ctx: &mut ExecContext) -> Result<CommandResult, CommandError> {
        let Some(target) = args.first() else {
            return Ok(CommandResult::output(ctx.cwd()));
        };

        Ok(match ctx.vfs.change_directory(target) {
            Ok(_) => CommandResult::empty().with_score(3),
            Err(e) => e.into(),
        })
    }
}

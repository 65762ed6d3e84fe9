//! echo — Print arguments.

use crate::commands::{Command, CommandError, ExecContext};
use crate::interpreter::CommandResult;

pub struct Echo;

impl Command for Echo {
    fn name(&self) -> &str {
        "echo"
    }

    fn description(&self) -> &str {
        "显示消息，或将命令回显功能打开或关上"
    }

    fn execute(&self, args: &[String], _ctx: &mut ExecContext) -> Result<CommandResult, CommandError> {
        if args.is_empty() {
            return Ok(CommandResult::output("ECHO 处于打开状态。"));
        }
        Ok(CommandResult::output(args.join(" ")).with_score(2))
    }
}

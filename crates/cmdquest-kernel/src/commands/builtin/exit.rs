//! exit — Leave the game.

use crate::commands::{Command, CommandError, ExecContext};
use crate::interpreter::{CommandResult, HostAction};

pub struct Exit;

impl Command for Exit {
    fn name(&self) -> &str {
        "exit"
    }

    fn aliases(&self) -> &[&str] {
        &["quit"]
    }

    fn description(&self) -> &str {
        "退出命令解释器"
    }

    fn execute(&self, _args: &[String], _ctx: &mut ExecContext) -> Result<CommandResult, CommandError> {
        Ok(CommandResult::info("感谢使用Windows命令行学习游戏！").with_action(HostAction::Exit))
    }
}

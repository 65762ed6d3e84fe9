//! cls — Clear the screen.

use crate::commands::{Command, CommandError, ExecContext};
use crate::interpreter::{CommandResult, HostAction};

pub struct Cls;

impl Command for Cls {
    fn name(&self) -> &str {
        "cls"
    }

    fn aliases(&self) -> &[&str] {
        &["clear"]
    }

    fn description(&self) -> &str {
        "清除屏幕"
    }

    fn execute(&self, _args: &[String], _ctx: &mut ExecContext) -> Result<CommandResult, CommandError> {
        Ok(CommandResult::empty()
            .with_score(1)
            .with_action(HostAction::ClearScreen))
    }
}

//! type — Print a file.

use crate::commands::{Command, CommandError, ExecContext};
use crate::interpreter::CommandResult;

/// Type command: print a text file's content.
pub struct Type;

impl Command for Type {
    fn name(&self) -> &str {
        "type"
    }

    fn aliases(&self) -> &[&str] {
        &["cat"]
    }

    fn description(&self) -> &str {
        "显示文本文件的内容"
    }

    fn execute(&self, args: &[String], ctx: &mut ExecContext) -> Result<CommandResult, CommandError> {
        let path = args.first().ok_or(CommandError::Syntax)?;
        Ok(match ctx.vfs.read_file(path) {
            Ok(content) => CommandResult::output(content).with_score(5),
            Err(e) => e.into(),
        })
    }
}

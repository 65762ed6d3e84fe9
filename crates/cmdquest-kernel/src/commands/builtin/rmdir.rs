//! rmdir — Remove a directory.

use crate::commands::{Command, CommandError, ExecContext};
use crate::interpreter::CommandResult;

/// Rmdir command: remove a directory, `/s` for a populated one.
pub struct Rmdir;

impl Command for Rmdir {
    fn name(&self) -> &str {
        "rmdir"
    }

    fn aliases(&self) -> &[&str] {
        &["rd"]
    }

    fn description(&self) -> &str {
        "删除目录"
    }

    fn execute(&self, args: &[String], ctx: &mut ExecContext) -> Result<CommandResult, CommandError> {
        let recursive = args.iter().any(|a| a.eq_ignore_ascii_case("/s"));
        let target = args
            .iter()
            .find(|a| !a.starts_with('/'))
            .ok_or(CommandError::Syntax)?;

        Ok(match ctx.vfs.delete_directory(target, recursive) {
            Ok(()) => CommandResult::empty().with_score(8),
            Err(e) => e.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::builtin::testing::{ctx, run};

    #[test]
    fn removes_empty_directory() {
        let mut ctx = ctx();
        ctx.vfs.create_directory("empty").unwrap();
        let r = run(&Rmdir, &mut ctx, &["empty"]);
        assert_eq!(r.score, Some(8));
        assert!(!ctx.vfs.exists("empty"));
    }

    #[test]
    fn populated_needs_s() {
        let mut ctx = ctx();
        let r = run(&Rmdir, &mut ctx, &["Documents"]);
        assert_eq!(r.output, "目录不是空的。");
        assert!(ctx.vfs.exists("Documents"));

        let r = run(&Rmdir, &mut ctx, &["/S", "Documents"]);
        assert!(r.ok());
        assert!(!ctx.vfs.exists("Documents"));
    }

    #[test]
    fn file_target_is_invalid_name() {
        let mut ctx = ctx();
        let r = run(&Rmdir, &mut ctx, &[r"Desktop\game.txt"]);
        assert_eq!(r.output, "目录名无效。");
    }

    #[test]
    fn switches_only_is_syntax_error() {
        let mut ctx = ctx();
        assert_eq!(run(&Rmdir, &mut ctx, &["/s"]).output, "命令语法不正确。");
        assert_eq!(run(&Rmdir, &mut ctx, &[]).output, "命令语法不正确。");
    }
}

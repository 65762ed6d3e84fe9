//! copy, move, ren — Duplicate and relocate files.
//!
//! A copy reads the source and creates the destination; it never
//! overwrites. Move and rename are a copy followed by deleting the source.

use crate::commands::{Command, CommandError, ExecContext};
use crate::interpreter::CommandResult;

fn source_and_dest(args: &[String]) -> Result<(&str, &str), CommandError> {
    match args {
        [src, dst, ..] => Ok((src.as_str(), dst.as_str())),
        _ => Err(CommandError::Syntax),
    }
}

/// Copy `src` to `dst`. `Err` carries the result to report.
fn copy_file(ctx: &mut ExecContext, src: &str, dst: &str) -> Result<(), CommandResult> {
    let content = ctx.vfs.read_file(src).map_err(CommandResult::from)?;
    ctx.vfs
        .create_file(dst, &content)
        .map_err(CommandResult::from)
}

fn move_file(ctx: &mut ExecContext, args: &[String]) -> Result<CommandResult, CommandError> {
    let (src, dst) = source_and_dest(args)?;
    if let Err(result) = copy_file(ctx, src, dst) {
        return Ok(result);
    }
    ctx.vfs.delete(src)?;
    Ok(CommandResult::output("移动了         1 个文件。").with_score(12))
}

/// Copy command.
pub struct Copy;

impl Command for Copy {
    fn name(&self) -> &str {
        "copy"
    }

    fn description(&self) -> &str {
        "将一份或多份文件复制到另一个位置"
    }

    fn execute(&self, args: &[String], ctx: &mut ExecContext) -> Result<CommandResult, CommandError> {
        let (src, dst) = source_and_dest(args)?;
        Ok(match copy_file(ctx, src, dst) {
            Ok(()) => CommandResult::output("已复制         1 个文件。").with_score(10),
            Err(result) => result,
        })
    }
}

/// Move command.
pub struct Move;

impl Command for Move {
    fn name(&self) -> &str {
        "move"
    }

    fn description(&self) -> &str {
        "移动文件并重命名文件和目录"
    }

    fn execute(&self, args: &[String], ctx: &mut ExecContext) -> Result<CommandResult, CommandError> {
        move_file(ctx, args)
    }
}

/// Rename command. Behaves exactly like `move`.
pub struct Rename;

impl Command for Rename {
    fn name(&self) -> &str {
        "ren"
    }

    fn aliases(&self) -> &[&str] {
        &["rename"]
    }

    fn description(&self) -> &str {
        "重命名文件"
    }

    fn execute(&self, args: &[String], ctx: &mut ExecContext) -> Result<CommandResult, CommandError> {
        move_file(ctx, args)
    }
}

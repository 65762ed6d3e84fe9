//! del — Delete files.
//!
//! `/q` silences every message, errors included. `/f` is accepted for
//! compatibility; there are no read-only files to force. A name containing
//! `*` deletes every matching file in the working directory.

use cmdquest_glob::GlobPattern;

use crate::commands::{Command, CommandError, ExecContext};
use crate::interpreter::CommandResult;

/// Del command: delete one file or a wildcard batch.
pub struct Del;

impl Command for Del {
    fn name(&self) -> &str {
        "del"
    }

    fn aliases(&self) -> &[&str] {
        &["erase"]
    }

    fn description(&self) -> &str {
        "删除一个或数个文件"
    }

    fn execute(&self, args: &[String], ctx: &mut ExecContext) -> Result<CommandResult, CommandError> {
        let quiet = args.iter().any(|a| a.eq_ignore_ascii_case("/q"));
        let target = args
            .iter()
            .find(|a| !a.starts_with('/'))
            .ok_or(CommandError::Syntax)?;

        if target.contains('*') {
            return delete_matching(ctx, target, quiet);
        }

        Ok(match ctx.vfs.delete(target) {
            Ok(()) => CommandResult::empty().with_score(6),
            Err(_) if quiet => CommandResult::empty(),
            Err(e) => e.into(),
        })
    }
}

fn delete_matching(ctx: &mut ExecContext, pattern: &str, quiet: bool) -> Result<CommandResult, CommandError> {
    let pattern = GlobPattern::new(pattern)?;
    let targets: Vec<String> = ctx
        .vfs
        .list_directory("")
        .unwrap_or_default()
        .into_iter()
        .filter(|e| e.is_file() && pattern.is_match(&e.name))
        .map(|e| e.name)
        .collect();

    let mut deleted = 0u32;
    let mut errors = Vec::new();
    for name in &targets {
        match ctx.vfs.delete(name) {
            Ok(()) => deleted += 1,
            Err(e) if !quiet => errors.push(format!("无法删除 {name}: {e}")),
            Err(_) => {}
        }
    }

    if deleted == 0 && errors.is_empty() {
        return Ok(if quiet {
            CommandResult::empty()
        } else {
            CommandResult::error("找不到文件")
        });
    }

    let mut lines = Vec::new();
    if !quiet && deleted > 0 {
        lines.push(format!("已删除 {deleted} 个文件"));
    }
    let failed = !errors.is_empty();
    lines.extend(errors);

    let output = lines.join("\n");
    let result = if failed {
        CommandResult::error(output)
    } else {
        CommandResult::output(output)
    };
    Ok(result.with_score(deleted * 3))
}

//! tree — Draw the folder structure.

use crate::commands::{Command, CommandError, ExecContext};
use crate::interpreter::CommandResult;
use crate::vfs::{FsError, VirtualFs, WinPath};

/// Tree command: box-drawing view of a directory and everything below it.
pub struct Tree;

impl Command for Tree {
    fn name(&self) -> &str {
        "tree"
    }

    fn description(&self) -> &str {
        "以图形显示驱动器或路径的文件夹结构"
    }

    fn execute(&self, args: &[String], ctx: &mut ExecContext) -> Result<CommandResult, CommandError> {
        let input = args.first().map(String::as_str).unwrap_or("");
        let root = match ctx.vfs.canonicalize(input) {
            Some(path) if ctx.vfs.list_at(&path).is_some() => path,
            _ => return Ok(FsError::PathNotFound.into()),
        };

        let label = root
            .file_name()
            .map(str::to_string)
            .unwrap_or_else(|| root.to_string());
        let mut out = String::new();
        render(&ctx.vfs, &root, &label, "", true, &mut out);
        Ok(CommandResult::output(out).with_score(10))
    }
}

fn branch(last: bool) -> &'static str {
    if last { "└── " } else { "├── " }
}

fn render(vfs: &VirtualFs, path: &WinPath, label: &str, prefix: &str, last: bool, out: &mut String) {
    out.push_str(prefix);
    out.push_str(branch(last));
    out.push_str(label);
    out.push('\n');

    let entries = vfs.list_at(path).unwrap_or_default();
    let child_prefix = format!("{prefix}{}", if last { "    " } else { "│   " });
    for (i, entry) in entries.iter().enumerate() {
        let child_last = i + 1 == entries.len();
        if entry.is_dir() {
            render(vfs, &path.join(&entry.name), &entry.name, &child_prefix, child_last, out);
        } else {
            out.push_str(&child_prefix);
            out.push_str(branch(child_last));
            out.push_str(&entry.name);
            out.push('\n');
        }
    }
}

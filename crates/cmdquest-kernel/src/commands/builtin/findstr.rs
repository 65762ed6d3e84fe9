//! findstr — Search file contents in the working directory.

use crate::commands::{Command, CommandError, ExecContext};
use crate::interpreter::CommandResult;

const USAGE: &str = "用法: findstr [/b] [/e] [/l] [/r] [/s] [/i] [/x] [/v] [/n] [/m] [/o] [/p] [/f:file] [/c:string] [/g:file] [/d:dir] strings [[drive:][path]filename[ ...]]";

/// Findstr command: case-insensitive substring search, line by line.
pub struct Findstr;

/// Which files in the working directory a `findstr` file argument selects.
fn selects(filter: &str, name: &str) -> bool {
    let name = name.to_lowercase();
    let filter = filter.to_lowercase();
    match filter.as_str() {
        "*.*" => true,
        "*.txt" => name.ends_with(".txt"),
        "*.log" => name.ends_with(".log"),
        other => name.contains(&other.replacen('*', "", 1)),
    }
}

impl Command for Findstr {
    fn name(&self) -> &str {
        "findstr"
    }

    fn description(&self) -> &str {
        "在文件中搜索字符串"
    }

    fn execute(&self, args: &[String], ctx: &mut ExecContext) -> Result<CommandResult, CommandError> {
        if args.is_empty() {
            return Ok(CommandResult::error(USAGE));
        }

        let numbered = args.iter().any(|a| a.eq_ignore_ascii_case("/n"));
        let mut operands = args.iter().filter(|a| !a.starts_with('/'));
        let Some(needle) = operands.next() else {
            return Ok(CommandResult::error("FINDSTR: 搜索字符串不能为空"));
        };
        let filter = operands.next().map(String::as_str).unwrap_or("*.*");
        let needle = needle.to_lowercase();

        let mut matches = Vec::new();
        let entries = ctx.vfs.list_directory("").unwrap_or_default();
        for entry in entries.iter().filter(|e| e.is_file() && selects(filter, &e.name)) {
            let Ok(content) = ctx.vfs.read_file(&entry.name) else {
                continue;
            };
            for (i, line) in content.split('\n').enumerate() {
                if !line.to_lowercase().contains(&needle) {
                    continue;
                }
                matches.push(if numbered {
                    format!("{}:{}:{line}", entry.name, i + 1)
                } else {
                    format!("{}:{line}", entry.name)
                });
            }
        }

        if matches.is_empty() {
            return Ok(CommandResult::error("FINDSTR: 找不到搜索字符串"));
        }
        Ok(CommandResult::output(matches.join("\n")))
    }
}

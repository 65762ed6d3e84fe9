//! where — Locate files by wildcard pattern.
//!
//! Without `/r`, each pattern is checked against the well-known system
//! executables and then the working directory. `/r dir` walks `dir` and
//! everything below it instead.

use cmdquest_glob::GlobPattern;

use crate::commands::{Command, CommandError, ExecContext};
use crate::interpreter::CommandResult;

const USAGE: &str = "用法: where [/r dir] [/q] [/f] pattern...";

/// Names `where` resolves without touching the drive, in lookup order.
const SYSTEM_FILES: &[(&str, &str)] = &[
    ("notepad.exe", r"C:\Windows\System32\notepad.exe"),
    ("notepad", r"C:\Windows\System32\notepad.exe"),
    ("cmd.exe", r"C:\Windows\System32\cmd.exe"),
    ("cmd", r"C:\Windows\System32\cmd.exe"),
    ("ping.exe", r"C:\Windows\System32\ping.exe"),
    ("ping", r"C:\Windows\System32\ping.exe"),
    ("tasklist.exe", r"C:\Windows\System32\tasklist.exe"),
    ("tasklist", r"C:\Windows\System32\tasklist.exe"),
    ("taskkill.exe", r"C:\Windows\System32\taskkill.exe"),
    ("taskkill", r"C:\Windows\System32\taskkill.exe"),
];

/// Where command.
pub struct Where;

#[derive(Default)]
struct WhereOptions<'a> {
    root: Option<&'a str>,
    quiet: bool,
    patterns: Vec<&'a str>,
}

impl<'a> WhereOptions<'a> {
    fn parse(args: &'a [String]) -> Self {
        let mut opts = WhereOptions::default();
        let mut iter = args.iter().peekable();
        while let Some(arg) = iter.next() {
            if arg.eq_ignore_ascii_case("/r") && iter.peek().is_some() {
                opts.root = iter.next().map(String::as_str);
            } else if arg.eq_ignore_ascii_case("/q") {
                opts.quiet = true;
            } else if !arg.starts_with('/') {
                opts.patterns.push(arg);
            }
        }
        opts
    }
}

impl Command for Where {
    fn name(&self) -> &str {
        "where"
    }

    fn description(&self) -> &str {
        "查找可执行文件的位置"
    }

    fn execute(&self, args: &[String], ctx: &mut ExecContext) -> Result<CommandResult, CommandError> {
        let opts = WhereOptions::parse(args);
        if opts.patterns.is_empty() {
            return Ok(CommandResult::error(USAGE));
        }

        let mut found = Vec::new();
        for text in &opts.patterns {
            let pattern = GlobPattern::new(text)?;
            match opts.root {
                Some(root) => found.extend(
                    ctx.vfs
                        .search_files(&pattern, root)
                        .into_iter()
                        .map(|hit| hit.path),
                ),
                None => {
                    found.extend(
                        SYSTEM_FILES
                            .iter()
                            .filter(|(name, _)| pattern.is_match(name))
                            .map(|(_, path)| path.to_string()),
                    );
                    let cwd = ctx.vfs.cwd().clone();
                    found.extend(
                        ctx.vfs
                            .list_at(&cwd)
                            .unwrap_or_default()
                            .into_iter()
                            .filter(|e| pattern.is_match(&e.name))
                            .map(|e| cwd.join(&e.name).to_string()),
                    );
                }
            }
        }

        if found.is_empty() {
            return Ok(if opts.quiet {
                CommandResult::empty()
            } else {
                CommandResult::error(format!("信息: 找不到文件 \"{}\"。", opts.patterns.join(" ")))
            });
        }

        let score = found.len() as u32 * 2;
        Ok(CommandResult::output(found.join("\n")).with_score(score))
    }
}

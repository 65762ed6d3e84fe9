//! dir — List directory contents.
//!
//! Four modes, chosen by the arguments:
//!
//! | args            | mode                                     | score |
//! |-----------------|------------------------------------------|-------|
//! | `[path]`        | one directory                            | 5     |
//! | `*.txt`         | one directory, filtered                  | 8     |
//! | `/s [path]`     | every directory below, with grand total  | 12    |
//! | `/s *.txt`      | matching files below, grouped by folder  | 15    |

use cmdquest_glob::{GlobPattern, has_wildcards};

use crate::commands::{Command, CommandError, ExecContext};
use crate::interpreter::CommandResult;
use crate::vfs::{DirEntry, FsError, format_file_size};

const NO_FILES: &str = "找不到文件";

/// Dir command: list files and subdirectories.
pub struct Dir;

/// Parsed `dir` arguments.
struct DirOptions<'a> {
    path: &'a str,
    recursive: bool,
    pattern: Option<&'a str>,
}

impl<'a> DirOptions<'a> {
    /// Any token starting with `/` or `-` is a switch; an `s` anywhere in it
    /// turns on recursion. `/a` is accepted but there are no hidden files.
    /// The first wildcard token becomes the pattern and stops path parsing.
    fn parse(args: &'a [String]) -> Self {
        let mut opts = DirOptions {
            path: "",
            recursive: false,
            pattern: None,
        };
        for arg in args {
            if arg.starts_with('/') || arg.starts_with('-') {
                if arg.to_lowercase().contains('s') {
                    opts.recursive = true;
                }
            } else if opts.pattern.is_none() {
                if has_wildcards(arg) {
                    opts.pattern = Some(arg);
                } else {
                    opts.path = arg;
                }
            }
        }
        opts
    }
}

impl Command for Dir {
    fn name(&self) -> &str {
        "dir"
    }

    fn aliases(&self) -> &[&str] {
        &["ls"]
    }

    fn description(&self) -> &str {
        "显示目录中的文件和子目录列表"
    }

    fn execute(&self, args: &[String], ctx: &mut ExecContext) -> Result<CommandResult, CommandError> {
        let opts = DirOptions::parse(args);
        let pattern = opts.pattern.map(GlobPattern::new).transpose()?;

        match (opts.recursive, pattern) {
            (false, None) => Ok(list_one(ctx, opts.path, None)),
            (false, Some(pat)) => Ok(list_one(ctx, opts.path, Some(&pat))),
            (true, None) => Ok(list_recursive(ctx, opts.path)),
            (true, Some(pat)) => Ok(list_recursive_matching(ctx, opts.path, &pat)),
        }
    }
}

fn entry_line(entry: &DirEntry) -> String {
    let size = if entry.is_dir() {
        "<DIR>".to_string()
    } else {
        format_file_size(entry.size)
    };
    format!("{:<20} {:>15} {}\n", entry.date_label(), size, entry.name)
}

fn header(path: &str) -> String {
    format!("\n {path} 的目录\n\n")
}

fn footer(files: usize, bytes: u64, dirs: usize) -> String {
    format!(
        "\n               {files} 个文件 {}\n               {dirs} 个目录\n",
        format_file_size(bytes)
    )
}

/// Totals for one listing block.
#[derive(Default)]
struct Tally {
    files: usize,
    dirs: usize,
    bytes: u64,
}

impl Tally {
    fn add(&mut self, entry: &DirEntry) {
        if entry.is_dir() {
            self.dirs += 1;
        } else {
            self.files += 1;
            self.bytes += entry.size;
        }
    }

    fn absorb(&mut self, other: &Tally) {
        self.files += other.files;
        self.dirs += other.dirs;
        self.bytes += other.bytes;
    }
}

fn list_one(ctx: &ExecContext, path: &str, pattern: Option<&GlobPattern>) -> CommandResult {
    let (Some(dir), Some(entries)) = (ctx.vfs.canonicalize(path), ctx.vfs.list_directory(path)) else {
        return FsError::PathNotFound.into();
    };

    let mut out = header(&dir.to_string());
    let mut tally = Tally::default();
    for entry in entries
        .iter()
        .filter(|e| pattern.is_none_or(|p| p.is_match(&e.name)))
    {
        out.push_str(&entry_line(entry));
        tally.add(entry);
    }

    if pattern.is_some() && tally.files == 0 && tally.dirs == 0 {
        return CommandResult::error(NO_FILES);
    }

    out.push_str(&footer(tally.files, tally.bytes, tally.dirs));
    CommandResult::output(out).with_score(if pattern.is_some() { 8 } else { 5 })
}

fn list_recursive(ctx: &ExecContext, path: &str) -> CommandResult {
    let Some(walk) = ctx.vfs.walk_directories(path) else {
        return FsError::PathNotFound.into();
    };

    let mut out = String::new();
    let mut total = Tally::default();
    for (dir, entries) in &walk {
        out.push_str(&header(&dir.to_string()));
        let mut local = Tally::default();
        for entry in entries {
            out.push_str(&entry_line(entry));
            local.add(entry);
        }
        out.push_str(&footer(local.files, local.bytes, local.dirs));
        total.absorb(&local);
    }

    out.push_str("\n     文件总数:\n");
    out.push_str(&format!(
        "               {} 个文件 {}\n               {} 个目录\n",
        total.files,
        format_file_size(total.bytes),
        total.dirs
    ));
    CommandResult::output(out).with_score(12)
}

fn list_recursive_matching(ctx: &ExecContext, path: &str, pattern: &GlobPattern) -> CommandResult {
    let Some(walk) = ctx.vfs.walk_directories(path) else {
        return FsError::PathNotFound.into();
    };

    let mut out = String::new();
    let mut total = Tally::default();
    for (dir, entries) in &walk {
        let matches: Vec<&DirEntry> = entries
            .iter()
            .filter(|e| e.is_file() && pattern.is_match(&e.name))
            .collect();
        if matches.is_empty() {
            continue;
        }

        out.push_str(&header(&dir.to_string()));
        let mut local = Tally::default();
        for entry in matches {
            out.push_str(&entry_line(entry));
            local.add(entry);
        }
        out.push_str(&format!(
            "\n               {} 个文件 {}\n\n",
            local.files,
            format_file_size(local.bytes)
        ));
        total.absorb(&local);
    }

    if total.files == 0 {
        return CommandResult::error(NO_FILES);
    }

    out.push_str(&format!(
        "文件总数: {} 个文件 {}\n",
        total.files,
        format_file_size(total.bytes)
    ));
    CommandResult::output(out).with_score(15)
}

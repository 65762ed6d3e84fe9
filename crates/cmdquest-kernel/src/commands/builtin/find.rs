//! find — Search for files by name below the working directory.

use cmdquest_glob::GlobPattern;

use crate::commands::{Command, CommandError, ExecContext};
use crate::interpreter::CommandResult;

/// Find command: list every entry whose name matches a wildcard pattern.
pub struct Find;

impl Command for Find {
    fn name(&self) -> &str {
        "find"
    }

    fn description(&self) -> &str {
        "在文件中搜索字符串"
    }

    fn execute(&self, args: &[String], ctx: &mut ExecContext) -> Result<CommandResult, CommandError> {
        let pattern = GlobPattern::new(args.first().ok_or(CommandError::Syntax)?)?;
        let hits = ctx.vfs.search_files(&pattern, "");

        if hits.is_empty() {
            return Ok(CommandResult::output("没有找到匹配的文件。"));
        }

        let mut out = format!("搜索结果 ({} 个匹配项):\n\n", hits.len());
        for hit in &hits {
            out.push_str(&hit.path);
            out.push('\n');
        }
        Ok(CommandResult::output(out).with_score(8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::builtin::testing::{ctx, run};

    #[test]
    fn lists_matches_below_cwd() {
        let mut ctx = ctx();
        let r = run(&Find, &mut ctx, &["*.txt"]);
        assert_eq!(r.score, Some(8));
        assert!(r.output.starts_with("搜索结果 (3 个匹配项):\n\n"));
        assert!(r.output.contains("C:\\Users\\Student\\Desktop\\game.txt\n"));
    }

    #[test]
    fn exact_names_are_anchored() {
        let mut ctx = ctx();
        let r = run(&Find, &mut ctx, &["data"]);
        assert_eq!(r.output, "没有找到匹配的文件。");
        assert_eq!(r.score, None);
        assert!(!r.is_error());

        let r = run(&Find, &mut ctx, &["DATA.CSV"]);
        assert!(r.output.contains("Downloads\\data.csv"));
    }
}

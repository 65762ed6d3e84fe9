//! taskkill — Terminate a simulated process.

use crate::commands::{Command, CommandError, ExecContext, NOTEPAD_PID};
use crate::interpreter::CommandResult;

const USAGE: &str = "错误: 缺少参数/选项。\n\n用法: taskkill [/f] [/pid processid | /im imagename]";
const NO_TARGET: &str = "错误: 缺少进程标识符。\n请使用 /PID 或 /IM 参数指定要终止的进程。";

enum Target<'a> {
    Pid(&'a str),
    Image(&'a str),
}

/// Taskkill command. Only notepad (PID 1234) can be terminated.
///
/// Every result sets `success`, which the level rules read.
pub struct Taskkill;

impl Command for Taskkill {
    fn name(&self) -> &str {
        "taskkill"
    }

    fn description(&self) -> &str {
        "终止指定的进程"
    }

    fn execute(&self, args: &[String], ctx: &mut ExecContext) -> Result<CommandResult, CommandError> {
        if args.is_empty() {
            return Ok(CommandResult::error(USAGE).with_success(false));
        }

        // `/f` is accepted and ignored.
        let mut target = None;
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            let switch = arg.to_lowercase();
            if switch == "/pid" || switch == "/im" {
                let Some(value) = iter.next() else { break };
                target = Some(if switch == "/pid" {
                    Target::Pid(value)
                } else {
                    Target::Image(value)
                });
            }
        }

        let Some(target) = target else {
            return Ok(CommandResult::error(NO_TARGET).with_success(false));
        };

        let (message, killed) = match target {
            Target::Pid(pid) => {
                if pid.parse::<u32>().ok() == Some(NOTEPAD_PID) && ctx.processes.kill(NOTEPAD_PID) {
                    (format!("成功: 已终止 PID 为 {pid} 的进程。"), true)
                } else {
                    (format!("错误: 找不到 PID 为 \"{pid}\" 的进程。"), false)
                }
            }
            Target::Image(name) => {
                let lower = name.to_lowercase();
                let is_notepad = lower == "notepad.exe" || lower == "notepad";
                if is_notepad && ctx.processes.kill(NOTEPAD_PID) {
                    (format!("成功: 已终止进程 \"{name}\"。"), true)
                } else {
                    (format!("错误: 这不是目标进程 \"{name}\"。"), false)
                }
            }
        };

        let result = if message.starts_with("成功") {
            CommandResult::output(message)
        } else {
            CommandResult::error(message)
        };
        Ok(result.with_success(killed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::builtin::testing::{ctx, run};

    #[test]
    fn kill_by_pid_once() {
        let mut ctx = ctx();
        let r = run(&Taskkill, &mut ctx, &["/PID", "1234"]);
        assert!(r.ok());
        assert_eq!(r.success, Some(true));
        assert_eq!(r.output, "成功: 已终止 PID 为 1234 的进程。");
        assert!(!ctx.processes.is_running(NOTEPAD_PID));

        let again = run(&Taskkill, &mut ctx, &["/pid", "1234"]);
        assert!(again.is_error());
        assert_eq!(again.success, Some(false));
        assert_eq!(again.output, "错误: 找不到 PID 为 \"1234\" 的进程。");
    }

    #[test]
    fn kill_by_image() {
        let mut ctx = ctx();
        let r = run(&Taskkill, &mut ctx, &["/f", "/im", "Notepad.exe"]);
        assert_eq!(r.success, Some(true));
        assert_eq!(r.output, "成功: 已终止进程 \"Notepad.exe\"。");
    }

    #[test]
    fn other_processes_are_protected() {
        let mut ctx = ctx();
        let r = run(&Taskkill, &mut ctx, &["/IM", "chrome.exe"]);
        assert_eq!(r.output, "错误: 这不是目标进程 \"chrome.exe\"。");
        assert_eq!(r.success, Some(false));
        let r = run(&Taskkill, &mut ctx, &["/PID", "4"]);
        assert!(r.is_error());
        assert!(ctx.processes.is_running(NOTEPAD_PID));
    }

    #[test]
    fn argument_errors() {
        let mut ctx = ctx();
        let r = run(&Taskkill, &mut ctx, &[]);
        assert_eq!(r.output, USAGE);
        assert_eq!(r.success, Some(false));

        let r = run(&Taskkill, &mut ctx, &["/f"]);
        assert_eq!(r.output, NO_TARGET);

        let r = run(&Taskkill, &mut ctx, &["/pid"]);
        assert_eq!(r.output, NO_TARGET);
    }
}

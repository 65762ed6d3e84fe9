//! date, time, ver, whoami, pwd — Read-only system information.

use chrono::{Datelike, Local, NaiveDateTime, Weekday};

use crate::commands::{Command, CommandError, ExecContext};
use crate::interpreter::CommandResult;

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "星期一",
        Weekday::Tue => "星期二",
        Weekday::Wed => "星期三",
        Weekday::Thu => "星期四",
        Weekday::Fri => "星期五",
        Weekday::Sat => "星期六",
        Weekday::Sun => "星期日",
    }
}

fn format_date(now: NaiveDateTime) -> String {
    format!("当前日期: {}{}", now.format("%Y/%m/%d"), weekday_name(now.weekday()))
}

fn format_time(now: NaiveDateTime) -> String {
    format!("当前时间: {}", now.format("%H:%M:%S"))
}

pub struct Date;

impl Command for Date {
    fn name(&self) -> &str {
        "date"
    }

    fn description(&self) -> &str {
        "显示或设置日期"
    }

    fn execute(&self, _args: &[String], _ctx: &mut ExecContext) -> Result<CommandResult, CommandError> {
        Ok(CommandResult::output(format_date(Local::now().naive_local())))
    }
}

pub struct Time;

impl Command for Time {
    fn name(&self) -> &str {
        "time"
    }

    fn description(&self) -> &str {
        "显示或设置系统时间"
    }

    fn execute(&self, _args: &[String], _ctx: &mut ExecContext) -> Result<CommandResult, CommandError> {
        Ok(CommandResult::output(format_time(Local::now().naive_local())))
    }
}

pub struct Ver;

impl Command for Ver {
    fn name(&self) -> &str {
        "ver"
    }

    fn description(&self) -> &str {
        "显示 Windows 的版本"
    }

    fn execute(&self, _args: &[String], _ctx: &mut ExecContext) -> Result<CommandResult, CommandError> {
        Ok(CommandResult::output(
            "Microsoft Windows [版本 10.0.19041.1]\nWindows命令行学习游戏 v1.0",
        ))
    }
}

pub struct Whoami;

impl Command for Whoami {
    fn name(&self) -> &str {
        "whoami"
    }

    fn description(&self) -> &str {
        "显示当前用户名"
    }

    fn execute(&self, _args: &[String], _ctx: &mut ExecContext) -> Result<CommandResult, CommandError> {
        Ok(CommandResult::output(r"DESKTOP-GAME\Student"))
    }
}

pub struct Pwd;

impl Command for Pwd {
    fn name(&self) -> &str {
        "pwd"
    }

    fn description(&self) -> &str {
        "显示当前目录的完整路径"
    }

    fn execute(&self, _args: &[String], ctx: &mut ExecContext) -> Result<CommandResult, CommandError> {
        Ok(CommandResult::output(ctx.cwd()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::builtin::testing::{ctx, run};
    use crate::vfs::{DATE_FORMAT, WinPath};

    fn at(text: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(text, DATE_FORMAT).unwrap()
    }

    #[test]
    fn date_has_weekday() {
        assert_eq!(format_date(at("2024-01-15 10:30")), "当前日期: 2024/01/15星期一");
        assert_eq!(format_date(at("2024-01-21 00:00")), "当前日期: 2024/01/21星期日");
    }

    #[test]
    fn time_is_hms() {
        assert_eq!(format_time(at("2024-01-15 09:05")), "当前时间: 09:05:00");
    }

    #[test]
    fn static_outputs() {
        let mut ctx = ctx();
        assert_eq!(run(&Whoami, &mut ctx, &[]).output, r"DESKTOP-GAME\Student");
        assert!(run(&Ver, &mut ctx, &[]).output.starts_with("Microsoft Windows [版本 10.0.19041.1]"));
        assert!(run(&Date, &mut ctx, &[]).output.starts_with("当前日期: "));
        assert!(run(&Time, &mut ctx, &[]).output.starts_with("当前时间: "));
    }

    #[test]
    fn pwd_tracks_cwd() {
        let mut ctx = ctx();
        ctx.vfs.change_directory(&WinPath::root().to_string()).unwrap();
        assert_eq!(run(&Pwd, &mut ctx, &[]).output, r"C:\");
    }
}

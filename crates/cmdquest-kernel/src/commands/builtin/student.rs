//! setinfo, genpass — Record the player's identity and issue the final
//! password.

use chrono::Utc;

use crate::commands::{Command, CommandError, ExecContext, StudentInfo};
use crate::interpreter::CommandResult;
use crate::levels::generate_encrypted_password;

const SETINFO_USAGE: &str = "用法: setinfo <学号> <姓名>\n示例: setinfo 2023001 张三";

/// Setinfo command: `setinfo <id> <name...>`.
pub struct SetInfo;

impl Command for SetInfo {
    fn name(&self) -> &str {
        "setinfo"
    }

    fn description(&self) -> &str {
        "设置学生信息（学号和姓名）"
    }

    fn execute(&self, args: &[String], ctx: &mut ExecContext) -> Result<CommandResult, CommandError> {
        let [student_id, rest @ ..] = args else {
            return Ok(CommandResult::error(SETINFO_USAGE));
        };
        if rest.is_empty() {
            return Ok(CommandResult::error(SETINFO_USAGE));
        }

        if !student_id.chars().all(|c| c.is_ascii_digit()) {
            return Ok(CommandResult::error("错误: 学号必须是数字"));
        }

        let name = rest.join(" ");
        let len = name.chars().count();
        if !(2..=20).contains(&len) {
            return Ok(CommandResult::error("错误: 姓名长度必须在2-20个字符之间"));
        }

        let output = format!("学生信息设置成功:\n学号: {student_id}\n姓名: {name}");
        ctx.student = Some(StudentInfo {
            student_id: student_id.clone(),
            name,
        });
        Ok(CommandResult::success(output))
    }
}

/// Genpass command: encrypt identity, score, and play time into a password.
pub struct GenPass;

impl Command for GenPass {
    fn name(&self) -> &str {
        "genpass"
    }

    fn description(&self) -> &str {
        "生成加密密码"
    }

    fn execute(&self, _args: &[String], ctx: &mut ExecContext) -> Result<CommandResult, CommandError> {
        let Some(student) = &ctx.student else {
            return Ok(CommandResult::error("错误: 请先使用 setinfo 命令设置学生信息"));
        };

        let password = generate_encrypted_password(
            &student.student_id,
            &student.name,
            ctx.stats.score,
            ctx.stats.elapsed().as_secs(),
            Utc::now().timestamp_millis(),
        );

        Ok(CommandResult::success(format!(
            "加密密码生成成功:\n\n密码: {password}\n\n请将此密码页面发送给老师进行验证。\n老师将使用密钥解锁您的信息。"
        )))
    }
}

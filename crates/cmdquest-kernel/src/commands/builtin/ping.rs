//! ping — Simulated echo requests.

use crate::commands::{Command, CommandError, ExecContext};
use crate::interpreter::CommandResult;

const DEFAULT_COUNT: u32 = 4;

/// Largest `-n` accepted; the replies are built in memory.
const MAX_COUNT: u32 = 100;

const USAGE: &str = "用法: ping [-n count] 目标主机\n\n选项:\n    -n count    要发送的回显请求数。";

/// Ping command: every host answers, with a random 1 to 10 ms delay.
pub struct Ping;

impl Command for Ping {
    fn name(&self) -> &str {
        "ping"
    }

    fn description(&self) -> &str {
        "测试网络连接"
    }

    fn execute(&self, args: &[String], ctx: &mut ExecContext) -> Result<CommandResult, CommandError> {
        let Some(first) = args.first() else {
            return Ok(CommandResult::error(USAGE));
        };

        let is_count_flag = first == "-n" || first == "/n";
        let (count, target) = match args {
            [_, n, target, ..] if is_count_flag => {
                let count = n.parse().ok().filter(|c| *c > 0).unwrap_or(DEFAULT_COUNT);
                (count, target.as_str())
            }
            _ if is_count_flag => return Ok(CommandResult::error(USAGE)),
            _ => (DEFAULT_COUNT, first.as_str()),
        };
        if count > MAX_COUNT {
            return Ok(CommandResult::error(format!(
                "错误: -n 的值必须介于 1 和 {MAX_COUNT} 之间。"
            )));
        }

        let mut out = format!("\n正在 Ping {target}:\n\n");
        for _ in 0..count {
            let ms = ctx.latency_ms();
            out.push_str(&format!("来自 {target} 的回复: 字节=32 时间={ms}ms TTL=64\n"));
        }
        out.push_str(&format!("\n{target} 的 Ping 统计信息:\n"));
        out.push_str(&format!(
            "    数据包: 已发送 = {count}，已接收 = {count}，丢失 = 0 (0% 丢失)，\n"
        ));
        out.push_str("往返行程的估计时间(以毫秒为单位):\n");
        out.push_str("    最短 = 1ms，最长 = 10ms，平均 = 5ms");

        Ok(CommandResult::output(out))
    }
}

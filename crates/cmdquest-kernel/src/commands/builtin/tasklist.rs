//! tasklist — Show the simulated process table.

use crate::commands::{Command, CommandError, ExecContext, NOTEPAD_PID};
use crate::interpreter::CommandResult;

struct Process {
    image: &'static str,
    pid: u32,
    session: &'static str,
    session_id: u32,
    memory: &'static str,
}

const fn proc(image: &'static str, pid: u32, session: &'static str, session_id: u32, memory: &'static str) -> Process {
    Process {
        image,
        pid,
        session,
        session_id,
        memory,
    }
}

const PROCESSES: &[Process] = &[
    proc("System Idle Process", 0, "Services", 0, "24 K"),
    proc("System", 4, "Services", 0, "228 K"),
    proc("smss.exe", 364, "Services", 0, "1,084 K"),
    proc("csrss.exe", 584, "Services", 0, "4,784 K"),
    proc("winlogon.exe", 608, "Console", 1, "2,652 K"),
    proc("services.exe", 652, "Services", 0, "3,892 K"),
    proc("lsass.exe", 664, "Services", 0, "6,744 K"),
    proc("svchost.exe", 824, "Services", 0, "4,616 K"),
    proc("svchost.exe", 892, "Services", 0, "3,028 K"),
    proc("notepad.exe", NOTEPAD_PID, "Console", 1, "8,192 K"),
    proc("chrome.exe", 5678, "Console", 1, "256,000 K"),
];

/// Tasklist command: the fixed table, minus any killed process.
pub struct Tasklist;

impl Command for Tasklist {
    fn name(&self) -> &str {
        "tasklist"
    }

    fn description(&self) -> &str {
        "显示当前运行的进程列表"
    }

    fn execute(&self, _args: &[String], ctx: &mut ExecContext) -> Result<CommandResult, CommandError> {
        let mut out = String::from(
            "\n映像名称                       PID 会话名              会话#       内存使用\n",
        );
        out.push_str("========================= ======== ================ =========== ============\n");

        for p in PROCESSES {
            // Only notepad can be killed; everything else always runs.
            if p.pid == NOTEPAD_PID && !ctx.processes.is_running(p.pid) {
                continue;
            }
            out.push_str(&format!(
                "{:<25} {:>8} {:<16} {:>11} {:>12}\n",
                p.image, p.pid, p.session, p.session_id, p.memory
            ));
        }

        Ok(CommandResult::output(out))
    }
}

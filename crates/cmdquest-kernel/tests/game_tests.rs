//! End-to-end sessions through the kernel.
//!
//! Each test drives a `Kernel` with command lines the way a player would and
//! checks the results, the drive, and the level progression.

use cmdquest_kernel::interpreter::OutputKind;
use cmdquest_kernel::levels::{EventLog, GameEvent, ManualTimer, MessageStyle};
use cmdquest_kernel::{Kernel, KernelConfig};

struct Session {
    kernel: Kernel,
    log: EventLog,
    timer: ManualTimer,
}

fn setup_at(level: u32) -> Session {
    let log = EventLog::new();
    let timer = ManualTimer::new();
    let kernel = Kernel::new(
        KernelConfig::transient().starting_at(level),
        Box::new(log.clone()),
        Box::new(timer.clone()),
    );
    Session { kernel, log, timer }
}

fn setup() -> Session {
    setup_at(1)
}

impl Session {
    fn advance(&mut self) {
        let handle = self.timer.fire_next().expect("no level advance pending");
        assert!(self.kernel.resolve_timer(handle));
    }

    fn task_marks(&self) -> Vec<String> {
        self.log
            .take()
            .into_iter()
            .filter_map(|e| match e {
                GameEvent::Message {
                    text,
                    style: MessageStyle::TaskComplete,
                } => Some(text),
                _ => None,
            })
            .collect()
    }
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_navigation_level() {
    let mut s = setup();
    assert_eq!(s.kernel.vfs().current_path(), r"C:\Users\Student");

    s.kernel.execute("dir");
    assert!(s.kernel.levels().session().is_done("nav_1"));
    assert!(!s.kernel.levels().is_advancing());

    s.kernel.execute("cd Documents");
    assert_eq!(s.kernel.vfs().current_path(), r"C:\Users\Student\Documents");
    assert!(s.kernel.levels().is_advancing());
    // dir 5 + cd 3 + level 50
    assert_eq!(s.kernel.score(), 58);
}

#[test]
fn test_path_round_trip() {
    let mut s = setup();
    for path in [
        r"C:\Program Files",
        r"C:\Users\Student\Downloads",
        r"C:\Windows\System32",
        r"C:\",
    ] {
        let r = s.kernel.execute(&format!("cd \"{path}\""));
        assert!(r.ok(), "cd {path}: {}", r.output);
        assert_eq!(s.kernel.vfs().current_path(), path);
    }
}

#[test]
fn test_cd_dotdot_stops_at_root() {
    let mut s = setup();
    s.kernel.execute(r"cd ..\..\..\..");
    assert_eq!(s.kernel.vfs().current_path(), r"C:\");
}

// ============================================================================
// Task completion
// ============================================================================

#[test]
fn test_task_marked_once() {
    let mut s = setup();
    s.log.take();
    s.kernel.execute("dir");
    s.kernel.execute("dir");
    assert_eq!(s.task_marks(), vec!["✓ 任务完成: 使用 dir 命令查看当前目录"]);
    // Command scores still accrue each time.
    assert_eq!(s.kernel.score(), 10);
}

#[test]
fn test_typing_without_effect_does_not_win() {
    let mut s = setup_at(6);
    s.kernel.execute("dir");
    // Mentions both names, so the task fires, but nothing moves.
    let r = s.kernel.execute("move nothing.txt moved.txt source.txt");
    assert!(r.is_error());
    s.kernel.execute("dir");
    assert!(s.kernel.levels().session().all_done());
    assert!(!s.kernel.levels().is_advancing());

    s.kernel.execute("move source.txt moved.txt");
    assert!(s.kernel.levels().is_advancing());
    assert!(s.kernel.vfs().is_file(r"C:\Users\Student\Documents\moved.txt"));
}

// ============================================================================
// Levels, played through
// ============================================================================

#[test]
fn test_first_five_levels() {
    let mut s = setup();
    for line in ["dir", "cd Documents"] {
        s.kernel.execute(line);
    }
    s.advance();

    for line in ["mkdir my_folder", "dir"] {
        s.kernel.execute(line);
    }
    s.advance();
    assert_eq!(s.kernel.levels().level_number(), 3);

    for line in ["dir source", r"copy source\test.txt target\test.txt", "dir target"] {
        s.kernel.execute(line);
    }
    s.advance();

    for line in ["dir", "del delete_me.txt", "dir"] {
        s.kernel.execute(line);
    }
    s.advance();

    for line in ["type readme.txt", "type config.txt"] {
        let r = s.kernel.execute(line);
        assert_eq!(r.kind, OutputKind::Output);
    }
    assert!(s.kernel.levels().is_advancing());
    s.advance();
    assert_eq!(s.kernel.levels().level_number(), 6);
}

#[test]
fn test_command_argument_level() {
    let mut s = setup_at(7);
    let r = s.kernel.execute("del /Q /F readonly.txt");
    assert_eq!(r.output, "");
    assert!(s.kernel.levels().is_advancing());
}

#[test]
fn test_rmdir_level() {
    let mut s = setup_at(9);
    s.kernel.execute("dir");
    s.kernel.execute("rmdir empty_folder");
    let r = s.kernel.execute("rmdir full_folder");
    assert_eq!(r.output, "目录不是空的。");
    assert!(!s.kernel.levels().is_advancing());
    s.kernel.execute("rmdir /S full_folder");
    assert!(s.kernel.levels().is_advancing());
}

#[test]
fn test_ping_level() {
    let mut s = setup_at(10);
    let r = s.kernel.execute("ping localhost");
    assert_eq!(r.output.matches("来自 localhost 的回复").count(), 4);
    let r = s.kernel.execute("ping -n 2 localhost");
    assert_eq!(r.output.matches("来自 localhost 的回复").count(), 2);
    assert!(s.kernel.levels().is_advancing());
}

#[test]
fn test_oversized_ping_keeps_session_alive() {
    let mut s = setup_at(10);
    let r = s.kernel.execute("ping -n 2000000 localhost");
    assert_eq!(r.kind, OutputKind::Error);
    assert!(r.output.len() < 100);
    assert!(!s.kernel.levels().is_advancing());

    let r = s.kernel.execute("ping -n 3");
    assert_eq!(r.kind, OutputKind::Error);
    assert!(r.output.starts_with("用法: ping"));

    s.kernel.execute("ping localhost");
    assert!(!s.kernel.levels().is_advancing());

    let r = s.kernel.execute("ping -n 2 localhost");
    assert_eq!(r.output.matches("来自 localhost 的回复").count(), 2);
    assert!(s.kernel.levels().is_advancing());
}

#[test]
fn test_taskkill_scenario() {
    let mut s = setup_at(12);
    s.kernel.execute("tasklist");
    let first = s.kernel.execute("taskkill /PID 1234");
    assert_eq!(first.success, Some(true));
    assert!(s.kernel.levels().is_advancing());

    let second = s.kernel.execute("taskkill /PID 1234");
    assert_eq!(second.success, Some(false));
    assert!(second.is_error());
    assert!(!s.kernel.execute("tasklist").output.contains("notepad.exe"));
}

#[test]
fn test_wildcard_level() {
    let mut s = setup_at(13);
    s.kernel.execute("cd wildcard_test");
    s.kernel.execute("dir *.txt");
    let r = s.kernel.execute("del *.bak");
    assert_eq!(r.output, "已删除 2 个文件");
    assert!(s.kernel.levels().is_advancing());
    assert!(!s.kernel.vfs().exists("backup1.bak"));
    assert!(!s.kernel.vfs().exists("backup2.bak"));
    assert!(s.kernel.vfs().exists("temp.tmp"));
}

#[test]
fn test_search_level_and_file_search_level() {
    let mut s = setup_at(13);
    s.kernel.reset_to_level(14);
    assert_eq!(
        s.kernel.vfs().current_path(),
        r"C:\Users\Student\Documents\search_test"
    );
    let r = s.kernel.execute(r#"findstr /n "error" *.*"#);
    assert!(r.output.contains("file1.txt:1:"));
    assert!(r.output.contains("log.txt:2:error: Connection failed"));
    s.kernel.execute("findstr error file1.txt");
    assert!(s.kernel.levels().is_advancing());
    s.advance();

    assert_eq!(s.kernel.vfs().current_path(), r"C:\Users\Student\Documents\project");
    let r = s.kernel.execute("where /r . *.js");
    assert!(r.output.contains(r"project\src\main.js"));
    s.kernel.execute("dir /s *.ini");
    assert!(s.kernel.levels().is_advancing());
}

#[test]
fn test_game_completion() {
    let mut s = setup_at(16);
    let r = s.kernel.execute("genpass");
    assert!(r.is_error());
    s.kernel.execute("setinfo 2023001 张三");
    let r = s.kernel.execute("genpass");
    assert_eq!(r.kind, OutputKind::Success);

    let levels = s.kernel.levels();
    assert!(levels.is_game_complete());
    let code = levels.completion_code().expect("completion code");
    assert!(!code.is_empty());
    assert!(s.timer.pending().is_empty());
}

// ============================================================================
// Timer hygiene
// ============================================================================

#[test]
fn test_reset_during_advance_discards_timer() {
    let mut s = setup();
    s.kernel.execute("cd documents");
    let (stale, _) = s.timer.pending()[0];

    s.kernel.reset_game();
    assert!(s.timer.pending().is_empty());
    assert!(!s.kernel.resolve_timer(stale));
    assert_eq!(s.kernel.levels().level_number(), 1);
    assert_eq!(s.kernel.vfs().current_path(), r"C:\Users\Student");
}

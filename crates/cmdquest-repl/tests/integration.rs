//! Integration tests for the cmdquest REPL.
//!
//! These tests run scripts through the REPL and verify behavior.

use cmdquest_kernel::KernelConfig;
use cmdquest_repl::Repl;

/// Helper to run multiple lines through a REPL and collect outputs.
fn run_script_on(repl: &mut Repl, script: &str) -> Vec<String> {
    let mut outputs = Vec::new();

    for line in script.lines() {
        // Skip comments and empty lines
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match repl.process_line(line) {
            Ok(Some(output)) => outputs.push(output),
            Ok(None) => {}
            Err(e) => outputs.push(format!("ERROR: {}", e)),
        }
    }

    outputs
}

/// A REPL with the opening level intro already consumed.
fn fresh() -> Repl {
    let mut repl = Repl::new();
    repl.banner().expect("banner");
    repl
}

fn run_script(script: &str) -> Vec<String> {
    run_script_on(&mut fresh(), script)
}

/// Helper to check if output contains expected strings.
fn outputs_contain(outputs: &[String], expected: &[&str]) -> bool {
    let joined = outputs.join("\n");
    expected.iter().all(|e| joined.contains(e))
}

// ============================================================================
// Commands
// ============================================================================

#[test]
fn commands_print_output() {
    let outputs = run_script(r#"
        echo hello world
        type Desktop\game.txt
    "#);
    assert_eq!(outputs[0], "hello world");
    assert!(outputs_contain(&outputs, &["这是桌面上的一个游戏文件。"]));
}

#[test]
fn unknown_command_is_reported() {
    let outputs = run_script("format c:");
    assert!(outputs_contain(&outputs, &["'format' 不是内部或外部命令"]));
}

#[test]
fn silent_commands_print_nothing() {
    let outputs = run_script(r#"
        mkdir scratch
        del /q nothing.txt
    "#);
    assert!(outputs.is_empty(), "got: {outputs:?}");
}

#[test]
fn exit_sets_quit() {
    let mut repl = fresh();
    assert!(!repl.should_quit());
    let outputs = run_script_on(&mut repl, "exit");
    assert!(repl.should_quit());
    assert!(!outputs.is_empty());
}

// ============================================================================
// Levels
// ============================================================================

#[test]
fn banner_shows_first_level() {
    let mut repl = Repl::new();
    let banner = repl.banner().unwrap().unwrap();
    assert!(banner.contains("=== 第 1 关：基础导航 ==="));
    assert!(repl.banner().unwrap().is_none());
}

#[test]
fn winning_a_level_starts_the_next() {
    let outputs = run_script(r#"
        dir
        cd Documents
    "#);
    assert!(outputs_contain(
        &outputs,
        &[
            "✓ 任务完成: 使用 dir 命令查看当前目录",
            "🎉 恭喜！关卡 1 完成！",
            "获得分数: +50",
            "=== 第 2 关：创建目录 ===",
        ]
    ));
}

#[test]
fn level_and_hint_meta_commands() {
    let mut repl = fresh();
    run_script_on(&mut repl, "dir");
    let outputs = run_script_on(&mut repl, "/level\n/hint");
    assert!(outputs[0].starts_with("第 1 关 / 共 16 关：基础导航"));
    assert!(outputs[0].contains("[✓] 使用 dir 命令查看当前目录"));
    assert!(outputs[0].contains("[ ] 使用 cd Documents 进入 Documents 目录"));
    assert!(outputs[1].contains("1. 使用 dir 命令查看当前目录内容"));
}

#[test]
fn reset_to_level() {
    let mut repl = fresh();
    let outputs = run_script_on(&mut repl, "/reset 13");
    assert!(outputs_contain(&outputs, &["=== 第 13 关：通配符操作 ==="]));
    assert_eq!(repl.prompt(), r"C:\Users\Student\Documents>");

    let outputs = run_script_on(&mut repl, "/reset x");
    assert_eq!(outputs, vec!["Usage: /reset [level]"]);
}

#[test]
fn reset_game_clears_score() {
    let mut repl = fresh();
    run_script_on(&mut repl, "dir\ndir");
    assert_eq!(repl.kernel().score(), 10);
    run_script_on(&mut repl, "/reset");
    assert_eq!(repl.kernel().score(), 0);
    let outputs = run_script_on(&mut repl, "/score");
    assert!(outputs[0].starts_with("分数: 0\n命令数: 0"));
}

#[test]
fn configured_start_level() {
    let mut repl = Repl::with_config(KernelConfig::transient().starting_at(16));
    let outputs = run_script_on(&mut repl, r#"
        setinfo 2023001 张三
        genpass
        /level
    "#);
    assert!(outputs_contain(
        &outputs,
        &["学生信息设置成功", "密码: ", "🎉 恭喜通关！", "全部关卡已完成。通关码: "]
    ));
}

// ============================================================================
// Meta-commands
// ============================================================================

#[test]
fn json_mode() {
    let mut repl = fresh();
    let outputs = run_script_on(&mut repl, "/json\necho hi");
    assert_eq!(outputs[0], "JSON mode: ON");
    let value: serde_json::Value = serde_json::from_str(&outputs[1]).unwrap();
    assert_eq!(value["output"], "hi");
    assert_eq!(value["kind"], "output");
}

#[test]
fn history_lists_commands() {
    let outputs = run_script("dir\ncd ..\n/history");
    assert_eq!(outputs.last().unwrap(), "   1  dir\n   2  cd ..");
}

#[test]
fn unknown_meta_command() {
    let outputs = run_script("/bogus");
    assert!(outputs_contain(&outputs, &["Unknown command: /bogus"]));
}

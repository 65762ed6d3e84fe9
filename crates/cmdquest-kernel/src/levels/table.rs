//! The sixteen levels.

use tracing::debug;

use super::level::{Level, LevelSession, Observation, Rule, Task};
use crate::commands::ExecContext;
use crate::interpreter::OutputKind;
use crate::vfs::VirtualFs;

const HOME: &str = r"C:\Users\Student";
const DOCUMENTS: &str = r"C:\Users\Student\Documents";

// Setup steps tolerate failure: a level replayed on a dirty drive simply
// finds some of its files already there.

fn cd(ctx: &mut ExecContext, path: &str) {
    if let Err(e) = ctx.vfs.change_directory(path) {
        debug!(path, error = %e, "level setup: cd skipped");
    }
}

fn mkdir(ctx: &mut ExecContext, path: &str) {
    if let Err(e) = ctx.vfs.create_directory(path) {
        debug!(path, error = %e, "level setup: mkdir skipped");
    }
}

fn touch(ctx: &mut ExecContext, path: &str, content: &str) {
    if let Err(e) = ctx.vfs.create_file(path, content) {
        debug!(path, error = %e, "level setup: file skipped");
    }
}

fn in_documents(name: &str) -> String {
    format!(r"{DOCUMENTS}\{name}")
}

fn all_done(session: &LevelSession, _vfs: &VirtualFs) -> bool {
    session.all_done()
}

fn ran_dir(o: &Observation<'_>) -> bool {
    o.starts("dir")
}

/// `dir` in any form, marking `task` once `after` is done.
const fn dir_after(task: &'static str, after: &'static str) -> Rule {
    Rule {
        task,
        after: Some(after),
        when: ran_dir,
    }
}

const fn any_dir(task: &'static str) -> Rule {
    prefix(task, ran_dir)
}

const fn prefix(task: &'static str, when: fn(&Observation<'_>) -> bool) -> Rule {
    Rule {
        task,
        after: None,
        when,
    }
}

pub static LEVELS: [Level; 16] = [
    Level {
        number: 1,
        title: "基础导航",
        description: "学习使用 cd 命令进入指定目录",
        tasks: &[
            Task::new("nav_1", "使用 dir 命令查看当前目录"),
            Task::new("nav_2", "使用 cd Documents 进入 Documents 目录"),
        ],
        hints: &[
            "使用 dir 命令查看当前目录内容",
            "使用 cd Documents 进入 Documents 目录",
            "如果输入错误，可以使用 cd .. 返回上一级目录",
        ],
        completion_message: "恭喜！你已经掌握了基本的目录导航命令。",
        score: 50,
        setup: |ctx| cd(ctx, HOME),
        rules: &[
            prefix("nav_1", |o| o.starts("dir") && o.ok()),
            prefix("nav_2", |o| o.starts("cd documents")),
        ],
        success: |_, vfs| vfs.current_path() == DOCUMENTS,
    },
    Level {
        number: 2,
        title: "创建目录",
        description: "学习使用 mkdir 命令创建新目录",
        tasks: &[
            Task::new("mkdir_1", "使用 mkdir my_folder 创建目录"),
            Task::new("mkdir_2", "使用 dir 命令确认目录创建成功"),
        ],
        hints: &[
            "使用 mkdir my_folder 创建目录",
            "使用 dir 命令确认目录创建成功",
            "确保目录名称完全匹配：my_folder",
        ],
        completion_message: "很好！你学会了如何创建新目录。",
        score: 75,
        setup: |ctx| {
            cd(ctx, DOCUMENTS);
            mkdir(ctx, "test_dir");
        },
        rules: &[
            prefix("mkdir_1", |o| o.starts("mkdir my_folder")),
            dir_after("mkdir_2", "mkdir_1"),
        ],
        success: |s, vfs| s.all_done() && vfs.is_directory(&in_documents("my_folder")),
    },
    Level {
        number: 3,
        title: "文件复制",
        description: "学习使用 copy 命令复制文件",
        tasks: &[
            Task::new("copy_1", "查看 source 目录中的文件"),
            Task::new("copy_2", "将 test.txt 复制到 target 目录"),
            Task::new("copy_3", "验证文件复制成功"),
        ],
        hints: &[
            "使用 cd source 进入源目录",
            r"使用 copy test.txt ..\target\test.txt 复制文件",
            r"使用 dir ..\target 确认文件已复制",
        ],
        completion_message: "出色！文件复制操作完成。",
        score: 100,
        setup: |ctx| {
            cd(ctx, DOCUMENTS);
            mkdir(ctx, "source");
            mkdir(ctx, "target");
            touch(ctx, r"source\test.txt", "Hello, this is a test file!");
        },
        rules: &[
            prefix("copy_1", |o| o.starts("dir") && o.mentions("source")),
            prefix("copy_2", |o| o.starts("copy") && o.mentions("test.txt") && o.ok()),
            Rule {
                task: "copy_3",
                after: Some("copy_2"),
                when: |o| o.starts("dir") && o.mentions("target"),
            },
        ],
        success: |s, vfs| s.all_done() && vfs.is_file(&in_documents(r"target\test.txt")),
    },
    Level {
        number: 4,
        title: "文件删除",
        description: "学习使用 del 命令删除文件",
        tasks: &[
            Task::new("del_1", "确认 delete_me.txt 文件存在"),
            Task::new("del_2", "使用 del 命令删除文件"),
            Task::new("del_3", "验证文件已被删除"),
        ],
        hints: &[
            "使用 dir 命令确认文件存在",
            "使用 del delete_me.txt 删除文件",
            "使用 dir 命令验证文件已被删除",
        ],
        completion_message: "很好！你学会了安全地删除文件。",
        score: 75,
        setup: |ctx| {
            cd(ctx, DOCUMENTS);
            touch(ctx, "delete_me.txt", "This is a file to be deleted.");
        },
        rules: &[
            any_dir("del_1"),
            prefix("del_2", |o| o.starts("del delete_me.txt")),
            dir_after("del_3", "del_2"),
        ],
        success: |s, vfs| s.all_done() && !vfs.exists(&in_documents("delete_me.txt")),
    },
    Level {
        number: 5,
        title: "文件内容查看",
        description: "学习使用 type 命令查看文件内容",
        tasks: &[
            Task::new("type_1", "使用 type 命令查看 readme.txt"),
            Task::new("type_2", "使用 type 命令查看 config.txt"),
        ],
        hints: &[
            "使用 type readme.txt 查看文件内容",
            "使用 type config.txt 查看配置文件",
            "注意观察不同文件的内容格式",
        ],
        completion_message: "优秀！你掌握了查看文件内容的方法。",
        score: 60,
        setup: |ctx| {
            cd(ctx, DOCUMENTS);
            touch(
                ctx,
                "readme.txt",
                "Welcome to the Windows Command Line Game!\nThis is a learning tool for command line operations.",
            );
            touch(
                ctx,
                "config.txt",
                "Configuration File\n================\nVersion: 1.0\nAuthor: Game System",
            );
        },
        rules: &[
            prefix("type_1", |o| o.starts("type readme.txt")),
            prefix("type_2", |o| o.starts("type config.txt")),
        ],
        success: all_done,
    },
    Level {
        number: 6,
        title: "文件移动",
        description: "学习使用 move 命令移动和重命名文件",
        tasks: &[
            Task::new("move_1", "查看当前目录中的文件"),
            Task::new("move_2", "将 source.txt 移动并重命名为 moved.txt"),
            Task::new("move_3", "验证文件移动成功"),
        ],
        hints: &[
            "使用 dir 查看当前文件",
            "使用 move source.txt moved.txt 移动并重命名文件",
            "使用 dir 验证移动结果",
        ],
        completion_message: "太棒了！文件移动操作完成。",
        score: 90,
        setup: |ctx| {
            cd(ctx, DOCUMENTS);
            touch(ctx, "source.txt", "This file needs to be moved and renamed.");
        },
        rules: &[
            any_dir("move_1"),
            prefix("move_2", |o| {
                o.starts("move") && o.mentions("source.txt") && o.mentions("moved.txt")
            }),
            dir_after("move_3", "move_2"),
        ],
        success: |s, vfs| {
            s.all_done()
                && !vfs.exists(&in_documents("source.txt"))
                && vfs.is_file(&in_documents("moved.txt"))
        },
    },
    Level {
        number: 7,
        title: "命令行参数",
        description: "学习使用带参数的命令删除只读文件",
        tasks: &[
            Task::new("args_1", "查看当前目录中的文件"),
            Task::new("args_2", "无需确认强制删除只读文件 readonly.txt"),
            Task::new("args_3", "验证文件删除成功"),
        ],
        hints: &[
            "使用 dir 查看当前文件",
            "使用 del /Q /F readonly.txt 强制删除只读文件",
            "/Q 表示安静模式，/F 表示强制删除",
        ],
        completion_message: "很好！你学会了使用命令参数。",
        score: 100,
        setup: |ctx| {
            cd(ctx, DOCUMENTS);
            touch(
                ctx,
                "readonly.txt",
                "This is a read-only file that needs special deletion.",
            );
        },
        rules: &[
            any_dir("args_1"),
            prefix("args_2", |o| {
                o.starts("del /q /f readonly.txt") || o.starts("del /f /q readonly.txt")
            }),
            dir_after("args_3", "args_2"),
        ],
        success: |_, vfs| !vfs.exists(&in_documents("readonly.txt")),
    },
    Level {
        number: 8,
        title: "文件重命名",
        description: "学习使用 ren 命令重命名文件",
        tasks: &[
            Task::new("rename_1", "查看当前目录中的文件"),
            Task::new("rename_2", "将 old_name.txt 重命名为 new_name.txt"),
            Task::new("rename_3", "验证重命名成功"),
        ],
        hints: &[
            "使用 dir 查看当前文件",
            "使用 ren old_name.txt new_name.txt 重命名文件",
            "使用 dir 命令确认新文件名",
        ],
        completion_message: "出色！文件重命名操作完成。",
        score: 80,
        setup: |ctx| {
            cd(ctx, DOCUMENTS);
            touch(ctx, "old_name.txt", "This file will be renamed.");
        },
        rules: &[
            any_dir("rename_1"),
            prefix("rename_2", |o| {
                o.starts("ren") && o.mentions("old_name.txt") && o.mentions("new_name.txt")
            }),
            dir_after("rename_3", "rename_2"),
        ],
        success: all_done,
    },
    Level {
        number: 9,
        title: "目录删除",
        description: "学习使用 rmdir 命令删除目录",
        tasks: &[
            Task::new("rmdir_1", "查看当前目录结构"),
            Task::new("rmdir_2", "删除空目录 empty_folder"),
            Task::new("rmdir_3", "删除包含文件的目录 full_folder"),
        ],
        hints: &[
            "使用 dir 查看目录结构",
            "使用 rmdir empty_folder 删除空目录",
            "使用 rmdir /S full_folder 删除包含文件的目录",
        ],
        completion_message: "很好！你学会了删除目录。",
        score: 90,
        setup: |ctx| {
            cd(ctx, DOCUMENTS);
            mkdir(ctx, "empty_folder");
            mkdir(ctx, "full_folder");
            touch(ctx, r"full_folder\file1.txt", "File in directory");
            touch(ctx, r"full_folder\file2.txt", "Another file");
        },
        rules: &[
            any_dir("rmdir_1"),
            prefix("rmdir_2", |o| o.starts("rmdir empty_folder")),
            prefix("rmdir_3", |o| o.starts("rmdir /s full_folder")),
        ],
        success: |s, vfs| {
            s.all_done()
                && !vfs.exists(&in_documents("empty_folder"))
                && !vfs.exists(&in_documents("full_folder"))
        },
    },
    Level {
        number: 10,
        title: "网络测试",
        description: "学习使用ping命令测试网络连接",
        tasks: &[
            Task::new("ping_1", "测试本地(localhost)连接"),
            Task::new("ping_2", "使用参数控制ping次数为2"),
        ],
        hints: &[
            "使用 ping localhost 测试本地连接",
            "使用 ping -n 2 localhost 只发送2个数据包",
            "观察ping输出的统计信息",
        ],
        completion_message: "太好了！你学会了网络连接测试。",
        score: 90,
        setup: |ctx| cd(ctx, HOME),
        rules: &[
            prefix("ping_1", |o| o.starts("ping localhost")),
            prefix("ping_2", |o| {
                (o.starts("ping -n") || o.starts("ping /n")) && o.mentions("localhost") && o.ok()
            }),
        ],
        success: all_done,
    },
    Level {
        number: 11,
        title: "进程列表",
        description: "学习使用tasklist命令查看系统进程",
        tasks: &[
            Task::new("tasklist_1", "查看所有运行的进程"),
            Task::new("tasklist_2", "观察进程信息"),
        ],
        hints: &[
            "使用 tasklist 查看所有进程",
            "观察进程的PID、内存使用等信息",
            "注意不同进程的内存占用差异",
        ],
        completion_message: "很好！你掌握了进程查看技巧。",
        score: 95,
        setup: |ctx| {
            cd(ctx, DOCUMENTS);
            touch(
                ctx,
                "process_info.txt",
                "Use tasklist command to view running processes",
            );
        },
        rules: &[
            prefix("tasklist_1", |o| o.starts("tasklist")),
            Rule {
                task: "tasklist_2",
                after: Some("tasklist_1"),
                when: |o| o.starts("tasklist"),
            },
        ],
        success: all_done,
    },
    Level {
        number: 12,
        title: "进程终止",
        description: "学习使用taskkill命令终止进程",
        tasks: &[
            Task::new("taskkill_1", "查看当前进程"),
            Task::new("taskkill_2", "终止notepad进程"),
        ],
        hints: &[
            "使用 tasklist 查看当前进程",
            "使用 taskkill /PID 1234 终止指定PID的进程",
            "使用 taskkill /IM notepad.exe 终止指定名称的进程",
        ],
        completion_message: "出色！你学会了进程管理。",
        score: 100,
        setup: |ctx| {
            cd(ctx, DOCUMENTS);
            touch(ctx, "kill_info.txt", "Use taskkill command to terminate processes");
            ctx.processes.reset();
        },
        rules: &[
            prefix("taskkill_1", |o| o.starts("tasklist")),
            prefix("taskkill_2", |o| {
                o.starts("taskkill") && o.result.success == Some(true) && o.ok()
            }),
        ],
        success: all_done,
    },
    Level {
        number: 13,
        title: "通配符操作",
        description: "学习使用通配符进行批量文件操作",
        tasks: &[
            Task::new("wildcard_1", "进入wildcard_test中显示所有txt文件"),
            Task::new("wildcard_2", "删除所有.bak文件"),
        ],
        hints: &[
            "首先进入wildcard_test目录：cd wildcard_test",
            "使用 dir *.txt 显示所有txt文件",
            "使用 del *.bak 删除所有备份文件",
        ],
        completion_message: "很好！你掌握了通配符的基本用法。",
        score: 105,
        setup: |ctx| {
            cd(ctx, DOCUMENTS);
            mkdir(ctx, "wildcard_test");
            for (name, content) in [
                ("data1.txt", "Data file 1"),
                ("data2.txt", "Data file 2"),
                ("data3.txt", "Data file 3"),
                ("backup1.bak", "Backup file 1"),
                ("backup2.bak", "Backup file 2"),
                ("temp.tmp", "Temporary file"),
                ("readme.txt", "Read me file"),
            ] {
                touch(ctx, &format!(r"wildcard_test\{name}"), content);
            }
        },
        rules: &[
            prefix("wildcard_1", |o| {
                let listed = o.result.output.to_lowercase();
                o.starts("dir")
                    && o.mentions("*.txt")
                    && o.printed()
                    && listed.contains(".txt")
                    && ["data1.txt", "data2.txt", "data3.txt", "readme.txt"]
                        .iter()
                        .any(|f| listed.contains(f))
                    && o.in_dir("wildcard_test")
            }),
            prefix("wildcard_2", |o| {
                let report = o.result.output.to_lowercase();
                o.starts("del")
                    && o.mentions("*.bak")
                    && o.result.kind == OutputKind::Output
                    && ["删除", "deleted", "个文件"].iter().any(|w| report.contains(w))
                    && o.in_dir("wildcard_test")
            }),
        ],
        success: all_done,
    },
    Level {
        number: 14,
        title: "高级文本搜索",
        description: "深入学习findstr命令的高级用法",
        tasks: &[
            Task::new("search_1", "在file1.txt文件中搜索关键词 error"),
            Task::new("search_2", "在当前目录所有文件中搜索 error 并显示行号"),
        ],
        hints: &[
            "使用 findstr \"error\" file1.txt 在指定文件中搜索",
            "使用 findstr /n \"error\" *.* 在所有文件中搜索并显示行号",
            "观察搜索结果显示的行号和内容",
        ],
        completion_message: "太棒了！你掌握了高级搜索技巧。",
        score: 110,
        setup: |ctx| {
            cd(ctx, DOCUMENTS);
            mkdir(ctx, "search_test");
            touch(ctx, r"wildcard_test\backup-13-1.bak", "Backup file 1");
            touch(ctx, r"wildcard_test\backup-13-2.bak", "Backup file 2");
            touch(
                ctx,
                r"search_test\file1.txt",
                "This file contains the word error in line 1\nNormal text in line 2\nAnother error message here",
            );
            touch(
                ctx,
                r"search_test\file2.txt",
                "Regular content\nNo special words here\nJust normal text",
            );
            touch(
                ctx,
                r"search_test\log.txt",
                "System log file\nerror: Connection failed\nWARNING: Low memory\nerror: Disk full",
            );
            cd(ctx, "search_test");
        },
        rules: &[
            prefix("search_1", |o| {
                o.starts("findstr")
                    && o.mentions("error")
                    && o.mentions("file1.txt")
                    && o.printed()
                    && o.output_has("error")
                    && o.output_has("file1.txt")
            }),
            prefix("search_2", |o| {
                o.starts("findstr")
                    && o.mentions("/n")
                    && o.mentions("error")
                    && (o.mentions("*.*") || o.mentions("*.txt"))
                    && o.printed()
                    && o.output_has(":")
                    && o.output_has("error")
            }),
        ],
        success: all_done,
    },
    Level {
        number: 15,
        title: "文件查找",
        description: "学习使用where命令查找可执行文件",
        tasks: &[
            Task::new("filesearch_1", "使用查找src/中的JavaScript文件"),
            Task::new("filesearch_2", "使用查找project/中.ini配置文件"),
        ],
        hints: &[
            "使用 where /R . *.js 在当前目录和系统路径中查找JavaScript文件",
            "使用 dir /s *.ini 递归搜索所有子目录中的配置文件",
            "观察两种命令的搜索范围和结果显示方式的不同",
        ],
        completion_message: "恭喜！你已经掌握了文件查找技能！",
        score: 150,
        setup: |ctx| {
            cd(ctx, DOCUMENTS);
            mkdir(ctx, "project");
            mkdir(ctx, r"project\src");
            mkdir(ctx, r"project\docs");
            touch(ctx, r"project\src\main.js", "Main JavaScript file");
            touch(ctx, r"project\src\utils.js", "Utility functions");
            touch(ctx, r"project\docs\readme.txt", "Project documentation");
            touch(ctx, r"project\config.ini", "Configuration file");
            cd(ctx, "project");
        },
        rules: &[
            prefix("filesearch_1", |o| {
                o.starts("where")
                    && o.mentions("*.js")
                    && o.printed()
                    && o.output_has(".js")
                    && (o.output_has("main.js") || o.output_has("utils.js"))
            }),
            prefix("filesearch_2", |o| {
                o.starts("dir")
                    && o.mentions("/s")
                    && o.mentions("*.ini")
                    && o.printed()
                    && o.output_has("config.ini")
            }),
        ],
        success: all_done,
    },
    Level {
        number: 16,
        title: "密码生成",
        description: "生成加密密码并截图发给老师验证",
        tasks: &[
            Task::new("password_1", "设置个人信息： setinfo 学号 姓名"),
            Task::new("password_2", "使用 genpass 生成加密密码"),
        ],
        hints: &[
            "使用 setinfo 命令设置你的学号和姓名，例如：setinfo 2023001 张三",
            "使用 genpass 命令生成加密密码，密码将结合你的信息、分数和时间戳",
        ],
        completion_message: "恭喜！你已经完成了所有关卡，成为命令行高手！",
        score: 200,
        setup: |ctx| {
            cd(ctx, DOCUMENTS);
            ctx.student = None;
        },
        rules: &[
            prefix("password_1", |o| o.starts("setinfo") && o.result.ok()),
            prefix("password_2", |o| o.starts("genpass") && o.result.ok()),
        ],
        success: all_done,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::CommandParser;
    use std::collections::HashSet;

    #[test]
    fn numbered_in_order() {
        for (i, level) in LEVELS.iter().enumerate() {
            assert_eq!(level.number as usize, i + 1);
            assert!(!level.tasks.is_empty());
            assert!(!level.hints.is_empty());
        }
    }

    #[test]
    fn rules_name_real_tasks() {
        for level in &LEVELS {
            let ids: HashSet<_> = level.tasks.iter().map(|t| t.id).collect();
            assert_eq!(ids.len(), level.tasks.len(), "level {}", level.number);
            for rule in level.rules {
                assert!(ids.contains(rule.task), "level {}: {}", level.number, rule.task);
                if let Some(dep) = rule.after {
                    assert!(ids.contains(dep));
                }
            }
        }
    }

    #[test]
    fn setups_run_in_sequence() {
        let mut ctx = ExecContext::seeded(VirtualFs::new(), 3);
        for level in &LEVELS {
            (level.setup)(&mut ctx);
        }
        assert_eq!(ctx.cwd(), DOCUMENTS);
        assert!(ctx.vfs.is_file(&in_documents(r"project\src\main.js")));
        assert!(ctx.vfs.is_file(&in_documents(r"wildcard_test\backup-13-1.bak")));
        // readme.txt was already on the drive; level 5 leaves it alone.
        assert!(ctx.vfs.read_file(&in_documents("readme.txt")).unwrap().starts_with("欢迎"));
    }

    fn play(level: &Level, ctx: &mut ExecContext, lines: &[&str]) -> LevelSession {
        let parser = CommandParser::new();
        let mut session = LevelSession::new(level);
        (level.setup)(ctx);
        for line in lines {
            let result = parser.parse_and_execute(line, ctx);
            let obs = Observation::new(line, &result, &ctx.vfs);
            session.observe(level.rules, &obs);
        }
        session
    }

    #[test]
    fn copy_level_checks_absolute_target() {
        let mut ctx = ExecContext::seeded(VirtualFs::new(), 3);
        let level = &LEVELS[2];
        let session = play(
            level,
            &mut ctx,
            &["cd source", "dir", r"copy test.txt ..\target\test.txt", r"dir ..\target"],
        );
        // "dir" alone does not mention source.
        assert!(!session.is_done("copy_1"));

        let session = play(
            level,
            &mut ctx,
            &["dir source", r"copy source\test.txt target\copy.txt", r"dir target"],
        );
        assert!(session.all_done());
        assert!((level.success)(&session, &ctx.vfs));
    }

    #[test]
    fn wildcard_level_requires_working_directory() {
        let mut ctx = ExecContext::seeded(VirtualFs::new(), 3);
        let level = &LEVELS[12];
        let session = play(level, &mut ctx, &[r"dir wildcard_test\*.txt"]);
        assert!(!session.is_done("wildcard_1"));

        let session = play(level, &mut ctx, &["cd wildcard_test", "dir *.txt", "del *.bak"]);
        assert!(session.all_done());
        assert!(!ctx.vfs.exists("backup1.bak"));
        assert!(ctx.vfs.exists("data1.txt"));
    }

    #[test]
    fn quiet_wildcard_delete_does_not_count() {
        let mut ctx = ExecContext::seeded(VirtualFs::new(), 3);
        let level = &LEVELS[12];
        let session = play(level, &mut ctx, &["cd wildcard_test", "del /q *.bak"]);
        assert!(!session.is_done("wildcard_2"));
    }

    #[test]
    fn search_level() {
        let mut ctx = ExecContext::seeded(VirtualFs::new(), 3);
        let session = play(
            &LEVELS[13],
            &mut ctx,
            &[r#"findstr "error" file1.txt"#, r#"findstr /n "error" *.*"#],
        );
        assert!(session.all_done());
    }

    #[test]
    fn file_search_level() {
        let mut ctx = ExecContext::seeded(VirtualFs::new(), 3);
        let session = play(&LEVELS[14], &mut ctx, &["where /r . *.js", "dir /s *.ini"]);
        assert!(session.all_done());
    }

    #[test]
    fn taskkill_level_needs_success() {
        let mut ctx = ExecContext::seeded(VirtualFs::new(), 3);
        let session = play(&LEVELS[11], &mut ctx, &["tasklist", "taskkill /pid 999"]);
        assert!(!session.is_done("taskkill_2"));
        let session = play(&LEVELS[11], &mut ctx, &["taskkill /im notepad.exe"]);
        assert!(session.is_done("taskkill_2"));
    }

    #[test]
    fn one_tasklist_completes_both_tasks() {
        let mut ctx = ExecContext::seeded(VirtualFs::new(), 3);
        let session = play(&LEVELS[10], &mut ctx, &["tasklist"]);
        assert!(session.all_done());
    }

    #[test]
    fn password_level_clears_student() {
        let mut ctx = ExecContext::seeded(VirtualFs::new(), 3);
        let session = play(&LEVELS[15], &mut ctx, &["setinfo 2023001 张三", "genpass"]);
        assert!(session.all_done());

        (LEVELS[15].setup)(&mut ctx);
        assert!(ctx.student.is_none());
        let session = play(&LEVELS[15], &mut ctx, &["genpass"]);
        assert!(!session.is_done("password_2"));
    }
}

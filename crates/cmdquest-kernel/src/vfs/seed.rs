//! The drive a new game starts with.

use chrono::{NaiveDate, NaiveDateTime};

use super::memory::Node;
use super::path::WinPath;

/// Build a timestamp for seed data. Out-of-range input falls back to the
/// epoch rather than failing.
pub(crate) fn stamp(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, 0))
        .unwrap_or_default()
}

/// `C:\Users\Student`
pub fn start_dir() -> WinPath {
    WinPath::from_segments(["Users", "Student"])
}

pub(crate) fn drive() -> Node {
    let documents = Node::dir("Documents")
        .with(Node::file(
            "readme.txt",
            "欢迎来到Windows命令行学习游戏！\n这是一个学习文档。",
            1024,
            stamp(2024, 1, 15, 10, 30),
        ))
        .with(Node::file(
            "notes.txt",
            "学习笔记：\n1. dir - 列出目录内容\n2. cd - 切换目录\n3. type - 显示文件内容",
            512,
            stamp(2024, 1, 15, 11, 0),
        ));

    let desktop = Node::dir("Desktop").with(Node::file(
        "game.txt",
        "这是桌面上的一个游戏文件。",
        256,
        stamp(2024, 1, 15, 9, 15),
    ));

    let downloads = Node::dir("Downloads")
        .with(Node::file(
            "setup.exe",
            "[二进制文件]",
            2_048_000,
            stamp(2024, 1, 14, 16, 45),
        ))
        .with(Node::file(
            "data.csv",
            "Name,Age,City\nJohn,25,Beijing\nMary,30,Shanghai\nTom,28,Guangzhou",
            1536,
            stamp(2024, 1, 15, 14, 20),
        ));

    let public = Node::dir("Public").with(Node::file(
        "shared.txt",
        "这是一个共享文件。",
        128,
        stamp(2024, 1, 10, 8, 0),
    ));

    let system32 = Node::dir("System32")
        .with(Node::file("cmd.exe", "[系统文件]", 512_000, stamp(2024, 1, 1, 0, 0)))
        .with(Node::file("notepad.exe", "[系统文件]", 256_000, stamp(2024, 1, 1, 0, 0)));

    Node::dir("C:")
        .with(
            Node::dir("Users")
                .with(
                    Node::dir("Student")
                        .with(documents)
                        .with(desktop)
                        .with(downloads),
                )
                .with(public),
        )
        .with(Node::dir("Windows").with(system32))
        .with(Node::dir("Program Files").with(Node::dir("Common Files")))
}

//! Filesystem behavior as seen through commands.

use cmdquest_kernel::vfs::{EntryKind, FsError, VirtualFs};
use cmdquest_kernel::Kernel;

// ============================================================================
// Create / delete
// ============================================================================

#[test]
fn test_create_then_delete_file() {
    let mut vfs = VirtualFs::new();
    vfs.create_file("hello.txt", "hi there").unwrap();
    assert_eq!(vfs.read_file("hello.txt").unwrap(), "hi there");
    vfs.delete("hello.txt").unwrap();
    assert_eq!(vfs.read_file("hello.txt"), Err(FsError::FileNotFound));
}

#[test]
fn test_non_empty_guard() {
    let mut vfs = VirtualFs::new();
    vfs.create_directory("box").unwrap();
    vfs.create_directory(r"box\inner").unwrap();
    vfs.create_file(r"box\inner\f.txt", "x").unwrap();

    assert_eq!(vfs.delete_directory("box", false), Err(FsError::NotEmpty));
    assert!(vfs.exists(r"box\inner\f.txt"));
    vfs.delete_directory("box", true).unwrap();
    assert!(!vfs.exists("box"));
}

#[test]
fn test_failed_operations_leave_drive_unchanged() {
    let mut kernel = Kernel::transient();
    let before = kernel.vfs().list_directory(r"C:\Users\Student\Documents");

    for line in [
        r"copy Documents\readme.txt Documents\notes.txt",
        r"mkdir Documents\readme.txt",
        r"rmdir Documents",
        r"del Documents\missing.txt",
        r"move Documents\missing.txt Documents\x.txt",
    ] {
        let r = kernel.execute(line);
        assert!(r.is_error(), "{line} should fail");
    }
    assert_eq!(kernel.vfs().list_directory(r"C:\Users\Student\Documents"), before);
}

// ============================================================================
// Listing order
// ============================================================================

#[test]
fn test_directories_before_files_case_insensitive() {
    let mut vfs = VirtualFs::new();
    vfs.create_directory("mix").unwrap();
    for f in ["b.txt", "A.txt", "c.txt"] {
        vfs.create_file(&format!(r"mix\{f}"), "").unwrap();
    }
    for d in ["zeta", "Alpha", "beta"] {
        vfs.create_directory(&format!(r"mix\{d}")).unwrap();
    }

    let entries = vfs.list_directory("mix").unwrap();
    let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Alpha", "beta", "zeta", "A.txt", "b.txt", "c.txt"]);
    assert!(entries[..3].iter().all(|e| e.kind == EntryKind::Directory));
}

#[test]
fn test_dir_output_follows_listing_order() {
    let mut kernel = Kernel::transient();
    let out = kernel.execute(r"dir C:\Users\Student").output;
    let desktop = out.find("Desktop").unwrap();
    let documents = out.find("Documents").unwrap();
    let downloads = out.find("Downloads").unwrap();
    assert!(desktop < documents && documents < downloads);
}

// ============================================================================
// Wildcards
// ============================================================================

#[test]
fn test_wildcard_delete_scenario() {
    let mut kernel = Kernel::transient();
    kernel.execute("mkdir bak");
    kernel.execute("cd bak");

    // Seed through copy so everything goes through the interpreter.
    kernel.execute(r"copy ..\Desktop\game.txt a.bak");
    kernel.execute(r"copy ..\Desktop\game.txt b.bak");
    kernel.execute(r"copy ..\Desktop\game.txt c.txt");

    let r = kernel.execute("del *.bak");
    assert_eq!(r.output, "已删除 2 个文件");
    assert!(!kernel.vfs().exists("a.bak"));
    assert!(!kernel.vfs().exists("b.bak"));
    assert!(kernel.vfs().exists("c.txt"));
}

#[test]
fn test_find_reports_full_paths() {
    let mut kernel = Kernel::transient();
    let r = kernel.execute("find *.txt");
    assert!(r.output.contains(r"C:\Users\Student\Desktop\game.txt"));
    assert!(r.output.contains(r"C:\Users\Student\Documents\readme.txt"));
}

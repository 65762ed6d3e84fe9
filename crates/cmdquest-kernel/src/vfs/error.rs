//! Filesystem errors, rendered with the messages `cmd.exe` prints.

use thiserror::Error;

/// Failure of a VFS operation.
///
/// Every variant's `Display` is the user-facing CMD diagnostic, so command
/// handlers can forward `err.to_string()` unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FsError {
    /// A directory on the way to the target is missing, or the target
    /// directory itself does not exist.
    #[error("系统找不到指定的路径。")]
    PathNotFound,
    /// The named entry does not exist in an existing directory.
    #[error("系统找不到指定的文件。")]
    FileNotFound,
    /// `mkdir` collided with an existing entry.
    #[error("子目录或文件已经存在。")]
    DirectoryExists,
    /// File creation collided with an existing entry. There is no overwrite.
    #[error("文件已经存在。")]
    FileExists,
    /// `rmdir` without `/s` on a populated directory.
    #[error("目录不是空的。")]
    NotEmpty,
    /// Reading a directory as a file, or removing the working directory.
    #[error("拒绝访问。")]
    AccessDenied,
    /// `rmdir` pointed at a file.
    #[error("目录名无效。")]
    InvalidDirectoryName,
}

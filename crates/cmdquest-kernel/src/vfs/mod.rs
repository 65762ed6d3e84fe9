//! Virtual filesystem for the simulated `C:` drive.
//!
//! One in-memory tree, a working directory, and the command history. All
//! paths are Windows-style and case-insensitive; see [`WinPath`].

mod error;
mod format;
mod memory;
mod path;
mod seed;
mod traits;

pub use error::FsError;
pub use format::{display_path, format_file_size, join_path};
pub use memory::{HISTORY_LIMIT, VirtualFs};
pub use path::{DRIVE, WinPath};
pub use seed::start_dir;
pub use traits::{DATE_FORMAT, DEFAULT_DATE, DirEntry, EntryKind, SearchHit};

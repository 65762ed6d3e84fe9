//! Entry types shared by the VFS and the commands that render it.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Timestamp shown for entries without a stored modification time.
pub const DEFAULT_DATE: &str = "2024-01-15 12:00";

/// Format used for every timestamp in listings.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Kind of directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

/// A directory entry, as returned by [`crate::vfs::VirtualFs::list_directory`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirEntry {
    /// Stored name (original case).
    pub name: String,
    pub kind: EntryKind,
    /// Size in bytes (0 for directories).
    pub size: u64,
    /// Last modification time. Directories carry none.
    pub modified: Option<NaiveDateTime>,
}

impl DirEntry {
    /// Create a directory entry.
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
            size: 0,
            modified: None,
        }
    }

    /// Create a file entry.
    pub fn file(name: impl Into<String>, size: u64, modified: NaiveDateTime) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
            size,
            modified: Some(modified),
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// `YYYY-MM-DD HH:MM`, or [`DEFAULT_DATE`] when no time is stored.
    pub fn date_label(&self) -> String {
        match self.modified {
            Some(t) => t.format(DATE_FORMAT).to_string(),
            None => DEFAULT_DATE.to_string(),
        }
    }
}

/// One match from a recursive search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Full display path, e.g. `C:\Users\Student\Documents\notes.txt`.
    pub path: String,
    pub name: String,
    pub kind: EntryKind,
    /// Size in bytes (0 for directories).
    pub size: u64,
    pub modified: Option<NaiveDateTime>,
}

impl SearchHit {
    /// A hit at `path` carrying the entry's metadata.
    pub fn new(path: impl Into<String>, entry: DirEntry) -> Self {
        Self {
            path: path.into(),
            name: entry.name,
            kind: entry.kind,
            size: entry.size,
            modified: entry.modified,
        }
    }

    /// Same format as [`DirEntry::date_label`].
    pub fn date_label(&self) -> String {
        match self.modified {
            Some(t) => t.format(DATE_FORMAT).to_string(),
            None => DEFAULT_DATE.to_string(),
        }
    }
}

//! Windows-style path parsing and normalization.
//!
//! Paths are drive-rooted (`C:`) segment lists. Input may use `\` or `/`,
//! may be absolute (`C:\Users`) or relative to a base directory, and may
//! contain `.` and `..`. `..` never climbs above the drive root.

use std::fmt;

/// The only drive in the simulation.
pub const DRIVE: &str = "C:";

/// A normalized, drive-rooted path.
///
/// Segments keep the case they were written with. [`crate::vfs::VirtualFs`]
/// canonicalizes them to the stored names when it resolves a path against
/// the tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WinPath {
    segments: Vec<String>,
}

impl WinPath {
    /// The drive root, `C:\`.
    pub fn root() -> Self {
        Self::default()
    }

    /// Build from already-normalized segments (drive excluded).
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse `input` relative to `base`.
    ///
    /// Absolute input starts with the drive (`C:`, any case). Everything
    /// else is appended to `base` before normalization.
    pub fn resolve(base: &WinPath, input: &str) -> WinPath {
        let mut raw = input.split(['\\', '/']).filter(|s| !s.is_empty()).peekable();

        let mut segments = match raw.peek() {
            Some(first) if first.eq_ignore_ascii_case(DRIVE) => {
                raw.next();
                Vec::new()
            }
            _ => base.segments.clone(),
        };

        for part in raw {
            match part {
                "." => {}
                ".." => {
                    segments.pop();
                }
                name => segments.push(name.to_string()),
            }
        }

        WinPath { segments }
    }

    /// Segments below the drive root.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Last segment, or `None` at the drive root.
    pub fn file_name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Split into parent directory and final name.
    pub fn split_last(&self) -> Option<(WinPath, &str)> {
        let (name, parent) = self.segments.split_last()?;
        Some((WinPath::from_segments(parent.iter().cloned()), name.as_str()))
    }

    /// Append a single name.
    pub fn join(&self, name: &str) -> WinPath {
        let mut segments = self.segments.clone();
        segments.push(name.to_string());
        WinPath { segments }
    }

    /// Case-insensitive equality, the way Windows compares paths.
    pub fn eq_ignore_case(&self, other: &WinPath) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|(a, b)| a.to_lowercase() == b.to_lowercase())
    }

    /// True if `self` is `other` or one of its ancestors (case-insensitive).
    pub fn is_ancestor_of(&self, other: &WinPath) -> bool {
        self.segments.len() <= other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|(a, b)| a.to_lowercase() == b.to_lowercase())
    }
}

impl fmt::Display for WinPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "{DRIVE}\\");
        }
        f.write_str(DRIVE)?;
        for seg in &self.segments {
            write!(f, "\\{seg}")?;
        }
        Ok(())
    }
}

//! In-memory drive tree.
//!
//! The whole `C:` drive lives in a single owned [`Node`] tree. Sibling names
//! are keyed by their lowercase form so lookups are case-insensitive, while
//! the node keeps the name it was created with.

use std::collections::{BTreeMap, VecDeque};

use chrono::{Local, NaiveDateTime};
use cmdquest_glob::GlobPattern;
use tracing::debug;

use super::error::FsError;
use super::path::WinPath;
use super::seed;
use super::traits::{DirEntry, SearchHit};

/// Default bound on remembered command lines.
pub const HISTORY_LIMIT: usize = 100;

/// A node in the drive tree.
#[derive(Debug, Clone)]
pub(crate) enum Node {
    Directory {
        name: String,
        children: BTreeMap<String, Node>,
    },
    File {
        name: String,
        content: String,
        size: u64,
        modified: NaiveDateTime,
    },
}

fn fold(name: &str) -> String {
    name.to_lowercase()
}

impl Node {
    pub(crate) fn dir(name: impl Into<String>) -> Self {
        Node::Directory {
            name: name.into(),
            children: BTreeMap::new(),
        }
    }

    pub(crate) fn file(
        name: impl Into<String>,
        content: impl Into<String>,
        size: u64,
        modified: NaiveDateTime,
    ) -> Self {
        Node::File {
            name: name.into(),
            content: content.into(),
            size,
            modified,
        }
    }

    /// Builder used by the seed: add a child and return self.
    pub(crate) fn with(mut self, child: Node) -> Self {
        if let Node::Directory { children, .. } = &mut self {
            children.insert(fold(child.name()), child);
        }
        self
    }

    pub(crate) fn name(&self) -> &str {
        match self {
            Node::Directory { name, .. } | Node::File { name, .. } => name,
        }
    }

    fn is_dir(&self) -> bool {
        matches!(self, Node::Directory { .. })
    }

    fn children(&self) -> Option<&BTreeMap<String, Node>> {
        match self {
            Node::Directory { children, .. } => Some(children),
            Node::File { .. } => None,
        }
    }

    fn children_mut(&mut self) -> Option<&mut BTreeMap<String, Node>> {
        match self {
            Node::Directory { children, .. } => Some(children),
            Node::File { .. } => None,
        }
    }

    fn entry(&self) -> DirEntry {
        match self {
            Node::Directory { name, .. } => DirEntry::directory(name.clone()),
            Node::File {
                name,
                size,
                modified,
                ..
            } => DirEntry::file(name.clone(), *size, *modified),
        }
    }

    /// Children in listing order: directories first, then files, each by
    /// lowercase name.
    fn sorted_children(&self) -> Vec<&Node> {
        let Some(children) = self.children() else {
            return Vec::new();
        };
        let (mut dirs, files): (Vec<&Node>, Vec<&Node>) =
            children.values().partition(|n| n.is_dir());
        dirs.extend(files);
        dirs
    }
}

/// The simulated drive, its working directory, and the command history.
#[derive(Debug, Clone)]
pub struct VirtualFs {
    root: Node,
    cwd: WinPath,
    history: VecDeque<String>,
    history_limit: usize,
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualFs {
    /// Create the seeded drive with the working directory at
    /// `C:\Users\Student`.
    pub fn new() -> Self {
        Self::with_history_limit(HISTORY_LIMIT)
    }

    /// Create the seeded drive with a custom history bound.
    pub fn with_history_limit(history_limit: usize) -> Self {
        Self {
            root: seed::drive(),
            cwd: seed::start_dir(),
            history: VecDeque::new(),
            history_limit,
        }
    }

    /// An empty drive (root only), mostly for tests.
    pub fn empty() -> Self {
        Self {
            root: Node::dir(""),
            cwd: WinPath::root(),
            history: VecDeque::new(),
            history_limit: HISTORY_LIMIT,
        }
    }

    /// Reseed the tree, return to the start directory, and clear history.
    pub fn reset(&mut self) {
        self.root = seed::drive();
        self.cwd = seed::start_dir();
        self.history.clear();
        debug!("vfs reset");
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Paths
    // ═══════════════════════════════════════════════════════════════════════

    /// The working directory.
    pub fn cwd(&self) -> &WinPath {
        &self.cwd
    }

    /// The working directory as display text.
    pub fn current_path(&self) -> String {
        self.cwd.to_string()
    }

    /// Resolve user input against the cwd, without touching the tree.
    pub fn resolve(&self, input: &str) -> WinPath {
        WinPath::resolve(&self.cwd, input)
    }

    /// Resolve user input and rewrite it with the stored names of the nodes
    /// it traverses. `None` if any segment does not exist.
    pub fn canonicalize(&self, input: &str) -> Option<WinPath> {
        self.locate(&self.resolve(input)).map(|(path, _)| path)
    }

    pub fn exists(&self, input: &str) -> bool {
        self.node(&self.resolve(input)).is_some()
    }

    pub fn is_directory(&self, input: &str) -> bool {
        self.node(&self.resolve(input)).is_some_and(Node::is_dir)
    }

    pub fn is_file(&self, input: &str) -> bool {
        self.node(&self.resolve(input))
            .is_some_and(|n| !n.is_dir())
    }

    fn node(&self, path: &WinPath) -> Option<&Node> {
        let mut node = &self.root;
        for seg in path.segments() {
            node = node.children()?.get(&fold(seg))?;
        }
        Some(node)
    }

    fn node_mut(&mut self, path: &WinPath) -> Option<&mut Node> {
        let mut node = &mut self.root;
        for seg in path.segments() {
            node = node.children_mut()?.get_mut(&fold(seg))?;
        }
        Some(node)
    }

    fn locate(&self, path: &WinPath) -> Option<(WinPath, &Node)> {
        let mut node = &self.root;
        let mut names = Vec::with_capacity(path.segments().len());
        for seg in path.segments() {
            node = node.children()?.get(&fold(seg))?;
            names.push(node.name().to_string());
        }
        Some((WinPath::from_segments(names), node))
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Navigation and reads
    // ═══════════════════════════════════════════════════════════════════════

    /// Change the working directory. Empty input leaves it unchanged.
    ///
    /// Returns the new working directory.
    pub fn change_directory(&mut self, input: &str) -> Result<String, FsError> {
        let target = self.resolve(input);
        match self.locate(&target) {
            Some((canonical, node)) if node.is_dir() => {
                self.cwd = canonical;
                Ok(self.cwd.to_string())
            }
            _ => Err(FsError::PathNotFound),
        }
    }

    /// List a directory in display order. `None` if the path is missing or
    /// is a file. Empty input lists the cwd.
    pub fn list_directory(&self, input: &str) -> Option<Vec<DirEntry>> {
        self.list_at(&self.resolve(input))
    }

    /// List an already-resolved directory.
    pub fn list_at(&self, path: &WinPath) -> Option<Vec<DirEntry>> {
        let node = self.node(path)?;
        node.children()?;
        Some(node.sorted_children().into_iter().map(Node::entry).collect())
    }

    /// Read a file's content.
    pub fn read_file(&self, input: &str) -> Result<String, FsError> {
        match self.node(&self.resolve(input)) {
            Some(Node::File { content, .. }) => Ok(content.clone()),
            Some(Node::Directory { .. }) => Err(FsError::AccessDenied),
            None => Err(FsError::FileNotFound),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Mutations
    // ═══════════════════════════════════════════════════════════════════════

    /// Create a directory. The parent must already exist.
    pub fn create_directory(&mut self, input: &str) -> Result<(), FsError> {
        let path = self.resolve(input);
        let Some((parent, name)) = path.split_last() else {
            return Err(FsError::DirectoryExists);
        };
        let children = self
            .node_mut(&parent)
            .and_then(Node::children_mut)
            .ok_or(FsError::PathNotFound)?;
        let key = fold(name);
        if children.contains_key(&key) {
            return Err(FsError::DirectoryExists);
        }
        children.insert(key, Node::dir(name));
        debug!(path = %path, "mkdir");
        Ok(())
    }

    /// Create a file stamped with the local time. Never overwrites.
    pub fn create_file(&mut self, input: &str, content: &str) -> Result<(), FsError> {
        let modified = Local::now().naive_local();
        self.create_file_at(input, content, modified)
    }

    /// Create a file with an explicit timestamp.
    pub fn create_file_at(
        &mut self,
        input: &str,
        content: &str,
        modified: NaiveDateTime,
    ) -> Result<(), FsError> {
        let path = self.resolve(input);
        let Some((parent, name)) = path.split_last() else {
            return Err(FsError::AccessDenied);
        };
        let children = self
            .node_mut(&parent)
            .and_then(Node::children_mut)
            .ok_or(FsError::PathNotFound)?;
        let key = fold(name);
        if children.contains_key(&key) {
            return Err(FsError::FileExists);
        }
        let size = content.chars().count() as u64;
        children.insert(key, Node::file(name, content, size, modified));
        debug!(path = %path, size, "create file");
        Ok(())
    }

    /// Remove an entry of any kind, including a populated directory.
    pub fn delete(&mut self, input: &str) -> Result<(), FsError> {
        let path = self.resolve(input);
        self.remove(&path, |_| Ok(()))
    }

    /// Remove a directory. Without `recursive` it must be empty.
    pub fn delete_directory(&mut self, input: &str, recursive: bool) -> Result<(), FsError> {
        let path = self.resolve(input);
        self.remove(&path, |node| match node.children() {
            None => Err(FsError::InvalidDirectoryName),
            Some(children) if !children.is_empty() && !recursive => Err(FsError::NotEmpty),
            Some(_) => Ok(()),
        })
    }

    fn remove(
        &mut self,
        path: &WinPath,
        check: impl FnOnce(&Node) -> Result<(), FsError>,
    ) -> Result<(), FsError> {
        let Some((parent, name)) = path.split_last() else {
            return Err(FsError::AccessDenied);
        };
        let node = self.node(path).ok_or(FsError::FileNotFound)?;
        check(node)?;
        if node.is_dir() && path.is_ancestor_of(&self.cwd) {
            return Err(FsError::AccessDenied);
        }
        let removed = self
            .node_mut(&parent)
            .and_then(Node::children_mut)
            .and_then(|children| children.remove(&fold(name)));
        match removed {
            Some(_) => {
                debug!(path = %path, "delete");
                Ok(())
            }
            None => Err(FsError::FileNotFound),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Search
    // ═══════════════════════════════════════════════════════════════════════

    /// Walk the tree below `root` (pre-order, listing order) and collect
    /// every entry whose name matches `pattern`. A missing root yields
    /// nothing.
    pub fn search_files(&self, pattern: &GlobPattern, root: &str) -> Vec<SearchHit> {
        let mut hits = Vec::new();
        if let Some((path, node)) = self.locate(&self.resolve(root)) {
            collect_matches(node, &path, pattern, &mut hits);
        }
        hits
    }

    /// Depth-first directory walk in listing order, starting at `root`
    /// itself. Each item is the directory's canonical path and its entries.
    pub fn walk_directories(&self, root: &str) -> Option<Vec<(WinPath, Vec<DirEntry>)>> {
        let (path, node) = self.locate(&self.resolve(root))?;
        node.children()?;
        let mut out = Vec::new();
        collect_dirs(node, path, &mut out);
        Some(out)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // History
    // ═══════════════════════════════════════════════════════════════════════

    /// Remember a submitted line, dropping the oldest beyond the bound.
    pub fn add_to_history(&mut self, line: &str) {
        if self.history_limit == 0 {
            return;
        }
        while self.history.len() >= self.history_limit {
            self.history.pop_front();
        }
        self.history.push_back(line.to_string());
    }

    /// Remembered lines, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.history.iter().map(String::as_str)
    }
}

fn collect_matches(node: &Node, path: &WinPath, pattern: &GlobPattern, hits: &mut Vec<SearchHit>) {
    for child in node.sorted_children() {
        let child_path = path.join(child.name());
        if pattern.is_match(child.name()) {
            hits.push(SearchHit::new(child_path.to_string(), child.entry()));
        }
        if child.is_dir() {
            collect_matches(child, &child_path, pattern, hits);
        }
    }
}

fn collect_dirs(node: &Node, path: WinPath, out: &mut Vec<(WinPath, Vec<DirEntry>)>) {
    let children = node.sorted_children();
    out.push((path.clone(), children.iter().map(|c| c.entry()).collect()));
    for child in children.into_iter().filter(|c| c.is_dir()) {
        collect_dirs(child, path.join(child.name()), out);
    }
}

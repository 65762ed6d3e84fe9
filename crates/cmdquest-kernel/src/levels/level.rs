//! Level definitions and per-level session state.

use std::fmt;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::commands::ExecContext;
use crate::interpreter::{CommandResult, OutputKind};
use crate::vfs::VirtualFs;

/// One objective within a level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: &'static str,
    pub text: &'static str,
    pub completed: bool,
}

impl Task {
    pub const fn new(id: &'static str, text: &'static str) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}

/// What a rule sees after a command runs.
#[derive(Debug)]
pub struct Observation<'a> {
    /// The command line, trimmed and lowercased.
    pub command: String,
    pub result: &'a CommandResult,
    /// Working directory after the command.
    pub cwd: String,
}

impl<'a> Observation<'a> {
    pub fn new(line: &str, result: &'a CommandResult, vfs: &VirtualFs) -> Self {
        Self {
            command: line.trim().to_lowercase(),
            result,
            cwd: vfs.current_path(),
        }
    }

    pub fn starts(&self, prefix: &str) -> bool {
        self.command.starts_with(prefix)
    }

    pub fn mentions(&self, needle: &str) -> bool {
        self.command.contains(needle)
    }

    /// Anything but an error result.
    pub fn ok(&self) -> bool {
        !self.result.is_error()
    }

    /// A plain output result with non-empty text.
    pub fn printed(&self) -> bool {
        self.result.kind == OutputKind::Output && !self.result.output.is_empty()
    }

    pub fn output_has(&self, needle: &str) -> bool {
        self.result.output.contains(needle)
    }

    pub fn in_dir(&self, name: &str) -> bool {
        self.cwd.contains(name)
    }
}

/// Marks `task` when `when` holds and `after` (if any) is already done.
#[derive(Clone, Copy)]
pub struct Rule {
    pub task: &'static str,
    pub after: Option<&'static str>,
    pub when: fn(&Observation<'_>) -> bool,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("task", &self.task)
            .field("after", &self.after)
            .finish_non_exhaustive()
    }
}

/// A level: its text, its tasks, and how it is set up and judged.
pub struct Level {
    pub number: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub tasks: &'static [Task],
    pub hints: &'static [&'static str],
    pub completion_message: &'static str,
    pub score: u32,
    /// Entry action. Prepares the filesystem; failures are ignored.
    pub setup: fn(&mut ExecContext),
    pub rules: &'static [Rule],
    /// Whether the level is won. Checks real state, not just tasks.
    pub success: fn(&LevelSession, &VirtualFs) -> bool,
}

impl fmt::Debug for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Level")
            .field("number", &self.number)
            .field("title", &self.title)
            .field("tasks", &self.tasks)
            .field("score", &self.score)
            .finish_non_exhaustive()
    }
}

/// Progress through the current level. Rebuilt on every level entry.
#[derive(Debug, Clone)]
pub struct LevelSession {
    tasks: Vec<Task>,
    started: Instant,
}

impl LevelSession {
    pub fn new(level: &Level) -> Self {
        Self {
            tasks: level.tasks.to_vec(),
            started: Instant::now(),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_done(&self, id: &str) -> bool {
        self.tasks.iter().any(|t| t.id == id && t.completed)
    }

    pub fn all_done(&self) -> bool {
        self.tasks.iter().all(|t| t.completed)
    }

    /// Mark a task complete. Returns it only on the first marking.
    pub fn mark(&mut self, id: &str) -> Option<&Task> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        if task.completed {
            return None;
        }
        task.completed = true;
        Some(task)
    }

    /// Apply every rule to an observation, in order. Later rules see tasks
    /// marked by earlier ones. Returns the newly completed tasks.
    pub fn observe(&mut self, rules: &[Rule], obs: &Observation<'_>) -> Vec<Task> {
        let mut newly = Vec::new();
        for rule in rules {
            if self.is_done(rule.task) {
                continue;
            }
            if rule.after.is_some_and(|dep| !self.is_done(dep)) {
                continue;
            }
            if (rule.when)(obs) {
                if let Some(task) = self.mark(rule.task) {
                    newly.push(task.clone());
                }
            }
        }
        newly
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

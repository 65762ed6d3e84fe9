//! Execution context for commands.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::vfs::VirtualFs;

/// PID of the one process the game lets players kill.
pub const NOTEPAD_PID: u32 = 1234;

/// Simulated running processes that can be terminated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessTable {
    running: BTreeSet<u32>,
}

impl Default for ProcessTable {
    fn default() -> Self {
        Self {
            running: BTreeSet::from([NOTEPAD_PID]),
        }
    }
}

impl ProcessTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self, pid: u32) -> bool {
        self.running.contains(&pid)
    }

    /// Terminate a process. Returns false if it was not running.
    pub fn kill(&mut self, pid: u32) -> bool {
        self.running.remove(&pid)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Identity recorded by `setinfo` for the final password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentInfo {
    pub student_id: String,
    pub name: String,
}

/// Running score and clock for the whole session.
#[derive(Debug, Clone)]
pub struct SessionStats {
    pub score: u32,
    started: Instant,
}

impl Default for SessionStats {
    fn default() -> Self {
        Self {
            score: 0,
            started: Instant::now(),
        }
    }
}

impl SessionStats {
    pub fn add(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Execution context passed to commands.
///
/// Owns every piece of state a command may read or mutate.
#[derive(Debug)]
pub struct ExecContext {
    /// The simulated drive and working directory.
    pub vfs: VirtualFs,
    pub processes: ProcessTable,
    /// Set by `setinfo`.
    pub student: Option<StudentInfo>,
    pub stats: SessionStats,
    rng: StdRng,
}

impl ExecContext {
    /// Create a context around a filesystem.
    pub fn new(vfs: VirtualFs) -> Self {
        Self::with_rng(vfs, StdRng::from_entropy())
    }

    /// Create a context with a fixed random seed, for reproducible output.
    pub fn seeded(vfs: VirtualFs, seed: u64) -> Self {
        Self::with_rng(vfs, StdRng::seed_from_u64(seed))
    }

    fn with_rng(vfs: VirtualFs, rng: StdRng) -> Self {
        Self {
            vfs,
            processes: ProcessTable::new(),
            student: None,
            stats: SessionStats::default(),
            rng,
        }
    }

    /// Current working directory, for display.
    pub fn cwd(&self) -> String {
        self.vfs.current_path()
    }

    /// Simulated round-trip time in milliseconds, 1 to 10 inclusive.
    pub fn latency_ms(&mut self) -> u32 {
        self.rng.gen_range(1..=10)
    }

    /// Return everything to a fresh game.
    pub fn reset(&mut self) {
        self.vfs.reset();
        self.processes.reset();
        self.student = None;
        self.stats.reset();
    }
}

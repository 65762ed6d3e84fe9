//! The kernel: one game session behind a single `execute` call.

use std::time::Duration;

use tracing::{debug, info};

use crate::commands::ExecContext;
use crate::interpreter::{CommandParser, CommandResult};
use crate::levels::{ADVANCE_DELAY, GameEvents, LevelManager, ManualTimer, NullEvents, Timer, TimerHandle};
use crate::vfs::{HISTORY_LIMIT, VirtualFs};

/// Configuration for kernel initialization.
#[derive(Debug, Clone)]
pub struct KernelConfig {
    /// Name of this session, for logs.
    pub name: String,
    /// Working directory before the first level's setup runs.
    pub start_dir: String,
    /// Level to start at (1-based).
    pub first_level: u32,
    /// Pause between winning a level and entering the next.
    pub advance_delay: Duration,
    /// Commands kept in history.
    pub history_limit: usize,
    /// Fixed seed for simulated output such as ping times.
    pub seed: Option<u64>,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            start_dir: r"C:\Users\Student".to_string(),
            first_level: 1,
            advance_delay: ADVANCE_DELAY,
            history_limit: HISTORY_LIMIT,
            seed: None,
        }
    }
}

impl KernelConfig {
    /// Deterministic config: fixed seed, no advance delay.
    pub fn transient() -> Self {
        Self {
            name: "transient".to_string(),
            advance_delay: Duration::ZERO,
            seed: Some(0),
            ..Self::default()
        }
    }

    pub fn starting_at(mut self, level: u32) -> Self {
        self.first_level = level;
        self
    }
}

/// One game session.
///
/// Owns the filesystem, the interpreter, and the level state. Hosts feed it
/// lines with [`execute`](Self::execute) and report fired timers with
/// [`resolve_timer`](Self::resolve_timer).
#[derive(Debug)]
pub struct Kernel {
    config: KernelConfig,
    parser: CommandParser,
    ctx: ExecContext,
    levels: LevelManager,
    command_count: u64,
}

impl Kernel {
    /// Create a kernel and enter the first level.
    pub fn new(config: KernelConfig, events: Box<dyn GameEvents>, timer: Box<dyn Timer>) -> Self {
        let vfs = VirtualFs::with_history_limit(config.history_limit);
        let ctx = match config.seed {
            Some(seed) => ExecContext::seeded(vfs, seed),
            None => ExecContext::new(vfs),
        };
        let levels = LevelManager::new(events, timer).with_advance_delay(config.advance_delay);

        let mut kernel = Self {
            config,
            parser: CommandParser::new(),
            ctx,
            levels,
            command_count: 0,
        };
        info!(name = %kernel.config.name, "kernel start");
        kernel.enter_first_level();
        kernel
    }

    /// A kernel that discards events and never advances on its own.
    pub fn transient() -> Self {
        Self::new(
            KernelConfig::transient(),
            Box::new(NullEvents),
            Box::new(ManualTimer::new()),
        )
    }

    fn enter_first_level(&mut self) {
        if let Err(e) = self.ctx.vfs.change_directory(&self.config.start_dir) {
            debug!(dir = %self.config.start_dir, error = %e, "start dir unavailable");
        }
        self.levels.reset_to_level(self.config.first_level, &mut self.ctx);
    }

    /// Run one line: record it, execute it, bank its score, then let the
    /// current level look at the outcome.
    pub fn execute(&mut self, line: &str) -> CommandResult {
        let line = line.trim();
        if line.is_empty() {
            return CommandResult::empty();
        }

        self.ctx.vfs.add_to_history(line);
        self.command_count += 1;

        let result = self.parser.parse_and_execute(line, &mut self.ctx);
        if let Some(score) = result.score {
            self.ctx.stats.add(score);
        }
        self.levels.check_progress(line, &result, &mut self.ctx);
        result
    }

    /// A scheduled timer fired. Returns whether a new level started.
    pub fn resolve_timer(&mut self, handle: TimerHandle) -> bool {
        self.levels.resolve_timer(handle, &mut self.ctx)
    }

    /// Start over: fresh drive, zero score, first level.
    pub fn reset_game(&mut self) {
        info!("game reset");
        self.ctx.reset();
        self.command_count = 0;
        self.enter_first_level();
    }

    /// Jump to a level without touching the drive or score.
    pub fn reset_to_level(&mut self, level: u32) {
        self.levels.reset_to_level(level, &mut self.ctx);
    }

    pub fn vfs(&self) -> &VirtualFs {
        &self.ctx.vfs
    }

    pub fn context(&self) -> &ExecContext {
        &self.ctx
    }

    pub fn levels(&self) -> &LevelManager {
        &self.levels
    }

    pub fn parser(&self) -> &CommandParser {
        &self.parser
    }

    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    pub fn score(&self) -> u32 {
        self.ctx.stats.score
    }

    pub fn command_count(&self) -> u64 {
        self.command_count
    }

    /// CMD-style prompt, e.g. `C:\Users\Student>`.
    pub fn prompt(&self) -> String {
        format!("{}>", self.ctx.cwd())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_level_one() {
        let kernel = Kernel::transient();
        assert_eq!(kernel.levels().level_number(), 1);
        assert_eq!(kernel.prompt(), r"C:\Users\Student>");
        assert_eq!(kernel.score(), 0);
    }

    #[test]
    fn execute_banks_score_and_history() {
        let mut kernel = Kernel::transient();
        let r = kernel.execute("  dir ");
        assert_eq!(r.score, Some(5));
        assert_eq!(kernel.score(), 5);
        assert_eq!(kernel.command_count(), 1);
        assert_eq!(kernel.vfs().history().collect::<Vec<_>>(), vec!["dir"]);

        kernel.execute("");
        assert_eq!(kernel.command_count(), 1);
    }

    #[test]
    fn reset_game_restores_everything() {
        let mut kernel = Kernel::transient();
        kernel.execute("dir");
        kernel.execute("cd documents");
        kernel.execute("mkdir junk");
        assert!(kernel.levels().is_advancing());

        kernel.reset_game();
        assert_eq!(kernel.score(), 0);
        assert_eq!(kernel.command_count(), 0);
        assert_eq!(kernel.levels().level_number(), 1);
        assert!(!kernel.levels().is_advancing());
        assert!(!kernel.vfs().exists(r"C:\Users\Student\Documents\junk"));
    }

    #[test]
    fn configured_first_level() {
        let log = crate::levels::EventLog::new();
        let kernel = Kernel::new(
            KernelConfig::transient().starting_at(4),
            Box::new(log.clone()),
            Box::new(ManualTimer::new()),
        );
        assert_eq!(kernel.levels().level_number(), 4);
        assert!(kernel.vfs().is_file(r"C:\Users\Student\Documents\delete_me.txt"));
        assert!(log.messages().contains(&"\n=== 第 4 关：文件删除 ===".to_string()));
    }
}

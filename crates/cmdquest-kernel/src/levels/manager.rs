//! Level state machine.
//!
//! ```text
//!   setup ──► Playing ──(level won)──► Advancing ──(timer fires)──► setup
//!                │                                                    │
//!                └──(last level won)──► Complete        reset_to_level┘
//! ```

use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info};

use super::events::{GameEvents, MessageStyle};
use super::level::{Level, LevelSession, Observation, Task};
use super::password::{DEFAULT_PLAYER, completion_code};
use super::table::LEVELS;
use super::timer::{Timer, TimerHandle};
use crate::commands::ExecContext;
use crate::interpreter::CommandResult;

/// Delay between winning a level and entering the next.
pub const ADVANCE_DELAY: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Playing,
    /// Won; the next level starts when this timer fires.
    Advancing(TimerHandle),
    Complete,
}

/// Drives the player through [`LEVELS`].
pub struct LevelManager {
    levels: &'static [Level],
    index: usize,
    session: LevelSession,
    phase: Phase,
    advance_delay: Duration,
    events: Box<dyn GameEvents>,
    timer: Box<dyn Timer>,
    completion_code: Option<String>,
}

impl std::fmt::Debug for LevelManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LevelManager")
            .field("index", &self.index)
            .field("phase", &self.phase)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl LevelManager {
    /// Create a manager positioned at level 1. Nothing is set up until
    /// [`setup_current_level`](Self::setup_current_level) runs.
    pub fn new(events: Box<dyn GameEvents>, timer: Box<dyn Timer>) -> Self {
        Self {
            levels: &LEVELS,
            index: 0,
            session: LevelSession::new(&LEVELS[0]),
            phase: Phase::Playing,
            advance_delay: ADVANCE_DELAY,
            events,
            timer,
            completion_code: None,
        }
    }

    pub fn with_advance_delay(mut self, delay: Duration) -> Self {
        self.advance_delay = delay;
        self
    }

    pub fn levels(&self) -> &'static [Level] {
        self.levels
    }

    /// The level being played or waiting to start. `None` once the game is
    /// complete.
    pub fn current_level(&self) -> Option<&'static Level> {
        self.levels.get(self.index)
    }

    /// 1-based number of the current level; one past the last when complete.
    pub fn level_number(&self) -> u32 {
        self.index as u32 + 1
    }

    pub fn tasks(&self) -> &[Task] {
        self.session.tasks()
    }

    pub fn session(&self) -> &LevelSession {
        &self.session
    }

    pub fn hints(&self) -> &'static [&'static str] {
        self.current_level().map(|l| l.hints).unwrap_or(&[])
    }

    pub fn is_advancing(&self) -> bool {
        matches!(self.phase, Phase::Advancing(_))
    }

    pub fn is_game_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    pub fn completion_code(&self) -> Option<&str> {
        self.completion_code.as_deref()
    }

    /// Entry action for the current level.
    pub fn setup_current_level(&mut self, ctx: &mut ExecContext) {
        let Some(level) = self.current_level() else {
            return;
        };

        self.session = LevelSession::new(level);
        self.phase = Phase::Playing;
        (level.setup)(ctx);
        info!(level = level.number, title = level.title, "level start");

        self.events.level_info(level);
        self.events.task_list(self.session.tasks());
        self.events.message(
            &format!("\n=== 第 {} 关：{} ===", level.number, level.title),
            MessageStyle::LevelStart,
        );
        self.events.message(level.description, MessageStyle::LevelDesc);
        self.events.message("输入 help 获取提示信息\n", MessageStyle::Info);
    }

    /// Feed one executed command to the current level.
    pub fn check_progress(&mut self, command: &str, result: &CommandResult, ctx: &mut ExecContext) {
        if self.phase != Phase::Playing {
            return;
        }
        let Some(level) = self.current_level() else {
            return;
        };

        let observation = Observation::new(command, result, &ctx.vfs);
        let newly = self.session.observe(level.rules, &observation);
        for task in &newly {
            debug!(level = level.number, task = task.id, "task complete");
            self.events.task_list(self.session.tasks());
            self.events
                .message(&format!("✓ 任务完成: {}", task.text), MessageStyle::TaskComplete);
        }

        if (level.success)(&self.session, &ctx.vfs) {
            self.complete_level(ctx);
        }
    }

    /// Award the current level and move on.
    pub fn complete_level(&mut self, ctx: &mut ExecContext) {
        let Some(level) = self.current_level() else {
            return;
        };

        let spent = self.session.elapsed().as_secs();
        ctx.stats.add(level.score);
        info!(level = level.number, seconds = spent, "level complete");
        self.events.message(
            &format!(
                "🎉 恭喜！关卡 {} 完成！\n{}\n获得分数: +{}\n用时: {} 秒",
                level.number, level.completion_message, level.score, spent
            ),
            MessageStyle::Success,
        );

        self.index += 1;
        if self.index >= self.levels.len() {
            self.complete_game(ctx);
        } else {
            let handle = self.timer.schedule_after(self.advance_delay);
            debug!(?handle, "next level scheduled");
            self.phase = Phase::Advancing(handle);
        }
    }

    fn complete_game(&mut self, ctx: &ExecContext) {
        let score = ctx.stats.score;
        let secs = ctx.stats.elapsed().as_secs();
        info!(score, seconds = secs, "game complete");

        self.phase = Phase::Complete;
        self.events.message(
            &format!(
                "🎉 恭喜通关！\n你已经完成了所有 {} 个关卡！\n总分数: {}\n总用时: {}分{}秒\n你已经成为Windows命令行高手！",
                self.levels.len(),
                score,
                secs / 60,
                secs % 60
            ),
            MessageStyle::GameComplete,
        );

        let code = completion_code(DEFAULT_PLAYER, score, secs, Utc::now().timestamp_millis());
        self.events.message(
            &format!("通关码\n{code}\n请将此通关码发送给老师以验证你的学习成果。"),
            MessageStyle::CompletionCode,
        );
        self.completion_code = Some(code);
    }

    /// The host reports a fired timer. Returns whether it started a level.
    pub fn resolve_timer(&mut self, handle: TimerHandle, ctx: &mut ExecContext) -> bool {
        if self.phase != Phase::Advancing(handle) {
            debug!(?handle, "stale timer ignored");
            return false;
        }
        self.setup_current_level(ctx);
        true
    }

    /// Jump straight to level `number` (1-based, clamped to the table).
    pub fn reset_to_level(&mut self, number: u32, ctx: &mut ExecContext) {
        if let Phase::Advancing(handle) = self.phase {
            self.timer.cancel(handle);
        }
        self.index = (number.max(1) as usize - 1).min(self.levels.len() - 1);
        self.completion_code = None;
        self.setup_current_level(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::CommandParser;
    use crate::levels::{EventLog, ManualTimer};
    use crate::vfs::VirtualFs;

    struct Harness {
        manager: LevelManager,
        ctx: ExecContext,
        parser: CommandParser,
        log: EventLog,
        timer: ManualTimer,
    }

    impl Harness {
        fn new() -> Self {
            let log = EventLog::new();
            let timer = ManualTimer::new();
            let mut ctx = ExecContext::seeded(VirtualFs::new(), 5);
            let mut manager = LevelManager::new(Box::new(log.clone()), Box::new(timer.clone()));
            manager.setup_current_level(&mut ctx);
            Self {
                manager,
                ctx,
                parser: CommandParser::new(),
                log,
                timer,
            }
        }

        fn run(&mut self, line: &str) -> CommandResult {
            let result = self.parser.parse_and_execute(line, &mut self.ctx);
            self.manager.check_progress(line, &result, &mut self.ctx);
            result
        }

        fn fire(&mut self) -> bool {
            match self.timer.fire_next() {
                Some(handle) => self.manager.resolve_timer(handle, &mut self.ctx),
                None => false,
            }
        }
    }

    #[test]
    fn intro_messages() {
        let h = Harness::new();
        assert_eq!(
            h.log.messages(),
            vec![
                "\n=== 第 1 关：基础导航 ===",
                "学习使用 cd 命令进入指定目录",
                "输入 help 获取提示信息\n",
            ]
        );
    }

    #[test]
    fn navigation_level() {
        let mut h = Harness::new();
        h.log.take();
        h.run("dir");
        assert!(h.manager.session().is_done("nav_1"));
        h.run("cd Documents");
        assert_eq!(h.ctx.cwd(), r"C:\Users\Student\Documents");

        assert!(h.manager.is_advancing());
        assert_eq!(h.ctx.stats.score, 50);
        let messages = h.log.messages();
        assert!(messages.contains(&"✓ 任务完成: 使用 dir 命令查看当前目录".to_string()));
        assert!(messages.iter().any(|m| m.starts_with("🎉 恭喜！关卡 1 完成！")));

        let pending = h.timer.pending();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].1, ADVANCE_DELAY);
        assert!(h.fire());
        assert_eq!(h.manager.level_number(), 2);
        assert!(!h.manager.is_advancing());
    }

    #[test]
    fn task_completion_is_idempotent() {
        let mut h = Harness::new();
        h.log.take();
        h.run("dir");
        h.run("dir");
        let marks = h
            .log
            .messages()
            .into_iter()
            .filter(|m| m.starts_with("✓"))
            .count();
        assert_eq!(marks, 1);
    }

    #[test]
    fn failed_dir_does_not_count() {
        let mut h = Harness::new();
        h.run("dir nowhere");
        assert!(!h.manager.session().is_done("nav_1"));
    }

    #[test]
    fn progress_ignored_while_advancing() {
        let mut h = Harness::new();
        h.run("cd documents");
        assert!(h.manager.is_advancing());
        h.run("mkdir my_folder");
        h.fire();
        assert_eq!(h.manager.level_number(), 2);
        assert!(!h.manager.session().is_done("mkdir_1"));
    }

    #[test]
    fn reset_cancels_pending_advance() {
        let mut h = Harness::new();
        h.run("cd documents");
        let (stale, _) = h.timer.pending()[0];
        h.manager.reset_to_level(5, &mut h.ctx);
        assert!(h.timer.pending().is_empty());
        assert!(!h.manager.resolve_timer(stale, &mut h.ctx));
        assert_eq!(h.manager.level_number(), 5);
    }

    #[test]
    fn reset_clamps() {
        let mut h = Harness::new();
        h.manager.reset_to_level(0, &mut h.ctx);
        assert_eq!(h.manager.level_number(), 1);
        h.manager.reset_to_level(99, &mut h.ctx);
        assert_eq!(h.manager.level_number(), 16);
        assert_eq!(h.manager.hints().len(), 2);
    }

    #[test]
    fn mkdir_level_needs_directory() {
        let mut h = Harness::new();
        h.manager.reset_to_level(2, &mut h.ctx);
        h.run("mkdir my_folder");
        h.run("rmdir my_folder");
        h.run("dir");
        assert!(h.manager.session().all_done());
        assert!(!h.manager.is_advancing());
        h.run("mkdir my_folder");
        h.run("dir");
        assert!(h.manager.is_advancing());
    }

    #[test]
    fn last_level_completes_game() {
        let mut h = Harness::new();
        h.manager.reset_to_level(16, &mut h.ctx);
        h.run("setinfo 2023001 张三");
        h.run("genpass");
        assert!(h.manager.is_game_complete());
        assert!(h.manager.current_level().is_none());
        assert!(h.timer.pending().is_empty());
        assert_eq!(h.ctx.stats.score, 200);

        let code = h.manager.completion_code().unwrap().to_string();
        let messages = h.log.messages();
        assert!(messages.iter().any(|m| m.contains("你已经完成了所有 16 个关卡！")));
        assert!(messages.iter().any(|m| m.contains(&code)));

        h.run("dir");
        h.manager.reset_to_level(1, &mut h.ctx);
        assert!(!h.manager.is_game_complete());
        assert!(h.manager.completion_code().is_none());
    }
}

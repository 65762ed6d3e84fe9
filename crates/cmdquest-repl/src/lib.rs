//! cmdquest REPL: play the CMD learning game in a terminal.
//!
//! - Lines go to the kernel as CMD commands (`dir`, `cd Documents`, ...)
//! - Level messages are printed after the command that caused them
//! - The next level starts after a short pause, driven by tokio timers
//! - Meta-commands: `/help`, `/hint`, `/level`, `/reset [n]`, `/score`,
//!   `/history`, `/json`, `/quit`

use std::collections::HashMap;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use cmdquest_kernel::levels::{EventLog, GameEvent, ManualTimer, MessageStyle, Timer, TimerHandle};
use cmdquest_kernel::{CommandResult, HostAction, Kernel, KernelConfig, OutputKind};

/// Environment variable selecting the starting level.
pub const LEVEL_ENV: &str = "CMDQUEST_LEVEL";

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Timers backed by tokio tasks. A fired timer sends its handle down the
/// channel; cancelling aborts the task.
pub struct TokioTimer {
    next: u64,
    tasks: HashMap<TimerHandle, JoinHandle<()>>,
    fired: mpsc::UnboundedSender<TimerHandle>,
}

impl TokioTimer {
    pub fn new(fired: mpsc::UnboundedSender<TimerHandle>) -> Self {
        Self {
            next: 0,
            tasks: HashMap::new(),
            fired,
        }
    }
}

impl Timer for TokioTimer {
    fn schedule_after(&mut self, delay: Duration) -> TimerHandle {
        self.tasks.retain(|_, task| !task.is_finished());
        self.next += 1;
        let handle = TimerHandle(self.next);
        let fired = self.fired.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = fired.send(handle);
        });
        self.tasks.insert(handle, task);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(task) = self.tasks.remove(&handle) {
            task.abort();
        }
    }
}

/// REPL configuration and state.
pub struct Repl {
    kernel: Kernel,
    log: EventLog,
    /// Set when timers are resolved inline instead of by a runtime.
    manual: Option<ManualTimer>,
    json: bool,
    color: bool,
    quit: bool,
}

impl Repl {
    /// A REPL for scripted use: deterministic, and the next level starts
    /// immediately after a level is won.
    pub fn new() -> Self {
        Self::with_config(KernelConfig::transient())
    }

    pub fn with_config(config: KernelConfig) -> Self {
        let timer = ManualTimer::new();
        let mut repl = Self::build(config, Box::new(timer.clone()));
        repl.manual = Some(timer);
        repl
    }

    /// A REPL whose level advances are scheduled on `timer`. The host must
    /// pass fired handles to [`resolve_timer`](Self::resolve_timer).
    pub fn with_timer(config: KernelConfig, timer: Box<dyn Timer>) -> Self {
        Self::build(config, timer)
    }

    fn build(config: KernelConfig, timer: Box<dyn Timer>) -> Self {
        let log = EventLog::new();
        let kernel = Kernel::new(config, Box::new(log.clone()), timer);
        Self {
            kernel,
            log,
            manual: None,
            json: false,
            color: false,
            quit: false,
        }
    }

    pub fn set_color(&mut self, on: bool) {
        self.color = on;
    }

    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    pub fn prompt(&self) -> String {
        self.kernel.prompt()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Messages produced before any input, such as the first level intro.
    pub fn banner(&mut self) -> Result<Option<String>> {
        Ok(join(self.drain_events()?))
    }

    /// Process a single line of input.
    pub fn process_line(&mut self, line: &str) -> Result<Option<String>> {
        let trimmed = line.trim();

        if trimmed.starts_with('/') {
            return self.handle_meta_command(trimmed);
        }
        if trimmed.is_empty() {
            return Ok(None);
        }

        let result = self.kernel.execute(trimmed);
        let mut parts = Vec::new();
        match result.action {
            Some(HostAction::Exit) => self.quit = true,
            Some(HostAction::ClearScreen) if !self.json => parts.push(CLEAR_SCREEN.to_string()),
            _ => {}
        }
        parts.extend(self.render_result(&result)?);

        if let Some(timer) = &self.manual {
            while let Some(handle) = timer.fire_next() {
                self.kernel.resolve_timer(handle);
            }
        }
        parts.extend(self.drain_events()?);
        Ok(join(parts))
    }

    /// A runtime timer fired. Returns what the new level printed.
    pub fn resolve_timer(&mut self, handle: TimerHandle) -> Result<Option<String>> {
        if !self.kernel.resolve_timer(handle) {
            return Ok(None);
        }
        Ok(join(self.drain_events()?))
    }

    fn render_result(&self, result: &CommandResult) -> Result<Option<String>> {
        if self.json {
            return Ok(Some(result.to_json().to_string()));
        }
        if result.output.is_empty() {
            return Ok(None);
        }
        let text = &result.output;
        Ok(Some(if !self.color {
            text.clone()
        } else {
            match result.kind {
                OutputKind::Output => text.clone(),
                OutputKind::Error => text.red().to_string(),
                OutputKind::Info => text.cyan().to_string(),
                OutputKind::Success => text.green().to_string(),
            }
        }))
    }

    fn drain_events(&self) -> Result<Vec<String>> {
        let mut out = Vec::new();
        for event in self.log.take() {
            if self.json {
                out.push(serde_json::to_string(&event)?);
            } else if let GameEvent::Message { text, style } = event {
                out.push(self.paint(&text, style));
            }
        }
        Ok(out)
    }

    fn paint(&self, text: &str, style: MessageStyle) -> String {
        if !self.color {
            return text.to_string();
        }
        match style {
            MessageStyle::LevelStart => text.yellow().bold().to_string(),
            MessageStyle::LevelDesc => text.to_string(),
            MessageStyle::Info => text.cyan().to_string(),
            MessageStyle::TaskComplete => text.green().to_string(),
            MessageStyle::Success => text.green().bold().to_string(),
            MessageStyle::GameComplete => text.magenta().bold().to_string(),
            MessageStyle::CompletionCode => text.cyan().bold().to_string(),
        }
    }

    /// Handle a meta-command (starts with /).
    fn handle_meta_command(&mut self, cmd: &str) -> Result<Option<String>> {
        let parts: Vec<&str> = cmd.split_whitespace().collect();
        let command = parts.first().copied().unwrap_or("");

        match command {
            "/quit" | "/q" | "/exit" => {
                self.quit = true;
                Ok(None)
            }
            "/help" | "/h" | "/?" => Ok(Some(HELP_TEXT.to_string())),
            "/hint" => {
                let hints = self.kernel.levels().hints();
                if hints.is_empty() {
                    return Ok(Some("(没有提示)".to_string()));
                }
                let mut output = String::from("提示:\n");
                for (i, hint) in hints.iter().enumerate() {
                    output.push_str(&format!("  {}. {hint}\n", i + 1));
                }
                Ok(Some(output.trim_end().to_string()))
            }
            "/level" => Ok(Some(self.level_summary())),
            "/reset" => match parts.get(1) {
                None => {
                    self.kernel.reset_game();
                    Ok(join(self.drain_events()?))
                }
                Some(n) => match n.parse::<u32>() {
                    Ok(level) => {
                        self.kernel.reset_to_level(level);
                        Ok(join(self.drain_events()?))
                    }
                    Err(_) => Ok(Some("Usage: /reset [level]".to_string())),
                },
            },
            "/score" => {
                let secs = self.kernel.context().stats.elapsed().as_secs();
                Ok(Some(format!(
                    "分数: {}\n命令数: {}\n用时: {}分{}秒",
                    self.kernel.score(),
                    self.kernel.command_count(),
                    secs / 60,
                    secs % 60
                )))
            }
            "/history" => {
                let lines: Vec<String> = self
                    .kernel
                    .vfs()
                    .history()
                    .enumerate()
                    .map(|(i, line)| format!("{:>4}  {line}", i + 1))
                    .collect();
                if lines.is_empty() {
                    Ok(Some("(no history)".to_string()))
                } else {
                    Ok(Some(lines.join("\n")))
                }
            }
            "/json" => {
                self.json = !self.json;
                Ok(Some(format!("JSON mode: {}", if self.json { "ON" } else { "OFF" })))
            }
            _ => Ok(Some(format!(
                "Unknown command: {command}\nType /help for available commands."
            ))),
        }
    }

    fn level_summary(&self) -> String {
        let levels = self.kernel.levels();
        let Some(level) = levels.current_level() else {
            return match levels.completion_code() {
                Some(code) => format!("全部关卡已完成。通关码: {code}"),
                None => "全部关卡已完成。".to_string(),
            };
        };

        let mut output = format!(
            "第 {} 关 / 共 {} 关：{}\n{}\n",
            level.number,
            levels.levels().len(),
            level.title,
            level.description
        );
        for task in levels.tasks() {
            let mark = if task.completed { "✓" } else { " " };
            output.push_str(&format!("  [{mark}] {}\n", task.text));
        }
        if levels.is_advancing() {
            output.push_str("(即将进入下一关)\n");
        }
        output.trim_end().to_string()
    }
}

impl Default for Repl {
    fn default() -> Self {
        Self::new()
    }
}

fn join(parts: Vec<String>) -> Option<String> {
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("\n"))
    }
}

const HELP_TEXT: &str = r#"cmdquest: learn the Windows command line

Type CMD commands at the prompt (dir, cd, type, copy, del, ...).
Type `help` for the list of game commands.

Meta-commands:
  /help, /h, /?     Show this help
  /hint             Hints for the current level
  /level            Current level and its tasks
  /reset            Restart the game from level 1
  /reset <n>        Jump to level n
  /score            Score, command count, and play time
  /history          Commands entered this game
  /json             Toggle JSON output
  /quit, /q         Exit
"#;

enum Input {
    Line(String),
    Interrupted,
    Eof,
}

fn config_from_env() -> KernelConfig {
    let mut config = KernelConfig {
        name: "repl".to_string(),
        ..KernelConfig::default()
    };
    if let Some(level) = std::env::var(LEVEL_ENV).ok().and_then(|v| v.trim().parse().ok()) {
        config.first_level = level;
    }
    config
}

fn history_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|d| d.data_dir().join("cmdquest").join("history.txt"))
}

/// Blocking line reader. Waits for a prompt, reads one line, sends it on.
fn read_lines(
    prompts: std::sync::mpsc::Receiver<String>,
    input: mpsc::UnboundedSender<Input>,
) -> Result<()> {
    let mut rl: Editor<(), DefaultHistory> = Editor::new().context("Failed to create editor")?;

    let history = history_path();
    if let Some(ref path) = history {
        let _ = rl.load_history(path);
    }

    while let Ok(prompt) = prompts.recv() {
        let event = match rl.readline(&prompt) {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                Input::Line(line)
            }
            Err(ReadlineError::Interrupted) => Input::Interrupted,
            Err(ReadlineError::Eof) => Input::Eof,
            Err(err) => {
                tracing::warn!(error = %err, "readline failed");
                Input::Eof
            }
        };
        let eof = matches!(event, Input::Eof);
        if input.send(event).is_err() || eof {
            break;
        }
    }

    if let Some(ref path) = history {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = rl.save_history(path);
    }
    Ok(())
}

/// Run the REPL.
pub fn run() -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to start tokio runtime")?;
    runtime.block_on(run_async())
}

async fn run_async() -> Result<()> {
    println!("cmdquest v{}: Windows 命令行学习游戏", env!("CARGO_PKG_VERSION"));
    println!("Type /help for commands, /quit to exit.\n");

    let (timer_tx, mut timer_rx) = mpsc::unbounded_channel();
    let mut repl = Repl::with_timer(config_from_env(), Box::new(TokioTimer::new(timer_tx)));
    repl.set_color(std::io::stdout().is_terminal());
    if let Some(intro) = repl.banner()? {
        println!("{intro}");
    }

    let (prompt_tx, prompt_rx) = std::sync::mpsc::channel::<String>();
    let (input_tx, mut input_rx) = mpsc::unbounded_channel();
    let reader = tokio::task::spawn_blocking(move || read_lines(prompt_rx, input_tx));

    prompt_tx.send(repl.prompt()).context("input thread stopped")?;
    loop {
        tokio::select! {
            Some(handle) = timer_rx.recv() => {
                if let Some(output) = repl.resolve_timer(handle)? {
                    println!("\n{output}");
                }
            }
            input = input_rx.recv() => {
                match input {
                    Some(Input::Line(line)) => {
                        match repl.process_line(&line) {
                            Ok(Some(output)) => println!("{output}"),
                            Ok(None) => {}
                            Err(e) => eprintln!("Error: {e}"),
                        }
                        if repl.should_quit() {
                            break;
                        }
                    }
                    Some(Input::Interrupted) => println!("^C"),
                    Some(Input::Eof) | None => {
                        println!("^D");
                        break;
                    }
                }
                if prompt_tx.send(repl.prompt()).is_err() {
                    break;
                }
            }
        }
    }

    drop(prompt_tx);
    reader.await.context("input thread panicked")??;
    Ok(())
}

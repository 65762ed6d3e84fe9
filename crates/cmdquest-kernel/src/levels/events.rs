//! Notifications from the level state machine to the host.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;

use super::{Level, Task};

/// How the host should style a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageStyle {
    LevelStart,
    LevelDesc,
    Info,
    TaskComplete,
    Success,
    GameComplete,
    CompletionCode,
}

/// Sink for level progress. The host renders these however it likes.
pub trait GameEvents: Send {
    /// A line of text for the terminal.
    fn message(&mut self, text: &str, style: MessageStyle);

    /// A new level became current.
    fn level_info(&mut self, level: &Level);

    /// Task states changed.
    fn task_list(&mut self, tasks: &[Task]);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEvents;

impl GameEvents for NullEvents {
    fn message(&mut self, _text: &str, _style: MessageStyle) {}
    fn level_info(&mut self, _level: &Level) {}
    fn task_list(&mut self, _tasks: &[Task]) {}
}

/// One recorded event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    Message { text: String, style: MessageStyle },
    LevelInfo { number: u32, title: String },
    TaskList { tasks: Vec<Task> },
}

/// Records events into a shared buffer.
///
/// Clones share the buffer, so a host can hand one clone to the kernel and
/// drain the other after each command.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<GameEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<GameEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Remove and return everything recorded so far.
    pub fn take(&self) -> Vec<GameEvent> {
        std::mem::take(&mut *self.lock())
    }

    /// Text of every recorded message, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|e| match e {
                GameEvent::Message { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl GameEvents for EventLog {
    fn message(&mut self, text: &str, style: MessageStyle) {
        self.lock().push(GameEvent::Message {
            text: text.to_string(),
            style,
        });
    }

    fn level_info(&mut self, level: &Level) {
        self.lock().push(GameEvent::LevelInfo {
            number: level.number,
            title: level.title.to_string(),
        });
    }

    fn task_list(&mut self, tasks: &[Task]) {
        self.lock().push(GameEvent::TaskList {
            tasks: tasks.to_vec(),
        });
    }
}

//! Levels, tasks, and the progression state machine.
//!
//! Each level has tasks that are marked by rules watching executed commands,
//! and a success check that also inspects the filesystem, so typing the
//! right words without the right effect does not pass a level.

mod events;
mod level;
mod manager;
mod password;
mod table;
mod timer;

pub use events::{EventLog, GameEvent, GameEvents, MessageStyle, NullEvents};
pub use level::{Level, LevelSession, Observation, Rule, Task};
pub use manager::{ADVANCE_DELAY, LevelManager};
pub use password::{
    DEFAULT_PLAYER, PASSWORD_KEY, PasswordError, completion_code, decode_password,
    generate_encrypted_password,
};
pub use table::LEVELS;
pub use timer::{ManualTimer, Timer, TimerHandle};

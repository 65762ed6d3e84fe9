//! cmdquest-kernel: the core of a Windows CMD learning game.
//!
//! This crate provides:
//!
//! - **VFS**: an in-memory drive `C:` with CMD path rules and a seed layout
//! - **Interpreter**: a tokenizer and a registry of CMD builtins (`dir`, `cd`,
//!   `copy`, `del`, `tasklist`, ...) that return [`CommandResult`]s
//! - **Levels**: sixteen lessons whose tasks are checked against executed
//!   commands and the resulting filesystem state
//! - **Kernel**: one session tying them together
//!
//! Everything is synchronous and owned by a single session. The only
//! deferred work, entering the next level, is handed to the host through the
//! [`levels::Timer`] trait.

pub mod commands;
pub mod interpreter;
pub mod kernel;
pub mod levels;
pub mod vfs;

pub use interpreter::{CommandParser, CommandResult, HostAction, OutputKind};
pub use kernel::{Kernel, KernelConfig};
pub use levels::{GameEvents, LevelManager, Timer, TimerHandle};
pub use vfs::{FsError, VirtualFs};

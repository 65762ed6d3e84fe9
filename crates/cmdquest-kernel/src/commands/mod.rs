//! Command handlers and the machinery to dispatch to them.
//!
//! Every command implements [`Command`] and is registered in a
//! [`CommandRegistry`] under its name and aliases. Handlers receive the
//! arguments after the command name and an [`ExecContext`] holding all
//! mutable game state.

pub mod builtin;
mod context;
mod error;
mod registry;
mod traits;

pub use context::{ExecContext, NOTEPAD_PID, ProcessTable, SessionStats, StudentInfo};
pub use error::{CommandError, SYNTAX_ERROR};
pub use registry::CommandRegistry;
pub use traits::Command;

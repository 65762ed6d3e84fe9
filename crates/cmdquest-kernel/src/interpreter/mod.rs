//! Line interpreter: tokenize, look up, dispatch.
//!
//! There is no grammar beyond whitespace and quotes. The first token names
//! the command (case-insensitive) and the rest are its arguments.

mod result;
mod tokenize;

pub use result::{CommandResult, HostAction, OutputKind};
pub use tokenize::tokenize;

use tracing::{debug, warn};

use crate::commands::builtin::builtin_registry;
use crate::commands::{CommandError, CommandRegistry, ExecContext};

/// Parses command lines and dispatches them to registered commands.
#[derive(Debug)]
pub struct CommandParser {
    registry: CommandRegistry,
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandParser {
    /// A parser with every built-in command.
    pub fn new() -> Self {
        Self::with_registry(builtin_registry())
    }

    /// A parser over a custom registry.
    pub fn with_registry(registry: CommandRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Execute one line against the context.
    ///
    /// Never fails: unknown commands and handler errors come back as
    /// error results.
    pub fn parse_and_execute(&self, line: &str, ctx: &mut ExecContext) -> CommandResult {
        let tokens = tokenize(line.trim());
        let Some((name, args)) = tokens.split_first() else {
            return CommandResult::empty();
        };
        let name = name.to_lowercase();

        let Some(command) = self.registry.get(&name) else {
            debug!(command = %name, "unknown command");
            return CommandResult::error(format!(
                "'{name}' 不是内部或外部命令，也不是可运行的程序或批处理文件。"
            ));
        };

        debug!(command = %name, ?args, "execute");
        match command.execute(args, ctx) {
            Ok(result) => result,
            Err(CommandError::Syntax) => CommandError::Syntax.into_result(),
            Err(err) => {
                warn!(command = %name, error = %err, "command failed");
                err.into_result()
            }
        }
    }

    /// Every name and alias the parser accepts, sorted.
    pub fn supported_commands(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for name in self.registry.names() {
            names.push(name.to_string());
            if let Some(cmd) = self.registry.get(name) {
                names.extend(cmd.aliases().iter().map(|a| a.to_string()));
            }
        }
        names.sort();
        names
    }

    /// One-line description of a command or alias.
    pub fn command_help(&self, name: &str) -> Option<String> {
        self.registry.get(name).map(|c| c.description().to_string())
    }
}

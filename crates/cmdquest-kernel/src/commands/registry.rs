//! Command registry for looking up handlers by name or alias.

use std::collections::HashMap;
use std::sync::Arc;

use super::Command;

/// Registry of available commands.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Arc<dyn Command>>,
    aliases: HashMap<String, String>,
}

impl CommandRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command and its aliases.
    pub fn register(&mut self, command: impl Command + 'static) {
        self.register_arc(Arc::new(command));
    }

    /// Register a command that's already in an Arc.
    pub fn register_arc(&mut self, command: Arc<dyn Command>) {
        let name = command.name().to_string();
        for alias in command.aliases() {
            self.aliases.insert(alias.to_string(), name.clone());
        }
        self.commands.insert(name, command);
    }

    /// Look up a command by name or alias. Lookup is case-insensitive.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Command>> {
        let name = name.to_lowercase();
        let primary = self.aliases.get(&name).unwrap_or(&name);
        self.commands.get(primary).cloned()
    }

    /// Check if a name or alias is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Primary names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.commands.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// `(name, description)` pairs, sorted by name.
    pub fn descriptions(&self) -> Vec<(&str, &str)> {
        let mut out: Vec<_> = self
            .commands
            .values()
            .map(|c| (c.name(), c.description()))
            .collect();
        out.sort_by(|a, b| a.0.cmp(b.0));
        out
    }

    /// Number of registered commands (aliases excluded).
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.names())
            .finish()
    }
}

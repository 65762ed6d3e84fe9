//! help — Command index and per-command descriptions.

use std::collections::BTreeMap;

use crate::commands::{Command, CommandError, CommandRegistry, ExecContext};
use crate::interpreter::CommandResult;

const DESCRIPTION: &str = "提供 Windows 命令的帮助信息";

/// Help command.
///
/// Holds a snapshot of the registry's names, aliases and descriptions,
/// taken when it is registered.
#[derive(Debug, Clone)]
pub struct Help {
    entries: BTreeMap<String, String>,
    aliases: BTreeMap<String, String>,
}

impl Help {
    /// Index every command currently in `registry`, plus `help` itself.
    pub fn from_registry(registry: &CommandRegistry) -> Self {
        let mut entries = BTreeMap::new();
        let mut aliases = BTreeMap::new();
        for name in registry.names() {
            let Some(cmd) = registry.get(name) else {
                continue;
            };
            entries.insert(name.to_string(), cmd.description().to_string());
            for alias in cmd.aliases() {
                aliases.insert(alias.to_string(), name.to_string());
            }
        }
        entries.insert("help".to_string(), DESCRIPTION.to_string());
        Self { entries, aliases }
    }

    fn index(&self) -> String {
        let mut out = String::from("有关某个命令的详细信息，请键入 HELP 命令名。\n\n可用命令:\n");
        for (name, desc) in &self.entries {
            out.push_str(&format!("{:<12} {desc}\n", name.to_uppercase()));
        }
        out
    }
}

impl Command for Help {
    fn name(&self) -> &str {
        "help"
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn execute(&self, args: &[String], _ctx: &mut ExecContext) -> Result<CommandResult, CommandError> {
        let Some(topic) = args.first() else {
            return Ok(CommandResult::info(self.index()));
        };

        let topic = topic.to_lowercase();
        let primary = self.aliases.get(&topic).unwrap_or(&topic);
        Ok(match self.entries.get(primary) {
            Some(desc) => CommandResult::info(format!("{}: {desc}", primary.to_uppercase())),
            None => CommandResult::error(format!("没有找到命令 '{topic}' 的帮助信息。")),
        })
    }
}

//! Built-in commands.
//!
//! These cover the CMD subset the game teaches: navigation, file and
//! directory management, search, process control, and the student
//! password flow.

mod cd;
mod cls;
mod copy;
mod del;
mod dir;
mod echo;
mod exit;
mod find;
mod findstr;
mod help;
mod mkdir;
mod ping;
mod rmdir;
mod student;
mod sysinfo;
mod taskkill;
mod tasklist;
mod tree;
mod type_file;
mod which;

use super::CommandRegistry;

pub use help::Help;

/// Register all built-in commands with the registry.
pub fn register_builtins(registry: &mut CommandRegistry) {
    registry.register(dir::Dir);
    registry.register(cd::Cd);
    registry.register(type_file::Type);
    registry.register(cls::Cls);
    registry.register(mkdir::Mkdir);
    registry.register(rmdir::Rmdir);
    registry.register(del::Del);
    registry.register(copy::Copy);
    registry.register(copy::Move);
    registry.register(copy::Rename);
    registry.register(find::Find);
    registry.register(tree::Tree);
    registry.register(echo::Echo);
    registry.register(sysinfo::Date);
    registry.register(sysinfo::Time);
    registry.register(sysinfo::Ver);
    registry.register(sysinfo::Whoami);
    registry.register(sysinfo::Pwd);
    registry.register(ping::Ping);
    registry.register(tasklist::Tasklist);
    registry.register(taskkill::Taskkill);
    registry.register(which::Where);
    registry.register(findstr::Findstr);
    registry.register(student::SetInfo);
    registry.register(student::GenPass);
    registry.register(exit::Exit);

    // Last, so the help index sees every other command.
    let help = Help::from_registry(registry);
    registry.register(help);
}

/// A registry with every built-in command.
pub fn builtin_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry);
    registry
}

//! Define commands for the Command Line Interface
//!
//! This module provides facilities to register a collection of commands, where each command,
//! defined in a private submodule, is a thin wrapper over core API features.
//!
//! The CLI enables to chain several commands, each can use and modify a global context, currently
//! limited to a shared truth table. The global CLI will thus start by searching command names in
//! the full list of arguments. The arguments between two successive commands define the arguments
//! of the first command.
//!
//! # Example
//!
//! The following command:
//!
//! ```qmkit load table.tt primes minimize --latex```
//!
//! defines the following subcommands:
//! * **load** ```table.tt```
//! * **primes**
//! * **minimize** ```--latex```
//!
//! The value following an option which expects one (```-F```, ```-e```) is never taken for a
//! command. A positional argument (filename) matching a command name or alias still starts a
//! new command: use ```load ./table``` instead of ```load table```.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::env;
use std::ffi::OsString;
use std::sync::Arc;

use crate::func::Minimization;
use crate::helper::error::{EmptyQmkResult, QmkError, QmkResult};
use crate::model::TruthTable;

/// Options taking a value which should not be confused with a command name
const VALUE_OPTIONS: [&str; 4] = ["-F", "--format", "-e", "--expr"];

// Use a macro to load all command modules and add them to the list of available commands
macro_rules! cmdmods {
    ( $( $x:ident ),* ) => {
        $( mod $x; )*
        /// Single-instance CommandManager created and filled at runtime
        static COMMANDS: Lazy<CommandManager> = Lazy::new(|| {
            CommandManager::default()
            $(  .register( Arc::new( $x::CLI{}))  )*
        });
    };
}

// Define all available commands
cmdmods!(help, load, save, show, primes, table, minimize, check);

pub fn help_cmd(context: &mut CommandContext) -> EmptyQmkResult {
    match COMMANDS.get_command("help") {
        Some(cmd) => cmd.run(context, &[]),
        None => Err(QmkError::UnknownCommand("help".to_owned())),
    }
}

/// Split the list of CLI parameters into separate slices for each successive command.
///
/// Scan the list of parameters to search for known commands and will consider that
/// they denote the start of the next command.
pub struct SelectedArgs {
    all_args: Vec<OsString>,
    next_slice: usize,
}

/// Register and retrieve commands
#[derive(Default)]
pub struct CommandManager {
    services: HashMap<&'static str, Arc<dyn CLICommand>>,
    aliases: HashMap<&'static str, &'static str>,
}

impl CommandManager {
    pub fn register(mut self, action: Arc<dyn CLICommand>) -> Self {
        let name = action.name();
        for alias in action.aliases() {
            self.aliases.insert(*alias, name);
        }
        self.services.insert(name, action);
        self
    }

    fn unroll_alias<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases.get(name).unwrap_or(&name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.services.contains_key(self.unroll_alias(name))
    }

    pub fn get_command(&self, name: &str) -> Option<Arc<dyn CLICommand>> {
        self.services.get(self.unroll_alias(name)).map(Arc::clone)
    }

    pub fn print_commands(&self) {
        println!("Available commands");
        println!("==================");
        let mut names: Vec<&&str> = self.services.keys().collect();
        names.sort();
        for name in names {
            println!("  {:20} {}", name, self.services[*name].about());
        }
    }
}

/// The execution context to allow successive commands to share a truth table
#[derive(Default)]
pub struct CommandContext {
    table: Option<TruthTable>,
    minimized: Option<Minimization>,
}

impl CommandContext {
    pub fn get_table(&self) -> QmkResult<&TruthTable> {
        self.table.as_ref().ok_or(QmkError::MissingTable())
    }

    pub fn set_table(&mut self, table: TruthTable) {
        self.table = Some(table);
        self.minimized = None;
    }

    /// Minimize the current truth table, reusing the previous result if available
    pub fn get_minimization(&mut self) -> QmkResult<&Minimization> {
        if self.minimized.is_none() {
            let result = self.get_table()?.minimize();
            self.minimized = Some(result);
        }
        self.minimized.as_ref().ok_or(QmkError::MissingTable())
    }
}

/// API for individual commands
pub trait CLICommand: Sync + Send {
    fn name(&self) -> &'static str;

    fn about(&self) -> &'static str;

    fn aliases(&self) -> &[&'static str] {
        &[]
    }

    fn run(&self, context: &mut CommandContext, args: &[OsString]) -> EmptyQmkResult;
}

impl SelectedArgs {
    pub fn new() -> Self {
        Self::from_args(env::args_os().collect())
    }

    pub fn from_args(all_args: Vec<OsString>) -> Self {
        SelectedArgs {
            all_args,
            next_slice: 0,
        }
    }

    pub fn has_next(&self) -> bool {
        self.next_slice < self.all_args.len()
    }

    pub fn parse_next(&mut self, context: &mut CommandContext) -> EmptyQmkResult {
        self.run_next_command(context, &COMMANDS)
    }

    fn run_next_command(
        &mut self,
        context: &mut CommandContext,
        manager: &CommandManager,
    ) -> EmptyQmkResult {
        let next_command = self.all_args[self.next_slice].to_string_lossy().into_owned();
        let cmd = match manager.get_command(&next_command) {
            None => return Err(QmkError::UnknownCommand(next_command)),
            Some(c) => c,
        };

        let next_args = self.scan();

        cmd.run(context, next_args)
    }

    pub fn scan(&mut self) -> &[OsString] {
        let start = self.next_slice;

        // Find the end of the next slice!
        let mut end = self.all_args.len();
        let mut i = start + 1;
        while i < end {
            let arg = self.all_args[i].to_string_lossy();
            if VALUE_OPTIONS.contains(&&*arg) {
                i += 2;
                continue;
            }
            if COMMANDS.contains(&arg) {
                end = i;
                break;
            }
            i += 1;
        }

        self.next_slice = end;
        &self.all_args[start..end]
    }
}

impl Default for SelectedArgs {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::command::*;

    fn args(list: &[&str]) -> SelectedArgs {
        SelectedArgs::from_args(list.iter().map(OsString::from).collect())
    }

    #[test]
    fn test_registry() {
        assert!(COMMANDS.contains("minimize"));
        assert!(COMMANDS.contains("sop"));
        assert!(COMMANDS.contains("pi"));
        assert!(!COMMANDS.contains("table.tt"));
        assert_eq!(COMMANDS.get_command("min").unwrap().name(), "minimize");
    }

    #[test]
    fn test_scan() {
        let mut selected = args(&["qmkit", "load", "-e", "0110", "primes", "min", "--latex"]);
        assert_eq!(selected.scan().len(), 1);
        assert_eq!(selected.scan(), &[OsString::from("load"), "-e".into(), "0110".into()]);
        assert_eq!(selected.scan(), &[OsString::from("primes")]);
        assert_eq!(selected.scan().len(), 2);
        assert!(!selected.has_next());
    }

    #[test]
    fn test_scan_option_values() {
        let mut selected = args(&["qmkit", "load", "-F", "mt", "-e", "table", "show", "save", "-F"]);
        selected.scan();
        assert_eq!(selected.scan().len(), 5);
        assert_eq!(selected.scan(), &[OsString::from("show")]);
        assert_eq!(selected.scan(), &[OsString::from("save"), "-F".into()]);
        assert!(!selected.has_next());

        let mut selected = args(&["load", "table", "show"]);
        assert_eq!(selected.scan(), &[OsString::from("load")]);
    }

    #[test]
    fn test_chain() {
        let mut context = CommandContext::default();
        let mut selected = args(&["load", "-e", "1110 1110 0100 1110", "show", "minimize"]);
        while selected.has_next() {
            selected.parse_next(&mut context).unwrap();
        }
        assert_eq!(context.get_table().unwrap().variables(), 4);
        assert_eq!(context.get_minimization().unwrap().literals(), 6);
    }

    #[test]
    fn test_errors() {
        let mut context = CommandContext::default();
        assert!(matches!(
            args(&["minimize"]).parse_next(&mut context),
            Err(QmkError::MissingTable())
        ));
        assert!(matches!(
            args(&["unknown"]).parse_next(&mut context),
            Err(QmkError::UnknownCommand(_))
        ));
    }
}

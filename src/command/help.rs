use std::ffi::OsString;

use structopt::StructOpt;

use crate::command::{CLICommand, CommandContext, COMMANDS};
use crate::helper::error::EmptyQmkResult;
use crate::model::io;

static NAME: &str = "help";
static ABOUT: &str = "List available commands and formats";

#[derive(Debug, StructOpt)]
#[structopt(name=NAME, about=ABOUT)]
struct Config {}

pub struct CLI;
impl CLICommand for CLI {
    fn name(&self) -> &'static str {
        NAME
    }
    fn about(&self) -> &'static str {
        ABOUT
    }

    fn aliases(&self) -> &[&'static str] {
        &["commands"]
    }

    fn run(&self, _context: &mut CommandContext, args: &[OsString]) -> EmptyQmkResult {
        let _config: Config = Config::from_iter(args);
        COMMANDS.print_commands();
        println!();
        println!("Available formats");
        println!("=================");
        for (name, descr) in io::formats() {
            println!("  {:20} {}", name, descr);
        }
        Ok(())
    }
}

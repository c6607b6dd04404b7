use std::ffi::OsString;

use structopt::StructOpt;

use crate::command::{CLICommand, CommandContext};
use crate::helper::error::EmptyQmkResult;

static NAME: &str = "show";
static ABOUT: &str = "Display the current truth table";

#[derive(Debug, StructOpt)]
#[structopt(name=NAME, about=ABOUT)]
struct Config {
    /// Display the value of each line
    #[structopt(short, long)]
    values: bool,
}

pub struct CLI;
impl CLICommand for CLI {
    fn name(&self) -> &'static str {
        NAME
    }
    fn about(&self) -> &'static str {
        ABOUT
    }

    fn aliases(&self) -> &[&'static str] {
        &["info", "print"]
    }

    fn run(&self, context: &mut CommandContext, args: &[OsString]) -> EmptyQmkResult {
        let config: Config = Config::from_iter(args);
        let table = context.get_table()?;

        println!("{}", table);
        if config.values {
            let width = table.variables();
            for (i, v) in table.values().iter().enumerate() {
                println!("{:0w$b} {}", i, *v as u8, w = width);
            }
        }
        println!();
        Ok(())
    }
}

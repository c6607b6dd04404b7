use std::ffi::OsString;

use structopt::StructOpt;

use crate::command::{CLICommand, CommandContext};
use crate::helper::error::EmptyQmkResult;
use crate::model::io;

static NAME: &str = "save";
static ABOUT: &str = "Save the current truth table";

#[derive(Debug, StructOpt)]
#[structopt(name=NAME, about=ABOUT)]
struct Config {
    /// Set the output file
    output: String,

    /// Enforce the output format
    #[structopt(short = "F", long)]
    format: Option<String>,
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
        &["export", "convert"]
    }

    fn run(&self, context: &mut CommandContext, args: &[OsString]) -> EmptyQmkResult {
        let config: Config = Config::from_iter(args);
        let table = context.get_table()?;
        io::save_table(table, &config.output, config.format.as_deref())
    }
}

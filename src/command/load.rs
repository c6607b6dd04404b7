use std::ffi::OsString;

use structopt::StructOpt;

use crate::command::{CLICommand, CommandContext};
use crate::helper::error::{generic_error, EmptyQmkResult};
use crate::model::io;

static NAME: &str = "load";
static ABOUT: &str = "Load a truth table from a file";

#[derive(Debug, StructOpt)]
#[structopt(name=NAME, about=ABOUT)]
struct Config {
    /// Enforce the input format
    #[structopt(short = "F", long)]
    format: Option<String>,

    /// Read the table from the command line instead of a file
    #[structopt(short, long)]
    expr: Option<String>,

    /// Set the input file
    filename: Option<String>,
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
        &["open"]
    }

    fn run(&self, context: &mut CommandContext, args: &[OsString]) -> EmptyQmkResult {
        // Start by parsing arguments to handle help without any context
        let config: Config = Config::from_iter(args);
        let format = config.format.as_deref();

        let table = match (&config.expr, &config.filename) {
            (Some(text), _) => io::parse_table(text, format)?,
            (None, Some(filename)) => io::load_table(filename, format)?,
            (None, None) => return Err(generic_error("No input file".to_owned())),
        };

        context.set_table(table);
        Ok(())
    }
}

use std::ffi::OsString;

use structopt::StructOpt;

use crate::command::{CLICommand, CommandContext};
use crate::helper::error::EmptyQmkResult;

static NAME: &str = "table";
static ABOUT: &str = "Display the coverage table of the prime implicants";

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
        &["chart"]
    }

    fn run(&self, context: &mut CommandContext, args: &[OsString]) -> EmptyQmkResult {
        let _config: Config = Config::from_iter(args);
        let result = context.get_minimization()?;
        print!("{}", result.table);
        println!("(*: essential)");
        Ok(())
    }
}

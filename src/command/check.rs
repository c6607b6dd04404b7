use std::ffi::OsString;

use structopt::StructOpt;

use crate::command::{CLICommand, CommandContext};
use crate::helper::error::{generic_error, EmptyQmkResult};

static NAME: &str = "check";
static ABOUT: &str = "Check that the minimal cover includes all minterms";

#[derive(Debug, StructOpt)]
#[structopt(name=NAME, about=ABOUT)]
struct Config {
    /// Fail if a minterm is not covered
    #[structopt(short, long)]
    strict: bool,
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
        &["coverage"]
    }

    fn run(&self, context: &mut CommandContext, args: &[OsString]) -> EmptyQmkResult {
        let config: Config = Config::from_iter(args);
        let coverage = context.get_minimization()?.coverage();
        println!("{}", coverage);

        if config.strict && !coverage.is_complete() {
            return Err(generic_error(format!(
                "{} minterms are not covered",
                coverage.total - coverage.covered
            )));
        }
        Ok(())
    }
}

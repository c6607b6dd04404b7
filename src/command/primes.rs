use std::ffi::OsString;

use structopt::StructOpt;

use crate::command::{CLICommand, CommandContext};
use crate::func::sop::SumOfProducts;
use crate::helper::error::EmptyQmkResult;

static NAME: &str = "primes";
static ABOUT: &str = "Compute the prime implicants of the current function";

#[derive(Debug, StructOpt)]
#[structopt(name=NAME, about=ABOUT)]
struct Config {
    /// Show prime implicants as patterns (1, 0 or - for each variable)
    #[structopt(short, long)]
    pattern: bool,
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
        &["pi", "implicants"]
    }

    fn run(&self, context: &mut CommandContext, args: &[OsString]) -> EmptyQmkResult {
        let config: Config = Config::from_iter(args);

        let table = context.get_table()?.clone();
        let result = context.get_minimization()?;

        println!("PI ({}):", result.primes.len());
        for (i, p) in result.primes.iter().enumerate() {
            let mark = if result.essentials.contains(i) { "*" } else { " " };
            if config.pattern {
                println!("{} {}", mark, p);
            } else {
                let term = std::slice::from_ref(p);
                println!("{} {}", mark, SumOfProducts::new(term).named(&table));
            }
        }
        Ok(())
    }
}

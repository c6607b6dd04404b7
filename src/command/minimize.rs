use std::ffi::OsString;

use structopt::StructOpt;

use crate::command::{CLICommand, CommandContext};
use crate::func::sop::{latex_document, SopStyle, SumOfProducts};
use crate::func::term::Term;
use crate::func::Minimization;
use crate::helper::error::EmptyQmkResult;
use crate::model::TruthTable;

static NAME: &str = "minimize";
static ABOUT: &str = "Compute a minimal sum of products for the current function";

#[derive(Debug, StructOpt)]
#[structopt(name=NAME, about=ABOUT)]
struct Config {
    /// Use the LaTeX notation
    #[structopt(short, long)]
    latex: bool,

    /// Wrap the LaTeX formula in a full document
    #[structopt(short, long)]
    document: bool,

    /// Show the number of literals
    #[structopt(short, long)]
    count: bool,

    /// Show the canonical sum of all minterms instead of the minimal one
    #[structopt(long)]
    sdnf: bool,
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
        &["min", "sop"]
    }

    fn run(&self, context: &mut CommandContext, args: &[OsString]) -> EmptyQmkResult {
        let config: Config = Config::from_iter(args);

        let table = context.get_table()?.clone();
        let result = context.get_minimization()?;
        print!("{}", output(&config, result, &table));
        Ok(())
    }
}

fn output(config: &Config, result: &Minimization, table: &TruthTable) -> String {
    let terms = if config.sdnf {
        &result.minterms
    } else {
        &result.cover
    };
    let style = if config.latex || config.document {
        SopStyle::Latex
    } else {
        SopStyle::Plain
    };
    let sop = SumOfProducts::new(terms).named(table).style(style);

    let mut out = if config.document {
        let rendered = match constant(terms) {
            Some(c) => vec![c.to_owned()],
            None => sop.term_strings(),
        };
        latex_document(&sop.variable_names(table.variables()), &rendered)
    } else {
        let formula = constant(terms).map_or_else(|| sop.to_string(), str::to_owned);
        format!("{}\n", formula)
    };
    if config.count {
        let literals: usize = terms.iter().map(Term::literals).sum();
        out.push_str(&format!("{} terms, {} literals\n", terms.len(), literals));
    }
    out
}

/// Constant functions do not have any literal and are displayed as 0 or 1
fn constant(terms: &[Term]) -> Option<&'static str> {
    match terms {
        [] => Some("0"),
        [t] if t.is_unrestricted() => Some("1"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crate::command::minimize::*;

    fn config(args: &[&str]) -> Config {
        Config::from_iter(std::iter::once("minimize").chain(args.iter().copied()))
    }

    #[test]
    fn test_constant() {
        assert_eq!(constant(&[]), Some("0"));
        assert_eq!(constant(&[Term::new(0)]), Some("1"));
        assert_eq!(constant(&[Term::new(2)]), Some("1"));
        assert_eq!(constant(&[Term::from_str("1-")]), None);
    }

    #[test]
    fn test_output() {
        let table = TruthTable::from_minterms(2, &[0, 1, 3]).unwrap();
        let result = table.minimize();
        assert_eq!(output(&config(&[]), &result, &table), "!x1 + x0\n");
        assert_eq!(
            output(&config(&["--count"]), &result, &table),
            "!x1 + x0\n2 terms, 2 literals\n"
        );
        assert_eq!(
            output(&config(&["--latex"]), &result, &table),
            "\\overline{x_{1}}+x_{0}\n"
        );

        let empty = TruthTable::from_minterms(2, &[]).unwrap();
        assert_eq!(output(&config(&[]), &empty.minimize(), &empty), "0\n");
        let full = TruthTable::from_minterms(1, &[0, 1]).unwrap();
        assert_eq!(output(&config(&["-l"]), &full.minimize(), &full), "1\n");
    }

    #[test]
    fn test_sdnf() {
        let table = TruthTable::from_minterms(2, &[0, 1, 3]).unwrap();
        let result = table.minimize();
        assert_eq!(
            output(&config(&["--sdnf"]), &result, &table),
            "!x1!x0 + !x1x0 + x1x0\n"
        );

        let doc = output(&config(&["--sdnf", "--document"]), &result, &table);
        assert!(doc.contains(
            "f(x_{0}, x_{1}) =\n\\\\\n\\overline{x_{1}}\\overline{x_{0}}+\\overline{x_{1}}x_{0}+x_{1}x_{0}\n"
        ));

        // Long sums are split over several rows
        let table = TruthTable::from_minterms(3, &[0, 1, 2, 3, 4, 5, 6]).unwrap();
        let doc = output(&config(&["--sdnf", "-d"]), &table.minimize(), &table);
        assert_eq!(doc.matches("\n+").count(), 1);
    }
}

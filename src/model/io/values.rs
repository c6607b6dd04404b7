use std::io::Write;

use pest::iterators::Pair;
use pest::Parser;

use crate::helper::error::{EmptyQmkResult, QmkResult};
use crate::model::io::{Format, ParsingFormat, SavingFormat};
use crate::model::TruthTable;

pub static NAME: &str = "tt";
pub static DESCRIPTION: &str = "Values of the function for each line of the truth table";

/// Number of values written on each line of saved files
const LINE_WIDTH: usize = 8;

#[derive(Parser)]
#[grammar_inline = r####"
file   =  { SOI ~ NEWLINE* ~ (names ~ NEWLINE*)? ~ values ~ EOI }
names  =  { ^"names" ~ ":" ~ name ~ ("," ~ name)* }
name   = @{ (ASCII_ALPHA | "_") ~ (ASCII_ALPHANUMERIC | "_")* }
values =  { (value | "," | NEWLINE)* }
value  =  { "0" | "1" }

WHITESPACE = _{ " " | "\t" }
COMMENT = _{ "#" ~ (!NEWLINE ~ ANY)* }
"####]
struct ValuesParser;

#[derive(Default)]
pub struct ValuesFormat;

impl Format for ValuesFormat {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        DESCRIPTION
    }
}

pub fn load_names(pair: Pair<Rule>) -> Vec<String> {
    pair.into_inner().map(|n| n.as_str().to_owned()).collect()
}

impl ParsingFormat for ValuesFormat {
    fn parse_table(&self, text: &str) -> QmkResult<TruthTable> {
        let mut names = vec![];
        let mut values = vec![];
        let ptree = ValuesParser::parse(Rule::file, text)?;
        for record in ptree.flatten() {
            match record.as_rule() {
                Rule::names => names = load_names(record),
                Rule::value => values.push(record.as_str() == "1"),
                _ => (),
            }
        }

        TruthTable::new(values)?.with_names(names)
    }
}

impl SavingFormat for ValuesFormat {
    fn write_table(&self, table: &TruthTable, out: &mut dyn Write) -> EmptyQmkResult {
        if !table.names().is_empty() {
            writeln!(out, "names: {}", table.names().join(", "))?;
        }
        for line in table.values().chunks(LINE_WIDTH) {
            let line: Vec<&str> = line.iter().map(|v| if *v { "1" } else { "0" }).collect();
            writeln!(out, "{}", line.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::model::io::values::*;

    #[test]
    fn test_parse() {
        let f = ValuesFormat::default();
        let t = f
            .parse_table("# sample\n1,1,1,0, 1,1,1,0\n0,1,0,0, 1,1,1,0 # last line\n")
            .unwrap();
        assert_eq!(t.variables(), 4);
        assert_eq!(t.minterm_indices(), vec![0, 1, 2, 4, 5, 6, 9, 12, 13, 14]);
        assert!(t.names().is_empty());

        let t = f.parse_table("names: a, b\n0111").unwrap();
        assert_eq!(t.names(), &["a".to_owned(), "b".to_owned()]);
        assert_eq!(t.minterm_indices(), vec![1, 2, 3]);

        let t = f.parse_table("1").unwrap();
        assert_eq!(t.variables(), 0);
    }

    #[test]
    fn test_invalid() {
        let f = ValuesFormat::default();
        assert!(f.parse_table("1, 0, 2").is_err());
        assert!(f.parse_table("1, 0, 1").is_err());
        assert!(f.parse_table("names: a\n0110").is_err());
        assert!(f.parse_table("").is_err());
    }

    #[test]
    fn test_write() {
        let f = ValuesFormat::default();
        let t = TruthTable::from_minterms(4, &[0, 9, 15])
            .unwrap()
            .with_names(vec!["a".into(), "b".into(), "c".into(), "d".into()])
            .unwrap();
        let mut out: Vec<u8> = vec![];
        f.write_table(&t, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "names: a, b, c, d\n1, 0, 0, 0, 0, 0, 0, 0\n0, 1, 0, 0, 0, 0, 0, 1\n"
        );
        assert_eq!(f.parse_table(&text).unwrap(), t);
    }
}

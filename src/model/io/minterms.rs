use std::io::Write;

use pest::Parser;

use crate::helper::error::{generic_error, EmptyQmkResult, QmkResult};
use crate::model::io::{Format, ParsingFormat, SavingFormat};
use crate::model::TruthTable;

pub static NAME: &str = "mt";
pub static DESCRIPTION: &str = "Number of variables followed by the list of minterm indices";

#[derive(Parser)]
#[grammar_inline = r####"
file     =  { SOI ~ NEWLINE* ~ vars ~ NEWLINE* ~ (names ~ NEWLINE*)? ~ minterms ~ EOI }
vars     =  { ^"vars" ~ ":" ~ number }
names    =  { ^"names" ~ ":" ~ name ~ ("," ~ name)* }
name     = @{ (ASCII_ALPHA | "_") ~ (ASCII_ALPHANUMERIC | "_")* }
minterms =  { (number | "," | NEWLINE)* }
number   = @{ ASCII_DIGIT+ }

WHITESPACE = _{ " " | "\t" }
COMMENT = _{ "#" ~ (!NEWLINE ~ ANY)* }
"####]
struct MintermsParser;

#[derive(Default)]
pub struct MintermsFormat;

impl Format for MintermsFormat {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        DESCRIPTION
    }
}

impl ParsingFormat for MintermsFormat {
    fn parse_table(&self, text: &str) -> QmkResult<TruthTable> {
        let mut variables = None;
        let mut names = vec![];
        let mut indices = vec![];
        let ptree = MintermsParser::parse(Rule::file, text)?;
        let ptree = ptree
            .into_iter()
            .next()
            .ok_or_else(|| generic_error("Empty minterm list".to_owned()))?;
        for record in ptree.into_inner() {
            match record.as_rule() {
                Rule::vars => {
                    for n in record.into_inner() {
                        variables = Some(n.as_str().parse::<usize>()?);
                    }
                }
                Rule::names => {
                    names = record.into_inner().map(|n| n.as_str().to_owned()).collect();
                }
                Rule::minterms => {
                    for n in record.into_inner() {
                        indices.push(n.as_str().parse::<usize>()?);
                    }
                }
                _ => (),
            }
        }

        let variables =
            variables.ok_or_else(|| generic_error("Missing number of variables".to_owned()))?;
        TruthTable::from_minterms(variables, &indices)?.with_names(names)
    }
}

impl SavingFormat for MintermsFormat {
    fn write_table(&self, table: &TruthTable, out: &mut dyn Write) -> EmptyQmkResult {
        writeln!(out, "vars: {}", table.variables())?;
        if !table.names().is_empty() {
            writeln!(out, "names: {}", table.names().join(", "))?;
        }
        let indices: Vec<String> = table
            .minterm_indices()
            .iter()
            .map(|i| i.to_string())
            .collect();
        writeln!(out, "{}", indices.join(", "))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::helper::error::{QmkError, TableError};
    use crate::model::io::minterms::*;

    #[test]
    fn test_parse() {
        let f = MintermsFormat::default();
        let t = f
            .parse_table("# sample\nvars: 4\n0, 1, 2, 4, 5, 6\n9, 12, 13, 14\n")
            .unwrap();
        assert_eq!(t.variables(), 4);
        assert_eq!(t.minterm_indices(), vec![0, 1, 2, 4, 5, 6, 9, 12, 13, 14]);

        let t = f.parse_table("VARS: 2\nnames: a, b\n3").unwrap();
        assert_eq!(t.names().len(), 2);
        assert_eq!(t.minterm_indices(), vec![3]);

        let t = f.parse_table("vars: 3").unwrap();
        assert!(t.minterm_indices().is_empty());
    }

    #[test]
    fn test_invalid() {
        let f = MintermsFormat::default();
        assert!(matches!(
            f.parse_table("vars: 2\n0, 4"),
            Err(QmkError::Table(TableError::MintermOutOfRange { .. }))
        ));
        assert!(matches!(f.parse_table("0, 1"), Err(QmkError::Parse(_))));
        assert!(f.parse_table("vars: 99\n0").is_err());
    }

    #[test]
    fn test_write() {
        let f = MintermsFormat::default();
        let t = TruthTable::from_minterms(3, &[1, 3, 6]).unwrap();
        let mut out: Vec<u8> = vec![];
        f.write_table(&t, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "vars: 3\n1, 3, 6\n");
        assert_eq!(f.parse_table(&text).unwrap(), t);
    }
}

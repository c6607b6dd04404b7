//! Load and save truth tables in text formats

use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::helper::error::{EmptyQmkResult, FormatError, QmkResult};
use crate::model::TruthTable;

mod minterms;
mod values;

/// A Format may provide import and export filters
pub trait Format: TrySaving + TryParsing {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;
}

/// Denotes an object which may be able to save a truth table, or not.
/// This trait is automatically derived for structs implementing the SavingFormat trait.
pub trait TrySaving {
    fn as_saver(&self) -> Option<&dyn SavingFormat> {
        None
    }
}

/// Denotes an object which may be able to load a truth table, or not.
/// This trait is automatically derived for structs implementing the ParsingFormat trait.
pub trait TryParsing {
    fn as_parser(&self) -> Option<&dyn ParsingFormat> {
        None
    }
}

impl<T: SavingFormat> TrySaving for T {
    fn as_saver(&self) -> Option<&dyn SavingFormat> {
        Some(self)
    }
}

impl<T: ParsingFormat> TryParsing for T {
    fn as_parser(&self) -> Option<&dyn ParsingFormat> {
        Some(self)
    }
}

/// Trait providing the import filter for Formats.
pub trait ParsingFormat {
    fn parse_file(&self, filename: &str) -> QmkResult<TruthTable> {
        let unparsed_file = fs::read_to_string(filename)?;
        self.parse_table(&unparsed_file)
    }

    fn parse_table(&self, text: &str) -> QmkResult<TruthTable>;
}

/// Trait providing the export filter for Formats.
pub trait SavingFormat {
    fn save_file(&self, table: &TruthTable, filename: &str) -> EmptyQmkResult {
        let f = File::create(filename)?;
        let mut out = BufWriter::new(f);
        self.write_table(table, &mut out)?;
        out.flush()?;
        Ok(())
    }

    fn write_table(&self, table: &TruthTable, out: &mut dyn Write) -> EmptyQmkResult;
}

/// Names and extensions of the available formats
pub fn formats() -> Vec<(&'static str, &'static str)> {
    vec![
        (values::NAME, values::DESCRIPTION),
        (minterms::NAME, minterms::DESCRIPTION),
    ]
}

pub fn get_format(fmt: &str) -> QmkResult<Box<dyn Format>> {
    match fmt.to_lowercase().trim() {
        "tt" | "txt" | "table" => Ok(Box::new(values::ValuesFormat::default())),
        "mt" | "minterms" => Ok(Box::new(minterms::MintermsFormat::default())),
        _ => Err(FormatError::Unknown(fmt.to_owned()).into()),
    }
}

fn guess_format(filename: &str) -> QmkResult<Box<dyn Format>> {
    let ext = Path::new(filename)
        .extension()
        .and_then(OsStr::to_str)
        .ok_or_else(|| FormatError::Guess(filename.to_owned()))?;
    get_format(ext)
}

fn select_format(filename: &str, fmt: Option<&str>) -> QmkResult<Box<dyn Format>> {
    match fmt {
        None => guess_format(filename),
        Some(s) => get_format(s),
    }
}

pub fn load_table(filename: &str, fmt: Option<&str>) -> QmkResult<TruthTable> {
    let f = select_format(filename, fmt)?;
    let parser = f.as_parser().ok_or_else(|| FormatError::NoParser(f.name()))?;
    let table = parser.parse_file(filename)?;
    info!(
        "Loaded \"{}\" ({}): {} variables",
        filename,
        f.name(),
        table.variables()
    );
    Ok(table)
}

/// Parse a truth table from a string, using the table of values format by default
pub fn parse_table(text: &str, fmt: Option<&str>) -> QmkResult<TruthTable> {
    let f = get_format(fmt.unwrap_or(values::NAME))?;
    let parser = f.as_parser().ok_or_else(|| FormatError::NoParser(f.name()))?;
    parser.parse_table(text)
}

pub fn save_table(table: &TruthTable, filename: &str, fmt: Option<&str>) -> EmptyQmkResult {
    let f = select_format(filename, fmt)?;
    let saver = f.as_saver().ok_or_else(|| FormatError::NoSaver(f.name()))?;
    saver.save_file(table, filename)?;
    info!("Saved \"{}\" ({})", filename, f.name());
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::helper::error::{FormatError, QmkError};
    use crate::model::io::*;

    #[test]
    fn test_get_format() {
        assert_eq!(get_format("TT").unwrap().name(), "tt");
        assert_eq!(get_format("minterms").unwrap().name(), "mt");
        assert!(matches!(
            get_format("sbml"),
            Err(QmkError::Format(FormatError::Unknown(_)))
        ));
        assert_eq!(guess_format("dir/f.mt").unwrap().name(), "mt");
        assert!(matches!(
            guess_format("noextension"),
            Err(QmkError::Format(FormatError::Guess(_)))
        ));
    }

    #[test]
    fn test_parse_inline() {
        let t = parse_table("1110 1110 0100 1110", None).unwrap();
        assert_eq!(t.variables(), 4);
        assert_eq!(t.minterm_indices(), vec![0, 1, 2, 4, 5, 6, 9, 12, 13, 14]);

        let t = parse_table("vars: 2\n1, 2", Some("mt")).unwrap();
        assert_eq!(t.minterm_indices(), vec![1, 2]);
    }
}

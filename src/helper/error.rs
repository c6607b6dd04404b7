//! Simple error types and helpers for consistent error handling.
//!
//! It uses the thiserror crate to reduce boilerplate.
use std::fmt;
use std::io;
use std::num;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QmkError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    #[error("Parsing error: {0}")]
    Parse(#[from] ParseError),

    #[error("Invalid truth table: {0}")]
    Table(#[from] TableError),

    #[error("No truth table was loaded")]
    MissingTable(),

    #[error("Unknown command \"{0}\"")]
    UnknownCommand(String),

    #[error(transparent)]
    Generic(#[from] GenericError),
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Integer parsing error: {0}")]
    ParseInt(#[from] num::ParseIntError),

    #[error("Error parsing text document: {0}")]
    ParseText(#[from] ParseTxtError),
}

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("No matching format for \"{0}\"")]
    Unknown(String),

    #[error("Could not guess the format of \"{0}\"")]
    Guess(String),

    #[error("No parser for the {0} format")]
    NoParser(&'static str),

    #[error("No exporter for the {0} format")]
    NoSaver(&'static str),
}

#[derive(Error, Debug)]
pub enum TableError {
    #[error("the number of lines ({0}) is not a power of two")]
    InvalidLength(usize),

    #[error("{0} variables exceed the supported maximum of {1}")]
    TooManyVariables(usize, usize),

    #[error("minterm {index} is out of range for {variables} variables")]
    MintermOutOfRange { index: usize, variables: usize },

    #[error("{names} names given for {variables} variables")]
    NameCount { names: usize, variables: usize },
}

#[derive(Error, Debug)]
pub struct GenericError {
    s: String,
}

/// Parser errors are kept as text to avoid carrying the rules of each grammar
#[derive(Error, Debug)]
pub struct ParseTxtError {
    message: String,
}

impl GenericError {
    pub fn new(s: String) -> Self {
        GenericError { s }
    }
}

impl ParseTxtError {
    pub fn new(message: String) -> Self {
        ParseTxtError { message }
    }
}

impl fmt::Display for GenericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.s)
    }
}

impl fmt::Display for ParseTxtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

pub type QmkResult<T> = Result<T, QmkError>;

pub type EmptyQmkResult = QmkResult<()>;

impl<R: pest::RuleType> From<pest::error::Error<R>> for QmkError {
    fn from(e: pest::error::Error<R>) -> Self {
        let e = ParseTxtError::new(e.to_string());
        let e: ParseError = e.into();
        e.into()
    }
}

impl From<num::ParseIntError> for QmkError {
    fn from(e: num::ParseIntError) -> Self {
        let e: ParseError = e.into();
        e.into()
    }
}

pub fn generic_error(s: String) -> QmkError {
    QmkError::Generic(GenericError::new(s))
}

#[cfg(test)]
mod tests {
    use crate::helper::error::*;

    #[test]
    fn test_messages() {
        let e: QmkError = TableError::InvalidLength(3).into();
        assert_eq!(
            e.to_string(),
            "Invalid truth table: the number of lines (3) is not a power of two"
        );

        let e: QmkError = "x".parse::<usize>().unwrap_err().into();
        assert!(matches!(e, QmkError::Parse(ParseError::ParseInt(_))));

        let e = generic_error("something went wrong".to_owned());
        assert_eq!(e.to_string(), "something went wrong");
    }
}

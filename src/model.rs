//! Truth tables: validated input of the minimization.
//!
//! The core functions of the [func](crate::func) module assume valid inputs and fail early
//! otherwise. Truth tables loaded from files are checked here to report problems as errors.

use std::fmt;

use crate::func::minterms::generate_minterms;
use crate::func::term::Term;
use crate::func::variables::VariableNamer;
use crate::func::Minimization;
use crate::helper::error::{QmkResult, TableError};

pub mod io;

/// Largest number of variables accepted in a truth table
pub const MAX_VARIABLES: usize = 20;

/// The values of a Boolean function for all assignments of its variables.
///
/// Line `i` corresponds to the assignment where variable `k` takes the value of bit `k` of `i`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TruthTable {
    values: Vec<bool>,
    variables: usize,
    names: Vec<String>,
}

impl TruthTable {
    pub fn new(values: Vec<bool>) -> QmkResult<TruthTable> {
        let len = values.len();
        if !len.is_power_of_two() {
            return Err(TableError::InvalidLength(len).into());
        }
        let variables = len.trailing_zeros() as usize;
        if variables > MAX_VARIABLES {
            return Err(TableError::TooManyVariables(variables, MAX_VARIABLES).into());
        }
        Ok(TruthTable {
            values,
            variables,
            names: vec![],
        })
    }

    /// Build a truth table which is true for the listed lines only
    pub fn from_minterms(variables: usize, indices: &[usize]) -> QmkResult<TruthTable> {
        if variables > MAX_VARIABLES {
            return Err(TableError::TooManyVariables(variables, MAX_VARIABLES).into());
        }
        let mut values = vec![false; 1 << variables];
        for &index in indices {
            match values.get_mut(index) {
                Some(v) => *v = true,
                None => return Err(TableError::MintermOutOfRange { index, variables }.into()),
            }
        }
        TruthTable::new(values)
    }

    /// Assign names to the variables, starting from variable 0
    pub fn with_names(mut self, names: Vec<String>) -> QmkResult<TruthTable> {
        if !names.is_empty() && names.len() != self.variables {
            return Err(TableError::NameCount {
                names: names.len(),
                variables: self.variables,
            }
            .into());
        }
        self.names = names;
        Ok(self)
    }

    pub fn variables(&self) -> usize {
        self.variables
    }

    pub fn values(&self) -> &[bool] {
        &self.values
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Indices of the lines where the function is true
    pub fn minterm_indices(&self) -> Vec<usize> {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, v)| **v)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn minterms(&self) -> Vec<Term> {
        generate_minterms(&self.values)
    }

    pub fn minimize(&self) -> Minimization {
        Minimization::run(&self.values)
    }
}

impl VariableNamer for TruthTable {
    fn format_name(&self, f: &mut dyn fmt::Write, uid: usize) -> fmt::Result {
        self.names.format_name(f, uid)
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} variables", self.variables)?;
        if !self.names.is_empty() {
            write!(f, " ({})", self.names.join(", "))?;
        }
        writeln!(f)?;
        let indices: Vec<String> = self.minterm_indices().iter().map(|i| i.to_string()).collect();
        write!(f, "minterms: {}", indices.join(", "))
    }
}

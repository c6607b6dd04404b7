//! Extract the minterms of a function from its truth table

use crate::func::term::Term;

/// Number of variables of a truth table with the given number of lines.
///
/// Panics if the length is not a power of two.
pub fn variable_count(len: usize) -> usize {
    if !len.is_power_of_two() {
        panic!("The length of a truth table should be a power of two, got {}", len);
    }
    len.trailing_zeros() as usize
}

/// Build one minterm for each true line of a truth table.
///
/// Line `i` of the table corresponds to the assignment where variable `k` takes the value
/// of bit `k` of `i`. Minterms are returned in the order of the table.
pub fn generate_minterms(values: &[bool]) -> Vec<Term> {
    let len = variable_count(values.len());
    values
        .iter()
        .enumerate()
        .filter(|(_, v)| **v)
        .map(|(idx, _)| Term::from_index(idx, len))
        .collect()
}

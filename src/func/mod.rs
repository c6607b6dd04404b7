//! Minimize Boolean functions with the Quine-McCluskey method
//!
//! The minimization proceeds in successive steps, each one provided by a submodule:
//! * [minterms]: extract the minterms from a truth table
//! * [primes]: merge terms into prime implicants
//! * [table]: relate prime implicants to minterms and identify essential implicants
//! * [cover]: search for a cover of all minterms with a minimal number of literals
//!
//! The [Minimization] struct runs all steps and retains the intermediate results.

pub mod cover;
pub mod minterms;
pub mod primes;
pub mod sop;
pub mod table;
pub mod term;
pub mod variables;

use std::fmt;

use bit_set::BitSet;

use self::cover::find_minimal_cover;
use self::minterms::generate_minterms;
use self::primes::reduce_prime_implicants;
use self::table::CoverageTable;
use self::term::Term;

/// Result of all steps of the minimization of a single function
pub struct Minimization {
    pub minterms: Vec<Term>,
    pub primes: Vec<Term>,
    pub table: CoverageTable,
    pub essentials: BitSet,
    pub cover: Vec<Term>,
}

/// Check that each minterm is covered by the minimized function
pub struct Coverage {
    pub marks: Vec<bool>,
    pub covered: usize,
    pub total: usize,
}

impl Minimization {
    /// Run all minimization steps on a truth table.
    ///
    /// Panics if the length of the table is not a power of two.
    pub fn run(values: &[bool]) -> Minimization {
        Self::from_minterms(generate_minterms(values))
    }

    /// Run the minimization steps starting from a list of distinct minterms of the same length
    pub fn from_minterms(minterms: Vec<Term>) -> Minimization {
        let primes = reduce_prime_implicants(&minterms);
        let mut table = CoverageTable::new(&primes, &minterms);
        let essentials = table.find_essentials();
        let cover = find_minimal_cover(&table, &essentials);
        Minimization {
            minterms,
            primes,
            table,
            essentials,
            cover,
        }
    }

    /// Number of literals in the selected cover
    pub fn literals(&self) -> usize {
        self.cover.iter().map(|t| t.literals()).sum()
    }

    /// Evaluate the coverage of the source minterms by the selected cover
    pub fn coverage(&self) -> Coverage {
        let marks: Vec<bool> = self
            .minterms
            .iter()
            .map(|m| self.cover.iter().any(|t| t.covers(m)))
            .collect();
        let covered = marks.iter().filter(|c| **c).count();
        Coverage {
            total: marks.len(),
            covered,
            marks,
        }
    }
}

impl Coverage {
    pub fn is_complete(&self) -> bool {
        self.covered == self.total
    }

    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        self.covered as f64 / self.total as f64 * 100.0
    }
}

impl fmt::Display for Coverage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for m in &self.marks {
            write!(f, "{}", if *m { "." } else { "E" })?;
        }
        writeln!(f)?;
        write!(f, "total coverage: {:3.4}%", self.percent())
    }
}

/// Compute a minimal sum of products for the function defined by a truth table
pub fn minimize(values: &[bool]) -> Vec<Term> {
    Minimization::run(values).cover
}

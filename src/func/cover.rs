//! Exact search of a minimal set of prime implicants covering all minterms

use bit_set::BitSet;
use log::{debug, trace, warn};

use crate::func::table::CoverageTable;
use crate::func::term::Term;

/// Number of non-essential rows above which the search may take a long time
pub const LARGE_SEARCH: usize = 24;

/// A set of redundant rows along with the number of literals in the remaining rows
struct Candidate {
    excluded: BitSet,
    literals: usize,
}

/// Explore the removal of additional rows after the already excluded ones.
///
/// Each branch removes one more row with an index larger than `from` and works on its own copy
/// of the excluded set. Branches which would leave a column uncovered are abandoned.
/// The first candidate with the smallest number of literals is returned.
fn search(
    table: &CoverageTable,
    essentials: &BitSet,
    excluded: &BitSet,
    from: usize,
    visited: &mut usize,
) -> Candidate {
    *visited += 1;
    let mut best = Candidate {
        excluded: excluded.clone(),
        literals: table.literals_without(excluded),
    };

    for i in from..table.rows().len() {
        if essentials.contains(i) || excluded.contains(i) {
            continue;
        }

        let mut next = excluded.clone();
        next.insert(i);
        if !table.covers_all_without(&next) {
            trace!("row {} is required after removing {:?}", i, excluded);
            continue;
        }

        let candidate = search(table, essentials, &next, i + 1, visited);
        if candidate.literals < best.literals {
            best = candidate;
        }
    }
    best
}

/// Number of rows which may be left out of the cover
pub fn optional_rows(table: &CoverageTable, essentials: &BitSet) -> usize {
    (0..table.rows().len())
        .filter(|i| !essentials.contains(*i))
        .count()
}

/// Select a subset of the rows of the coverage table which covers all columns with
/// the smallest number of literals.
///
/// Essential rows are always selected. Among several covers of the same size, the first
/// one found is returned.
pub fn find_minimal_cover(table: &CoverageTable, essentials: &BitSet) -> Vec<Term> {
    let excluded = BitSet::new();
    if !table.covers_all_without(&excluded) {
        panic!("The prime implicants do not cover all the minterms");
    }

    let optional = optional_rows(table, essentials);
    if optional > LARGE_SEARCH {
        warn!(
            "Exhaustive search over {} non-essential prime implicants, this may take a long time",
            optional
        );
    }

    let mut visited = 0;
    let best = search(table, essentials, &excluded, 0, &mut visited);
    debug!(
        "Minimal cover: {} literals, {} redundant rows, {} explored subsets",
        best.literals,
        best.excluded.len(),
        visited
    );
    table.terms_without(&best.excluded)
}

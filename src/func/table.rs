//! Coverage table relating prime implicants (rows) to the minterms they cover (columns)

use std::fmt;

use bit_set::BitSet;
use log::debug;

use crate::func::term::Term;

/// A row or column of the coverage table
#[derive(Clone, Debug)]
pub struct Line {
    pub term: Term,
    pub essential: bool,
}

impl Line {
    fn new(term: Term) -> Line {
        Line {
            term,
            essential: false,
        }
    }
}

/// Coverage table: each row carries a prime implicant, each column a minterm.
/// The marks of a row are the indices of the columns covered by its implicant.
#[derive(Clone, Debug)]
pub struct CoverageTable {
    rows: Vec<Line>,
    columns: Vec<Line>,
    marks: Vec<BitSet>,
}

impl CoverageTable {
    pub fn new(primes: &[Term], minterms: &[Term]) -> CoverageTable {
        let rows: Vec<Line> = primes.iter().cloned().map(Line::new).collect();
        let columns: Vec<Line> = minterms.iter().cloned().map(Line::new).collect();
        let marks: Vec<BitSet> = rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .enumerate()
                    .filter(|(_, col)| row.term.covers(&col.term))
                    .map(|(j, _)| j)
                    .collect::<BitSet>()
            })
            .collect();

        CoverageTable {
            rows,
            columns,
            marks,
        }
    }

    pub fn rows(&self) -> &[Line] {
        &self.rows
    }

    pub fn columns(&self) -> &[Line] {
        &self.columns
    }

    /// Test if a row covers a column
    pub fn is_marked(&self, row: usize, col: usize) -> bool {
        self.marks[row].contains(col)
    }

    /// Columns covered by a row
    pub fn marks(&self, row: usize) -> &BitSet {
        &self.marks[row]
    }

    /// Tag the essential rows and columns.
    ///
    /// A column covered by a single row is essential, as is this row: the minterm of
    /// the column can not be covered by any other prime implicant.
    /// Returns the indices of essential rows.
    pub fn find_essentials(&mut self) -> BitSet {
        for (i, m) in self.marks.iter().enumerate() {
            debug_assert!(
                !m.is_empty() || self.columns.is_empty(),
                "Row {} ({}) does not cover any column",
                i,
                self.rows[i].term
            );
        }

        let mut essentials = BitSet::new();
        for j in 0..self.columns.len() {
            let mut covering = self.marks.iter().enumerate().filter(|(_, m)| m.contains(j));
            if let (Some((i, _)), None) = (covering.next(), covering.next()) {
                self.columns[j].essential = true;
                self.rows[i].essential = true;
                essentials.insert(i);
            }
        }

        debug!(
            "Coverage table: {} rows, {} columns, {} essential rows",
            self.rows.len(),
            self.columns.len(),
            essentials.len()
        );
        essentials
    }

    /// Test if the rows which are not excluded still cover all columns.
    /// If so, the excluded rows are redundant.
    pub fn covers_all_without(&self, excluded: &BitSet) -> bool {
        let mut covered = BitSet::with_capacity(self.columns.len());
        for (i, m) in self.marks.iter().enumerate() {
            if !excluded.contains(i) {
                covered.union_with(m);
            }
        }
        covered.len() == self.columns.len()
    }

    /// Count the literals of the implicants in the rows which are not excluded
    pub fn literals_without(&self, excluded: &BitSet) -> usize {
        self.rows
            .iter()
            .enumerate()
            .filter(|(i, _)| !excluded.contains(*i))
            .map(|(_, r)| r.term.literals())
            .sum()
    }

    /// Implicants in the rows which are not excluded
    pub fn terms_without(&self, excluded: &BitSet) -> Vec<Term> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(i, _)| !excluded.contains(*i))
            .map(|(_, r)| r.term.clone())
            .collect()
    }
}

impl fmt::Display for CoverageTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let width = self.rows.first().map(|r| r.term.len()).unwrap_or(0);
        write!(f, "{:w$}  ", "", w = width + 1)?;
        for col in &self.columns {
            write!(f, " {}{}", col.term, if col.essential { "*" } else { " " })?;
        }
        writeln!(f)?;
        let cell = self.columns.first().map(|c| c.term.len()).unwrap_or(0);
        for (i, row) in self.rows.iter().enumerate() {
            write!(f, "{}{}  ", row.term, if row.essential { "*" } else { " " })?;
            for j in 0..self.columns.len() {
                let mark = if self.is_marked(i, j) { "X" } else { "." };
                write!(f, " {:^w$} ", mark, w = cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

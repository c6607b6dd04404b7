use std::fmt;

use bit_set::BitSet;

/// Value of a single variable in a term
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Bit {
    Zero,
    One,
    /// The variable is absent from the term
    DontCare,
}

/// Terms are subspaces of a fixed number of variables, where each variable is either fixed
/// (true or false) or absent.
/// They are represented as a pair of bitsets to store positive and negative variables, along
/// with the number of variables. A variable found in none of the bitsets is a "don't care".
///
/// Terms are values: operations producing a different term return a new one.
#[derive(Clone, PartialEq, Eq, Hash, Default, Debug)]
pub struct Term {
    len: usize,
    positive: BitSet,
    negative: BitSet,
}

impl Term {
    /// Create a term where all variables are absent.
    /// This term covers the full state space.
    pub fn new(len: usize) -> Term {
        Term {
            len,
            positive: BitSet::with_capacity(len),
            negative: BitSet::with_capacity(len),
        }
    }

    /// Create the minterm corresponding to a line of a truth table.
    ///
    /// Variable `i` takes the value of bit `i` of the index.
    pub fn from_index(index: usize, len: usize) -> Term {
        let mut t = Term::new(len);
        for i in 0..len {
            if (index >> i) & 1 == 1 {
                t.positive.insert(i);
            } else {
                t.negative.insert(i);
            }
        }
        t
    }

    /// Create a term from a list of bits, the first bit being variable 0.
    pub fn from_bits(bits: &[Bit]) -> Term {
        let mut t = Term::new(bits.len());
        for (i, b) in bits.iter().enumerate() {
            match b {
                Bit::One => {
                    t.positive.insert(i);
                }
                Bit::Zero => {
                    t.negative.insert(i);
                }
                Bit::DontCare => (),
            }
        }
        t
    }

    /// Create a term from a pattern string such as "1-01".
    ///
    /// The string is written with the highest variable first, like a binary number.
    /// Any character other than '0' and '1' denotes an absent variable.
    pub fn from_str(descr: &str) -> Term {
        let len = descr.chars().count();
        let mut t = Term::new(len);
        for (k, c) in descr.chars().enumerate() {
            let idx = len - 1 - k;
            match c {
                '0' => {
                    t.negative.insert(idx);
                }
                '1' => {
                    t.positive.insert(idx);
                }
                _ => (),
            }
        }
        t
    }

    /// Number of variables of this term
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the value of a variable
    pub fn bit(&self, idx: usize) -> Bit {
        if self.positive.contains(idx) {
            Bit::One
        } else if self.negative.contains(idx) {
            Bit::Zero
        } else {
            Bit::DontCare
        }
    }

    /// Iterate over the bits of this term, starting with variable 0
    pub fn bits(&self) -> impl Iterator<Item = Bit> + '_ {
        (0..self.len).map(move |idx| self.bit(idx))
    }

    pub fn positive(&self) -> &BitSet {
        &self.positive
    }

    pub fn negative(&self) -> &BitSet {
        &self.negative
    }

    /// Number of variables fixed at 1
    pub fn weight(&self) -> usize {
        self.positive.len()
    }

    /// Number of fixed variables, i.e. the number of literals in the conjunction
    pub fn literals(&self) -> usize {
        self.positive.len() + self.negative.len()
    }

    /// Test if no variable is fixed in this term
    pub fn is_unrestricted(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }

    /// Positions where the two terms carry a different bit.
    /// A fixed bit and an absent variable are considered different.
    fn differences(&self, other: &Term) -> BitSet {
        if self.len != other.len {
            panic!(
                "Terms should have the same length ({} != {})",
                self.len, other.len
            );
        }
        let mut diff = self.positive.clone();
        diff.symmetric_difference_with(&other.positive);
        let mut ndiff = self.negative.clone();
        ndiff.symmetric_difference_with(&other.negative);
        diff.union_with(&ndiff);
        diff
    }

    /// Count the positions where the two terms differ.
    ///
    /// Both terms must have the same length.
    pub fn distance(&self, other: &Term) -> usize {
        self.differences(other).len()
    }

    /// Find the first position where the two terms differ.
    ///
    /// Both terms must have the same length.
    pub fn different_bit_index(&self, other: &Term) -> Option<usize> {
        self.differences(other).iter().next()
    }

    /// Test if all states of another term are also states of this term,
    /// i.e. if all fixed variables of this term are fixed at the same value in the other one.
    ///
    /// Terms of different lengths never cover each other.
    pub fn covers(&self, other: &Term) -> bool {
        self.len == other.len
            && other.positive.is_superset(&self.positive)
            && other.negative.is_superset(&self.negative)
    }

    /// Build a copy of this term where a variable is released
    pub fn released(&self, idx: usize) -> Term {
        let mut t = self.clone();
        t.positive.remove(idx);
        t.negative.remove(idx);
        t
    }

    /// Build a copy of this term where a variable is fixed to a given value
    pub fn fixed(&self, idx: usize, value: bool) -> Term {
        let mut t = self.clone();
        if value {
            t.negative.remove(idx);
            t.positive.insert(idx);
        } else {
            t.positive.remove(idx);
            t.negative.insert(idx);
        }
        t
    }

    /// Merge two terms differing by a single bit.
    /// The result is a copy of this term where the conflicting variable is released.
    pub fn merge(&self, other: &Term) -> Option<Term> {
        if self.distance(other) != 1 {
            return None;
        }
        self.different_bit_index(other).map(|idx| self.released(idx))
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Bit::Zero => write!(f, "0"),
            Bit::One => write!(f, "1"),
            Bit::DontCare => write!(f, "-"),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for idx in (0..self.len).rev() {
            write!(f, "{}", self.bit(idx))?;
        }
        Ok(())
    }
}

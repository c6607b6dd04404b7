//! Search prime implicants by iterative merging of terms (first step of Quine-McCluskey)

use itertools::Itertools;
use log::{debug, trace};

use crate::func::term::Term;

/// A term tagged when it was used to build a merged term during the current pass
struct GroupItem {
    term: Term,
    merged: bool,
}

/// Terms sorted by weight: the group at index `w` contains the terms with `w` positive variables
struct WeightGroups {
    groups: Vec<Vec<GroupItem>>,
}

impl WeightGroups {
    fn new(terms: &[Term]) -> WeightGroups {
        let len = terms.first().map(|t| t.len()).unwrap_or(0);
        let mut groups: Vec<Vec<GroupItem>> = (0..=len).map(|_| vec![]).collect();
        for t in terms {
            groups[t.weight()].push(GroupItem {
                term: t.clone(),
                merged: false,
            });
        }
        WeightGroups { groups }
    }

    /// Merge all pairs of terms from two groups of successive weights.
    /// Terms which took part in a merge are tagged.
    fn merge_groups(lower: &mut [GroupItem], upper: &mut [GroupItem], merged: &mut Vec<Term>) {
        for a in lower.iter_mut() {
            for b in upper.iter_mut() {
                if let Some(m) = a.term.merge(&b.term) {
                    trace!("merge {} and {} into {}", a.term, b.term, m);
                    a.merged = true;
                    b.merged = true;
                    merged.push(m);
                }
            }
        }
    }

    /// Merge all adjacent groups and return the list of new terms
    fn merge(&mut self) -> Vec<Term> {
        let mut merged = vec![];
        for w in 1..self.groups.len() {
            let (left, right) = self.groups.split_at_mut(w);
            WeightGroups::merge_groups(&mut left[w - 1], &mut right[0], &mut merged);
        }
        merged
    }

    fn into_unmerged(self) -> impl Iterator<Item = Term> {
        self.groups
            .into_iter()
            .flatten()
            .filter(|item| !item.merged)
            .map(|item| item.term)
    }
}

/// Perform a single merging pass.
///
/// Returns None if no pair of terms could be merged, or the new list of terms
/// (unmerged terms followed by the new merged terms, without duplicates).
fn reduce_step(terms: &[Term]) -> Option<Vec<Term>> {
    let mut groups = WeightGroups::new(terms);
    let merged = groups.merge();
    if merged.is_empty() {
        return None;
    }

    Some(groups.into_unmerged().chain(merged).unique().collect())
}

/// Compute the prime implicants covering a list of terms of the same length.
///
/// Terms differing by a single variable are merged until no merge is possible.
/// The result does not depend on the order of the input terms, only the order
/// of the returned list does.
pub fn reduce_prime_implicants(terms: &[Term]) -> Vec<Term> {
    let mut current = terms.to_vec();
    let mut pass = 0;
    while let Some(next) = reduce_step(&current) {
        pass += 1;
        debug!("Merge pass {}: {} -> {} terms", pass, current.len(), next.len());
        current = next;
    }
    current
}

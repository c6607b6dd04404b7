//! Properties of the full minimization pipeline

use qmkit::func::minterms::generate_minterms;
use qmkit::func::primes::reduce_prime_implicants;
use qmkit::func::sop::format_sum_of_products;
use qmkit::func::table::CoverageTable;
use qmkit::func::term::Term;
use qmkit::func::{minimize, Minimization};

/// Six variables, 32 minterms, 21 prime implicants
const SIX_VARS: [u8; 64] = [
    0, 0, 0, 1, 0, 0, 1, 0, 0, 1, // 00-09
    0, 1, 0, 1, 1, 1, 1, 0, 1, 1, // 10-19
    1, 0, 0, 0, 0, 0, 0, 1, 0, 0, // 20-29
    1, 1, 0, 1, 1, 1, 0, 0, 1, 0, // 30-39
    0, 1, 0, 1, 1, 1, 0, 1, 1, 0, // 40-49
    1, 1, 1, 0, 1, 1, 0, 1, 0, 0, // 50-59
    0, 1, 0, 1, // 60-63
];

fn table(values: &[u8]) -> Vec<bool> {
    values.iter().map(|v| *v == 1).collect()
}

/// Deterministic pseudo-random truth tables
fn sample_tables(variables: usize, count: usize) -> Vec<Vec<bool>> {
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    (0..count)
        .map(|_| {
            (0..1usize << variables)
                .map(|_| {
                    seed ^= seed << 13;
                    seed ^= seed >> 7;
                    seed ^= seed << 17;
                    seed % 3 != 0
                })
                .collect()
        })
        .collect()
}

fn literals(terms: &[Term]) -> usize {
    terms.iter().map(|t| t.literals()).sum()
}

fn assert_covers_all(minterms: &[Term], cover: &[Term]) {
    for m in minterms {
        assert!(
            cover.iter().any(|t| t.covers(m)),
            "minterm {} is not covered by {}",
            m,
            format_sum_of_products(cover)
        );
    }
}

/// Smallest literal count over all subsets of prime implicants covering all minterms
fn brute_force_minimum(primes: &[Term], minterms: &[Term]) -> usize {
    let mut best = usize::MAX;
    for mask in 0..1u64 << primes.len() {
        let selected: Vec<Term> = (0..primes.len())
            .filter(|i| mask >> i & 1 == 1)
            .map(|i| primes[i].clone())
            .collect();
        if minterms.iter().all(|m| selected.iter().any(|t| t.covers(m))) {
            best = best.min(literals(&selected));
        }
    }
    best
}

#[test]
fn test_four_variables_scenario() {
    let values = table(&[1, 1, 1, 0, 1, 1, 1, 0, 0, 1, 0, 0, 1, 1, 1, 0]);
    let minterms = generate_minterms(&values);
    let indices: Vec<Term> = [0, 1, 2, 4, 5, 6, 9, 12, 13, 14]
        .iter()
        .map(|i| Term::from_index(*i, 4))
        .collect();
    assert_eq!(minterms, indices);
    assert_eq!(literals(&minterms), 40);

    let primes = reduce_prime_implicants(&minterms);
    let mut coverage = CoverageTable::new(&primes, &minterms);
    let essentials = coverage.find_essentials();
    let cover = qmkit::func::cover::find_minimal_cover(&coverage, &essentials);

    assert!(literals(&cover) < 40);
    assert_eq!(literals(&cover), 6);
    assert_covers_all(&minterms, &cover);
    assert_eq!(format_sum_of_products(&cover), "!x3!x0 + !x1x0 + x2!x0");
}

#[test]
fn test_six_variables() {
    let result = Minimization::run(&table(&SIX_VARS));
    assert_eq!(result.minterms.len(), 32);
    assert_eq!(result.primes.len(), 21);
    assert_eq!(result.essentials.len(), 6);
    assert_eq!(result.cover.len(), 11);
    assert_eq!(result.literals(), 46);
    assert!(result.coverage().is_complete());
    assert_covers_all(&result.minterms, &result.cover);
}

#[test]
fn test_single_line_table() {
    let cover = minimize(&[true]);
    assert_eq!(cover.len(), 1);
    assert_eq!(cover[0].len(), 0);
    assert_eq!(format_sum_of_products(&cover), "");
}

#[test]
fn test_coverage_completeness() {
    for variables in 1..=5 {
        for values in sample_tables(variables, 8) {
            let minterms = generate_minterms(&values);
            let cover = minimize(&values);
            assert_covers_all(&minterms, &cover);

            // The cover does not include any false line
            for (idx, v) in values.iter().enumerate() {
                if !v {
                    let line = Term::from_index(idx, variables);
                    assert!(cover.iter().all(|t| !t.covers(&line)));
                }
            }
        }
    }
}

#[test]
fn test_reduction_is_idempotent() {
    for values in sample_tables(5, 10) {
        let primes = reduce_prime_implicants(&generate_minterms(&values));
        let again = reduce_prime_implicants(&primes);
        assert_eq!(primes.len(), again.len());
        for p in primes.iter() {
            assert!(again.contains(p));
        }
    }
}

#[test]
fn test_primes_can_not_be_extended() {
    for values in sample_tables(4, 10) {
        let minterms = generate_minterms(&values);
        for p in reduce_prime_implicants(&minterms) {
            // Releasing any fixed variable would cover a false line
            for idx in p.positive().iter().chain(p.negative().iter()) {
                let wider = p.released(idx);
                let covered_false = (0..values.len())
                    .filter(|i| !values[*i])
                    .any(|i| wider.covers(&Term::from_index(i, 4)));
                assert!(covered_false, "{} is not prime", p);
            }
        }
    }
}

#[test]
fn test_minimality() {
    for variables in 2..=4 {
        for values in sample_tables(variables, 12) {
            let result = Minimization::run(&values);
            if result.primes.len() > 16 {
                continue;
            }
            let best = brute_force_minimum(&result.primes, &result.minterms);
            assert_eq!(result.literals(), best);
            assert!(result.literals() <= literals(&result.primes));

            for i in result.essentials.iter() {
                assert!(result.cover.contains(&result.primes[i]));
            }
        }
    }
}

use log::debug;

use crate::{
    misc::log::targets,
    types::{Clause, Lit},
};

/// Every `size`-subset of `0..n`, each increasing, in lexicographic order.
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, size: usize) -> Self {
        Self {
            n,
            indices: (0..size).collect(),
            done: size > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.indices.clone();

        // advance the rightmost index that still has room
        let size = self.indices.len();
        match (0..size).rev().find(|&i| self.indices[i] < self.n - size + i) {
            Some(i) => {
                self.indices[i] += 1;
                for j in i + 1..size {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
            }
            None => self.done = true,
        }

        Some(current)
    }
}

/// No `k + 1` of `vars` are true together: `OR -v` over every `(k + 1)`-subset.
pub fn at_most(vars: &[Lit], k: usize) -> Vec<Clause> {
    Combinations::new(vars.len(), k + 1)
        .map(|subset| subset.into_iter().map(|i| -vars[i]).collect())
        .collect()
}

/// No `n - k + 1` of `vars` are false together: `OR v` over every `(n - k + 1)`-subset.
///
/// With `k > n` this is the single empty clause.
pub fn at_least(vars: &[Lit], k: usize) -> Vec<Clause> {
    Combinations::new(vars.len(), (vars.len() + 1).saturating_sub(k))
        .map(|subset| subset.into_iter().map(|i| vars[i]).collect())
        .collect()
}

/// Exactly `k` of `vars` are true.
pub fn exactly(vars: &[Lit], k: usize) -> Vec<Clause> {
    let mut clauses = at_most(vars, k);
    let at_most_count = clauses.len();
    clauses.extend(at_least(vars, k));

    debug!(
        target: targets::CARDINALITY,
        "Exactly {k} of {}: {at_most_count} at-most and {} at-least clauses",
        vars.len(),
        clauses.len() - at_most_count
    );

    clauses
}

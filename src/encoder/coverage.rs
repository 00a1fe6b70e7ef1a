use std::ops::Range;

use log::{debug, trace};

use crate::{
    misc::log::targets,
    problem::Problem,
    types::{Clause, Lit},
};

use super::index::Indexer;

/// A conjunction of literals.
pub type Cube = Vec<Lit>;

/// Converts a disjunction of `cubes` into CNF by distribution.
///
/// The result has one clause for every way of picking a literal from each cube, so its
/// length is the product of the cube lengths.
/// No auxiliary variables are introduced.
///
/// Folding from the first cube, the identity is a single empty clause. So an empty
/// disjunction yields `[[]]` (false), and an empty cube anywhere yields `[]` (true).
pub fn distribute(cubes: &[Cube]) -> Vec<Clause> {
    let mut clauses: Vec<Clause> = vec![vec![]];

    for cube in cubes {
        let mut product = Vec::with_capacity(clauses.len() * cube.len());
        for clause in &clauses {
            for &lit in cube {
                let mut extended = Vec::with_capacity(clause.len() + 1);
                extended.extend_from_slice(clause);
                extended.push(lit);
                product.push(extended);
            }
        }
        clauses = product;
    }

    clauses
}

/// Coverage clauses for the given subjects: each needs a selected teacher who teaches it,
/// `OR_t (y[s][t] AND x[t])`.
pub fn encode_subjects(problem: &Problem, index: &Indexer, subjects: Range<usize>) -> Vec<Clause> {
    let mut clauses = vec![];

    for subject in subjects {
        let cubes: Vec<Cube> = (0..problem.teachers())
            .map(|teacher| {
                vec![
                    index.fact(subject, teacher) as Lit,
                    index.selection(teacher) as Lit,
                ]
            })
            .collect();

        let subject_clauses = distribute(&cubes);
        trace!(target: targets::COVERAGE, "Subject {subject}: {} clauses", subject_clauses.len());
        clauses.extend(subject_clauses);
    }

    clauses
}

pub fn encode(problem: &Problem, index: &Indexer) -> Vec<Clause> {
    let clauses = encode_subjects(problem, index, 0..problem.subjects());
    debug!(target: targets::COVERAGE, "{} coverage clauses", clauses.len());
    clauses
}

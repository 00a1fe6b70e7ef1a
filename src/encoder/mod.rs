//! Encodes a [Problem] as CNF.
//!
//! The formula is the conjunction of three clause families, in this order:
//! - [facts], unit clauses fixing who teaches what.
//! - [coverage], every subject taught by a selected teacher.
//! - [cardinality], exactly `K` teachers selected.

pub mod cardinality;
pub mod coverage;
pub mod facts;
pub mod index;

use log::debug;

use crate::{
    err::EncodeError,
    misc::log::targets,
    problem::Problem,
    types::{Clause, Formula, Lit},
};

use self::index::Indexer;

pub fn indexer(problem: &Problem) -> Result<Indexer, EncodeError> {
    Indexer::checked(problem.teachers(), problem.subjects())
}

/// The selection literals `x[0..T)`, in teacher order.
pub fn selections(problem: &Problem, index: &Indexer) -> Vec<Lit> {
    (0..problem.teachers())
        .map(|teacher| index.selection(teacher) as Lit)
        .collect()
}

pub fn encode(problem: &Problem) -> Result<Formula, EncodeError> {
    let index = indexer(problem)?;

    let facts = facts::encode(problem, &index);
    let coverage = coverage::encode(problem, &index);
    let cardinality = cardinality::exactly(&selections(problem, &index), problem.required());

    assemble(&index, facts, coverage, cardinality)
}

/// Concatenates the clause families into a validated formula over every indexed variable.
pub(crate) fn assemble(
    index: &Indexer,
    facts: Vec<Clause>,
    coverage: Vec<Clause>,
    cardinality: Vec<Clause>,
) -> Result<Formula, EncodeError> {
    debug!(
        target: targets::ENCODER,
        "{} fact, {} coverage, {} cardinality clauses over {} variables",
        facts.len(),
        coverage.len(),
        cardinality.len(),
        index.var_count()
    );

    let mut clauses = facts;
    clauses.extend(coverage);
    clauses.extend(cardinality);

    Formula::new(index.var_count(), clauses)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use crate::{err::EncodeError, problem::Problem};

    use super::{assemble, encode, index::Indexer};

    fn problem(teachers: usize, subjects: usize, required: usize, rows: &[&[usize]]) -> Problem {
        let taught_by: Vec<BTreeSet<usize>> =
            rows.iter().map(|row| row.iter().copied().collect()).collect();
        Problem::new(teachers, subjects, required, taught_by).unwrap()
    }

    #[test]
    fn layout() {
        // teacher 0 teaches subject 0, teacher 1 teaches subject 1
        let formula = encode(&problem(2, 2, 1, &[&[0], &[1]])).unwrap();

        assert_eq!(formula.var_count(), 6);
        assert_eq!(
            formula.clauses(),
            &[
                // facts
                vec![1],
                vec![-2],
                vec![-3],
                vec![4],
                // coverage of subject 0
                vec![1, 2],
                vec![1, 6],
                vec![5, 2],
                vec![5, 6],
                // coverage of subject 1
                vec![3, 4],
                vec![3, 6],
                vec![5, 4],
                vec![5, 6],
                // at most one
                vec![-5, -6],
                // at least one
                vec![5, 6],
            ]
        );
    }

    #[test]
    fn clause_count() {
        // S*T facts, S*2^T coverage, C(T, K+1) + C(T, T-K+1) cardinality
        let formula = encode(&problem(4, 3, 2, &[&[0], &[1], &[2], &[0, 1, 2]])).unwrap();
        assert_eq!(formula.var_count(), 16);
        assert_eq!(formula.clause_count(), 12 + 3 * 16 + 4 + 4);
    }

    #[test]
    fn nothing_to_encode() {
        let formula = encode(&problem(0, 0, 0, &[])).unwrap();
        assert_eq!(formula.var_count(), 0);
        assert_eq!(formula.clause_count(), 0);
    }

    #[test]
    fn rejects_empty_clause() {
        let index = Indexer::new(1, 1);
        assert_eq!(
            assemble(&index, vec![vec![1]], vec![vec![1, 2]], vec![vec![]]),
            Err(EncodeError::EmptyClause { clause: 2 })
        );
    }
}

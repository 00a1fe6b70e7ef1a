use crate::{
    problem::Problem,
    types::{Clause, Lit},
};

use super::index::Indexer;

/// One unit clause per `(subject, teacher)` pair, fixing `y[s][t]` to whether `t` teaches `s`.
pub fn encode(problem: &Problem, index: &Indexer) -> Vec<Clause> {
    let mut clauses = Vec::with_capacity(problem.subjects() * problem.teachers());

    for subject in 0..problem.subjects() {
        for teacher in 0..problem.teachers() {
            let lit = index.fact(subject, teacher) as Lit;
            if problem.teaches(teacher, subject) {
                clauses.push(vec![lit]);
            } else {
                clauses.push(vec![-lit]);
            }
        }
    }

    clauses
}

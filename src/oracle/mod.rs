//! SAT oracles: given a formula, a verdict.
//!
//! - [Exhaustive] tries every assignment, as a reference for small formulas.
//! - [Dpll] is a backtracking search with unit propagation.
//! - [Command] hands the formula to an external solver.

mod assignment;
pub mod command;
pub mod dpll;
pub mod exhaustive;

use crate::{
    err::OracleError,
    types::{Formula, Verdict},
};

pub use self::{command::Command, dpll::Dpll, exhaustive::Exhaustive};

pub trait Oracle {
    /// Decides `formula`, with one model if it is satisfiable.
    fn solve(&mut self, formula: &Formula) -> Result<Verdict, OracleError>;
}

impl<O: Oracle + ?Sized> Oracle for Box<O> {
    fn solve(&mut self, formula: &Formula) -> Result<Verdict, OracleError> {
        (**self).solve(formula)
    }
}

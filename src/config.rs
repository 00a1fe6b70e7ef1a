use std::path::PathBuf;

use clap::ValueEnum;

use crate::oracle::{Command, Dpll, Exhaustive, Oracle};

pub mod defaults {
    /// Largest formula, in variables, the exhaustive oracle accepts by default.
    pub const EXHAUSTIVE_LIMIT: usize = 24;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OracleKind {
    /// Built-in backtracking search.
    #[default]
    Dpll,
    /// Try every assignment, for small problems only.
    Exhaustive,
    /// An external solver executable.
    Command,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub oracle: OracleKind,
    /// The executable run by [OracleKind::Command], and arguments placed before the CNF path.
    pub solver: Option<PathBuf>,
    pub solver_args: Vec<String>,
    /// Threads used for coverage clauses, encoding serially if `None`.
    pub threads: Option<usize>,
    pub exhaustive_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            oracle: OracleKind::default(),
            solver: None,
            solver_args: vec![],
            threads: None,
            exhaustive_limit: defaults::EXHAUSTIVE_LIMIT,
        }
    }
}

impl Config {
    /// The configured oracle, or `None` if a command oracle was asked for without a solver.
    pub fn oracle(&self) -> Option<Box<dyn Oracle>> {
        match self.oracle {
            OracleKind::Dpll => Some(Box::new(Dpll::new())),
            OracleKind::Exhaustive => Some(Box::new(Exhaustive::new(self.exhaustive_limit))),
            OracleKind::Command => {
                let program = self.solver.clone()?;
                Some(Box::new(Command::new(program, self.solver_args.clone())))
            }
        }
    }
}

use log::{debug, trace};

use crate::{
    err::OracleError,
    misc::log::targets,
    types::{Clause, Formula, Lit, Verdict},
};

use super::{
    assignment::{Assignment, Reason},
    Oracle,
};

/// Backtracking search with unit propagation.
///
/// Variables are decided in index order, false first.
#[derive(Default)]
pub struct Dpll {
    decisions: usize,
    conflicts: usize,
}

impl Dpll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decisions made by the most recent solve.
    pub fn decisions(&self) -> usize {
        self.decisions
    }

    /// Conflicts met by the most recent solve.
    pub fn conflicts(&self) -> usize {
        self.conflicts
    }
}

enum Status {
    Satisfied,
    Conflict,
    Unit(Lit),
    Open,
}

fn status(assignment: &Assignment, clause: &Clause) -> Status {
    let mut free = None;
    let mut free_count = 0;

    for &lit in clause {
        match assignment.eval(lit) {
            Some(true) => return Status::Satisfied,
            Some(false) => (),
            None => {
                free = Some(lit);
                free_count += 1;
            }
        }
    }

    match (free_count, free) {
        (0, _) => Status::Conflict,
        (1, Some(lit)) => Status::Unit(lit),
        _ => Status::Open,
    }
}

/// Assigns unit literals until a fixpoint, returning the index of a conflicting clause if
/// one is found.
fn propagate(assignment: &mut Assignment, clauses: &[Clause]) -> Option<usize> {
    loop {
        let mut changed = false;

        for (i, clause) in clauses.iter().enumerate() {
            match status(assignment, clause) {
                Status::Conflict => return Some(i),
                Status::Unit(lit) => {
                    // the literal may have been set by an earlier clause of this pass
                    if assignment.eval(lit).is_none() {
                        assignment.set(lit, Reason::Propagation);
                        changed = true;
                    }
                }
                Status::Satisfied | Status::Open => (),
            }
        }

        if !changed {
            return None;
        }
    }
}

impl Oracle for Dpll {
    fn solve(&mut self, formula: &Formula) -> Result<Verdict, OracleError> {
        self.decisions = 0;
        self.conflicts = 0;

        let clauses = formula.clauses();
        let mut assignment = Assignment::new(formula.var_count());

        loop {
            if let Some(i_conflict) = propagate(&mut assignment, clauses) {
                self.conflicts += 1;
                trace!(target: targets::ORACLE, "Conflict on clause {i_conflict}");

                // undo up to the most recent decision not yet flipped
                loop {
                    let Some((lit, reason)) = assignment.last_choice() else {
                        debug!(
                            target: targets::ORACLE,
                            "Unsatisfiable after {} decisions, {} conflicts",
                            self.decisions,
                            self.conflicts
                        );
                        return Ok(Verdict::Unsat);
                    };
                    assignment.backtrack(assignment.last_level());
                    if reason == Reason::Decision {
                        assignment.set(-lit, Reason::Flip);
                        break;
                    }
                }
                continue;
            }

            match assignment.unassigned() {
                Some(var) => {
                    self.decisions += 1;
                    assignment.set(-(var as Lit), Reason::Decision);
                }
                None => break,
            }
        }

        debug!(
            target: targets::ORACLE,
            "Satisfiable after {} decisions, {} conflicts",
            self.decisions,
            self.conflicts
        );

        let mut model: Vec<Lit> = assignment.trail().to_vec();
        model.sort_by_key(|lit| lit.unsigned_abs());
        Ok(Verdict::Sat { model })
    }
}

use crate::types::{to_var, Lit, Var};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reason {
    /// A free choice, whose opposite is still to be tried.
    Decision,
    /// The opposite of an exhausted decision.
    Flip,
    Propagation,
}

#[derive(Clone)]
struct VarData {
    value: bool,
    reason: Reason,
}

/// A partial assignment kept as a trail of literals split into levels.
/// Each decision or flip opens a level.
pub struct Assignment {
    data: Vec<Option<VarData>>,
    trail: Vec<Lit>,
    levels: Vec<usize>,
}

impl Assignment {
    pub fn new(var_count: usize) -> Self {
        Self {
            data: vec![None; var_count + 1],
            trail: vec![],
            levels: vec![],
        }
    }

    pub fn eval(&self, lit: Lit) -> Option<bool> {
        self.data[to_var(lit)]
            .as_ref()
            .map(|data| data.value == lit.is_positive())
    }

    pub fn set(&mut self, lit: Lit, reason: Reason) {
        debug_assert!(self.eval(lit).is_none());

        if reason != Reason::Propagation {
            self.levels.push(self.trail.len());
        }
        self.trail.push(lit);

        let data = VarData {
            value: lit.is_positive(),
            reason,
        };
        self.data[to_var(lit)] = Some(data);
    }

    pub fn trail(&self) -> &[Lit] {
        &self.trail
    }

    pub fn last_level(&self) -> usize {
        self.levels.len()
    }

    /// The literal which opened the last level, and why.
    pub fn last_choice(&self) -> Option<(Lit, Reason)> {
        let &i = self.levels.last()?;
        let lit = self.trail[i];
        let reason = self.data[to_var(lit)].as_ref()?.reason;
        Some((lit, reason))
    }

    /// The first unassigned variable, if any.
    pub fn unassigned(&self) -> Option<Var> {
        (1..self.data.len()).find(|&var| self.data[var].is_none())
    }

    /// Revert all changes at `level` (incl.) and above.
    pub fn backtrack(&mut self, level: usize) {
        debug_assert!(level >= 1);
        self.levels.drain(level..);
        let i = self.levels.pop().unwrap_or(0);
        for lit in self.trail.drain(i..) {
            self.data[to_var(lit)] = None;
        }
    }
}

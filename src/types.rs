use crate::err::EncodeError;

pub type Lit = i32;

pub type Var = usize;

pub type Clause = Vec<Lit>;

pub fn to_var(lit: Lit) -> Var {
    debug_assert_ne!(lit, 0);
    lit.unsigned_abs() as Var
}

/// A CNF formula whose clauses only mention variables `1..=var_count`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Formula {
    var_count: usize,
    clauses: Vec<Clause>,
}

impl Formula {
    pub fn new(var_count: usize, clauses: Vec<Clause>) -> Result<Self, EncodeError> {
        for (i_clause, clause) in clauses.iter().enumerate() {
            if clause.is_empty() {
                return Err(EncodeError::EmptyClause { clause: i_clause });
            }
            for &lit in clause {
                if lit == 0 {
                    return Err(EncodeError::ZeroLiteral { clause: i_clause });
                }
                if to_var(lit) > var_count {
                    return Err(EncodeError::LiteralOutOfRange {
                        clause: i_clause,
                        lit,
                        var_count,
                    });
                }
            }
        }

        Ok(Self { var_count, clauses })
    }

    pub fn var_count(&self) -> usize {
        self.var_count
    }

    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Evaluates the formula, treating every variable missing from `model` as false.
    pub fn satisfied_by(&self, model: &[Lit]) -> bool {
        let mut value = vec![false; self.var_count + 1];
        for &lit in model {
            let var = to_var(lit);
            if var <= self.var_count {
                value[var] = lit.is_positive();
            }
        }

        self.clauses.iter().all(|clause| {
            clause
                .iter()
                .any(|&lit| value[to_var(lit)] == lit.is_positive())
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Sat { model: Vec<Lit> },
    Unsat,
}

use log::{debug, warn};

use crate::{
    config::defaults,
    err::OracleError,
    misc::log::targets,
    types::{Formula, Lit, Verdict},
};

use super::Oracle;

/// Tries every assignment in turn, counting up from all-false.
///
/// Only practical for small formulas, and so refuses any over `limit` variables.
pub struct Exhaustive {
    limit: usize,
}

/// Assignments are counted in a `u64`.
pub const MAX_LIMIT: usize = u64::BITS as usize - 1;

impl Exhaustive {
    /// A `limit` over [MAX_LIMIT] is lowered to it, with a warning.
    pub fn new(limit: usize) -> Self {
        if limit > MAX_LIMIT {
            warn!(target: targets::ORACLE, "Variable limit {limit} lowered to {MAX_LIMIT}");
        }
        Self {
            limit: limit.min(MAX_LIMIT),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for Exhaustive {
    fn default() -> Self {
        Self::new(defaults::EXHAUSTIVE_LIMIT)
    }
}

fn model(var_count: usize, mask: u64) -> Vec<Lit> {
    (1..=var_count)
        .map(|var| {
            if mask & (1 << (var - 1)) != 0 {
                var as Lit
            } else {
                -(var as Lit)
            }
        })
        .collect()
}

impl Oracle for Exhaustive {
    fn solve(&mut self, formula: &Formula) -> Result<Verdict, OracleError> {
        let var_count = formula.var_count();
        if var_count > self.limit {
            return Err(OracleError::TooManyVariables {
                count: var_count,
                limit: self.limit,
            });
        }

        for mask in 0..(1u64 << var_count) {
            let model = model(var_count, mask);
            if formula.satisfied_by(&model) {
                debug!(target: targets::ORACLE, "Model {mask:b} found exhaustively");
                return Ok(Verdict::Sat { model });
            }
        }

        debug!(target: targets::ORACLE, "No model among {} assignments", 1u64 << var_count);
        Ok(Verdict::Unsat)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        err::OracleError,
        oracle::Oracle,
        types::{Formula, Verdict},
    };

    use super::{Exhaustive, MAX_LIMIT};

    #[test]
    fn first_model() {
        let formula = Formula::new(3, vec![vec![2], vec![-1, 3]]).unwrap();
        assert_eq!(
            Exhaustive::default().solve(&formula).unwrap(),
            Verdict::Sat {
                model: vec![-1, 2, -3]
            }
        );
    }

    #[test]
    fn unsat() {
        let formula = Formula::new(1, vec![vec![1], vec![-1]]).unwrap();
        assert_eq!(
            Exhaustive::default().solve(&formula).unwrap(),
            Verdict::Unsat
        );
    }

    #[test]
    fn limit() {
        let formula = Formula::new(5, vec![vec![5]]).unwrap();
        assert!(matches!(
            Exhaustive::new(4).solve(&formula),
            Err(OracleError::TooManyVariables { count: 5, limit: 4 })
        ));
        assert!(Exhaustive::new(5).solve(&formula).is_ok());
    }

    #[test]
    fn limit_past_counter_width() {
        let oracle = Exhaustive::new(100);
        assert_eq!(oracle.limit(), MAX_LIMIT);

        let formula = Formula::new(MAX_LIMIT + 1, vec![vec![1]]).unwrap();
        assert!(matches!(
            Exhaustive::new(100).solve(&formula),
            Err(OracleError::TooManyVariables { count: 64, limit: 63 })
        ));
    }
}

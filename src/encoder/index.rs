use crate::{
    err::EncodeError,
    types::{Lit, Var},
};

/// Maps facts and selections to variable ids, as a pure function of the problem shape.
///
/// - `y[s][t]`, "subject `s` is taught by teacher `t`", is `s * T + t + 1`.
/// - `x[t]`, "teacher `t` is selected", is `S * T + t + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Indexer {
    teachers: usize,
    subjects: usize,
}

impl Indexer {
    pub fn new(teachers: usize, subjects: usize) -> Self {
        Self { teachers, subjects }
    }

    /// As [Indexer::new], failing if some id would not fit in a literal.
    pub fn checked(teachers: usize, subjects: usize) -> Result<Self, EncodeError> {
        let count = subjects
            .checked_add(1)
            .and_then(|rows| rows.checked_mul(teachers));
        match count {
            Some(count) if count <= Lit::MAX as usize => Ok(Self::new(teachers, subjects)),
            Some(count) => Err(EncodeError::TooManyVariables { count }),
            None => Err(EncodeError::TooManyVariables { count: usize::MAX }),
        }
    }

    pub fn var_count(&self) -> usize {
        self.subjects * self.teachers + self.teachers
    }

    pub fn fact(&self, subject: usize, teacher: usize) -> Var {
        debug_assert!(subject < self.subjects && teacher < self.teachers);
        subject * self.teachers + teacher + 1
    }

    pub fn selection(&self, teacher: usize) -> Var {
        debug_assert!(teacher < self.teachers);
        self.subjects * self.teachers + teacher + 1
    }

    /// The teacher whose selection variable is `var`, if any.
    pub fn teacher(&self, var: Var) -> Option<usize> {
        let first = self.subjects * self.teachers + 1;
        (first..=self.var_count())
            .contains(&var)
            .then(|| var - first)
    }
}

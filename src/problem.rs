use std::collections::BTreeSet;

use crate::err::ProblemError;

/// Which subjects each teacher teaches, and how many teachers must be selected.
///
/// Teachers and subjects are 0-based. A `Problem` can only be built through
/// [Problem::new], so every index it holds is in range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Problem {
    teachers: usize,
    subjects: usize,
    required: usize,
    taught_by: Vec<BTreeSet<usize>>,
}

impl Problem {
    pub fn new(
        teachers: usize,
        subjects: usize,
        required: usize,
        taught_by: Vec<BTreeSet<usize>>,
    ) -> Result<Self, ProblemError> {
        if taught_by.len() != teachers {
            return Err(ProblemError::TeacherCountMismatch {
                expected: teachers,
                found: taught_by.len(),
            });
        }
        if required > teachers {
            return Err(ProblemError::RequiredOutOfRange { required, teachers });
        }
        if teachers == 0 && subjects > 0 {
            return Err(ProblemError::NoTeachers { subjects });
        }
        for (teacher, taught) in taught_by.iter().enumerate() {
            if let Some(&subject) = taught.iter().find(|&&subject| subject >= subjects) {
                return Err(ProblemError::SubjectOutOfRange {
                    teacher,
                    subject,
                    subjects,
                });
            }
        }

        Ok(Self {
            teachers,
            subjects,
            required,
            taught_by,
        })
    }

    pub fn teachers(&self) -> usize {
        self.teachers
    }

    pub fn subjects(&self) -> usize {
        self.subjects
    }

    pub fn required(&self) -> usize {
        self.required
    }

    pub fn teaches(&self, teacher: usize, subject: usize) -> bool {
        self.taught_by[teacher].contains(&subject)
    }

    /// Whether selecting exactly `selected` is a solution:
    /// `required` distinct teachers, with every subject taught by one of them.
    pub fn admits(&self, selected: &[usize]) -> bool {
        let distinct: BTreeSet<usize> = selected.iter().copied().collect();
        if distinct.len() != selected.len() || distinct.len() != self.required {
            return false;
        }
        if distinct.iter().any(|&teacher| teacher >= self.teachers) {
            return false;
        }

        (0..self.subjects).all(|subject| {
            distinct
                .iter()
                .any(|&teacher| self.teaches(teacher, subject))
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use crate::err::ProblemError;

    use super::Problem;

    fn rows(rows: &[&[usize]]) -> Vec<BTreeSet<usize>> {
        rows.iter().map(|row| row.iter().copied().collect()).collect()
    }

    #[test]
    fn malformed() {
        assert_eq!(
            Problem::new(2, 2, 1, rows(&[&[0]])),
            Err(ProblemError::TeacherCountMismatch {
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            Problem::new(1, 2, 2, rows(&[&[0]])),
            Err(ProblemError::RequiredOutOfRange {
                required: 2,
                teachers: 1
            })
        );
        assert_eq!(
            Problem::new(2, 2, 1, rows(&[&[0], &[1, 2]])),
            Err(ProblemError::SubjectOutOfRange {
                teacher: 1,
                subject: 2,
                subjects: 2
            })
        );
        assert_eq!(
            Problem::new(0, 3, 0, vec![]),
            Err(ProblemError::NoTeachers { subjects: 3 })
        );
    }

    #[test]
    fn empty() {
        let problem = Problem::new(0, 0, 0, vec![]).unwrap();
        assert!(problem.admits(&[]));
    }

    #[test]
    fn admits() {
        let problem = Problem::new(3, 2, 2, rows(&[&[0], &[1], &[0, 1]])).unwrap();
        assert!(problem.admits(&[0, 1]));
        assert!(problem.admits(&[1, 2]));
        assert!(problem.admits(&[0, 2]));
        // wrong count
        assert!(!problem.admits(&[2]));
        assert!(!problem.admits(&[0, 1, 2]));
        // repeated teacher
        assert!(!problem.admits(&[2, 2]));
        // out of range
        assert!(!problem.admits(&[0, 3]));

        let problem = Problem::new(3, 2, 2, rows(&[&[0], &[0], &[1]])).unwrap();
        // subject 1 uncovered
        assert!(!problem.admits(&[0, 1]));
    }
}

//! Error types used in the crate.
//!
//! Each stage has its own enum, and all of them convert into [ErrorKind] so the binary can
//! report any failure with `?`.
//! An unsatisfiable instance is not an error, see [Verdict](crate::types::Verdict).

use std::fmt;

use crate::types::Lit;

#[derive(Debug)]
pub enum ErrorKind {
    Problem(ProblemError),
    Parse(ParseError),
    Encode(EncodeError),
    Oracle(OracleError),
    Io(std::io::Error),
}

/// The problem itself is inconsistent.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProblemError {
    /// A teacher lists a subject outside `0..subjects`.
    SubjectOutOfRange {
        teacher: usize,
        subject: usize,
        subjects: usize,
    },

    /// The number of teacher rows differs from the declared teacher count.
    TeacherCountMismatch { expected: usize, found: usize },

    /// More teachers must be selected than exist.
    RequiredOutOfRange { required: usize, teachers: usize },

    /// Subjects exist but no teacher could ever cover them.
    NoTeachers { subjects: usize },
}

/// Noted errors while reading a problem from text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The input ended before the `T S K` line.
    MissingHeader,

    /// The `T S K` line does not hold exactly three non-negative integers.
    Header { line: usize },

    /// A token on a teacher row is not a subject index.
    Subject { line: usize, token: String },

    /// The input ended before every teacher row was read.
    MissingTeachers { expected: usize, found: usize },

    /// A row follows the last teacher row.
    ExtraRow { line: usize },

    /// The rows parsed, but describe an inconsistent problem.
    Problem(ProblemError),
}

/// An encoder produced something that is not a well-formed CNF.
/// This indicates a bug, and the encoding is abandoned.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EncodeError {
    EmptyClause {
        clause: usize,
    },

    ZeroLiteral {
        clause: usize,
    },

    LiteralOutOfRange {
        clause: usize,
        lit: Lit,
        var_count: usize,
    },

    /// The variable ids would not fit in a literal.
    TooManyVariables { count: usize },
}

/// The SAT oracle failed to deliver a verdict.
#[derive(Debug)]
pub enum OracleError {
    /// The formula is over the variable limit of the oracle.
    TooManyVariables { count: usize, limit: usize },

    /// The solver answered, but without deciding the formula.
    Inconclusive,

    /// The solver output has no `s` line.
    MissingStatus,

    /// The solver output could not be read.
    Malformed { line: usize, content: String },

    /// The solver exited unsuccessfully without a verdict.
    Failed {
        status: std::process::ExitStatus,
        stderr: String,
    },

    /// The solver process could not be run, or the formula could not be handed over.
    Io(std::io::Error),
}

impl From<ProblemError> for ErrorKind {
    fn from(e: ProblemError) -> Self {
        ErrorKind::Problem(e)
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl From<EncodeError> for ErrorKind {
    fn from(e: EncodeError) -> Self {
        ErrorKind::Encode(e)
    }
}

impl From<OracleError> for ErrorKind {
    fn from(e: OracleError) -> Self {
        ErrorKind::Oracle(e)
    }
}

impl From<std::io::Error> for ErrorKind {
    fn from(e: std::io::Error) -> Self {
        ErrorKind::Io(e)
    }
}

impl From<ProblemError> for ParseError {
    fn from(e: ProblemError) -> Self {
        ParseError::Problem(e)
    }
}

impl From<std::io::Error> for OracleError {
    fn from(e: std::io::Error) -> Self {
        OracleError::Io(e)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Problem(e) => write!(f, "malformed problem: {e}"),
            ErrorKind::Parse(e) => write!(f, "could not read problem: {e}"),
            ErrorKind::Encode(e) => write!(f, "encoding failed: {e}"),
            ErrorKind::Oracle(e) => write!(f, "solver failed: {e}"),
            ErrorKind::Io(e) => write!(f, "{e}"),
        }
    }
}

impl fmt::Display for ProblemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProblemError::SubjectOutOfRange {
                teacher,
                subject,
                subjects,
            } => write!(
                f,
                "teacher {teacher} teaches subject {subject}, but subjects are 0..{subjects}"
            ),
            ProblemError::TeacherCountMismatch { expected, found } => {
                write!(f, "expected {expected} teacher rows, found {found}")
            }
            ProblemError::RequiredOutOfRange { required, teachers } => write!(
                f,
                "{required} teachers must be selected, but there are only {teachers}"
            ),
            ProblemError::NoTeachers { subjects } => {
                write!(f, "{subjects} subjects but no teachers")
            }
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingHeader => write!(f, "missing `T S K` line"),
            ParseError::Header { line } => {
                write!(f, "line {line}: expected three non-negative integers `T S K`")
            }
            ParseError::Subject { line, token } => {
                write!(f, "line {line}: `{token}` is not a subject index")
            }
            ParseError::MissingTeachers { expected, found } => {
                write!(f, "expected {expected} teacher rows, found {found}")
            }
            ParseError::ExtraRow { line } => {
                write!(f, "line {line}: unexpected row after the last teacher")
            }
            ParseError::Problem(e) => write!(f, "{e}"),
        }
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::EmptyClause { clause } => write!(f, "clause {clause} is empty"),
            EncodeError::ZeroLiteral { clause } => write!(f, "clause {clause} contains 0"),
            EncodeError::LiteralOutOfRange {
                clause,
                lit,
                var_count,
            } => write!(
                f,
                "clause {clause} contains {lit}, but variables are 1..={var_count}"
            ),
            EncodeError::TooManyVariables { count } => {
                write!(f, "{count} variables do not fit in a literal")
            }
        }
    }
}

impl fmt::Display for OracleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OracleError::TooManyVariables { count, limit } => {
                write!(f, "{count} variables is over the limit of {limit}")
            }
            OracleError::Inconclusive => write!(f, "the solver gave no verdict"),
            OracleError::MissingStatus => write!(f, "the solver output has no `s` line"),
            OracleError::Malformed { line, content } => {
                write!(f, "line {line} of the solver output is malformed: `{content}`")
            }
            OracleError::Failed { status, stderr } => {
                write!(f, "the solver exited with {status}: {}", stderr.trim_end())
            }
            OracleError::Io(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ErrorKind {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ErrorKind::Problem(e) => Some(e),
            ErrorKind::Parse(e) => Some(e),
            ErrorKind::Encode(e) => Some(e),
            ErrorKind::Oracle(e) => Some(e),
            ErrorKind::Io(e) => Some(e),
        }
    }
}

impl std::error::Error for ProblemError {}

impl std::error::Error for ParseError {}

impl std::error::Error for EncodeError {}

impl std::error::Error for OracleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OracleError::Io(e) => Some(e),
            _ => None,
        }
    }
}

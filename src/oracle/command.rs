use std::{path::PathBuf, process};

use log::{debug, info};

use crate::{
    err::OracleError,
    io,
    misc::log::targets,
    types::{Formula, Verdict},
};

use super::Oracle;

/// Runs an external solver, as `program [args..] <file.cnf>`, reading its verdict from the
/// SAT competition output format on stdout.
///
/// The exit status is only examined when stdout holds no verdict, as solvers conventionally
/// exit with 10 or 20.
pub struct Command {
    program: PathBuf,
    args: Vec<String>,
}

impl Command {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl Oracle for Command {
    fn solve(&mut self, formula: &Formula) -> Result<Verdict, OracleError> {
        // Removed when dropped.
        let mut file = tempfile::Builder::new()
            .prefix("faculty-sat-")
            .suffix(".cnf")
            .tempfile()?;
        io::write_formula(file.as_file_mut(), formula)?;

        info!(target: targets::ORACLE, "Running {:?} on {:?}", self.program, file.path());
        let output = process::Command::new(&self.program)
            .args(&self.args)
            .arg(file.path())
            .output()?;
        debug!(target: targets::ORACLE, "{:?} exited with {}", self.program, output.status);

        match io::read_solution(&mut output.stdout.as_slice()) {
            Err(OracleError::MissingStatus) if !output.status.success() => {
                Err(OracleError::Failed {
                    status: output.status,
                    stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                })
            }
            verdict => verdict,
        }
    }
}

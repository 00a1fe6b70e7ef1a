pub mod config;
pub mod decoder;
pub mod encoder;
pub mod err;
pub mod io;
pub mod misc;
pub mod oracle;
pub mod parallel;
pub mod problem;
pub mod types;

use crate::{
    config::Config,
    decoder::Selection,
    err::ErrorKind,
    oracle::Oracle,
    problem::Problem,
    types::{Formula, Verdict},
};

/// Encodes `problem`, on `config.threads` workers if set.
pub fn encode(problem: &Problem, config: &Config) -> Result<Formula, ErrorKind> {
    let formula = match config.threads {
        Some(n) => parallel::encode(problem, Some(n))?,
        None => encoder::encode(problem)?,
    };
    Ok(formula)
}

/// Reads the selected teachers of `problem` from a verdict on its encoding.
pub fn decode(problem: &Problem, verdict: &Verdict) -> Result<Selection, ErrorKind> {
    Ok(decoder::decode(&encoder::indexer(problem)?, verdict))
}

/// Encodes `problem`, asks `oracle` for a verdict, and decodes it.
pub fn solve(
    problem: &Problem,
    oracle: &mut impl Oracle,
    config: &Config,
) -> Result<Selection, ErrorKind> {
    let formula = encode(problem, config)?;
    let verdict = oracle.solve(&formula)?;
    decode(problem, &verdict)
}

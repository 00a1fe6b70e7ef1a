use std::{fs::File, io::Write, path::PathBuf};

use clap::Parser;
use log::{info, warn};

use faculty_sat::{
    config::{defaults, Config, OracleKind},
    decoder::Selection,
    err::ErrorKind,
    io,
    oracle::Oracle,
};

/// Selects exactly K teachers such that every subject stays taught, by way of a SAT solver.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// Problem file: `T S K`, then one row of subject indices per teacher.
    input: PathBuf,

    #[arg(long, value_enum, default_value_t = OracleKind::Dpll)]
    oracle: OracleKind,

    /// Solver executable for `--oracle command`.
    #[arg(long)]
    solver: Option<PathBuf>,

    /// Argument passed to the solver before the CNF path. May be repeated.
    #[arg(long = "solver-arg", allow_hyphen_values = true)]
    solver_args: Vec<String>,

    /// Also write the CNF, in DIMACS, to this path.
    #[arg(long)]
    dimacs: Option<PathBuf>,

    /// Write the result here rather than to stdout.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Encode coverage clauses on this many threads.
    #[arg(long)]
    threads: Option<usize>,

    /// Largest number of variables `--oracle exhaustive` accepts, at most 63.
    #[arg(long, default_value_t = defaults::EXHAUSTIVE_LIMIT)]
    limit: usize,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            oracle: self.oracle,
            solver: self.solver.clone(),
            solver_args: self.solver_args.clone(),
            threads: self.threads,
            exhaustive_limit: self.limit,
        }
    }
}

fn run(cli: &Cli) -> Result<(), ErrorKind> {
    let config = cli.config();
    let Some(mut oracle) = config.oracle() else {
        println!("c --oracle command requires --solver");
        std::process::exit(1);
    };

    let mut input = File::open(&cli.input)?;
    let problem = io::read_problem(&mut input)?;
    info!(
        "{} teachers, {} subjects, {} to select",
        problem.teachers(),
        problem.subjects(),
        problem.required()
    );

    let formula = faculty_sat::encode(&problem, &config)?;
    info!(
        "Encoded {} clauses over {} variables",
        formula.clause_count(),
        formula.var_count()
    );

    if let Some(path) = &cli.dimacs {
        let mut file = File::create(path)?;
        io::write_formula(&mut file, &formula)?;
        info!("Wrote CNF to {path:?}");
    }

    let verdict = oracle.solve(&formula)?;
    let selection = faculty_sat::decode(&problem, &verdict)?;

    if let Selection::Selected(teachers) = &selection {
        if !problem.admits(teachers) {
            warn!("Decoded selection {teachers:?} does not solve the problem");
        }
    }

    match &cli.output {
        Some(path) => io::write_selection(&mut File::create(path)?, &selection)?,
        None => {
            let mut stdout = std::io::stdout();
            io::write_selection(&mut stdout, &selection)?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        println!("c {e}");
        match e {
            ErrorKind::Oracle(_) => std::process::exit(2),
            _ => std::process::exit(1),
        }
    }
}

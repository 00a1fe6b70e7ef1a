use std::{
    collections::BTreeSet,
    io::{BufRead, BufReader, BufWriter, Read, Write},
};

use crate::{
    decoder::Selection,
    err::{ErrorKind, OracleError, ParseError},
    problem::Problem,
    types::{Formula, Lit, Verdict},
};

fn parse_header(line: &str, line_no: usize) -> Result<(usize, usize, usize), ParseError> {
    let parts = line
        .split_whitespace()
        .map(|word| word.parse::<usize>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| ParseError::Header { line: line_no })?;

    match parts[..] {
        [teachers, subjects, required] => Ok((teachers, subjects, required)),
        _ => Err(ParseError::Header { line: line_no }),
    }
}

/// Reads a problem: a `T S K` line, then one row per teacher listing the 0-based subjects
/// they teach. Lines starting with `c` are comments.
pub fn read_problem(reader: &mut impl Read) -> Result<Problem, ErrorKind> {
    let mut lines = BufReader::new(reader)
        .lines()
        .enumerate()
        .map(|(i, line)| line.map(|line| (i + 1, line)))
        .filter(|line| !matches!(line, Ok((_, line)) if line.starts_with('c')));

    let (teachers, subjects, required) = loop {
        let Some(line) = lines.next() else {
            return Err(ParseError::MissingHeader.into());
        };
        let (line_no, line) = line?;

        if line.trim().is_empty() {
            continue;
        }
        break parse_header(&line, line_no)?;
    };

    let mut taught_by = Vec::with_capacity(teachers);
    while taught_by.len() < teachers {
        let Some(line) = lines.next() else {
            return Err(ParseError::MissingTeachers {
                expected: teachers,
                found: taught_by.len(),
            }
            .into());
        };
        let (line_no, line) = line?;

        let mut taught = BTreeSet::new();
        for word in line.split_whitespace() {
            let subject = word.parse::<usize>().map_err(|_| ParseError::Subject {
                line: line_no,
                token: word.to_string(),
            })?;
            taught.insert(subject);
        }
        taught_by.push(taught);
    }

    for line in lines {
        let (line_no, line) = line?;
        if !line.trim().is_empty() {
            return Err(ParseError::ExtraRow { line: line_no }.into());
        }
    }

    let problem = Problem::new(teachers, subjects, required, taught_by).map_err(ParseError::from)?;
    Ok(problem)
}

/// Writes `formula` in DIMACS CNF.
pub fn write_formula(writer: &mut impl Write, formula: &Formula) -> std::io::Result<()> {
    let mut writer = BufWriter::new(writer);
    writeln!(
        writer,
        "p cnf {} {}",
        formula.var_count(),
        formula.clause_count()
    )?;

    for clause in formula.clauses() {
        let clause_str = clause
            .iter()
            .fold(String::new(), |str, lit| str + &lit.to_string() + " ");
        writeln!(writer, "{clause_str}0")?;
    }

    writer.flush()
}

/// Reads a solver verdict in the SAT competition output format:
/// an `s` status line and, if satisfiable, `v` lines of literals ending with `0`.
pub fn read_solution(reader: &mut impl Read) -> Result<Verdict, OracleError> {
    let mut status = None;
    let mut model: Vec<Lit> = vec![];

    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let malformed = || OracleError::Malformed {
            line: i + 1,
            content: line.clone(),
        };

        let mut words = line.split_whitespace();
        match words.next() {
            None | Some("c") => continue,
            Some("s") => match words.next() {
                Some("SATISFIABLE") => status = Some(true),
                Some("UNSATISFIABLE") => status = Some(false),
                Some("UNKNOWN") => return Err(OracleError::Inconclusive),
                _ => return Err(malformed()),
            },
            Some("v") => {
                for word in words {
                    match word.parse::<Lit>().map_err(|_| malformed())? {
                        0 => (),
                        lit => model.push(lit),
                    }
                }
            }
            Some(_) => return Err(malformed()),
        }
    }

    match status {
        Some(true) => Ok(Verdict::Sat { model }),
        Some(false) => Ok(Verdict::Unsat),
        None => Err(OracleError::MissingStatus),
    }
}

/// Writes a selection with 1-based teacher numbers.
pub fn write_selection(writer: &mut impl Write, selection: &Selection) -> std::io::Result<()> {
    let mut writer = BufWriter::new(writer);

    match selection {
        Selection::NoSolution => writeln!(writer, "There is no solution.")?,
        Selection::Selected(teachers) => {
            let teachers_str = teachers
                .iter()
                .map(|teacher| format!("Teacher {}", teacher + 1))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(
                writer,
                "The teachers that have been selected are (starting from 1): {teachers_str}"
            )?;
        }
    }

    writer.flush()
}

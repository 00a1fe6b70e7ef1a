use std::{collections::BTreeSet, fs};

use rand::{rngs::StdRng, Rng, SeedableRng};

use faculty_sat::{
    config::Config,
    decoder::{self, Selection},
    encoder, io,
    oracle::{Dpll, Exhaustive, Oracle},
    problem::Problem,
    types::Verdict,
};

fn test_dir(path: &str, sat: bool, oracle: &mut impl Oracle) {
    for entry in fs::read_dir(path).unwrap() {
        let path = entry.unwrap().path();
        let mut file = fs::File::open(&path).unwrap();

        let problem = io::read_problem(&mut file).unwrap();
        let selection = faculty_sat::solve(&problem, oracle, &Config::default()).unwrap();
        match selection {
            Selection::Selected(teachers) => {
                assert!(sat, "{path:?} should be unsatisfiable");
                assert!(problem.admits(&teachers), "{path:?}: {teachers:?}");
            }
            Selection::NoSolution => assert!(!sat, "{path:?} should be satisfiable"),
        }
    }
}

fn random_problem(rng: &mut StdRng, max_teachers: usize, max_subjects: usize) -> Problem {
    let teachers = rng.gen_range(1..=max_teachers);
    let subjects = rng.gen_range(0..=max_subjects);
    let required = rng.gen_range(0..=teachers);
    let taught_by: Vec<BTreeSet<usize>> = (0..teachers)
        .map(|_| (0..subjects).filter(|_| rng.gen_bool(0.4)).collect())
        .collect();
    Problem::new(teachers, subjects, required, taught_by).unwrap()
}

/// Whether some `required`-subset of teachers covers every subject.
fn brute_force(problem: &Problem) -> bool {
    (0u32..1 << problem.teachers())
        .filter(|mask| mask.count_ones() as usize == problem.required())
        .any(|mask| {
            let selected: Vec<usize> = (0..problem.teachers())
                .filter(|t| mask & (1 << t) != 0)
                .collect();
            problem.admits(&selected)
        })
}

#[test]
fn sat_dpll() {
    test_dir("tests/data/sat", true, &mut Dpll::new());
}

#[test]
fn unsat_dpll() {
    test_dir("tests/data/unsat", false, &mut Dpll::new());
}

#[test]
fn one_of_two() {
    let input = b"2 1 1\n0\n0\n";
    let problem = io::read_problem(&mut input.as_slice()).unwrap();
    let formula = encoder::encode(&problem).unwrap();
    let index = encoder::indexer(&problem).unwrap();

    let selection = decoder::decode(&index, &Exhaustive::default().solve(&formula).unwrap());
    assert!(
        selection == Selection::Selected(vec![0]) || selection == Selection::Selected(vec![1])
    );

    let mut out: Vec<u8> = vec![];
    io::write_selection(&mut out, &selection).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert!(out.starts_with("The teachers that have been selected are (starting from 1): Teacher "));
}

#[test]
fn no_single_teacher_covers_both() {
    let input = b"2 2 1\n0\n1\n";
    let problem = io::read_problem(&mut input.as_slice()).unwrap();
    let formula = encoder::encode(&problem).unwrap();

    for verdict in [
        Exhaustive::default().solve(&formula).unwrap(),
        Dpll::new().solve(&formula).unwrap(),
    ] {
        assert_eq!(verdict, Verdict::Unsat);
        let index = encoder::indexer(&problem).unwrap();
        assert_eq!(decoder::decode(&index, &verdict), Selection::NoSolution);
    }
}

#[test]
/// Encode, solve exhaustively, decode, and compare with a direct search over selections.
fn round_trip_exhaustive() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut oracle = Exhaustive::new(16);

    for _ in 0..60 {
        // at most 3 * 3 + 3 variables
        let problem = random_problem(&mut rng, 3, 3);
        let selection = faculty_sat::solve(&problem, &mut oracle, &Config::default()).unwrap();

        match selection {
            Selection::Selected(teachers) => {
                assert!(problem.admits(&teachers), "{problem:?}: {teachers:?}");
            }
            Selection::NoSolution => assert!(!brute_force(&problem), "{problem:?}"),
        }
    }
}

#[test]
fn round_trip_dpll() {
    let mut rng = StdRng::seed_from_u64(77);
    let mut oracle = Dpll::new();
    let config = Config {
        threads: Some(3),
        ..Default::default()
    };

    for _ in 0..100 {
        let problem = random_problem(&mut rng, 6, 6);
        let selection = faculty_sat::solve(&problem, &mut oracle, &config).unwrap();

        match selection {
            Selection::Selected(teachers) => {
                assert_eq!(teachers.len(), problem.required());
                assert!(problem.admits(&teachers), "{problem:?}: {teachers:?}");
            }
            Selection::NoSolution => assert!(!brute_force(&problem), "{problem:?}"),
        }
    }
}

#[test]
/// The serial and threaded settings hand the oracle the same formula, and the CLI steps agree with `solve`.
fn encode_then_decode() {
    let mut rng = StdRng::seed_from_u64(5);
    let threaded = Config {
        threads: Some(4),
        ..Default::default()
    };

    for _ in 0..30 {
        let problem = random_problem(&mut rng, 5, 5);
        let formula = faculty_sat::encode(&problem, &Config::default()).unwrap();
        assert_eq!(faculty_sat::encode(&problem, &threaded).unwrap(), formula);

        let verdict = Dpll::new().solve(&formula).unwrap();
        assert_eq!(
            faculty_sat::decode(&problem, &verdict).unwrap(),
            faculty_sat::solve(&problem, &mut Dpll::new(), &threaded).unwrap()
        );
    }

    let problem = io::read_problem(&mut b"2 2 1\n0\n1\n".as_slice()).unwrap();
    assert_eq!(
        faculty_sat::decode(&problem, &Verdict::Unsat).unwrap(),
        Selection::NoSolution
    );
}

#[test]
fn dimacs_header() {
    let mut file = fs::File::open("tests/data/sat/three_of_five.txt").unwrap();
    let problem = io::read_problem(&mut file).unwrap();
    let formula = encoder::encode(&problem).unwrap();

    let mut buf: Vec<u8> = vec![];
    io::write_formula(&mut buf, &formula).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let mut lines = text.lines();

    // 20 facts, 4 * 2^5 coverage, C(5, 4) + C(5, 3) cardinality
    assert_eq!(lines.next(), Some("p cnf 25 163"));
    assert_eq!(lines.clone().count(), 163);
    assert!(lines.all(|line| line.ends_with(" 0") && !line.contains(" 0 ")));
}

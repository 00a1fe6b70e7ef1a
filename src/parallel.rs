use std::{ops::Range, sync::mpsc::channel, thread};

use crate::{
    encoder::{self, cardinality, coverage, facts},
    err::EncodeError,
    problem::Problem,
    types::{Clause, Formula},
};

/// Splits `0..len` into at most `n` contiguous, non-empty chunks of near equal size.
fn chunks(len: usize, n: usize) -> Vec<Range<usize>> {
    let n = n.clamp(1, len.max(1));
    let (size, rest) = (len / n, len % n);

    let mut ranges = Vec::with_capacity(n);
    let mut start = 0;
    for i in 0..n {
        let end = start + size + usize::from(i < rest);
        if start < end {
            ranges.push(start..end);
        }
        start = end;
    }
    ranges
}

/// As [encoder::encode], with subject coverage split between `n` threads.
///
/// The formula is identical to the serial one, clause order included.
pub fn encode(problem: &Problem, n: Option<usize>) -> Result<Formula, EncodeError> {
    let n = n.unwrap_or(
        thread::available_parallelism()
            .map(|val| val.get())
            .unwrap_or(2),
    );

    let index = encoder::indexer(problem)?;
    let ranges = chunks(problem.subjects(), n);

    let (tx, rx) = channel::<(usize, Vec<Clause>)>();

    let coverage_chunks: Vec<Vec<Clause>> = thread::scope(|scope| {
        for (i, range) in ranges.iter().enumerate() {
            let thread_tx = tx.clone();
            let range = range.clone();
            let index = &index;
            scope.spawn(move || {
                let clauses = coverage::encode_subjects(problem, index, range);
                let _ = thread_tx.send((i, clauses));
            });
        }

        // receiver blocks as long as some transmitter is alive
        drop(tx);

        let mut received = vec![vec![]; ranges.len()];
        for (i, clauses) in rx {
            received[i] = clauses;
        }
        received
    });

    let facts = facts::encode(problem, &index);
    let cardinality = cardinality::exactly(
        &encoder::selections(problem, &index),
        problem.required(),
    );

    let coverage = coverage_chunks.into_iter().flatten().collect();
    encoder::assemble(&index, facts, coverage, cardinality)
}

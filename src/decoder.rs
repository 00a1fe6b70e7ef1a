use std::collections::BTreeSet;

use log::debug;

use crate::{
    encoder::index::Indexer,
    misc::log::targets,
    types::{to_var, Verdict},
};

/// What a verdict says about the teachers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// 0-based teacher indices, increasing.
    Selected(Vec<usize>),
    NoSolution,
}

/// Reads the selected teachers off a verdict.
///
/// Only positive selection literals count; anything the model omits is unselected.
pub fn decode(index: &Indexer, verdict: &Verdict) -> Selection {
    match verdict {
        Verdict::Unsat => {
            debug!(target: targets::DECODER, "No model to decode");
            Selection::NoSolution
        }
        Verdict::Sat { model } => {
            let selected: BTreeSet<usize> = model
                .iter()
                .filter(|lit| lit.is_positive())
                .filter_map(|&lit| index.teacher(to_var(lit)))
                .collect();

            debug!(target: targets::DECODER, "Selected {} teachers", selected.len());
            Selection::Selected(selected.into_iter().collect())
        }
    }
}

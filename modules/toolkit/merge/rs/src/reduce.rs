use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;
use log::info;
use temerge_core_rs::loc::Flanks;
use temerge_core_rs::Insertion;

use crate::master::Master;

/// Outcome of folding one list of candidates into the master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Constructor, Getters)]
pub struct Pass {
    candidates: usize,
    merged: usize,
}

impl Pass {
    /// Candidates that did not match any master entry and were appended.
    pub fn appended(&self) -> usize {
        self.candidates - self.merged
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Dissolve)]
pub struct Reduction {
    records: Vec<Insertion>,
    passes: Vec<Pass>,
}

impl Reduction {
    /// Total number of merged candidates over all passes.
    pub fn merged(&self) -> usize {
        self.passes.iter().map(|x| x.merged).sum()
    }
}

/// Sequentially fold per-sample insertion lists into one master list.
///
/// The first list becomes the master as is: its own records are never merged with each other.
/// Every following list is folded into the master in turn, so the order of the lists affects the
/// final grouping. One `Pass` is reported per folded list (none for the first one).
pub fn reduce(lists: impl IntoIterator<Item = Vec<Insertion>>, flanks: Flanks) -> Reduction {
    let mut lists = lists.into_iter();
    let mut master = match lists.next() {
        Some(first) => Master::new(first, flanks),
        None => return Reduction::default(),
    };

    let mut passes = Vec::new();
    for candidates in lists {
        let total = candidates.len();
        let merged = master.merge_all(candidates);
        info!("Found {} mergeable insertions", merged);
        passes.push(Pass::new(total, merged));
    }

    Reduction {
        records: master.into_records(),
        passes,
    }
}

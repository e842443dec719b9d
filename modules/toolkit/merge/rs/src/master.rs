use log::debug;
use temerge_core_rs::insertion::{intervals_overlap, te_sets_intersect};
use temerge_core_rs::loc::Flanks;
use temerge_core_rs::Insertion;

use crate::fold::fold_records;

/// Index of the first master entry the candidate can be merged into, if any.
///
/// An entry qualifies when the insertion sites overlap within the flanks, at least one TE
/// identifier is shared, the insertion contigs are equal and, finally, the reference contig and
/// reference start agree. Before the last check, a candidate with fewer TE identifiers than the
/// entry adopts the entry's reference span. The adopted span belongs to this scan only and stays
/// in effect for the entries that follow.
pub fn find_match(master: &[Insertion], candidate: &Insertion, flanks: &Flanks) -> Option<usize> {
    let mut reference = candidate.reference().span;

    for (ind, entry) in master.iter().enumerate() {
        if !intervals_overlap(entry, candidate, flanks)
            || !te_sets_intersect(entry.te_ids(), candidate.te_ids())
            || !entry.insertion().same_contig(candidate.insertion())
        {
            continue;
        }

        if candidate.te_ids().len() < entry.te_ids().len() {
            reference = entry.reference().span;
        }

        if entry.reference().span.start() == reference.start()
            && entry.reference().same_contig(candidate.reference())
        {
            return Some(ind);
        }
    }
    None
}

/// Merge the candidate into the first matching master entry. Returns `false` (and leaves the
/// master untouched) if no entry matches.
pub fn can_merge_into_master(
    master: &mut [Insertion],
    candidate: &Insertion,
    flanks: &Flanks,
) -> bool {
    match find_match(master, candidate, flanks) {
        Some(ind) => {
            master[ind] = fold_records(&master[ind], candidate);
            true
        }
        None => false,
    }
}

/// Fold all candidates into the master list, in order. Returns the updated master and the number
/// of candidates that were merged (as opposed to appended).
pub fn merge_all(
    master: Vec<Insertion>,
    candidates: impl IntoIterator<Item = Insertion>,
    flanks: &Flanks,
) -> (Vec<Insertion>, usize) {
    let mut master = Master::new(master, *flanks);
    let merged = master.merge_all(candidates);
    (master.into_records(), merged)
}

/// The accumulating set of merged insertions.
///
/// Entries are only ever replaced by their fold with a candidate or appended, never removed, and
/// the master keeps the order in which entries were first added.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Master {
    records: Vec<Insertion>,
    flanks: Flanks,
}

impl Master {
    /// Start a master list from the given records, taken verbatim (no deduplication).
    pub fn new(records: Vec<Insertion>, flanks: Flanks) -> Self {
        Self { records, flanks }
    }

    pub fn records(&self) -> &[Insertion] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Insertion> {
        self.records
    }

    pub fn find_match(&self, candidate: &Insertion) -> Option<usize> {
        find_match(&self.records, candidate, &self.flanks)
    }

    fn fold_at(&mut self, ind: usize, candidate: &Insertion) {
        self.records[ind] = fold_records(&self.records[ind], candidate);
    }

    pub fn can_merge_into_master(&mut self, candidate: &Insertion) -> bool {
        match self.find_match(candidate) {
            Some(ind) => {
                debug!(
                    "Insertion {} ({}) merged into {}",
                    candidate.insertion(),
                    candidate.sample_ids().join(","),
                    self.records[ind].insertion()
                );
                self.fold_at(ind, candidate);
                true
            }
            None => false,
        }
    }

    /// Merge or append every candidate. Returns the number of merged candidates.
    pub fn merge_all(&mut self, candidates: impl IntoIterator<Item = Insertion>) -> usize {
        let mut merged = 0;
        for candidate in candidates {
            if self.can_merge_into_master(&candidate) {
                merged += 1;
            } else {
                self.records.push(candidate);
            }
        }
        merged
    }
}

use temerge_core_rs::Insertion;

/// Combine a master entry with a matching candidate. Samples and TE identifiers of the candidate
/// that are not in the master yet are appended; all coordinates come from the master.
pub fn fold_records(master: &Insertion, candidate: &Insertion) -> Insertion {
    let mut folded = master.clone();
    folded.absorb(candidate);
    folded
}

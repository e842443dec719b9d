use super::record::Insertion;
use crate::loc::Flanks;

/// True iff `item` is present anywhere in `set` (exact string equality, no normalization).
pub fn set_contains(set: &[String], item: &str) -> bool {
    set.iter().any(|x| x == item)
}

/// True iff any identifier of `b` also appears in `a`. Stops at the first shared identifier.
pub fn te_sets_intersect(a: &[String], b: &[String]) -> bool {
    b.iter().any(|te| set_contains(a, te))
}

/// Flank-relaxed overlap of the insertion sites: `master.start <= candidate.end + flanks.right`
/// and `candidate.start <= master.end + flanks.left`. Contigs are not compared here.
///
/// The arguments are not interchangeable when the flanks differ.
pub fn intervals_overlap(master: &Insertion, candidate: &Insertion, flanks: &Flanks) -> bool {
    master
        .insertion()
        .span
        .overlaps_flanked(&candidate.insertion().span, flanks)
}

//! Collapses TE calls that describe the same biological event across samples.
//!
//! Insertions are folded into an accumulating master list: each candidate is compared with the
//! master entries in order and merged into the first one that overlaps it (within flanks), shares
//! a TE identifier and agrees on the reference placement. Candidates without a match become new
//! master entries. The result depends on the order of the inputs and is not a globally optimal
//! clustering.

pub use deletions::{flip_deletions, merge_deletions};
pub use fold::fold_records;
pub use master::{can_merge_into_master, find_match, merge_all, Master};
pub use reduce::{reduce, Pass, Reduction};

mod deletions;
mod fold;
mod master;
mod reduce;

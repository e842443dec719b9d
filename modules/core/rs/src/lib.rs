//! Record model shared by the temerge crates: genomic coordinates, TE insertion and deletion calls,
//! and the pure predicates used to decide whether two insertion calls describe the same event.

pub use deletion::Deletion;
pub use insertion::Insertion;

pub mod deletion;
pub mod insertion;
pub mod loc;

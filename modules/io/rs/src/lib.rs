//! Tab-delimited input/output for TE calls.
//!
//! Insertion files carry one call per line with seven mandatory columns
//! (insertion site, reference site, comma-separated TE identifiers). The sample a call belongs
//! to is not a column: it is derived from the file name, see [`sample::sample_ids_from_path`].

pub mod compression;
pub mod deletion;
pub mod insertion;
pub mod parse;
pub mod sample;
mod traits;

pub use parse::ParsePolicy;
pub use traits::{ReadRecord, WriteRecord};

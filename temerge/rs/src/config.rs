use std::path::PathBuf;
use temerge_core_rs::loc::Flanks;
use temerge_io_rs::ParsePolicy;

/// Validated settings of `merge-insertions`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertionsConfig {
    /// Per-sample insertion calls, folded in this order. The first file seeds the master list.
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
    pub flanks: Flanks,
    pub policy: ParsePolicy,
}

/// Validated settings of `merge-deletions`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionsConfig {
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
    pub policy: ParsePolicy,
}

/// Validated settings of `flip-deletions`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlipConfig {
    /// All samples of the experiment, in output order.
    pub samples: Vec<String>,
    /// Merged deletions, as written by `merge-deletions`.
    pub deletions: PathBuf,
    /// Sample the reference genome was built from. It carries every reference TE.
    pub reference: String,
    pub output: PathBuf,
    pub policy: ParsePolicy,
}

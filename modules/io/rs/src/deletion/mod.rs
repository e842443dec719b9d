// Deletion calls come in three tab-delimited layouts:
// Raw     - chrom, start, end, strand, TE id[, ...]; the sample is the file name
// Merged  - chrom, start, end, strand, TE id, samples (comma-separated)
// Flipped - chrom, start, end, TE id, samples (comma-separated); no strand, output only
// Strand is one of `+`, `-` or `.`.

mod reader;
mod writer;

pub use reader::{parse, Reader};
pub use writer::Writer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    Raw,
    Merged,
    Flipped,
}

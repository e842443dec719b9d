// Column layout (tab-delimited, no header):
// 1. insertion chrom
// 2. insertion start: i64
// 3. insertion end: i64
// 4. reference chrom
// 5. reference start: i64
// 6. reference end: i64
// 7. TE identifiers, comma-separated
// Any further columns (e.g. read support) are ignored on input.
// Merged output appends an 8th column with comma-separated sample identifiers.

mod reader;
mod writer;

pub use reader::{parse, Reader};
pub use writer::Writer;

pub const FIELDS: usize = 7;

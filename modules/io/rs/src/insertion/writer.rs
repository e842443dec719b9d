use crate::{compression, WriteRecord};
use eyre::{Result, WrapErr};
use itertools::Itertools;
use std::io::Write;
use std::path::Path;
use temerge_core_rs::Insertion;

/// Writes merged insertions: the seven input columns followed by the sample identifiers.
pub struct Writer<W> {
    writer: W,
}

impl<W: Write> Writer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl Writer<()> {
    /// Create the output file. Paths ending in `.gz` are gzip-encoded.
    pub fn from_path(
        path: impl AsRef<Path>,
    ) -> Result<Box<dyn WriteRecord<Record = Insertion> + Send + Sync + 'static>> {
        let stream = compression::create_file(path)?.box_write();
        Ok(Box::new(Writer::new(stream)))
    }
}

impl<W: Write> WriteRecord for Writer<W> {
    type Record = Insertion;

    fn write_record(&mut self, record: &Insertion) -> Result<()> {
        let (insertion, reference) = (record.insertion(), record.reference());
        writeln!(
            self.writer,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            insertion.contig,
            insertion.span.start(),
            insertion.span.end(),
            reference.contig,
            reference.span.start(),
            reference.span.end(),
            record.te_ids().iter().join(","),
            record.sample_ids().iter().join(","),
        )
        .wrap_err("Cannot write insertion record")
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush().wrap_err("Cannot flush insertion records")
    }
}

use super::Layout;
use crate::{compression, WriteRecord};
use eyre::{Result, WrapErr};
use itertools::Itertools;
use std::io::Write;
use std::path::Path;
use temerge_core_rs::Deletion;

pub struct Writer<W> {
    writer: W,
    layout: Layout,
}

impl<W: Write> Writer<W> {
    pub fn new(writer: W, layout: Layout) -> Self {
        Self { writer, layout }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl Writer<()> {
    pub fn from_path(
        path: impl AsRef<Path>,
        layout: Layout,
    ) -> Result<Box<dyn WriteRecord<Record = Deletion> + Send + Sync + 'static>> {
        let stream = compression::create_file(path)?.box_write();
        Ok(Box::new(Writer::new(stream, layout)))
    }
}

impl<W: Write> WriteRecord for Writer<W> {
    type Record = Deletion;

    fn write_record(&mut self, record: &Deletion) -> Result<()> {
        let site = record.site();
        let (contig, start, end) = (&site.contig, site.span.start(), site.span.end());
        let written = match self.layout {
            Layout::Raw => writeln!(
                self.writer,
                "{}\t{}\t{}\t{}\t{}",
                contig,
                start,
                end,
                record.orientation(),
                record.te_id()
            ),
            Layout::Merged => writeln!(
                self.writer,
                "{}\t{}\t{}\t{}\t{}\t{}",
                contig,
                start,
                end,
                record.orientation(),
                record.te_id(),
                record.sample_ids().iter().join(",")
            ),
            Layout::Flipped => writeln!(
                self.writer,
                "{}\t{}\t{}\t{}\t{}",
                contig,
                start,
                end,
                record.te_id(),
                record.sample_ids().iter().join(",")
            ),
        };
        written.wrap_err("Cannot write deletion record")
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush().wrap_err("Cannot flush deletion records")
    }
}

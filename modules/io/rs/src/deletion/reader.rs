use super::Layout;
use crate::parse::{LineRef, ParsePolicy};
use crate::{compression, sample, ReadRecord};
use eyre::{bail, ensure, Result, WrapErr};
use std::io::BufRead;
use std::path::Path;
use temerge_core_rs::loc::{Orientation, Site};
use temerge_core_rs::Deletion;

pub mod parse {
    use super::*;
    use crate::parse::{coordinate, field, identifiers};

    pub fn site<'a>(
        parts: &mut impl Iterator<Item = &'a str>,
        policy: ParsePolicy,
        at: &LineRef,
    ) -> Result<Site> {
        let contig = field(parts, "chrom")?;
        ensure!(!contig.is_empty(), "Empty deletion chrom");
        let start = coordinate(field(parts, "start")?, "start", policy, at)?;
        let end = coordinate(field(parts, "end")?, "end", policy, at)?;
        Ok(Site::from((contig, start, end)))
    }

    pub fn orientation<'a>(parts: &mut impl Iterator<Item = &'a str>) -> Result<Orientation> {
        Orientation::try_from(field(parts, "strand")?)
    }

    /// Parse a `Raw` or `Merged` line. `sample_ids` are used for `Raw` lines only.
    pub fn deletion(
        line: &str,
        layout: Layout,
        sample_ids: &[String],
        policy: ParsePolicy,
        at: &LineRef,
    ) -> Result<Deletion> {
        let expected = match layout {
            Layout::Raw => 5,
            Layout::Merged => 6,
            Layout::Flipped => bail!("Flipped deletions have no strand and can't be read"),
        };
        let columns = line.split('\t').count();
        ensure!(
            columns >= expected,
            "Deletion record has {} columns, expected at least {}",
            columns,
            expected
        );

        let mut parts = line.split('\t');
        let site = site(&mut parts, policy, at)?;
        let orientation = orientation(&mut parts)?;
        let te_id = field(&mut parts, "TE identifier")?;
        let samples = match layout {
            Layout::Raw => sample_ids.to_vec(),
            _ => identifiers(field(&mut parts, "samples")?, "samples")?,
        };

        Deletion::new(site, orientation, te_id, samples)
    }
}

pub struct Reader<R> {
    reader: R,
    buffer: String,
    line: usize,
    source: String,
    layout: Layout,
    sample_ids: Vec<String>,
    policy: ParsePolicy,
}

impl<R> Reader<R> {
    /// Reader of deletion calls. `sample_ids` are attached to every record of a `Raw` input and
    /// ignored otherwise.
    pub fn new(
        reader: R,
        source: impl Into<String>,
        layout: Layout,
        sample_ids: Vec<String>,
        policy: ParsePolicy,
    ) -> Result<Self> {
        let source = source.into();
        ensure!(
            layout != Layout::Flipped,
            "Flipped deletions can't be read back ({})",
            source
        );
        ensure!(
            layout != Layout::Raw || !sample_ids.is_empty(),
            "Raw deletions from {} need at least one sample identifier",
            source
        );
        Ok(Self {
            reader,
            buffer: String::new(),
            line: 0,
            source,
            layout,
            sample_ids,
            policy,
        })
    }
}

impl Reader<Box<dyn BufRead + Send + Sync + 'static>> {
    pub fn from_path(path: impl AsRef<Path>, layout: Layout, policy: ParsePolicy) -> Result<Self> {
        let path = path.as_ref();
        let sample_ids = match layout {
            Layout::Raw => sample::sample_ids_from_path(path)?,
            _ => Vec::new(),
        };
        let stream = compression::read_file(path)?.box_bufread();
        Reader::new(stream, path.display().to_string(), layout, sample_ids, policy)
    }
}

impl<R: BufRead> ReadRecord for Reader<R> {
    type Record = Deletion;

    fn read_record(&mut self) -> Result<Option<Deletion>> {
        loop {
            self.buffer.clear();
            let read = self
                .reader
                .read_line(&mut self.buffer)
                .wrap_err_with(|| format!("Failed to read from {}", self.source))?;
            if read == 0 {
                return Ok(None);
            }
            self.line += 1;

            let line = self.buffer.trim_end_matches(|c| c == '\n' || c == '\r');
            if line.trim().is_empty() {
                continue;
            }

            let at = LineRef::new(&self.source, self.line);
            let record = parse::deletion(line, self.layout, &self.sample_ids, self.policy, &at)
                .wrap_err_with(|| format!("Failed to parse deletion record at {}: {}", at, line))?;
            return Ok(Some(record));
        }
    }
}

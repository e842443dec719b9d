use crate::parse::{LineRef, ParsePolicy};
use crate::{compression, sample, ReadRecord};
use eyre::{ensure, Result, WrapErr};
use std::io::BufRead;
use std::path::Path;
use temerge_core_rs::loc::Site;
use temerge_core_rs::Insertion;

pub mod parse {
    use super::*;
    use crate::insertion::FIELDS;
    use crate::parse::{coordinate, field, identifiers};

    pub fn site<'a>(
        parts: &mut impl Iterator<Item = &'a str>,
        what: &str,
        policy: ParsePolicy,
        at: &LineRef,
    ) -> Result<Site> {
        let contig = field(parts, &format!("{} chrom", what))?;
        ensure!(!contig.is_empty(), "Empty {} chrom", what);

        let name = format!("{} start", what);
        let start = coordinate(field(parts, &name)?, &name, policy, at)?;
        let name = format!("{} end", what);
        let end = coordinate(field(parts, &name)?, &name, policy, at)?;

        Ok(Site::from((contig, start, end)))
    }

    pub fn te_ids<'a>(parts: &mut impl Iterator<Item = &'a str>) -> Result<Vec<String>> {
        identifiers(field(parts, "TE identifiers")?, "TE identifiers")
    }

    /// Parse a single line (without the line terminator) into an insertion observed in
    /// `sample_ids`.
    pub fn insertion(
        line: &str,
        sample_ids: &[String],
        policy: ParsePolicy,
        at: &LineRef,
    ) -> Result<Insertion> {
        let columns = line.split('\t').count();
        ensure!(
            columns >= FIELDS,
            "Insertion record has {} columns, expected at least {}",
            columns,
            FIELDS
        );

        let mut parts = line.split('\t');
        let insertion = site(&mut parts, "insertion", policy, at)?;
        let reference = site(&mut parts, "reference", policy, at)?;
        let te_ids = te_ids(&mut parts)?;

        Insertion::new(insertion, reference, te_ids, sample_ids.iter().cloned())
    }
}

pub struct Reader<R> {
    reader: R,
    buffer: String,
    line: usize,
    source: String,
    sample_ids: Vec<String>,
    policy: ParsePolicy,
}

impl<R> Reader<R> {
    /// Reader of insertions observed in `sample_ids`. `source` names the input in messages.
    pub fn new(
        reader: R,
        source: impl Into<String>,
        sample_ids: Vec<String>,
        policy: ParsePolicy,
    ) -> Result<Self> {
        let source = source.into();
        ensure!(
            !sample_ids.is_empty(),
            "Insertions from {} need at least one sample identifier",
            source
        );
        Ok(Self {
            reader,
            buffer: String::new(),
            line: 0,
            source,
            sample_ids,
            policy,
        })
    }

    pub fn sample_ids(&self) -> &[String] {
        &self.sample_ids
    }
}

impl Reader<Box<dyn BufRead + Send + Sync + 'static>> {
    /// Open an insertion file. The sample identifiers are derived from the file name and gzip
    /// input is decoded transparently.
    pub fn from_path(path: impl AsRef<Path>, policy: ParsePolicy) -> Result<Self> {
        let path = path.as_ref();
        let sample_ids = sample::sample_ids_from_path(path)?;
        let stream = compression::read_file(path)?.box_bufread();
        Reader::new(stream, path.display().to_string(), sample_ids, policy)
    }
}

impl<R: BufRead> ReadRecord for Reader<R> {
    type Record = Insertion;

    fn read_record(&mut self) -> Result<Option<Insertion>> {
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
            let record = parse::insertion(line, &self.sample_ids, self.policy, &at)
                .wrap_err_with(|| format!("Failed to parse insertion record at {}: {}", at, line))?;
            return Ok(Some(record));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    fn reader(content: &str, policy: ParsePolicy) -> Reader<Cursor<String>> {
        Reader::new(
            Cursor::new(content.to_owned()),
            "test.bed",
            vec!["test".to_owned()],
            policy,
        )
        .unwrap()
    }

    #[test]
    fn test_empty_input() -> Result<()> {
        let mut reader = reader("", ParsePolicy::Strict);
        assert!(reader.read_record()?.is_none());

        let mut records = Vec::new();
        assert_eq!(reader.read_to_end(&mut records)?, 0);
        Ok(())
    }

    #[test]
    fn test_valid_records() -> Result<()> {
        let content = "\
chr1\t100\t200\tchr5\t3000\t4500\tAT5G01010\n\
chr1\t900\t950\tchr1\t10\t20\tAT1G01010,AT1G01020\tread-42\r\n\
\n\
chr2\t5\t6\tchr2\t7\t8\tAT2G01010,\n";

        let mut records = Vec::new();
        let total = reader(content, ParsePolicy::Strict).read_to_end(&mut records)?;
        assert_eq!(total, 3);

        assert_eq!(
            records[0],
            Insertion::new(
                Site::from(("chr1", 100, 200)),
                Site::from(("chr5", 3000, 4500)),
                ["AT5G01010"],
                ["test"]
            )?
        );
        assert_eq!(records[1].te_ids(), &["AT1G01010", "AT1G01020"]);
        assert_eq!(records[1].reference(), &Site::from(("chr1", 10, 20)));
        assert_eq!(records[2].te_ids(), &["AT2G01010"]);
        assert_eq!(records[2].sample_ids(), &["test"]);
        Ok(())
    }

    #[test]
    fn test_too_few_columns() {
        let mut reader = reader("chr1\t100\t200\tchr5\t3000\t4500\n", ParsePolicy::Lenient);
        let err = reader.read_record().unwrap_err();
        assert!(format!("{:?}", err).contains("expected at least 7"));
    }

    #[test]
    fn test_strict_rejects_invalid_coordinates() {
        let mut reader = reader("chr1\t1OO\t200\tchr5\t3000\t4500\tTE\n", ParsePolicy::Strict);
        let err = reader.read_record().unwrap_err();
        let message = format!("{:?}", err);
        assert!(message.contains("test.bed:1"));
        assert!(message.contains("insertion start"));
    }

    #[test]
    fn test_lenient_coerces_invalid_coordinates() -> Result<()> {
        let mut reader = reader(
            "chr1\t1OO\t200\tchr5\tNA\t4500\tTE\n",
            ParsePolicy::Lenient,
        );
        let record = reader.read_record()?.unwrap();
        assert_eq!(record.insertion().span, (0, 200));
        assert_eq!(record.reference().span, (0, 4500));
        Ok(())
    }

    #[test]
    fn test_from_path_derives_samples() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("Ler-1.bed");
        std::fs::File::create(&path)?.write_all(b"chr1\t1\t2\tchr1\t3\t4\tTE1\n")?;

        let mut reader = Reader::from_path(&path, ParsePolicy::Strict)?;
        assert_eq!(reader.sample_ids(), &["Ler-1"]);
        let record = reader.read_record()?.unwrap();
        assert_eq!(record.sample_ids(), &["Ler-1"]);
        assert!(reader.read_record()?.is_none());
        Ok(())
    }
}

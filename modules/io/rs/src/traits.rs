use eyre::Result;

/// A trait for reading structured records. Modeled after the `Read` trait in the std.
pub trait ReadRecord {
    /// The type of the records that will be read.
    type Record;

    /// Read the next record from the input.
    /// Returns `None` if the end of the input was reached.
    fn read_record(&mut self) -> Result<Option<Self::Record>>;

    /// Read all remaining records and append them to the provided buffer. Returns the number of
    /// records read.
    fn read_to_end(&mut self, into: &mut Vec<Self::Record>) -> Result<usize> {
        let mut total = 0;
        while let Some(record) = self.read_record()? {
            into.push(record);
            total += 1;
        }
        Ok(total)
    }
}

/// A trait for writing structured records. Modeled after the `Write` trait in the std.
pub trait WriteRecord {
    type Record;

    /// Write a single record.
    fn write_record(&mut self, record: &Self::Record) -> Result<()>;

    /// Write a slice of records, stopping at the first error.
    fn write_records(&mut self, records: &[Self::Record]) -> Result<()> {
        for record in records {
            self.write_record(record)?;
        }
        Ok(())
    }

    /// Flush the output.
    fn flush(&mut self) -> Result<()>;
}

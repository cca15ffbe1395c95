//! CSV record source and sink.
//!
//! Both ends are thin wrappers around [`csv`]: sources yield parsed rows
//! lazily in file order, sinks write a header row followed by one row per
//! entry. Only headers and numeric fields are trimmed; account ids are
//! kept byte for byte.

use crate::{
    balance::BalanceStore,
    error::{LedgerError, Result},
    report::{ReportOutput, Reporter},
    transfer::{BalanceOutput, BalanceRecord, ParseRecord, TransferRecord},
};
use csv::{StringRecord, StringRecordsIntoIter, Trim};
use std::{
    fs::File,
    io::{Read, Write},
    marker::PhantomData,
    path::Path,
};

/// Lazy, non-restartable stream of parsed rows from a CSV source with a header row
pub struct CsvRecordSource<R, T> {
    headers: StringRecord,
    records: StringRecordsIntoIter<R>,
    _record: PhantomData<T>,
}

pub type BalanceSource<R> = CsvRecordSource<R, BalanceRecord>;
pub type TransferSource<R> = CsvRecordSource<R, TransferRecord>;

impl<R, T> CsvRecordSource<R, T>
where
    R: Read,
    T: ParseRecord,
{
    pub fn new(source: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(Trim::Headers)
            .flexible(true)
            .from_reader(source);

        let headers = reader.headers().map_err(LedgerError::from_csv)?.clone();

        Ok(Self {
            headers,
            records: reader.into_records(),
            _record: PhantomData,
        })
    }

    fn parse_row(&self, row: &StringRecord) -> Result<T::Output> {
        let line = row.position().map_or(0, csv::Position::line);
        let record: T = row
            .deserialize(Some(&self.headers))
            .map_err(|err| LedgerError::MalformedRecord {
                line,
                reason: err.to_string(),
            })?;

        record.parse(line)
    }
}

impl<T: ParseRecord> CsvRecordSource<File, T> {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LedgerError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::new(file)
    }
}

impl<R, T> Iterator for CsvRecordSource<R, T>
where
    R: Read,
    T: ParseRecord,
{
    type Item = Result<T::Output>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.records.next()?;

        Some(
            row.map_err(LedgerError::from_csv)
                .and_then(|row| self.parse_row(&row)),
        )
    }
}

pub fn open_balances(path: impl AsRef<Path>) -> Result<BalanceSource<File>> {
    CsvRecordSource::from_path(path)
}

pub fn open_transfers(path: impl AsRef<Path>) -> Result<TransferSource<File>> {
    CsvRecordSource::from_path(path)
}

/// Writes `Account,Balance` rows in store iteration order.
pub fn write_balances<W: Write>(output: W, store: &BalanceStore) -> Result<()> {
    let mut writer = headerless_writer(output);
    writer.write_record(["Account", "Balance"])?;

    for (account, balance) in store.iter() {
        writer.serialize(BalanceOutput { account, balance })?;
    }

    writer.flush().map_err(csv::Error::from)?;

    Ok(())
}

/// Writes `FromAccount,ToAccount,Amount,Outcome` rows in processing order.
pub fn write_report<W: Write>(output: W, reporter: &Reporter) -> Result<()> {
    let mut writer = headerless_writer(output);
    writer.write_record(["FromAccount", "ToAccount", "Amount", "Outcome"])?;

    for entry in reporter.entries() {
        writer.serialize(ReportOutput::from(entry))?;
    }

    writer.flush().map_err(csv::Error::from)?;

    Ok(())
}

// The header row is written explicitly so that empty sinks still get one.
fn headerless_writer<W: Write>(output: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(output)
}

pub fn create_file(path: impl AsRef<Path>) -> Result<File> {
    let path = path.as_ref();

    File::create(path).map_err(|source| LedgerError::Io {
        path: path.to_path_buf(),
        source,
    })
}

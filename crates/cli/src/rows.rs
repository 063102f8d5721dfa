//! CSV row source and sink for the command line host.

use crate::error::CliError;
use model::{
    core::value::Value,
    records::{meta::RowMeta, row::RowData},
};
use std::io::{Read, Write};

/// Read a CSV document with a header row. Records may be shorter or longer
/// than the header; empty cells become nulls.
pub fn read_rows<R: Read>(reader: R) -> Result<(RowMeta, Vec<RowData>), CliError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let meta = RowMeta::from_names(reader.headers()?.iter());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let values = record
            .iter()
            .map(|cell| {
                if cell.is_empty() {
                    Value::Null
                } else {
                    Value::String(cell.to_string())
                }
            })
            .collect();
        rows.push(RowData::new(values));
    }

    Ok((meta, rows))
}

/// Write rows as CSV with `meta` as the header. Nulls become empty cells.
pub fn write_rows<W: Write>(writer: W, meta: &RowMeta, rows: &[RowData]) -> Result<(), CliError> {
    let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(writer);

    writer.write_record(meta.field_names())?;
    for row in rows {
        writer.write_record(row.values().iter().map(|value| {
            if value.is_null() {
                String::new()
            } else {
                value.to_string()
            }
        }))?;
    }
    writer.flush()?;

    Ok(())
}

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use rayon::prelude::*;
use tracing::{debug, trace};

mod error;
mod sql_generator;
mod type_inference;
mod utils;

pub use error::{Csv2SqlError, Result};
pub use sql_generator::{escape_literal, generate_sql, render_row};
pub use type_inference::{classify_value, infer_sql_type, SqlType};
pub use utils::sanitize_column_name;

/// a parsed csv file: sanitized column names plus the raw data rows.
/// only [`read_csv`] builds one, so every row has exactly `columns().len()` fields.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvTable {
    columns: Vec<String>,
    rows: Vec<StringRecord>,
}

impl CsvTable {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[StringRecord] {
        &self.rows
    }
}

/// reads csv from any reader. the first record is the header, the rest are rows.
pub fn read_csv<R: Read>(reader: R) -> Result<CsvTable> {
    // length checks happen below so the error can name the row
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Err(Csv2SqlError::Empty);
    }

    let columns: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| sanitize_column_name(header, i + 1))
        .collect();

    let mut rows = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        if record.len() != columns.len() {
            return Err(Csv2SqlError::RowLength {
                row: i + 1,
                line: record.position().map_or(0, |pos| pos.line()),
                expected: columns.len(),
                found: record.len(),
            });
        }
        rows.push(record);
    }

    if rows.is_empty() {
        return Err(Csv2SqlError::NoRows);
    }

    debug!(columns = columns.len(), rows = rows.len(), "read csv");

    Ok(CsvTable { columns, rows })
}

/// opens `path` and reads it with [`read_csv`].
pub fn read_csv_file(path: &Path) -> Result<CsvTable> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => Csv2SqlError::NotFound {
            path: path.to_path_buf(),
        },
        _ => Csv2SqlError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    // a failed read after a successful open (a directory on unix) surfaces from the csv reader
    read_csv(BufReader::new(file)).map_err(|err| match err {
        Csv2SqlError::Csv(csv_err) if csv_err.is_io_error() => Csv2SqlError::Io {
            path: path.to_path_buf(),
            source: io::Error::from(csv_err),
        },
        other => other,
    })
}

/// infers one type per column. columns are independent, so they are scanned in parallel.
/// relies on every row having one field per column, which [`read_csv`] guarantees.
pub fn infer_schema(table: &CsvTable) -> Vec<SqlType> {
    (0..table.columns.len())
        .into_par_iter()
        .map(|i| {
            let column_data: Vec<&str> = table.rows.iter().map(|record| &record[i]).collect();
            let sql_type = infer_sql_type(&column_data);
            trace!(column = %table.columns[i], %sql_type, "inferred column type");
            sql_type
        })
        .collect()
}

/// reads the csv at `path` and returns the sql query reproducing it.
pub fn csv_to_sql(path: &Path) -> Result<String> {
    let table = read_csv_file(path)?;
    let types = infer_schema(&table);
    Ok(generate_sql(&table, &types))
}

use crate::error::SourceError;
use serde_json::{Map, Value};
use std::io::Read;

/// Flat tabular data: a header row and same-width rows of scalar cells.
///
/// Empty cells are stored as `Value::Null` and are treated as absent fields
/// when a row is turned into a record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SourceTable {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl SourceTable {
    /// Builds a table, padding short rows with nulls and truncating long ones
    /// so every row has exactly one cell per column.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Value::Null);
                row
            })
            .collect();
        Self { columns, rows }
    }

    /// Decodes CSV with a mandatory header row.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, SourceError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let columns: Vec<String> = csv_reader.headers()?.iter().map(String::from).collect();
        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            rows.push(
                record
                    .iter()
                    .map(|cell| {
                        if cell.is_empty() {
                            Value::Null
                        } else {
                            Value::String(cell.to_string())
                        }
                    })
                    .collect(),
            );
        }

        log::debug!("Decoded CSV table with {} columns and {} rows", columns.len(), rows.len());
        Ok(Self::new(columns, rows))
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// The cells of one column in row order.
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &Value> + '_> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| &row[index]))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The row at `index` as a field map, omitting null cells.
    pub fn record(&self, index: usize) -> Option<Map<String, Value>> {
        let row = self.rows.get(index)?;
        Some(
            self.columns
                .iter()
                .zip(row)
                .filter(|(_, cell)| !cell.is_null())
                .map(|(name, cell)| (name.clone(), cell.clone()))
                .collect(),
        )
    }
}

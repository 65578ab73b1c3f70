//! Raw tabular source access.
//!
//! NASA archive exports start with a `#`-prefixed comment preamble followed
//! by a header row and data rows. The reader skips the preamble, keeps one
//! shared header index and hands out string-keyed row views with safe
//! numeric coercion.

use std::collections::HashMap;
use std::io::Read;
use std::sync::Arc;

use super::error::{CatalogError, CatalogResult};

/// A parsed catalog file: header index plus data rows.
#[derive(Debug, Clone)]
pub struct RawTable {
    columns: Arc<HashMap<String, usize>>,
    rows: Vec<csv::StringRecord>,
}

impl RawTable {
    /// Parse CSV content from any reader, skipping `#` comment lines.
    pub fn from_reader<R: Read>(reader: R) -> CatalogResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .comment(Some(b'#'))
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let mut columns = HashMap::with_capacity(headers.len());
        for (index, name) in headers.iter().enumerate() {
            columns.insert(name.to_string(), index);
        }

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            rows.push(record?);
        }

        Ok(Self {
            columns: Arc::new(columns),
            rows,
        })
    }

    /// Parse CSV content held in memory. Used by tests and the batch
    /// prediction path.
    pub fn from_csv_str(content: &str) -> CatalogResult<Self> {
        Self::from_reader(content.as_bytes())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Column names in header order.
    pub fn column_names(&self) -> Vec<&str> {
        let mut names: Vec<(&str, usize)> = self
            .columns
            .iter()
            .map(|(name, index)| (name.as_str(), *index))
            .collect();
        names.sort_by_key(|(_, index)| *index);
        names.into_iter().map(|(name, _)| name).collect()
    }

    /// Fail with a `Malformed` error naming the first column that the
    /// header row does not carry.
    pub fn require_columns(&self, names: &[&str]) -> CatalogResult<()> {
        for name in names {
            if !self.has_column(name) {
                return Err(CatalogError::malformed(format!(
                    "expected column '{}' not present in source",
                    name
                )));
            }
        }
        Ok(())
    }

    pub fn rows(&self) -> impl Iterator<Item = RawRow<'_>> {
        self.rows.iter().map(move |record| RawRow {
            columns: &self.columns,
            record,
        })
    }
}

/// A borrowed view of one data row with string-keyed field access.
#[derive(Debug, Clone, Copy)]
pub struct RawRow<'a> {
    columns: &'a HashMap<String, usize>,
    record: &'a csv::StringRecord,
}

impl<'a> RawRow<'a> {
    /// Field value, `None` when the column is unknown or the cell is empty.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let index = *self.columns.get(column)?;
        match self.record.get(index) {
            Some(value) if !value.is_empty() => Some(value),
            _ => None,
        }
    }

    /// Owned field value.
    pub fn get_string(&self, column: &str) -> Option<String> {
        self.get(column).map(str::to_string)
    }

    /// Safe numeric coercion: missing, non-numeric or non-finite cells all
    /// yield `None`. Never panics.
    pub fn get_f64(&self, column: &str) -> Option<f64> {
        self.get(column)
            .and_then(|value| value.parse::<f64>().ok())
            .filter(|value| value.is_finite())
    }

    /// True when every named column holds a non-empty value.
    pub fn has_all(&self, columns: &[&str]) -> bool {
        columns.iter().all(|column| self.get(column).is_some())
    }
}

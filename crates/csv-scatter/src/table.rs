// File: crates/csv-scatter/src/table.rs
// Summary: One CSV file held as header-named columns of equal length.

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::PlotError;

/// Cells read as missing values rather than parse failures (a subset of pandas' defaults).
const NA_VALUES: &[&str] = &["", "NA", "N/A", "n/a", "#N/A", "NaN", "nan", "-nan", "null", "NULL", "None"];

#[derive(Debug)]
pub struct Table {
    path: PathBuf,
    headers: Vec<String>,
    rows: Vec<csv::StringRecord>,
}

impl Table {
    pub fn from_path(path: &Path) -> Result<Self, PlotError> {
        let file = std::fs::File::open(path).map_err(|source| PlotError::Open { path: path.to_path_buf(), source })?;
        Self::from_reader(path, file)
    }

    /// Parse CSV text from `reader`; `path` is only used in error messages.
    ///
    /// The first row names the columns. A shorter row reads its missing
    /// trailing cells as empty; a row longer than the header is an error.
    pub fn from_reader<R: Read>(path: impl Into<PathBuf>, reader: R) -> Result<Self, PlotError> {
        let path = path.into();
        let csv_err = |source| PlotError::Csv { path: path.clone(), source };

        let mut rdr = csv::ReaderBuilder::new().has_headers(true).flexible(true).from_reader(reader);
        let headers: Vec<String> = rdr.headers().map_err(csv_err)?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for (i, record) in rdr.records().enumerate() {
            let record = record.map_err(csv_err)?;
            if record.len() > headers.len() {
                return Err(PlotError::TooManyFields { path: path.clone(), row: i + 1, expected: headers.len(), found: record.len() });
            }
            rows.push(record);
        }

        Ok(Self { path, headers, rows })
    }

    pub fn headers(&self) -> &[String] { &self.headers }

    /// Number of data rows.
    pub fn len(&self) -> usize { self.rows.len() }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Position of the first column named exactly `name`.
    pub fn column_index(&self, name: &str) -> Result<usize, PlotError> {
        self.headers.iter().position(|h| h == name).ok_or_else(|| PlotError::MissingColumn {
            path: self.path.clone(),
            column: name.to_string(),
            available: self.headers.clone(),
        })
    }

    /// Raw cells of column `name`, in row order.
    pub fn column(&self, name: &str) -> Result<Vec<&str>, PlotError> {
        let idx = self.column_index(name)?;
        Ok(self.rows.iter().map(|r| r.get(idx).unwrap_or("")).collect())
    }

    /// Column `name` as numbers when every present cell parses, otherwise as text.
    ///
    /// Missing cells (empty or an NA token) become NaN in a numeric column.
    /// A text column cannot hold missing cells, so that combination is an error.
    pub fn values(&self, name: &str) -> Result<ColumnValues, PlotError> {
        let cells = self.column(name)?;
        let parsed: Vec<Cell> = cells.iter().map(|c| parse_cell(c)).collect();

        if !parsed.iter().any(|c| matches!(c, Cell::Text)) {
            let nums = parsed.iter().map(|c| if let Cell::Number(v) = c { *v } else { f64::NAN }).collect();
            return Ok(ColumnValues::Numeric(nums));
        }
        if let Some(i) = parsed.iter().position(|c| matches!(c, Cell::Missing)) {
            return Err(PlotError::MixedColumn { path: self.path.clone(), column: name.to_string(), row: i + 1 });
        }
        Ok(ColumnValues::Text(cells.into_iter().map(str::to_string).collect()))
    }
}

/// The cells of one column, in row order.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValues {
    Numeric(Vec<f64>),
    /// Raw cell text; placed on a categorical axis when plotted.
    Text(Vec<String>),
}

impl ColumnValues {
    pub fn len(&self) -> usize {
        match self {
            ColumnValues::Numeric(v) => v.len(),
            ColumnValues::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

enum Cell {
    Number(f64),
    Missing,
    Text,
}

fn parse_cell(cell: &str) -> Cell {
    let cell = cell.trim();
    if NA_VALUES.contains(&cell) {
        return Cell::Missing;
    }
    match cell.parse::<f64>() {
        Ok(v) => Cell::Number(v),
        Err(_) => Cell::Text,
    }
}

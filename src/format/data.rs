// ============================================================================
// Formatting Data Model
// Scalar / sequence / table inputs and their like-shaped outputs
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Cell
// ============================================================================

/// A single entry of a formatting input or output.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Cell {
    /// A numeric value (formatted when finite)
    Number(f64),
    /// Text, either a formatted result or a non-numeric input passed through
    Text(String),
    /// An absent value
    Missing,
}

impl Cell {
    /// Returns the number this cell formats, if any.
    ///
    /// NaN and infinities are treated like missing values and pass through.
    #[inline]
    pub fn as_finite(&self) -> Option<f64> {
        match self {
            Cell::Number(v) if v.is_finite() => Some(*v),
            _ => None,
        }
    }

    /// Returns the text of a `Text` cell.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Formats the cell with `f` when numeric, otherwise returns it unchanged.
    pub(crate) fn map_number<F>(&self, f: &F) -> Cell
    where
        F: Fn(f64) -> String,
    {
        match self.as_finite() {
            Some(v) => Cell::Text(f(v)),
            None => self.clone(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Number(v) => write!(f, "{v}"),
            Cell::Text(s) => f.write_str(s),
            Cell::Missing => f.write_str("None"),
        }
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Number(v)
    }
}

impl From<i64> for Cell {
    fn from(v: i64) -> Self {
        Cell::Number(v as f64)
    }
}

impl From<i32> for Cell {
    fn from(v: i32) -> Self {
        Cell::Number(f64::from(v))
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(v: Option<T>) -> Self {
        v.map_or(Cell::Missing, Into::into)
    }
}

// ============================================================================
// Table
// ============================================================================

/// Errors raised while assembling a [`Table`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A row does not have one cell per column
    RaggedRow { row: usize, expected: usize, found: usize },
    /// A column is shorter or longer than the first one
    RaggedColumn { column: String, expected: usize, found: usize },
    /// A column with this name already exists
    DuplicateColumn(String),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::RaggedRow {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} cells, expected {expected}"),
            TableError::RaggedColumn {
                column,
                expected,
                found,
            } => write!(f, "column '{column}' has {found} cells, expected {expected}"),
            TableError::DuplicateColumn(name) => write!(f, "duplicate column '{name}'"),
        }
    }
}

impl std::error::Error for TableError {}

/// Rows of cells under named columns.
///
/// Every row has exactly one cell per column.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Builds a table from column names and row-major cells.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Result<Self, TableError> {
        for (i, name) in columns.iter().enumerate() {
            if columns[..i].contains(name) {
                return Err(TableError::DuplicateColumn(name.clone()));
            }
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != columns.len() {
                return Err(TableError::RaggedRow {
                    row,
                    expected: columns.len(),
                    found: cells.len(),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    /// Builds a table from `(name, column cells)` pairs.
    pub fn from_columns<S, I>(columns: I) -> Result<Self, TableError>
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, Vec<Cell>)>,
    {
        let (names, cols): (Vec<String>, Vec<Vec<Cell>>) = columns
            .into_iter()
            .map(|(name, cells)| (name.into(), cells))
            .unzip();

        let height = cols.first().map_or(0, Vec::len);
        if let Some(idx) = cols.iter().position(|c| c.len() != height) {
            return Err(TableError::RaggedColumn {
                column: names[idx].clone(),
                expected: height,
                found: cols[idx].len(),
            });
        }

        let rows = (0..height)
            .map(|r| cols.iter().map(|c| c[r].clone()).collect())
            .collect();
        Self::new(names, rows)
    }

    #[inline]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[inline]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of rows and columns.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }

    /// Returns the cell at `row` in the named column.
    pub fn get(&self, row: usize, column: &str) -> Option<&Cell> {
        let col = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row).map(|cells| &cells[col])
    }

    /// Returns a copy of one column's cells.
    pub fn column(&self, column: &str) -> Option<Vec<Cell>> {
        let col = self.columns.iter().position(|c| c == column)?;
        Some(self.rows.iter().map(|cells| cells[col].clone()).collect())
    }

    /// Applies `f` to every cell, keeping column names and shape.
    pub(crate) fn map_cells<F>(&self, f: F) -> Table
    where
        F: Fn(&Cell) -> Cell,
    {
        Table {
            columns: self.columns.clone(),
            rows: self
                .rows
                .iter()
                .map(|cells| cells.iter().map(&f).collect())
                .collect(),
        }
    }
}

// ============================================================================
// Data
// ============================================================================

/// Formatting input or output, resolved by shape at the call boundary.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Data {
    Scalar(Cell),
    Sequence(Vec<Cell>),
    Table(Table),
}

impl Data {
    /// Returns the text of a scalar result.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Data::Scalar(cell) => cell.as_str(),
            _ => None,
        }
    }

    /// Consumes a scalar text result.
    pub fn into_string(self) -> Option<String> {
        match self {
            Data::Scalar(Cell::Text(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Cell]> {
        match self {
            Data::Sequence(cells) => Some(cells),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Data::Table(table) => Some(table),
            _ => None,
        }
    }

    /// Formats every numeric entry with `f`, preserving shape and passing
    /// non-numeric entries through.
    pub(crate) fn map_numbers<F>(&self, f: F) -> Data
    where
        F: Fn(f64) -> String,
    {
        match self {
            Data::Scalar(cell) => Data::Scalar(cell.map_number(&f)),
            Data::Sequence(cells) => {
                Data::Sequence(cells.iter().map(|c| c.map_number(&f)).collect())
            },
            Data::Table(table) => Data::Table(table.map_cells(|c| c.map_number(&f))),
        }
    }
}

impl From<Cell> for Data {
    fn from(cell: Cell) -> Self {
        Data::Scalar(cell)
    }
}

macro_rules! scalar_data_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Data {
                fn from(v: $ty) -> Self {
                    Data::Scalar(Cell::from(v))
                }
            }
        )*
    };
}

scalar_data_from!(f64, i64, i32, &str, String, Option<f64>, Option<&str>);

impl From<Vec<Cell>> for Data {
    fn from(cells: Vec<Cell>) -> Self {
        Data::Sequence(cells)
    }
}

impl From<Vec<f64>> for Data {
    fn from(values: Vec<f64>) -> Self {
        Data::Sequence(values.into_iter().map(Cell::Number).collect())
    }
}

impl From<&[f64]> for Data {
    fn from(values: &[f64]) -> Self {
        Data::Sequence(values.iter().copied().map(Cell::Number).collect())
    }
}

impl From<Table> for Data {
    fn from(table: Table) -> Self {
        Data::Table(table)
    }
}

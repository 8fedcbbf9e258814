use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};
use std::fmt;

/// Glyph used when rendering a `true` boolean cell.
pub const CHECK_GLYPH: &str = "✓";

/// Glyph used when rendering a `false` boolean cell.
pub const CROSS_GLYPH: &str = "✗";

/// Value type of a column, fixed by its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Deterministic text embedding row and column index
    Text,
    /// Pseudo-random integer in `[0, 1000)`
    Integer,
    /// Pseudo-random boolean
    Boolean,
    /// Deterministic text built from a row letter and column index
    Formatted,
}

impl CellKind {
    /// Kind of the column at `index` (0-based).
    pub fn for_column(index: usize) -> Self {
        match index % 4 {
            0 => Self::Text,
            1 => Self::Integer,
            2 => Self::Boolean,
            _ => Self::Formatted,
        }
    }

    /// Whether regenerating the dataset reproduces this kind's values.
    pub fn is_deterministic(self) -> bool {
        matches!(self, Self::Text | Self::Formatted)
    }
}

/// A single generated cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Integer(u32),
    Boolean(bool),
    Formatted(String),
}

impl CellValue {
    pub fn kind(&self) -> CellKind {
        match self {
            Self::Text(_) => CellKind::Text,
            Self::Integer(_) => CellKind::Integer,
            Self::Boolean(_) => CellKind::Boolean,
            Self::Formatted(_) => CellKind::Formatted,
        }
    }

    /// String shown to the user; also the sort key.
    pub fn display(&self) -> String {
        match self {
            Self::Text(s) | Self::Formatted(s) => s.clone(),
            Self::Integer(n) => n.to_string(),
            Self::Boolean(true) => CHECK_GLYPH.to_string(),
            Self::Boolean(false) => CROSS_GLYPH.to_string(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) | Self::Formatted(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(true) => f.write_str(CHECK_GLYPH),
            Self::Boolean(false) => f.write_str(CROSS_GLYPH),
        }
    }
}

/// A column identifier (`Column 1`, `Column 2`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// 0-based position
    pub index: usize,
    /// Unique identifier, also used as the header label
    pub name: String,
}

impl Column {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            name: format!("Column {}", index + 1),
        }
    }

    pub fn kind(&self) -> CellKind {
        CellKind::for_column(self.index)
    }
}

impl Serialize for Column {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}

/// Stable row identity, assigned once at generation time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RowId(String);

impl RowId {
    pub fn for_index(index: usize) -> Self {
        Self(format!("row-{index}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One generated row. Cells are stored in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: RowId,
    pub cells: Vec<CellValue>,
}

impl Row {
    pub fn cell(&self, column_index: usize) -> Option<&CellValue> {
        self.cells.get(column_index)
    }
}

/// The full logical dataset for one `(rowCount, columnCount)` configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Position of the column with the given identifier.
    pub fn column_index(&self, column_id: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == column_id)
    }

    /// Look up a cell by column identifier.
    pub fn value<'a>(&self, row: &'a Row, column_id: &str) -> Option<&'a CellValue> {
        self.column_index(column_id).and_then(|i| row.cell(i))
    }
}

/// A column-keyed record for one row: `{ "id": "row-0", "Column 1": ..., ... }`.
struct RowRecord<'a> {
    columns: &'a [Column],
    row: &'a Row,
}

impl Serialize for RowRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len() + 1))?;
        map.serialize_entry("id", &self.row.id)?;
        for (column, cell) in self.columns.iter().zip(&self.row.cells) {
            map.serialize_entry(&column.name, cell)?;
        }
        map.end()
    }
}

impl Serialize for Dataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let rows: Vec<RowRecord<'_>> = self
            .rows
            .iter()
            .map(|row| RowRecord {
                columns: &self.columns,
                row,
            })
            .collect();
        let mut state = serializer.serialize_struct("Dataset", 2)?;
        state.serialize_field("columns", &self.columns)?;
        state.serialize_field("rows", &rows)?;
        state.end()
    }
}

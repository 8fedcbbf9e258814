//! Synthetic dataset generation.
//!
//! Columns are generated first, then every row gets a stable `row-<index>`
//! identity and one value per column. The value type of a column depends
//! only on its index (`index % 4`); text columns are deterministic, integer
//! and boolean columns draw from the supplied random source.

mod types;

pub use types::*;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Exclusive upper bound for integer cells.
pub const INTEGER_CELL_MAX: u32 = 1000;

/// Generate `Column 1 … Column column_count`.
pub fn generate_columns(column_count: usize) -> Vec<Column> {
    (0..column_count).map(Column::new).collect()
}

/// Generate the value for one cell.
pub fn generate_cell<R: Rng + ?Sized>(row_index: usize, column: &Column, rng: &mut R) -> CellValue {
    match column.kind() {
        CellKind::Text => CellValue::Text(format!("{} Row {}", column.name, row_index + 1)),
        CellKind::Integer => CellValue::Integer(rng.gen_range(0..INTEGER_CELL_MAX)),
        CellKind::Boolean => CellValue::Boolean(rng.gen()),
        CellKind::Formatted => CellValue::Formatted(format!(
            "Item {}{}",
            row_letter(row_index),
            column.index + 1
        )),
    }
}

/// Letter `A..Z` cycling with the row index.
pub fn row_letter(row_index: usize) -> char {
    let offset = u8::try_from(row_index % 26).unwrap_or(0);
    char::from(b'A' + offset)
}

/// Generate the full dataset using the given random source.
pub fn generate<R: Rng + ?Sized>(row_count: usize, column_count: usize, rng: &mut R) -> Dataset {
    let columns = generate_columns(column_count);
    let rows = (0..row_count)
        .map(|row_index| Row {
            id: RowId::for_index(row_index),
            cells: columns
                .iter()
                .map(|column| generate_cell(row_index, column, rng))
                .collect(),
        })
        .collect();

    tracing::debug!(rows = row_count, columns = column_count, "generated dataset");

    Dataset { columns, rows }
}

/// Generate a reproducible dataset from a seed.
pub fn generate_seeded(row_count: usize, column_count: usize, seed: u64) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(row_count, column_count, &mut rng)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_column_names() {
        let columns = generate_columns(3);
        let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Column 1", "Column 2", "Column 3"]);
    }

    #[test]
    fn test_kind_cycles_every_four_columns() {
        let kinds: Vec<CellKind> = (0..8).map(CellKind::for_column).collect();
        assert_eq!(
            kinds,
            vec![
                CellKind::Text,
                CellKind::Integer,
                CellKind::Boolean,
                CellKind::Formatted,
                CellKind::Text,
                CellKind::Integer,
                CellKind::Boolean,
                CellKind::Formatted,
            ]
        );
    }

    #[test]
    fn test_text_cell_embeds_row_and_column() {
        let ds = generate_seeded(3, 1, 7);
        assert_eq!(ds.rows[2].cells[0], CellValue::Text("Column 1 Row 3".into()));
    }

    #[test]
    fn test_formatted_cell_uses_row_letter() {
        let ds = generate_seeded(28, 4, 7);
        assert_eq!(ds.rows[0].cells[3], CellValue::Formatted("Item A4".into()));
        assert_eq!(ds.rows[25].cells[3], CellValue::Formatted("Item Z4".into()));
        assert_eq!(ds.rows[27].cells[3], CellValue::Formatted("Item B4".into()));
    }

    #[test]
    fn test_row_letter_wraps() {
        assert_eq!(row_letter(0), 'A');
        assert_eq!(row_letter(25), 'Z');
        assert_eq!(row_letter(26), 'A');
    }

    #[test]
    fn test_boolean_display_glyphs() {
        assert_eq!(CellValue::Boolean(true).display(), "✓");
        assert_eq!(CellValue::Boolean(false).display(), "✗");
        assert_eq!(CellValue::Integer(42).to_string(), "42");
    }

    #[test]
    fn test_zero_counts() {
        let ds = generate_seeded(0, 0, 1);
        assert!(ds.columns.is_empty());
        assert!(ds.rows.is_empty());

        let ds = generate_seeded(4, 0, 1);
        assert_eq!(ds.row_count(), 4);
        assert!(ds.rows.iter().all(|r| r.cells.is_empty()));
    }

    #[test]
    fn test_same_seed_same_dataset() {
        assert_eq!(generate_seeded(50, 8, 99), generate_seeded(50, 8, 99));
    }

    #[test]
    fn test_value_lookup_by_column_id() {
        let ds = generate_seeded(2, 4, 3);
        let row = &ds.rows[1];
        assert_eq!(
            ds.value(row, "Column 1"),
            Some(&CellValue::Text("Column 1 Row 2".into()))
        );
        assert_eq!(ds.value(row, "Column 99"), None);
    }

    #[test]
    fn test_serialized_record_shape() {
        let ds = generate_seeded(1, 4, 5);
        let json = serde_json::to_value(&ds).unwrap();
        assert_eq!(json["columns"][0], "Column 1");
        let record = &json["rows"][0];
        assert_eq!(record["id"], "row-0");
        assert_eq!(record["Column 1"], "Column 1 Row 1");
        assert!(record["Column 2"].is_u64());
        assert!(record["Column 3"].is_boolean());
        assert_eq!(record["Column 4"], "Item A4");
    }
}

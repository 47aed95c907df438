//! Data grid layout: column order, widths and sorting.
//!
//! Columns are addressed by their index in the table's `columns`, so the
//! layout never touches the table itself. Sorting produces a row order; the
//! rows are never rearranged or rewritten.

use std::cmp::Ordering;

use serde_json::Value;

use crate::config::grid::{DEFAULT_COLUMN_WIDTH, MIN_COLUMN_WIDTH};
use crate::models::{CellKind, CsvTable, cell_text};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Active sort: a column index and a direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortColumn {
    pub column: usize,
    pub direction: SortDirection,
}

/// User-adjustable presentation of a table.
#[derive(Clone, Debug, PartialEq)]
pub struct GridLayout {
    order: Vec<usize>,
    widths: Vec<f64>,
    sort: Option<SortColumn>,
}

impl GridLayout {
    /// Layout for `column_count` columns in response order, unsorted.
    pub fn new(column_count: usize) -> Self {
        Self {
            order: (0..column_count).collect(),
            widths: vec![DEFAULT_COLUMN_WIDTH; column_count],
            sort: None,
        }
    }

    /// Column indices in display order.
    pub fn column_order(&self) -> &[usize] {
        &self.order
    }

    pub fn width(&self, column: usize) -> f64 {
        self.widths.get(column).copied().unwrap_or(DEFAULT_COLUMN_WIDTH)
    }

    pub fn sort(&self) -> Option<SortColumn> {
        self.sort
    }

    /// Set a column width, clamped to the minimum.
    pub fn resize(&mut self, column: usize, width: f64) {
        if let Some(w) = self.widths.get_mut(column) {
            *w = width.max(MIN_COLUMN_WIDTH);
        }
    }

    /// Move column `from` into the display slot currently held by `to`.
    pub fn move_column(&mut self, from: usize, to: usize) {
        if from == to {
            return;
        }
        let (Some(from_pos), Some(to_pos)) = (self.position(from), self.position(to)) else {
            return;
        };
        let moved = self.order.remove(from_pos);
        self.order.insert(to_pos, moved);
    }

    /// Cycle sorting on `column`: ascending, descending, unsorted.
    ///
    /// Switching to another column starts again at ascending.
    pub fn toggle_sort(&mut self, column: usize) {
        self.sort = match self.sort {
            Some(SortColumn {
                column: current,
                direction: SortDirection::Ascending,
            }) if current == column => Some(SortColumn {
                column,
                direction: SortDirection::Descending,
            }),
            Some(SortColumn {
                column: current,
                direction: SortDirection::Descending,
            }) if current == column => None,
            _ => Some(SortColumn {
                column,
                direction: SortDirection::Ascending,
            }),
        };
    }

    /// Indices of `table.rows` in display order.
    ///
    /// Unsorted tables keep response order. Sorting is stable, so equal cells
    /// keep their response order too.
    pub fn row_order(&self, table: &CsvTable) -> Vec<usize> {
        let mut rows: Vec<usize> = (0..table.rows.len()).collect();
        if let Some(SortColumn { column, direction }) = self.sort {
            rows.sort_by(|&a, &b| {
                let ord = compare_cells(table.cell(a, column), table.cell(b, column));
                match direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            });
        }
        rows
    }

    /// Header labels in display order.
    pub fn header_labels(&self, table: &CsvTable) -> Vec<String> {
        self.order
            .iter()
            .filter_map(|&c| table.columns.get(c).map(|info| info.name.clone()))
            .collect()
    }

    /// Body cells as displayed: rows in [`Self::row_order`], columns in
    /// display order, each cell as its kind and literal text.
    pub fn rendered_rows(&self, table: &CsvTable) -> Vec<Vec<(CellKind, String)>> {
        self.row_order(table)
            .into_iter()
            .map(|row| {
                self.order
                    .iter()
                    .map(|&column| {
                        let value = table.cell(row, column);
                        (CellKind::of(value), cell_text(value))
                    })
                    .collect()
            })
            .collect()
    }

    fn position(&self, column: usize) -> Option<usize> {
        self.order.iter().position(|&c| c == column)
    }
}

/// Total order over cell values.
///
/// Kinds order as empty < bool < number < text < nested. Within a kind,
/// numbers compare numerically, text lexically, nested values by their JSON
/// text.
pub fn compare_cells(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let (kind_a, kind_b) = (CellKind::of(a), CellKind::of(b));
    if kind_a != kind_b {
        return kind_a.cmp(&kind_b);
    }
    match (a, b) {
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let (x, y) = (x.as_f64().unwrap_or(0.0), y.as_f64().unwrap_or(0.0));
            x.total_cmp(&y)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(x @ (Value::Array(_) | Value::Object(_))), Some(y)) => {
            x.to_string().cmp(&y.to_string())
        }
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn products() -> CsvTable {
        serde_json::from_value(json!({
            "columns": [
                {"key": "id", "name": "ID"},
                {"key": "title", "name": "Title"},
                {"key": "price", "name": "Price"}
            ],
            "rows": [
                {"id": 1, "title": "Chair", "price": 500.0},
                {"id": 2, "title": "Table", "price": 200.0},
                {"id": 3, "title": "Bench", "price": 200.0},
                {"id": 4, "title": "Stool"}
            ]
        }))
        .unwrap()
    }

    fn titles(table: &CsvTable, order: &[usize]) -> Vec<String> {
        order.iter().map(|&r| cell_text(table.cell(r, 1))).collect()
    }

    fn texts(rows: Vec<Vec<(CellKind, String)>>) -> Vec<Vec<String>> {
        rows.into_iter()
            .map(|row| row.into_iter().map(|(_, text)| text).collect())
            .collect()
    }

    #[test]
    fn test_rendered_single_column_table() {
        let table: CsvTable = serde_json::from_value(json!({
            "columns": [{"key": "id", "name": "ID"}],
            "rows": [{"id": 1}, {"id": 2}]
        }))
        .unwrap();
        let layout = GridLayout::new(table.columns.len());

        assert_eq!(layout.header_labels(&table), vec!["ID"]);
        let rows = layout.rendered_rows(&table);
        assert_eq!(
            rows,
            vec![
                vec![(CellKind::Number, "1".to_string())],
                vec![(CellKind::Number, "2".to_string())]
            ]
        );
    }

    #[test]
    fn test_rendered_rows_follow_layout() {
        let table = products();
        let mut layout = GridLayout::new(table.columns.len());
        layout.move_column(1, 0);
        layout.toggle_sort(1);
        layout.toggle_sort(1);

        assert_eq!(layout.header_labels(&table), vec!["Title", "ID", "Price"]);
        let rows = texts(layout.rendered_rows(&table));
        assert_eq!(
            rows,
            vec![
                vec!["Table", "2", "200.0"],
                vec!["Stool", "4", ""],
                vec!["Chair", "1", "500.0"],
                vec!["Bench", "3", "200.0"],
            ]
        );
    }

    #[test]
    fn test_new_layout_keeps_response_order() {
        let table = products();
        let layout = GridLayout::new(table.columns.len());
        assert_eq!(layout.column_order(), &[0, 1, 2]);
        assert_eq!(layout.row_order(&table), vec![0, 1, 2, 3]);
        assert_eq!(layout.width(1), DEFAULT_COLUMN_WIDTH);
    }

    #[test]
    fn test_sort_cycle() {
        let mut layout = GridLayout::new(3);
        layout.toggle_sort(1);
        assert_eq!(layout.sort().unwrap().direction, SortDirection::Ascending);
        layout.toggle_sort(1);
        assert_eq!(layout.sort().unwrap().direction, SortDirection::Descending);
        layout.toggle_sort(1);
        assert_eq!(layout.sort(), None);

        layout.toggle_sort(1);
        layout.toggle_sort(2);
        assert_eq!(
            layout.sort(),
            Some(SortColumn {
                column: 2,
                direction: SortDirection::Ascending
            })
        );
    }

    #[test]
    fn test_sort_text() {
        let table = products();
        let mut layout = GridLayout::new(3);

        layout.toggle_sort(1);
        assert_eq!(
            titles(&table, &layout.row_order(&table)),
            vec!["Bench", "Chair", "Stool", "Table"]
        );

        layout.toggle_sort(1);
        assert_eq!(
            titles(&table, &layout.row_order(&table)),
            vec!["Table", "Stool", "Chair", "Bench"]
        );
    }

    #[test]
    fn test_sort_numbers_stable_with_missing_first() {
        let table = products();
        let mut layout = GridLayout::new(3);
        layout.toggle_sort(2);

        // Stool has no price; Table and Bench tie and keep response order
        assert_eq!(layout.row_order(&table), vec![3, 1, 2, 0]);
    }

    #[test]
    fn test_sort_leaves_table_untouched() {
        let table = products();
        let before = table.clone();
        let mut layout = GridLayout::new(3);
        layout.toggle_sort(0);
        layout.toggle_sort(0);
        let _ = layout.row_order(&table);
        assert_eq!(table, before);
    }

    #[test]
    fn test_move_column() {
        let mut layout = GridLayout::new(4);
        layout.move_column(0, 2);
        assert_eq!(layout.column_order(), &[1, 2, 0, 3]);
        layout.move_column(3, 1);
        assert_eq!(layout.column_order(), &[3, 1, 2, 0]);
        layout.move_column(2, 2);
        assert_eq!(layout.column_order(), &[3, 1, 2, 0]);
        layout.move_column(9, 0);
        assert_eq!(layout.column_order(), &[3, 1, 2, 0]);
    }

    #[test]
    fn test_resize_clamped() {
        let mut layout = GridLayout::new(2);
        layout.resize(0, 240.0);
        assert_eq!(layout.width(0), 240.0);
        layout.resize(0, 3.0);
        assert_eq!(layout.width(0), MIN_COLUMN_WIDTH);
        layout.resize(7, 300.0);
        assert_eq!(layout.width(7), DEFAULT_COLUMN_WIDTH);
    }

    #[test]
    fn test_compare_mixed_kinds() {
        let null = Value::Null;
        let yes = json!(true);
        let num = json!(10);
        let text = json!("10");
        let nested = json!([1]);

        assert_eq!(compare_cells(None, Some(&null)), Ordering::Equal);
        assert_eq!(compare_cells(Some(&null), Some(&yes)), Ordering::Less);
        assert_eq!(compare_cells(Some(&yes), Some(&num)), Ordering::Less);
        assert_eq!(compare_cells(Some(&num), Some(&text)), Ordering::Less);
        assert_eq!(compare_cells(Some(&text), Some(&nested)), Ordering::Less);
        assert_eq!(compare_cells(Some(&json!(2.5)), Some(&json!(10))), Ordering::Less);
        assert_eq!(compare_cells(Some(&json!("2")), Some(&json!("10"))), Ordering::Greater);
    }
}

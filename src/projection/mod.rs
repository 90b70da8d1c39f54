//! Table projection
//!
//! Shapes a leaderboard for display, or hands it back untouched when the
//! caller wants the numbers (charts, further computation). Never touches
//! the store.

use serde::Serialize;

use crate::aggregation::Dimension;
use crate::types::{Cell, Column, Leaderboard, RankedRow, SortSpec, Table};

/// Where a column's cell value comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellSource {
    /// The group key
    Key,
    /// A named auxiliary field
    Aux(&'static str),
    /// The group's event count
    Count,
}

impl CellSource {
    fn cell(&self, row: &RankedRow) -> Cell {
        match self {
            CellSource::Key => Cell::Text(row.key.clone()),
            CellSource::Aux(name) => Cell::Text(row.aux(name).to_string()),
            CellSource::Count => Cell::Count(row.count),
        }
    }
}

/// Static column definition
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub title: &'static str,
    pub width_percent: u8,
    pub source: CellSource,
}

impl ColumnSpec {
    pub const fn new(title: &'static str, width_percent: u8, source: CellSource) -> Self {
        Self {
            title,
            width_percent,
            source,
        }
    }
}

/// Fixed display shape of one dimension's table
#[derive(Debug, Clone, Copy)]
pub struct TableShape {
    pub title: &'static str,
    /// Column the table sorts by, descending
    pub sort_column: usize,
    pub columns: &'static [ColumnSpec],
}

impl TableShape {
    /// Build a table from ranked rows
    pub fn render(&self, result: &Leaderboard) -> Table {
        Table {
            title: self.title.to_string(),
            order: SortSpec::desc(self.sort_column),
            columns: self
                .columns
                .iter()
                .map(|c| Column::new(c.title, c.width_percent))
                .collect(),
            rows: result
                .iter()
                .map(|row| self.columns.iter().map(|c| c.source.cell(row)).collect())
                .collect(),
        }
    }
}

/// Either a display table or the raw ranked rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Projection {
    Table(Table),
    Rows(Leaderboard),
}

impl Projection {
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Projection::Table(table) => Some(table),
            Projection::Rows(_) => None,
        }
    }

    pub fn as_rows(&self) -> Option<&Leaderboard> {
        match self {
            Projection::Rows(rows) => Some(rows),
            Projection::Table(_) => None,
        }
    }
}

/// Shape `result` for `dimension`; `as_table = false` passes it through
pub fn project(result: Leaderboard, dimension: Dimension, as_table: bool) -> Projection {
    if !as_table {
        return Projection::Rows(result);
    }
    Projection::Table(dimension.descriptor().table.render(&result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SortDirection;

    fn mods_board() -> Leaderboard {
        Leaderboard::new(vec![
            RankedRow::new("Fancy Armor", 2)
                .with_aux("author", "Alice")
                .with_aux("url", "https://mods/1"),
            RankedRow::new("Better Swords", 1)
                .with_aux("author", "Bob")
                .with_aux("url", "https://mods/2"),
        ])
    }

    #[test]
    fn test_raw_projection_is_identity() {
        let board = mods_board();
        let projection = project(board.clone(), Dimension::Mods, false);
        assert_eq!(projection, Projection::Rows(board));
    }

    #[test]
    fn test_mods_table_shape() {
        let projection = project(mods_board(), Dimension::Mods, true);
        let table = projection.as_table().unwrap();

        assert_eq!(table.title, "Mods");
        assert_eq!(table.order, SortSpec::desc(2));
        assert_eq!(table.order.direction, SortDirection::Desc);
        let titles: Vec<_> = table.columns.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Mod", "Author", "Count"]);
        assert_eq!(
            table.rows[0],
            vec![Cell::from("Fancy Armor"), Cell::from("Alice"), Cell::from(2u64)]
        );
        assert_eq!(table.total_width(), 100);
        assert!(table.is_rectangular());
    }

    #[test]
    fn test_authors_and_requesters_tables() {
        let board = Leaderboard::new(vec![RankedRow::new("Alice", 3).with_aux("url", "https://a")]);

        let authors = project(board.clone(), Dimension::Authors, true);
        let table = authors.as_table().unwrap();
        assert_eq!(table.title, "Authors");
        assert_eq!(table.order, SortSpec::desc(1));
        assert_eq!(table.rows[0], vec![Cell::from("Alice"), Cell::from(3u64)]);

        let linkers = project(board, Dimension::Requesters, true);
        let table = linkers.as_table().unwrap();
        assert_eq!(table.title, "Linkers");
        assert_eq!(table.columns[0].title, "Redditor");
        assert_eq!(table.columns[0].width_percent, 80);
    }

    #[test]
    fn test_every_table_is_well_formed() {
        for dimension in Dimension::ALL {
            let table = project(mods_board(), dimension, true);
            let table = table.as_table().unwrap();
            assert_eq!(table.total_width(), 100);
            assert!(table.is_rectangular());
            assert_eq!(table.rows.len(), 2);
        }
    }

    #[test]
    fn test_empty_table_keeps_headers() {
        let projection = project(Leaderboard::default(), Dimension::Mods, true);
        let table = projection.as_table().unwrap();

        assert!(table.rows.is_empty());
        assert_eq!(table.columns.len(), 3);
    }

    #[test]
    fn test_projection_serializes_untagged() {
        let rows = serde_json::to_value(project(mods_board(), Dimension::Mods, false)).unwrap();
        assert!(rows.is_array());

        let table = serde_json::to_value(project(mods_board(), Dimension::Mods, true)).unwrap();
        assert_eq!(table["title"], "Mods");
        assert_eq!(table["rows"][1][2], 1);
    }
}

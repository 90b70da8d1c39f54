//! Renderer-agnostic display tables

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sort direction for a table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

/// Default ordering of a table
///
/// Serializes in the DataTables `order` form, `[[column, "direction"]]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<(usize, SortDirection)>", try_from = "Vec<(usize, SortDirection)>")]
pub struct SortSpec {
    /// Index into `Table::columns`
    pub column: usize,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn desc(column: usize) -> Self {
        Self {
            column,
            direction: SortDirection::Desc,
        }
    }
}

impl From<SortSpec> for Vec<(usize, SortDirection)> {
    fn from(spec: SortSpec) -> Self {
        vec![(spec.column, spec.direction)]
    }
}

impl TryFrom<Vec<(usize, SortDirection)>> for SortSpec {
    type Error = String;

    fn try_from(order: Vec<(usize, SortDirection)>) -> Result<Self, Self::Error> {
        match order.as_slice() {
            [(column, direction)] => Ok(Self {
                column: *column,
                direction: *direction,
            }),
            _ => Err(format!("expected a single sort column, got {}", order.len())),
        }
    }
}

/// Renders in the DataTables `order` form, e.g. `[[2, "desc"]]`
impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[[{}, \"{}\"]]", self.column, self.direction)
    }
}

/// Column header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub title: String,
    pub width_percent: u8,
}

impl Column {
    pub fn new(title: impl Into<String>, width_percent: u8) -> Self {
        Self {
            title: title.into(),
            width_percent,
        }
    }

    /// CSS width, e.g. `"50%"`
    pub fn width(&self) -> String {
        format!("{}%", self.width_percent)
    }
}

/// A single table cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Count(u64),
    Text(String),
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<u64> for Cell {
    fn from(value: u64) -> Self {
        Cell::Count(value)
    }
}

/// Columns plus rows, ready for any renderer
///
/// Every row holds exactly one cell per column and the column widths add
/// up to 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub title: String,
    pub order: SortSpec,
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Sum of all column widths
    pub fn total_width(&self) -> u32 {
        self.columns.iter().map(|c| c.width_percent as u32).sum()
    }

    /// Check that every row matches the column count
    pub fn is_rectangular(&self) -> bool {
        self.rows.iter().all(|row| row.len() == self.columns.len())
    }
}

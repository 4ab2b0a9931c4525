//! Report table model.
//!
//! A [`ReportTable`] is a format-agnostic grid: ordered column names plus
//! rows of scalar [`Cell`]s. Renderers (JSON, CSV) consume it unchanged.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{EngineError, EngineResult};

/// A single scalar value in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    /// No value.
    Empty,
    /// Whole number, such as a week index.
    Integer(i64),
    /// Hour figure.
    Hours(Decimal),
    /// Calendar date.
    Date(NaiveDate),
    /// Free text.
    Text(String),
}

impl Cell {
    /// Builds a text cell.
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// Builds an hour cell with trailing zeros stripped.
    pub fn hours(value: Decimal) -> Self {
        Cell::Hours(value.normalize())
    }

    /// Returns the hour figure, if this is an hour cell.
    pub fn as_hours(&self) -> Option<Decimal> {
        match self {
            Cell::Hours(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the text, if this is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Returns true for [`Cell::Empty`] and empty text.
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(value) => value.is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Integer(value) => write!(f, "{}", value),
            Cell::Hours(value) => write!(f, "{}", value),
            Cell::Date(value) => write!(f, "{}", value.format("%Y-%m-%d")),
            Cell::Text(value) => f.write_str(value),
        }
    }
}

/// A named table of ordered columns and rows of cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportTable {
    /// Table name, used as the sheet or file name by renderers.
    pub name: String,
    /// Column labels in display order. Labels may repeat.
    pub columns: Vec<String>,
    /// Rows, each with exactly one cell per column.
    pub rows: Vec<Vec<Cell>>,
}

impl ReportTable {
    /// Creates an empty table with the given columns.
    pub fn new<I, S>(name: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the row width does not match the columns.
    pub fn push_row(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.columns.len(), "row width mismatch");
        self.rows.push(row);
    }

    /// Returns true when the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first column with the given label.
    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == label)
    }

    /// Cell at `row` under the first column labelled `label`.
    pub fn cell(&self, row: usize, label: &str) -> Option<&Cell> {
        let column = self.column_index(label)?;
        self.rows.get(row)?.get(column)
    }
}

/// The five reports built from one schedule, plus run metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSet {
    /// Anchor Monday the week indices were counted from.
    pub anchor: Option<NaiveDate>,
    /// Number of week columns/blocks requested.
    pub week_count: u32,
    /// Number of non-blank lines that matched neither pattern.
    pub discarded_lines: usize,
    /// The report tables in fixed order.
    pub tables: Vec<ReportTable>,
}

impl ReportSet {
    /// Looks a table up by name.
    pub fn table(&self, name: &str) -> EngineResult<&ReportTable> {
        self.tables
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| EngineError::UnknownReport {
                name: name.to_string(),
            })
    }
}

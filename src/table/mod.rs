pub mod access;
pub mod error;
pub mod ranking;
pub mod schema;
pub mod value;

pub use access::{EMPTY_SCORE, ERROR_TEXT};
pub use error::TableError;
pub use schema::{Column, Schema, MAX_COLUMN_WIDTH};
pub use value::{DataType, Value, ROW_TERMINATOR};

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Capacity of a freshly created table
pub const DEFAULT_MAXIMUM_ENTRIES: usize = 5;

/// One row of the table: values in column order, rank key first.
pub type ScoreEntry = Vec<Value>;

/// Direction in which the rank key is sorted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum ScoreOrder {
    /// Biggest rank key first
    #[default]
    #[serde(rename = "high", alias = "highscore")]
    HighScore,
    /// Smallest rank key first (lap times, strokes, moves)
    #[serde(rename = "low", alias = "lowscore")]
    LowScore,
}

impl ScoreOrder {
    /// Whether `candidate` strictly outranks `stored`. Equal keys never do.
    pub fn is_better(self, candidate: i64, stored: i64) -> bool {
        match self {
            ScoreOrder::HighScore => candidate > stored,
            ScoreOrder::LowScore => candidate < stored,
        }
    }
}

impl fmt::Display for ScoreOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreOrder::HighScore => f.write_str("high score"),
            ScoreOrder::LowScore => f.write_str("low score"),
        }
    }
}

/// A bounded, ranked high score table.
///
/// The table owns its column schema and its rows. Rows are only ever added
/// through [`ScoreTable::add_score`], dropped by eviction, or removed all at
/// once by [`ScoreTable::clear_table`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreTable {
    order: ScoreOrder,
    maximum_entries: usize,
    schema: Schema,
    rows: Vec<ScoreEntry>,
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreTable {
    /// Create an empty high score table holding up to five entries
    pub fn new() -> Self {
        Self::with_order(ScoreOrder::HighScore)
    }

    pub fn with_order(order: ScoreOrder) -> Self {
        Self {
            order,
            maximum_entries: DEFAULT_MAXIMUM_ENTRIES,
            schema: Schema::new(),
            rows: Vec::new(),
        }
    }

    pub fn score_order(&self) -> ScoreOrder {
        self.order
    }

    /// Change the sort direction. Existing rows are not re-sorted.
    pub fn set_score_order(&mut self, order: ScoreOrder) {
        self.order = order;
    }

    pub fn maximum_entries(&self) -> usize {
        self.maximum_entries
    }

    /// Change the capacity. Surplus rows are evicted by the next [`ScoreTable::add_score`] call.
    pub fn set_maximum_entries(&mut self, maximum: usize) {
        self.maximum_entries = maximum;
    }

    /// Define a column from an example of its widest value.
    ///
    /// Returns true if the column was appended. Redefining an existing name
    /// is a no-op, and the schema is frozen once the table holds rows.
    pub fn define_column(&mut self, name: &str, example: impl Into<Value>) -> bool {
        if !self.rows.is_empty() {
            warn!(
                column = name,
                rows = self.rows.len(),
                "Refusing to define a column on a populated table"
            );
            return false;
        }
        self.schema.define_column(name, &example.into())
    }

    /// Index of a column by its normalized (upper-case) name
    pub fn name_exist(&self, name: &str) -> Option<usize> {
        self.schema.name_exist(name)
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Column definitions, for persisting the table
    pub fn column_details(&self) -> &[Column] {
        self.schema.columns()
    }

    /// Replace the column definitions. Only allowed while the table is empty.
    pub fn set_column_details(&mut self, columns: Vec<Column>) -> Result<(), TableError> {
        if !self.rows.is_empty() {
            return Err(TableError::SchemaLocked {
                rows: self.rows.len(),
            });
        }
        self.schema = Schema::from_columns(columns)?;
        Ok(())
    }

    /// Ranked rows, for persisting the table
    pub fn table_details(&self) -> &[ScoreEntry] {
        &self.rows
    }

    /// Replace the rows with previously persisted ones.
    ///
    /// Every row must match the schema, carry a numeric rank key, and the rows
    /// must already be in rank order and within capacity. On error the table
    /// is left unchanged.
    pub fn set_table_details(&mut self, rows: Vec<ScoreEntry>) -> Result<(), TableError> {
        if rows.len() > self.maximum_entries {
            return Err(TableError::CapacityExceeded {
                rows: rows.len(),
                maximum: self.maximum_entries,
            });
        }

        let mut previous: Option<i64> = None;
        for (row, entry) in rows.iter().enumerate() {
            if !self.score_valid(entry) {
                return Err(TableError::RowInvalid { row });
            }
            let key = entry[0]
                .rank_key()
                .ok_or(TableError::RankKeyMissing { row })?;
            if let Some(prev) = previous {
                if self.order.is_better(key, prev) {
                    return Err(TableError::OutOfOrder {
                        row,
                        order: self.order,
                    });
                }
            }
            previous = Some(key);
        }

        self.rows = rows;
        Ok(())
    }
}

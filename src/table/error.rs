use thiserror::Error;

use super::{DataType, ScoreOrder};

/// Errors raised when restoring or configuring a table.
///
/// Everyday operations (insertion, lookups, rendering) never fail; they
/// report problems through sentinel return values instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("invalid {data_type} value '{input}'")]
    InvalidValue { data_type: DataType, input: String },

    #[error("expected {expected} values, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("duplicate column name {name}")]
    DuplicateColumn { name: String },

    #[error("rank key column {name} must be numeric, found {data_type}")]
    RankKeyNotNumeric { name: String, data_type: DataType },

    #[error("column {name} is {width} characters wide, the limit is {maximum}")]
    ColumnTooWide {
        name: String,
        width: usize,
        maximum: usize,
    },

    #[error("schema cannot change while the table holds {rows} rows")]
    SchemaLocked { rows: usize },

    #[error("row {row} does not match the column schema")]
    RowInvalid { row: usize },

    #[error("row {row} has no numeric rank key")]
    RankKeyMissing { row: usize },

    #[error("row {row} is out of {order} order")]
    OutOfOrder { row: usize, order: ScoreOrder },

    #[error("{rows} rows exceed the maximum of {maximum} entries")]
    CapacityExceeded { rows: usize, maximum: usize },
}

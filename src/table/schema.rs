use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::TableError;
use super::value::{DataType, Value};

/// Widest alignment a column can ask for
pub const MAX_COLUMN_WIDTH: usize = 1 << 20;

/// A column of the score table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Column {
    /// Upper-case column name, unique within the schema
    pub name: String,
    /// Type tag every value in this column must carry (rank key excepted)
    pub data_type: DataType,
    /// Rendered width of the example value, used to align text output
    pub max_length: usize,
}

impl Column {
    /// Build a column from a name and an example of its widest value.
    /// The width is capped at [`MAX_COLUMN_WIDTH`].
    pub fn from_example(name: &str, example: &Value) -> Self {
        Self {
            name: name.to_uppercase(),
            data_type: example.data_type(),
            max_length: example.rendered_len().min(MAX_COLUMN_WIDTH),
        }
    }
}

/// Ordered set of columns. The first column is the rank key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a schema from stored column details, checking its invariants.
    ///
    /// Names are normalized to upper case and must be non-empty and unique.
    /// The first column must be numeric, and no width may exceed
    /// [`MAX_COLUMN_WIDTH`].
    pub fn from_columns(columns: Vec<Column>) -> Result<Self, TableError> {
        let mut schema = Self::new();
        for mut column in columns {
            column.name = column.name.to_uppercase();
            if column.name.is_empty() || schema.name_exist(&column.name).is_some() {
                return Err(TableError::DuplicateColumn { name: column.name });
            }
            if column.max_length > MAX_COLUMN_WIDTH {
                return Err(TableError::ColumnTooWide {
                    name: column.name,
                    width: column.max_length,
                    maximum: MAX_COLUMN_WIDTH,
                });
            }
            if schema.columns.is_empty() && !column.data_type.is_numeric() {
                return Err(TableError::RankKeyNotNumeric {
                    name: column.name,
                    data_type: column.data_type,
                });
            }
            schema.columns.push(column);
        }
        Ok(schema)
    }

    /// Append a column unless one with the same (case-insensitive) name exists.
    ///
    /// Returns true if a column was appended. The first column is the rank
    /// key, so a non-numeric example is refused while the schema is empty.
    pub fn define_column(&mut self, name: &str, example: &Value) -> bool {
        let column = Column::from_example(name, example);
        if column.name.is_empty() {
            warn!("Ignoring column with an empty name");
            return false;
        }
        if self.name_exist(&column.name).is_some() {
            return false;
        }
        if self.columns.is_empty() && !column.data_type.is_numeric() {
            warn!(
                column = %column.name,
                data_type = %column.data_type,
                "Rank key column must be numeric"
            );
            return false;
        }
        self.columns.push(column);
        true
    }

    /// Index of the column with exactly this (already normalized) name
    pub fn name_exist(&self, name: &str) -> Option<usize> {
        if name.is_empty() {
            return None;
        }
        self.columns.iter().position(|c| c.name == name)
    }

    /// Case-insensitive lookup, for callers holding a raw name
    pub fn find(&self, name: &str) -> Option<usize> {
        self.name_exist(&name.to_uppercase())
    }

    /// Parse one text field per column into a score entry
    pub fn parse_entry<S: AsRef<str>>(&self, fields: &[S]) -> Result<Vec<Value>, TableError> {
        if fields.len() != self.columns.len() {
            return Err(TableError::FieldCount {
                expected: self.columns.len(),
                found: fields.len(),
            });
        }
        self.columns
            .iter()
            .zip(fields)
            .map(|(column, field)| Value::parse_as(column.data_type, field.as_ref()))
            .collect()
    }

    pub fn get(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

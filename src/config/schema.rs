use serde::{Deserialize, Serialize};

use crate::table::{
    Column, DataType, ScoreOrder, ScoreTable, TableError, Value, DEFAULT_MAXIMUM_ENTRIES,
};

/// Table configuration.
///
/// Example YAML:
/// ```yaml
/// order: high
/// maximum_entries: 10
/// columns:
///   - { name: score, type: long, example: "1000000" }
///   - { name: name, type: text, example: "AAA" }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TableConfig {
    /// Sort direction: "high" (biggest first) or "low" (smallest first)
    #[serde(default)]
    pub order: ScoreOrder,

    /// How many scores the table keeps (default: 5)
    #[serde(default = "default_maximum_entries")]
    pub maximum_entries: usize,

    /// Columns in display order; the first one is the rank key
    pub columns: Vec<ColumnConfig>,
}

fn default_maximum_entries() -> usize {
    DEFAULT_MAXIMUM_ENTRIES
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            order: ScoreOrder::HighScore,
            maximum_entries: DEFAULT_MAXIMUM_ENTRIES,
            columns: vec![
                ColumnConfig {
                    name: "score".to_string(),
                    data_type: DataType::Long,
                    example: "1000000".to_string(),
                },
                ColumnConfig {
                    name: "name".to_string(),
                    data_type: DataType::Text,
                    example: "AAA".to_string(),
                },
                ColumnConfig {
                    name: "level".to_string(),
                    data_type: DataType::Int,
                    example: "99".to_string(),
                },
            ],
        }
    }
}

/// A column definition.
///
/// The example is the widest value the column is expected to hold; it sets
/// the column's alignment width.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ColumnConfig {
    pub name: String,

    #[serde(rename = "type")]
    pub data_type: DataType,

    pub example: String,
}

impl ColumnConfig {
    pub fn example_value(&self) -> Result<Value, TableError> {
        Value::parse_as(self.data_type, &self.example)
    }
}

impl TableConfig {
    /// Create an empty table with this configuration's schema
    pub fn build_table(&self) -> Result<ScoreTable, TableError> {
        let columns = self
            .columns
            .iter()
            .map(|c| -> Result<Column, TableError> {
                Ok(Column::from_example(&c.name, &c.example_value()?))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut table = ScoreTable::with_order(self.order);
        table.set_maximum_entries(self.maximum_entries);
        table.set_column_details(columns)?;
        Ok(table)
    }
}

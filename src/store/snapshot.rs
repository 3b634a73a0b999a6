use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::table::{Column, ScoreEntry, ScoreOrder, ScoreTable, TableError};

/// Current snapshot format version
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable copy of a table: its column details plus its ranked rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub order: ScoreOrder,
    pub maximum_entries: usize,
    pub columns: Vec<Column>,
    #[serde(default)]
    pub rows: Vec<ScoreEntry>,
}

impl TableSnapshot {
    /// Take a snapshot of the table as it is now
    pub fn capture(table: &ScoreTable) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            saved_at: Utc::now(),
            order: table.score_order(),
            maximum_entries: table.maximum_entries(),
            columns: table.column_details().to_vec(),
            rows: table.table_details().to_vec(),
        }
    }

    /// Rebuild the table, checking the rows against the stored schema
    pub fn restore(self) -> Result<ScoreTable, TableError> {
        let mut table = ScoreTable::with_order(self.order);
        table.set_maximum_entries(self.maximum_entries);
        table.set_column_details(self.columns)?;
        table.set_table_details(self.rows)?;
        Ok(table)
    }
}

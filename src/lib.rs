//! Schema-driven high score tables.
//!
//! A [`ScoreTable`] keeps a fixed number of score entries ranked by their
//! first column, either biggest first ([`ScoreOrder::HighScore`]) or smallest
//! first ([`ScoreOrder::LowScore`]). Entries are validated against the
//! table's column schema on insertion, and rows pushed past capacity are
//! evicted from the bottom.
//!
//! ```
//! use hiscore::{score_entry, ScoreTable};
//!
//! let mut table = ScoreTable::new();
//! table.set_maximum_entries(3);
//! table.define_column("score", 1000);
//! table.define_column("name", "H B");
//!
//! assert_eq!(table.add_score(score_entry![2000, "HB"]), Some(0));
//! assert_eq!(table.add_score(score_entry![1500, "ED"]), Some(1));
//! assert_eq!(table.to_string(), "RANK SCORE NAME~1    2000 HB~2    1500 ED~");
//! ```

pub mod config;
pub mod logging;
pub mod output;
pub mod store;
pub mod table;

pub use table::{
    Column, DataType, Schema, ScoreEntry, ScoreOrder, ScoreTable, TableError, Value, EMPTY_SCORE,
    ERROR_TEXT,
};

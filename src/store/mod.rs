pub mod snapshot;
pub mod storage;

pub use snapshot::{TableSnapshot, SNAPSHOT_VERSION};
pub use storage::{get_table_path, load_snapshot, load_table, save_snapshot, save_table};

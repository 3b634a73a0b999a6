use super::snapshot::{TableSnapshot, SNAPSHOT_VERSION};
use crate::config::TableConfig;
use crate::table::ScoreTable;
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Get the default table file path (~/.config/hiscore/table.json)
pub fn get_table_path() -> Result<PathBuf> {
    Ok(crate::config::get_config_dir()?.join("table.json"))
}

/// Load a table snapshot from a JSON file
///
/// Returns None if the file doesn't exist.
/// If the file exists but has an unsupported version, returns an error.
pub fn load_snapshot(path: &Path) -> Result<Option<TableSnapshot>> {
    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open table file at {}", path.display()))?;

    let snapshot: TableSnapshot =
        serde_json::from_reader(file).context("Failed to load table snapshot")?;

    if snapshot.version != SNAPSHOT_VERSION {
        anyhow::bail!("Unsupported table snapshot version: {}", snapshot.version);
    }

    Ok(Some(snapshot))
}

/// Save a table snapshot to a JSON file atomically
///
/// Creates the parent directory if it doesn't exist.
pub fn save_snapshot(path: &Path, snapshot: &TableSnapshot) -> Result<()> {
    crate::config::ensure_parent_dir(path)?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, snapshot)
        .context("Failed to serialize table snapshot")?;

    file.commit().context("Failed to save table snapshot")?;

    Ok(())
}

/// Load the persisted table, or build an empty one from the config.
///
/// A stored table keeps its own schema and order. The configured capacity
/// is applied on top; a smaller capacity takes effect on the next `add_score` call.
pub fn load_table(path: &Path, config: &TableConfig) -> Result<ScoreTable> {
    let Some(snapshot) = load_snapshot(path)? else {
        debug!(path = %path.display(), "No stored table, starting empty");
        return config
            .build_table()
            .context("Failed to build table from config");
    };

    let mut table = snapshot
        .restore()
        .with_context(|| format!("Stored table at {} is corrupt", path.display()))?;

    if table.score_order() != config.order {
        warn!(
            stored = %table.score_order(),
            configured = %config.order,
            "Stored table keeps its original order; clear it to apply the configured one"
        );
    }
    table.set_maximum_entries(config.maximum_entries);

    debug!(
        path = %path.display(),
        entries = table.entries(),
        "Loaded stored table"
    );
    Ok(table)
}

/// Snapshot the table and save it
pub fn save_table(path: &Path, table: &ScoreTable) -> Result<()> {
    save_snapshot(path, &TableSnapshot::capture(table))
}

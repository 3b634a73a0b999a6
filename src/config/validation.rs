use std::collections::HashSet;

use super::schema::TableConfig;

/// Validate table configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &TableConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.maximum_entries == 0 {
        errors.push("maximum_entries: must be at least 1".to_string());
    }

    if config.columns.is_empty() {
        errors.push("columns: at least one column is required".to_string());
    }

    let mut seen = HashSet::new();
    for (i, column) in config.columns.iter().enumerate() {
        if column.name.trim().is_empty() {
            errors.push(format!("columns[{}].name: must not be empty", i));
        } else if !seen.insert(column.name.to_uppercase()) {
            errors.push(format!(
                "columns[{}].name: duplicate column '{}'",
                i, column.name
            ));
        }

        if let Err(e) = column.example_value() {
            errors.push(format!("columns[{}].example: {}", i, e));
        }
    }

    if let Some(first) = config.columns.first() {
        if !first.data_type.is_numeric() {
            errors.push(format!(
                "columns[0].type: rank key must be int, long or float, found {}",
                first.data_type
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

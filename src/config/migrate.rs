//! Configuration file checks: detect fields added in newer releases and
//! fill them with their defaults.

use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Fields every configuration file is expected to carry.
pub const REQUIRED_FIELDS: &[&str] = &["base_url", "database", "default_role"];

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)?;
    let value: Value = serde_yaml::from_str(&content)?;
    Ok(match value {
        Value::Mapping(m) => m,
        _ => Mapping::new(),
    })
}

/// Return the names of required fields missing from the file at `path`.
pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
    if !path.exists() {
        return Ok(REQUIRED_FIELDS.to_vec());
    }

    let map = read_mapping(path)?;
    Ok(REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|f| !map.contains_key(Value::String((*f).to_string())))
        .collect())
}

/// Add any missing field with its default value, keeping existing ones.
/// Returns how many fields were added.
pub fn migrate_config(path: &Path) -> AppResult<usize> {
    let missing = missing_fields(path)?;
    if missing.is_empty() {
        info("Configuration is up to date.");
        return Ok(0);
    }

    let mut map = if path.exists() {
        read_mapping(path)?
    } else {
        Mapping::new()
    };

    let defaults = serde_yaml::to_value(Config::default())?;
    for field in &missing {
        let key = Value::String((*field).to_string());
        if let Some(v) = defaults.get(*field) {
            map.insert(key, v.clone());
        }
    }

    let yaml = serde_yaml::to_string(&Value::Mapping(map))?;
    fs::write(path, yaml)?;

    success(format!(
        "Configuration migrated: added {}",
        missing.join(", ")
    ));
    Ok(missing.len())
}

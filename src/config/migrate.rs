use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys every configuration file is expected to carry.
pub const EXPECTED_KEYS: &[&str] = &["backend", "data_path", "user_id", "log_level", "recent_limit"];

fn parse_mapping(content: &str) -> AppResult<Mapping> {
    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }
    match serde_yaml::from_str::<Value>(content)? {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(
            "configuration file is not a YAML mapping".into(),
        )),
    }
}

/// Keys from [`EXPECTED_KEYS`] that the given YAML text does not define.
pub fn missing_keys(content: &str) -> AppResult<Vec<&'static str>> {
    let map = parse_mapping(content)?;
    Ok(EXPECTED_KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(Value::String((*k).to_string())))
        .collect())
}

/// Add missing keys to the file at `path` with their default values.
/// Returns the keys that were written; an up-to-date file is left untouched.
pub fn add_missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    let content = if path.exists() {
        fs::read_to_string(path)?
    } else {
        String::new()
    };

    let mut map = parse_mapping(&content)?;
    let defaults = match serde_yaml::to_value(super::Config::default())? {
        Value::Mapping(m) => m,
        _ => Mapping::new(),
    };

    let mut added = Vec::new();
    for key in EXPECTED_KEYS {
        let k = Value::String((*key).to_string());
        if map.contains_key(&k) {
            continue;
        }
        if let Some(v) = defaults.get(&k) {
            map.insert(k, v.clone());
            added.push(*key);
        }
    }

    if added.is_empty() {
        return Ok(added);
    }

    let serialized = serde_yaml::to_string(&Value::Mapping(map))?;

    // Document the backend choice next to its key
    let mut new_content = String::new();
    for line in serialized.lines() {
        new_content.push_str(line);
        new_content.push('\n');
        if line.starts_with("backend:") {
            new_content.push_str(
                "# backend options:\n\
                 #   local  → one JSON file in data_path\n\
                 #   sqlite → rhabitlog.sqlite in data_path, rows scoped to user_id\n",
            );
        }
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, new_content)?;
    Ok(added)
}

//! Task store persistence.
//!
//! The whole collection lives in a single JSON object mapping lower-cased
//! task names to booleans, written with 2-space indentation. Loading reads
//! the entire file; saving rewrites it in full through a sibling temp file
//! that is renamed into place, so an interrupted write cannot truncate the
//! store.

use std::io::ErrorKind;
use std::path::Path;

use indexmap::IndexMap;

use crate::core::{TaskError, TaskList, normalize_name};

/// Loads the task collection from the JSON file at `path`.
///
/// Every key is lower-cased on the way in. Keys that collide after
/// lower-casing keep the first occurrence's position and the last
/// occurrence's value, following file order.
///
/// # Errors
///
/// * [`TaskError::FileNotFound`] if `path` does not exist.
/// * [`TaskError::MalformedData`] if the content is not a JSON object of
///   booleans.
/// * [`TaskError::Io`] for any other read failure.
pub fn load_tasks(path: &Path) -> Result<TaskList, TaskError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(TaskError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(err) => return Err(TaskError::Io(err)),
    };

    let raw: IndexMap<String, bool> = serde_json::from_str(&content)?;

    let mut tasks = TaskList::with_capacity(raw.len());
    for (name, done) in raw {
        tasks.insert(normalize_name(&name), done);
    }

    Ok(tasks)
}

/// Serializes `tasks` as pretty-printed JSON and replaces the file at `path`.
///
/// # Errors
///
/// Returns an error if serialization or any filesystem step fails.
pub fn dump_tasks(path: &Path, tasks: &TaskList) -> Result<(), TaskError> {
    let json = serde_json::to_string_pretty(tasks)?;

    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json)?;
    std::fs::rename(&tmp, path)?;

    Ok(())
}

/// Resets the store at `path` to an empty collection.
///
/// Used by the interactive loop to recover from a missing or corrupt file.
///
/// # Errors
///
/// Returns an error if the empty store cannot be written.
pub fn reset_store(path: &Path) -> Result<(), TaskError> {
    dump_tasks(path, &TaskList::new())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn store_path(dir: &TempDir) -> PathBuf {
        dir.path().join("tasks.json")
    }

    #[test]
    fn load_missing_file_is_file_not_found() -> Result<()> {
        let dir = TempDir::new()?;
        let path = store_path(&dir);

        let err = load_tasks(&path).unwrap_err();

        assert!(matches!(err, TaskError::FileNotFound { .. }));
        Ok(())
    }

    #[test]
    fn load_invalid_json_is_malformed_data() -> Result<()> {
        let dir = TempDir::new()?;
        let path = store_path(&dir);
        std::fs::write(&path, "{ definitely not json")?;

        let err = load_tasks(&path).unwrap_err();

        assert!(matches!(err, TaskError::MalformedData(_)));
        Ok(())
    }

    #[test]
    fn load_wrong_shape_is_malformed_data() -> Result<()> {
        let dir = TempDir::new()?;
        let path = store_path(&dir);
        std::fs::write(&path, r#"{"buy milk": "yes"}"#)?;

        let err = load_tasks(&path).unwrap_err();

        assert!(matches!(err, TaskError::MalformedData(_)));
        Ok(())
    }

    #[test]
    fn load_lower_cases_keys() -> Result<()> {
        let dir = TempDir::new()?;
        let path = store_path(&dir);
        std::fs::write(&path, r#"{"Buy Milk": false, "WRITE REPORT": true}"#)?;

        let tasks = load_tasks(&path)?;

        let names: Vec<&str> = tasks.keys().map(String::as_str).collect();
        assert_eq!(names, ["buy milk", "write report"]);
        assert_eq!(tasks.get("write report"), Some(&true));
        Ok(())
    }

    #[test]
    fn load_preserves_file_order() -> Result<()> {
        let dir = TempDir::new()?;
        let path = store_path(&dir);
        std::fs::write(&path, r#"{"zebra": false, "apple": true, "mango": false}"#)?;

        let tasks = load_tasks(&path)?;

        let names: Vec<&str> = tasks.keys().map(String::as_str).collect();
        assert_eq!(names, ["zebra", "apple", "mango"]);
        Ok(())
    }

    #[test]
    fn load_case_colliding_keys_keep_last_value_first_position() -> Result<()> {
        let dir = TempDir::new()?;
        let path = store_path(&dir);
        std::fs::write(
            &path,
            r#"{"Buy Milk": false, "errand": true, "BUY MILK": true}"#,
        )?;

        let tasks = load_tasks(&path)?;

        let names: Vec<&str> = tasks.keys().map(String::as_str).collect();
        assert_eq!(names, ["buy milk", "errand"]);
        assert_eq!(tasks.get("buy milk"), Some(&true));
        Ok(())
    }

    #[test]
    fn dump_then_load_round_trips_with_lower_cased_keys() -> Result<()> {
        let dir = TempDir::new()?;
        let path = store_path(&dir);
        let tasks: TaskList = [("buy milk".to_string(), false), ("errand".to_string(), true)]
            .into_iter()
            .collect();

        dump_tasks(&path, &tasks)?;
        let loaded = load_tasks(&path)?;

        assert_eq!(loaded, tasks);
        Ok(())
    }

    #[test]
    fn dump_writes_two_space_indented_object() -> Result<()> {
        let dir = TempDir::new()?;
        let path = store_path(&dir);
        let tasks: TaskList = [("buy milk".to_string(), false)].into_iter().collect();

        dump_tasks(&path, &tasks)?;

        let content = std::fs::read_to_string(&path)?;
        assert_eq!(content, "{\n  \"buy milk\": false\n}");
        Ok(())
    }

    #[test]
    fn dump_leaves_no_temp_file_behind() -> Result<()> {
        let dir = TempDir::new()?;
        let path = store_path(&dir);

        dump_tasks(&path, &TaskList::new())?;

        let entries: Vec<_> = std::fs::read_dir(dir.path())?
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(entries, ["tasks.json"]);
        Ok(())
    }

    #[test]
    fn dump_replaces_previous_content_in_full() -> Result<()> {
        let dir = TempDir::new()?;
        let path = store_path(&dir);
        let first: TaskList = [("old task".to_string(), true)].into_iter().collect();
        let second: TaskList = [("new task".to_string(), false)].into_iter().collect();

        dump_tasks(&path, &first)?;
        dump_tasks(&path, &second)?;

        assert_eq!(load_tasks(&path)?, second);
        Ok(())
    }

    #[test]
    fn reset_store_writes_empty_object() -> Result<()> {
        let dir = TempDir::new()?;
        let path = store_path(&dir);

        reset_store(&path)?;

        assert_eq!(std::fs::read_to_string(&path)?, "{}");
        assert!(load_tasks(&path)?.is_empty());
        Ok(())
    }
}

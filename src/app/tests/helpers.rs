//! Shared test utilities for the interactive loop.
//!
//! Loop tests run the whole app against a temp-dir store, feeding scripted
//! console input through an in-memory reader and capturing everything the
//! app writes.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::app::App;
use crate::core::TaskList;
use crate::fs::{dump_tasks, load_tasks};

/// Returns the store path used by loop tests inside `dir`.
pub fn store_path(dir: &TempDir) -> PathBuf {
    dir.path().join("tasks.json")
}

/// Creates a store file under `dir` seeded with the given tasks.
pub fn seed_store(dir: &TempDir, tasks: &[(&str, bool)]) -> PathBuf {
    let path = store_path(dir);
    let list: TaskList = tasks
        .iter()
        .map(|(name, done)| ((*name).to_string(), *done))
        .collect();
    dump_tasks(&path, &list).unwrap();
    path
}

/// Runs the app over `path`, feeding it `script` as console input.
///
/// Each line of the script answers one prompt. Returns everything the app
/// wrote to its output stream.
pub fn run_script(path: &Path, script: &str) -> String {
    let input = Cursor::new(script.to_string());
    let mut output = Vec::new();

    let mut app = App::new(path.to_path_buf(), input, &mut output);
    app.run().unwrap();

    String::from_utf8(output).unwrap()
}

/// Loads the store back for assertions.
pub fn read_store(path: &Path) -> TaskList {
    load_tasks(path).unwrap()
}

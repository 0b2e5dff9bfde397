//! CLI argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::fs::DEFAULT_STORE_FILE;

/// `Taskpad` - interactive task tracker
///
/// Tracks named tasks with a completion flag in a single JSON file and
/// edits them through a looping one-letter menu.
#[derive(Parser, Debug)]
#[command(name = "taskpad", version, about, long_about = None)]
pub struct Args {
    /// Path to the tasks JSON file
    #[arg(default_value = DEFAULT_STORE_FILE)]
    pub tasks_file: PathBuf,
}

//! File system layer: persistence of the task store.

pub mod store;

pub use store::{dump_tasks, load_tasks, reset_store};

/// Default store location, relative to the working directory.
pub const DEFAULT_STORE_FILE: &str = "tasks.json";

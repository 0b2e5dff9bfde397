//! Core domain logic: the task collection, its error taxonomy, name
//! validation, and the mutating operations.

pub mod error;
pub mod ops;
pub mod validate;

pub use error::TaskError;
pub use ops::{AddOutcome, ToggleOutcome, add_task, change_complete, remove_task};
pub use validate::{is_valid_name, normalize_name};

use indexmap::IndexMap;

/// The in-memory task collection.
///
/// Maps lower-cased task names to completion status. Insertion order is
/// preserved and is the only ordering the tool ever applies.
pub type TaskList = IndexMap<String, bool>;

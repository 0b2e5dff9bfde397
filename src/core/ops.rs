//! Mutating operations over the task collection.
//!
//! Each operation takes the store path together with the collection loaded
//! for the current cycle, applies its change in memory, and persists the
//! whole collection back to disk before reporting success. A failed
//! operation leaves both the collection and the file untouched.

use std::path::Path;

use crate::core::TaskList;
use crate::core::error::TaskError;
use crate::core::validate::{is_valid_name, normalize_name};
use crate::fs::store::dump_tasks;

/// Result of an add attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The task was inserted as incomplete and persisted.
    Added,
    /// Nothing changed: the name is already a key, or it failed validation.
    ///
    /// Invalid names report the same way as duplicates; the tool has always
    /// folded the two cases into one message.
    AlreadyExists,
}

/// Result of a completion toggle, carrying the task's new status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The task is now complete.
    Completed,
    /// The task is now incomplete.
    Uncompleted,
}

/// Adds a task with the given raw name, initialized as incomplete.
///
/// The name is lower-cased before validation and lookup, so a name that
/// differs from an existing key only in case counts as a duplicate.
///
/// # Errors
///
/// Returns an error only if persisting the updated collection fails.
pub fn add_task(path: &Path, tasks: &mut TaskList, name: &str) -> Result<AddOutcome, TaskError> {
    let name = normalize_name(name);

    if !is_valid_name(&name) || tasks.contains_key(&name) {
        return Ok(AddOutcome::AlreadyExists);
    }

    tasks.insert(name, false);
    dump_tasks(path, tasks)?;

    Ok(AddOutcome::Added)
}

/// Removes the task with the given raw name and persists the collection.
///
/// # Errors
///
/// * [`TaskError::InvalidInput`] if the raw name is blank.
/// * [`TaskError::NotFound`] if no task matches after normalization.
/// * [`TaskError::Io`] if persisting the updated collection fails.
pub fn remove_task(path: &Path, tasks: &mut TaskList, name: &str) -> Result<(), TaskError> {
    if !is_valid_name(name) {
        return Err(TaskError::InvalidInput);
    }

    let prev_len = tasks.len();
    let name = normalize_name(name);
    tasks.shift_remove(&name);

    // The no-op case is detected by comparing collection sizes before and
    // after the attempted deletion.
    if tasks.len() == prev_len {
        return Err(TaskError::NotFound { name });
    }

    dump_tasks(path, tasks)?;

    Ok(())
}

/// Flips the completion status of the task with the given raw name.
///
/// # Errors
///
/// * [`TaskError::InvalidInput`] if the raw name is blank.
/// * [`TaskError::NotFound`] if no task matches after normalization.
/// * [`TaskError::Io`] if persisting the updated collection fails.
pub fn change_complete(
    path: &Path,
    tasks: &mut TaskList,
    name: &str,
) -> Result<ToggleOutcome, TaskError> {
    if !is_valid_name(name) {
        return Err(TaskError::InvalidInput);
    }

    let name = normalize_name(name);
    let Some(status) = tasks.get_mut(&name) else {
        return Err(TaskError::NotFound { name });
    };

    *status = !*status;
    let outcome = if *status {
        ToggleOutcome::Completed
    } else {
        ToggleOutcome::Uncompleted
    };

    dump_tasks(path, tasks)?;

    Ok(outcome)
}

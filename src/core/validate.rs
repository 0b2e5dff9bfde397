//! Task name validation and normalization.

/// Returns true iff `name` is non-empty after trimming surrounding whitespace.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}

/// Lower-cases a task name for use as a store key.
///
/// Lower-casing is the only normalization applied; surrounding whitespace
/// is kept so that a stored key round-trips exactly as entered.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
}

//! Menu command parsing.

/// A parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    /// `l` - list tasks.
    List,
    /// `c` - change the status of a task.
    Change,
    /// `a` - add a task.
    Add,
    /// `r` - remove a task.
    Remove,
    /// `e` - end the program.
    End,
    /// Anything else.
    Unknown,
}

impl MenuCommand {
    /// Parses a raw menu line into a command.
    ///
    /// Matching is case-insensitive but otherwise exact: surrounding
    /// whitespace makes the line [`MenuCommand::Unknown`].
    #[must_use]
    pub fn parse(line: &str) -> Self {
        match line.to_lowercase().as_str() {
            "l" => Self::List,
            "c" => Self::Change,
            "a" => Self::Add,
            "r" => Self::Remove,
            "e" => Self::End,
            _ => Self::Unknown,
        }
    }
}

/// Returns true iff `line` is an explicit affirmative answer.
///
/// Only `y` (any case) confirms; everything else declines.
#[must_use]
pub fn is_affirmative(line: &str) -> bool {
    line.to_lowercase() == "y"
}

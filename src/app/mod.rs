//! Interactive menu loop.
//!
//! Each cycle reloads the collection from the store, prompts for a single
//! menu letter, and dispatches. Every store and task error is converted
//! into a user-facing message here and the loop continues; the only clean
//! exits are the confirmed `e` command and end-of-input on the console.
//!
//! Recovery policy per cycle:
//! - missing store file: a fresh empty file is created and the loop retries
//! - corrupt store file: the file is reset to an empty collection
//! - invalid or unknown task names: reported, nothing changes
//! - any other I/O failure: reported with its message, the loop retries

mod menu;
mod render;

#[cfg(test)]
mod tests;

pub use menu::{MenuCommand, is_affirmative};
pub use render::{DONE_GLYPH, OPEN_GLYPH, render_tasks};

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::core::{AddOutcome, TaskError, ToggleOutcome, add_task, change_complete, remove_task};
use crate::fs::{load_tasks, reset_store};

/// Menu text shown at the top of every cycle.
const MENU: &str = "\
What do you want to do?
    l - list tasks
    c - change status of a task
    a - add task
    r - remove task
    e - end program
> ";

/// Outcome of one menu cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cycle {
    /// Re-enter the loop and prompt again.
    Continue,
    /// Leave the loop; the user confirmed the end command or input ran out.
    Terminate,
}

/// The interactive application.
///
/// Generic over its input and output streams so tests can drive the loop
/// with in-memory buffers instead of the process console.
pub struct App<R, W> {
    store_path: PathBuf,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> App<R, W> {
    /// Creates an app over the given store path and I/O streams.
    #[must_use]
    pub fn new(store_path: PathBuf, input: R, output: W) -> Self {
        Self {
            store_path,
            input,
            output,
        }
    }

    /// Runs the menu loop until the user confirms the end command or the
    /// input stream is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error only if the console itself fails or the store
    /// cannot be recreated during recovery; every task operation error is
    /// reported to the user and the loop continues.
    pub fn run(&mut self) -> Result<()> {
        loop {
            if self.cycle()? == Cycle::Terminate {
                return Ok(());
            }
        }
    }

    /// Executes one full load/prompt/dispatch cycle.
    fn cycle(&mut self) -> Result<Cycle> {
        let mut tasks = match load_tasks(&self.store_path) {
            Ok(tasks) => tasks,
            Err(TaskError::FileNotFound { .. }) => {
                reset_store(&self.store_path).context("failed to create a fresh tasks file")?;
                writeln!(self.output, "New tasks file was created. Try again.")?;
                return Ok(Cycle::Continue);
            }
            Err(TaskError::MalformedData(_)) => {
                reset_store(&self.store_path).context("failed to reset the tasks file")?;
                writeln!(
                    self.output,
                    "There was something wrong with the tasks file. Tasks were reset. Try again."
                )?;
                return Ok(Cycle::Continue);
            }
            Err(err) => {
                self.report_error(&err)?;
                return Ok(Cycle::Continue);
            }
        };

        let Some(action) = self.prompt(MENU)? else {
            return Ok(Cycle::Terminate);
        };

        match MenuCommand::parse(&action) {
            MenuCommand::List => {
                writeln!(self.output, "CURRENT TASKS:")?;
                render_tasks(&mut self.output, &tasks)?;
            }
            MenuCommand::Change => {
                let Some(name) = self.prompt("Name of the task to change the status of: ")? else {
                    return Ok(Cycle::Terminate);
                };
                match change_complete(&self.store_path, &mut tasks, &name) {
                    Ok(ToggleOutcome::Completed) => {
                        writeln!(self.output, "Task changed to completed.")?;
                    }
                    Ok(ToggleOutcome::Uncompleted) => {
                        writeln!(self.output, "Task changed to uncompleted.")?;
                    }
                    Err(err) => self.report_error(&err)?,
                }
            }
            MenuCommand::Add => {
                let Some(name) = self.prompt("Name of a new task: ")? else {
                    return Ok(Cycle::Terminate);
                };
                match add_task(&self.store_path, &mut tasks, &name) {
                    Ok(AddOutcome::Added) => writeln!(self.output, "Task was added.")?,
                    Ok(AddOutcome::AlreadyExists) => {
                        writeln!(self.output, "Task already exists.")?;
                    }
                    Err(err) => self.report_error(&err)?,
                }
            }
            MenuCommand::Remove => {
                let Some(name) = self.prompt("Name of the task to remove: ")? else {
                    return Ok(Cycle::Terminate);
                };
                let Some(answer) = self.prompt("Are you sure? (y/n) ")? else {
                    return Ok(Cycle::Terminate);
                };
                if is_affirmative(&answer) {
                    match remove_task(&self.store_path, &mut tasks, &name) {
                        Ok(()) => writeln!(self.output, "Task removed.")?,
                        Err(err) => self.report_error(&err)?,
                    }
                }
            }
            MenuCommand::End => {
                let Some(answer) = self.prompt("Are you sure? (y/n) ")? else {
                    return Ok(Cycle::Terminate);
                };
                if is_affirmative(&answer) {
                    return Ok(Cycle::Terminate);
                }
            }
            MenuCommand::Unknown => {
                writeln!(self.output, "Wrong letter provided.")?;
            }
        }

        Ok(Cycle::Continue)
    }

    /// Writes `text`, flushes, and reads one line of input.
    ///
    /// Returns `None` when the input stream is exhausted. The trailing
    /// newline is stripped; nothing else is trimmed.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from the console")?;
        if read == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(Some(line))
    }

    /// Reports an operation error without leaving the loop.
    fn report_error(&mut self, err: &TaskError) -> Result<()> {
        match err {
            TaskError::InvalidInput => {
                writeln!(self.output, "Task name must be a unique, non-empty string.")?;
            }
            TaskError::NotFound { .. } => {
                writeln!(self.output, "Task not in tasks list.")?;
            }
            err => {
                writeln!(self.output, "Something went wrong. Try again.")?;
                writeln!(self.output, "Error code: {err}")?;
            }
        }
        Ok(())
    }
}

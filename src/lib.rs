//! `Taskpad` - interactive command-line task tracker.
//!
//! Persists named tasks with a completion flag to a single JSON file and
//! edits them through a looping one-letter menu.

pub mod app;
pub mod cli;
pub mod core;
pub mod fs;

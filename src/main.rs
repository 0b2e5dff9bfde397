//! `Taskpad` - interactive command-line task tracker.
//!
//! Entry point for the application.

use std::io;

use anyhow::Result;
use clap::Parser;

use taskpad::app::App;
use taskpad::cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    // Lock stdin once for the lifetime of the loop; every prompt is a
    // blocking line read, so there is nothing to share it with.
    let stdin = io::stdin();
    let mut app = App::new(args.tasks_file, stdin.lock(), io::stdout());

    app.run()
}

//! # CLI Behavior
//!
//! `contribs [OPTIONS] [USERNAME]`
//!
//! 1. Take the username from the argument, or prompt for it on stdin. A blank
//!    name or end of input stops the run.
//! 2. Fetch the record once, with the configured timeout.
//! 3. Print the rendered grid.
//!
//! Any error ends the run with `Error: ...` on stderr and exit status 1;
//! nothing is rendered after a failed fetch. Ctrl-C is reported as
//! `Cancelled.` with the same status.
//!
//! ## Module Structure
//!
//! - `commands`: `run()`, logging and interrupt setup
//! - `prompt`: Interactive username prompt
//! - `setup`: Argument parsing via clap

mod commands;
mod prompt;
pub mod setup;

use colored::Colorize;
use contribs::error::ContribsError;

pub use commands::run;

pub fn report(err: &ContribsError) {
    eprintln!("{} {}", "Error:".red(), err);
}

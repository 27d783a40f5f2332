//! Thin binary: all behavior lives in `cli::run()`; this file only maps an
//! error to a message on stderr and exit status 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        cli::report(&e);
        std::process::exit(1);
    }
}

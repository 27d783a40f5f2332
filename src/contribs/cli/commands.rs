use super::prompt::{normalize_username, prompt_username};
use super::setup::Cli;
use clap::Parser;
use contribs::error::Result;
use contribs::fetch::Fetcher;
use contribs::render::render;
use std::io::{self, IsTerminal};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    #[cfg(unix)]
    exit_on_interrupt()?;

    let username = match cli.username.as_deref() {
        Some(raw) => normalize_username(raw)?,
        None => prompt_username(&mut io::stdin().lock(), &mut io::stdout())?,
    };

    let fetcher = Fetcher::new(cli.fetch_config())?;
    debug!(base_url = %fetcher.config().base_url, "client ready");

    println!("Fetching contribution data for '{}'...", username);
    let record = fetcher.fetch(&username)?;
    info!(
        weeks = record.weeks.len(),
        total = record.total,
        "fetched contributions"
    );

    print!("{}", render(&record, cli.render_options()));
    Ok(())
}

/// Ctrl-C cancels the run the same way end of input does at the prompt: one
/// `Cancelled.` report on stderr and exit status 1.
#[cfg(unix)]
fn exit_on_interrupt() -> Result<()> {
    use contribs::error::ContribsError;
    use signal_hook::consts::SIGINT;
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGINT])?;
    std::thread::spawn(move || {
        if signals.forever().next().is_some() {
            debug!("interrupted");
            eprintln!();
            super::report(&ContribsError::Cancelled);
            std::process::exit(1);
        }
    });
    Ok(())
}

/// Logs go to stderr so stdout carries only the graph. `RUST_LOG` wins when
/// set; otherwise warnings, or debug output with `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

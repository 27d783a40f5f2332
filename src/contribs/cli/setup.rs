use clap::{Parser, ValueEnum};
use contribs::fetch::{FetchConfig, DEFAULT_BASE_URL};
use contribs::render::RenderOptions;
use std::io::IsTerminal;
use std::time::Duration;
use url::Url;

/// `0.1.0` for tagged release builds, `0.1.0@abc1234 2024-01-15 14:30` otherwise.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    static VERSION_STRING: std::sync::OnceLock<String> = std::sync::OnceLock::new();
    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn resolve(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Auto => is_terminal,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "contribs", bin_name = "contribs", version = get_version())]
#[command(about = "Show a GitHub user's contribution graph in the terminal", long_about = None)]
pub struct Cli {
    /// GitHub username (prompted for when omitted)
    pub username: Option<String>,

    /// Host serving `<username>.contribs`
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: Url,

    /// Request timeout in seconds
    #[arg(
        long,
        value_name = "SECS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// When to color the graph
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig::default()
            .with_base_url(self.base_url.clone())
            .with_timeout(Duration::from_secs(self.timeout))
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            color: self.color.resolve(std::io::stdout().is_terminal()),
        }
    }
}

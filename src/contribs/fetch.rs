//! # Fetching
//!
//! One blocking GET per run against `<base_url>/<username>.contribs`, with the
//! outcome sorted into [`ContribsError`] variants so the CLI can report it.
//! There are no retries: every failure here ends the run.

use crate::error::{ContribsError, Result};
use crate::model::ContributionRecord;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://github.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const ENDPOINT_SUFFIX: &str = ".contribs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub base_url: Url,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("contribs/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl FetchConfig {
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

pub struct Fetcher {
    client: Client,
    config: FetchConfig,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ContribsError::Transport(e.to_string()))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    pub fn endpoint(&self, username: &str) -> Result<Url> {
        endpoint_url(&self.config.base_url, username)
    }

    pub fn fetch(&self, username: &str) -> Result<ContributionRecord> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ContribsError::EmptyInput);
        }

        let url = self.endpoint(username)?;
        debug!(%url, timeout = ?self.config.timeout, "requesting contributions");

        let response = self.client.get(url).send().map_err(classify)?;
        let status = response.status();
        let body = response.text().map_err(classify)?;
        debug!(%status, bytes = body.len(), "received response");

        parse_body(username, status, &body)
    }
}

/// Fetches with the default configuration.
pub fn fetch(username: &str) -> Result<ContributionRecord> {
    Fetcher::new(FetchConfig::default())?.fetch(username)
}

/// Appends `<username>.contribs` to `base` as a single percent-encoded path
/// segment, so a username can never add segments, a query or a fragment.
pub fn endpoint_url(base: &Url, username: &str) -> Result<Url> {
    let mut url = base.clone();
    {
        let mut segments = url.path_segments_mut().map_err(|_| {
            ContribsError::Transport(format!("base URL '{}' cannot carry a path", base))
        })?;
        segments
            .pop_if_empty()
            .push(&format!("{}{}", username, ENDPOINT_SUFFIX));
    }
    Ok(url)
}

fn classify(err: reqwest::Error) -> ContribsError {
    if err.is_timeout() {
        warn!("request timed out");
        ContribsError::Timeout
    } else {
        warn!(error = %err, "request failed");
        ContribsError::Transport(err.to_string())
    }
}

/// Upstream signals an unknown user with a JSON `{"error": "..."}` body, which
/// takes precedence over the status code.
fn parse_body(username: &str, status: StatusCode, body: &str) -> Result<ContributionRecord> {
    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) if !status.is_success() => {
            return Err(ContribsError::Transport(format!("HTTP {}", status)));
        }
        Err(e) => return Err(ContribsError::MalformedResponse(e.to_string())),
    };

    if let Some(error) = value.get("error") {
        let message = error
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string());
        debug!(%message, "upstream reported an error");
        return Err(ContribsError::UserNotFound {
            username: username.to_string(),
            message,
        });
    }

    if !status.is_success() {
        return Err(ContribsError::Transport(format!("HTTP {}", status)));
    }

    ContributionRecord::from_value(value)
}

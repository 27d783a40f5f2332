//! # Contribs Architecture
//!
//! Contribs prints a user's public contribution calendar as a colored ASCII
//! grid. The crate is a small library with a thin CLI client on top, and the
//! split matters: everything in the library returns values, and only the CLI
//! knows about the terminal.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts for a username, sets up logs   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Fetch (fetch.rs)                                           │
//! │  - One blocking GET with a timeout, no retries              │
//! │  - Sorts every failure into a `ContribsError` variant       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model (model.rs)                                           │
//! │  - Validated `ContributionRecord`; bad levels, weekdays and │
//! │    month spans are rejected here, never in the renderer     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Render (render.rs + styles.rs)                             │
//! │  - Pure `record -> String` grid layout                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Library code never writes to stdout/stderr and never calls
//! `std::process::exit`. Diagnostics go through `tracing`; whoever embeds the
//! library decides where they end up.
//!
//! ## Testing Strategy
//!
//! - **Model / render / styles**: unit tests on hand-built JSON records. Layout
//!   is checked column by column, with and without color.
//! - **Fetch**: unit tests against a `wiremock` server.
//! - **CLI**: end-to-end tests in `tests/` that run the binary with
//!   `assert_cmd` against a `wiremock` server.
//!
//! ## Module Overview
//!
//! - [`fetch`]: HTTP client, endpoint URL building, failure classification
//! - [`model`]: `ContributionRecord` and its validated parts
//! - [`render`]: Grid layout
//! - [`styles`]: Density ramp (glyph and color per level)
//! - [`error`]: Error types
//! - `cli`: Argument parsing, prompt, logging setup (binary only)

pub mod error;
pub mod fetch;
pub mod model;
pub mod render;
pub mod styles;

pub use error::{ContribsError, Result};
pub use fetch::{fetch, FetchConfig, Fetcher};
pub use model::ContributionRecord;
pub use render::{render, RenderOptions};

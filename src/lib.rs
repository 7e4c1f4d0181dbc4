//! # Vodostaj
//!
//! A terminal water-level report for Serbian river stations.
//!
//! ## Architecture
//!
//! ```text
//! Fetcher / Archive → Normalizer → Report ← Snapshot store
//! ```
//!
//! - [`fetcher`]: HTTP download with streamed progress
//! - [`archive`]: date-stamped captures of every live retrieval
//! - [`normalizer`]: unwraps the bulletin feed into station readings
//! - [`report`]: merges readings with the previous snapshot into rows
//! - [`store`]: snapshot persistence with a single backup slot
//!
//! ## Quick Start
//!
//! ```bash
//! # Today's report for the default river group
//! vodostaj
//!
//! # Every station, from the capture before last
//! vodostaj 2 --all
//!
//! # Take a new comparison baseline
//! vodostaj --save
//!
//! # Charts for one station
//! vodostaj --charts NOVI_SAD
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together all
/// components: store, archive, fetcher, normalizer.
pub mod app;

/// Capture archive: offset-indexed access to past retrievals.
pub mod archive;

/// Station chart images over the iTerm2 inline-image protocol.
pub mod charts;

/// Command-line interface using clap.
///
/// One pipeline with mode flags: a history offset, `--list`, `--all`,
/// `--save`, `--restore`, `--charts`.
pub mod cli;

/// Configuration management.
///
/// Loads from `~/.config/vodostaj/config.toml`: feed URL, default river
/// group, data directory override, station chart ids.
pub mod config;

/// Core domain models.
///
/// - [`StationReading`](domain::StationReading): one parsed bulletin entry
/// - [`Snapshot`](domain::Snapshot): last-observed level per station
pub mod domain;

/// HTTP fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): async trait for payload fetching
/// - [`HttpFetcher`](fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// Bulletin parsing.
///
/// Unwraps the Atom payload and decomposes each entry's free-text title
/// and summary into a [`StationReading`](domain::StationReading).
pub mod normalizer;

/// The state-diffing report: a pure transform from readings plus the
/// previous snapshot to display rows and the updated snapshot.
pub mod report;

/// Snapshot persistence with backup rotation.
pub mod store;

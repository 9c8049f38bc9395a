//! Gotham Feeds
//!
//! Third-party data widgets and generated content, kept fresh in the
//! background.
//!
//! ## Key Concepts
//!
//! - **Slot**: a feed's single display value, replaced wholesale by each
//!   successful fetch ("last fetch wins")
//! - **FeedSource**: one upstream round plus response shaping
//! - **RefreshWorker**: one task per feed, fetching immediately and then on
//!   the feed's interval until shutdown
//! - **Fallback**: slots start on hardcoded content and keep the previous
//!   value when a fetch fails, leaving a notice for the page
//!
//! ## Upstreams
//!
//! CoinGecko, Alpha Vantage, disease.sh, WHO GHO, ClinicalTrials.gov and
//! Open Food Facts, plus the oracle for generated content. Every base URL
//! comes from [`FeedsConfig`].

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod feeds;
pub mod metrics;
pub mod slot;
pub mod source;
pub mod sources;
pub mod worker;

pub use config::FeedsConfig;
pub use error::FeedError;
pub use feeds::Feeds;
pub use metrics::FeedMetrics;
pub use slot::{Slot, Snapshot};
pub use source::FeedSource;
pub use worker::{refresh_once, RefreshWorker, SharedMetrics};

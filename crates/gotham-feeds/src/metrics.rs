//! Metrics collection for feed refreshes

use std::collections::BTreeMap;

/// Fetch counters per feed
///
/// Tracks successful and failed fetches by feed name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedMetrics {
    /// Successful fetches per feed
    pub succeeded: BTreeMap<String, usize>,

    /// Failed fetches per feed
    pub failed: BTreeMap<String, usize>,
}

impl FeedMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful fetch
    pub fn record_success(&mut self, feed: &str) {
        *self.succeeded.entry(feed.to_string()).or_insert(0) += 1;
    }

    /// Record a failed fetch
    pub fn record_failure(&mut self, feed: &str) {
        *self.failed.entry(feed.to_string()).or_insert(0) += 1;
    }

    /// Successful fetches for one feed
    pub fn successes(&self, feed: &str) -> usize {
        self.succeeded.get(feed).copied().unwrap_or(0)
    }

    /// Failed fetches for one feed
    pub fn failures(&self, feed: &str) -> usize {
        self.failed.get(feed).copied().unwrap_or(0)
    }

    /// Total successful fetches across all feeds
    pub fn total_succeeded(&self) -> usize {
        self.succeeded.values().sum()
    }

    /// Total failed fetches across all feeds
    pub fn total_failed(&self) -> usize {
        self.failed.values().sum()
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Feed Metrics Summary".to_string(),
            "====================".to_string(),
        ];

        let feeds: std::collections::BTreeSet<&String> =
            self.succeeded.keys().chain(self.failed.keys()).collect();
        for feed in feeds {
            lines.push(format!(
                "  {}: {} ok, {} failed",
                feed,
                self.successes(feed),
                self.failures(feed)
            ));
        }
        lines.push(format!(
            "  Total: {} ok, {} failed",
            self.total_succeeded(),
            self.total_failed()
        ));

        lines.join("\n")
    }
}

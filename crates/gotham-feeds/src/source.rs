//! The feed source seam

use crate::FeedError;
use async_trait::async_trait;

/// Something that can be fetched into a slot
///
/// Implementations do one upstream round and shape the response. They hold
/// no display state; the refresh worker decides what a failure means.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Shaped value the source produces
    type Output: Clone + Send + Sync + 'static;

    /// Feed name for logs and metrics
    fn name(&self) -> &'static str;

    /// Fetch and shape one value
    async fn fetch(&self) -> Result<Self::Output, FeedError>;
}

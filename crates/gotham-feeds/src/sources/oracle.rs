//! Generated content feeds backed by the oracle

use crate::{FeedError, FeedSource};
use async_trait::async_trait;
use gotham_domain::{ContentItem, WisdomKind};
use gotham_oracle::{FinanceTips, Oracle};

/// Card sets: justice quotes and health protocols
pub struct WisdomCardsSource {
    oracle: Oracle,
    kind: WisdomKind,
}

impl WisdomCardsSource {
    /// Create a source for a structured kind
    pub fn new(oracle: Oracle, kind: WisdomKind) -> Self {
        Self { oracle, kind }
    }
}

#[async_trait]
impl FeedSource for WisdomCardsSource {
    type Output = Vec<ContentItem>;

    fn name(&self) -> &'static str {
        self.kind.as_str()
    }

    async fn fetch(&self) -> Result<Vec<ContentItem>, FeedError> {
        Ok(self.oracle.cards(self.kind).await?)
    }
}

/// Finance tips for both tracks
pub struct FinanceTipsSource {
    oracle: Oracle,
}

impl FinanceTipsSource {
    /// Create the finance tips source
    pub fn new(oracle: Oracle) -> Self {
        Self { oracle }
    }
}

#[async_trait]
impl FeedSource for FinanceTipsSource {
    type Output = FinanceTips;

    fn name(&self) -> &'static str {
        WisdomKind::FinanceTips.as_str()
    }

    async fn fetch(&self) -> Result<FinanceTips, FeedError> {
        Ok(self.oracle.finance_tips().await?)
    }
}

/// Single-text content: daily wisdom and the two challenges
pub struct WisdomTextSource {
    oracle: Oracle,
    kind: WisdomKind,
}

impl WisdomTextSource {
    /// Create a source for a single-text kind
    pub fn new(oracle: Oracle, kind: WisdomKind) -> Self {
        Self { oracle, kind }
    }
}

#[async_trait]
impl FeedSource for WisdomTextSource {
    type Output = String;

    fn name(&self) -> &'static str {
        self.kind.as_str()
    }

    async fn fetch(&self) -> Result<String, FeedError> {
        Ok(self.oracle.text(self.kind).await?)
    }
}

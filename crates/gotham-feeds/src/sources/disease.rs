//! Global disease statistics from disease.sh

use super::http::{get_json, join};
use crate::{FeedError, FeedSource};
use async_trait::async_trait;
use gotham_domain::DiseaseSnapshot;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GlobalTotals {
    cases: u64,
    #[serde(default)]
    today_cases: u64,
    deaths: u64,
    #[serde(default)]
    recovered: u64,
    #[serde(default)]
    active: u64,
    #[serde(default)]
    affected_countries: u32,
    #[serde(default)]
    updated: u64,
}

impl From<GlobalTotals> for DiseaseSnapshot {
    fn from(t: GlobalTotals) -> Self {
        DiseaseSnapshot {
            cases: t.cases,
            today_cases: t.today_cases,
            deaths: t.deaths,
            recovered: t.recovered,
            active: t.active,
            affected_countries: t.affected_countries,
            updated_ms: t.updated,
        }
    }
}

/// Disease statistics widget source
pub struct DiseaseSource {
    client: reqwest::Client,
    base_url: String,
}

impl DiseaseSource {
    /// Create a source against the given API root
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl FeedSource for DiseaseSource {
    type Output = Option<DiseaseSnapshot>;

    fn name(&self) -> &'static str {
        "disease"
    }

    async fn fetch(&self) -> Result<Option<DiseaseSnapshot>, FeedError> {
        let request = self.client.get(join(&self.base_url, "v3/covid-19/all"));
        let totals: GlobalTotals = get_json(request).await?;
        Ok(Some(totals.into()))
    }
}

//! Health indicators from the WHO Global Health Observatory

use super::http::{get_json, join};
use crate::{FeedError, FeedSource};
use async_trait::async_trait;
use gotham_domain::HealthIndicator;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ODataPage {
    value: Vec<ODataRow>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ODataRow {
    indicator_code: String,
    spatial_dim: Option<String>,
    time_dim: Option<i32>,
    numeric_value: Option<f64>,
}

impl ODataRow {
    // Rows without a country, year or value carry nothing to show.
    fn into_indicator(self) -> Option<HealthIndicator> {
        Some(HealthIndicator {
            code: self.indicator_code,
            country: self.spatial_dim?,
            year: self.time_dim?,
            value: self.numeric_value?,
        })
    }
}

/// Health statistics widget source
pub struct WhoSource {
    client: reqwest::Client,
    base_url: String,
    indicator: String,
    top: usize,
}

impl WhoSource {
    /// Create a source for one indicator, keeping the `top` most recent rows
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        indicator: impl Into<String>,
        top: usize,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            indicator: indicator.into(),
            top,
        }
    }
}

#[async_trait]
impl FeedSource for WhoSource {
    type Output = Vec<HealthIndicator>;

    fn name(&self) -> &'static str {
        "who"
    }

    async fn fetch(&self) -> Result<Vec<HealthIndicator>, FeedError> {
        let top = self.top.to_string();
        let request = self
            .client
            .get(join(&self.base_url, &format!("api/{}", self.indicator)))
            .query(&[
                ("$filter", "SpatialDimType eq 'COUNTRY'"),
                ("$orderby", "TimeDim desc"),
                ("$top", top.as_str()),
            ]);

        let page: ODataPage = get_json(request).await?;
        Ok(page
            .value
            .into_iter()
            .filter_map(ODataRow::into_indicator)
            .collect())
    }
}

//! Crypto markets from CoinGecko

use super::http::{get_json, join};
use crate::{FeedError, FeedSource};
use async_trait::async_trait;
use gotham_domain::CoinQuote;
use serde::Deserialize;

/// One row of `/coins/markets`
#[derive(Debug, Deserialize)]
struct MarketRow {
    id: String,
    name: String,
    symbol: String,
    current_price: Option<f64>,
    price_change_percentage_24h: Option<f64>,
    market_cap: Option<f64>,
    total_volume: Option<f64>,
    #[serde(default)]
    image: String,
}

impl From<MarketRow> for CoinQuote {
    fn from(row: MarketRow) -> Self {
        CoinQuote {
            id: row.id,
            name: row.name,
            symbol: row.symbol.to_uppercase(),
            current_price: row.current_price.unwrap_or(0.0),
            change_24h_pct: row.price_change_percentage_24h,
            market_cap: row.market_cap.unwrap_or(0.0),
            total_volume: row.total_volume.unwrap_or(0.0),
            image: row.image,
        }
    }
}

/// Crypto markets widget source
pub struct CoinGeckoSource {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    ids: Vec<String>,
}

impl CoinGeckoSource {
    /// Create a source for the given coin ids
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: Option<String>,
        ids: Vec<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key,
            ids,
        }
    }
}

#[async_trait]
impl FeedSource for CoinGeckoSource {
    type Output = Vec<CoinQuote>;

    fn name(&self) -> &'static str {
        "crypto"
    }

    async fn fetch(&self) -> Result<Vec<CoinQuote>, FeedError> {
        let per_page = self.ids.len().to_string();
        let ids = self.ids.join(",");
        let mut request = self
            .client
            .get(join(&self.base_url, "coins/markets"))
            .query(&[
                ("vs_currency", "usd"),
                ("ids", ids.as_str()),
                ("order", "market_cap_desc"),
                ("per_page", per_page.as_str()),
                ("page", "1"),
                ("sparkline", "false"),
                ("price_change_percentage", "24h"),
            ]);
        if let Some(key) = &self.api_key {
            request = request.header("x-cg-demo-api-key", key);
        }

        let rows: Vec<MarketRow> = get_json(request).await?;
        Ok(rows.into_iter().map(CoinQuote::from).collect())
    }
}

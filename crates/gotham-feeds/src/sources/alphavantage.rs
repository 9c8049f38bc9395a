//! Stock, crypto and gold quotes from Alpha Vantage

use super::http::{get_json, join};
use crate::{FeedError, FeedSource};
use async_trait::async_trait;
use gotham_domain::{AssetQuote, AssetType};
use serde_json::Value;
use tracing::warn;

const GOLD_CODE: &str = "XAU";
const GOLD_SYMBOL: &str = "GOLD";

/// Market insights widget source
///
/// Each symbol is fetched on its own. Symbols that fail are dropped from
/// the list; the fetch fails only when every symbol does.
pub struct AlphaVantageSource {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    stocks: Vec<String>,
    cryptos: Vec<String>,
    include_gold: bool,
}

impl AlphaVantageSource {
    /// Create a source for the given symbols
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: Option<String>,
        stocks: Vec<String>,
        cryptos: Vec<String>,
        include_gold: bool,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key,
            stocks,
            cryptos,
            include_gold,
        }
    }

    async fn query(&self, api_key: &str, params: &[(&str, &str)]) -> Result<Value, FeedError> {
        let request = self
            .client
            .get(join(&self.base_url, "query"))
            .query(params)
            .query(&[("apikey", api_key)]);
        get_json(request).await
    }

    async fn stock_quote(&self, api_key: &str, symbol: &str) -> Result<AssetQuote, FeedError> {
        let body = self
            .query(api_key, &[("function", "GLOBAL_QUOTE"), ("symbol", symbol)])
            .await?;
        parse_global_quote(symbol, &body)
    }

    async fn exchange_quote(
        &self,
        api_key: &str,
        from: &str,
        symbol: &str,
        asset_type: AssetType,
    ) -> Result<AssetQuote, FeedError> {
        let body = self
            .query(
                api_key,
                &[
                    ("function", "CURRENCY_EXCHANGE_RATE"),
                    ("from_currency", from),
                    ("to_currency", "USD"),
                ],
            )
            .await?;
        let price = parse_exchange_rate(&body)?;
        Ok(AssetQuote::from_exchange_rate(symbol, price, asset_type))
    }
}

#[async_trait]
impl FeedSource for AlphaVantageSource {
    type Output = Vec<AssetQuote>;

    fn name(&self) -> &'static str {
        "markets"
    }

    async fn fetch(&self) -> Result<Vec<AssetQuote>, FeedError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| FeedError::Config("Alpha Vantage API key not configured".to_string()))?;

        let mut results = Vec::new();
        for symbol in &self.stocks {
            results.push((symbol.as_str(), self.stock_quote(api_key, symbol).await));
        }
        for symbol in &self.cryptos {
            let quote = self
                .exchange_quote(api_key, symbol, symbol, AssetType::Crypto)
                .await;
            results.push((symbol.as_str(), quote));
        }
        if self.include_gold {
            let quote = self
                .exchange_quote(api_key, GOLD_CODE, GOLD_SYMBOL, AssetType::Commodity)
                .await;
            results.push((GOLD_SYMBOL, quote));
        }

        let requested = results.len();
        let quotes: Vec<AssetQuote> = results
            .into_iter()
            .filter_map(|(symbol, result)| match result {
                Ok(quote) => Some(quote),
                Err(e) => {
                    warn!("Dropping {} from market insights: {}", symbol, e);
                    None
                }
            })
            .collect();

        if quotes.is_empty() && requested > 0 {
            return Err(FeedError::Upstream("No quotes returned".to_string()));
        }
        Ok(quotes)
    }
}

/// Read a `GLOBAL_QUOTE` body
fn parse_global_quote(symbol: &str, body: &Value) -> Result<AssetQuote, FeedError> {
    let quote = body
        .get("Global Quote")
        .and_then(Value::as_object)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| upstream_message(body, "missing 'Global Quote'"))?;

    let price = number_field(quote.get("05. price"), "05. price")?;
    let change = number_field(quote.get("09. change"), "09. change")?;
    let change_percent = quote
        .get("10. change percent")
        .and_then(Value::as_str)
        .unwrap_or("0.00%")
        .to_string();

    Ok(AssetQuote {
        symbol: symbol.to_string(),
        price,
        change,
        change_percent,
        asset_type: AssetType::Stock,
    })
}

/// Read a `CURRENCY_EXCHANGE_RATE` body
fn parse_exchange_rate(body: &Value) -> Result<f64, FeedError> {
    let rate = body
        .get("Realtime Currency Exchange Rate")
        .and_then(Value::as_object)
        .ok_or_else(|| upstream_message(body, "missing 'Realtime Currency Exchange Rate'"))?;
    number_field(rate.get("5. Exchange Rate"), "5. Exchange Rate")
}

fn number_field(value: Option<&Value>, name: &str) -> Result<f64, FeedError> {
    value
        .and_then(Value::as_str)
        .and_then(|s| s.trim().parse::<f64>().ok())
        .ok_or_else(|| FeedError::Parse(format!("invalid '{}'", name)))
}

// Rate limits come back as 200 with a "Note" or "Information" field.
fn upstream_message(body: &Value, default: &str) -> FeedError {
    let message = ["Note", "Information", "Error Message"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .unwrap_or(default);
    FeedError::Upstream(message.to_string())
}

//! Every widget slot and on-demand client the pages read

use crate::sources::{
    build_client, AlphaVantageSource, ClinicalTrialsClient, CoinGeckoSource, DiseaseSource,
    FinanceTipsSource, FoodClient, TrialsSource, WhoSource, WisdomCardsSource, WisdomTextSource,
};
use crate::{FeedError, FeedsConfig, RefreshWorker, SharedMetrics, Slot};
use gotham_domain::fallback;
use gotham_domain::{
    AssetQuote, CoinQuote, ContentItem, DiseaseSnapshot, HealthIndicator, TrialSummary, WisdomKind,
};
use gotham_oracle::{FinanceTips, Oracle};
use tracing::{info, warn};

/// Slots for every refreshed widget plus the on-demand lookups
///
/// Clones share slots. Build with [`Feeds::new`], which also returns the
/// worker that keeps the slots fresh.
#[derive(Clone)]
pub struct Feeds {
    /// CoinGecko markets
    pub crypto: Slot<Vec<CoinQuote>>,
    /// Alpha Vantage stock, crypto and gold quotes
    pub markets: Slot<Vec<AssetQuote>>,
    /// Global disease statistics
    pub disease: Slot<Option<DiseaseSnapshot>>,
    /// WHO health indicator rows
    pub indicators: Slot<Vec<HealthIndicator>>,
    /// Clinical trials listing
    pub trials: Slot<Vec<TrialSummary>>,
    /// Justice wisdom cards
    pub wisdom_quotes: Slot<Vec<ContentItem>>,
    /// Health protocol cards
    pub health_protocols: Slot<Vec<ContentItem>>,
    /// Finance tips for both tracks
    pub finance_tips: Slot<FinanceTips>,
    /// Daily justice challenge
    pub justice_challenge: Slot<String>,
    /// Daily health challenge
    pub health_challenge: Slot<String>,
    /// Daily Batman wisdom
    pub daily_wisdom: Slot<String>,
    /// Trial detail lookups
    pub trials_client: ClinicalTrialsClient,
    /// Nutrition lookups
    pub food_client: FoodClient,
    /// Fetch metrics shared with the worker
    pub metrics: SharedMetrics,
}

impl Feeds {
    /// Build every slot on its fallback and register its source
    pub fn new(config: &FeedsConfig, oracle: Oracle) -> Result<(Self, RefreshWorker), FeedError> {
        config.validate().map_err(FeedError::Config)?;

        let client = build_client(config.request_timeout())?;
        let mut worker = RefreshWorker::new();

        let trials_client = ClinicalTrialsClient::new(client.clone(), &config.trials_base_url);
        let food_client = FoodClient::new(client.clone(), &config.food_base_url, config.page_size);

        let feeds = Self {
            crypto: Slot::new("crypto", Vec::new(), "Failed to retrieve crypto market data"),
            markets: Slot::new("markets", Vec::new(), "Failed to retrieve market insights"),
            disease: Slot::new("disease", None, "Failed to retrieve disease statistics"),
            indicators: Slot::new("who", Vec::new(), "Failed to retrieve health statistics"),
            trials: Slot::new("trials", Vec::new(), "Failed to retrieve clinical trials"),
            wisdom_quotes: Slot::new(
                WisdomKind::WisdomQuotes.as_str(),
                fallback::wisdom_quotes(),
                "Failed to generate justice wisdom",
            ),
            health_protocols: Slot::new(
                WisdomKind::HealthProtocols.as_str(),
                fallback::health_protocols(),
                "Failed to generate health protocols",
            ),
            finance_tips: Slot::new(
                WisdomKind::FinanceTips.as_str(),
                FinanceTips::fallback(),
                "Failed to generate financial tips",
            ),
            justice_challenge: text_slot(WisdomKind::JusticeChallenge, "Failed to generate justice challenge"),
            health_challenge: text_slot(WisdomKind::HealthChallenge, "Failed to generate health challenge"),
            daily_wisdom: text_slot(WisdomKind::AskBatman, "Failed to generate Batman wisdom"),
            trials_client: trials_client.clone(),
            food_client,
            metrics: worker.metrics(),
        };

        let markets = config.market_interval();
        worker.register(
            CoinGeckoSource::new(
                client.clone(),
                &config.coingecko_base_url,
                config.coingecko_api_key.clone(),
                config.coin_ids.clone(),
            ),
            feeds.crypto.clone(),
            markets,
        );
        if config.alphavantage_api_key.is_some() {
            worker.register(
                AlphaVantageSource::new(
                    client.clone(),
                    &config.alphavantage_base_url,
                    config.alphavantage_api_key.clone(),
                    config.stock_symbols.clone(),
                    config.crypto_symbols.clone(),
                    config.include_gold,
                ),
                feeds.markets.clone(),
                markets,
            );
        } else {
            warn!("Alpha Vantage API key not configured; market insights stay empty");
        }

        let health = config.health_interval();
        worker.register(
            DiseaseSource::new(client.clone(), &config.disease_base_url),
            feeds.disease.clone(),
            health,
        );
        worker.register(
            WhoSource::new(client, &config.who_base_url, &config.who_indicator, config.page_size),
            feeds.indicators.clone(),
            health,
        );
        worker.register(
            TrialsSource::new(trials_client, &config.trials_query, config.page_size),
            feeds.trials.clone(),
            health,
        );

        let content = config.content_interval();
        for (kind, slot) in [
            (WisdomKind::WisdomQuotes, &feeds.wisdom_quotes),
            (WisdomKind::HealthProtocols, &feeds.health_protocols),
        ] {
            worker.register(WisdomCardsSource::new(oracle.clone(), kind), slot.clone(), content);
        }
        worker.register(
            FinanceTipsSource::new(oracle.clone()),
            feeds.finance_tips.clone(),
            content,
        );
        for (kind, slot) in [
            (WisdomKind::JusticeChallenge, &feeds.justice_challenge),
            (WisdomKind::HealthChallenge, &feeds.health_challenge),
            (WisdomKind::AskBatman, &feeds.daily_wisdom),
        ] {
            worker.register(WisdomTextSource::new(oracle.clone(), kind), slot.clone(), content);
        }

        info!("Registered {} feeds", worker.len());
        Ok((feeds, worker))
    }
}

fn text_slot(kind: WisdomKind, failure_notice: &str) -> Slot<String> {
    Slot::new(kind.as_str(), fallback::wisdom_text(kind).to_string(), failure_notice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gotham_llm::MockProvider;
    use gotham_oracle::OracleConfig;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::watch;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn oracle() -> Oracle {
        Oracle::new(Arc::new(MockProvider::failing()), OracleConfig::default())
    }

    #[test]
    fn test_slots_start_on_fallback() {
        let (feeds, worker) = Feeds::new(&FeedsConfig::default(), oracle()).unwrap();

        // No Alpha Vantage key, so its feed is skipped.
        assert_eq!(worker.len(), 10);
        assert_eq!(feeds.wisdom_quotes.get(), fallback::wisdom_quotes());
        assert_eq!(feeds.finance_tips.get(), FinanceTips::fallback());
        assert_eq!(
            feeds.health_challenge.get(),
            fallback::wisdom_text(WisdomKind::HealthChallenge)
        );
        assert!(feeds.crypto.get().is_empty());
        assert_eq!(feeds.disease.get(), None);
    }

    #[test]
    fn test_market_key_registers_quotes() {
        let config = FeedsConfig {
            alphavantage_api_key: Some("key".to_string()),
            ..Default::default()
        };
        let (_, worker) = Feeds::new(&config, oracle()).unwrap();
        assert_eq!(worker.len(), 11);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = FeedsConfig {
            page_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            Feeds::new(&config, oracle()),
            Err(FeedError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_failed_fetches_keep_fallback_with_notice() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3/covid-19/all"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "cases": 10, "deaths": 1, "recovered": 8
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let config = FeedsConfig::default().with_base_url(&server.uri());
        let (feeds, worker) = Feeds::new(&config, oracle()).unwrap();
        let (tx, shutdown) = watch::channel(false);
        let handles = worker.start(shutdown);

        // Wait until every feed has reported once.
        let expected = 10;
        for _ in 0..200 {
            let recorded = {
                let metrics = feeds.metrics.lock().unwrap();
                metrics.total_succeeded() + metrics.total_failed()
            };
            if recorded >= expected {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        tx.send(true).unwrap();
        for handle in handles {
            handle.await.unwrap();
        }

        let crypto = feeds.crypto.snapshot();
        assert!(crypto.value.is_empty());
        assert_eq!(crypto.notice.as_deref(), Some("Failed to retrieve crypto market data"));

        let quotes = feeds.wisdom_quotes.snapshot();
        assert_eq!(quotes.value, fallback::wisdom_quotes());
        assert!(!quotes.live);
        assert!(quotes.notice.is_some());

        let disease = feeds.disease.snapshot();
        assert!(disease.live);
        assert_eq!(disease.value.map(|d| d.cases), Some(10));
    }
}

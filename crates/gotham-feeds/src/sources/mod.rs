//! Feed sources and on-demand upstream clients
//!
//! Each upstream gets its own module; they share the HTTP helpers in
//! [`http`] and differ only in how responses are shaped.

pub mod alphavantage;
pub mod coingecko;
pub mod disease;
pub mod food;
pub mod http;
pub mod oracle;
pub mod trials;
pub mod who;

pub use alphavantage::AlphaVantageSource;
pub use coingecko::CoinGeckoSource;
pub use disease::DiseaseSource;
pub use food::FoodClient;
pub use http::build_client;
pub use oracle::{FinanceTipsSource, WisdomCardsSource, WisdomTextSource};
pub use trials::{is_valid_nct_id, ClinicalTrialsClient, TrialsSource};
pub use who::WhoSource;

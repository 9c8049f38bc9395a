//! Market snapshots - crypto markets and asset quotes

use crate::format;

/// One coin from the crypto markets listing
#[derive(Debug, Clone, PartialEq)]
pub struct CoinQuote {
    /// Provider id, e.g. "bitcoin"
    pub id: String,
    /// Display name
    pub name: String,
    /// Ticker, shown upper-case
    pub symbol: String,
    /// Price in USD
    pub current_price: f64,
    /// 24h change in percent, when the provider has one
    pub change_24h_pct: Option<f64>,
    /// Market capitalization in USD
    pub market_cap: f64,
    /// 24h traded volume in USD
    pub total_volume: f64,
    /// Logo URL
    pub image: String,
}

impl CoinQuote {
    /// Price formatted as currency
    pub fn price_display(&self) -> String {
        format::price(self.current_price)
    }

    /// Market cap with a T/B/M suffix
    pub fn market_cap_display(&self) -> String {
        format::market_cap(self.market_cap)
    }

    /// Signed 24h change, empty when unknown
    pub fn change_display(&self) -> String {
        self.change_24h_pct.map(format::signed_percent).unwrap_or_default()
    }

    /// Whether the 24h change is zero or positive
    pub fn is_positive(&self) -> bool {
        self.change_24h_pct.is_none_or(|pct| pct >= 0.0)
    }
}

/// Kind of tracked asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetType {
    /// Equity
    Stock,
    /// Cryptocurrency
    Crypto,
    /// Commodity (gold)
    Commodity,
}

impl AssetType {
    /// Get the asset type name
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Stock => "stock",
            AssetType::Crypto => "crypto",
            AssetType::Commodity => "commodity",
        }
    }
}

/// One quote on the market widget
#[derive(Debug, Clone, PartialEq)]
pub struct AssetQuote {
    /// Display symbol ("GOLD" for XAU)
    pub symbol: String,
    /// Last price in USD
    pub price: f64,
    /// Absolute change since previous close
    pub change: f64,
    /// Change in percent as reported, e.g. "1.2345%"
    pub change_percent: String,
    /// Kind of asset
    pub asset_type: AssetType,
}

impl AssetQuote {
    /// Exchange-rate quotes carry no change information
    pub fn from_exchange_rate(symbol: impl Into<String>, price: f64, asset_type: AssetType) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            change: 0.0,
            change_percent: "0.00%".to_string(),
            asset_type,
        }
    }

    /// Whether the change is zero or positive
    pub fn is_positive(&self) -> bool {
        self.change >= 0.0
    }

    /// Price with two decimals
    pub fn price_display(&self) -> String {
        format::fixed2(self.price)
    }

    /// Change with sign and two decimals
    pub fn change_display(&self) -> String {
        if self.is_positive() {
            format!("+{}", format::fixed2(self.change))
        } else {
            format::fixed2(self.change)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coin(change: Option<f64>) -> CoinQuote {
        CoinQuote {
            id: "bitcoin".to_string(),
            name: "Bitcoin".to_string(),
            symbol: "btc".to_string(),
            current_price: 64_250.5,
            change_24h_pct: change,
            market_cap: 1_264_000_000_000.0,
            total_volume: 30_000_000_000.0,
            image: String::new(),
        }
    }

    #[test]
    fn test_coin_displays() {
        let c = coin(Some(-1.234));
        assert_eq!(c.price_display(), "$64,250.50");
        assert_eq!(c.market_cap_display(), "$1.26T");
        assert_eq!(c.change_display(), "-1.23%");
        assert!(!c.is_positive());
    }

    #[test]
    fn test_coin_without_change() {
        let c = coin(None);
        assert_eq!(c.change_display(), "");
        assert!(c.is_positive());
    }

    #[test]
    fn test_exchange_rate_quote() {
        let q = AssetQuote::from_exchange_rate("GOLD", 2345.678, AssetType::Commodity);
        assert_eq!(q.price_display(), "2345.68");
        assert_eq!(q.change_display(), "+0.00");
        assert_eq!(q.change_percent, "0.00%");
        assert!(q.is_positive());
    }

    #[test]
    fn test_negative_stock_change() {
        let q = AssetQuote {
            symbol: "TSLA".to_string(),
            price: 180.0,
            change: -3.456,
            change_percent: "-1.8842%".to_string(),
            asset_type: AssetType::Stock,
        };
        assert_eq!(q.change_display(), "-3.46");
        assert!(!q.is_positive());
    }
}

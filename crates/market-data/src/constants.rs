//! API endpoints, asset universes, and poll cadence.

use std::time::Duration;

/// CoinGecko public API base URL.
pub const COINGECKO_API_BASE: &str = "https://api.coingecko.com/api/v3";

/// Binance public API base URL.
pub const BINANCE_API_BASE: &str = "https://api.binance.com/api/v3";

/// CryptoCompare news endpoint (popular, English, six items).
pub const CRYPTOCOMPARE_NEWS_URL: &str =
    "https://min-api.cryptocompare.com/data/v2/news/?lang=EN&sortOrder=popular&limit=6";

/// Crypto snapshots refresh on this interval.
pub const CRYPTO_REFRESH_INTERVAL: Duration = Duration::from_secs(20);

/// Stock snapshots refresh on this interval.
pub const STOCK_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Maximum number of news items returned by the aggregator.
pub const NEWS_LIMIT: usize = 6;

/// A Binance trading pair and its display identity.
pub struct CryptoPair {
    /// Binance symbol, e.g. "BTCUSDT"
    pub symbol: &'static str,
    /// Symbol shown to users, e.g. "BTC"
    pub display_symbol: &'static str,
    pub name: &'static str,
}

/// The fixed pair universe fetched from Binance.
pub const CRYPTO_PAIRS: &[CryptoPair] = &[
    CryptoPair { symbol: "BTCUSDT", display_symbol: "BTC", name: "Bitcoin" },
    CryptoPair { symbol: "ETHUSDT", display_symbol: "ETH", name: "Ethereum" },
    CryptoPair { symbol: "BNBUSDT", display_symbol: "BNB", name: "Binance Coin" },
    CryptoPair { symbol: "XRPUSDT", display_symbol: "XRP", name: "Ripple" },
    CryptoPair { symbol: "SOLUSDT", display_symbol: "SOL", name: "Solana" },
    CryptoPair { symbol: "ADAUSDT", display_symbol: "ADA", name: "Cardano" },
    CryptoPair { symbol: "DOTUSDT", display_symbol: "DOT", name: "Polkadot" },
    CryptoPair { symbol: "MATICUSDT", display_symbol: "MATIC", name: "Polygon" },
    CryptoPair { symbol: "DOGEUSDT", display_symbol: "DOGE", name: "Dogecoin" },
    CryptoPair { symbol: "SHIBUSDT", display_symbol: "SHIB", name: "Shiba Inu" },
];

/// A listed stock in the synthetic feed.
pub struct StockListing {
    /// NSE symbol, e.g. "RELIANCE"
    pub symbol: &'static str,
    pub name: &'static str,
    /// BSE scrip code shown as the ticker
    pub bse_code: &'static str,
}

/// Top Indian stocks served by the synthetic provider.
pub const INDIAN_STOCKS: &[StockListing] = &[
    StockListing { symbol: "RELIANCE", name: "Reliance Industries", bse_code: "500325" },
    StockListing { symbol: "TCS", name: "Tata Consultancy Services", bse_code: "532540" },
    StockListing { symbol: "HDFCBANK", name: "HDFC Bank", bse_code: "500180" },
    StockListing { symbol: "INFY", name: "Infosys", bse_code: "500209" },
    StockListing { symbol: "HINDUNILVR", name: "Hindustan Unilever", bse_code: "500696" },
    StockListing { symbol: "ICICIBANK", name: "ICICI Bank", bse_code: "532174" },
    StockListing { symbol: "SBIN", name: "State Bank of India", bse_code: "500112" },
    StockListing { symbol: "BHARTIARTL", name: "Bharti Airtel", bse_code: "532454" },
    StockListing { symbol: "ITC", name: "ITC", bse_code: "500875" },
    StockListing { symbol: "KOTAKBANK", name: "Kotak Mahindra Bank", bse_code: "500247" },
];
